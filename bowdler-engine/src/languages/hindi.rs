//! Hindi/Hinglish profanity list, Devanagari and Roman scripts

/// The bundled word list
pub static WORDS: &[&str] = &[
    // Roman script
    "bakchod",
    "behanchod",
    "behen chod",
    "behenchod",
    "bhanchod",
    "bhen chod",
    "bhenchod",
    "bhosdike",
    "bc",
    "bkl",
    "chod",
    "chodu",
    "chutia",
    "chutiya",
    "chutiyapa",
    "gaandu",
    "gandu",
    "gandoo",
    "harami",
    "haramzada",
    "kamina",
    "kutta",
    "kutte",
    "lauda",
    "loda",
    "lund",
    "madarchod",
    "maderchod",
    "madarjaat",
    "mc",
    "randi",
    "rendi",
    "saala",
    // Devanagari script
    "भड़वा",
    "भोसड़ी",
    "बहन चोद",
    "भेन चोद",
    "चूतिया",
    "हरामी",
    "हरामज़ादा",
    "कमीना",
    "लंड",
    "लौड़ा",
    "रंडी",
    "साला",
    "मादरचोद",
];
