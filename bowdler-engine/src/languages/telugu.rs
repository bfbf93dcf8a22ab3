//! Telugu profanity list, native and romanized forms

/// The bundled word list
pub static WORDS: &[&str] = &[
    // Telugu script
    "పూకు",
    "దెంగు",
    "లంజ",
    "మొడ్డ",
    "గుద్ద",
    "సుల్లి",
    "లవడా",
    "బూతులు",
    "వెధవ",
    "నాకొడకా",
    // Romanized
    "boothulu",
    "dengu",
    "gudda",
    "lanja",
    "lavada",
    "lavda",
    "modda",
    "nakodaka",
    "pooku",
    "puku",
    "sulli",
    "vedhava",
];
