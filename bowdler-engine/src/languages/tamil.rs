//! Tamil profanity list, native and romanized forms

/// The bundled word list
pub static WORDS: &[&str] = &[
    // Tamil script
    "ஓத்தா",
    "தேவடியா",
    "கூதி",
    "புண்ட",
    "புண்டை",
    "மயிரு",
    "சுன்னி",
    "தாயோளி",
    "பொறுக்கி",
    "ஊம்பு",
    // Romanized
    "koothi",
    "mayiru",
    "oombu",
    "otha",
    "porukki",
    "pottai",
    "punda",
    "pundai",
    "sunni",
    "thayoli",
    "thevidiya",
];
