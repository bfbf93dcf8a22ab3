//! German profanity list

/// The bundled word list
pub static WORDS: &[&str] = &[
    "arsch",
    "arschgeige",
    "arschkriecher",
    "arschloch",
    "bescheuert",
    "beschissen",
    "fick",
    "ficken",
    "fotze",
    "hure",
    "hurensohn",
    "kacke",
    "missgeburt",
    "mist",
    "muschi",
    "pimmel",
    "scheisse",
    "scheiße",
    "schlampe",
    "schwanz",
    "titten",
    "verarschen",
    "verdammt",
    "verfickt",
    "wichser",
    "wichsen",
];
