//! French profanity list

/// The bundled word list
pub static WORDS: &[&str] = &[
    "baiser",
    "bite",
    "bordel",
    "branleur",
    "chatte",
    "chier",
    "con",
    "connard",
    "connasse",
    "conne",
    "connerie",
    "couilles",
    "cul",
    "emmerder",
    "emmerdeur",
    "enculé",
    "enculée",
    "enfoiré",
    "fils de pute",
    "foutre",
    "gueule",
    "merde",
    "merdeux",
    "merdique",
    "niquer",
    "pisser",
    "pute",
    "putain",
    "salaud",
    "salope",
    "ta gueule",
];
