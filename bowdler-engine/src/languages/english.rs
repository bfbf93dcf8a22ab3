//! English profanity list, including the leet spellings that circulate as
//! plain dictionary entries

/// The bundled word list
pub static WORDS: &[&str] = &[
    "anal",
    "anus",
    "arse",
    "arsehole",
    "ass",
    "asses",
    "asshole",
    "assholes",
    "bastard",
    "bellend",
    "bitch",
    "bitches",
    "bollocks",
    "boner",
    "boob",
    "boobs",
    "bugger",
    "bullshit",
    "clit",
    "cock",
    "cocks",
    "crap",
    "cum",
    "cunt",
    "cunts",
    "damn",
    "dick",
    "dickhead",
    "dildo",
    "douche",
    "douchebag",
    "dumbass",
    "dyke",
    "fag",
    "faggot",
    "fuck",
    "fucked",
    "fucker",
    "fucking",
    "goddamn",
    "handjob",
    "hell",
    "horseshit",
    "jackass",
    "jizz",
    "motherfucker",
    "motherfucking",
    "nigga",
    "nigger",
    "piss",
    "pissed",
    "prick",
    "pussy",
    "shit",
    "shitty",
    "slut",
    "sluts",
    "tits",
    "twat",
    "wank",
    "wanker",
    "whore",
    // Common obfuscated spellings kept as literal entries
    "b!tch",
    "f4ck",
    "fck",
    "fcuk",
    "fuk",
    "phuck",
    "sh1t",
    "sh!t",
];
