//! Bengali profanity list, native and romanized forms

/// The bundled word list
pub static WORDS: &[&str] = &[
    // Bengali script
    "বাল",
    "কুত্তার বাচ্চা",
    "হারামজাদা",
    "শালা",
    "শালি",
    "মাগি",
    "বেশ্যা",
    "খানকি",
    "চোদা",
    "মাদারচোদ",
    "কুত্তা",
    "হারামি",
    "বোকাচোদা",
    "গাণ্ডু",
    "ভোদা",
    // Romanized
    "bal",
    "beshya",
    "bokachoda",
    "choda",
    "chuda",
    "haramjada",
    "khanki",
    "khankimagi",
    "kuttar bachcha",
    "magi",
    "magir chele",
    "shala",
    "shali",
    "shuorer baccha",
];
