//! Spanish profanity list

/// The bundled word list
pub static WORDS: &[&str] = &[
    "boludo",
    "cabron",
    "cabrón",
    "capullo",
    "carajo",
    "chocho",
    "cojones",
    "concha",
    "coño",
    "culo",
    "gilipollas",
    "hostia",
    "joder",
    "jodido",
    "jódete",
    "maricon",
    "maricón",
    "mierda",
    "pelotudo",
    "pendejo",
    "pendeja",
    "picha",
    "polla",
    "puta",
    "puto",
    "putita",
    "teta",
    "tetas",
    "verga",
    "zorra",
];
