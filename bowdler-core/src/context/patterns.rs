//! Context rule templates
//!
//! Each template is a regex source holding a `__WORD__` slot. The analyzer
//! substitutes the escaped candidate word and compiles the result once per
//! word, so no regex is built in the per-match hot path.

/// Rule categories, ordered by evaluation priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    /// Clinical context where anatomical terms are appropriate
    Medical,
    /// Body-part context
    Anatomical,
    /// Negation words shortly before the candidate
    Negation,
    /// Candidate inside quoted speech
    Quotation,
    /// Capitalized name directly before the candidate
    ProperNoun,
    /// Possessive construction around the candidate
    Possessive,
    /// Article directly before the candidate
    Article,
    /// Candidate glued into a compound word
    Compound,
}

impl RuleKind {
    /// Lower evaluates first
    pub fn priority(self) -> u8 {
        match self {
            RuleKind::Medical => 1,
            RuleKind::Anatomical => 2,
            RuleKind::Negation => 3,
            RuleKind::Quotation => 4,
            RuleKind::ProperNoun => 5,
            RuleKind::Possessive => 6,
            RuleKind::Article => 7,
            RuleKind::Compound => 8,
        }
    }
}

/// Applies to every configured language
pub const ANY_LANGUAGE: &str = "*";

/// An uncompiled context rule
#[derive(Debug, Clone, Copy)]
pub struct RuleTemplate {
    /// Category, which also fixes evaluation priority
    pub kind: RuleKind,
    /// Regex source with a `__WORD__` slot
    pub template: &'static str,
    /// Score multiplier when the rule matches; below 1.0 reduces
    pub weight: f64,
    /// Compile with `(?i)`; the proper-noun rule needs real case
    pub case_insensitive: bool,
    /// Language codes this template applies to, or [`ANY_LANGUAGE`]
    pub languages: &'static [&'static str],
}

/// Templates that apply across languages
pub const UNIVERSAL_TEMPLATES: &[RuleTemplate] = &[
    RuleTemplate {
        kind: RuleKind::Negation,
        template: r"\b(?:not|don't|won't|can't|never|ne|pas|nicht|no|नहीं|不|non|niente|нет|nie)\b.{0,30}__WORD__",
        weight: 0.2,
        case_insensitive: true,
        languages: &[ANY_LANGUAGE],
    },
    RuleTemplate {
        kind: RuleKind::Possessive,
        template: r"\b\w+(?:'s|du|de|का|की|के|の|del|della|от|od)\s+__WORD__\b",
        weight: 0.4,
        case_insensitive: true,
        languages: &[ANY_LANGUAGE],
    },
    RuleTemplate {
        kind: RuleKind::Article,
        template: r"\b(?:the|a|an|le|la|les|un|une|der|die|das|ein|eine|el|los|las|il|lo|gli)\s+__WORD__\b",
        weight: 0.6,
        case_insensitive: true,
        languages: &[ANY_LANGUAGE],
    },
    RuleTemplate {
        kind: RuleKind::Compound,
        template: r"\b(?:smart|silly|cute|funny|little|big|old|new|good|bad|nice|sweet)\s*-?\s*__WORD__\b",
        weight: 0.5,
        case_insensitive: true,
        languages: &[ANY_LANGUAGE],
    },
    // A candidate glued into a longer word ("assassin", "classic") is far
    // more likely a false positive than profanity.
    RuleTemplate {
        kind: RuleKind::Compound,
        template: r"\w__WORD__|__WORD__\w",
        weight: 0.2,
        case_insensitive: true,
        languages: &[ANY_LANGUAGE],
    },
    RuleTemplate {
        kind: RuleKind::ProperNoun,
        template: r"\b[A-Z][a-z]+\s+__WORD__\b",
        weight: 0.3,
        case_insensitive: false,
        languages: &["en", "fr", "de", "es", "it"],
    },
    RuleTemplate {
        kind: RuleKind::Quotation,
        template: r#"["'«»„“‚’].*__WORD__.*["'«»„”‚’]"#,
        weight: 0.7,
        case_insensitive: true,
        languages: &[ANY_LANGUAGE],
    },
    RuleTemplate {
        kind: RuleKind::Medical,
        template: r"\b(?:medical|anatomy|doctor|hospital|clinic|patient|diagnosis|treatment|surgical|clinical)\b.{0,50}__WORD__",
        weight: 0.1,
        case_insensitive: true,
        languages: &[ANY_LANGUAGE],
    },
    RuleTemplate {
        kind: RuleKind::Anatomical,
        template: r"\b(?:body|part|muscle|bone|skin|tissue|organ|limb|extremity)\b.{0,30}__WORD__",
        weight: 0.3,
        case_insensitive: true,
        languages: &[ANY_LANGUAGE],
    },
];

const ENGLISH_TEMPLATES: &[RuleTemplate] = &[RuleTemplate {
    kind: RuleKind::Compound,
    template: r"\b(?:jack|dumb|smart|bad|kick)\s*-?\s*__WORD__\b",
    weight: 0.4,
    case_insensitive: true,
    languages: &["en"],
}];

const FRENCH_TEMPLATES: &[RuleTemplate] = &[RuleTemplate {
    kind: RuleKind::Negation,
    template: r"\b(?:ne|n'|pas|point|jamais|rien|personne)\b.{0,30}__WORD__",
    weight: 0.2,
    case_insensitive: true,
    languages: &["fr"],
}];

const GERMAN_TEMPLATES: &[RuleTemplate] = &[RuleTemplate {
    kind: RuleKind::Compound,
    template: r"__WORD__(?:kopf|zeug|ding|sache)\b",
    weight: 0.5,
    case_insensitive: true,
    languages: &["de"],
}];

const SPANISH_TEMPLATES: &[RuleTemplate] = &[RuleTemplate {
    kind: RuleKind::Possessive,
    template: r"\b(?:el|la|los|las)\s+__WORD__\s+(?:de|del|de la)\b",
    weight: 0.4,
    case_insensitive: true,
    languages: &["es"],
}];

/// Extra templates registered for a language code
pub fn language_templates(language: &str) -> &'static [RuleTemplate] {
    match language {
        "en" => ENGLISH_TEMPLATES,
        "fr" => FRENCH_TEMPLATES,
        "de" => GERMAN_TEMPLATES,
        "es" => SPANISH_TEMPLATES,
        _ => &[],
    }
}
