//! Engine configuration and dictionary-management tests

use std::sync::Arc;

use bowdler_engine::{
    ConfigPatch, ContextConfig, DictionaryProvider, EngineError, ProfanityEngine,
};

#[test]
fn default_engine_loads_english_and_hindi() {
    let engine = ProfanityEngine::new();
    let loaded = engine.loaded_languages();
    assert_eq!(loaded, vec!["english", "hindi"]);

    let words = engine.words();
    assert!(words.iter().any(|w| w == "bullshit"));
    assert!(words.iter().any(|w| w == "चूतिया"));
}

#[test]
fn unknown_language_returns_false_without_erroring() {
    let mut engine = ProfanityEngine::new();
    assert!(!engine.load_language("klingon"));
    assert!(!engine.load_language("   "));
}

#[test]
fn loading_an_already_loaded_language_is_true() {
    let mut engine = ProfanityEngine::new();
    assert!(engine.load_language("english"));
}

#[test]
fn load_languages_counts_successes() {
    let mut engine = ProfanityEngine::new();
    let loaded = engine.load_languages(["french", "german", "klingon"]);
    assert_eq!(loaded, 2);
    assert!(engine.check("quelle merde"));
    assert!(engine.check("so eine scheiße"));
}

#[test]
fn load_indian_languages_covers_all_four() {
    let mut engine = ProfanityEngine::new();
    assert_eq!(engine.load_indian_languages(), 4);
    assert!(engine.check("வந்த கூதி பேச்சு"));
    assert!(engine.check("అది లంజ మాట"));
}

#[test]
fn custom_dictionaries_register_and_load() {
    let mut engine = ProfanityEngine::new();
    let added = engine.load_custom_dictionary("gaming", ["noobpwner", "rekt"]);
    assert_eq!(added, 2);
    assert!(engine.check("you noobpwner!"));
    assert!(engine.available_languages().contains(&"gaming".to_string()));
    assert!(engine.loaded_languages().contains(&"gaming".to_string()));
}

#[test]
fn custom_dictionary_with_no_valid_words_is_rejected() {
    let mut engine = ProfanityEngine::new();
    assert_eq!(engine.load_custom_dictionary("empty", ["", "   "]), 0);
    assert!(!engine.loaded_languages().contains(&"empty".to_string()));
}

#[test]
fn blank_items_in_batches_are_skipped() {
    let mut engine = ProfanityEngine::new();
    engine.add(["", "  ", "zonk"]);
    assert!(engine.check("total zonk move"));
    assert!(!engine.check(""));
}

#[test]
fn clear_list_drops_dictionaries_but_not_the_whitelist() {
    let mut engine = ProfanityEngine::new();
    engine.add_to_whitelist(["hell"]);
    engine.clear_list();

    assert!(!engine.check("bullshit"));
    assert!(engine.loaded_languages().is_empty());
    assert!(engine.words().is_empty());

    // Reloading works, and the whitelist still applies
    assert!(engine.load_language("english"));
    assert!(engine.check("bullshit"));
    assert!(!engine.check("what the hell"));
}

#[test]
fn placeholder_configuration() {
    let mut engine = ProfanityEngine::new();
    engine.set_placeholder('#');
    assert_eq!(engine.clean("bullshit"), "########");

    engine.set_placeholder_str("@!").unwrap();
    assert_eq!(engine.config().placeholder, '@');

    assert!(matches!(
        engine.set_placeholder_str(""),
        Err(EngineError::InvalidPlaceholder)
    ));
}

#[test]
fn case_sensitivity_change_rebuilds_the_dictionary() {
    let mut engine = ProfanityEngine::new();
    assert!(engine.check("BULLSHIT"));

    engine.update_config(ConfigPatch {
        case_sensitive: Some(true),
        ..ConfigPatch::default()
    });
    assert!(!engine.check("BULLSHIT"));
    assert!(engine.check("bullshit"));

    engine.update_config(ConfigPatch {
        case_sensitive: Some(false),
        ..ConfigPatch::default()
    });
    assert!(engine.check("BULLSHIT"));
}

#[test]
fn context_can_be_toggled_through_config() {
    let mut engine = ProfanityEngine::new();
    assert!(engine.config().context.is_none());

    engine.update_config(ConfigPatch {
        context: Some(Some(ContextConfig::default())),
        ..ConfigPatch::default()
    });
    assert!(engine.config().context.is_some());

    engine.update_config(ConfigPatch {
        context: Some(None),
        ..ConfigPatch::default()
    });
    assert!(engine.config().context.is_none());
}

#[test]
fn builder_seeds_whitelist_before_dictionaries() {
    let engine = ProfanityEngine::builder()
        .whitelist(["ass"])
        .build()
        .unwrap();
    assert!(!engine.check("you ass"));
    assert!(engine.check("he is an asshole"));
}

#[test]
fn builder_without_default_languages_starts_empty() {
    let engine = ProfanityEngine::builder()
        .without_default_languages()
        .build()
        .unwrap();
    assert!(engine.words().is_empty());
    assert!(!engine.check("bullshit"));
}

#[test]
fn builder_rejects_empty_placeholder() {
    let result = ProfanityEngine::builder().placeholder_str("").build();
    assert!(matches!(result, Err(EngineError::InvalidPlaceholder)));
}

struct ToyProvider;

impl DictionaryProvider for ToyProvider {
    fn words(&self, language: &str) -> Option<Vec<String>> {
        (language == "toy").then(|| vec!["blorp".to_string()])
    }

    fn languages(&self) -> Vec<String> {
        vec!["toy".to_string()]
    }
}

#[test]
fn custom_provider_replaces_the_bundled_lists() {
    let engine = ProfanityEngine::builder()
        .provider(Arc::new(ToyProvider))
        .without_default_languages()
        .language("toy")
        .build()
        .unwrap();

    assert_eq!(engine.available_languages(), vec!["toy"]);
    assert!(engine.check("what a blorp"));
    assert!(!engine.check("bullshit"));
}
