use std::sync::Arc;
use std::thread;

use spellout::{Error, NormalizerRegistry, NormalizerStrategy};

#[test]
fn test_unsupported_language_message() {
    let registry = NormalizerRegistry::with_defaults();
    let err = registry.get("xx").unwrap_err();
    assert!(matches!(&err, Error::UnsupportedLanguage(code) if code == "xx"));
    assert_eq!(err.to_string(), "Language 'xx' is not supported.");
}

#[test]
fn test_no_fallback_language() {
    let registry = NormalizerRegistry::with_defaults();
    assert!(registry.get("fr").is_err());
    assert!(registry.get("SR").is_err(), "codes are lowercase only");
}

#[test]
fn test_concurrent_first_use_yields_one_instance() {
    let registry = Arc::new(NormalizerRegistry::with_defaults());

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || registry.get("sr").unwrap())
        })
        .collect();

    let strategies: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    for strategy in &strategies[1..] {
        assert!(Arc::ptr_eq(&strategies[0], strategy));
    }
}

#[test]
fn test_all_default_languages_resolve() {
    let registry = NormalizerRegistry::with_defaults();
    for lang in ["sr", "en", "de"] {
        let normalizer = registry.get(lang).unwrap();
        let output = normalizer.normalize("7");
        assert!(!output.contains('7'), "{lang} left the digit untouched");
    }
}
