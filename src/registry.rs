//! Registry of language normalizers.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::error::{Error, Result};
use crate::locales::{EnglishNormalizer, GermanNormalizer, NormalizerStrategy, SerbianNormalizer};

type StrategyCtor = fn() -> Arc<dyn NormalizerStrategy>;

/// Maps two-letter language codes to normalizer strategies.
///
/// Strategies are built lazily, at most once per code: the first `get` for
/// a code constructs the strategy inside the cache lock and every later
/// call hands out the same instance. There is no fallback language; an
/// unregistered code is an error the caller has to surface.
pub struct NormalizerRegistry {
    constructors: HashMap<String, StrategyCtor>,
    cache: Mutex<HashMap<String, Arc<dyn NormalizerStrategy>>>,
}

impl NormalizerRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            constructors: HashMap::new(),
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Creates a registry with the built-in languages registered.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register("sr", || Arc::new(SerbianNormalizer::new()));
        registry.register("en", || Arc::new(EnglishNormalizer::new()));
        registry.register("de", || Arc::new(GermanNormalizer::new()));
        registry
    }

    /// Registers a strategy constructor for a language code.
    /// Registering a code twice replaces the earlier constructor.
    pub fn register(&mut self, lang: &str, ctor: StrategyCtor) {
        self.constructors.insert(lang.to_string(), ctor);
    }

    /// Returns the strategy for a language code, constructing and caching
    /// it on first use.
    pub fn get(&self, lang: &str) -> Result<Arc<dyn NormalizerStrategy>> {
        let mut cache = self.cache.lock().unwrap_or_else(|e| e.into_inner());

        if let Some(strategy) = cache.get(lang) {
            return Ok(Arc::clone(strategy));
        }

        let ctor = self
            .constructors
            .get(lang)
            .ok_or_else(|| Error::UnsupportedLanguage(lang.to_string()))?;

        let strategy = ctor();
        cache.insert(lang.to_string(), Arc::clone(&strategy));
        Ok(strategy)
    }
}

impl Default for NormalizerRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_language_is_an_error() {
        let registry = NormalizerRegistry::with_defaults();
        let err = registry.get("xx").unwrap_err();
        assert!(matches!(err, Error::UnsupportedLanguage(code) if code == "xx"));
    }

    #[test]
    fn test_get_caches_one_instance_per_code() {
        let registry = NormalizerRegistry::with_defaults();
        let first = registry.get("de").unwrap();
        let second = registry.get("de").unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_register_replaces_prior_constructor() {
        let mut registry = NormalizerRegistry::new();
        registry.register("de", || Arc::new(GermanNormalizer::new()));
        registry.register("de", || Arc::new(EnglishNormalizer::new()));
        let strategy = registry.get("de").unwrap();
        assert_eq!(strategy.normalize("5 apples"), "five apples");
    }
}
