//! # spellout
//!
//! Text normalization for speech synthesis: rewrites numbers, dates,
//! currency amounts, measurements, multiplication expressions, Roman
//! numerals and brand names into fully spelled-out prose, with a fixed
//! rule set per language.
//!
//! ## Example
//!
//! ```
//! use spellout::{NormalizerRegistry, NormalizerStrategy};
//!
//! let registry = NormalizerRegistry::with_defaults();
//! let normalizer = registry.get("de").unwrap();
//!
//! let spoken = normalizer.normalize("25°C");
//! assert_eq!(spoken, "fünfundzwanzig Grad Celsius");
//! ```

pub mod amount;
pub mod error;
pub mod locales;
pub mod registry;
pub mod rules;
pub mod tables;
pub mod words;

pub use amount::{AmountConvention, ParsedAmount};
pub use error::{Error, Result};
pub use locales::{EnglishNormalizer, GermanNormalizer, NormalizerStrategy, SerbianNormalizer};
pub use registry::NormalizerRegistry;
pub use rules::{Rule, RuleChain};
