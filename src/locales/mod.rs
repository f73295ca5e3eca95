//! Language-specific normalization strategies.

pub mod english;
pub mod german;
pub mod serbian;

pub use english::EnglishNormalizer;
pub use german::GermanNormalizer;
pub use serbian::SerbianNormalizer;

/// A language-specific normalization algorithm.
///
/// A strategy owns one fixed-order rule chain, built once; `normalize` is
/// pure and may be called concurrently from any number of threads.
pub trait NormalizerStrategy: Send + Sync + std::fmt::Debug {
    /// Rewrites every recognized pattern in `text` into spoken words.
    fn normalize(&self, text: &str) -> String;
}
