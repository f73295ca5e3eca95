//! Number-to-words providers.
//!
//! Pure functions turning non-negative integers into spoken words for each
//! supported language. The rule sets treat these as opaque generators; all
//! grammatical agreement beyond the word forms themselves (unit names,
//! case suffixes) lives in the rules and their tables.

pub mod de;
pub mod en;
pub mod sr;
