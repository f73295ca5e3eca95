//! Serbian normalization strategy.

pub mod rules;
pub mod year;

use crate::locales::NormalizerStrategy;
use crate::rules::RuleChain;
use crate::words;

use self::rules::{
    BrandRule, CurrencyRule, DateRule, MeasurementRule, MultiplicationRule, NumberRule,
    RomanNumeralRule,
};
use self::year::YearRule;

/// The normalizer for Serbian text.
#[derive(Debug)]
pub struct SerbianNormalizer {
    chain: RuleChain,
}

impl SerbianNormalizer {
    /// Builds the rule chain in its processing order.
    ///
    /// Dates go first so their digits are not eaten by the year or number
    /// rules, currency strips amounts before plain numbers are spelled,
    /// and the catch-all number rule always runs last. Reordering the
    /// chain changes behavior.
    pub fn new() -> Self {
        let chain = RuleChain::new(vec![
            Box::new(DateRule::new()),
            Box::new(CurrencyRule::new()),
            Box::new(BrandRule::new()),
            Box::new(YearRule::new()),
            Box::new(RomanNumeralRule::new()),
            Box::new(MeasurementRule::new()),
            Box::new(MultiplicationRule),
            Box::new(NumberRule),
        ]);
        Self { chain }
    }
}

impl Default for SerbianNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl NormalizerStrategy for SerbianNormalizer {
    fn normalize(&self, text: &str) -> String {
        self.chain.run(text)
    }
}

/// Serbian cardinal with the spoken thousand: a leading "jedna hiljada"
/// reads as "hiljadu" ("hiljadu dvesta", never "jedna hiljada dvesta").
pub(crate) fn cardinal(n: u64) -> String {
    spoken_thousand(words::sr::cardinal(n))
}

/// The year reading, with the same spoken-thousand rewrite.
pub(crate) fn year_words(n: u64) -> String {
    spoken_thousand(words::sr::year(n))
}

fn spoken_thousand(text: String) -> String {
    match text.strip_prefix("jedna hiljada") {
        Some(rest) => format!("hiljadu{}", rest),
        None => text,
    }
}
