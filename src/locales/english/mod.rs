//! English normalization strategy.

pub mod rules;

use crate::locales::NormalizerStrategy;
use crate::rules::RuleChain;

use self::rules::{
    CurrencyRule, DateRule, MeasurementRule, MultiplicationRule, NumberRule, RomanNumeralRule,
};

/// The normalizer for English text.
#[derive(Debug)]
pub struct EnglishNormalizer {
    chain: RuleChain,
}

impl EnglishNormalizer {
    /// Builds the rule chain in its processing order: dates before
    /// anything that eats digits, multiplication before measurement so
    /// "5×100 W" keeps both operands, the catch-all number rule last.
    pub fn new() -> Self {
        let chain = RuleChain::new(vec![
            Box::new(DateRule::new()),
            Box::new(CurrencyRule::new()),
            Box::new(MultiplicationRule),
            Box::new(MeasurementRule::new()),
            Box::new(RomanNumeralRule::new()),
            Box::new(NumberRule),
        ]);
        Self { chain }
    }
}

impl Default for EnglishNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl NormalizerStrategy for EnglishNormalizer {
    fn normalize(&self, text: &str) -> String {
        self.chain.run(text)
    }
}
