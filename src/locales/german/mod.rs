//! German normalization strategy.

pub mod rules;

use crate::locales::NormalizerStrategy;
use crate::rules::RuleChain;

use self::rules::{
    CurrencyRule, DateRule, MeasurementRule, MultiplicationRule, NumberRule, RomanNumeralRule,
};

/// The normalizer for German text.
#[derive(Debug)]
pub struct GermanNormalizer {
    chain: RuleChain,
}

impl GermanNormalizer {
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

impl Default for GermanNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl NormalizerStrategy for GermanNormalizer {
    fn normalize(&self, text: &str) -> String {
        self.chain.run(text)
    }
}
