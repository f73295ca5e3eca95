//! English rewrite rules.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::amount::AmountConvention;
use crate::rules::{rewrite_all, rewrite_all_fancy, Rule};
use crate::tables;
use crate::words::en::cardinal;

static DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(\d{1,2})[./](\d{1,2})[./](\d{4})\.?\b").unwrap());

static CURRENCY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        "(?P<prefix_symbol>€|\\$|£|¥|₹|₿)[\u{00A0}\\s]*",
        "(?P<prefix_amount>\\d{1,3}(?:[.,]\\d{3})*(?:[.,]\\d{1,2})?|\\d+(?:[.,]\\d{1,2})?)\\b",
        "|",
        "(?P<suffix_amount>\\d{1,3}(?:[.,]\\d{3})*(?:[.,]\\d{1,2})?|\\d+(?:[.,]\\d{1,2})?)",
        "[\u{00A0}\\s]*",
        "(?P<suffix_code>USD\\b|EUR\\b|GBP\\b|JPY\\b|CHF\\b|BTC\\b|[€$£¥₹₿])",
    ))
    .unwrap()
});

// The numerals table stops at twenty, and so does the pattern.
static ROMAN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b((?:X{1,2}|IX|IV|V|X|I{1,3}|VI{0,3}|XI{1,2}|XIV|XV|XVI{0,3}|XIX|XX))\b")
        .unwrap()
});

static MULTIPLICATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(\d+)\s*[x×*]\s*(\d+)\b").unwrap());

static NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(\d+(?:[.,]\d+)?)\b").unwrap());

fn currency_code(symbol: &str) -> &str {
    match symbol {
        "€" => "EUR",
        "$" => "USD",
        "£" => "GBP",
        "¥" => "JPY",
        "₹" => "INR",
        "₿" => "BTC",
        code => code,
    }
}

/// Dates in `DD.MM.YYYY` or `DD/MM/YYYY` form: "12.05.2023" becomes
/// "twelfth of May two thousand twenty-three".
pub struct DateRule {
    months: HashMap<String, String>,
    ordinals: HashMap<String, String>,
}

impl DateRule {
    pub fn new() -> Self {
        Self {
            months: tables::string_map(include_str!("../../../data/en/months.json"), "en/months"),
            ordinals: tables::string_map(
                include_str!("../../../data/en/ordinals.json"),
                "en/ordinals",
            ),
        }
    }
}

impl Rule for DateRule {
    fn name(&self) -> &'static str {
        "en.date"
    }

    fn apply(&self, text: &str) -> String {
        rewrite_all(&DATE, self.name(), text, |caps| {
            let day: u32 = caps.get(1)?.as_str().parse().ok()?;
            let month: u32 = caps.get(2)?.as_str().parse().ok()?;
            let year: u64 = caps.get(3)?.as_str().parse().ok()?;

            if !(1..=31).contains(&day) || !(1..=12).contains(&month) {
                return None;
            }
            let day_text = self.ordinals.get(&day.to_string())?;
            let month_text = self.months.get(&month.to_string())?;

            Some(format!("{} of {} {}", day_text, month_text, cardinal(year)))
        })
    }
}

/// Currency amounts like `$1,500`, `150.000 $` or `500 USD`.
pub struct CurrencyRule {
    currencies: HashMap<String, Vec<String>>,
}

impl CurrencyRule {
    pub fn new() -> Self {
        Self {
            currencies: tables::string_list_map(
                include_str!("../../../data/en/currencies.json"),
                "en/currencies",
            ),
        }
    }
}

impl Rule for CurrencyRule {
    fn name(&self) -> &'static str {
        "en.currency"
    }

    fn apply(&self, text: &str) -> String {
        rewrite_all(&CURRENCY, self.name(), text, |caps| {
            let symbol = caps
                .name("prefix_symbol")
                .or_else(|| caps.name("suffix_code"))?
                .as_str();
            let raw = caps
                .name("prefix_amount")
                .or_else(|| caps.name("suffix_amount"))?
                .as_str();

            let names = self.currencies.get(currency_code(symbol))?;
            let [major_sg, major_pl, minor_sg, minor_pl] = names.as_slice() else {
                return None;
            };

            let amount = AmountConvention::CommaGrouped.parse(raw);
            if amount.is_zero() {
                return Some(format!("zero {}", major_pl));
            }

            let mut parts = Vec::new();
            if amount.whole > 0 {
                let name = if amount.whole == 1 { major_sg } else { major_pl };
                parts.push(format!("{} {}", cardinal(amount.whole), name));
            }
            if amount.fraction > 0 {
                let name = if amount.fraction == 1 { minor_sg } else { minor_pl };
                parts.push(format!("{} {}", cardinal(u64::from(amount.fraction)), name));
            }
            Some(parts.join(" and "))
        })
    }
}

/// Roman numerals I through XX, converted only on an exact table hit.
pub struct RomanNumeralRule {
    numerals: HashMap<String, u64>,
}

impl RomanNumeralRule {
    pub fn new() -> Self {
        Self {
            numerals: tables::number_map(
                include_str!("../../../data/en/roman_numerals.json"),
                "en/roman_numerals",
            ),
        }
    }
}

impl Rule for RomanNumeralRule {
    fn name(&self) -> &'static str {
        "en.roman"
    }

    fn apply(&self, text: &str) -> String {
        rewrite_all(&ROMAN, self.name(), text, |caps| {
            let value = self.numerals.get(caps.get(1)?.as_str())?;
            Some(cardinal(*value))
        })
    }
}

/// Numbers followed by a known unit symbol: "350 km/h" becomes
/// "three hundred fifty kilometers per hour".
pub struct MeasurementRule {
    units: HashMap<String, String>,
    pattern: Option<fancy_regex::Regex>,
}

impl MeasurementRule {
    pub fn new() -> Self {
        let units = tables::nested_string_map(
            include_str!("../../../data/en/measurements.json"),
            "units",
            "en/measurements",
        );
        let pattern = if units.is_empty() {
            None
        } else {
            let body = tables::alternation(units.keys());
            fancy_regex::Regex::new(&format!(
                r"(?P<number>\d{{1,3}}(?:[.,]\d{{3}})*(?:[.,]\d{{1,2}})?|\d+(?:[.,]\d{{1,2}})?)\s*(?P<unit>{})(?=\s|$|[^\w])",
                body
            ))
            .ok()
        };
        Self { units, pattern }
    }
}

impl Rule for MeasurementRule {
    fn name(&self) -> &'static str {
        "en.measurement"
    }

    fn apply(&self, text: &str) -> String {
        let Some(pattern) = &self.pattern else {
            return text.to_string();
        };
        rewrite_all_fancy(pattern, self.name(), text, |caps| {
            let raw = caps.name("number")?.as_str();
            let unit = caps.name("unit")?.as_str();
            let spoken = self.units.get(unit)?;

            let amount = AmountConvention::CommaGrouped.parse(raw);
            if amount.whole == 0 {
                return Some(spoken.clone());
            }

            let mut number_text = cardinal(amount.whole);
            if amount.fraction > 0 {
                number_text = format!(
                    "{} point {}",
                    number_text,
                    cardinal(u64::from(amount.fraction))
                );
            }
            Some(format!("{} {}", number_text, spoken))
        })
    }
}

/// Multiplication expressions: "2556×1179" becomes "two thousand five
/// hundred fifty-six times one thousand one hundred seventy-nine".
pub struct MultiplicationRule;

impl Rule for MultiplicationRule {
    fn name(&self) -> &'static str {
        "en.multiplication"
    }

    fn apply(&self, text: &str) -> String {
        rewrite_all(&MULTIPLICATION, self.name(), text, |caps| {
            let first: u64 = caps.get(1)?.as_str().parse().ok()?;
            let second: u64 = caps.get(2)?.as_str().parse().ok()?;
            Some(format!("{} times {}", cardinal(first), cardinal(second)))
        })
    }
}

/// Catch-all for any remaining number token; always the last rule.
pub struct NumberRule;

impl Rule for NumberRule {
    fn name(&self) -> &'static str {
        "en.number"
    }

    fn apply(&self, text: &str) -> String {
        rewrite_all(&NUMBER, self.name(), text, |caps| {
            let amount = AmountConvention::CommaGrouped.parse(caps.get(1)?.as_str());
            if amount.is_zero() {
                return Some("zero".to_string());
            }
            if amount.fraction > 0 {
                Some(format!(
                    "{} point {}",
                    cardinal(amount.whole),
                    cardinal(u64::from(amount.fraction))
                ))
            } else {
                Some(cardinal(amount.whole))
            }
        })
    }
}

impl Default for DateRule {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for CurrencyRule {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for RomanNumeralRule {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for MeasurementRule {
    fn default() -> Self {
        Self::new()
    }
}
