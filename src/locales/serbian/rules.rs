//! Serbian rewrite rules.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::amount::AmountConvention;
use crate::rules::{rewrite_all, rewrite_all_fancy, Rule};
use crate::tables;

use super::{cardinal, year_words};

static DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(\d{1,2})\.(\d{1,2})\.(\d{4})\.?\b").unwrap());

static CURRENCY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        "(?P<prefix_symbol>€|\\$|£|¥|₹|₿)[\u{00A0}\\s]*",
        "(?P<prefix_amount>\\d{1,3}(?:[.,]\\d{3})*(?:[.,]\\d{1,2})?|\\d+(?:[.,]\\d{1,2})?)\\b",
        "|",
        "(?P<suffix_amount>\\d{1,3}(?:[.,]\\d{3})*(?:[.,]\\d{1,2})?|\\d+(?:[.,]\\d{1,2})?)",
        "[\u{00A0}\\s]*",
        "(?P<suffix_code>USD\\b|EUR\\b|GBP\\b|JPY\\b|CHF\\b|BTC\\b|RSD\\b|[€$£¥₹₿])",
    ))
    .unwrap()
});

// Case-sensitive on purpose: lowercase "i" is the Serbian conjunction.
static ROMAN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b([IVXLCDM]+)\b").unwrap());

static MULTIPLICATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(\d+)\s*[x×*]\s*(\d+)\b").unwrap());

static NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(\d+(?:[.,]\d+)*)\b").unwrap());

/// Maps a matched symbol or code to the currency table key.
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

/// Dates in `DD.MM.YYYY.` form: "12.05.2023" becomes
/// "dvanaestog maja dve hiljade dvadeset tri."
pub struct DateRule {
    months: HashMap<String, String>,
    ordinals: HashMap<String, String>,
}

impl DateRule {
    pub fn new() -> Self {
        Self {
            months: tables::string_map(include_str!("../../../data/sr/months.json"), "sr/months"),
            ordinals: tables::string_map(
                include_str!("../../../data/sr/ordinals.json"),
                "sr/ordinals",
            ),
        }
    }
}

impl Rule for DateRule {
    fn name(&self) -> &'static str {
        "sr.date"
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

            Some(format!("{} {} {}.", day_text, month_text, year_words(year)))
        })
    }
}

/// Currency amounts like `€1.234,56`, `150.000 $` or `500 RSD`.
pub struct CurrencyRule {
    currencies: HashMap<String, Vec<String>>,
}

impl CurrencyRule {
    pub fn new() -> Self {
        Self {
            currencies: tables::string_list_map(
                include_str!("../../../data/sr/currencies.json"),
                "sr/currencies",
            ),
        }
    }
}

impl Rule for CurrencyRule {
    fn name(&self) -> &'static str {
        "sr.currency"
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

            let amount = AmountConvention::Detect.parse(raw);
            if amount.is_zero() {
                return Some(format!("nula {}", major_pl));
            }

            let mut parts = Vec::new();
            if amount.whole > 0 {
                let name = if amount.whole % 10 == 1 && amount.whole % 100 != 11 {
                    major_sg
                } else {
                    major_pl
                };
                parts.push(format!("{} {}", cardinal(amount.whole), name));
            }
            if amount.fraction > 0 {
                let fraction = u64::from(amount.fraction);
                let name = if fraction % 10 == 1 && fraction % 100 != 11 {
                    minor_sg
                } else {
                    minor_pl
                };
                parts.push(format!("{} {}", cardinal(fraction), name));
            }
            Some(parts.join(" i "))
        })
    }
}

/// Brand names respelled for Serbian pronunciation, longest name first.
pub struct BrandRule {
    brands: HashMap<String, String>,
    pattern: Option<Regex>,
}

impl BrandRule {
    pub fn new() -> Self {
        let brands = tables::nested_string_map(
            include_str!("../../../data/sr/brands.json"),
            "brands",
            "sr/brands",
        );
        let pattern = if brands.is_empty() {
            None
        } else {
            let body = tables::alternation(brands.keys());
            Regex::new(&format!(r"(?i)\b(?P<brand>{})\b", body)).ok()
        };
        Self { brands, pattern }
    }
}

impl Rule for BrandRule {
    fn name(&self) -> &'static str {
        "sr.brand"
    }

    fn apply(&self, text: &str) -> String {
        let Some(pattern) = &self.pattern else {
            return text.to_string();
        };
        rewrite_all(pattern, self.name(), text, |caps| {
            let matched = caps.name("brand")?.as_str().to_lowercase();
            self.brands
                .iter()
                .find(|(name, _)| name.to_lowercase() == matched)
                .map(|(_, respelled)| respelled.clone())
        })
    }
}

/// Roman numerals, converted only on an exact table hit so that ordinary
/// all-capital words pass through untouched.
pub struct RomanNumeralRule {
    numerals: HashMap<String, u64>,
}

impl RomanNumeralRule {
    pub fn new() -> Self {
        Self {
            numerals: tables::number_map(
                include_str!("../../../data/sr/roman_numerals.json"),
                "sr/roman_numerals",
            ),
        }
    }
}

impl Rule for RomanNumeralRule {
    fn name(&self) -> &'static str {
        "sr.roman"
    }

    fn apply(&self, text: &str) -> String {
        rewrite_all(&ROMAN, self.name(), text, |caps| {
            let key = caps.get(1)?.as_str().to_uppercase();
            let value = self.numerals.get(&key)?;
            Some(cardinal(*value))
        })
    }
}

/// Numbers followed by a known unit symbol: "120 m²" becomes
/// "sto dvadeset metara kvadratnih".
pub struct MeasurementRule {
    units: HashMap<String, String>,
    pattern: Option<fancy_regex::Regex>,
}

impl MeasurementRule {
    pub fn new() -> Self {
        let units = tables::nested_string_map(
            include_str!("../../../data/sr/measurements.json"),
            "units",
            "sr/measurements",
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
        "sr.measurement"
    }

    fn apply(&self, text: &str) -> String {
        let Some(pattern) = &self.pattern else {
            return text.to_string();
        };
        rewrite_all_fancy(pattern, self.name(), text, |caps| {
            let raw = caps.name("number")?.as_str();
            let unit = caps.name("unit")?.as_str();
            let spoken = self.units.get(unit)?;

            let amount = AmountConvention::Detect.parse(raw);
            if amount.whole == 0 {
                return Some(spoken.clone());
            }

            let mut number_text = cardinal(amount.whole);
            if amount.fraction > 0 {
                number_text = format!(
                    "{} zarez {}",
                    number_text,
                    cardinal(u64::from(amount.fraction))
                );
            }
            Some(format!("{} {}", number_text, spoken))
        })
    }
}

/// Multiplication expressions: "2556×1179" becomes
/// "dve hiljade petsto pedeset šest puta hiljadu sto sedamdeset devet".
pub struct MultiplicationRule;

impl Rule for MultiplicationRule {
    fn name(&self) -> &'static str {
        "sr.multiplication"
    }

    fn apply(&self, text: &str) -> String {
        rewrite_all(&MULTIPLICATION, self.name(), text, |caps| {
            let first: u64 = caps.get(1)?.as_str().parse().ok()?;
            let second: u64 = caps.get(2)?.as_str().parse().ok()?;
            Some(format!("{} puta {}", cardinal(first), cardinal(second)))
        })
    }
}

/// Catch-all for any remaining number token; always the last rule.
pub struct NumberRule;

impl Rule for NumberRule {
    fn name(&self) -> &'static str {
        "sr.number"
    }

    fn apply(&self, text: &str) -> String {
        rewrite_all(&NUMBER, self.name(), text, |caps| {
            let amount = AmountConvention::Detect.parse(caps.get(1)?.as_str());
            if amount.is_zero() {
                return Some("nula".to_string());
            }
            if amount.fraction > 0 {
                Some(format!(
                    "{} zarez {}",
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

impl Default for BrandRule {
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
