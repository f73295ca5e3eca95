//! German rewrite rules.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::amount::AmountConvention;
use crate::rules::{rewrite_all, rewrite_all_fancy, Rule};
use crate::tables;
use crate::words::de::cardinal;

static DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(\d{1,2})\.(\d{1,2})\.(\d{4})\.?\b").unwrap());

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

static ROMAN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\b([IVXLCDM]+)\b").unwrap());

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

/// Dates in `DD.MM.YYYY.` form: "12.05.2023" becomes
/// "zwölften Mai zweitausenddreiundzwanzig".
pub struct DateRule {
    months: HashMap<String, String>,
    ordinals: HashMap<String, String>,
}

impl DateRule {
    pub fn new() -> Self {
        Self {
            months: tables::string_map(include_str!("../../../data/de/months.json"), "de/months"),
            ordinals: tables::string_map(
                include_str!("../../../data/de/ordinals.json"),
                "de/ordinals",
            ),
        }
    }
}

impl Rule for DateRule {
    fn name(&self) -> &'static str {
        "de.date"
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

            Some(format!("{} {} {}", day_text, month_text, cardinal(year)))
        })
    }
}

/// Currency amounts like `€1.234,56`, `$150.000` or `500 EUR`.
pub struct CurrencyRule {
    currencies: HashMap<String, Vec<String>>,
}

impl CurrencyRule {
    pub fn new() -> Self {
        Self {
            currencies: tables::string_list_map(
                include_str!("../../../data/de/currencies.json"),
                "de/currencies",
            ),
        }
    }
}

impl Rule for CurrencyRule {
    fn name(&self) -> &'static str {
        "de.currency"
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

            let amount = AmountConvention::DotGrouped.parse(raw);
            if amount.is_zero() {
                return Some(format!("null {}", major_pl));
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
            Some(parts.join(" und "))
        })
    }
}

/// Roman numerals I through M, converted only on an exact table hit.
pub struct RomanNumeralRule {
    numerals: HashMap<String, u64>,
}

impl RomanNumeralRule {
    pub fn new() -> Self {
        Self {
            numerals: tables::number_map(
                include_str!("../../../data/de/roman_numerals.json"),
                "de/roman_numerals",
            ),
        }
    }
}

impl Rule for RomanNumeralRule {
    fn name(&self) -> &'static str {
        "de.roman"
    }

    fn apply(&self, text: &str) -> String {
        rewrite_all(&ROMAN, self.name(), text, |caps| {
            let key = caps.get(1)?.as_str().to_uppercase();
            let value = self.numerals.get(&key)?;
            Some(cardinal(*value))
        })
    }
}

/// Numbers followed by a known unit symbol: "7,5 l/100km" becomes
/// "sieben Komma fünf Liter pro hundert Kilometer".
pub struct MeasurementRule {
    units: HashMap<String, String>,
    pattern: Option<fancy_regex::Regex>,
}

impl MeasurementRule {
    pub fn new() -> Self {
        let units = tables::nested_string_map(
            include_str!("../../../data/de/measurements.json"),
            "units",
            "de/measurements",
        );
        let pattern = if units.is_empty() {
            None
        } else {
            let body = tables::alternation(units.keys());
            fancy_regex::Regex::new(&format!(
                "(?m)(\\d{{1,3}}(?:[.,]\\d{{3}})*(?:[.,]\\d{{1,2}})?|\\d+(?:[.,]\\d{{1,2}})?)[\u{00A0}\\s]*({})(?=\\s|$|[^\\w])",
                body
            ))
            .ok()
        };
        Self { units, pattern }
    }
}

impl Rule for MeasurementRule {
    fn name(&self) -> &'static str {
        "de.measurement"
    }

    fn apply(&self, text: &str) -> String {
        let Some(pattern) = &self.pattern else {
            return text.to_string();
        };
        rewrite_all_fancy(pattern, self.name(), text, |caps| {
            let raw = caps.get(1)?.as_str();
            let unit = caps.get(2)?.as_str();
            let spoken = self.units.get(unit)?;

            let amount = AmountConvention::DotGrouped.parse(raw);
            if amount.whole > 0 {
                let mut number_text = cardinal(amount.whole);
                if amount.fraction > 0 {
                    number_text = format!(
                        "{} Komma {}",
                        number_text,
                        cardinal(u64::from(amount.fraction))
                    );
                }
                Some(format!("{} {}", number_text, spoken))
            } else if amount.fraction > 0 {
                Some(format!(
                    "{} {}",
                    cardinal(u64::from(amount.fraction)),
                    spoken
                ))
            } else {
                Some(spoken.clone())
            }
        })
    }
}

/// Multiplication expressions: "2556×1179" becomes
/// "zweitausendfünfhundertsechsundfünfzig mal eintausendeinhundertneunundsiebzig".
pub struct MultiplicationRule;

impl Rule for MultiplicationRule {
    fn name(&self) -> &'static str {
        "de.multiplication"
    }

    fn apply(&self, text: &str) -> String {
        rewrite_all(&MULTIPLICATION, self.name(), text, |caps| {
            let first: u64 = caps.get(1)?.as_str().parse().ok()?;
            let second: u64 = caps.get(2)?.as_str().parse().ok()?;
            Some(format!("{} mal {}", cardinal(first), cardinal(second)))
        })
    }
}

/// Catch-all for any remaining number token; always the last rule.
pub struct NumberRule;

impl Rule for NumberRule {
    fn name(&self) -> &'static str {
        "de.number"
    }

    fn apply(&self, text: &str) -> String {
        rewrite_all(&NUMBER, self.name(), text, |caps| {
            let amount = AmountConvention::DotGrouped.parse(caps.get(1)?.as_str());
            if amount.is_zero() {
                return Some("null".to_string());
            }
            if amount.fraction > 0 {
                Some(format!(
                    "{} Komma {}",
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

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_date() {
        let rule = DateRule::new();
        assert_eq!(
            rule.apply("am 12.05.2023"),
            "am zwölften Mai zweitausenddreiundzwanzig"
        );
        assert_eq!(rule.apply("am 12.13.2023"), "am 12.13.2023");
    }

    #[test]
    fn test_currency() {
        let rule = CurrencyRule::new();
        assert_eq!(rule.apply("€25.000"), "fünfundzwanzigtausend Euro");
        assert_eq!(
            rule.apply("€1.234,56"),
            "eintausendzweihundertvierunddreißig Euro und sechsundfünfzig Cent"
        );
        assert_eq!(rule.apply("€0"), "null Euro");
        assert_eq!(rule.apply("500 EUR"), "fünfhundert Euro");
    }

    #[test]
    fn test_measurement() {
        let rule = MeasurementRule::new();
        assert_eq!(
            rule.apply("7,5 l/100km"),
            "sieben Komma fünf Liter pro hundert Kilometer"
        );
        assert_eq!(rule.apply("25°C"), "fünfundzwanzig Grad Celsius");
        assert_eq!(rule.apply("120 m²"), "einhundertzwanzig Quadratmeter");
    }

    #[test]
    fn test_roman() {
        let rule = RomanNumeralRule::new();
        assert_eq!(rule.apply("Formel I"), "Formel eins");
        // Words made only of numeral letters miss the table and survive.
        assert_eq!(rule.apply("mild"), "mild");
    }

    #[test]
    fn test_multiplication() {
        let rule = MultiplicationRule;
        assert_eq!(
            rule.apply("5×100"),
            "fünf mal einhundert"
        );
    }

    #[test]
    fn test_number() {
        let rule = NumberRule;
        assert_eq!(rule.apply("3.500"), "dreitausendfünfhundert");
        assert_eq!(rule.apply("2,1"), "zwei Komma eins");
        assert_eq!(rule.apply("0"), "null");
    }
}
