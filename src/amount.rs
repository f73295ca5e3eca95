//! Numeric literal parsing with locale-dependent separator conventions.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::warn;

static DOT_GROUPED_DECIMAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{1,3}(?:\.\d{3})*,\d{1,2}$").unwrap());
static DOT_GROUPED_INTEGER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{1,3}(?:\.\d{3})+$").unwrap());
static COMMA_GROUPED_DECIMAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{1,3}(?:,\d{3})*\.\d{1,2}$").unwrap());
static COMMA_GROUPED_INTEGER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{1,3}(?:,\d{3})+$").unwrap());

/// A numeric literal split into a whole part and a minor/fractional part.
///
/// The fractional part is the digits after the decimal separator read as an
/// integer ("56" in "1.234,56"). For the one- and two-digit decimal forms
/// that currency and measurement amounts take it is always below 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedAmount {
    pub whole: u64,
    pub fraction: u32,
}

impl ParsedAmount {
    pub const ZERO: ParsedAmount = ParsedAmount { whole: 0, fraction: 0 };

    pub fn is_zero(&self) -> bool {
        self.whole == 0 && self.fraction == 0
    }
}

/// How `.` and `,` are interpreted inside a numeric literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountConvention {
    /// Dot groups thousands, comma separates decimals (German: 1.234,56).
    DotGrouped,
    /// Comma groups thousands, dot separates decimals (English: 1,234.56).
    CommaGrouped,
    /// Both separators are ambiguous; the rightmost one decides (Serbian).
    ///
    /// One or two digits after the rightmost separator make it the decimal
    /// separator. Three or more make every separator a thousands separator.
    Detect,
}

impl AmountConvention {
    /// Parses a raw numeric literal into whole and fractional parts.
    ///
    /// Unparsable input yields (0, 0) and a warning; this never fails.
    pub fn parse(self, raw: &str) -> ParsedAmount {
        if raw.is_empty() {
            return ParsedAmount::ZERO;
        }

        let clean: String = raw
            .chars()
            .filter(|c| *c != ' ' && *c != '\u{00A0}')
            .collect();

        let parsed = match self {
            AmountConvention::DotGrouped => parse_fixed(&clean, '.', ','),
            AmountConvention::CommaGrouped => parse_fixed(&clean, ',', '.'),
            AmountConvention::Detect => parse_detect(&clean),
        };

        match parsed {
            Some(amount) => amount,
            None => {
                warn!(literal = raw, "could not parse amount, treating as zero");
                ParsedAmount::ZERO
            }
        }
    }
}

/// Fixed-convention parsing: `group` separates thousands, `decimal`
/// separates the fractional part.
fn parse_fixed(clean: &str, group: char, decimal: char) -> Option<ParsedAmount> {
    let (grouped_decimal, grouped_integer) = if group == '.' {
        (&DOT_GROUPED_DECIMAL, &DOT_GROUPED_INTEGER)
    } else {
        (&COMMA_GROUPED_DECIMAL, &COMMA_GROUPED_INTEGER)
    };

    // 11.000,50 - thousands grouping plus decimals
    if grouped_decimal.is_match(clean) {
        let ungrouped: String = clean.chars().filter(|c| *c != group).collect();
        return split_on(&ungrouped, decimal);
    }

    // 11.000 - thousands grouping only
    if grouped_integer.is_match(clean) {
        let ungrouped: String = clean.chars().filter(|c| *c != group).collect();
        let whole = ungrouped.parse().ok()?;
        return Some(ParsedAmount { whole, fraction: 0 });
    }

    // 11,50 - bare decimal separator, no grouping
    if clean.contains(decimal) {
        return split_on(clean, decimal);
    }

    // 16000
    let whole = clean.parse().ok()?;
    Some(ParsedAmount { whole, fraction: 0 })
}

/// Rightmost-separator parsing for the ambiguous locale family.
fn parse_detect(clean: &str) -> Option<ParsedAmount> {
    let rightmost = match clean.rfind([',', '.']) {
        Some(pos) => pos,
        None => {
            let whole = clean.parse().ok()?;
            return Some(ParsedAmount { whole, fraction: 0 });
        }
    };

    let digits_after = clean.len() - rightmost - 1;

    if digits_after == 1 || digits_after == 2 {
        // The rightmost separator is the decimal separator; whichever
        // symbol it is, the other one groups thousands.
        let decimal = clean[rightmost..].chars().next()?;
        let group = if decimal == '.' { ',' } else { '.' };
        let ungrouped: String = clean.chars().filter(|c| *c != group).collect();
        split_on(&ungrouped, decimal)
    } else {
        // Three or more digits after the rightmost separator: every
        // separator groups thousands.
        let ungrouped: String = clean.chars().filter(|c| *c != ',' && *c != '.').collect();
        let whole = ungrouped.parse().ok()?;
        Some(ParsedAmount { whole, fraction: 0 })
    }
}

fn split_on(text: &str, decimal: char) -> Option<ParsedAmount> {
    let (head, tail) = match text.split_once(decimal) {
        Some(parts) => parts,
        None => (text, ""),
    };
    let whole = if head.is_empty() { 0 } else { head.parse().ok()? };
    let fraction = if tail.is_empty() { 0 } else { tail.parse().ok()? };
    Some(ParsedAmount { whole, fraction })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn detect(raw: &str) -> (u64, u32) {
        let a = AmountConvention::Detect.parse(raw);
        (a.whole, a.fraction)
    }

    fn german(raw: &str) -> (u64, u32) {
        let a = AmountConvention::DotGrouped.parse(raw);
        (a.whole, a.fraction)
    }

    #[test]
    fn test_detect_rightmost_separator() {
        assert_eq!(detect("1.234,56"), (1234, 56));
        assert_eq!(detect("1,234.56"), (1234, 56));
        assert_eq!(detect("11.000"), (11000, 0));
        assert_eq!(detect("11,000"), (11000, 0));
        assert_eq!(detect("11,50"), (11, 50));
        assert_eq!(detect("11.5"), (11, 5));
        assert_eq!(detect("16000"), (16000, 0));
    }

    #[test]
    fn test_detect_multiple_groups() {
        assert_eq!(detect("1.234.567"), (1234567, 0));
        assert_eq!(detect("1.234.567,89"), (1234567, 89));
    }

    #[test]
    fn test_detect_nbsp_and_spaces() {
        assert_eq!(detect("1\u{00A0}234,56"), (1234, 56));
        assert_eq!(detect("1 234,56"), (1234, 56));
    }

    #[test]
    fn test_detect_garbage_is_zero() {
        assert_eq!(detect("abc"), (0, 0));
        assert_eq!(detect("1.2.3,4,5"), (0, 0));
    }

    #[test]
    fn test_german_fixed_convention() {
        assert_eq!(german("1.234,56"), (1234, 56));
        assert_eq!(german("11.000"), (11000, 0));
        assert_eq!(german("11,50"), (11, 50));
        assert_eq!(german("16000"), (16000, 0));
        // A bare comma accepts any number of digits after it.
        assert_eq!(german("11,500"), (11, 500));
    }

    #[test]
    fn test_english_fixed_convention() {
        let parse = |raw| {
            let a = AmountConvention::CommaGrouped.parse(raw);
            (a.whole, a.fraction)
        };
        assert_eq!(parse("1,234.56"), (1234, 56));
        assert_eq!(parse("1,500"), (1500, 0));
        assert_eq!(parse("12.50"), (12, 50));
        assert_eq!(parse("16000"), (16000, 0));
    }

    #[test]
    fn test_trailing_separator() {
        // "5." has zero digits after the rightmost separator.
        assert_eq!(detect("5."), (5, 0));
    }
}
