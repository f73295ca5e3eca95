//! Rewrite rules and the ordered chain that applies them.

use tracing::warn;

/// A single text-rewrite pass.
///
/// A rule scans the whole input for its pattern and replaces every match;
/// a match it cannot transform is left exactly as it was found. Rules never
/// fail: `apply` always returns the full text.
pub trait Rule: Send + Sync {
    /// Name used in log messages.
    fn name(&self) -> &'static str;

    /// Applies the rule to the input text.
    fn apply(&self, text: &str) -> String;
}

/// An ordered sequence of rules.
///
/// Order is a semantic invariant chosen per language so that specific rules
/// (dates, currency) consume their tokens before the catch-all number rule
/// sees them. Reordering changes behavior, it is not a refactor.
pub struct RuleChain {
    rules: Vec<Box<dyn Rule>>,
}

impl std::fmt::Debug for RuleChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleChain")
            .field(
                "rules",
                &self.rules.iter().map(|r| r.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl RuleChain {
    pub fn new(rules: Vec<Box<dyn Rule>>) -> Self {
        Self { rules }
    }

    /// Runs every rule in order, feeding each rule's output to the next.
    pub fn run(&self, text: &str) -> String {
        self.rules
            .iter()
            .fold(text.to_string(), |current, rule| rule.apply(&current))
    }
}

/// Replaces every match of `re` in `text` with `rewrite(&caps)`.
///
/// `rewrite` returns `None` when the match cannot be transformed (an
/// out-of-range date component, an unknown unit, a failed lookup); that
/// match is kept verbatim and the scan continues. This bounds the damage
/// of one bad match to that single occurrence.
pub fn rewrite_all<F>(re: &regex::Regex, rule: &'static str, text: &str, rewrite: F) -> String
where
    F: Fn(&regex::Captures) -> Option<String>,
{
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for caps in re.captures_iter(text) {
        let Some(whole) = caps.get(0) else { continue };
        out.push_str(&text[last..whole.start()]);
        match rewrite(&caps) {
            Some(replacement) => out.push_str(&replacement),
            None => {
                warn!(rule, matched = whole.as_str(), "keeping original text");
                out.push_str(whole.as_str());
            }
        }
        last = whole.end();
    }
    out.push_str(&text[last..]);
    out
}

/// `rewrite_all` for patterns that need lookaround support.
///
/// A scan error (fancy-regex backtracking limits) stops this one rule and
/// leaves the rest of the text untouched.
pub fn rewrite_all_fancy<F>(
    re: &fancy_regex::Regex,
    rule: &'static str,
    text: &str,
    rewrite: F,
) -> String
where
    F: Fn(&fancy_regex::Captures) -> Option<String>,
{
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for caps in re.captures_iter(text) {
        let caps = match caps {
            Ok(caps) => caps,
            Err(e) => {
                warn!(rule, error = %e, "pattern scan failed, keeping remaining text");
                break;
            }
        };
        let Some(whole) = caps.get(0) else { continue };
        out.push_str(&text[last..whole.start()]);
        match rewrite(&caps) {
            Some(replacement) => out.push_str(&replacement),
            None => {
                warn!(rule, matched = whole.as_str(), "keeping original text");
                out.push_str(whole.as_str());
            }
        }
        last = whole.end();
    }
    out.push_str(&text[last..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    struct Doubler;

    impl Rule for Doubler {
        fn name(&self) -> &'static str {
            "doubler"
        }

        fn apply(&self, text: &str) -> String {
            let re = regex::Regex::new(r"\d+").unwrap();
            rewrite_all(&re, self.name(), text, |caps| {
                let n: u64 = caps.get(0)?.as_str().parse().ok()?;
                Some((n * 2).to_string())
            })
        }
    }

    #[test]
    fn test_chain_feeds_output_forward() {
        let chain = RuleChain::new(vec![Box::new(Doubler), Box::new(Doubler)]);
        assert_eq!(chain.run("3 and 5"), "12 and 20");
    }

    #[test]
    fn test_failed_match_is_kept_verbatim() {
        let re = regex::Regex::new(r"\d+").unwrap();
        let out = rewrite_all(&re, "test", "ok 7 bad 8 end", |caps| {
            let digits = caps.get(0)?.as_str();
            if digits == "8" {
                None
            } else {
                Some("seven".to_string())
            }
        });
        assert_eq!(out, "ok seven bad 8 end");
    }

    #[test]
    fn test_fancy_lookahead_rewrite() {
        let re = fancy_regex::Regex::new(r"\d+(?= km)").unwrap();
        let out = rewrite_all_fancy(&re, "test", "12 km and 12 m", |_| {
            Some("twelve".to_string())
        });
        assert_eq!(out, "twelve km and 12 m");
    }
}
