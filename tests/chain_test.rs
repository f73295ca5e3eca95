//! The rule order inside a chain is load-bearing; these tests pin the
//! failure mode of running a chain without its date rule.

use spellout::locales::{english, serbian};
use spellout::{NormalizerStrategy, Rule, RuleChain, SerbianNormalizer};

#[test]
fn test_number_only_chain_cannot_form_a_date() {
    // With only the catch-all number rule, the slash date falls apart
    // into three separately spelled integers.
    let chain = RuleChain::new(vec![Box::new(english::rules::NumberRule)]);
    assert_eq!(
        chain.run("12/05/2023"),
        "twelve/five/two thousand twenty-three"
    );
}

#[test]
fn test_number_only_chain_mangles_dotted_date() {
    // The Serbian number rule swallows the dotted date as one grouped
    // integer; no month name can appear.
    let chain = RuleChain::new(vec![Box::new(serbian::rules::NumberRule)]);
    let output = chain.run("12.05.2023.");
    assert!(!output.contains("maja"));
    assert_eq!(
        output,
        "dvanaest miliona pedeset dve hiljade dvadeset tri."
    );
}

#[test]
fn test_full_chain_forms_the_date() {
    let output = SerbianNormalizer::new().normalize("12.05.2023.");
    assert!(output.contains("dvanaestog maja"));
}

#[test]
fn test_rules_can_be_recombined() {
    let chain = RuleChain::new(vec![
        Box::new(serbian::rules::DateRule::new()) as Box<dyn Rule>,
        Box::new(serbian::rules::NumberRule),
    ]);
    let output = chain.run("12.05.2023 i još 5");
    assert!(output.contains("dvanaestog maja"));
    assert!(output.ends_with("još pet"));
}
