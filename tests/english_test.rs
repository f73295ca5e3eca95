use spellout::{EnglishNormalizer, NormalizerRegistry, NormalizerStrategy};

fn normalizer() -> EnglishNormalizer {
    EnglishNormalizer::new()
}

#[test]
fn test_house_purchase_sentence() {
    let output =
        normalizer().normalize("We bought a house 12.05.2023. for $1,500 which has 120 m² area.");

    assert!(output.contains("twelfth of May two thousand twenty-three"));
    assert!(output.contains("one thousand five hundred dollars"));
    assert!(output.contains("one hundred twenty square meters"));
}

#[test]
fn test_date_with_slashes() {
    assert_eq!(
        normalizer().normalize("on 3/11/1999"),
        "on third of November one thousand nine hundred ninety-nine"
    );
}

#[test]
fn test_currency_with_cents() {
    assert_eq!(
        normalizer().normalize("$12.50"),
        "twelve dollars and fifty cents"
    );
}

#[test]
fn test_currency_singular() {
    assert_eq!(normalizer().normalize("€1"), "one euro");
}

#[test]
fn test_currency_zero_amount() {
    assert_eq!(normalizer().normalize("$0"), "zero dollars");
}

#[test]
fn test_measurement() {
    assert_eq!(
        normalizer().normalize("a 65 inch TV"),
        "a sixty-five inches TV"
    );
    assert_eq!(
        normalizer().normalize("runs at 2.1 s"),
        "runs at two point one seconds"
    );
}

#[test]
fn test_roman_numeral() {
    assert_eq!(normalizer().normalize("Chapter XIV"), "Chapter fourteen");
    assert_eq!(normalizer().normalize("IIIII"), "IIIII");
}

#[test]
fn test_multiplication() {
    assert_eq!(
        normalizer().normalize("resolution 2556×1179"),
        "resolution two thousand five hundred fifty-six times one thousand one hundred seventy-nine"
    );
}

#[test]
fn test_registry_resolves_english() {
    let registry = NormalizerRegistry::with_defaults();
    let n = registry.get("en").unwrap();
    assert_eq!(n.normalize("5 apples"), "five apples");
}
