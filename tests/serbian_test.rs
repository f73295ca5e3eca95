use spellout::{NormalizerRegistry, NormalizerStrategy, SerbianNormalizer};

fn normalizer() -> SerbianNormalizer {
    SerbianNormalizer::new()
}

#[test]
fn test_date_then_currency_scenario() {
    let output = normalizer().normalize("kupili smo kuću 12.05.2023. za 150.000 $");

    let date = output
        .find("dvanaestog maja dve hiljade dvadeset tri")
        .expect("date phrase missing");
    let currency = output
        .find("sto pedeset hiljada dolara")
        .expect("currency phrase missing");

    assert!(date < currency, "date must be rewritten before the amount");
    assert!(!output.contains("150"));
    assert!(!output.contains("12.05"));
}

#[test]
fn test_second_pass_keeps_spelled_words() {
    let n = normalizer();
    let once = n.normalize("kupili smo kuću 12.05.2023. za 150.000 $");
    let twice = n.normalize(&once);
    assert_eq!(once, twice);
}

#[test]
fn test_year_genitive() {
    assert_eq!(
        normalizer().normalize("Kupljeno 2023. godine"),
        "Kupljeno dve hiljade dvadeset treće godine"
    );
}

#[test]
fn test_year_neuter() {
    assert_eq!(
        normalizer().normalize("2021. godište"),
        "dve hiljade dvadeset prvo godište"
    );
}

#[test]
fn test_year_feminine() {
    assert_eq!(
        normalizer().normalize("Pobedili su 2021."),
        "Pobedili su dve hiljade dvadeset prva."
    );
}

#[test]
fn test_year_nominative() {
    assert_eq!(
        normalizer().normalize("od 1996"),
        "od hiljadu devetsto devedeset šest"
    );
}

#[test]
fn test_currency_zero_amount() {
    assert_eq!(normalizer().normalize("$0"), "nula dolara");
    assert_eq!(normalizer().normalize("Cena je 0 RSD"), "Cena je nula dinara");
}

#[test]
fn test_roman_numeral_boundary() {
    assert_eq!(normalizer().normalize("Poglavlje IIIII"), "Poglavlje IIIII");
    assert_eq!(
        normalizer().normalize("Poglavlje XIV"),
        "Poglavlje četrnaest"
    );
}

#[test]
fn test_brand_respelling() {
    assert_eq!(normalizer().normalize("Vozim BMW"), "Vozim be-em-ve");
}

#[test]
fn test_measurement_before_multiplication() {
    // The unit grabs its number first, so only the left operand is left
    // for the multiplication and number rules.
    assert_eq!(
        normalizer().normalize("zvučnici od 5×100 W"),
        "zvučnici od pet×sto vati"
    );
}

#[test]
fn test_measurement_decimal() {
    assert_eq!(
        normalizer().normalize("troši 9,5 l/100km"),
        "troši devet zarez pet litara na sto kilometara"
    );
}

#[test]
fn test_registry_resolves_serbian() {
    let registry = NormalizerRegistry::with_defaults();
    let n = registry.get("sr").unwrap();
    assert_eq!(n.normalize("16 GB"), "šesnaest gigabajta");
}
