//! Serbian cardinal and ordinal numbers (Latin script).

/// Grammatical gender of the counted noun, for the forms where Serbian
/// distinguishes it (one and two).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Gender {
    Masculine,
    Feminine,
}

const TEENS: [&str; 10] = [
    "deset",
    "jedanaest",
    "dvanaest",
    "trinaest",
    "četrnaest",
    "petnaest",
    "šesnaest",
    "sedamnaest",
    "osamnaest",
    "devetnaest",
];

const TENS: [&str; 10] = [
    "",
    "deset",
    "dvadeset",
    "trideset",
    "četrdeset",
    "pedeset",
    "šezdeset",
    "sedamdeset",
    "osamdeset",
    "devedeset",
];

const HUNDREDS: [&str; 10] = [
    "",
    "sto",
    "dvesta",
    "trista",
    "četiristo",
    "petsto",
    "šeststo",
    "sedamsto",
    "osamsto",
    "devetsto",
];

fn one_word(gender: Gender) -> &'static str {
    match gender {
        Gender::Masculine => "jedan",
        Gender::Feminine => "jedna",
    }
}

fn two_word(gender: Gender) -> &'static str {
    match gender {
        Gender::Masculine => "dva",
        Gender::Feminine => "dve",
    }
}

fn ones_word(n: u64, gender: Gender) -> &'static str {
    match n {
        1 => one_word(gender),
        2 => two_word(gender),
        3 => "tri",
        4 => "četiri",
        5 => "pet",
        6 => "šest",
        7 => "sedam",
        8 => "osam",
        9 => "devet",
        _ => "",
    }
}

fn under_1000(n: u64, gender: Gender) -> String {
    let mut parts: Vec<&str> = Vec::new();
    let hundreds = n / 100;
    let rest = n % 100;

    if hundreds > 0 {
        parts.push(HUNDREDS[hundreds as usize]);
    }
    if (10..20).contains(&rest) {
        parts.push(TEENS[(rest - 10) as usize]);
    } else {
        let tens = rest / 10;
        let ones = rest % 10;
        if tens > 0 {
            parts.push(TENS[tens as usize]);
        }
        if ones > 0 {
            parts.push(ones_word(ones, gender));
        }
    }
    parts.join(" ")
}

/// Paucal agreement: 1 (but not 11) takes the singular, 2-4 (but not
/// 12-14) the paucal, everything else the genitive plural.
fn agreement<'a>(count: u64, singular: &'a str, paucal: &'a str, plural: &'a str) -> &'a str {
    let ones = count % 10;
    let tens = count % 100;
    if ones == 1 && tens != 11 {
        singular
    } else if (2..=4).contains(&ones) && !(12..=14).contains(&tens) {
        paucal
    } else {
        plural
    }
}

/// Spells a non-negative integer as a Serbian cardinal.
///
/// One thousand is spelled "jedna hiljada"; callers that need the spoken
/// "hiljadu" form rewrite the leading words themselves.
pub fn cardinal(n: u64) -> String {
    if n == 0 {
        return "nula".to_string();
    }

    let billions = n / 1_000_000_000;
    let millions = (n / 1_000_000) % 1000;
    let thousands = (n / 1000) % 1000;
    let units = n % 1000;

    let mut parts: Vec<String> = Vec::new();
    if billions > 0 {
        let name = agreement(billions, "milijarda", "milijarde", "milijardi");
        parts.push(format!("{} {}", under_1000(billions, Gender::Feminine), name));
    }
    if millions > 0 {
        let name = agreement(millions, "milion", "miliona", "miliona");
        parts.push(format!("{} {}", under_1000(millions, Gender::Masculine), name));
    }
    if thousands > 0 {
        let name = agreement(thousands, "hiljada", "hiljade", "hiljada");
        parts.push(format!("{} {}", under_1000(thousands, Gender::Feminine), name));
    }
    if units > 0 {
        parts.push(under_1000(units, Gender::Masculine));
    }
    parts.join(" ")
}

/// The year reading of a number; in Serbian it equals the cardinal.
pub fn year(n: u64) -> String {
    cardinal(n)
}

/// Masculine nominative ordinal word for the final cardinal word.
fn ordinal_final_word(word: &str) -> Option<&'static str> {
    let ordinal = match word {
        "jedan" | "jedna" => "prvi",
        "dva" | "dve" => "drugi",
        "tri" => "treći",
        "četiri" => "četvrti",
        "pet" => "peti",
        "šest" => "šesti",
        "sedam" => "sedmi",
        "osam" => "osmi",
        "devet" => "deveti",
        "deset" => "deseti",
        "jedanaest" => "jedanaesti",
        "dvanaest" => "dvanaesti",
        "trinaest" => "trinaesti",
        "četrnaest" => "četrnaesti",
        "petnaest" => "petnaesti",
        "šesnaest" => "šesnaesti",
        "sedamnaest" => "sedamnaesti",
        "osamnaest" => "osamnaesti",
        "devetnaest" => "devetnaesti",
        "dvadeset" => "dvadeseti",
        "trideset" => "trideseti",
        "četrdeset" => "četrdeseti",
        "pedeset" => "pedeseti",
        "šezdeset" => "šezdeseti",
        "sedamdeset" => "sedamdeseti",
        "osamdeset" => "osamdeseti",
        "devedeset" => "devedeseti",
        "sto" => "stoti",
        "dvesta" => "dvestoti",
        "trista" => "tristoti",
        "četiristo" => "četiristoti",
        "petsto" => "petstoti",
        "šeststo" => "šeststoti",
        "sedamsto" => "sedamstoti",
        "osamsto" => "osamstoti",
        "devetsto" => "devetstoti",
        "hiljada" | "hiljade" | "hiljadu" => "hiljaditi",
        "milion" | "miliona" => "milioniti",
        "milijarda" | "milijarde" | "milijardi" => "milijarditi",
        _ => return None,
    };
    Some(ordinal)
}

/// Spells a non-negative integer as a Serbian masculine ordinal
/// ("peti", "dvadeset prvi", "sto pedeseti").
pub fn ordinal(n: u64) -> String {
    if n == 0 {
        return "nulti".to_string();
    }

    let words = cardinal(n);
    match words.rsplit_once(' ') {
        Some((head, last)) => match ordinal_final_word(last) {
            Some(ordinal) => format!("{} {}", head, ordinal),
            None => words,
        },
        None => ordinal_final_word(&words)
            .map(str::to_string)
            .unwrap_or(words),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_cardinal_small() {
        assert_eq!(cardinal(0), "nula");
        assert_eq!(cardinal(5), "pet");
        assert_eq!(cardinal(11), "jedanaest");
        assert_eq!(cardinal(21), "dvadeset jedan");
        assert_eq!(cardinal(56), "pedeset šest");
        assert_eq!(cardinal(179), "sto sedamdeset devet");
    }

    #[test]
    fn test_cardinal_thousands_agreement() {
        assert_eq!(cardinal(1000), "jedna hiljada");
        assert_eq!(cardinal(2000), "dve hiljade");
        assert_eq!(cardinal(5000), "pet hiljada");
        assert_eq!(cardinal(11000), "jedanaest hiljada");
        assert_eq!(cardinal(16000), "šesnaest hiljada");
        assert_eq!(cardinal(150000), "sto pedeset hiljada");
        assert_eq!(cardinal(21000), "dvadeset jedna hiljada");
        assert_eq!(cardinal(22000), "dvadeset dve hiljade");
    }

    #[test]
    fn test_cardinal_composed() {
        assert_eq!(cardinal(1234), "jedna hiljada dvesta trideset četiri");
        assert_eq!(cardinal(1996), "jedna hiljada devetsto devedeset šest");
        assert_eq!(cardinal(2023), "dve hiljade dvadeset tri");
        assert_eq!(cardinal(1_000_000), "jedan milion");
        assert_eq!(cardinal(2_000_000), "dva miliona");
    }

    #[test]
    fn test_ordinal() {
        assert_eq!(ordinal(1), "prvi");
        assert_eq!(ordinal(3), "treći");
        assert_eq!(ordinal(21), "dvadeset prvi");
        assert_eq!(ordinal(150), "sto pedeseti");
        assert_eq!(ordinal(100), "stoti");
    }
}
