//! The Serbian year rule.
//!
//! Year mentions take the grammatical case of the noun around them, so
//! this rule runs four passes with distinct patterns:
//!
//! 1. "2023. godine"  -> genitive ("dve hiljade dvadeset treće godine")
//! 2. "2021. godište" -> neuter   ("dve hiljade dvadeset prvo godište")
//! 3. "2021."         -> feminine ("dve hiljade dvadeset prva.")
//! 4. "2021"          -> plain year reading ("dve hiljade dvadeset jedan")
//!
//! Years from 2000 up split into "dve hiljade" plus a case suffix for the
//! remainder; 1900-1999 split into "hiljadu devetsto" plus a suffix for
//! the last two digits; anything earlier falls back to the generic
//! ordinal generator.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::rules::{rewrite_all, rewrite_all_fancy, Rule};
use crate::tables;
use crate::words;

use super::year_words;

static GENITIVE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(19\d{2}|20\d{2}|2100)\.\s*godine\b").unwrap());

static NEUTER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(19\d{2}|20\d{2}|2100)\.\s*(godište|izdanje|kolo)\b").unwrap());

static FEMININE: Lazy<fancy_regex::Regex> = Lazy::new(|| {
    fancy_regex::Regex::new(r"\b(19\d{2}|20\d{2}|2100)\.(?!\s*(godine|godište|izdanje|kolo))")
        .unwrap()
});

static NOMINATIVE: Lazy<fancy_regex::Regex> =
    Lazy::new(|| fancy_regex::Regex::new(r"\b(19\d{2}|20\d{2}|2100)(?!\.)(?!\d)\b").unwrap());

fn tens_word(tens: u64) -> Option<&'static str> {
    Some(match tens {
        2 => "dvadeset",
        3 => "trideset",
        4 => "četrdeset",
        5 => "pedeset",
        6 => "šezdeset",
        7 => "sedamdeset",
        8 => "osamdeset",
        9 => "devedeset",
        _ => return None,
    })
}

fn ones_feminine(ones: u64) -> Option<&'static str> {
    Some(match ones {
        1 => "prva",
        2 => "druga",
        3 => "treća",
        4 => "četvrta",
        5 => "peta",
        6 => "šesta",
        7 => "sedma",
        8 => "osma",
        9 => "deveta",
        _ => return None,
    })
}

fn tens_feminine(tens: u64) -> Option<&'static str> {
    Some(match tens {
        1 => "deseta",
        2 => "dvadeseta",
        3 => "trideseta",
        4 => "četrdeseta",
        5 => "pedeseta",
        6 => "šezdeseta",
        7 => "sedamdeseta",
        8 => "osamdeseta",
        9 => "devedeseta",
        _ => return None,
    })
}

fn ones_neuter(ones: u64) -> Option<&'static str> {
    Some(match ones {
        1 => "prvo",
        2 => "drugo",
        3 => "treće",
        4 => "četvrto",
        5 => "peto",
        6 => "šesto",
        7 => "sedmo",
        8 => "osmo",
        9 => "deveto",
        _ => return None,
    })
}

fn tens_neuter(tens: u64) -> Option<&'static str> {
    Some(match tens {
        1 => "deseto",
        2 => "dvadeseto",
        3 => "trideseto",
        4 => "četrdeseto",
        5 => "pedeseto",
        6 => "šezdeseto",
        7 => "sedamdeseto",
        8 => "osamdeseto",
        9 => "devedeseto",
        _ => return None,
    })
}

fn ones_genitive(ones: u64) -> Option<&'static str> {
    Some(match ones {
        1 => "prve",
        2 => "druge",
        3 => "treće",
        4 => "četvrte",
        5 => "pete",
        6 => "šeste",
        7 => "sedme",
        8 => "osme",
        9 => "devete",
        _ => return None,
    })
}

fn teens_genitive(n: u64) -> Option<&'static str> {
    Some(match n {
        11 => "jedanaeste",
        12 => "dvanaeste",
        13 => "trinaeste",
        14 => "četrnaeste",
        15 => "petnaeste",
        16 => "šesnaeste",
        17 => "sedamnaeste",
        18 => "osamnaeste",
        19 => "devetnaeste",
        _ => return None,
    })
}

fn tens_genitive(tens: u64) -> Option<&'static str> {
    Some(match tens {
        1 => "desete",
        2 => "dvadesete",
        3 => "tridesete",
        4 => "četrdesete",
        5 => "pedesete",
        6 => "šezdesete",
        7 => "sedamdesete",
        8 => "osamdesete",
        9 => "devedesete",
        _ => return None,
    })
}

/// Years in the grammatical case their surroundings demand.
pub struct YearRule {
    ordinals_feminine: HashMap<String, String>,
    ordinals_neuter: HashMap<String, String>,
}

impl YearRule {
    pub fn new() -> Self {
        Self {
            ordinals_feminine: tables::string_map(
                include_str!("../../../data/sr/ordinals_feminine.json"),
                "sr/ordinals_feminine",
            ),
            ordinals_neuter: tables::string_map(
                include_str!("../../../data/sr/ordinals_neuter.json"),
                "sr/ordinals_neuter",
            ),
        }
    }

    fn feminine_suffix(&self, n: u64) -> Option<String> {
        if n <= 31 {
            if let Some(word) = self.ordinals_feminine.get(&n.to_string()) {
                return Some(word.clone());
            }
        }

        let tens = n / 10;
        let ones = n % 10;
        if ones == 0 {
            Some(tens_feminine(tens)?.to_string())
        } else {
            Some(format!("{} {}", tens_word(tens)?, ones_feminine(ones)?))
        }
    }

    fn neuter_suffix(&self, n: u64) -> Option<String> {
        if n <= 31 {
            if let Some(word) = self.ordinals_neuter.get(&n.to_string()) {
                return Some(word.clone());
            }
        }

        let tens = n / 10;
        let ones = n % 10;
        if ones == 0 {
            Some(tens_neuter(tens)?.to_string())
        } else {
            Some(format!("{} {}", tens_word(tens)?, ones_neuter(ones)?))
        }
    }

    fn genitive_suffix(&self, n: u64) -> Option<String> {
        let tens = n / 10;
        let ones = n % 10;

        if (1..=9).contains(&n) {
            return Some(ones_genitive(n)?.to_string());
        }
        if n == 10 {
            return Some(tens_genitive(1)?.to_string());
        }
        if (11..=19).contains(&n) {
            return Some(teens_genitive(n)?.to_string());
        }
        if (20..=99).contains(&n) {
            return if ones == 0 {
                Some(tens_genitive(tens)?.to_string())
            } else {
                Some(format!("{} {}", tens_word(tens)?, ones_genitive(ones)?))
            };
        }

        Some(words::sr::ordinal(n))
    }

    fn feminine(&self, year: u64) -> Option<String> {
        if year >= 2000 {
            let remainder = year % 1000;
            if remainder == 0 {
                Some("dvehiljadita".to_string())
            } else {
                Some(format!("dve hiljade {}", self.feminine_suffix(remainder)?))
            }
        } else if year >= 1900 {
            let remainder = year % 100;
            if remainder == 0 {
                Some("hiljadu devetstota".to_string())
            } else {
                Some(format!(
                    "hiljadu devetsto {}",
                    self.feminine_suffix(remainder)?
                ))
            }
        } else {
            Some(words::sr::ordinal(year))
        }
    }

    fn neuter(&self, year: u64) -> Option<String> {
        if year >= 2000 {
            let remainder = year % 1000;
            if remainder == 0 {
                Some("dvehiljadito".to_string())
            } else {
                Some(format!("dve hiljade {}", self.neuter_suffix(remainder)?))
            }
        } else if year >= 1900 {
            let remainder = year % 100;
            if remainder == 0 {
                Some("hiljadu devetstoto".to_string())
            } else {
                Some(format!(
                    "hiljadu devetsto {}",
                    self.neuter_suffix(remainder)?
                ))
            }
        } else {
            Some(words::sr::ordinal(year))
        }
    }

    fn genitive(&self, year: u64) -> Option<String> {
        if year >= 2000 {
            if year == 2000 {
                return Some("dvehiljadite".to_string());
            }
            let remainder = year % 1000;
            if remainder > 0 {
                Some(format!("dve hiljade {}", self.genitive_suffix(remainder)?))
            } else {
                Some("dve hiljade".to_string())
            }
        } else if year >= 1900 {
            let remainder = year % 100;
            if remainder == 0 {
                Some("hiljadu devetstote".to_string())
            } else {
                Some(format!(
                    "hiljadu devetsto {}",
                    self.genitive_suffix(remainder)?
                ))
            }
        } else {
            Some(words::sr::ordinal(year))
        }
    }
}

impl Default for YearRule {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for YearRule {
    fn name(&self) -> &'static str {
        "sr.year"
    }

    fn apply(&self, text: &str) -> String {
        let text = rewrite_all(&GENITIVE, self.name(), text, |caps| {
            let year: u64 = caps.get(1)?.as_str().parse().ok()?;
            Some(format!("{} godine", self.genitive(year)?))
        });

        let text = rewrite_all(&NEUTER, self.name(), &text, |caps| {
            let year: u64 = caps.get(1)?.as_str().parse().ok()?;
            let noun = caps.get(2)?.as_str();
            Some(format!("{} {}", self.neuter(year)?, noun))
        });

        let text = rewrite_all_fancy(&FEMININE, self.name(), &text, |caps| {
            let year: u64 = caps.get(1)?.as_str().parse().ok()?;
            Some(format!("{}.", self.feminine(year)?))
        });

        rewrite_all_fancy(&NOMINATIVE, self.name(), &text, |caps| {
            let year: u64 = caps.get(1)?.as_str().parse().ok()?;
            Some(year_words(year))
        })
    }
}
