use super::{Direction, Reduced, Unit};
use crate::error::{Error, Result};
use crate::i18n::{Case, Number, Registry};

/// What takes the place of the number in a phrase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantity {
    Numeral(u64),
    Omitted,
    /// The direction's preposition, as in "za rok"
    Preposition,
    /// The direction's adjective, as in "příští týden"
    Adjective,
}

/// Where the noun comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Noun {
    Inflected { unit: Unit, number: Number, case: Case },
    /// "včera" / "zítra"
    Day,
}

/// The grammatical shape of a phrase before any words are looked up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Form {
    pub preposition: bool,
    pub quantity: Quantity,
    pub noun: Noun,
}

/// Picks the grammatical form for a reduced duration. First matching rule wins.
pub fn form(unit: Unit, quantity: u64, direction: Direction) -> Form {
    let past = direction == Direction::Past;
    let governed = if past {
        Case::Instrumental
    } else {
        Case::Accusative
    };
    let regular = |number, case| Form {
        preposition: true,
        quantity: Quantity::Numeral(quantity),
        noun: Noun::Inflected { unit, number, case },
    };

    match (quantity, unit) {
        (1, Unit::Day) => Form {
            preposition: false,
            quantity: Quantity::Omitted,
            noun: Noun::Day,
        },
        (1, Unit::Week) => Form {
            quantity: Quantity::Omitted,
            ..regular(Number::Singular, governed)
        },
        (1, _) => regular(Number::Singular, governed),
        (2, Unit::Week) => Form {
            preposition: false,
            quantity: Quantity::Adjective,
            noun: Noun::Inflected {
                unit,
                number: Number::Singular,
                case: Case::Nominative,
            },
        },
        (2..=4, _) => regular(Number::Plural, governed),
        (12, Unit::Month) => Form {
            preposition: false,
            quantity: Quantity::Preposition,
            noun: Noun::Inflected {
                unit: Unit::Year,
                number: Number::Singular,
                case: if past {
                    Case::Instrumental
                } else {
                    Case::Nominative
                },
            },
        },
        // zero lands here too: "před 0 sekundami"
        _ => regular(
            Number::Plural,
            if past {
                Case::Instrumental
            } else {
                Case::GenitivePlural
            },
        ),
    }
}

/// Builds the phrase for a reduced duration in `language`.
///
/// Unknown languages fall back to the default one. Empty parts are left out, so words
/// are always separated by exactly one space.
pub fn compose(registry: &Registry, reduced: Reduced, language: &str) -> Result<String> {
    let (code, table) = registry.resolve(language)?;
    let Reduced {
        unit,
        quantity,
        direction,
    } = reduced;

    let words = table.phrase(direction).ok_or_else(|| Error::MissingPhrase {
        language: code.clone(),
        direction,
    })?;
    let form = form(unit, quantity, direction);

    let noun = match form.noun {
        Noun::Day => words.day.as_str(),
        Noun::Inflected { unit, number, case } => {
            table
                .noun(unit, number, case)
                .ok_or_else(|| Error::MissingTranslation {
                    language: code.clone(),
                    unit,
                    number,
                    case,
                })?
        }
    };

    let numeral;
    let quantity = match form.quantity {
        Quantity::Numeral(n) => {
            numeral = n.to_string();
            numeral.as_str()
        }
        Quantity::Omitted => "",
        Quantity::Preposition => words.preposition.as_str(),
        Quantity::Adjective => words.adjective.as_str(),
    };
    let preposition = if form.preposition {
        words.preposition.as_str()
    } else {
        ""
    };

    let parts: Vec<&str> = [preposition, quantity, noun]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect();
    Ok(parts.join(" "))
}
