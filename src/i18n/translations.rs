use super::{Case, Inflection, LanguageTable, TemporalPhrase, TranslationTable};
use crate::time::{Direction, Unit};
use std::collections::HashMap;

/// Noun forms in case order: nominative, genitive plural, accusative, instrumental
type Forms = [&'static str; 4];

const CASE_ORDER: [Case; 4] = [
    Case::Nominative,
    Case::GenitivePlural,
    Case::Accusative,
    Case::Instrumental,
];

// (unit, singular, plural)
const CS_UNITS: [(Unit, Forms, Forms); 7] = [
    (
        Unit::Second,
        ["sekunda", "sekund", "sekundu", "sekundou"],
        ["sekundy", "sekund", "sekundy", "sekundami"],
    ),
    (
        Unit::Minute,
        ["minuta", "minut", "minutu", "minutou"],
        ["minuty", "minut", "minuty", "minutami"],
    ),
    (
        Unit::Hour,
        ["hodina", "hodin", "hodinu", "hodinou"],
        ["hodiny", "hodin", "hodiny", "hodinami"],
    ),
    (
        Unit::Day,
        ["den", "dní", "den", "dnem"],
        ["dny", "dní", "dny", "dny"],
    ),
    (
        Unit::Week,
        ["týden", "týdnů", "týden", "týdnem"],
        ["týdny", "týdnů", "týdny", "týdny"],
    ),
    (
        Unit::Month,
        ["měsíc", "měsíců", "měsíc", "měsícem"],
        ["měsíce", "měsíců", "měsíce", "měsíci"],
    ),
    (
        Unit::Year,
        ["rok", "let", "rok", "rokem"],
        ["roky", "let", "roky", "roky"],
    ),
];

fn bucket(forms: Forms) -> HashMap<Case, String> {
    CASE_ORDER
        .iter()
        .zip(forms)
        .map(|(&case, form)| (case, form.to_string()))
        .collect()
}

fn phrase(preposition: &str, day: &str, adjective: &str) -> TemporalPhrase {
    TemporalPhrase {
        preposition: preposition.to_string(),
        day: day.to_string(),
        adjective: adjective.to_string(),
    }
}

fn czech() -> LanguageTable {
    let units = CS_UNITS
        .iter()
        .map(|&(unit, singular, plural)| {
            let inflection = Inflection {
                singular: bucket(singular),
                plural: bucket(plural),
            };
            (unit, inflection)
        })
        .collect();

    let phrases = HashMap::from([
        (Direction::Past, phrase("před", "včera", "minulý")),
        (Direction::Future, phrase("za", "zítra", "příští")),
    ]);

    LanguageTable { units, phrases }
}

/// Languages every registry starts with
pub(super) fn builtin() -> TranslationTable {
    let mut table = TranslationTable::new();
    table.insert("cs", czech());
    table
}
