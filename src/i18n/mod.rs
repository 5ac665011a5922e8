mod translations;

use crate::error::{Error, Result};
use crate::time::{Direction, Unit};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;
use std::sync::{Arc, LazyLock};

/// Language used when the requested one isn't registered
pub const DEFAULT_LANGUAGE: &str = "cs";

/// Grammatical cases a noun form can be requested in.
///
/// Tables key them by the traditional case numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Case {
    #[serde(rename = "1")]
    Nominative,
    #[serde(rename = "2")]
    GenitivePlural,
    #[serde(rename = "4")]
    Accusative,
    #[serde(rename = "7")]
    Instrumental,
}

impl Case {
    pub fn all() -> &'static [Case] {
        &[
            Case::Nominative,
            Case::GenitivePlural,
            Case::Accusative,
            Case::Instrumental,
        ]
    }

    pub fn code(&self) -> u8 {
        match self {
            Case::Nominative => 1,
            Case::GenitivePlural => 2,
            Case::Accusative => 4,
            Case::Instrumental => 7,
        }
    }
}

impl fmt::Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Grammatical number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Number {
    Singular,
    Plural,
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Number::Singular => "singular",
            Number::Plural => "plural",
        })
    }
}

/// Noun forms of one unit
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inflection {
    pub singular: HashMap<Case, String>,
    pub plural: HashMap<Case, String>,
}

impl Inflection {
    pub fn form(&self, number: Number, case: Case) -> Option<&str> {
        let bucket = match number {
            Number::Singular => &self.singular,
            Number::Plural => &self.plural,
        };
        bucket.get(&case).map(String::as_str)
    }
}

/// Words tied to one direction of time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemporalPhrase {
    /// "před" / "za"
    pub preposition: String,
    /// "včera" / "zítra"
    pub day: String,
    /// "minulý" / "příští"
    pub adjective: String,
}

/// Everything needed to phrase durations in one language
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageTable {
    pub units: HashMap<Unit, Inflection>,
    pub phrases: HashMap<Direction, TemporalPhrase>,
}

impl LanguageTable {
    pub fn noun(&self, unit: Unit, number: Number, case: Case) -> Option<&str> {
        self.units.get(&unit)?.form(number, case)
    }

    pub fn phrase(&self, direction: Direction) -> Option<&TemporalPhrase> {
        self.phrases.get(&direction)
    }

    /// Checks that every unit, number, case and direction has an entry.
    ///
    /// Registration doesn't call this; an incomplete table only fails once a missing
    /// form is actually needed.
    pub fn validate(&self, language: &str) -> Result<()> {
        for &unit in Unit::all() {
            for number in [Number::Singular, Number::Plural] {
                for &case in Case::all() {
                    if self.noun(unit, number, case).is_none() {
                        return Err(Error::MissingTranslation {
                            language: language.to_string(),
                            unit,
                            number,
                            case,
                        });
                    }
                }
            }
        }
        for direction in [Direction::Past, Direction::Future] {
            if self.phrase(direction).is_none() {
                return Err(Error::MissingPhrase {
                    language: language.to_string(),
                    direction,
                });
            }
        }
        Ok(())
    }
}

/// Language tables keyed by language code
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TranslationTable(pub HashMap<String, LanguageTable>);

impl TranslationTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn insert(&mut self, language: impl Into<String>, table: LanguageTable) {
        self.0.insert(language.into(), table);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

type Languages = HashMap<String, Arc<LanguageTable>>;

/// Registered languages.
///
/// Lookups work on a snapshot; merging builds a new map and swaps it in, so a reader
/// never sees a half merged table.
pub struct Registry {
    languages: RwLock<Arc<Languages>>,
}

impl Registry {
    /// A registry with no languages at all
    pub fn empty() -> Self {
        Self {
            languages: RwLock::new(Arc::new(HashMap::new())),
        }
    }

    /// A registry holding the built-in languages
    pub fn with_defaults() -> Self {
        let registry = Self::empty();
        registry.merge(translations::builtin());
        registry
    }

    /// Adds or replaces languages. Codes are case-insensitive; the last write wins.
    pub fn merge(&self, table: TranslationTable) {
        let mut languages = self.languages.write();
        let mut next = Languages::clone(&languages);
        for (code, table) in table.0 {
            log::debug!("Registering translations for {:?}", code);
            next.insert(normalize(&code), Arc::new(table));
        }
        *languages = Arc::new(next);
    }

    pub fn contains(&self, language: &str) -> bool {
        self.snapshot().contains_key(&normalize(language))
    }

    /// Registered language codes, sorted
    pub fn languages(&self) -> Vec<String> {
        let mut codes: Vec<String> = self.snapshot().keys().cloned().collect();
        codes.sort();
        codes
    }

    /// Finds the table for `language`, falling back to [`DEFAULT_LANGUAGE`].
    ///
    /// Returns the code that was actually used together with its table.
    pub fn resolve(&self, language: &str) -> Result<(String, Arc<LanguageTable>)> {
        let languages = self.snapshot();
        let code = normalize(language);
        if let Some(table) = languages.get(&code) {
            return Ok((code, table.clone()));
        }

        log::debug!(
            "No translations for {:?}, falling back to {:?}",
            language,
            DEFAULT_LANGUAGE
        );
        languages
            .get(DEFAULT_LANGUAGE)
            .map(|table| (DEFAULT_LANGUAGE.to_string(), table.clone()))
            .ok_or_else(|| Error::MissingLanguage(language.to_string()))
    }

    fn snapshot(&self) -> Arc<Languages> {
        self.languages.read().clone()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

fn normalize(language: &str) -> String {
    language.trim().to_lowercase()
}

static GLOBAL: LazyLock<Registry> = LazyLock::new(Registry::with_defaults);

/// The process-wide registry used by [`crate::relative_time`]
pub fn global() -> &'static Registry {
    &GLOBAL
}

/// Merges `table` into the process-wide registry
pub fn register_translations(table: TranslationTable) {
    global().merge(table);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn czech() -> LanguageTable {
        let (_, table) = Registry::with_defaults().resolve("cs").unwrap();
        LanguageTable::clone(&table)
    }

    #[test]
    fn test_builtin_czech_is_complete() {
        czech().validate("cs").unwrap();
    }

    #[test]
    fn test_resolve_is_case_insensitive() {
        let registry = Registry::with_defaults();
        let (code, _) = registry.resolve(" CS ").unwrap();
        assert_eq!(code, "cs");
        assert!(registry.contains("Cs"));
    }

    #[test]
    fn test_resolve_falls_back_to_default() {
        let registry = Registry::with_defaults();
        let (code, table) = registry.resolve("tlh").unwrap();
        assert_eq!(code, DEFAULT_LANGUAGE);
        assert_eq!(*table, czech());
    }

    #[test]
    fn test_resolve_without_default_fails() {
        let registry = Registry::empty();
        assert!(matches!(
            registry.resolve("de"),
            Err(Error::MissingLanguage(code)) if code == "de"
        ));
    }

    #[test]
    fn test_merge_adds_and_replaces() {
        let registry = Registry::with_defaults();
        let mut table = TranslationTable::new();
        table.insert("SK", LanguageTable::default());
        registry.merge(table);
        assert_eq!(registry.languages(), vec!["cs", "sk"]);

        let mut replacement = TranslationTable::new();
        replacement.insert("cs", LanguageTable::default());
        registry.merge(replacement);
        let (_, table) = registry.resolve("cs").unwrap();
        assert!(table.units.is_empty());
    }

    #[test]
    fn test_snapshot_survives_merge() {
        let registry = Registry::with_defaults();
        let (_, before) = registry.resolve("cs").unwrap();

        let mut replacement = TranslationTable::new();
        replacement.insert("cs", LanguageTable::default());
        registry.merge(replacement);

        before.validate("cs").unwrap();
    }

    #[test]
    fn test_validate_reports_missing_form() {
        let mut table = czech();
        table
            .units
            .get_mut(&Unit::Week)
            .unwrap()
            .plural
            .remove(&Case::Accusative);

        match table.validate("cs") {
            Err(Error::MissingTranslation {
                unit, number, case, ..
            }) => {
                assert_eq!(unit, Unit::Week);
                assert_eq!(number, Number::Plural);
                assert_eq!(case, Case::Accusative);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_validate_reports_missing_phrase() {
        let mut table = czech();
        table.phrases.remove(&Direction::Future);
        assert!(matches!(
            table.validate("cs"),
            Err(Error::MissingPhrase {
                direction: Direction::Future,
                ..
            })
        ));
    }

    #[test]
    fn test_table_json_uses_case_numbers() {
        let json = r#"{
            "xx": {
                "units": {
                    "day": {
                        "singular": {"1": "d", "2": "ds", "4": "da", "7": "di"},
                        "plural": {"1": "dd", "2": "dds", "4": "dda", "7": "ddi"}
                    }
                },
                "phrases": {
                    "past": {"preposition": "ago", "day": "yday", "adjective": "last"}
                }
            }
        }"#;

        let table = TranslationTable::from_json(json).unwrap();
        let xx = &table.0["xx"];
        assert_eq!(xx.noun(Unit::Day, Number::Plural, Case::Instrumental), Some("ddi"));
        assert_eq!(xx.noun(Unit::Day, Number::Singular, Case::GenitivePlural), Some("ds"));
        assert_eq!(xx.phrase(Direction::Past).unwrap().adjective, "last");
        assert!(xx.phrase(Direction::Future).is_none());
    }

    #[test]
    fn test_table_json_rejects_unknown_case() {
        let json = r#"{"xx": {"units": {"day": {"singular": {"3": "x"}, "plural": {}}}, "phrases": {}}}"#;
        assert!(matches!(TranslationTable::from_json(json), Err(Error::Json(_))));
    }

    #[test]
    fn test_builtin_table_round_trips_through_json() {
        let mut table = TranslationTable::new();
        table.insert("cs", czech());
        let json = serde_json::to_string(&table).unwrap();
        assert_eq!(TranslationTable::from_json(&json).unwrap(), table);
    }
}
