use crate::i18n::{Case, Number};
use crate::time::{Direction, Unit};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// The timestamp could not be read as a number
    #[error("invalid timestamp: {0:?}")]
    InvalidInput(String),

    /// A registered language lacks an inflected noun form
    #[error("missing translation for {language}: {unit} {number} case {case}")]
    MissingTranslation {
        language: String,
        unit: Unit,
        number: Number,
        case: Case,
    },

    /// A registered language lacks the phrase words for a direction
    #[error("missing {direction} phrases for {language}")]
    MissingPhrase { language: String, direction: Direction },

    /// Neither the requested nor the default language is registered
    #[error("no translations registered for {0:?}")]
    MissingLanguage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
