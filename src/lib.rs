//! Relative time phrases ("před 3 hodinami", "příští týden") with case-aware noun
//! inflection.
//!
//! A timestamp is first reduced to a unit and a rounded quantity, then phrased from a
//! per-language table of noun forms. Czech is built in; more languages can be merged
//! into a [`Registry`] at runtime.

pub mod error;
pub mod i18n;
pub mod settings;
pub mod time;

pub use error::{Error, Result};
pub use i18n::{register_translations, Registry, TranslationTable};
pub use settings::Settings;
pub use time::{relative_time, relative_time_str, Clock, FixedClock, Formatter, SystemClock};
