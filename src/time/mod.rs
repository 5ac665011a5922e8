mod clock;
mod compose;
mod reduce;

pub use clock::*;
pub use compose::*;
pub use reduce::*;

use crate::error::{Error, Result};
use crate::i18n::{self, Registry};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Time units from the finest to the coarsest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Year,
}

impl Unit {
    pub fn all() -> &'static [Unit] {
        &[
            Unit::Second,
            Unit::Minute,
            Unit::Hour,
            Unit::Day,
            Unit::Week,
            Unit::Month,
            Unit::Year,
        ]
    }

    /// How many of this unit make up the next one. `None` for years.
    pub fn ratio(&self) -> Option<f64> {
        match self {
            Unit::Second => Some(60.0),
            Unit::Minute => Some(60.0),
            Unit::Hour => Some(24.0),
            Unit::Day => Some(7.0),
            Unit::Week => Some(4.35),
            Unit::Month => Some(12.0),
            Unit::Year => None,
        }
    }

    pub fn next(&self) -> Option<Unit> {
        match self {
            Unit::Second => Some(Unit::Minute),
            Unit::Minute => Some(Unit::Hour),
            Unit::Hour => Some(Unit::Day),
            Unit::Day => Some(Unit::Week),
            Unit::Week => Some(Unit::Month),
            Unit::Month => Some(Unit::Year),
            Unit::Year => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Unit::Second => "second",
            Unit::Minute => "minute",
            Unit::Hour => "hour",
            Unit::Day => "day",
            Unit::Week => "week",
            Unit::Month => "month",
            Unit::Year => "year",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Whether a timestamp lies behind or ahead of the current time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Past,
    Future,
}

impl Direction {
    pub fn name(&self) -> &'static str {
        match self {
            Direction::Past => "past",
            Direction::Future => "future",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Formats timestamps against an explicit registry and clock
pub struct Formatter<'r, C: Clock> {
    registry: &'r Registry,
    clock: C,
}

impl<'r, C: Clock> Formatter<'r, C> {
    pub fn new(registry: &'r Registry, clock: C) -> Self {
        Self { registry, clock }
    }

    pub fn format(&self, timestamp: i64, language: &str) -> Result<String> {
        let reduced = reduce(timestamp, self.clock.now());
        compose(self.registry, reduced, language)
    }

    /// Like [`Formatter::format`] but for a timestamp that still has to be parsed
    pub fn format_str(&self, input: &str, language: &str) -> Result<String> {
        self.format(parse_timestamp(input)?, language)
    }
}

/// Relative phrase for `timestamp`, using the shared registry and the system clock
///
/// # Example
///
/// ```
/// let now = chrono::Utc::now().timestamp();
/// assert_eq!(reltime::relative_time(now - 86_400, "cs").unwrap(), "včera");
/// ```
pub fn relative_time(timestamp: i64, language: &str) -> Result<String> {
    Formatter::new(i18n::global(), SystemClock).format(timestamp, language)
}

/// Relative phrase for a textual timestamp; fails with `InvalidInput` if it isn't numeric
pub fn relative_time_str(input: &str, language: &str) -> Result<String> {
    Formatter::new(i18n::global(), SystemClock).format_str(input, language)
}

/// Reads seconds since the epoch. Accepts integer, decimal and exponent notation
/// surrounded by whitespace; fractions are rounded to the nearest second.
pub fn parse_timestamp(input: &str) -> Result<i64> {
    let trimmed = input.trim();
    if let Ok(seconds) = trimmed.parse::<i64>() {
        return Ok(seconds);
    }

    let invalid = || Error::InvalidInput(input.to_string());
    // `f64::from_str` also takes "inf" and "NaN", which are not timestamps
    if !trimmed.starts_with(|c: char| c.is_ascii_digit() || matches!(c, '+' | '-' | '.')) {
        return Err(invalid());
    }
    let value = trimmed.parse::<f64>().map_err(|_| invalid())?;
    if !value.is_finite() || value.abs() >= i64::MAX as f64 {
        return Err(invalid());
    }
    Ok(value.round() as i64)
}
