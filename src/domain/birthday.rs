//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

// Shape check before the calendar check so "1.2.1990" is rejected
// even though chrono would parse it.
static BIRTHDAY_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{2}\.\d{2}\.\d{4}$").unwrap());

const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

/// A contact's birthday: a calendar date with no time component.
///
/// Parsed from the fixed `DD.MM.YYYY` format (zero-padded, four-digit
/// year) and rendered back to the identical string.
///
/// # Example
///
/// ```
/// use contact_book::domain::Birthday;
///
/// let birthday = Birthday::new("01.02.1990").unwrap();
/// assert_eq!(birthday.to_string(), "01.02.1990");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Create a new Birthday, validating the format and the calendar.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if the input is not
    /// zero-padded `DD.MM.YYYY` or is not a real calendar date.
    pub fn new(value: impl AsRef<str>) -> Result<Self, ValidationError> {
        let value = value.as_ref();

        if !BIRTHDAY_RE.is_match(value) {
            return Err(ValidationError::InvalidBirthday(value.to_string()));
        }

        NaiveDate::parse_from_str(value, BIRTHDAY_FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::InvalidBirthday(value.to_string()))
    }

    /// Get the underlying calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// Re-anchor this birthday's month and day onto the given year.
    ///
    /// The stored year is never mutated; this is used only for
    /// window comparisons. A Feb 29 birthday re-anchored onto a
    /// non-leap year is treated as Mar 1.
    pub fn in_year(&self, year: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, self.0.month(), self.0.day())
            .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, 3, 1).unwrap())
    }
}

// Serde support - serialize as the DD.MM.YYYY string
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_string().serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(s).map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}
