//! Validated field value types: contact name, phone number, birthday.
//!
//! CHANGELOG:
//! - 08/27/2026 - Initial implementation

use std::fmt;

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Exactly 10 ASCII digits, no separators, no leading `+`.
static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{10}$").expect("phone pattern compiles"));

/// Shape check for `DD.MM.YYYY`. Chrono alone would accept unpadded
/// day/month, so the shape is enforced before parsing.
static DATE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{2}\.[0-9]{2}\.[0-9]{4}$").expect("date pattern compiles"));

/// A field value failed its format rule.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("phone must contain exactly 10 digits")]
    PhoneFormat,

    #[error("invalid date format, expected DD.MM.YYYY")]
    BirthdayFormat,
}

/// Contact name; the unique key for a record inside the book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Name(String);

impl Name {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A phone number: exactly 10 decimal digits.
///
/// Every constructed value satisfies the pattern; rendering returns the
/// digit string unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phone(String);

impl Phone {
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        if PHONE_PATTERN.is_match(value) {
            Ok(Self(value.to_string()))
        } else {
            Err(ValidationError::PhoneFormat)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A birthday: a real calendar date parsed strictly from `DD.MM.YYYY`.
///
/// Rendering re-formats as `DD.MM.YYYY`, so parse-then-render round-trips
/// to the identical string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Birthday(NaiveDate);

impl Birthday {
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        if !DATE_PATTERN.is_match(value) {
            return Err(ValidationError::BirthdayFormat);
        }
        NaiveDate::parse_from_str(value, "%d.%m.%Y")
            .map(Self)
            .map_err(|_| ValidationError::BirthdayFormat)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%d.%m.%Y"))
    }
}
