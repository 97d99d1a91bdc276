//! A single contact: name, phone numbers, optional birthday.
//!
//! CHANGELOG:
//! - 08/27/2026 - Initial implementation

use std::fmt;

use super::fields::{Birthday, Name, Phone};
use super::BookError;

/// One contact entry.
///
/// The name is fixed at construction. Phones keep insertion order and may
/// contain duplicates. At most one birthday is stored; setting it again
/// replaces the previous value.
#[derive(Debug, Clone)]
pub struct Record {
    name: Name,
    phones: Vec<Phone>,
    birthday: Option<Birthday>,
}

impl Record {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Name::new(name),
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<Birthday> {
        self.birthday
    }

    /// Validate and append a phone number. No dedup.
    pub fn add_phone(&mut self, number: &str) -> Result<(), BookError> {
        self.phones.push(Phone::parse(number)?);
        Ok(())
    }

    /// Remove every phone equal to `number`. Silently a no-op when none match.
    pub fn remove_phone(&mut self, number: &str) {
        self.phones.retain(|p| p.as_str() != number);
    }

    /// Replace the first phone equal to `old` with a validated `new`.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<(), BookError> {
        let replacement = Phone::parse(new)?;
        match self.phones.iter_mut().find(|p| p.as_str() == old) {
            Some(slot) => {
                *slot = replacement;
                Ok(())
            }
            None => Err(BookError::PhoneNotFound),
        }
    }

    /// First phone equal to `number`; absence is a normal result.
    pub fn find_phone(&self, number: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == number)
    }

    /// Validate and store a birthday, replacing any previous value.
    pub fn set_birthday(&mut self, text: &str) -> Result<(), BookError> {
        self.birthday = Some(Birthday::parse(text)?);
        Ok(())
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "Name: {}, Phones: {}, Birthday: ", self.name, phones)?;
        match self.birthday {
            Some(birthday) => write!(f, "{birthday}"),
            None => f.write_str("No birthday"),
        }
    }
}
