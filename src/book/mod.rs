//! In-memory address book: records keyed by contact name.
//!
//! CHANGELOG:
//! - 08/27/2026 - Initial implementation

pub mod fields;
pub mod record;

use chrono::{Datelike, Duration, Local, NaiveDate};
use thiserror::Error;

pub use fields::{Birthday, Name, Phone, ValidationError};
pub use record::Record;

/// Failures raised by the data model: bad field values and missing lookups.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Phone number not found.")]
    PhoneNotFound,

    #[error("Contact '{0}' not found.")]
    ContactNotFound(String),
}

/// All records, keyed by the name's string value, in insertion order.
///
/// A plain collection with exactly the four domain operations; callers
/// decide whether a missing name is an error.
#[derive(Debug, Default)]
pub struct AddressBook {
    records: Vec<Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, replacing any existing record with the same name.
    pub fn add_record(&mut self, record: Record) {
        let pos = self.records.iter().position(|r| r.name() == record.name());
        match pos {
            Some(pos) => self.records[pos] = record,
            None => self.records.push(record),
        }
    }

    /// Record for `name`, if present. Absence is a normal result.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.name().as_str() == name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.iter_mut().find(|r| r.name().as_str() == name)
    }

    /// Remove the record for `name`; missing names are an error here.
    pub fn delete(&mut self, name: &str) -> Result<(), BookError> {
        match self.records.iter().position(|r| r.name().as_str() == name) {
            Some(pos) => {
                self.records.remove(pos);
                Ok(())
            }
            None => Err(BookError::ContactNotFound(name.to_string())),
        }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records whose birthday falls within the next `days` days from today.
    pub fn upcoming_birthdays(&self, days: u32) -> Vec<&Record> {
        self.upcoming_birthdays_on(Local::now().date_naive(), days)
    }

    /// Records whose birthday, re-anchored onto `today`'s year, falls within
    /// `[today, today + days]`, in book order.
    ///
    /// The anchor never rolls into next year, so a birthday that already
    /// passed this year is excluded even when the window crosses New Year.
    /// Feb 29 has no anchor in a non-leap year; those records are skipped
    /// for that year.
    pub fn upcoming_birthdays_on(&self, today: NaiveDate, days: u32) -> Vec<&Record> {
        let horizon = today + Duration::days(i64::from(days));
        self.records
            .iter()
            .filter(|r| {
                r.birthday().is_some_and(|b| {
                    NaiveDate::from_ymd_opt(today.year(), b.date().month(), b.date().day())
                        .is_some_and(|anchored| today <= anchored && anchored <= horizon)
                })
            })
            .collect()
    }
}
