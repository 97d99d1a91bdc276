//! Birthday commands: add-birthday, show-birthday, birthdays.
//!
//! CHANGELOG:
//! - 08/27/2026 - Initial implementation

use crate::book::{AddressBook, BookError, Record};

use super::CommandError;

const ADD_USAGE: &str = "add-birthday <name> <DD.MM.YYYY>";
const SHOW_USAGE: &str = "show-birthday <name>";

/// Set (or replace) a contact's birthday.
pub fn add_birthday(args: &[&str], book: &mut AddressBook) -> Result<String, CommandError> {
    let &[name, date] = args else {
        return Err(CommandError::ArgumentCount(ADD_USAGE));
    };

    let record = book
        .find_mut(name)
        .ok_or_else(|| BookError::ContactNotFound(name.to_string()))?;
    record.set_birthday(date)?;
    Ok(format!("Birthday for {name} added as {date}."))
}

/// Show the stored birthday for a contact.
pub fn show_birthday(args: &[&str], book: &AddressBook) -> Result<String, CommandError> {
    let &[name] = args else {
        return Err(CommandError::ArgumentCount(SHOW_USAGE));
    };

    let record = book
        .find(name)
        .ok_or_else(|| BookError::ContactNotFound(name.to_string()))?;
    Ok(match record.birthday() {
        Some(birthday) => format!("{name}'s birthday is on {birthday}."),
        None => format!("{name} does not have a birthday set."),
    })
}

/// Render contacts with a birthday in the next `days` days, one per line.
pub fn upcoming(book: &AddressBook, days: u32) -> String {
    render_upcoming(&book.upcoming_birthdays(days), days)
}

fn render_upcoming(records: &[&Record], days: u32) -> String {
    if records.is_empty() {
        return format!("No birthdays in the next {days} days.");
    }
    records
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}
