//! Contact commands: add, change, phone, all.
//!
//! CHANGELOG:
//! - 08/27/2026 - Initial implementation

use crate::book::{AddressBook, BookError, Phone, Record};

use super::CommandError;

const ADD_USAGE: &str = "add <name> <phone>";
const CHANGE_USAGE: &str = "change <name> <old phone> <new phone>";
const PHONE_USAGE: &str = "phone <name>";

/// Add a new contact or append a phone to an existing one.
///
/// Arguments beyond the first two are ignored.
pub fn add(args: &[&str], book: &mut AddressBook) -> Result<String, CommandError> {
    let &[name, phone, ..] = args else {
        return Err(CommandError::ArgumentCount(ADD_USAGE));
    };

    match book.find_mut(name) {
        Some(record) => {
            record.add_phone(phone)?;
            Ok("Contact updated.".to_string())
        }
        None => {
            let mut record = Record::new(name);
            record.add_phone(phone)?;
            book.add_record(record);
            Ok("Contact added.".to_string())
        }
    }
}

/// Replace one phone number on an existing contact.
pub fn change(args: &[&str], book: &mut AddressBook) -> Result<String, CommandError> {
    let &[name, old, new] = args else {
        return Err(CommandError::ArgumentCount(CHANGE_USAGE));
    };

    let record = book
        .find_mut(name)
        .ok_or_else(|| BookError::ContactNotFound(name.to_string()))?;
    record.edit_phone(old, new)?;
    Ok(format!("Phone for {name} updated from {old} to {new}."))
}

/// Show every phone number stored for a contact.
pub fn phone(args: &[&str], book: &AddressBook) -> Result<String, CommandError> {
    let &[name] = args else {
        return Err(CommandError::ArgumentCount(PHONE_USAGE));
    };

    let record = book
        .find(name)
        .ok_or_else(|| BookError::ContactNotFound(name.to_string()))?;
    let phones = record
        .phones()
        .iter()
        .map(Phone::as_str)
        .collect::<Vec<_>>()
        .join("; ");
    Ok(format!("{name}: {phones}"))
}

/// Render every record, one per line.
pub fn all(book: &AddressBook) -> String {
    if book.is_empty() {
        return "No contacts.".to_string();
    }
    book.records()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::book::ValidationError;

    #[test]
    fn test_add_then_update() {
        let mut book = AddressBook::new();

        let message = add(&["Alice", "1234567890"], &mut book).unwrap();
        assert_eq!(message, "Contact added.");

        let message = add(&["Alice", "0000000000"], &mut book).unwrap();
        assert_eq!(message, "Contact updated.");
        assert_eq!(book.find("Alice").unwrap().phones().len(), 2);
    }

    #[test]
    fn test_add_rejects_bad_phone() {
        let mut book = AddressBook::new();
        assert_eq!(
            add(&["Alice", "12345"], &mut book),
            Err(BookError::Validation(ValidationError::PhoneFormat).into())
        );
        // The contact is not created when the first phone is invalid.
        assert!(book.find("Alice").is_none());
    }

    #[test]
    fn test_add_requires_two_arguments() {
        let mut book = AddressBook::new();
        assert_eq!(
            add(&["Alice"], &mut book),
            Err(CommandError::ArgumentCount(ADD_USAGE))
        );
    }

    #[test]
    fn test_change_unknown_contact() {
        let mut book = AddressBook::new();
        let err = change(&["Bob", "1111111111", "2222222222"], &mut book).unwrap_err();
        assert_eq!(err.to_string(), "Contact 'Bob' not found.");
    }

    #[test]
    fn test_change_then_phone() {
        let mut book = AddressBook::new();
        add(&["Bob", "1111111111"], &mut book).unwrap();

        let message = change(&["Bob", "1111111111", "2222222222"], &mut book).unwrap();
        assert_eq!(message, "Phone for Bob updated from 1111111111 to 2222222222.");
        assert_eq!(phone(&["Bob"], &book).unwrap(), "Bob: 2222222222");
    }

    #[test]
    fn test_change_requires_exactly_three_arguments() {
        let mut book = AddressBook::new();
        assert_eq!(
            change(&["Bob", "1111111111"], &mut book),
            Err(CommandError::ArgumentCount(CHANGE_USAGE))
        );
        assert_eq!(
            change(&["Bob", "1111111111", "2222222222", "extra"], &mut book),
            Err(CommandError::ArgumentCount(CHANGE_USAGE))
        );
    }

    #[test]
    fn test_change_unknown_phone() {
        let mut book = AddressBook::new();
        add(&["Bob", "1111111111"], &mut book).unwrap();
        let err = change(&["Bob", "3333333333", "2222222222"], &mut book).unwrap_err();
        assert_eq!(err.to_string(), "Phone number not found.");
    }

    #[test]
    fn test_phone_requires_exactly_one_argument() {
        let book = AddressBook::new();
        assert_eq!(
            phone(&[], &book),
            Err(CommandError::ArgumentCount(PHONE_USAGE))
        );
        assert_eq!(
            phone(&["Bob", "extra"], &book),
            Err(CommandError::ArgumentCount(PHONE_USAGE))
        );
    }

    #[test]
    fn test_phone_joins_all_numbers() {
        let mut book = AddressBook::new();
        add(&["Alice", "1234567890"], &mut book).unwrap();
        add(&["Alice", "0987654321"], &mut book).unwrap();
        assert_eq!(
            phone(&["Alice"], &book).unwrap(),
            "Alice: 1234567890; 0987654321"
        );
    }

    #[test]
    fn test_all_sentinel_and_rendering() {
        let mut book = AddressBook::new();
        assert_eq!(all(&book), "No contacts.");

        add(&["Alice", "1234567890"], &mut book).unwrap();
        assert_eq!(
            all(&book),
            "Name: Alice, Phones: 1234567890, Birthday: No birthday"
        );
    }
}
