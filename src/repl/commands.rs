//! Command handlers.
//!
//! Each handler translates parsed tokens into store operations and
//! returns `Result<String, CommandError>`; the loop boundary formats
//! errors into one-line messages. No handler terminates the loop.

use crate::book::AddressBook;
use crate::domain::ContactName;
use crate::error::{CommandError, CommandResult};
use crate::models::Record;
use crate::persistence;
use crate::repl::prompt::ConfirmPrompt;
use crate::schedule;
use chrono::NaiveDate;
use std::path::Path;
use tracing::debug;

/// `add <name> <phone>`: create the contact if missing, then append
/// the phone.
pub fn add_contact(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let &[name, phone] = args else {
        return Err(CommandError::IncompleteCommand);
    };

    if book.find(name).is_none() {
        let record = Record::new(ContactName::new(name)?);
        book.add_record(record);
        debug!(name, "contact created");
    }

    // The record was just inserted if it was missing
    let record = book.find_mut(name).ok_or(CommandError::NotFound)?;
    record.add_phone(phone)?;

    Ok("Contact added.".to_string())
}

/// `change <name> <old_phone> <new_phone>`: replace matching phone(s).
pub fn change_contact(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let &[name, old_phone, new_phone] = args else {
        return Err(CommandError::IncompleteCommand);
    };

    let record = book.find_mut(name).ok_or(CommandError::NotFound)?;
    record.edit_phone(old_phone, new_phone)?;

    Ok("Contact updated.".to_string())
}

/// `find <name_or_phone>`: look up by name first, then by phone.
pub fn find_contact(args: &[&str], book: &AddressBook) -> CommandResult<String> {
    let &[query] = args else {
        return Err(CommandError::IncompleteCommand);
    };

    let record = book
        .find(query)
        .or_else(|| book.find_by_phone(query))
        .ok_or(CommandError::NotFound)?;

    Ok(record.to_string())
}

/// `delete <name>`: remove the contact. Idempotent.
pub fn delete_contact(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let &[name] = args else {
        return Err(CommandError::IncompleteCommand);
    };

    book.delete(name);
    Ok(format!("Deleted record for {}.", name))
}

/// `all`: list every contact, sorted by name for a stable listing.
pub fn show_all(book: &AddressBook) -> CommandResult<String> {
    if book.is_empty() {
        return Ok("No contacts found.".to_string());
    }

    let mut records: Vec<&Record> = book.all_records().collect();
    records.sort_by(|a, b| a.name().as_str().cmp(b.name().as_str()));

    Ok(records
        .iter()
        .map(|r| r.to_string())
        .collect::<Vec<_>>()
        .join("\n"))
}

/// `add-birthday <name> <DD.MM.YYYY>`: set the birthday, asking before
/// overwriting an existing one.
pub fn add_birthday(
    args: &[&str],
    book: &mut AddressBook,
    prompt: &mut dyn ConfirmPrompt,
) -> CommandResult<String> {
    let &[name, birthday] = args else {
        return Err(CommandError::IncompleteCommand);
    };

    let record = book.find_mut(name).ok_or(CommandError::NotFound)?;

    if let Some(existing) = record.birthday() {
        let question = format!(
            "{} already has a birthday on {}. Would you like to change it? (yes/no): ",
            name, existing
        );
        if !prompt.confirm(&question) {
            return Ok("Birthday was not changed.".to_string());
        }
        record.set_birthday(birthday)?;
        return Ok(format!("{}'s birthday updated to {}.", name, birthday));
    }

    record.set_birthday(birthday)?;
    Ok("Birthday added.".to_string())
}

/// `show-birthday <name>`: print the stored birthday.
pub fn show_birthday(args: &[&str], book: &AddressBook) -> CommandResult<String> {
    let &[name] = args else {
        return Err(CommandError::IncompleteCommand);
    };

    let record = book.find(name).ok_or(CommandError::NotFound)?;
    match record.birthday() {
        Some(birthday) => Ok(format!("{}'s birthday is on {}.", record.name(), birthday)),
        None => Ok("No birthday set for this contact.".to_string()),
    }
}

/// `birthdays`: the report for the week containing `today`.
pub fn upcoming_birthdays(book: &AddressBook, today: NaiveDate) -> CommandResult<String> {
    let week = schedule::upcoming_birthdays(today, book.all_records());
    if week.is_empty() {
        Ok("No birthdays in the upcoming week.".to_string())
    } else {
        Ok(week.to_string())
    }
}

/// `save`: persist the book to its configured location.
pub fn save_book(book: &AddressBook, path: &Path) -> CommandResult<String> {
    persistence::save(book, path)?;
    Ok("Address book saved successfully!".to_string())
}

/// `load`: replace the in-memory book from its configured location.
///
/// On failure the in-memory book is left untouched.
pub fn load_book(book: &mut AddressBook, path: &Path) -> CommandResult<String> {
    *book = persistence::load(path)?;
    Ok("Address book loaded successfully!".to_string())
}

/// `help`: the static command list.
pub fn help_text() -> &'static str {
    "Available commands:\n\
     hello: Greet the program.\n\
     add: Add a contact. Format: add <name> <phone>\n\
     change: Change a contact's phone number. Format: change <name> <old_phone> <new_phone>\n\
     find: Find a contact by name or phone. Format: find <name_or_phone>\n\
     delete: Delete a contact by name. Format: delete <name>\n\
     all: Show all contacts.\n\
     save: Save the address book to a file.\n\
     load: Load the address book from a file.\n\
     add-birthday: Add or change a contact's birthday. Format: add-birthday <name> <DD.MM.YYYY>\n\
     show-birthday: Show a contact's birthday. Format: show-birthday <name>\n\
     birthdays: Show upcoming birthdays for the week.\n\
     help: Display available commands and their descriptions.\n\
     close: Exit the program.\n\
     exit: Exit the program."
}
