//! Whole-book persistence.
//!
//! The book is serialized as a single JSON document. Saving writes to
//! a sibling temp file and renames it over the target, so the on-disk
//! file is never left partially written. Loading a missing file yields
//! an empty book; corrupt or foreign content is an error.

use crate::book::AddressBook;
use crate::error::PersistenceResult;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Serialize the entire book to `path`.
///
/// The write goes to `<path>.tmp` first and is renamed into place.
///
/// # Errors
///
/// Returns `PersistenceError::Io` when the file or its temp sibling
/// cannot be written.
pub fn save(book: &AddressBook, path: impl AsRef<Path>) -> PersistenceResult<()> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(book)?;

    let tmp = path.with_extension("tmp");
    fs::write(&tmp, json)?;
    fs::rename(&tmp, path)?;

    info!(path = %path.display(), records = book.len(), "book saved");
    Ok(())
}

/// Deserialize a previously saved book from `path`.
///
/// A missing file is not an error: it yields an empty book.
///
/// # Errors
///
/// Returns `PersistenceError::Io` when the file exists but cannot be
/// read, and `PersistenceError::Corrupt` when its content is not a
/// valid book.
pub fn load(path: impl AsRef<Path>) -> PersistenceResult<AddressBook> {
    let path = path.as_ref();

    if !path.exists() {
        debug!(path = %path.display(), "no book file, starting empty");
        return Ok(AddressBook::new());
    }

    let json = fs::read_to_string(path)?;
    let book: AddressBook = serde_json::from_str(&json)?;

    info!(path = %path.display(), records = book.len(), "book loaded");
    Ok(book)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ContactName;
    use crate::error::PersistenceError;
    use crate::models::Record;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "contact-book-{}-{}.json",
            name,
            std::process::id()
        ))
    }

    #[test]
    fn test_load_missing_file_is_empty_book() {
        let book = load(temp_path("does-not-exist")).unwrap();
        assert!(book.is_empty());
    }

    #[test]
    fn test_save_load_round_trip() {
        let path = temp_path("round-trip");

        let mut book = AddressBook::new();
        let mut rec = Record::new(ContactName::new("John").unwrap());
        rec.add_phone("1234567890").unwrap();
        rec.add_phone("0987654321").unwrap();
        rec.set_birthday("01.02.1990").unwrap();
        book.add_record(rec);

        save(&book, &path).unwrap();
        let loaded = load(&path).unwrap();
        assert_eq!(loaded, book);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_save_overwrites_previous_content() {
        let path = temp_path("overwrite");

        let mut book = AddressBook::new();
        book.add_record(Record::new(ContactName::new("John").unwrap()));
        save(&book, &path).unwrap();

        book.delete("John");
        save(&book, &path).unwrap();

        assert!(load(&path).unwrap().is_empty());
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_load_corrupt_file_fails() {
        let path = temp_path("corrupt");
        fs::write(&path, "not a book").unwrap();

        let result = load(&path);
        assert!(matches!(result, Err(PersistenceError::Corrupt(_))));

        fs::remove_file(&path).unwrap();
    }
}
