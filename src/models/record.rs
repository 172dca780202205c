//! Record model representing one contact in the book.

use crate::domain::{Birthday, ContactName, PhoneNumber, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A contact record: one name, an ordered list of phone numbers, and
/// an optional birthday.
///
/// Phones keep insertion order and duplicates are permitted; the store
/// never deduplicates them. The name is immutable once the record is
/// created.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Record {
    name: ContactName,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    phones: Vec<PhoneNumber>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a new record with no phones and no birthday.
    pub fn new(name: ContactName) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    /// The contact's name.
    pub fn name(&self) -> &ContactName {
        &self.name
    }

    /// The phone list in insertion order.
    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    /// The stored birthday, if any.
    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate `value` and append it to the phone list.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if `value` is not
    /// exactly 10 digits; the record is unchanged on failure.
    pub fn add_phone(&mut self, value: &str) -> Result<(), ValidationError> {
        let phone = PhoneNumber::new(value)?;
        self.phones.push(phone);
        Ok(())
    }

    /// Replace every phone equal to `old` with `new`, preserving
    /// position. A no-op when `old` is not present.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if `new` is invalid;
    /// the record is unchanged on failure.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<(), ValidationError> {
        let replacement = PhoneNumber::new(new)?;
        for phone in self.phones.iter_mut() {
            if phone.as_str() == old {
                *phone = replacement.clone();
            }
        }
        Ok(())
    }

    /// Remove every phone equal to `value`. A no-op when absent.
    pub fn remove_phone(&mut self, value: &str) {
        self.phones.retain(|p| p.as_str() != value);
    }

    /// Find the first phone equal to `value`.
    pub fn find_phone(&self, value: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| p.as_str() == value)
    }

    /// Whether any phone equals `value`.
    pub fn has_phone(&self, value: &str) -> bool {
        self.find_phone(value).is_some()
    }

    /// Validate `value` and (re)assign the birthday.
    ///
    /// Adding and editing are behaviorally identical; callers decide
    /// whether to confirm an overwrite first.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if `value` is not a
    /// valid `DD.MM.YYYY` date; the record is unchanged on failure.
    pub fn set_birthday(&mut self, value: &str) -> Result<(), ValidationError> {
        let birthday = Birthday::new(value)?;
        self.birthday = Some(birthday);
        Ok(())
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "Contact name: {}, phones: {}", self.name, phones)?;
        if let Some(birthday) = &self.birthday {
            write!(f, ", birthday: {}", birthday)?;
        }
        Ok(())
    }
}
