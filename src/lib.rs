//! Contact Book - an interactive command-line contact manager.
//!
//! Stores names, phone numbers, and birthdays, supports lookup by name
//! or phone, computes which contacts have birthdays in the upcoming
//! work week, and persists the whole book to a single local file
//! between sessions.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (name, phone, birthday)
//! - **models**: The Record aggregate
//! - **book**: The name-keyed store of records
//! - **schedule**: The upcoming-birthday computation
//! - **persistence**: Whole-book save/load
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration from environment variables
//! - **repl**: Command parsing, handlers, and the interactive loop

pub mod book;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod persistence;
pub mod repl;
pub mod schedule;

pub use book::AddressBook;
pub use config::Config;
pub use domain::{Birthday, ContactName, PhoneNumber, ValidationError};
pub use error::{CommandError, ConfigError, PersistenceError};
pub use models::Record;
pub use repl::{ConfirmPrompt, Painter, ReplAction, StdinPrompt};
pub use schedule::{upcoming_birthdays, WeekSchedule};
