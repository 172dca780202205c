//! The line-oriented command loop.
//!
//! One command per line, space-separated tokens. Every handler error
//! is formatted as a one-line message here; nothing a handler does can
//! terminate the loop. Only `close`/`exit` (or end of input) stop it.

pub mod commands;
pub mod output;
pub mod prompt;

pub use output::Painter;
pub use prompt::{ConfirmPrompt, ScriptedPrompt, StdinPrompt};

use crate::book::AddressBook;
use crate::error::CommandError;
use chrono::{Local, NaiveDate};
use std::io::{self, BufRead, Write};
use std::path::Path;
use tracing::debug;

/// What the loop does after executing one input line.
#[derive(Debug, PartialEq, Eq)]
pub enum ReplAction {
    /// Print the message (if any) and read the next command.
    Continue(String),
    /// Print the farewell and stop with exit code 0.
    Quit(String),
}

/// Convert a handler error to its one-line colored message.
///
/// Lookup misses and incomplete commands are soft (yellow); bad input
/// and persistence failures are hard (red).
fn format_error(err: &CommandError, painter: Painter) -> String {
    match err {
        CommandError::NotFound | CommandError::IncompleteCommand => {
            painter.yellow(&err.to_string())
        }
        CommandError::Validation(_) | CommandError::Persistence(_) => {
            painter.red(&err.to_string())
        }
    }
}

/// Execute one input line against the book.
///
/// Pure with respect to the terminal except for the confirmation
/// `prompt` port; `today` is injected so the birthday report is
/// testable.
pub fn execute(
    line: &str,
    book: &mut AddressBook,
    book_path: &Path,
    prompt: &mut dyn ConfirmPrompt,
    today: NaiveDate,
    painter: Painter,
) -> ReplAction {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some((&command, args)) = tokens.split_first() else {
        return ReplAction::Continue(String::new());
    };

    debug!(command, "dispatching");

    let result = match command {
        "close" | "exit" => return ReplAction::Quit("Good bye!".to_string()),
        "hello" => Ok("How can I help you?".to_string()),
        "add" => commands::add_contact(args, book),
        "change" => commands::change_contact(args, book),
        "find" => commands::find_contact(args, book),
        "delete" => commands::delete_contact(args, book),
        "all" => commands::show_all(book),
        "save" => commands::save_book(book, book_path).map(|m| painter.green(&m)),
        "load" => commands::load_book(book, book_path).map(|m| painter.green(&m)),
        "add-birthday" => commands::add_birthday(args, book, prompt),
        "show-birthday" => commands::show_birthday(args, book),
        "birthdays" => commands::upcoming_birthdays(book, today),
        "help" => Ok(commands::help_text().to_string()),
        _ => Ok(format!(
            "'{}' is an unrecognized command. Please provide a valid command.",
            command
        )),
    };

    match result {
        Ok(msg) => ReplAction::Continue(msg),
        Err(err) => ReplAction::Continue(format_error(&err, painter)),
    }
}

/// Run the loop over stdin until `close`/`exit` or end of input.
pub fn run(book: &mut AddressBook, book_path: &Path, painter: Painter) -> io::Result<()> {
    let stdin = io::stdin();
    let mut prompt = StdinPrompt;

    loop {
        print!("{} ", painter.cyan("Enter a command:"));
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            // End of input behaves like exit
            println!("Good bye!");
            return Ok(());
        }

        let today = Local::now().date_naive();
        match execute(&line, book, book_path, &mut prompt, today, painter) {
            ReplAction::Continue(msg) => {
                if !msg.is_empty() {
                    println!("{}", msg);
                }
            }
            ReplAction::Quit(msg) => {
                println!("{}", msg);
                return Ok(());
            }
        }
    }
}
