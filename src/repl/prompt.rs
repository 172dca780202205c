//! Confirmation prompt port.
//!
//! The birthday-overwrite confirmation is the one place a handler
//! needs terminal input mid-command. It goes through this trait so the
//! handlers stay testable without simulating a terminal.

use std::io::{self, BufRead, Write};

/// Asks the user a yes/no question.
pub trait ConfirmPrompt {
    /// Present `question` and return true only on an explicit "yes".
    fn confirm(&mut self, question: &str) -> bool;
}

/// Prompt backed by stdin/stdout.
#[derive(Debug, Default)]
pub struct StdinPrompt;

impl ConfirmPrompt for StdinPrompt {
    fn confirm(&mut self, question: &str) -> bool {
        print!("{}", question);
        let _ = io::stdout().flush();

        let mut answer = String::new();
        if io::stdin().lock().read_line(&mut answer).is_err() {
            return false;
        }
        answer.trim().eq_ignore_ascii_case("yes")
    }
}

/// Prompt with canned answers, for tests.
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    answers: Vec<bool>,
    /// Questions asked, most recent last.
    pub asked: Vec<String>,
}

impl ScriptedPrompt {
    /// Answers are consumed in order; further questions get `false`.
    pub fn new(answers: Vec<bool>) -> Self {
        Self {
            answers,
            asked: Vec::new(),
        }
    }
}

impl ConfirmPrompt for ScriptedPrompt {
    fn confirm(&mut self, question: &str) -> bool {
        self.asked.push(question.to_string());
        if self.answers.is_empty() {
            false
        } else {
            self.answers.remove(0)
        }
    }
}
