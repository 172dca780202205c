//! Stateless ANSI color formatting for the REPL boundary.
//!
//! Colors are cosmetic and live entirely at the presentation layer;
//! the core never sees them. A painter built with colors disabled
//! (for `NO_COLOR` or non-terminal output) passes text through
//! unchanged.

const GREEN: &str = "\x1b[92m";
const YELLOW: &str = "\x1b[93m";
const RED: &str = "\x1b[91m";
const CYAN: &str = "\x1b[96m";
const RESET: &str = "\x1b[0m";

/// Formats REPL text with optional ANSI colors.
#[derive(Debug, Clone, Copy)]
pub struct Painter {
    enabled: bool,
}

impl Painter {
    /// Create a painter; `enabled` controls whether escapes are emitted.
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    fn wrap(&self, code: &str, text: &str) -> String {
        if self.enabled {
            format!("{}{}{}", code, text, RESET)
        } else {
            text.to_string()
        }
    }

    /// Success messages.
    pub fn green(&self, text: &str) -> String {
        self.wrap(GREEN, text)
    }

    /// Soft errors: lookup misses, incomplete commands.
    pub fn yellow(&self, text: &str) -> String {
        self.wrap(YELLOW, text)
    }

    /// Hard errors: validation and persistence failures.
    pub fn red(&self, text: &str) -> String {
        self.wrap(RED, text)
    }

    /// The input prompt.
    pub fn cyan(&self, text: &str) -> String {
        self.wrap(CYAN, text)
    }
}
