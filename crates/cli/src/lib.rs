//! `rosterlink-cli` — wiring between the IO layer and the engine.
//!
//! The binary stays thin: argument parsing and exit-code mapping live in
//! `main.rs`; everything testable lives here.

pub mod exit_codes;
pub mod run;
pub mod serialize;

use exit_codes::{EXIT_INVALID_CONFIG, EXIT_READ, EXIT_USAGE, EXIT_WRITE};

#[derive(Debug)]
pub struct CliError {
    pub code: u8,
    pub message: String,
    pub hint: Option<String>,
}

impl CliError {
    pub fn usage(msg: impl Into<String>) -> Self {
        Self { code: EXIT_USAGE, message: msg.into(), hint: None }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self { code: EXIT_INVALID_CONFIG, message: msg.into(), hint: None }
    }

    pub fn read(msg: impl Into<String>) -> Self {
        Self { code: EXIT_READ, message: msg.into(), hint: None }
    }

    pub fn write(msg: impl Into<String>) -> Self {
        Self { code: EXIT_WRITE, message: msg.into(), hint: None }
    }

    /// Add a hint to an existing error.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}
