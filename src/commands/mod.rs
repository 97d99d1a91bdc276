//! Command handlers for the interactive loop.
//!
//! Each handler maps already-tokenized arguments (plus the book) to a reply
//! string or a recoverable [`CommandError`]. The loop converts errors into
//! reply lines through [`reply`]; nothing here terminates the process.
//!
//! CHANGELOG:
//! - 08/27/2026 - Initial module structure

pub mod birthdays;
pub mod contacts;

use thiserror::Error;

use crate::book::BookError;

/// Recoverable handler failures, one variant per user-visible kind.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Not enough arguments. Usage: {0}")]
    ArgumentCount(&'static str),

    #[error(transparent)]
    Book(#[from] BookError),
}

/// Convert a handler result into the reply line shown to the user.
pub fn reply(result: Result<String, CommandError>) -> String {
    match result {
        Ok(message) => message,
        Err(err) => {
            tracing::warn!(error = %err, "command failed");
            err.to_string()
        }
    }
}
