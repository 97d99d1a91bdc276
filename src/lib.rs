//! contactbook library
//!
//! Exposes the address-book data model, command handlers, and the
//! interactive loop for the binary and for tests.
//!
//! CHANGELOG:
//! - 08/27/2026 - Initial library structure

// Core modules
pub mod book;
pub mod commands;
pub mod repl;
