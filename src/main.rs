//! contactbook - interactive address-book assistant.
//!
//! In-memory contacts with phones and birthdays, driven by a line-based
//! command loop on stdin/stdout.
//!
//! CHANGELOG:
//! - 08/27/2026 - Initial implementation

use std::process::ExitCode;

use clap::Parser;

use contactbook::book::AddressBook;
use contactbook::repl;

/// Interactive address-book assistant.
#[derive(Parser, Debug)]
#[command(name = "contactbook")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Days ahead the `birthdays` command scans (1-365)
    #[arg(short, long, default_value_t = 7)]
    window: u32,
}

fn main() -> ExitCode {
    // Logs go to stderr so they never interleave with replies on stdout.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let cli = Cli::parse();
    let mut book = AddressBook::new();

    match repl::run(&mut book, cli.window) {
        Ok(()) => ExitCode::from(0),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(1)
        }
    }
}
