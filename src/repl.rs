//! Interactive command loop: prompt, tokenize, dispatch, print.
//!
//! CHANGELOG:
//! - 08/27/2026 - Initial implementation

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};

use crate::book::AddressBook;
use crate::commands::{self, reply};

/// Split an input line into a lowercased command name and its arguments.
///
/// Returns `None` for blank lines.
pub fn parse_input(line: &str) -> Option<(String, Vec<&str>)> {
    let mut tokens = line.split_whitespace();
    let command = tokens.next()?.to_lowercase();
    Some((command, tokens.collect()))
}

/// Run the interactive loop until `close`/`exit` or EOF on stdin.
///
/// Every command is fully processed before the next line is read; all
/// recoverable errors become reply lines and the loop continues.
pub fn run(book: &mut AddressBook, window_days: u32) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut stdout = io::stdout();

    println!("Welcome to the assistant bot!");

    loop {
        print!("Enter a command: ");
        stdout.flush().context("Failed to flush stdout")?;

        let mut line = String::new();
        let bytes_read = input
            .read_line(&mut line)
            .context("Failed to read from stdin")?;
        if bytes_read == 0 {
            // EOF ends the session like an explicit exit.
            println!("Good bye!");
            return Ok(());
        }

        let Some((command, args)) = parse_input(&line) else {
            continue;
        };
        tracing::debug!(command = %command, argc = args.len(), "dispatching");

        match command.as_str() {
            "close" | "exit" => {
                println!("Good bye!");
                return Ok(());
            }
            "hello" => println!("How can I help you?"),
            "add" => println!("{}", reply(commands::contacts::add(&args, book))),
            "change" => println!("{}", reply(commands::contacts::change(&args, book))),
            "phone" => println!("{}", reply(commands::contacts::phone(&args, book))),
            "all" => println!("{}", commands::contacts::all(book)),
            "add-birthday" => {
                println!("{}", reply(commands::birthdays::add_birthday(&args, book)))
            }
            "show-birthday" => {
                println!("{}", reply(commands::birthdays::show_birthday(&args, book)))
            }
            "birthdays" => println!("{}", commands::birthdays::upcoming(book, window_days)),
            _ => println!("Invalid command."),
        }
    }
}
