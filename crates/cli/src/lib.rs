// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! checkrs - the command-line glue behind the `check` tool.
//!
//! `check` reads a Markdown-like template, prints it without HTML comments
//! or `@status` directives, and exits with the directive's code. The text
//! processing lives in [`check_core`]; this crate resolves the template
//! path, reads and writes files, and dispatches subcommands.
//!
//! # Main Components
//!
//! - [`Cli`] / [`Command`] - argument parsing
//! - [`config`] - template location, reading, and the `init` scaffold
//! - [`Error`] - errors from file access and output
//!
//! ```rust,ignore
//! use clap::Parser;
//! use checkrs::Cli;
//!
//! let cli = Cli::parse();
//! let status = checkrs::run(cli.into_command())?;
//! std::process::exit(status);
//! ```

mod cli;
pub mod colors;
mod commands;
pub mod help;
pub mod logging;

pub mod config;
pub mod env;
pub mod error;

#[cfg(test)]
mod test_env;

pub use cli::{Cli, Command};
pub use error::{Error, Result};

/// Execute a CLI command and return the process exit status.
///
/// Template mode returns the status from the template's directive; every
/// other command returns 0 on success.
pub fn run(command: Option<Command>) -> Result<i32> {
    match command {
        None => commands::template::run(),
        Some(Command::Init { force, path }) => commands::init::run(path, force).map(|()| 0),
        Some(Command::Version) => commands::version::run().map(|()| 0),
        Some(Command::Help { .. }) => commands::help::run().map(|()| 0),
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
