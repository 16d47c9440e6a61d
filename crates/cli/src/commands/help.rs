// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use clap::CommandFactory;

use crate::cli::Cli;
use crate::error::Result;

/// Print the long help, the same text `--help` shows.
pub fn run() -> Result<()> {
    Cli::command().print_long_help()?;
    Ok(())
}
