// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use crate::help;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "check")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(disable_version_flag = true)]
#[command(disable_help_subcommand = true)]
#[command(about = "check - process markdown template and return exit status")]
#[command(
    long_about = "check - process markdown template and return exit status\n\n\
    Prints the template with comments and directives removed, then exits with \
    the code from its @status directive."
)]
#[command(help_template = help::template())]
#[command(before_help = help::commands())]
#[command(after_help = help::reference())]
#[command(styles = help::styles())]
#[command(color = help::color_choice())]
// Allow the unit type field pattern which is required for clap's ArgAction::Version/Help
#[allow(clippy::manual_non_exhaustive)]
pub struct Cli {
    /// Print version
    #[arg(short = 'v', short_alias = 'V', long = "version", action = clap::ArgAction::Version)]
    version: (),

    #[command(subcommand)]
    pub command: Option<Command>,

    // Anything that is not a known command or flag runs template mode;
    // these arguments are ignored
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub rest: Vec<String>,
}

impl Cli {
    /// The command to run, or `None` for template mode.
    pub fn into_command(self) -> Option<Command> {
        if !self.rest.is_empty() {
            tracing::debug!(args = ?self.rest, "ignoring arguments in template mode");
        }
        self.command
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Write a starter template
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,

        /// Where to write the template (default: <tmp>/.check.md)
        #[arg(value_name = "path")]
        path: Option<String>,
    },

    /// Show version
    Version,

    /// Show help
    #[command(disable_help_flag = true)]
    Help {
        // Ignored, like every argument after `help`
        #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
