// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Help text generation with colorization support.

use crate::colors;
use clap::builder::styling::Styles;
use clap::ColorChoice;

/// Generate clap Styles for help output.
pub fn styles() -> Styles {
    if !colors::should_colorize() {
        return Styles::plain();
    }

    use anstyle::{Ansi256Color, Color, Style};

    let header = Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(colors::codes::HEADER))));
    let literal = Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(colors::codes::LITERAL))));
    let context = Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(colors::codes::CONTEXT))));

    Styles::styled()
        .header(header)
        .usage(header)
        .literal(literal)
        .placeholder(context)
        .valid(context)
}

/// Color choice for clap's own rendering, kept in line with [`styles`].
pub fn color_choice() -> ColorChoice {
    if colors::should_colorize() {
        ColorChoice::Always
    } else {
        ColorChoice::Never
    }
}

/// Main help template with colorized Options header.
pub fn template() -> String {
    format!(
        "{{about-with-newline}}
{{usage-heading}} {{usage}}

{{before-help}}
{}
{{options}}

{{after-help}}",
        colors::header("Options:")
    )
}

/// Commands list shown before options in main help.
pub fn commands() -> String {
    colors::sections(
        "\
Commands:
  check                  Print the template and exit with its status
  check help             Show this help
  check version          Show version
  check init [path]      Write a starter template (-f, --force to overwrite)",
    )
}

/// Environment and template format notes shown after options.
pub fn reference() -> String {
    colors::sections(
        "\
Environment:
  CHECK_FILE    Path to the template (default: <tmp>/.check.md)
  CHECK_LOG     Log filter for stderr diagnostics (default: warn)

Template format:
  - Markdown file treated as plain text
  - HTML comments <!-- ... --> are ignored
  - Optional directive: @status <code>",
    )
}

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
