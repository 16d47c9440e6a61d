// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal color utilities for help output.
//!
//! Respects environment variables:
//! - `NO_COLOR=1`: Disables colors
//! - `COLOR=1`: Forces colors even without TTY

use std::io::IsTerminal;

use crate::env;

/// ANSI 256-color codes for help output
pub mod codes {
    /// Section headers: pastel cyan/steel blue
    pub const HEADER: u8 = 74;
    /// Commands/literals: light grey
    pub const LITERAL: u8 = 250;
    /// Placeholders/context: medium grey
    pub const CONTEXT: u8 = 245;
}

/// Check if colors should be enabled based on TTY and environment variables.
pub fn should_colorize() -> bool {
    if env::no_color() {
        return false;
    }
    if env::force_color() {
        return true;
    }
    std::io::stdout().is_terminal()
}

/// Format a 256-color ANSI escape sequence for foreground color.
fn fg256(code: u8) -> String {
    format!("\x1b[38;5;{code}m")
}

/// ANSI reset sequence.
const RESET: &str = "\x1b[0m";

fn paint(code: u8, text: &str) -> String {
    if should_colorize() {
        format!("{}{}{}", fg256(code), text, RESET)
    } else {
        text.to_string()
    }
}

/// Apply header color (section titles) to text.
pub fn header(text: &str) -> String {
    paint(codes::HEADER, text)
}

/// Apply literal color (commands, options) to text.
pub fn literal(text: &str) -> String {
    paint(codes::LITERAL, text)
}

/// Apply context color (placeholders, hints) to text.
pub fn context(text: &str) -> String {
    paint(codes::CONTEXT, text)
}

/// Colorize a block of help sections.
///
/// Lines ending with `:` become headers. Indented lines of the form
/// `name    description` get the name colored as a literal, with any
/// `<placeholder>` inside it dimmed. Everything else is left as-is.
pub fn sections(text: &str) -> String {
    if !should_colorize() {
        return text.to_string();
    }

    let mut result = String::with_capacity(text.len() + 256);
    for line in text.lines() {
        if !result.is_empty() {
            result.push('\n');
        }

        let trimmed = line.trim_start();
        let indent = &line[..line.len() - trimmed.len()];

        if !trimmed.is_empty() && trimmed.ends_with(':') && !trimmed.contains("  ") {
            result.push_str(indent);
            result.push_str(&header(trimmed));
            continue;
        }

        match trimmed.find("  ") {
            Some(end) if !indent.is_empty() => {
                result.push_str(indent);
                result.push_str(&colorize_term(&trimmed[..end]));
                result.push_str(&trimmed[end..]);
            }
            _ => result.push_str(line),
        }
    }
    result
}

/// Color a term as a literal, dimming `<placeholder>` segments.
fn colorize_term(term: &str) -> String {
    let mut result = String::with_capacity(term.len() + 64);
    let mut rest = term;
    while let Some(open) = rest.find('<') {
        let close = rest[open..].find('>').map_or(rest.len(), |i| open + i + 1);
        if open > 0 {
            result.push_str(&literal(&rest[..open]));
        }
        result.push_str(&context(&rest[open..close]));
        rest = &rest[close..];
    }
    if !rest.is_empty() {
        result.push_str(&literal(rest));
    }
    result
}

#[cfg(test)]
#[path = "colors_tests.rs"]
mod tests;
