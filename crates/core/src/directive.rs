// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `@status` directive extraction.
//!
//! Works line by line over comment-free text. A line whose trimmed form
//! starts with [`DIRECTIVE_KEYWORD`] is a directive and never reaches the
//! output; every other line is content and passes through untouched.

use crate::policy::{Malformed, Resolution};

/// Prefix that marks a directive line.
pub const DIRECTIVE_KEYWORD: &str = "@status";

/// Status reported when no valid directive is present.
pub const DEFAULT_STATUS: i32 = 0;

/// Classification of a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    /// Ordinary text, kept as written.
    Content(&'a str),
    /// A directive line. `None` when the directive is malformed.
    Directive(Option<i32>),
}

/// Classify one line (without its line break).
///
/// A directive is valid only with exactly two whitespace-separated fields
/// where the second parses as a base-10 `i32`.
pub fn classify(line: &str) -> Line<'_> {
    let trimmed = line.trim();
    if !trimmed.starts_with(DIRECTIVE_KEYWORD) {
        return Line::Content(line);
    }

    let mut fields = trimmed.split_whitespace();
    let code = match (fields.next(), fields.next(), fields.next()) {
        (Some(_), Some(code), None) => code.parse::<i32>().ok(),
        _ => None,
    };
    Line::Directive(code)
}

/// Split text into lines on `\n`.
///
/// A trailing `\n` terminates the last line rather than opening an empty
/// one, and empty text has no lines at all.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let body = text.strip_suffix('\n').unwrap_or(text);
    (!text.is_empty())
        .then(|| body.split('\n'))
        .into_iter()
        .flatten()
}

/// Content lines and the final status after a pass over the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction<'a> {
    pub lines: Vec<&'a str>,
    pub status: i32,
    /// Trimmed text of each malformed directive, in document order.
    pub malformed: Vec<&'a str>,
}

impl Extraction<'_> {
    fn new() -> Self {
        Extraction {
            lines: Vec::new(),
            status: DEFAULT_STATUS,
            malformed: Vec::new(),
        }
    }
}

/// Separate directive lines from content, keeping the last valid status.
pub fn extract_directives(text: &str) -> Extraction<'_> {
    split_lines(text).fold(Extraction::new(), |mut acc, line| {
        match classify(line) {
            Line::Content(content) => acc.lines.push(content),
            Line::Directive(Some(code)) => {
                tracing::trace!(code, previous = acc.status, "status directive");
                acc.status = code;
            }
            Line::Directive(None) => {
                let resolution = Malformed::Directive.resolution();
                tracing::debug!(line = line.trim(), %resolution, "malformed directive");
                if resolution == Resolution::PreserveVerbatim {
                    acc.lines.push(line);
                }
                acc.malformed.push(line.trim());
            }
        }
        acc
    })
}

#[cfg(test)]
#[path = "directive_tests.rs"]
mod tests;
