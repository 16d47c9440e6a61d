// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! HTML comment removal.
//!
//! Comments do not nest: the first `-->` after a `<!--` closes it, whatever
//! sits in between. Scanning resumes right after each removed span, so text
//! that only forms a marker once a comment is gone stays as written.

use std::borrow::Cow;

use crate::policy::{Malformed, Resolution};

/// Opens a comment span.
pub const OPEN: &str = "<!--";
/// Closes the current comment span.
pub const CLOSE: &str = "-->";

/// Text with comment spans removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stripped<'a> {
    pub text: Cow<'a, str>,
    /// Byte offset of a `<!--` that never closes, if one was found.
    pub unterminated_at: Option<usize>,
}

/// Remove every `<!-- ... -->` span, markers included.
///
/// Borrows the input when nothing was removed.
pub fn strip_comments(text: &str) -> Stripped<'_> {
    let mut out = String::new();
    let mut cursor = 0;
    let mut unterminated_at = None;

    while let Some(rel) = text[cursor..].find(OPEN) {
        let start = cursor + rel;
        let body = start + OPEN.len();
        match text[body..].find(CLOSE) {
            Some(len) => {
                out.push_str(&text[cursor..start]);
                cursor = body + len + CLOSE.len();
            }
            None => {
                unterminated_at = Some(start);
                break;
            }
        }
    }

    let end = match unterminated_at {
        Some(at) => {
            let resolution = Malformed::UnterminatedComment.resolution();
            tracing::debug!(offset = at, %resolution, "unterminated comment");
            match resolution {
                Resolution::PreserveVerbatim => text.len(),
                Resolution::IgnoreAndDiscard => at,
            }
        }
        None => text.len(),
    };

    let text = if cursor == 0 && end == text.len() {
        Cow::Borrowed(text)
    } else {
        out.push_str(&text[cursor..end]);
        Cow::Owned(out)
    };

    Stripped {
        text,
        unterminated_at,
    }
}

#[cfg(test)]
#[path = "comment_tests.rs"]
mod tests;
