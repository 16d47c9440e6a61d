// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The full transformation pipeline.
//!
//! raw text → strip BOM → strip comments → extract directives → normalize
//! blank lines → rejoin.

use crate::blank::normalize_blank_lines;
use crate::bom::strip_bom;
use crate::comment::strip_comments;
use crate::directive::extract_directives;
use crate::policy::Malformed;

/// Number of characters kept when quoting offending text in a diagnostic.
const EXCERPT_CHARS: usize = 40;

/// A record that a permissive policy fired while processing a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: Malformed,
    /// The offending text, truncated to a short single-line excerpt.
    pub excerpt: String,
}

impl Diagnostic {
    fn new(kind: Malformed, text: &str) -> Self {
        let first_line = text.split('\n').next().unwrap_or_default();
        let mut excerpt: String = first_line.chars().take(EXCERPT_CHARS).collect();
        if excerpt.len() < text.len() {
            excerpt.push_str("...");
        }
        Diagnostic { kind, excerpt }
    }
}

/// Result of processing a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Processed {
    /// Text to print, exactly as it should be written.
    pub text: String,
    /// Exit status from the last valid `@status` directive, or 0.
    pub status: i32,
    /// Malformed input that was tolerated: an unterminated comment first,
    /// then malformed directives in line order.
    pub diagnostics: Vec<Diagnostic>,
}

/// Run a template through every stage.
///
/// Total over all input: malformed markup produces diagnostics, never an
/// error.
pub fn process_template(input: &str) -> Processed {
    let input = strip_bom(input);
    let stripped = strip_comments(input);
    let text = stripped.text.as_ref();

    let mut diagnostics = Vec::new();
    if let Some(at) = stripped.unterminated_at {
        diagnostics.push(Diagnostic::new(Malformed::UnterminatedComment, &input[at..]));
    }

    let extraction = extract_directives(text);
    diagnostics.extend(
        extraction
            .malformed
            .iter()
            .map(|line| Diagnostic::new(Malformed::Directive, line)),
    );

    let lines = normalize_blank_lines(&extraction.lines);
    let mut output = lines.join("\n");
    if !lines.is_empty() && ends_with_terminated_content(text) {
        output.push('\n');
    }

    Processed {
        text: output,
        status: extraction.status,
        diagnostics,
    }
}

/// True when the text ends with a line break that closes a non-empty line.
///
/// A trailing empty line is edge padding and gets trimmed along with the
/// break after it, so `"line\n"` keeps its newline and `"line\n\n"` does not.
fn ends_with_terminated_content(text: &str) -> bool {
    text.strip_suffix('\n')
        .is_some_and(|rest| !rest.is_empty() && !rest.ends_with('\n'))
}

#[cfg(test)]
#[path = "template_tests.rs"]
mod tests;
