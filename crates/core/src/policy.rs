// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! How the transformer resolves malformed input.
//!
//! Template authors routinely leave directives half-written or comments
//! unclosed. None of that is an error: each kind of malformation maps to a
//! fixed [`Resolution`], and the stages look the resolution up here rather
//! than deciding locally.

use std::fmt;

/// A kind of malformed input the transformer tolerates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Malformed {
    /// A `@status` line with the wrong field count or a non-integer code.
    Directive,
    /// A `<!--` with no `-->` anywhere after it.
    UnterminatedComment,
}

/// What happens to the offending text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resolution {
    /// Leave the status untouched and drop the text from the output.
    IgnoreAndDiscard,
    /// Keep the text in the output exactly as written.
    PreserveVerbatim,
}

impl Malformed {
    /// The policy table.
    pub const fn resolution(self) -> Resolution {
        match self {
            Malformed::Directive => Resolution::IgnoreAndDiscard,
            Malformed::UnterminatedComment => Resolution::PreserveVerbatim,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Malformed::Directive => "malformed directive",
            Malformed::UnterminatedComment => "unterminated comment",
        }
    }
}

impl fmt::Display for Malformed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Resolution {
    pub fn as_str(self) -> &'static str {
        match self {
            Resolution::IgnoreAndDiscard => "ignored and discarded",
            Resolution::PreserveVerbatim => "preserved verbatim",
        }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
#[path = "policy_tests.rs"]
mod tests;
