// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

/// The UTF-8 byte-order mark (`EF BB BF` on the wire).
pub const BOM: char = '\u{FEFF}';

/// Remove a single leading byte-order mark, if present.
pub fn strip_bom(text: &str) -> &str {
    text.strip_prefix(BOM).unwrap_or(text)
}

#[cfg(test)]
#[path = "bom_tests.rs"]
mod tests;
