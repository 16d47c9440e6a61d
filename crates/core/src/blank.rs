// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

/// Trim empty lines at both edges and collapse internal runs of empty
/// lines to one.
///
/// Only zero-length lines count as empty; a line of spaces is content.
pub fn normalize_blank_lines<'a>(lines: &[&'a str]) -> Vec<&'a str> {
    let mut out: Vec<&'a str> = Vec::with_capacity(lines.len());
    for &line in lines {
        if line.is_empty() && out.last().is_none_or(|prev| prev.is_empty()) {
            continue;
        }
        out.push(line);
    }
    if out.last().is_some_and(|last| last.is_empty()) {
        out.pop();
    }
    out
}

#[cfg(test)]
#[path = "blank_tests.rs"]
mod tests;
