// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Template mode: print the processed template and report its status.

use std::io::Write;
use std::path::Path;

use check_core::process_template;

use crate::config;
use crate::error::Result;

/// Process the configured template, writing to stdout.
///
/// Returns the status the process should exit with.
pub fn run() -> Result<i32> {
    let path = config::template_path();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_with(&path, &mut out)
}

/// Process the template at `path`, writing the cleaned text to `out`.
pub fn run_with(path: &Path, out: &mut impl Write) -> Result<i32> {
    tracing::debug!(path = %path.display(), "reading template");
    let text = config::read_template(path)?;
    let processed = process_template(&text);

    for diagnostic in &processed.diagnostics {
        tracing::debug!(
            kind = %diagnostic.kind,
            resolution = %diagnostic.kind.resolution(),
            "{}",
            diagnostic.excerpt
        );
    }
    tracing::debug!(status = processed.status, "template processed");

    out.write_all(processed.text.as_bytes())?;
    out.flush()?;
    Ok(processed.status)
}

#[cfg(test)]
#[path = "template_tests.rs"]
mod tests;
