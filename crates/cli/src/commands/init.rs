// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::{self, SCAFFOLD};
use crate::error::Result;

/// Write the starter template and print where it went.
pub fn run(path: Option<String>, force: bool) -> Result<()> {
    let target = match path {
        Some(p) => PathBuf::from(p),
        None => config::default_template_path(),
    };
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_with(&target, force, &mut out)
}

pub fn run_with(path: &Path, force: bool, out: &mut impl Write) -> Result<()> {
    config::write_template(path, SCAFFOLD, force)?;
    tracing::info!(path = %path.display(), "initialized template");
    writeln!(out, "{}", path.display())?;
    Ok(())
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
