// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use crate::error::Result;

/// Version line, matching clap's `--version` output.
pub fn line() -> String {
    format!("check {}", env!("CARGO_PKG_VERSION"))
}

pub fn run() -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{}", line())?;
    Ok(())
}
