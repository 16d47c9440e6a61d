// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use std::path::{Path, PathBuf};

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

/// The `check` binary with a clean environment: no template override,
/// no colors, no logging.
pub fn check() -> Command {
    let mut cmd = cargo_bin_cmd!("check");
    cmd.env_remove("CHECK_FILE")
        .env_remove("CHECK_LOG")
        .env_remove("COLOR")
        .env("NO_COLOR", "1");
    cmd
}

/// Write a template into a fresh temp directory.
pub fn template(content: &str) -> (TempDir, PathBuf) {
    template_bytes(content.as_bytes())
}

pub fn template_bytes(content: &[u8]) -> (TempDir, PathBuf) {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("check.md");
    std::fs::write(&path, content).unwrap();
    (temp, path)
}

/// Run template mode against `path`.
pub fn check_file(path: &Path) -> Command {
    let mut cmd = check();
    cmd.env("CHECK_FILE", path);
    cmd
}
