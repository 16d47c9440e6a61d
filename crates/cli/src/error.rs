// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// All possible errors that can occur in the checkrs library.
///
/// The template transformer itself never fails; these cover reading and
/// writing template files and writing output.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read template \"{path}\": {source}")]
    ReadTemplate {
        path: String,
        source: std::io::Error,
    },

    #[error("file already exists: {0}\n  hint: use --force to overwrite it")]
    AlreadyExists(String),

    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to write template {path}: {source}")]
    WriteTemplate {
        path: String,
        source: std::io::Error,
    },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for checkrs operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
