// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Template file location and access.
//!
//! The template lives at `$CHECK_FILE` when set, otherwise at
//! `.check.md` in the system temp directory. `init` always writes to an
//! explicit path or the default, never to `$CHECK_FILE`.

use std::fs;
use std::path::{Path, PathBuf};

use crate::env;
use crate::error::{Error, Result};

/// File name of the template in the temp directory.
pub const DEFAULT_FILE_NAME: &str = ".check.md";

/// Content written by `check init`.
pub const SCAFFOLD: &str = "<!-- check template -->\n# check\n\n@status 0\n";

/// `.check.md` inside the system temp directory.
pub fn default_template_path() -> PathBuf {
    std::env::temp_dir().join(DEFAULT_FILE_NAME)
}

/// Path used by template mode, honoring `CHECK_FILE`.
pub fn template_path() -> PathBuf {
    resolve_template_path(env::check_file())
}

/// Pick the configured path, falling back to the default.
pub fn resolve_template_path(configured: Option<PathBuf>) -> PathBuf {
    configured.unwrap_or_else(default_template_path)
}

/// Read a template into memory.
///
/// Bytes that are not valid UTF-8 are replaced with U+FFFD rather than
/// rejected.
pub fn read_template(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|source| Error::ReadTemplate {
        path: path.display().to_string(),
        source,
    })?;
    match String::from_utf8(bytes) {
        Ok(text) => Ok(text),
        Err(e) => {
            tracing::warn!(path = %path.display(), "template is not valid UTF-8, decoding lossily");
            Ok(String::from_utf8_lossy(e.as_bytes()).into_owned())
        }
    }
}

/// Write a template, creating parent directories as needed.
///
/// Refuses to replace an existing file unless `force` is set.
pub fn write_template(path: &Path, content: &str, force: bool) -> Result<()> {
    if !force && path.try_exists()? {
        return Err(Error::AlreadyExists(path.display().to_string()));
    }

    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).map_err(|source| Error::CreateDir {
            path: dir.display().to_string(),
            source,
        })?;
    }

    fs::write(path, content).map_err(|source| Error::WriteTemplate {
        path: path.display().to_string(),
        source,
    })?;
    tracing::debug!(path = %path.display(), force, "wrote template");
    Ok(())
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
