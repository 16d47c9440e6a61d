// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostic logging to stderr.
//!
//! Stdout carries the template output, so logs always go to stderr. The
//! filter comes from `CHECK_LOG` in `EnvFilter` syntax.

use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

use crate::env;

/// Filter used when `CHECK_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "warn";

/// Build the log filter from an optional directive string.
pub fn build_filter(directive: Option<&str>) -> EnvFilter {
    directive
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber. Safe to call more than once.
pub fn setup_logging() {
    let filter = build_filter(env::log_filter().as_deref());
    let ansi = std::io::stderr().is_terminal() && !env::no_color();

    // A subscriber may already be installed (e.g. by an embedding program).
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(ansi)
        .with_target(false)
        .without_time()
        .try_init();
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
