// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! check-core: the template transformer behind the `check` CLI.
//!
//! A template is Markdown-like text that may carry HTML comments and a
//! single `@status <code>` directive. [`process_template`] turns it into the
//! text to print and the exit status to return:
//!
//! ```
//! let out = check_core::process_template("# todo\n<!-- note -->\n@status 3\n");
//! assert_eq!(out.text, "# todo\n");
//! assert_eq!(out.status, 3);
//! ```
//!
//! Every stage is total. Malformed markup is resolved by the rules in
//! [`policy`] and reported through [`Diagnostic`]s, never as an error.

pub mod blank;
pub mod bom;
pub mod comment;
pub mod directive;
pub mod policy;
pub mod template;

pub use directive::{DEFAULT_STATUS, DIRECTIVE_KEYWORD};
pub use policy::{Malformed, Resolution};
pub use template::{process_template, Diagnostic, Processed};
