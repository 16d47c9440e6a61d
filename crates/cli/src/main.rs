// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use clap::Parser;
use checkrs::Cli;

fn main() {
    checkrs::logging::setup_logging();
    let cli = Cli::parse();
    match checkrs::run(cli.into_command()) {
        Ok(status) => std::process::exit(status),
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}
