// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod help;
pub mod init;
pub mod template;
pub mod version;
