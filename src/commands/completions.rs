//! # Completions Command
//!
//! Generate shell completion scripts for the `easytui` binary.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::io::{self, Write};

use anyhow::Result;
use clap::Command;
use clap_complete::{generate, Shell};

/// Generates shell completions and writes them to `out`.
/// The `cmd` parameter should be the CLI command (from `Cli::command()`).
pub fn write_to(shell: Shell, cmd: &mut Command, out: &mut impl Write) -> Result<()> {
    let name = cmd.get_name().to_string();
    generate(shell, cmd, name, out);
    out.flush()?;
    Ok(())
}

/// Generates shell completions and writes them to stdout.
pub fn execute(shell: Shell, cmd: &mut Command) -> Result<()> {
    write_to(shell, cmd, &mut io::stdout())
}
