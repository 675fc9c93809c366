//! # Setup Command
//!
//! Creates the global config file, or repairs an existing one.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::Result;

use crate::{
    config::GlobalConfig,
    ui::{self, Palette},
};

/// Executes the setup command.
pub fn execute(palette: Palette) -> Result<()> {
    eprintln!("{}\n", palette.heading("Setting up easytui..."));

    let path = GlobalConfig::path()
        .ok_or_else(|| anyhow::anyhow!("Could not determine home directory"))?;

    if GlobalConfig::create_default_if_missing()? {
        ui::print_success(palette, &format!("Created global config: {}", path.display()));
        return Ok(());
    }

    let validation = GlobalConfig::update_if_needed()?;
    if validation.has_changes() {
        let mut notes: Vec<String> = validation
            .invalid
            .iter()
            .map(|field| format!("removed unknown field '{field}'"))
            .collect();
        notes.extend(
            validation
                .missing
                .iter()
                .map(|field| format!("added missing field '{field}'")),
        );
        ui::print_warnings(palette, &notes);
        ui::print_success(palette, &format!("Updated global config: {}", path.display()));
    } else {
        ui::print_success(
            palette,
            &format!("Global config already exists: {}", path.display()),
        );
    }

    Ok(())
}
