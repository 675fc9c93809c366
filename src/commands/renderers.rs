//! # Renderers Command
//!
//! Lists the renderer names registered in this process.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::Result;

use crate::{config::Config, menu::renderer_names, ui::Palette};

/// Prints one renderer name per line, marking the configured one when
/// colors are enabled.
pub fn execute(config: &Config) -> Result<()> {
    let palette = Palette::detect(config.color());

    for name in renderer_names() {
        if palette.enabled() && name == config.renderer() {
            println!("{} {}", name, palette.dim("(default)"));
        } else {
            println!("{name}");
        }
    }

    Ok(())
}
