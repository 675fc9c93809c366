//! # Demo Command
//!
//! Runs an interactive sample menu showing click handlers, a spacer option,
//! shared handler state and exiting from a handler.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{cell::Cell, rc::Rc};

use anyhow::{Context, Result};

use crate::{
    config::Config,
    menu::{Menu, MenuOption},
    ui::Palette,
};

/// Default heading of the demo menu.
const DEMO_LABEL: &str = "easytui demo";

/// Arguments for the demo command
#[derive(Debug, Clone, Default)]
pub struct DemoArgs {
    /// Heading override
    pub label: Option<String>,
    /// Render a single pass instead of looping
    pub once: bool,
}

/// Builds the demo menu.
///
/// Handlers print to stdout and return a short result string.
pub fn build_menu(args: &DemoArgs, config: &Config, palette: Palette) -> Menu {
    let clicks = Rc::new(Cell::new(0_u32));

    let greet = MenuOption::new("Say hello").on_click(move |_, _| {
        println!("{}", palette.success("Hello from easytui!"));
        Some("hello".to_string())
    });

    let count = MenuOption::new("Count clicks").on_click(move |_, _| {
        clicks.set(clicks.get() + 1);
        println!("{} {}", palette.accent("Clicked"), clicks.get());
        Some(clicks.get().to_string())
    });

    let locate = MenuOption::new("Where am I?").on_click(move |renderer, _| {
        println!(
            "{} option {} of {} ({} renderer)",
            palette.dim("Selected"),
            renderer.selected_index(),
            renderer.menu().len(),
            renderer.name()
        );
        None
    });

    let quit = MenuOption::new("Quit").on_click(move |renderer, _| {
        println!("{}", palette.dim("Bye."));
        renderer.exit();
        Some("quit".to_string())
    });

    Menu::new()
        .with_label(args.label.as_deref().unwrap_or(DEMO_LABEL))
        .with_options([greet, MenuOption::spacer(), count, locate, quit])
        .with_renderer(config.renderer())
        .with_default_stay_open(config.stay_open() && !args.once)
}

/// Executes the demo command.
pub fn execute(args: &DemoArgs, config: &Config) -> Result<()> {
    let palette = Palette::detect(config.color());
    let menu = build_menu(args, config, palette);

    let result = menu.render().context("Demo menu failed")?;

    tracing::info!(result = ?result, "demo finished");
    Ok(())
}
