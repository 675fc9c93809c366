//! # Pick Command
//!
//! Builds a one-shot menu from command-line arguments and prints the text of
//! the chosen option. Useful in scripts: `choice=$(easytui pick a b c)`.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use anyhow::{Context, Result};

use crate::{
    config::Config,
    menu::{Menu, MenuOption},
};

/// Arguments for the pick command
#[derive(Debug, Clone, Default)]
pub struct PickArgs {
    /// Heading of the menu
    pub label: Option<String>,
    /// Option texts; empty strings become spacers
    pub options: Vec<String>,
    /// Initial cursor position, confirmed by an empty line
    pub default: Option<isize>,
}

/// Builds a single-pass menu whose options return their own text.
pub fn build_menu(args: &PickArgs, renderer: &str) -> Menu {
    let options = args.options.iter().map(|text| {
        if text.is_empty() {
            MenuOption::spacer()
        } else {
            let value = text.clone();
            MenuOption::new(text.as_str()).on_click(move |_, _| Some(value.clone()))
        }
    });

    let mut menu = Menu::new()
        .with_options(options)
        .with_renderer(renderer)
        .with_default_stay_open(false);
    menu.set_label(args.label.clone());
    menu
}

/// Executes the pick command.
pub fn execute(args: &PickArgs, config: &Config) -> Result<()> {
    if args.options.iter().all(String::is_empty) {
        anyhow::bail!("No options to pick from");
    }

    let menu = build_menu(args, config.renderer());
    let factory = menu.renderer_factory()?;
    let mut renderer = factory(&menu);
    if let Some(index) = args.default {
        renderer.move_by(index);
    }

    let choice = menu
        .render_with(renderer.as_mut())
        .context("Pick menu failed")?;

    match choice {
        Some(text) => {
            println!("{text}");
            Ok(())
        }
        None => anyhow::bail!("No option selected"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::{Renderer, SimpleRenderer};

    fn args(options: &[&str]) -> PickArgs {
        PickArgs {
            label: Some("Fruit".to_string()),
            options: options.iter().map(ToString::to_string).collect(),
            default: None,
        }
    }

    #[test]
    fn test_build_menu() {
        let menu = build_menu(&args(&["apple", "", "pear"]), "simple");
        assert_eq!(menu.label(), Some("Fruit"));
        assert_eq!(menu.len(), 3);
        assert!(menu.options()[1].is_spacer());
        assert!(!menu.default_stay_open());
    }

    #[test]
    fn test_choice_is_option_text() {
        let menu = build_menu(&args(&["apple", "pear"]), "simple");
        let mut renderer = SimpleRenderer::with_io(&menu, "1\n".as_bytes(), Vec::new());

        let choice = menu.render_with(&mut renderer).unwrap();
        assert_eq!(choice.as_deref(), Some("pear"));
    }

    #[test]
    fn test_default_confirmed_by_empty_line() {
        let menu = build_menu(&args(&["apple", "pear", "plum"]), "simple");
        let mut renderer = SimpleRenderer::with_io(&menu, "\n".as_bytes(), Vec::new());
        renderer.move_by(2);

        let choice = menu.render_with(&mut renderer).unwrap();
        assert_eq!(choice.as_deref(), Some("plum"));
    }

    #[test]
    fn test_spacer_yields_no_choice() {
        let menu = build_menu(&args(&["apple", ""]), "simple");
        let mut renderer = SimpleRenderer::with_io(&menu, "1\n".as_bytes(), Vec::new());

        let choice = menu.render_with(&mut renderer).unwrap();
        assert_eq!(choice, None);
    }

    #[test]
    fn test_only_spacers_rejected() {
        let err = execute(&args(&["", ""]), &Config::default()).unwrap_err();
        assert!(err.to_string().contains("No options"));
    }
}
