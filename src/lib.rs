//! # easytui
//!
//! A minimal terminal menu widget: a list of selectable options, a pluggable
//! rendering strategy, and per-option click/hover handlers.
//!
//! ## Features
//!
//! - **Options**: display text plus an event handler table; text-less options act as spacers
//! - **Renderers**: named strategies resolved through a process-wide registry
//! - **Render Loop**: the menu clicks the chosen option and repeats while it stays open
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod menu;
pub mod ui;

pub use config::{set_home_override, Config};
pub use error::{MenuError, MenuResult};
pub use menu::{Event, Handler, Menu, MenuOption, Renderer, RendererSelector};
