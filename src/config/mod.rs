//! # Configuration
//!
//! Effective settings: the global config file (~/.config/easytui/config) with
//! command-line overrides applied on top.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod global;

use anyhow::Result;

pub use self::global::{set_home_override, ConfigValidation, GlobalConfig};

/// Values given on the command line that take precedence over the file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    /// Renderer name (`--renderer`)
    pub renderer: Option<String>,
    /// Disable colors (`--no-color`)
    pub no_color: bool,
}

/// Merged configuration with command-line overrides on top of the global file
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Global configuration
    pub global: GlobalConfig,

    /// Command-line overrides
    pub overrides: Overrides,
}

impl Config {
    /// Loads the global configuration (defaults when no file exists)
    pub fn load() -> Result<Self> {
        Ok(Self {
            global: GlobalConfig::load()?,
            overrides: Overrides::default(),
        })
    }

    /// Applies command-line overrides
    #[must_use]
    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        self.overrides = overrides;
        self
    }

    /// Returns the effective renderer name
    pub fn renderer(&self) -> &str {
        self.overrides
            .renderer
            .as_deref()
            .unwrap_or(&self.global.renderer)
    }

    /// Whether menus repeat after each selection
    pub const fn stay_open(&self) -> bool {
        self.global.stay_open
    }

    /// Whether colored output is enabled
    pub const fn color(&self) -> bool {
        self.global.color && !self.overrides.no_color
    }

    /// Returns the configured log filter, if any
    pub fn log_filter(&self) -> Option<&str> {
        self.global.log.as_deref()
    }
}
