//! # UI Utilities
//!
//! Colored output helpers shared by the commands. The menu itself never
//! colors its output; only command-level messages do.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::io::IsTerminal;

use owo_colors::OwoColorize;

/// Applies colors only when enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    /// Creates a palette with colors explicitly on or off.
    pub const fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Enables colors only if requested and stdout is a terminal.
    pub fn detect(requested: bool) -> Self {
        Self::new(requested && std::io::stdout().is_terminal())
    }

    pub const fn enabled(self) -> bool {
        self.enabled
    }

    pub fn success(self, text: &str) -> String {
        self.paint(text, |t| t.green().to_string())
    }

    pub fn warning(self, text: &str) -> String {
        self.paint(text, |t| t.yellow().to_string())
    }

    pub fn error(self, text: &str) -> String {
        self.paint(text, |t| t.red().bold().to_string())
    }

    pub fn heading(self, text: &str) -> String {
        self.paint(text, |t| t.bold().to_string())
    }

    pub fn accent(self, text: &str) -> String {
        self.paint(text, |t| t.cyan().to_string())
    }

    pub fn dim(self, text: &str) -> String {
        self.paint(text, |t| t.dimmed().to_string())
    }

    fn paint(self, text: &str, style: impl Fn(&str) -> String) -> String {
        if self.enabled {
            style(text)
        } else {
            text.to_string()
        }
    }
}

// =============================================================================
// Messages
// =============================================================================

/// Prints a success message to stderr.
///
/// Format: `✓ {message}`
pub fn print_success(palette: Palette, message: &str) {
    eprintln!("{} {}", palette.success("✓"), message);
}

/// Prints warnings with yellow prefix.
pub fn print_warnings(palette: Palette, warnings: &[String]) {
    for warning in warnings {
        eprintln!("{} {}", palette.warning("warning:"), warning);
    }
}
