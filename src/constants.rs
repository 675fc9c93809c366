//! # Constants
//!
//! Centralized constants for magic values used throughout easytui.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

// =============================================================================
// Renderers
// =============================================================================

/// Registry key of the text-prompt renderer.
pub const SIMPLE_RENDERER: &str = "simple";

/// Registry key of the directional renderer.
pub const VERTICAL_RENDERER: &str = "vertical";

/// Renderer used when a menu does not choose one.
pub const DEFAULT_RENDERER: &str = SIMPLE_RENDERER;

// =============================================================================
// Prompt Messages
// =============================================================================

/// Printed when the input is neither empty nor an integer.
pub const INVALID_NUMBER_MESSAGE: &str = "Please enter a number.";

/// Printed, followed by the raw input, when the index is out of range.
pub const INVALID_OPTION_PREFIX: &str = "Invalid option: ";

// =============================================================================
// Configuration
// =============================================================================

/// Global configuration directory name (inside `~/.config`).
pub const GLOBAL_CONFIG_DIR: &str = "easytui";

/// Global configuration file name (inside `GLOBAL_CONFIG_DIR`).
pub const GLOBAL_CONFIG_FILENAME: &str = "config";

// =============================================================================
// Logging
// =============================================================================

/// Environment variable holding the log filter directive.
pub const LOG_ENV_VAR: &str = "EASYTUI_LOG";

/// Filter used when neither the environment nor the config sets one.
pub const DEFAULT_LOG_FILTER: &str = "warn";
