//! # Global Configuration
//!
//! Handles the user configuration stored at `~/.config/easytui/config`.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{
    cell::RefCell,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_RENDERER, GLOBAL_CONFIG_DIR, GLOBAL_CONFIG_FILENAME};

/// Valid field names in the global config file.
/// Used for validation to detect unknown/invalid fields.
const VALID_FIELDS: &[&str] = &["renderer", "stay_open", "color", "log"];

/// Fields that should be present with actual values (have meaningful defaults).
/// `log` is optional and stays commented when not set.
const REQUIRED_FIELDS: &[&str] = &["renderer", "stay_open", "color"];

/// Result of validating a config file.
#[derive(Debug, Default)]
pub struct ConfigValidation {
    /// Fields that were missing and have been added with defaults
    pub missing: Vec<String>,
    /// Fields that were unrecognized and have been removed
    pub invalid: Vec<String>,
}

impl ConfigValidation {
    /// Returns true if any changes were made to the config.
    pub fn has_changes(&self) -> bool {
        !self.missing.is_empty() || !self.invalid.is_empty()
    }
}

thread_local! {
    /// Thread-local override for the home directory path.
    /// Used by integration tests to redirect config to a temp directory
    /// without modifying environment variables.
    static HOME_OVERRIDE: RefCell<Option<PathBuf>> = const { RefCell::new(None) };
}

/// Sets a thread-local override for the home directory.
/// This is used by tests to redirect global config without modifying env vars.
pub fn set_home_override(path: Option<PathBuf>) {
    HOME_OVERRIDE.with(|cell| {
        *cell.borrow_mut() = path;
    });
}

/// Gets the current home directory override, if set.
fn get_home_override() -> Option<PathBuf> {
    HOME_OVERRIDE.with(|cell| cell.borrow().clone())
}

/// Global configuration stored at ~/.config/easytui/config
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Renderer used by menus built from the command line
    #[serde(default = "default_renderer")]
    pub renderer: String,

    /// Whether menus repeat after each selection
    #[serde(default = "default_true")]
    pub stay_open: bool,

    /// Whether command output uses colors
    #[serde(default = "default_true")]
    pub color: bool,

    /// Log filter directive (e.g., "debug", "easytui=trace")
    #[serde(default)]
    pub log: Option<String>,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            renderer: DEFAULT_RENDERER.to_string(),
            stay_open: true,
            color: true,
            log: None,
        }
    }
}

#[allow(clippy::missing_const_for_fn)] // serde default functions can't be const
fn default_true() -> bool {
    true
}

fn default_renderer() -> String {
    DEFAULT_RENDERER.to_string()
}

impl GlobalConfig {
    /// Returns the path to the global config file (~/.config/easytui/config)
    ///
    /// Checks for a thread-local home override first (used by tests),
    /// then falls back to $HOME/.config (XDG Base Directory).
    pub fn path() -> Option<PathBuf> {
        Self::dir().map(|dir| dir.join(GLOBAL_CONFIG_FILENAME))
    }

    /// Returns the path to the global config directory (~/.config/easytui)
    pub fn dir() -> Option<PathBuf> {
        if let Some(home) = get_home_override() {
            return Some(home.join(".config").join(GLOBAL_CONFIG_DIR));
        }
        // Use $HOME/.config for XDG compliance (not dirs::config_dir which varies by OS)
        dirs::home_dir().map(|home| home.join(".config").join(GLOBAL_CONFIG_DIR))
    }

    /// Loads the global config. A missing file yields the defaults.
    pub fn load() -> Result<Self> {
        let Some(path) = Self::path() else {
            return Ok(Self::default());
        };

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read global config: {}", path.display()))?;

        Self::parse(&content)
            .with_context(|| format!("Failed to parse global config: {}", path.display()))
    }

    /// Parses config file content.
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Creates the global config with default values and comments.
    /// Used by `easytui setup`. Returns true if created, false if already exists.
    pub fn create_default_if_missing() -> Result<bool> {
        let Some(path) = Self::path() else {
            anyhow::bail!("Could not determine config directory");
        };

        if path.exists() {
            return Ok(false);
        }

        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        Self::save_with_comments(&path, &Self::default())?;
        Ok(true)
    }

    /// Renders the config file with comments for all options.
    ///
    /// `log` is shown as a commented example when not set.
    pub fn to_commented_toml(&self) -> String {
        let log_line = self.log.as_ref().map_or_else(
            || "# log = \"debug\"".to_string(),
            |filter| format!("log = \"{filter}\""),
        );

        format!(
            r#"# easytui Global Configuration
# Location: ~/.config/easytui/config

# Renderer used by `easytui demo` and `easytui pick`.
# Built-in renderers: "simple" (numbered text prompt), "vertical" (not interactive yet).
# Default: "simple"
renderer = "{renderer}"

# Whether the demo menu keeps re-rendering after each selection.
# Default: true
stay_open = {stay_open}

# Whether command output uses colors. Disable with --no-color for a single run.
# Default: true
color = {color}

# Log filter written to stderr (tracing EnvFilter syntax).
# The EASYTUI_LOG environment variable takes precedence.
# Default: "warn"
{log_line}
"#,
            renderer = self.renderer,
            stay_open = self.stay_open,
            color = self.color,
        )
    }

    fn save_with_comments(path: &Path, config: &Self) -> Result<()> {
        fs::write(path, config.to_commented_toml())
            .with_context(|| format!("Failed to write global config: {}", path.display()))
    }

    /// Checks config content for unknown and missing fields.
    pub fn validate_str(content: &str) -> Result<ConfigValidation> {
        let table: toml::Table = toml::from_str(content).context("Failed to parse config")?;

        let mut validation = ConfigValidation::default();

        for key in table.keys() {
            if !VALID_FIELDS.contains(&key.as_str()) {
                validation.invalid.push(key.clone());
            }
        }

        for &field in REQUIRED_FIELDS {
            if !table.contains_key(field) {
                validation.missing.push(field.to_string());
            }
        }

        Ok(validation)
    }

    /// Validates the global config file and returns any issues found.
    pub fn validate() -> Result<ConfigValidation> {
        let Some(path) = Self::path() else {
            anyhow::bail!("Could not determine home directory");
        };

        if !path.exists() {
            anyhow::bail!("Global config not found");
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read global config: {}", path.display()))?;

        Self::validate_str(&content)
            .with_context(|| format!("Failed to validate global config: {}", path.display()))
    }

    /// Validates and rewrites the global config file if needed.
    ///
    /// Loading fills in defaults for missing fields and drops unknown ones,
    /// so re-saving the loaded config repairs the file.
    pub fn update_if_needed() -> Result<ConfigValidation> {
        let validation = Self::validate()?;

        if !validation.has_changes() {
            return Ok(validation);
        }

        let Some(path) = Self::path() else {
            anyhow::bail!("Could not determine home directory");
        };

        let config = Self::load()?;
        Self::save_with_comments(&path, &config)?;

        Ok(validation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GlobalConfig::default();
        assert_eq!(config.renderer, "simple");
        assert!(config.stay_open);
        assert!(config.color);
        assert!(config.log.is_none());
    }

    #[test]
    fn test_parse_minimal_config() {
        let config = GlobalConfig::parse("renderer = \"vertical\"\n").unwrap();
        assert_eq!(config.renderer, "vertical");
        assert!(config.stay_open); // default
        assert!(config.color); // default
    }

    #[test]
    fn test_parse_rejects_wrong_type() {
        assert!(GlobalConfig::parse("stay_open = \"yes\"\n").is_err());
    }

    #[test]
    fn test_commented_toml_round_trips() {
        let config = GlobalConfig {
            renderer: "vertical".to_string(),
            stay_open: false,
            color: false,
            log: Some("debug".to_string()),
        };
        let parsed = GlobalConfig::parse(&config.to_commented_toml()).unwrap();
        assert_eq!(parsed, config);

        let defaults = GlobalConfig::parse(&GlobalConfig::default().to_commented_toml()).unwrap();
        assert_eq!(defaults, GlobalConfig::default());
    }

    #[test]
    fn test_validate_str() {
        let validation = GlobalConfig::validate_str("renderer = \"simple\"\ntheme = \"dark\"\n").unwrap();
        assert_eq!(validation.invalid, ["theme"]);
        assert_eq!(validation.missing, ["stay_open", "color"]);
        assert!(validation.has_changes());

        let clean = GlobalConfig::default().to_commented_toml();
        assert!(!GlobalConfig::validate_str(&clean).unwrap().has_changes());
    }

    #[test]
    fn test_home_override() {
        use tempfile::tempdir;

        let temp = tempdir().unwrap();
        let expected_path = temp.path().join(".config").join("easytui").join("config");

        // Set thread-local override
        set_home_override(Some(temp.path().to_path_buf()));
        let path = GlobalConfig::path().unwrap();
        assert_eq!(path, expected_path);

        // Missing file falls back to defaults
        assert_eq!(GlobalConfig::load().unwrap(), GlobalConfig::default());

        // Clear override - should fall back to real config dir
        set_home_override(None);
        let path = GlobalConfig::path();
        assert!(path.is_some());
        assert_ne!(path.unwrap(), expected_path);
    }
}
