//! # Test Harness
//!
//! Provides utilities for integration testing easytui without affecting user configuration.
//! Uses thread-local storage instead of environment variables to avoid any interference
//! with the user's shell environment.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

#![allow(dead_code)]

use std::{
    fs,
    path::{Path, PathBuf},
    sync::Mutex,
};

use assert_cmd::Command;
use tempfile::TempDir;

// Re-export from library - this is the mechanism for test isolation
use easytui::set_home_override;

/// Global lock to ensure tests run sequentially.
/// Binary tests and in-process tests share the same temp home layout.
static TEST_LOCK: Mutex<()> = Mutex::new(());

/// Test environment with a temporary home directory for the global config.
pub struct TestEnv {
    /// Temporary directory simulating user's home (for ~/.config/easytui/config)
    pub home_dir: TempDir,
    /// Guard for the test lock
    #[allow(dead_code)]
    test_guard: std::sync::MutexGuard<'static, ()>,
}

impl TestEnv {
    /// Creates a new test environment with a temporary home directory.
    ///
    /// Uses thread-local storage to redirect global config (no env var modification).
    pub fn new() -> Self {
        // Recover from poisoned mutex (if a previous test panicked while holding the lock)
        let test_guard = TEST_LOCK.lock().unwrap_or_else(|e| e.into_inner());

        let home_dir = TempDir::new().expect("Failed to create temp home dir");

        // Set up test environment using thread-local (NOT env vars)
        set_home_override(Some(home_dir.path().to_path_buf()));

        Self {
            home_dir,
            test_guard,
        }
    }

    /// Returns the path to the temporary home directory.
    pub fn home_path(&self) -> &Path {
        self.home_dir.path()
    }

    /// Returns the path where global config would be stored.
    pub fn global_config_path(&self) -> PathBuf {
        self.home_dir
            .path()
            .join(".config")
            .join("easytui")
            .join("config")
    }

    /// Creates a global config file with the given content.
    pub fn write_global_config(&self, content: &str) {
        let path = self.global_config_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create global config directory");
        }
        fs::write(path, content).expect("Failed to write global config");
    }

    /// Reads the global config file content.
    pub fn read_global_config(&self) -> String {
        fs::read_to_string(self.global_config_path()).unwrap_or_default()
    }

    /// Creates an `easytui` command whose HOME points at the temp directory.
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("easytui").unwrap();
        cmd.env("HOME", self.home_dir.path());
        cmd.env_remove("EASYTUI_LOG");
        cmd
    }
}

impl Drop for TestEnv {
    fn drop(&mut self) {
        // Clear the thread-local home override
        set_home_override(None);
    }
}

// =============================================================================
// Config Builder Helpers
// =============================================================================

/// Helper to build TOML config lines from optional values.
struct ConfigLines(Vec<String>);

impl ConfigLines {
    fn new() -> Self {
        Self(Vec::new())
    }

    fn add_string(&mut self, key: &str, value: Option<&str>) {
        if let Some(v) = value {
            self.0.push(format!("{key} = \"{v}\""));
        }
    }

    fn add_bool(&mut self, key: &str, value: Option<bool>) {
        if let Some(v) = value {
            self.0.push(format!("{key} = {v}"));
        }
    }

    fn build(self) -> String {
        self.0.join("\n")
    }
}

/// Builder for creating test configurations.
pub struct GlobalConfigBuilder {
    renderer: Option<String>,
    stay_open: Option<bool>,
    color: Option<bool>,
    log: Option<String>,
    extra: Vec<String>,
}

impl Default for GlobalConfigBuilder {
    fn default() -> Self {
        Self {
            renderer: Some("simple".to_string()),
            stay_open: Some(true),
            color: Some(false),
            log: None,
            extra: Vec::new(),
        }
    }
}

impl GlobalConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn renderer(mut self, renderer: impl Into<String>) -> Self {
        self.renderer = Some(renderer.into());
        self
    }

    pub fn stay_open(mut self, stay_open: bool) -> Self {
        self.stay_open = Some(stay_open);
        self
    }

    pub fn color(mut self, color: bool) -> Self {
        self.color = Some(color);
        self
    }

    pub fn log(mut self, filter: impl Into<String>) -> Self {
        self.log = Some(filter.into());
        self
    }

    /// Omits a field so the default applies.
    pub fn without(mut self, field: &str) -> Self {
        match field {
            "renderer" => self.renderer = None,
            "stay_open" => self.stay_open = None,
            "color" => self.color = None,
            "log" => self.log = None,
            _ => {}
        }
        self
    }

    /// Adds a raw `key = value` line.
    pub fn raw(mut self, line: impl Into<String>) -> Self {
        self.extra.push(line.into());
        self
    }

    pub fn build(&self) -> String {
        let mut lines = ConfigLines::new();
        lines.add_string("renderer", self.renderer.as_deref());
        lines.add_bool("stay_open", self.stay_open);
        lines.add_bool("color", self.color);
        lines.add_string("log", self.log.as_deref());
        lines.0.extend(self.extra.iter().cloned());
        lines.build()
    }
}
