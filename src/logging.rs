//! # Logging
//!
//! Installs the `tracing` subscriber used by the command-line front end.
//! Logs go to stderr so stdout carries only menu output.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

use crate::constants::{DEFAULT_LOG_FILTER, LOG_ENV_VAR};

/// Builds the filter: `EASYTUI_LOG` first, then the configured directive,
/// then the default.
pub fn filter(configured: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR)
        .or_else(|_| configured.map_or_else(|| EnvFilter::try_new(DEFAULT_LOG_FILTER), EnvFilter::try_new))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Installs the global subscriber once; later calls are ignored.
pub fn init(configured: Option<&str>, color: bool) {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        fmt()
            .with_env_filter(filter(configured))
            .with_writer(std::io::stderr)
            .with_ansi(color)
            .with_target(false)
            .with_level(true)
            .init();
    });
}
