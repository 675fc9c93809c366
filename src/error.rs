//! # Errors
//!
//! Error type shared by menus, options and renderers.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::io;

use thiserror::Error;

use crate::menu::Event;

/// Errors raised while rendering a menu or dispatching option events.
#[derive(Debug, Error)]
pub enum MenuError {
    /// The renderer variant does not provide a `render` implementation.
    #[error("renderer '{renderer}' does not implement render")]
    Unimplemented {
        /// Registry key of the renderer
        renderer: &'static str,
    },

    /// The selection cursor points outside the option list.
    #[error("index {index} out of range for menu with {len} options")]
    OutOfRange {
        /// Cursor value at lookup time
        index: isize,
        /// Number of options in the menu
        len: usize,
    },

    /// An event was dispatched that the option never registered.
    #[error("no handler registered for event '{0}'")]
    UnregisteredEvent(Event),

    /// The skip handler was invoked without a direction argument.
    #[error("hover on a spacer option requires a direction argument")]
    MissingDirection,

    /// A renderer name could not be resolved through the registry.
    #[error("unknown renderer '{0}'")]
    UnknownRenderer(String),

    /// Reading input or writing output failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Result alias used throughout the menu module.
pub type MenuResult<T> = Result<T, MenuError>;
