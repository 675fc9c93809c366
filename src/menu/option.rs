//! # Menu Options
//!
//! A single selectable entry and its per-event handler table.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{collections::HashMap, convert::Infallible, fmt, rc::Rc, str::FromStr};

use tracing::trace;

use super::Renderer;
use crate::error::{MenuError, MenuResult};

// =============================================================================
// Events
// =============================================================================

/// Event names an option can respond to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Event {
    /// The option was chosen
    Click,
    /// The cursor moved onto the option (extra argument: direction)
    Hover,
    /// Any other name; stored but never dispatched by the built-in renderers
    Custom(String),
}

impl Event {
    /// Returns the event name as used in handler tables.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Click => "click",
            Self::Hover => "hover",
            Self::Custom(name) => name,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Event {
    fn from(name: &str) -> Self {
        match name {
            "click" => Self::Click,
            "hover" => Self::Hover,
            other => Self::Custom(other.to_string()),
        }
    }
}

impl FromStr for Event {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

// =============================================================================
// Handlers
// =============================================================================

/// Signature of a user-supplied event handler.
///
/// Receives the active renderer and the event's extra arguments.
pub type Action = Rc<dyn Fn(&mut dyn Renderer<'_>, &[isize]) -> Option<String>>;

/// Handler bound to an event.
#[derive(Clone)]
pub enum Handler {
    /// Does nothing and yields no result
    Noop,
    /// Moves the cursor by the given direction, then clicks the same option
    Skip,
    /// User-supplied closure
    Action(Action),
}

impl Handler {
    /// Wraps a closure as a handler.
    pub fn action<F>(f: F) -> Self
    where
        F: Fn(&mut dyn Renderer<'_>, &[isize]) -> Option<String> + 'static,
    {
        Self::Action(Rc::new(f))
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Noop => f.write_str("Noop"),
            Self::Skip => f.write_str("Skip"),
            Self::Action(_) => f.write_str("Action(..)"),
        }
    }
}

/// Handlers every option starts with.
const DEFAULT_HANDLERS: [(Event, Handler); 2] =
    [(Event::Click, Handler::Noop), (Event::Hover, Handler::Noop)];

/// Returns the template handler for an event (no-op for unknown names).
fn default_handler(event: &Event) -> Handler {
    DEFAULT_HANDLERS
        .iter()
        .find(|(candidate, _)| candidate == event)
        .map_or(Handler::Noop, |(_, handler)| handler.clone())
}

// =============================================================================
// MenuOption
// =============================================================================

/// A selectable menu entry.
///
/// Options without text are spacers: they are left out of the label line and
/// hovering them moves the cursor past them.
#[derive(Debug, Clone)]
pub struct MenuOption {
    text: Option<String>,
    handlers: HashMap<Event, Handler>,
}

impl MenuOption {
    /// Creates an option with display text and default handlers.
    pub fn new(text: impl Into<String>) -> Self {
        Self::from_text(Some(text.into()))
    }

    /// Creates a text-less option whose hover skips over it.
    pub fn spacer() -> Self {
        Self::from_text(None)
    }

    /// Creates an option from optional text.
    pub fn from_text(text: Option<String>) -> Self {
        let mut handlers: HashMap<Event, Handler> = DEFAULT_HANDLERS.into_iter().collect();
        if text.is_none() {
            handlers.insert(Event::Hover, Handler::Skip);
        }
        Self { text, handlers }
    }

    /// Sets the click handler.
    #[must_use]
    pub fn on_click<F>(self, f: F) -> Self
    where
        F: Fn(&mut dyn Renderer<'_>, &[isize]) -> Option<String> + 'static,
    {
        self.on(Event::Click, f)
    }

    /// Sets the hover handler.
    #[must_use]
    pub fn on_hover<F>(self, f: F) -> Self
    where
        F: Fn(&mut dyn Renderer<'_>, &[isize]) -> Option<String> + 'static,
    {
        self.on(Event::Hover, f)
    }

    /// Sets the handler for an arbitrary event.
    #[must_use]
    pub fn on<F>(mut self, event: impl Into<Event>, f: F) -> Self
    where
        F: Fn(&mut dyn Renderer<'_>, &[isize]) -> Option<String> + 'static,
    {
        self.register(event, Some(Handler::action(f)));
        self
    }

    /// Display text, or `None` for spacers.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Whether this option is a text-less spacer.
    pub const fn is_spacer(&self) -> bool {
        self.text.is_none()
    }

    /// Binds `handler` to `event`. `None` restores the default no-op.
    ///
    /// Event names are not validated.
    pub fn register(&mut self, event: impl Into<Event>, handler: Option<Handler>) {
        let event = event.into();
        let handler = handler.unwrap_or_else(|| default_handler(&event));
        self.handlers.insert(event, handler);
    }

    /// Returns the handler bound to `event`, if any.
    pub fn handler(&self, event: &Event) -> Option<&Handler> {
        self.handlers.get(event)
    }

    /// Calls the handler for `event` with the renderer and extra arguments.
    pub fn invoke(
        &self,
        event: &Event,
        renderer: &mut dyn Renderer<'_>,
        args: &[isize],
    ) -> MenuResult<Option<String>> {
        let handler = self
            .handlers
            .get(event)
            .ok_or_else(|| MenuError::UnregisteredEvent(event.clone()))?;

        trace!(event = %event, text = ?self.text, "invoking handler");

        match handler {
            Handler::Noop => Ok(None),
            Handler::Skip => {
                let direction = args.first().copied().ok_or(MenuError::MissingDirection)?;
                renderer.move_by(direction);
                self.invoke(&Event::Click, renderer, &[])?;
                Ok(None)
            }
            Handler::Action(action) => Ok(action(renderer, args)),
        }
    }
}
