//! # Renderer Registry
//!
//! Process-wide mapping from renderer name to constructor. Seeded with the
//! built-in variants on first use; new variants should be registered at
//! start-up, before any menu resolves them by name.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{
    collections::BTreeMap,
    fmt,
    sync::{OnceLock, RwLock},
};

use tracing::info;

use super::{Menu, Renderer, SimpleRenderer, VerticalRenderer};
use crate::constants::{SIMPLE_RENDERER, VERTICAL_RENDERER};

/// Constructor for a renderer bound to a menu.
pub type RendererFactory = for<'a> fn(&'a Menu) -> Box<dyn Renderer<'a> + 'a>;

/// How a menu chooses its renderer.
#[derive(Clone)]
pub enum RendererSelector {
    /// Registry key; stays a name only while unresolved
    Name(String),
    /// Resolved constructor
    Factory(RendererFactory),
}

impl RendererSelector {
    /// Resolves a name through the registry, keeping the name if unknown.
    pub fn resolve(self) -> Self {
        match self {
            Self::Name(name) => lookup_renderer(&name).map_or(Self::Name(name), Self::Factory),
            factory @ Self::Factory(_) => factory,
        }
    }

    /// Whether this selector still holds an unresolved name.
    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::Name(_))
    }
}

impl fmt::Debug for RendererSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => f.debug_tuple("Name").field(name).finish(),
            Self::Factory(_) => f.write_str("Factory(..)"),
        }
    }
}

impl From<&str> for RendererSelector {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for RendererSelector {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl From<RendererFactory> for RendererSelector {
    fn from(factory: RendererFactory) -> Self {
        Self::Factory(factory)
    }
}

// =============================================================================
// Built-in Constructors
// =============================================================================

/// Builds a [`SimpleRenderer`] on stdin/stdout.
pub fn simple(menu: &Menu) -> Box<dyn Renderer<'_> + '_> {
    Box::new(SimpleRenderer::new(menu))
}

/// Builds a [`VerticalRenderer`].
pub fn vertical(menu: &Menu) -> Box<dyn Renderer<'_> + '_> {
    Box::new(VerticalRenderer::new(menu))
}

// =============================================================================
// Registry
// =============================================================================

static REGISTRY: OnceLock<RwLock<BTreeMap<String, RendererFactory>>> = OnceLock::new();

fn registry() -> &'static RwLock<BTreeMap<String, RendererFactory>> {
    REGISTRY.get_or_init(|| {
        let mut map = BTreeMap::new();
        map.insert(SIMPLE_RENDERER.to_string(), simple as RendererFactory);
        map.insert(VERTICAL_RENDERER.to_string(), vertical as RendererFactory);
        RwLock::new(map)
    })
}

/// Registers a renderer under `name`, returning any constructor it replaced.
pub fn register_renderer(name: impl Into<String>, factory: RendererFactory) -> Option<RendererFactory> {
    let name = name.into();
    info!(renderer = %name, "registering renderer");
    registry()
        .write()
        .unwrap_or_else(|e| e.into_inner())
        .insert(name, factory)
}

/// Looks up the constructor registered under `name`.
pub fn lookup_renderer(name: &str) -> Option<RendererFactory> {
    registry()
        .read()
        .unwrap_or_else(|e| e.into_inner())
        .get(name)
        .copied()
}

/// Registered renderer names in sorted order.
pub fn renderer_names() -> Vec<String> {
    registry()
        .read()
        .unwrap_or_else(|e| e.into_inner())
        .keys()
        .cloned()
        .collect()
}
