//! # Menu
//!
//! An ordered list of options driven by a renderer. Each render pass lets the
//! renderer pick an option, clicks it, and repeats while the menu stays open.
//!
//! ## Example
//!
//! ```no_run
//! use easytui::menu::{Menu, MenuOption};
//!
//! let menu = Menu::new()
//!     .with_label("Main")
//!     .with_option(MenuOption::new("Greet").on_click(|_, _| Some("hello".to_string())))
//!     .with_option(MenuOption::new("Quit").on_click(|renderer, _| {
//!         renderer.exit();
//!         None
//!     }));
//!
//! let _last = menu.render()?;
//! # Ok::<(), easytui::MenuError>(())
//! ```
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

mod option;
mod registry;
mod renderer;
mod simple;
mod vertical;

use std::cell::Cell;

use tracing::debug;

pub use self::{
    option::{Action, Event, Handler, MenuOption},
    registry::{
        lookup_renderer, register_renderer, renderer_names, RendererFactory, RendererSelector,
    },
    renderer::{RenderState, Renderer},
    simple::{label_line, SimpleRenderer},
    vertical::VerticalRenderer,
};
use crate::{
    constants::DEFAULT_RENDERER,
    error::{MenuError, MenuResult},
};

/// A labelled, ordered list of options.
#[derive(Debug, Clone)]
pub struct Menu {
    label: Option<String>,
    options: Vec<MenuOption>,
    renderer: RendererSelector,
    stay_open: Cell<bool>,
    default_stay_open: bool,
}

impl Default for Menu {
    fn default() -> Self {
        Self::new()
    }
}

impl Menu {
    /// Creates an empty menu using the default renderer that stays open.
    pub fn new() -> Self {
        Self {
            label: None,
            options: Vec::new(),
            renderer: RendererSelector::from(DEFAULT_RENDERER).resolve(),
            stay_open: Cell::new(true),
            default_stay_open: true,
        }
    }

    /// Sets the heading.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Appends options.
    #[must_use]
    pub fn with_options(mut self, options: impl IntoIterator<Item = MenuOption>) -> Self {
        self.options.extend(options);
        self
    }

    /// Appends a single option.
    #[must_use]
    pub fn with_option(mut self, option: MenuOption) -> Self {
        self.options.push(option);
        self
    }

    /// Selects the renderer by name or constructor.
    #[must_use]
    pub fn with_renderer(mut self, selector: impl Into<RendererSelector>) -> Self {
        self.set_renderer(selector);
        self
    }

    /// Sets whether the render loop repeats after each selection.
    #[must_use]
    pub fn with_default_stay_open(mut self, stay_open: bool) -> Self {
        self.default_stay_open = stay_open;
        self
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn set_label(&mut self, label: Option<String>) {
        self.label = label;
    }

    /// Options in display order.
    pub fn options(&self) -> &[MenuOption] {
        &self.options
    }

    pub fn push_option(&mut self, option: MenuOption) {
        self.options.push(option);
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Looks up an option by cursor position.
    pub fn option(&self, index: isize) -> MenuResult<&MenuOption> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.options.get(i))
            .ok_or(MenuError::OutOfRange {
                index,
                len: self.options.len(),
            })
    }

    /// Assigns the renderer. Registered names resolve to their constructor;
    /// unknown names are kept as-is and never fail here.
    pub fn set_renderer(&mut self, selector: impl Into<RendererSelector>) {
        let selector = selector.into().resolve();
        if let RendererSelector::Name(name) = &selector {
            debug!(renderer = %name, "renderer name not registered yet");
        }
        self.renderer = selector;
    }

    /// The renderer as assigned.
    pub const fn renderer_selector(&self) -> &RendererSelector {
        &self.renderer
    }

    /// The constructor for this menu's renderer.
    ///
    /// A name that was unknown at assignment is looked up once more.
    pub fn renderer_factory(&self) -> MenuResult<RendererFactory> {
        match self.renderer.clone().resolve() {
            RendererSelector::Factory(factory) => Ok(factory),
            RendererSelector::Name(name) => Err(MenuError::UnknownRenderer(name)),
        }
    }

    pub fn stay_open(&self) -> bool {
        self.stay_open.get()
    }

    /// Controls whether the current render loop repeats.
    pub fn set_stay_open(&self, stay_open: bool) {
        self.stay_open.set(stay_open);
    }

    pub const fn default_stay_open(&self) -> bool {
        self.default_stay_open
    }

    pub fn set_default_stay_open(&mut self, stay_open: bool) {
        self.default_stay_open = stay_open;
    }

    /// Runs the menu with a renderer built from [`Self::renderer_factory`].
    ///
    /// Returns the click result of the last pass.
    pub fn render(&self) -> MenuResult<Option<String>> {
        self.stay_open.set(self.default_stay_open);
        let factory = self.renderer_factory()?;
        let mut renderer = factory(self);
        self.run(renderer.as_mut())
    }

    /// Runs the menu with a caller-supplied renderer, reused for every pass.
    pub fn render_with<'a>(
        &'a self,
        renderer: &mut (dyn Renderer<'a> + '_),
    ) -> MenuResult<Option<String>> {
        self.stay_open.set(self.default_stay_open);
        self.run(renderer)
    }

    fn run<'a>(&'a self, renderer: &mut (dyn Renderer<'a> + '_)) -> MenuResult<Option<String>> {
        let mut passes: usize = 0;
        loop {
            passes += 1;
            let result = match renderer.render()? {
                Some(option) => {
                    debug!(pass = passes, text = ?option.text(), "clicking option");
                    option.invoke(&Event::Click, renderer, &[])?
                }
                None => None,
            };

            if !self.stay_open.get() {
                debug!(passes, renderer = renderer.name(), "menu closed");
                return Ok(result);
            }
        }
    }
}
