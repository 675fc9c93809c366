//! # Vertical Renderer
//!
//! Placeholder strategy for directional (arrow-key) navigation. It has a
//! cursor and can move and exit, but does not provide `render` yet.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use super::{Menu, RenderState, Renderer};
use crate::constants::VERTICAL_RENDERER;

/// Renderer registered as `"vertical"`.
#[derive(Debug)]
pub struct VerticalRenderer<'a> {
    menu: &'a Menu,
    state: RenderState,
}

impl<'a> VerticalRenderer<'a> {
    pub fn new(menu: &'a Menu) -> Self {
        Self {
            menu,
            state: RenderState::default(),
        }
    }
}

impl<'a> Renderer<'a> for VerticalRenderer<'a> {
    fn name(&self) -> &'static str {
        VERTICAL_RENDERER
    }

    fn menu(&self) -> &'a Menu {
        self.menu
    }

    fn state(&self) -> &RenderState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut RenderState {
        &mut self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::MenuError, menu::MenuOption};

    #[test]
    fn test_render_unimplemented() {
        let menu = Menu::new().with_option(MenuOption::new("a"));
        let mut renderer = VerticalRenderer::new(&menu);

        let err = renderer.render().unwrap_err();
        assert!(matches!(
            err,
            MenuError::Unimplemented {
                renderer: "vertical"
            }
        ));
    }

    #[test]
    fn test_exit_leaves_menu_open() {
        let menu = Menu::new();
        menu.set_stay_open(true);
        let mut renderer = VerticalRenderer::new(&menu);

        renderer.exit();

        assert!(renderer.should_exit());
        assert!(menu.stay_open());
    }
}
