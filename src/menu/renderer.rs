//! # Renderer Capability
//!
//! The capability set shared by every renderer variant: run a selection
//! interaction, move the cursor, and exit.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use super::{Event, Menu, MenuOption};
use crate::error::{MenuError, MenuResult};

/// Cursor state owned by a renderer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderState {
    /// Index into the menu's options; only checked on lookup
    pub selected_index: isize,
    /// Set by `exit()`, cleared at the start of each render
    pub should_exit: bool,
}

/// A strategy for presenting a menu and reading a selection.
///
/// Implementors supply the accessors; `render` must be overridden by any
/// variant that can actually interact with the user.
pub trait Renderer<'a> {
    /// Registry key of this variant.
    fn name(&self) -> &'static str;

    /// The menu this renderer is bound to.
    fn menu(&self) -> &'a Menu;

    /// Cursor state.
    fn state(&self) -> &RenderState;

    /// Mutable cursor state.
    fn state_mut(&mut self) -> &mut RenderState;

    /// Runs one selection interaction.
    ///
    /// Returns the chosen option, or `None` if the loop ended without one.
    fn render(&mut self) -> MenuResult<Option<&'a MenuOption>> {
        self.state_mut().should_exit = false;
        Err(MenuError::Unimplemented {
            renderer: self.name(),
        })
    }

    /// Moves the cursor. Not clamped to the option list; saturates at the
    /// `isize` limits so an extreme direction never wraps back into range.
    fn move_by(&mut self, direction: isize) {
        let state = self.state_mut();
        state.selected_index = state.selected_index.saturating_add(direction);
    }

    /// Ends the current render loop at its next check.
    fn exit(&mut self) {
        self.state_mut().should_exit = true;
    }

    /// Current cursor position.
    fn selected_index(&self) -> isize {
        self.state().selected_index
    }

    /// Whether `exit()` was called during the current render.
    fn should_exit(&self) -> bool {
        self.state().should_exit
    }

    /// The option under the cursor.
    fn get_selected(&self) -> MenuResult<&'a MenuOption> {
        self.menu().option(self.selected_index())
    }
}

impl<'a> dyn Renderer<'a> + '_ {
    /// Dispatches `event` on the option under the cursor.
    pub fn invoke_event(&mut self, event: &Event, args: &[isize]) -> MenuResult<Option<String>> {
        let option = self.get_selected()?;
        option.invoke(event, self, args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Minimal variant relying on every provided method.
    struct BareRenderer<'a> {
        menu: &'a Menu,
        state: RenderState,
    }

    impl<'a> Renderer<'a> for BareRenderer<'a> {
        fn name(&self) -> &'static str {
            "bare"
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

    fn bare(menu: &Menu) -> BareRenderer<'_> {
        BareRenderer {
            menu,
            state: RenderState::default(),
        }
    }

    #[test]
    fn test_provided_render_is_unimplemented() {
        let menu = Menu::new().with_option(MenuOption::new("a"));
        let mut renderer = bare(&menu);
        renderer.exit();

        let err = renderer.render().unwrap_err();

        assert!(matches!(err, MenuError::Unimplemented { renderer: "bare" }));
        assert!(!renderer.should_exit(), "render clears the exit flag first");
    }

    #[test]
    fn test_move_has_no_bounds() {
        let menu = Menu::new().with_option(MenuOption::new("a"));
        let mut renderer = bare(&menu);

        renderer.move_by(-3);
        assert_eq!(renderer.selected_index(), -3);
        renderer.move_by(10);
        assert_eq!(renderer.selected_index(), 7);
    }

    #[test]
    fn test_move_saturates_at_limits() {
        let menu = Menu::new().with_option(MenuOption::new("a"));
        let mut renderer = bare(&menu);

        renderer.move_by(isize::MAX);
        renderer.move_by(1);
        assert_eq!(renderer.selected_index(), isize::MAX);
        assert!(renderer.get_selected().is_err());

        renderer.move_by(isize::MIN);
        renderer.move_by(isize::MIN);
        assert_eq!(renderer.selected_index(), isize::MIN);
    }

    #[test]
    fn test_get_selected_bounds() {
        let menu = Menu::new().with_options([MenuOption::new("a"), MenuOption::new("b")]);
        let mut renderer = bare(&menu);

        assert_eq!(renderer.get_selected().unwrap().text(), Some("a"));
        renderer.move_by(1);
        assert_eq!(renderer.get_selected().unwrap().text(), Some("b"));

        renderer.move_by(1);
        assert!(matches!(
            renderer.get_selected(),
            Err(MenuError::OutOfRange { index: 2, len: 2 })
        ));

        renderer.move_by(-3);
        assert!(matches!(
            renderer.get_selected(),
            Err(MenuError::OutOfRange { index: -1, len: 2 })
        ));
    }

    #[test]
    fn test_invoke_event_targets_selected_option() {
        let menu = Menu::new().with_options([
            MenuOption::new("a").on_click(|_, _| Some("a".to_string())),
            MenuOption::new("b").on_click(|_, _| Some("b".to_string())),
        ]);
        let mut renderer = bare(&menu);
        renderer.move_by(1);

        let dynamic: &mut dyn Renderer<'_> = &mut renderer;
        let result = dynamic.invoke_event(&Event::Click, &[]).unwrap();

        assert_eq!(result.as_deref(), Some("b"));
    }

    #[test]
    fn test_invoke_event_out_of_range() {
        let menu = Menu::new();
        let mut renderer = bare(&menu);

        let dynamic: &mut dyn Renderer<'_> = &mut renderer;
        let err = dynamic.invoke_event(&Event::Click, &[]).unwrap_err();

        assert!(matches!(err, MenuError::OutOfRange { index: 0, len: 0 }));
    }
}
