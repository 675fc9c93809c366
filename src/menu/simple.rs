//! # Simple Renderer
//!
//! Text-prompt renderer: prints the options on one line and reads the index
//! of the chosen option from input.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{
    io::{self, BufRead, StdinLock, Stdout, Write},
    num::IntErrorKind,
};

use tracing::debug;

use super::{Menu, MenuOption, RenderState, Renderer};
use crate::{
    constants::{INVALID_NUMBER_MESSAGE, INVALID_OPTION_PREFIX, SIMPLE_RENDERER},
    error::{MenuError, MenuResult},
};

/// Builds the single label line for a menu.
///
/// Format: `label:\t0:first\t1:second`. Spacers are left out but keep their
/// index slot.
pub fn label_line(menu: &Menu) -> String {
    let entries: Vec<String> = menu
        .options()
        .iter()
        .enumerate()
        .filter_map(|(index, option)| option.text().map(|text| format!("{index}:{text}")))
        .collect();

    let mut line = menu
        .label()
        .map(|label| format!("{label}:\t"))
        .unwrap_or_default();
    line.push_str(&entries.join("\t"));
    line
}

/// Line-oriented renderer reading from `R` and writing to `W`.
pub struct SimpleRenderer<'a, R = StdinLock<'static>, W = Stdout> {
    menu: &'a Menu,
    state: RenderState,
    input: R,
    output: W,
}

impl<'a> SimpleRenderer<'a> {
    /// Creates a renderer bound to the process's stdin and stdout.
    pub fn new(menu: &'a Menu) -> Self {
        Self::with_io(menu, io::stdin().lock(), io::stdout())
    }
}

impl<'a, R: BufRead, W: Write> SimpleRenderer<'a, R, W> {
    /// Creates a renderer over arbitrary input and output.
    pub fn with_io(menu: &'a Menu, input: R, output: W) -> Self {
        Self {
            menu,
            state: RenderState {
                selected_index: 0,
                should_exit: false,
            },
            input,
            output,
        }
    }

    /// The output written so far.
    pub const fn output(&self) -> &W {
        &self.output
    }

    /// Consumes the renderer, returning its output.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Reads one line, without its terminator. `None` at end of input.
    fn read_line(&mut self) -> MenuResult<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(&['\r', '\n'][..]).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}

impl<'a, R: BufRead, W: Write> Renderer<'a> for SimpleRenderer<'a, R, W> {
    fn name(&self) -> &'static str {
        SIMPLE_RENDERER
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

    fn render(&mut self) -> MenuResult<Option<&'a MenuOption>> {
        self.state.should_exit = false;

        writeln!(self.output, "{}", label_line(self.menu))?;
        self.output.flush()?;

        while !self.state.should_exit {
            let Some(raw) = self.read_line()? else {
                debug!("input closed, exiting menu");
                self.exit();
                break;
            };

            // Empty input confirms the current cursor
            if !raw.is_empty() {
                match raw.trim().parse::<isize>() {
                    Ok(index) => self.state.selected_index = index,
                    // An integer, just not one any option could have
                    Err(err)
                        if matches!(
                            err.kind(),
                            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow
                        ) =>
                    {
                        debug!(input = %raw, "rejected oversized selection");
                        writeln!(self.output, "{INVALID_OPTION_PREFIX}{raw}")?;
                        self.output.flush()?;
                        continue;
                    }
                    Err(_) => {
                        debug!(input = %raw, "rejected non-numeric selection");
                        writeln!(self.output, "{INVALID_NUMBER_MESSAGE}")?;
                        self.output.flush()?;
                        continue;
                    }
                }
            }

            match self.get_selected() {
                Ok(option) => {
                    debug!(index = self.state.selected_index, "option selected");
                    return Ok(Some(option));
                }
                Err(MenuError::OutOfRange { index, len }) => {
                    debug!(index, len, "rejected out-of-range selection");
                    writeln!(self.output, "{INVALID_OPTION_PREFIX}{raw}")?;
                    self.output.flush()?;
                }
                Err(err) => return Err(err),
            }
        }

        Ok(None)
    }

    /// Also closes the owning menu so its repeat loop stops.
    fn exit(&mut self) {
        self.state.should_exit = true;
        self.menu.set_stay_open(false);
    }
}
