//! # Commands
//!
//! CLI command implementations for easytui.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod completions;
pub mod demo;
pub mod pick;
pub mod renderers;
pub mod setup;

pub use self::{
    completions::execute as completions,
    demo::{build_menu as build_demo_menu, execute as demo, DemoArgs},
    pick::{build_menu as build_pick_menu, execute as pick, PickArgs},
    renderers::execute as renderers,
    setup::execute as setup,
};
