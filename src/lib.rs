#![cfg_attr(not(test), no_std)]

//! Menu navigation and editing engine for small battery-powered handhelds.
//!
//! The crate is driven by repeated calls to [`MenuEngine::update`] from a
//! single cooperative main loop. Each frame it normalizes one of three input
//! modalities (gamepad, mechanical buttons, touch taps) into a shared
//! snapshot, runs the navigation or value-edit state machine of the menu on
//! top of the stack, and reports whether the display needs a redraw. Drawing,
//! raw input hardware, and document storage stay behind trait seams so the
//! core carries no hardware dependencies and every timing-sensitive path
//! takes `now_ms` explicitly.

pub mod engine;
pub mod input;
pub mod item;
pub mod menu;
pub mod render;
pub mod store;

pub use engine::{MenuEngine, MenuId, Tick};
pub use input::{InputMapper, InputSnapshot, Modality};
pub use item::MenuItem;
pub use menu::{Menu, Orientation, RepeatTiming};
pub use render::{MenuFrame, TickResult};
pub use store::{ValueDoc, ValueStore};
