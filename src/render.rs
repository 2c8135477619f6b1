//! View models handed to the drawing backend when a redraw is due.

use crate::menu::Orientation;

/// Wall-clock period of the value blink while editing.
pub const BLINK_PERIOD_MS: u64 = 300;

/// Whether a frame left visible state to repaint.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TickResult {
    NoRender,
    RenderRequested,
}

/// Displayable value of an editable row.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ValueView<'a> {
    Number(i32),
    Choice(&'a str),
}

/// One row of the active menu.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ItemView<'a> {
    pub label: &'a str,
    pub value: Option<ValueView<'a>>,
    pub enabled: bool,
    pub has_submenu: bool,
}

/// Snapshot of everything the renderer needs for one redraw.
///
/// Rendering is fire-and-forget: the backend paints rows
/// `first_visible .. first_visible + visible_rows` (vertical lists) or a
/// carousel centered on `selection` (horizontal menus) and reports nothing
/// back. While `editing`, the selected value should be hidden on frames
/// where `blink_on` is set.
#[derive(Clone, Copy, Debug)]
pub struct MenuFrame<'a> {
    pub items: &'a [ItemView<'a>],
    pub selection: u16,
    pub first_visible: u16,
    pub visible_rows: u16,
    pub orientation: Orientation,
    pub editing: bool,
    pub blink_on: bool,
}
