//! Menu state machine: selection, visible window, key repeat, and value
//! editing.

use heapless::Vec;
use log::debug;

use crate::{
    input::{InputSnapshot, Modality},
    item::MenuItem,
    store::AutoSave,
};

/// Maximum number of items one menu can hold.
pub const MAX_ITEMS: usize = 15;

/// Rows shown at once in a vertical list before the window scrolls.
pub const DEFAULT_VISIBLE_ROWS: u16 = 6;

/// Menu layout and, with it, which input axis drives navigation: vertical
/// lists listen to up/down, horizontal carousels to left/right. The other
/// axis is ignored.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Orientation {
    Vertical,
    Horizontal,
}

/// Press/hold/accelerate key-repeat timing.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RepeatTiming {
    /// Pause after the first move before auto-repeat starts.
    pub initial_delay_ms: u16,
    /// Interval while held, before acceleration kicks in.
    pub hold_delay_ms: u16,
    /// Interval once the direction has been held past `fast_after_ms`.
    pub fast_delay_ms: u16,
    /// Held time after which repeats accelerate.
    pub fast_after_ms: u16,
}

impl Default for RepeatTiming {
    fn default() -> Self {
        Self {
            initial_delay_ms: 400,
            hold_delay_ms: 220,
            fast_delay_ms: 120,
            fast_after_ms: 800,
        }
    }
}

/// Acceleration-aware repeat tracker shared by navigation and editing, each
/// with its own instance.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
struct RepeatTimer {
    dir: i8,
    active: bool,
    started_ms: u64,
    next_ms: u64,
}

impl RepeatTimer {
    /// Returns `true` when a step in `dir` should be applied this frame.
    fn accept(&mut self, dir: i8, now_ms: u64, timing: &RepeatTiming) -> bool {
        if dir == 0 {
            self.active = false;
            self.dir = 0;
            return false;
        }

        if !self.active || dir != self.dir {
            self.active = true;
            self.dir = dir;
            self.started_ms = now_ms;
            self.next_ms = now_ms + timing.initial_delay_ms as u64;
            return true;
        }

        if now_ms >= self.next_ms {
            let elapsed = now_ms.saturating_sub(self.started_ms);
            let delay = if elapsed >= timing.fast_after_ms as u64 {
                timing.fast_delay_ms
            } else {
                timing.hold_delay_ms
            };
            self.next_ms = now_ms + delay as u64;
            return true;
        }

        false
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct NavOutcome {
    pub activated: Option<u16>,
    pub back: bool,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct EditOutcome {
    pub changed: bool,
    pub exited: bool,
}

/// A bounded ordered item list with one selection cursor, a visible window,
/// and an optional in-progress value edit.
pub struct Menu {
    items: Vec<MenuItem, MAX_ITEMS>,
    selection: u16,
    first_visible: u16,
    visible_rows: u16,
    modality: Modality,
    orientation: Orientation,
    timing: RepeatTiming,
    dirty: bool,
    editing: bool,
    nav_timer: RepeatTimer,
    edit_timer: RepeatTimer,
    blink_on: bool,
    pub(crate) autosave: Option<AutoSave>,
}

impl Menu {
    pub fn new(modality: Modality, orientation: Orientation) -> Self {
        Self {
            items: Vec::new(),
            selection: 0,
            first_visible: 0,
            visible_rows: DEFAULT_VISIBLE_ROWS,
            modality,
            orientation,
            timing: RepeatTiming::default(),
            dirty: true,
            editing: false,
            nav_timer: RepeatTimer::default(),
            edit_timer: RepeatTimer::default(),
            blink_on: false,
            autosave: None,
        }
    }

    pub fn with_visible_rows(mut self, rows: u16) -> Self {
        self.visible_rows = rows.max(1);
        self
    }

    pub fn with_timing(mut self, timing: RepeatTiming) -> Self {
        self.timing = timing;
        self
    }

    /// Appends an item. Rejected past capacity; the list is unchanged on
    /// failure.
    pub fn add_item(&mut self, item: MenuItem) -> bool {
        if self.items.push(item).is_err() {
            debug!("menu: add_item rejected, capacity {} reached", MAX_ITEMS);
            return false;
        }
        self.dirty = true;
        true
    }

    pub fn len(&self) -> u16 {
        self.items.len() as u16
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn item(&self, index: u16) -> Option<&MenuItem> {
        self.items.get(index as usize)
    }

    /// Scalar value of the item at `index`, or 0 when out of range.
    pub fn item_value(&self, index: u16) -> i32 {
        self.items
            .get(index as usize)
            .map_or(0, |item| item.value())
    }

    /// Overwrites an item value (clamped into its domain). Out-of-range
    /// indices no-op.
    pub fn set_item_value(&mut self, index: u16, value: i32) {
        if let Some(item) = self.items.get_mut(index as usize) {
            item.set_value(value);
            self.dirty = true;
        }
    }

    pub fn set_item_text(&mut self, index: u16, text: &str) {
        if let Some(item) = self.items.get_mut(index as usize) {
            item.set_text(text);
            self.dirty = true;
        }
    }

    pub fn set_item_enabled(&mut self, index: u16, enabled: bool) {
        if let Some(item) = self.items.get_mut(index as usize) {
            item.set_enabled(enabled);
            self.dirty = true;
        }
    }

    /// Links an existing item to a child menu after construction.
    pub fn link_submenu(&mut self, index: u16, id: crate::engine::MenuId) {
        if let Some(item) = self.items.get_mut(index as usize) {
            item.set_submenu(id);
        }
    }

    /// Moves the cursor directly to `index` (clamped) and scrolls it into
    /// view.
    pub fn focus(&mut self, index: u16) {
        if self.items.is_empty() {
            return;
        }
        self.selection = index.min(self.len() - 1);
        self.ensure_visible();
        self.dirty = true;
    }

    pub fn selection(&self) -> u16 {
        self.selection
    }

    pub fn first_visible(&self) -> u16 {
        self.first_visible
    }

    pub fn visible_rows(&self) -> u16 {
        self.visible_rows
    }

    pub fn modality(&self) -> Modality {
        self.modality
    }

    pub fn set_modality(&mut self, modality: Modality) {
        self.modality = modality;
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
        self.dirty = true;
    }

    pub fn timing(&self) -> RepeatTiming {
        self.timing
    }

    pub fn set_timing(&mut self, timing: RepeatTiming) {
        self.timing = timing;
    }

    pub fn editing(&self) -> bool {
        self.editing
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Clears and returns the dirty flag; the caller redraws when it was
    /// set.
    pub(crate) fn take_dirty(&mut self) -> bool {
        let dirty = self.dirty;
        self.dirty = false;
        dirty
    }

    pub(crate) fn begin_edit(&mut self) {
        self.editing = true;
        self.edit_timer = RepeatTimer::default();
        self.blink_on = false;
        self.dirty = true;
        debug!("menu-edit: enter sel={}", self.selection);
    }

    pub(crate) fn end_edit(&mut self) {
        self.editing = false;
        self.edit_timer = RepeatTimer::default();
        self.blink_on = false;
        self.dirty = true;
    }

    pub(crate) fn blink_on(&self) -> bool {
        self.blink_on
    }

    pub(crate) fn set_blink(&mut self, on: bool) {
        if on != self.blink_on {
            self.blink_on = on;
            self.dirty = true;
        }
    }
}

include!("navigation.rs");
include!("edit.rs");

#[cfg(test)]
mod tests;
