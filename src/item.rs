//! Declarative model of one navigable menu row.

use heapless::String;

use crate::{engine::MenuId, render::ValueView};

/// Maximum UTF-8 bytes kept for one item label. Longer labels are truncated
/// on a character boundary.
pub const LABEL_BYTES: usize = 32;

/// Bounded integer value with a step size.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct EditRange {
    pub value: i32,
    pub min: i32,
    pub max: i32,
    pub step: i32,
}

/// Index into a fixed ordered option list.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct EditChoice {
    pub options: &'static [&'static str],
    pub index: u16,
}

/// Editable payload of an item, if any.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EditKind {
    None,
    Range(EditRange),
    Choice(EditChoice),
}

/// One menu row: a label, an optional editable value or submenu link, and an
/// optional change listener.
#[derive(Clone, Debug)]
pub struct MenuItem {
    label: String<LABEL_BYTES>,
    enabled: bool,
    edit: EditKind,
    submenu: Option<MenuId>,
    on_change: Option<fn(i32)>,
}

impl MenuItem {
    /// Plain label row. Not editable; activation is reported to the caller.
    pub fn label(text: &str) -> Self {
        Self {
            label: bounded_label(text),
            enabled: true,
            edit: EditKind::None,
            submenu: None,
            on_change: None,
        }
    }

    /// Editable bounded integer.
    ///
    /// Invalid construction input is normalized rather than rejected:
    /// inverted bounds are swapped, a zero step becomes 1, and the value is
    /// clamped into range.
    pub fn range(text: &str, value: i32, min: i32, max: i32, step: i32) -> Self {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        let step = if step == 0 { 1 } else { step };

        let mut item = Self::label(text);
        item.edit = EditKind::Range(EditRange {
            value: value.clamp(min, max),
            min,
            max,
            step,
        });
        item
    }

    /// Editable selection out of a fixed option list.
    ///
    /// An empty option list degrades to a plain label so the invalid edit
    /// state can never exist; an out-of-range start index is clamped.
    pub fn choice(text: &str, options: &'static [&'static str], index: u16) -> Self {
        let mut item = Self::label(text);
        if let Some(last) = (options.len() as u16).checked_sub(1) {
            item.edit = EditKind::Choice(EditChoice {
                options,
                index: index.min(last),
            });
        }
        item
    }

    /// Row that opens a child menu on activation. The id points into the
    /// engine-owned menu table; the item never owns the submenu.
    pub fn submenu(text: &str, id: MenuId) -> Self {
        let mut item = Self::label(text);
        item.submenu = Some(id);
        item
    }

    /// Attaches a synchronous listener fired whenever an edit commits a
    /// changed value.
    pub fn with_on_change(mut self, on_change: fn(i32)) -> Self {
        self.on_change = Some(on_change);
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn text(&self) -> &str {
        &self.label
    }

    pub fn set_text(&mut self, text: &str) {
        self.label = bounded_label(text);
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn edit(&self) -> &EditKind {
        &self.edit
    }

    pub fn is_editable(&self) -> bool {
        !matches!(self.edit, EditKind::None)
    }

    pub fn submenu_ref(&self) -> Option<MenuId> {
        self.submenu
    }

    pub(crate) fn set_submenu(&mut self, id: MenuId) {
        self.submenu = Some(id);
    }

    pub(crate) fn on_change(&self) -> Option<fn(i32)> {
        self.on_change
    }

    /// Scalar value of the item: range value, choice index, or 0 for plain
    /// labels.
    pub fn value(&self) -> i32 {
        match self.edit {
            EditKind::Range(range) => range.value,
            EditKind::Choice(choice) => choice.index as i32,
            EditKind::None => 0,
        }
    }

    /// Overwrites the value, clamping into the valid domain. No-op for plain
    /// labels.
    pub fn set_value(&mut self, value: i32) {
        match &mut self.edit {
            EditKind::Range(range) => range.value = value.clamp(range.min, range.max),
            EditKind::Choice(choice) => {
                let last = choice.options.len() as i32 - 1;
                choice.index = value.clamp(0, last) as u16;
            }
            EditKind::None => {}
        }
    }

    /// Applies one edit step in `dir` (-1 or +1). Ranges clamp, choices
    /// wrap. Returns whether the value actually changed.
    pub(crate) fn adjust(&mut self, dir: i32) -> bool {
        match &mut self.edit {
            EditKind::Range(range) => {
                let next = range
                    .value
                    .saturating_add(range.step.saturating_mul(dir))
                    .clamp(range.min, range.max);
                let changed = next != range.value;
                range.value = next;
                changed
            }
            EditKind::Choice(choice) => {
                let count = choice.options.len() as i32;
                let next = (choice.index as i32 + dir).rem_euclid(count) as u16;
                let changed = next != choice.index;
                choice.index = next;
                changed
            }
            EditKind::None => false,
        }
    }

    pub(crate) fn value_view(&self) -> Option<ValueView<'_>> {
        match self.edit {
            EditKind::Range(range) => Some(ValueView::Number(range.value)),
            EditKind::Choice(choice) => {
                let label = choice.options.get(choice.index as usize).copied();
                Some(ValueView::Choice(label.unwrap_or("")))
            }
            EditKind::None => None,
        }
    }
}

fn bounded_label(text: &str) -> String<LABEL_BYTES> {
    let mut label = String::new();
    for ch in text.chars() {
        if label.push(ch).is_err() {
            break;
        }
    }
    label
}
