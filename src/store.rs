//! Throttled best-effort persistence of menu item values.

use heapless::Vec;

use crate::menu::MAX_ITEMS;

/// Minimum wall-clock interval between two autosave writes. Bursts of
/// rapid-repeat edits coalesce into a single flush carrying the latest
/// values.
pub const AUTOSAVE_MIN_INTERVAL_MS: u64 = 300;

/// Flat, order-independent mapping from positional item index to scalar
/// value. Whole documents are read and written per call; a partial document
/// is valid and simply leaves the missing indices at their defaults.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ValueDoc {
    entries: Vec<(u16, i32), MAX_ITEMS>,
}

impl ValueDoc {
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn get(&self, index: u16) -> Option<i32> {
        self.entries
            .iter()
            .find(|(i, _)| *i == index)
            .map(|(_, value)| *value)
    }

    /// Inserts or replaces an entry. Returns `false` when the document is
    /// full and the index was not already present.
    pub fn set(&mut self, index: u16, value: i32) -> bool {
        if let Some(entry) = self.entries.iter_mut().find(|(i, _)| *i == index) {
            entry.1 = value;
            return true;
        }
        self.entries.push((index, value)).is_ok()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u16, i32)> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Abstract document store keyed by path. Document encoding (JSON or
/// otherwise) and the underlying medium are the backend's business.
pub trait ValueStore {
    type Error;

    /// Reads the document at `path`; `Ok(None)` means no document exists
    /// yet, which is the expected first-run outcome rather than an error.
    fn load(&mut self, path: &str) -> Result<Option<ValueDoc>, Self::Error>;

    fn save(&mut self, path: &str, doc: &ValueDoc) -> Result<(), Self::Error>;
}

/// Store used when no persistence medium is present.
#[derive(Default, Debug, Clone, Copy)]
pub struct NoStore;

impl NoStore {
    pub const fn new() -> Self {
        Self
    }
}

impl ValueStore for NoStore {
    type Error = core::convert::Infallible;

    fn load(&mut self, _path: &str) -> Result<Option<ValueDoc>, Self::Error> {
        Ok(None)
    }

    fn save(&mut self, _path: &str, _doc: &ValueDoc) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Per-menu autosave binding and throttle state.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct AutoSave {
    pub path: &'static str,
    pub pending: bool,
    pub last_save_ms: Option<u64>,
}

impl AutoSave {
    pub fn new(path: &'static str) -> Self {
        Self {
            path,
            pending: false,
            last_save_ms: None,
        }
    }

    /// A pending save becomes due once the throttle window since the last
    /// write has elapsed; the first write goes out immediately.
    pub fn due(&self, now_ms: u64) -> bool {
        self.pending
            && self
                .last_save_ms
                .is_none_or(|last| now_ms.saturating_sub(last) >= AUTOSAVE_MIN_INTERVAL_MS)
    }

    pub fn record_saved(&mut self, now_ms: u64) {
        self.pending = false;
        self.last_save_ms = Some(now_ms);
    }
}
