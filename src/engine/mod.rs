//! Cooperative frame loop: menu table, navigation stack, input lock, and
//! autosave flushing.

use heapless::Vec;
use log::debug;

use crate::{
    input::{ButtonSource, GamepadSource, InputMapper, InputSnapshot, TouchSource},
    menu::{MAX_ITEMS, Menu},
    render::{BLINK_PERIOD_MS, ItemView, MenuFrame, TickResult},
    store::{AutoSave, ValueDoc, ValueStore},
};

/// Maximum number of menus one engine can own.
pub const MAX_MENUS: usize = 16;

/// Maximum navigation depth.
pub const MAX_DEPTH: usize = 8;

/// Input suppression window applied after a back-pop, so one physical press
/// cannot bleed into the revealed parent menu.
pub const POP_LOCK_MS: u64 = 200;

/// Input suppression window applied after entering a submenu.
pub const PUSH_LOCK_MS: u64 = 150;

/// Handle to a menu in the engine-owned table. Submenu links store these
/// instead of owning references, so a submenu may point anywhere in the
/// table without ownership cycles.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct MenuId(u8);

impl MenuId {
    fn index(self) -> usize {
        self.0 as usize
    }
}

/// Result of one [`MenuEngine::update`] frame.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Tick {
    pub render: TickResult,
    /// Index of a plain item confirmed this frame, reported for exactly one
    /// update. Submenu and editable activations are handled internally.
    pub activated: Option<u16>,
}

impl Tick {
    const fn idle() -> Self {
        Self {
            render: TickResult::NoRender,
            activated: None,
        }
    }
}

/// The engine context owned by the embedding application: menu table,
/// navigation stack, input mapper, value store, and the input-lock deadline.
/// Everything is driven by non-overlapping [`MenuEngine::update`] calls from
/// one cooperative loop; no state is global.
pub struct MenuEngine<G, B, T, S> {
    menus: Vec<Menu, MAX_MENUS>,
    stack: Vec<MenuId, MAX_DEPTH>,
    mapper: InputMapper<G, B, T>,
    store: S,
    lock_until_ms: u64,
}

impl<G, B, T, S> MenuEngine<G, B, T, S>
where
    G: GamepadSource,
    B: ButtonSource,
    T: TouchSource,
    S: ValueStore,
{
    pub fn new(mapper: InputMapper<G, B, T>, store: S) -> Self {
        Self {
            menus: Vec::new(),
            stack: Vec::new(),
            mapper,
            store,
            lock_until_ms: 0,
        }
    }

    pub fn mapper(&self) -> &InputMapper<G, B, T> {
        &self.mapper
    }

    pub fn mapper_mut(&mut self) -> &mut InputMapper<G, B, T> {
        &mut self.mapper
    }

    /// Snapshot of the most recent input frame, for application-level
    /// shortcuts (start/select handling and the like).
    pub fn input(&self) -> &InputSnapshot {
        self.mapper.state()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Whether modality reads are currently suppressed.
    pub fn is_locked(&self, now_ms: u64) -> bool {
        now_ms < self.lock_until_ms
    }

    /// Arms the input lock until `deadline_ms`, for application transitions
    /// that need the same press-bleed suppression the stack uses.
    pub fn lock_input_until(&mut self, deadline_ms: u64) {
        self.lock_until_ms = deadline_ms;
    }
}

include!("stack.rs");
include!("update.rs");
