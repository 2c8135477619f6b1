use super::{ButtonSource, GamepadSource, TouchEvent, TouchSource};

/// Gamepad source for builds without a paired controller.
#[derive(Default, Debug, Clone, Copy)]
pub struct NoGamepad;

impl NoGamepad {
    pub const fn new() -> Self {
        Self
    }
}

impl GamepadSource for NoGamepad {
    fn connected(&mut self) -> bool {
        false
    }
}

/// Button source for boards with no wired menu buttons.
#[derive(Default, Debug, Clone, Copy)]
pub struct NoButtons;

impl NoButtons {
    pub const fn new() -> Self {
        Self
    }
}

impl ButtonSource for NoButtons {}

/// Touch source for panels without a touch controller.
#[derive(Default, Debug, Clone, Copy)]
pub struct NoTouch;

impl NoTouch {
    pub const fn new() -> Self {
        Self
    }
}

impl TouchSource for NoTouch {
    fn poll(&mut self) -> Option<TouchEvent> {
        None
    }
}
