//! Unified input abstraction over gamepad, mechanical, and touch sources.

mod null;

pub use null::{NoButtons, NoGamepad, NoTouch};

/// Analog stick magnitude below which axis input is ignored.
pub const DEFAULT_DEADZONE: i16 = 200;

/// Input source the active menu listens to.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Modality {
    Gamepad,
    Mechanical,
    Touch,
}

/// Physical gamepad buttons available for binding.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PadButton {
    A,
    B,
    X,
    Y,
    Start,
    Select,
}

/// Logical-action to physical-button mapping.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Bindings {
    pub confirm: PadButton,
    pub back: PadButton,
    pub menu: PadButton,
    pub alt: PadButton,
}

impl Default for Bindings {
    fn default() -> Self {
        Self {
            confirm: PadButton::A,
            back: PadButton::B,
            menu: PadButton::Start,
            alt: PadButton::Select,
        }
    }
}

/// One touch report. The core only consumes the tap flag; coordinates are
/// carried for application-level hit testing.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TouchEvent {
    pub x: i16,
    pub y: i16,
    pub tap: bool,
}

/// Gamepad provider: connection flag, one analog stick, buttons, dpad.
///
/// Everything except `connected` defaults to the neutral reading so partial
/// hardware can implement only what it has.
pub trait GamepadSource {
    fn connected(&mut self) -> bool;

    fn left_x(&mut self) -> i16 {
        0
    }
    fn left_y(&mut self) -> i16 {
        0
    }
    fn button(&mut self, _button: PadButton) -> bool {
        false
    }
    fn dpad_up(&mut self) -> bool {
        false
    }
    fn dpad_down(&mut self) -> bool {
        false
    }
    fn dpad_left(&mut self) -> bool {
        false
    }
    fn dpad_right(&mut self) -> bool {
        false
    }
}

/// Discrete wired buttons. A line that is not wired keeps the `false`
/// default.
pub trait ButtonSource {
    fn up(&mut self) -> bool {
        false
    }
    fn down(&mut self) -> bool {
        false
    }
    fn left(&mut self) -> bool {
        false
    }
    fn right(&mut self) -> bool {
        false
    }
    fn confirm(&mut self) -> bool {
        false
    }
    fn back(&mut self) -> bool {
        false
    }
    fn start(&mut self) -> bool {
        false
    }
    fn select(&mut self) -> bool {
        false
    }
    /// Encoder push button, treated as a second confirm line.
    fn encoder_press(&mut self) -> bool {
        false
    }
}

/// Polled touch provider.
pub trait TouchSource {
    fn poll(&mut self) -> Option<TouchEvent>;
}

/// Per-frame normalized control snapshot shared by every modality.
///
/// Levels are rebuilt on every [`InputMapper::refresh`]; the previous
/// confirm/back levels are kept so `*_pressed` fires only on the low-to-high
/// frame, and the consumption flags stop one physical press from triggering
/// two independent actions inside the same gesture.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct InputSnapshot {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub confirm: bool,
    pub back: bool,
    pub menu: bool,
    pub alt: bool,
    pub start: bool,
    pub select: bool,

    pub(crate) confirm_last: bool,
    pub(crate) back_last: bool,
    pub(crate) confirm_consumed: bool,
    pub(crate) back_consumed: bool,
}

impl InputSnapshot {
    pub fn confirm_pressed(&self) -> bool {
        self.confirm && !self.confirm_last && !self.confirm_consumed
    }

    pub fn back_pressed(&self) -> bool {
        self.back && !self.back_last && !self.back_consumed
    }

    pub fn consume_confirm(&mut self) {
        self.confirm_consumed = true;
    }

    pub fn consume_back(&mut self) {
        self.back_consumed = true;
    }
}

/// Maps raw provider readings into the shared [`InputSnapshot`] once per
/// frame.
pub struct InputMapper<G, B, T> {
    gamepad: G,
    buttons: B,
    touch: T,
    bindings: Bindings,
    deadzone: i16,
    state: InputSnapshot,
}

impl<G, B, T> InputMapper<G, B, T>
where
    G: GamepadSource,
    B: ButtonSource,
    T: TouchSource,
{
    pub fn new(gamepad: G, buttons: B, touch: T) -> Self {
        Self {
            gamepad,
            buttons,
            touch,
            bindings: Bindings::default(),
            deadzone: DEFAULT_DEADZONE,
            state: InputSnapshot::default(),
        }
    }

    pub fn set_deadzone(&mut self, deadzone: i16) {
        self.deadzone = deadzone;
    }

    pub fn rebind_confirm(&mut self, button: PadButton) {
        self.bindings.confirm = button;
    }

    pub fn rebind_back(&mut self, button: PadButton) {
        self.bindings.back = button;
    }

    pub fn state(&self) -> &InputSnapshot {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut InputSnapshot {
        &mut self.state
    }

    /// Rebuilds the snapshot from the source matching `modality`.
    ///
    /// Previous confirm/back levels survive the rebuild for edge detection;
    /// consumption flags reset so a new frame can report a new edge.
    pub fn refresh(&mut self, modality: Modality) {
        let confirm_last = self.state.confirm;
        let back_last = self.state.back;

        self.state = InputSnapshot {
            confirm_last,
            back_last,
            ..InputSnapshot::default()
        };

        match modality {
            Modality::Gamepad => self.read_gamepad(),
            Modality::Mechanical => self.read_buttons(),
            Modality::Touch => self.read_touch(),
        }
    }

    fn read_gamepad(&mut self) {
        if !self.gamepad.connected() {
            return;
        }

        let deadzone = self.deadzone;
        let lx = self.gamepad.left_x();
        let ly = self.gamepad.left_y();

        self.state.up = self.gamepad.dpad_up() || ly < -deadzone;
        self.state.down = self.gamepad.dpad_down() || ly > deadzone;
        self.state.left = self.gamepad.dpad_left() || lx < -deadzone;
        self.state.right = self.gamepad.dpad_right() || lx > deadzone;

        self.state.confirm = self.gamepad.button(self.bindings.confirm);
        self.state.back = self.gamepad.button(self.bindings.back);
        self.state.menu = self.gamepad.button(self.bindings.menu);
        self.state.alt = self.gamepad.button(self.bindings.alt);
        self.state.start = self.gamepad.button(PadButton::Start);
        self.state.select = self.gamepad.button(PadButton::Select);
    }

    fn read_buttons(&mut self) {
        self.state.up = self.buttons.up();
        self.state.down = self.buttons.down();
        self.state.left = self.buttons.left();
        self.state.right = self.buttons.right();
        self.state.confirm = self.buttons.confirm() || self.buttons.encoder_press();
        self.state.back = self.buttons.back();
        self.state.start = self.buttons.start();
        self.state.select = self.buttons.select();
    }

    fn read_touch(&mut self) {
        if let Some(event) = self.touch.poll() {
            self.state.confirm = event.tap;
        }
    }
}
