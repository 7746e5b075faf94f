//! User interface subsystem - ST7789 panel + physical buttons.
//!
//! The navigation state machine reacts to debounced button presses and
//! emits an ordered list of effects (haptic, redraw, ambient LED colour),
//! which [`outputs::Outputs`] plays back on the hardware.
//!
//! ## Components
//!
//! - **Buttons**: 4 tactile switches with settle debouncing (UP, DOWN, SELECT, BACK)
//! - **Navigation**: lock → unlock → menu → content state machine
//! - **Display**: stateless screen drawing for a 240×240 RGB565 panel
//! - **Slide**: strip-by-strip photo transition

pub mod buttons;
pub mod display;
pub mod input_logic;
pub mod navigation;
pub mod outputs;
pub mod slide;

#[cfg(test)]
pub(crate) mod test_support;

/// Top-level application state. Exactly one lives in the [`navigation::Navigator`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AppState {
    /// Splash screen, input ignored.
    Booting,
    /// Lock screen - every button is a passcode symbol.
    Locked,
    /// Transient: passcode matched, unlock feedback playing.
    Unlocking,
    /// Four-entry menu.
    Menu,
    /// Paged content of the selected menu entry.
    Content,
}

/// Physical buttons.
///
/// The button identity doubles as the passcode symbol (see [`Button::symbol`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    Up,
    Down,
    Select,
    Back,
}

impl Button {
    /// All buttons, in polling and symbol order.
    pub const ALL: [Button; 4] = [Button::Up, Button::Down, Button::Select, Button::Back];

    /// Passcode symbol entered by this button.
    pub const fn symbol(self) -> u8 {
        match self {
            Button::Up => 0,
            Button::Down => 1,
            Button::Select => 2,
            Button::Back => 3,
        }
    }
}

/// Kind of a debounced button event. Releases are never reported.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EventKind {
    Pressed,
}

/// Physical button events (after debouncing).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonEvent {
    pub button: Button,
    pub kind: EventKind,
}

impl ButtonEvent {
    pub const fn pressed(button: Button) -> Self {
        Self {
            button,
            kind: EventKind::Pressed,
        }
    }
}
