//! Polled button input with settle-and-resample debouncing.
//!
//! Four physical buttons (active-low with internal pull-up):
//!   - UP     - passcode symbol 0 / previous menu item / previous page
//!   - DOWN   - passcode symbol 1 / next menu item / next page
//!   - SELECT - passcode symbol 2 / open the highlighted entry
//!   - BACK   - passcode symbol 3 / return to the menu
//!
//! [`Buttons::poll`] is called once per control-loop tick. A press is
//! reported only for a released→pressed transition relative to the previous
//! poll, and only if the line is still low after [`DEBOUNCE_SETTLE_MS`].
//! Releases never produce events.

use crate::config::DEBOUNCE_SETTLE_MS;
use crate::ui::{Button, ButtonEvent};
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::InputPin;
use heapless::Vec;

/// The four button lines, in [`Button::ALL`] order.
pub struct Buttons<P> {
    pins: [P; 4],
    /// Last sampled level per line (`true` = pressed / low).
    pressed: [bool; 4],
    settle_ms: u32,
}

impl<P: InputPin> Buttons<P> {
    /// Wrap the UP, DOWN, SELECT and BACK lines.
    pub fn new(up: P, down: P, select: P, back: P) -> Self {
        Self {
            pins: [up, down, select, back],
            pressed: [false; 4],
            settle_ms: DEBOUNCE_SETTLE_MS,
        }
    }

    /// Poll every line once and return the confirmed presses.
    ///
    /// Each candidate edge blocks for the settle window before it is
    /// re-sampled, so a poll may take up to four settle windows.
    pub fn poll(&mut self, delay: &mut impl DelayNs) -> Vec<ButtonEvent, 4> {
        let mut events = Vec::new();

        for (i, button) in Button::ALL.iter().enumerate() {
            let was_pressed = self.pressed[i];
            let now_pressed = sample(&mut self.pins[i]);
            self.pressed[i] = now_pressed;

            if was_pressed || !now_pressed {
                continue;
            }

            // Candidate falling edge: wait, then confirm.
            delay.delay_ms(self.settle_ms);
            if sample(&mut self.pins[i]) {
                debug!("Button: {}", button);
                let _ = events.push(ButtonEvent::pressed(*button));
            } else {
                // Noise: forget the edge so a later genuine press is seen.
                self.pressed[i] = false;
            }
        }

        events
    }

    /// Give the pins back (used by tests to verify mock expectations).
    pub fn release(self) -> [P; 4] {
        self.pins
    }
}

/// Read one active-low line. A line that cannot be read counts as released.
fn sample<P: InputPin>(pin: &mut P) -> bool {
    match pin.is_low() {
        Ok(low) => low,
        Err(_) => {
            warn!("Button line read failed");
            false
        }
    }
}
