//! WS2812 frame encoding for the nRF52 PWM peripheral.
//!
//! Each data bit becomes one PWM duty word at 16 MHz with `max_duty = 20`
//! (1.25 µs per bit). Bit 15 selects the idle-low polarity. Colours go out
//! in GRB order, MSB first, followed by one low word before the reset gap.
//!
//! ```text
//! '1' bit: 13 ticks high (0.81 µs), 7 low
//! '0' bit:  7 ticks high (0.44 µs), 13 low
//! ```

use super::leds::scale;
use crate::config::LED_COUNT;
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;

/// PWM counter top: 20 ticks at 16 MHz = 1.25 µs.
pub const MAX_DUTY: u16 = 20;
/// Duty word for a `1` bit.
pub const T1H: u16 = 0x8000 | 13;
/// Duty word for a `0` bit.
pub const T0H: u16 = 0x8000 | 7;
/// Line held low.
pub const RES: u16 = 0x8000;
/// Reset gap appended after the sequence, in PWM periods (> 50 µs).
pub const RESET_PERIODS: u32 = 799;

/// Duty words for one frame: 24 per pixel plus a trailing low word.
pub const FRAME_WORDS: usize = LED_COUNT * 24 + 1;

/// Encode a frame (brightness applied) into `words`.
pub fn encode(pixels: &[Rgb888; LED_COUNT], brightness: u8, words: &mut [u16; FRAME_WORDS]) {
    let mut i = 0;
    for pixel in pixels {
        let c = scale(*pixel, brightness);
        for byte in [c.g(), c.r(), c.b()] {
            for bit in (0..8).rev() {
                words[i] = if byte & (1 << bit) != 0 { T1H } else { T0H };
                i += 1;
            }
        }
    }
    words[FRAME_WORDS - 1] = RES;
}
