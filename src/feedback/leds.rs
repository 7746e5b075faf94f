//! RGB LED indicator on top of an addressable chain.
//!
//! Keeps the ambient colour so flashes can restore it, applies the global
//! brightness scalar, and latches whole frames through [`LedStrip::write`].

use crate::config::{LED_BRIGHTNESS, LED_COUNT};
use crate::error::Error;
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_hal_async::delay::DelayNs;

/// Hardware seam for the LED chain.
///
/// `write` must latch the whole frame before returning (the "show" call).
#[allow(async_fn_in_trait)]
pub trait LedStrip {
    type Error;

    async fn write(&mut self, pixels: &[Rgb888; LED_COUNT], brightness: u8)
        -> Result<(), Self::Error>;
}

/// Scale one 8-bit channel by a 0-255 brightness.
pub const fn scale_channel(value: u8, brightness: u8) -> u8 {
    ((value as u16 * brightness as u16 + 127) / 255) as u8
}

/// Scale a colour by a 0-255 brightness.
pub fn scale(color: Rgb888, brightness: u8) -> Rgb888 {
    Rgb888::new(
        scale_channel(color.r(), brightness),
        scale_channel(color.g(), brightness),
        scale_channel(color.b(), brightness),
    )
}

/// Linear interpolation between two colours, `step` out of `steps`.
pub fn lerp(from: Rgb888, to: Rgb888, step: u8, steps: u8) -> Rgb888 {
    if steps == 0 || step >= steps {
        return to;
    }
    let mix = |a: u8, b: u8| -> u8 {
        let a = a as i32;
        let b = b as i32;
        (a + (b - a) * step as i32 / steps as i32) as u8
    };
    Rgb888::new(
        mix(from.r(), to.r()),
        mix(from.g(), to.g()),
        mix(from.b(), to.b()),
    )
}

/// Ambient-colour indicator.
pub struct Indicator<L> {
    strip: L,
    ambient: Rgb888,
    brightness: u8,
}

impl<L: LedStrip> Indicator<L> {
    pub fn new(strip: L) -> Self {
        Self {
            strip,
            ambient: Rgb888::BLACK,
            brightness: LED_BRIGHTNESS,
        }
    }

    pub fn ambient(&self) -> Rgb888 {
        self.ambient
    }

    /// Fill the chain with `color` and keep it as the ambient colour.
    pub async fn set_ambient(&mut self, color: Rgb888) -> Result<(), Error> {
        self.ambient = color;
        self.show([color; LED_COUNT]).await
    }

    /// Show `color` without changing the ambient colour.
    pub async fn show_color(&mut self, color: Rgb888) -> Result<(), Error> {
        self.show([color; LED_COUNT]).await
    }

    /// Put the ambient colour back after a flash.
    pub async fn restore(&mut self) -> Result<(), Error> {
        self.show([self.ambient; LED_COUNT]).await
    }

    /// Fade from the ambient colour to `to`; `to` becomes the new ambient.
    pub async fn ramp(
        &mut self,
        to: Rgb888,
        steps: u8,
        step_ms: u32,
        delay: &mut impl DelayNs,
    ) -> Result<(), Error> {
        let from = self.ambient;
        for step in 1..=steps {
            self.show([lerp(from, to, step, steps); LED_COUNT]).await?;
            delay.delay_ms(step_ms).await;
        }
        self.set_ambient(to).await
    }

    /// Light pixel 0, then 0-1, ... up to the full chain, then go dark.
    pub async fn sweep(
        &mut self,
        color: Rgb888,
        step_ms: u32,
        delay: &mut impl DelayNs,
    ) -> Result<(), Error> {
        let mut frame = [Rgb888::BLACK; LED_COUNT];
        for lit in 1..=LED_COUNT {
            frame[lit - 1] = color;
            self.show(frame).await?;
            delay.delay_ms(step_ms).await;
        }
        self.set_ambient(Rgb888::BLACK).await
    }

    async fn show(&mut self, frame: [Rgb888; LED_COUNT]) -> Result<(), Error> {
        self.strip
            .write(&frame, self.brightness)
            .await
            .map_err(|_| Error::Led)
    }

    /// Give the strip back (used by tests).
    pub fn release(self) -> L {
        self.strip
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::test_support::{RecordingDelay, RecordingStrip};
    use embassy_futures::block_on;

    const PINK: Rgb888 = Rgb888::new(200, 40, 120);

    #[test]
    fn brightness_scaling_is_rounded_and_bounded() {
        assert_eq!(scale_channel(255, 255), 255);
        assert_eq!(scale_channel(255, 0), 0);
        assert_eq!(scale_channel(255, 128), 128);
        assert_eq!(scale_channel(10, 48), 2);
        assert_eq!(scale(Rgb888::WHITE, 51), Rgb888::new(51, 51, 51));
    }

    #[test]
    fn lerp_hits_both_endpoints() {
        assert_eq!(lerp(Rgb888::BLACK, PINK, 0, 10), Rgb888::BLACK);
        assert_eq!(lerp(Rgb888::BLACK, PINK, 10, 10), PINK);
        assert_eq!(lerp(Rgb888::BLACK, PINK, 5, 10), Rgb888::new(100, 20, 60));
        assert_eq!(lerp(PINK, Rgb888::BLACK, 0, 0), Rgb888::BLACK);
    }

    #[test]
    fn ambient_is_latched_with_global_brightness() {
        let mut indicator = Indicator::new(RecordingStrip::default());
        block_on(indicator.set_ambient(PINK)).unwrap();

        let strip = indicator.release();
        assert_eq!(strip.frames.len(), 1);
        assert_eq!(strip.frames[0], ([PINK; LED_COUNT], LED_BRIGHTNESS));
    }

    #[test]
    fn flash_then_restore_returns_to_ambient() {
        let mut indicator = Indicator::new(RecordingStrip::default());
        block_on(async {
            indicator.set_ambient(PINK).await.unwrap();
            indicator.show_color(Rgb888::RED).await.unwrap();
            indicator.restore().await.unwrap();
        });

        assert_eq!(indicator.ambient(), PINK);
        let strip = indicator.release();
        assert_eq!(strip.frames[1].0, [Rgb888::RED; LED_COUNT]);
        assert_eq!(strip.last(), Some(&[PINK; LED_COUNT]));
    }

    #[test]
    fn ramp_ends_on_target_and_takes_steps_times_step_ms() {
        let mut indicator = Indicator::new(RecordingStrip::default());
        let mut delay = RecordingDelay::default();
        block_on(indicator.ramp(PINK, 4, 25, &mut delay)).unwrap();

        assert_eq!(delay.total_ms(), 100);
        assert_eq!(indicator.ambient(), PINK);
        let strip = indicator.release();
        // 4 ramp frames + final latch.
        assert_eq!(strip.frames.len(), 5);
        assert_eq!(strip.frames[0].0[0], lerp(Rgb888::BLACK, PINK, 1, 4));
    }

    #[test]
    fn sweep_lights_pixels_in_order() {
        let mut indicator = Indicator::new(RecordingStrip::default());
        let mut delay = RecordingDelay::default();
        block_on(indicator.sweep(PINK, 80, &mut delay)).unwrap();

        let strip = indicator.release();
        for (n, (frame, _)) in strip.frames.iter().take(LED_COUNT).enumerate() {
            let lit = frame.iter().filter(|&&c| c == PINK).count();
            assert_eq!(lit, n + 1);
        }
        assert_eq!(strip.last(), Some(&[Rgb888::BLACK; LED_COUNT]));
        assert_eq!(delay.total_ms(), 80 * LED_COUNT as u64);
    }
}
