//! Plays navigation effects back on the hardware.
//!
//! Effects run strictly in order and each one is awaited to completion, so
//! the control loop is busy for the whole profile, exactly like a blocking
//! busy-wait, but without starving the executor.

use super::display::draw_scene;
use super::navigation::Effect;
use super::slide::Slide;
use crate::catalog::{self, ContentBody};
use crate::config::SLIDE_STEP_MS;
use crate::error::Error;
use crate::feedback::haptic::Haptic;
use crate::feedback::leds::{Indicator, LedStrip};
use crate::feedback::{FeedbackProfile, Light};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_hal::digital::OutputPin;
use embedded_hal_async::delay::DelayNs;

/// Display, motor, LED chain and a delay source, bundled for playback.
pub struct Outputs<D, P, L, T> {
    display: D,
    haptic: Haptic<P>,
    indicator: Indicator<L>,
    delay: T,
}

impl<D, P, L, T> Outputs<D, P, L, T>
where
    D: DrawTarget<Color = Rgb565>,
    P: OutputPin,
    L: LedStrip,
    T: DelayNs,
{
    pub fn new(display: D, haptic: Haptic<P>, indicator: Indicator<L>, delay: T) -> Self {
        Self {
            display,
            haptic,
            indicator,
            delay,
        }
    }

    /// Apply every effect in order. A failing effect does not stop the
    /// rest; the first error is returned once all have run.
    pub async fn apply_all(&mut self, effects: &[Effect]) -> Result<(), Error> {
        let mut first_error = None;
        for effect in effects {
            if let Err(e) = self.apply(effect).await {
                error!("Effect failed: {}", e);
                first_error.get_or_insert(e);
            }
        }
        first_error.map_or(Ok(()), Err)
    }

    pub async fn apply(&mut self, effect: &Effect) -> Result<(), Error> {
        match *effect {
            Effect::Feedback(profile) => self.play(profile).await,
            Effect::Render(scene) => {
                draw_scene(&mut self.display, &scene).map_err(|_| Error::Display)
            }
            Effect::Slide {
                item, to, direction, ..
            } => {
                let ContentBody::ImagePages(images) = catalog::item(item as usize).body else {
                    return Ok(());
                };
                let Some(image) = images.get(to as usize) else {
                    return Ok(());
                };
                let slide = Slide::new(image, direction);
                for step in 1..=slide.steps() {
                    slide
                        .draw_step(&mut self.display, step)
                        .map_err(|_| Error::Display)?;
                    self.delay.delay_ms(SLIDE_STEP_MS).await;
                }
                slide.finish(&mut self.display).map_err(|_| Error::Display)
            }
            Effect::Ambient(color) => self.indicator.set_ambient(color).await,
        }
    }

    /// Run one feedback profile: haptic pattern, with its light part
    /// wrapped around (flash) or after (ramp, sweep) it. The motor and the
    /// LED chain are independent: every part runs and the first error wins.
    pub async fn play(&mut self, profile: FeedbackProfile) -> Result<(), Error> {
        let light = profile.light();
        let flash = match light {
            Light::Flash { color } => self.indicator.show_color(color).await,
            _ => Ok(()),
        };

        let haptic = self
            .haptic
            .actuate_pattern(profile.pulses(), &mut self.delay)
            .await;

        let after = match light {
            Light::None => Ok(()),
            Light::Flash { .. } => self.indicator.restore().await,
            Light::Ramp { to, steps, step_ms } => {
                self.indicator.ramp(to, steps, step_ms, &mut self.delay).await
            }
            Light::Sweep { color, step_ms } => {
                self.indicator.sweep(color, step_ms, &mut self.delay).await
            }
        };

        flash.and(haptic).and(after)
    }

    /// Take the peripherals back (used by tests).
    pub fn release(self) -> (D, P, L, T) {
        (
            self.display,
            self.haptic.release(),
            self.indicator.release(),
            self.delay,
        )
    }
}
