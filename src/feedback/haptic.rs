//! Vibration motor driven by timed on/off sequences.
//!
//! The motor sits behind a low-side FET on a plain GPIO: high = spinning.
//! Every call keeps the caller busy for the full duration of the pattern.

use super::Pulse;
use crate::error::Error;
use embedded_hal::digital::OutputPin;
use embedded_hal_async::delay::DelayNs;

/// Single binary actuator.
pub struct Haptic<P> {
    pin: P,
}

impl<P: OutputPin> Haptic<P> {
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    /// Run the motor for `duration_ms`, then stop it.
    pub async fn actuate(
        &mut self,
        duration_ms: u32,
        delay: &mut impl DelayNs,
    ) -> Result<(), Error> {
        if duration_ms == 0 {
            return Ok(());
        }
        self.pin.set_high().map_err(|_| Error::Haptic)?;
        delay.delay_ms(duration_ms).await;
        self.pin.set_low().map_err(|_| Error::Haptic)
    }

    /// Play every pulse of a pattern back to back.
    pub async fn actuate_pattern(
        &mut self,
        pattern: &[Pulse],
        delay: &mut impl DelayNs,
    ) -> Result<(), Error> {
        for pulse in pattern {
            let result = self.actuate(pulse.on_ms, delay).await;
            if result.is_err() {
                // Never leave the motor spinning on a bus hiccup.
                let _ = self.pin.set_low();
                return result;
            }
            if pulse.off_ms > 0 {
                delay.delay_ms(pulse.off_ms).await;
            }
        }
        Ok(())
    }

    /// Give the pin back (used by tests to verify mock expectations).
    pub fn release(self) -> P {
        self.pin
    }
}
