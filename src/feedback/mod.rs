//! Named feedback profiles over the haptic motor and the LED indicator.
//!
//! The timings encode how the device feels in the hand (success is
//! short-short-long, error is long-short) and are part of the contract:
//! change them here and nowhere else.
//!
//! - [`haptic`] - timed on/off sequences on the vibration motor pin
//! - [`leds`]   - ambient colour, flashes and ramps on the WS2812 chain
//! - [`ws2812`] - PWM duty-cycle encoding for the chain

pub mod haptic;
pub mod leds;
pub mod ws2812;

use embedded_graphics::pixelcolor::Rgb888;

/// One motor pulse: on for `on_ms`, then off for `off_ms`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Pulse {
    pub on_ms: u32,
    pub off_ms: u32,
}

const fn pulse(on_ms: u32, off_ms: u32) -> Pulse {
    Pulse { on_ms, off_ms }
}

const BUTTON_PRESS: &[Pulse] = &[pulse(30, 0)];
const MENU_NAV: &[Pulse] = &[pulse(20, 0)];
const PAGE_TURN: &[Pulse] = &[pulse(40, 0)];
const SUCCESS: &[Pulse] = &[pulse(60, 80), pulse(60, 80), pulse(220, 0)];
const ERROR: &[Pulse] = &[pulse(300, 100), pulse(80, 0)];
const BOOT: &[Pulse] = &[pulse(50, 0)];

/// Light part of a profile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Light {
    None,
    /// Show `color` while the haptic pattern plays, then restore the ambient colour.
    Flash { color: Rgb888 },
    /// Linear fade from the current ambient colour to `to`.
    Ramp { to: Rgb888, steps: u8, step_ms: u32 },
    /// Light the pixels one by one in `color`, then go dark.
    Sweep { color: Rgb888, step_ms: u32 },
}

/// Named feedback profiles, one per navigation event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FeedbackProfile {
    /// Any accepted button press.
    ButtonPress,
    /// Menu highlight moved.
    MenuNav,
    /// Content page changed.
    PageTurn,
    /// Passcode accepted: short, short, long.
    Success,
    /// Passcode rejected: long, short, red flash.
    Error,
    /// Ambient fade into the unlocked colour.
    Unlock,
    /// Power-on greeting.
    Boot,
}

pub const COLOR_ERROR: Rgb888 = Rgb888::new(0xFF, 0x10, 0x10);
pub const COLOR_UNLOCKED: Rgb888 = Rgb888::new(0x20, 0xFF, 0x60);
pub const COLOR_BOOT: Rgb888 = Rgb888::new(0xFF, 0xC8, 0x80);
/// Ambient colour while the lock screen is up.
pub const COLOR_LOCKED: Rgb888 = Rgb888::new(0x60, 0x18, 0x30);

impl FeedbackProfile {
    /// Haptic part of the profile.
    pub const fn pulses(self) -> &'static [Pulse] {
        match self {
            FeedbackProfile::ButtonPress => BUTTON_PRESS,
            FeedbackProfile::MenuNav => MENU_NAV,
            FeedbackProfile::PageTurn => PAGE_TURN,
            FeedbackProfile::Success => SUCCESS,
            FeedbackProfile::Error => ERROR,
            FeedbackProfile::Unlock => &[],
            FeedbackProfile::Boot => BOOT,
        }
    }

    /// Light part of the profile.
    pub const fn light(self) -> Light {
        match self {
            FeedbackProfile::Error => Light::Flash { color: COLOR_ERROR },
            FeedbackProfile::Unlock => Light::Ramp {
                to: COLOR_UNLOCKED,
                steps: 10,
                step_ms: 30,
            },
            FeedbackProfile::Boot => Light::Sweep {
                color: COLOR_BOOT,
                step_ms: 80,
            },
            _ => Light::None,
        }
    }

    /// Total time the profile keeps the control loop busy (ms).
    pub fn duration_ms(self) -> u32 {
        let haptic: u32 = self.pulses().iter().map(|p| p.on_ms + p.off_ms).sum();
        let light = match self.light() {
            Light::Ramp { steps, step_ms, .. } => steps as u32 * step_ms,
            Light::Sweep { step_ms, .. } => crate::config::LED_COUNT as u32 * step_ms,
            Light::None | Light::Flash { .. } => 0,
        };
        haptic + light
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_is_short_short_long() {
        let p = FeedbackProfile::Success.pulses();
        assert_eq!(p.len(), 3);
        assert_eq!(p[0].on_ms, p[1].on_ms);
        assert!(p[2].on_ms > p[0].on_ms);
        assert_eq!(p[0].off_ms, p[1].off_ms);
    }

    #[test]
    fn error_is_long_short_with_red_flash() {
        let p = FeedbackProfile::Error.pulses();
        assert_eq!(p.len(), 2);
        assert!(p[0].on_ms > p[1].on_ms);
        assert_eq!(
            FeedbackProfile::Error.light(),
            Light::Flash { color: COLOR_ERROR }
        );
    }

    #[test]
    fn profile_durations_are_fixed() {
        assert_eq!(FeedbackProfile::ButtonPress.duration_ms(), 30);
        assert_eq!(FeedbackProfile::MenuNav.duration_ms(), 20);
        assert_eq!(FeedbackProfile::PageTurn.duration_ms(), 40);
        assert_eq!(FeedbackProfile::Success.duration_ms(), 500);
        assert_eq!(FeedbackProfile::Error.duration_ms(), 480);
        assert_eq!(FeedbackProfile::Unlock.duration_ms(), 300);
        assert_eq!(FeedbackProfile::Boot.duration_ms(), 50 + 4 * 80);
    }

    #[test]
    fn every_profile_stays_well_under_the_passcode_timeout() {
        for profile in [
            FeedbackProfile::ButtonPress,
            FeedbackProfile::MenuNav,
            FeedbackProfile::PageTurn,
            FeedbackProfile::Success,
            FeedbackProfile::Error,
            FeedbackProfile::Unlock,
            FeedbackProfile::Boot,
        ] {
            assert!(
                (profile.duration_ms() as u64) < crate::config::PASSCODE_TIMEOUT_MS / 5,
                "{profile:?}"
            );
        }
    }
}
