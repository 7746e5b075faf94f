//! Application-wide constants and compile-time configuration.
//!
//! All timing parameters, layout dimensions and the passcode live here so
//! they can be tuned in one place.

// Passcode

/// Number of symbols in a passcode attempt.
pub const PASS_LENGTH: usize = 4;

/// Factory reference sequence: four presses of UP.
pub const FACTORY_PASSCODE: [u8; PASS_LENGTH] = [0, 0, 0, 0];

/// Active reference sequence.
///
/// Override at build time with four digits `0`-`3` (UP, DOWN, SELECT, BACK):
///
/// ```sh
/// KEEPSAKE_PASSCODE=0312 cargo build --release --features embedded
/// ```
pub const PASSCODE: [u8; PASS_LENGTH] = match option_env!("KEEPSAKE_PASSCODE") {
    Some(s) => parse_passcode(s),
    None => FACTORY_PASSCODE,
};

/// Idle time after which a partial attempt is discarded (ms).
pub const PASSCODE_TIMEOUT_MS: u64 = 5000;

/// Parse a passcode override at compile time. Anything other than exactly
/// `PASS_LENGTH` digits in `0..=3` fails the build.
const fn parse_passcode(s: &str) -> [u8; PASS_LENGTH] {
    let b = s.as_bytes();
    if b.len() != PASS_LENGTH {
        panic!("KEEPSAKE_PASSCODE must be exactly 4 digits");
    }
    let mut out = [0u8; PASS_LENGTH];
    let mut i = 0;
    while i < PASS_LENGTH {
        match b[i] {
            b'0'..=b'3' => out[i] = b[i] - b'0',
            _ => panic!("KEEPSAKE_PASSCODE digits must be 0-3"),
        }
        i += 1;
    }
    out
}

// Input
//
//   Button UP      → P0.11
//   Button DOWN    → P0.12
//   Button SELECT  → P0.24
//   Button BACK    → P0.25
//
// All four are active-low with the internal pull-up enabled.

/// Settle window before a falling edge is re-sampled (ms).
pub const DEBOUNCE_SETTLE_MS: u32 = 60;

/// Control loop period (ms).
pub const LOOP_TICK_MS: u64 = 10;

// Display (ST7789, 240×240 IPS over SPIM3)
//
//   SCK → P0.04   MOSI → P0.05   CS → P0.06
//   DC  → P0.07   RST  → P0.08   BL → P0.26

pub const DISPLAY_WIDTH: u32 = 240;
pub const DISPLAY_HEIGHT: u32 = 240;

/// Height of the coloured title bar on text content screens.
pub const TITLE_BAR_HEIGHT: u32 = 36;

/// Number of strips in a photo slide transition.
pub const SLIDE_STEPS: u32 = 16;

/// Pause between two slide strips (ms).
pub const SLIDE_STEP_MS: u32 = 15;

/// How long the boot splash stays up before the lock screen (ms).
pub const BOOT_SPLASH_MS: u32 = 1200;

// Feedback
//
//   WS2812 data → P0.13 (PWM0)
//   Vibration motor (via N-FET) → P0.14

/// Number of WS2812 pixels in the chain.
pub const LED_COUNT: usize = 4;

/// Global brightness scalar applied to every frame (0-255).
pub const LED_BRIGHTNESS: u8 = 48;

/// Extra scaling of the entry accent while a content screen is open (0-255).
pub const CONTENT_AMBIENT_DIM: u8 = 96;

// SD card (SPIM2)
//
//   SCK → P0.19   MOSI → P0.20   MISO → P0.21   CS → P0.22
