//! Concrete nRF52840 drivers behind the core's capability seams.
//!
//! - [`display`] - ST7789 240×240 IPS panel over SPIM3 (mipidsi)
//! - [`leds`]    - WS2812 chain clocked out by PWM0 EasyDMA sequences
//! - [`sdcard`]  - one-shot SD card probe over SPIM2 (embedded-sdmmc)

pub mod display;
pub mod leds;
pub mod sdcard;
