//! Host-testable core of the keepsake firmware.
//!
//! Everything that does not need the nRF52840 lives here: the button
//! debouncer, the passcode engine, the navigation state machine, the screen
//! renderer, the feedback profiles and the content catalog. Hardware is
//! reached only through `embedded-hal`, `embedded-graphics` and the
//! [`feedback::leds::LedStrip`] trait.
//!
//! Usage: `cargo test` (host) or
//! `cargo run --release --features embedded --target thumbv7em-none-eabihf`.
//!
//! Note: The embedded binary uses main.rs with #![no_std] and #![no_main]
//! and only adds the concrete drivers and the control loop.

#![cfg_attr(not(test), no_std)]

// This must go FIRST so that all the other modules see its macros.
#[macro_use]
mod fmt;

pub mod catalog;
pub mod config;
pub mod error;
pub mod feedback;
pub mod passcode;
pub mod storage;
pub mod ui;

pub use error::Error;
