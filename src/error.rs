//! Unified error type for keepsake.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! Derives `defmt::Format` (behind the `defmt` feature) for efficient
//! on-target logging.

use core::fmt;

/// Top-level error type used across the firmware.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    // UI / Display
    /// SPI transaction to the panel failed.
    Display,

    // Feedback
    /// The WS2812 chain could not latch a frame.
    Led,

    /// The vibration motor pin could not be driven.
    Haptic,

    // Storage
    /// SD card probe failed (never fatal, only shown on the About screen).
    Storage(StorageError),
}

/// Why the SD card is not available.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StorageError {
    /// No card answered on the bus.
    NotDetected,
    /// A card answered but initialisation did not complete.
    InitFailed,
}

// Convenience conversions

impl From<StorageError> for Error {
    fn from(e: StorageError) -> Self {
        Error::Storage(e)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Display => f.write_str("display bus failure"),
            Error::Led => f.write_str("LED chain failure"),
            Error::Haptic => f.write_str("haptic motor failure"),
            Error::Storage(e) => write!(f, "storage: {e}"),
        }
    }
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::NotDetected => f.write_str("not detected"),
            StorageError::InitFailed => f.write_str("init failed"),
        }
    }
}
