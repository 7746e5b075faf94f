//! SD card presence and capacity, as reported on the About screen.
//!
//! The card is probed once at boot by the firmware (see `drivers::sdcard`).
//! A missing or broken card is never fatal: the status simply says so.

use crate::error::StorageError;

/// Card family reported by the SD initialisation handshake.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MediaKind {
    /// No usable card.
    None,
    /// Standard capacity, physical layer v1.x.
    Sd1,
    /// Standard capacity, physical layer v2.x.
    Sd2,
    /// High / extended capacity (block addressed).
    Sdhc,
}

impl MediaKind {
    pub const fn label(self) -> &'static str {
        match self {
            MediaKind::None => "none",
            MediaKind::Sd1 => "SD v1",
            MediaKind::Sd2 => "SD v2",
            MediaKind::Sdhc => "SDHC",
        }
    }
}

/// What the storage probe found.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ProbeInfo {
    pub media: MediaKind,
    /// Raw card size, if the CSD register could be read.
    pub bytes: Option<u64>,
}

/// Boot-time storage status. Read-only after boot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StorageStatus {
    pub detected: bool,
    pub capacity_mb: Option<u64>,
    pub media: MediaKind,
}

impl StorageStatus {
    /// Status used before (or without) a probe.
    pub const fn absent() -> Self {
        Self {
            detected: false,
            capacity_mb: None,
            media: MediaKind::None,
        }
    }

    /// Fold the probe outcome into a status.
    pub fn from_probe(probe: Result<ProbeInfo, StorageError>) -> Self {
        match probe {
            Ok(info) => {
                let capacity_mb = info.bytes.map(|b| b / (1024 * 1024));
                info!(
                    "Storage: {} detected, {} MB",
                    info.media,
                    capacity_mb.unwrap_or(0)
                );
                Self {
                    detected: true,
                    capacity_mb,
                    media: info.media,
                }
            }
            Err(e) => {
                warn!("Storage unavailable: {}", e);
                Self::absent()
            }
        }
    }
}

impl Default for StorageStatus {
    fn default() -> Self {
        Self::absent()
    }
}
