//! Boot-time SD card probe.
//!
//! Only presence, card family and capacity are read; no filesystem is
//! mounted.

use defmt::warn;
use embedded_hal::spi::SpiDevice;
use embedded_sdmmc::sdcard::{CardType, Error as SdError};
use embedded_sdmmc::SdCard;
use keepsake::error::StorageError;
use keepsake::storage::{MediaKind, ProbeInfo};

/// Initialise the card and read its type and size.
pub fn probe<SPI, D>(spi: SPI, delay: D) -> Result<ProbeInfo, StorageError>
where
    SPI: SpiDevice<u8>,
    D: embedded_hal::delay::DelayNs,
{
    let card = SdCard::new(spi, delay);

    // The first access runs the init handshake.
    let bytes = match card.num_bytes() {
        Ok(bytes) => Some(bytes),
        Err(SdError::CardNotFound) => return Err(StorageError::NotDetected),
        Err(e) => {
            warn!("SD size unavailable: {}", e);
            None
        }
    };

    let media = match card.get_card_type() {
        Some(CardType::SD1) => MediaKind::Sd1,
        Some(CardType::SD2) => MediaKind::Sd2,
        Some(CardType::SDHC) => MediaKind::Sdhc,
        None => return Err(StorageError::InitFailed),
    };

    Ok(ProbeInfo { media, bytes })
}
