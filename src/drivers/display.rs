//! ST7789 IPS panel wrapper.

use defmt::info;
use embassy_nrf::gpio::Output;
use embassy_nrf::peripherals;
use embassy_nrf::spim::Spim;
use embassy_time::Delay;
use embedded_hal_bus::spi::ExclusiveDevice;
use keepsake::config::{DISPLAY_HEIGHT, DISPLAY_WIDTH};
use keepsake::Error;
use mipidsi::interface::SpiInterface;
use mipidsi::models::ST7789;
use mipidsi::options::ColorInversion;
use mipidsi::Builder;
use static_cell::StaticCell;

type PanelSpi = ExclusiveDevice<Spim<'static, peripherals::SPI3>, Output<'static>, Delay>;

/// Type alias for the concrete display driver.
pub type Panel =
    mipidsi::Display<SpiInterface<'static, PanelSpi, Output<'static>>, ST7789, Output<'static>>;

/// Pixel staging buffer for the SPI interface.
static PANEL_BUFFER: StaticCell<[u8; 512]> = StaticCell::new();

/// Reset and initialise the panel. Must be called exactly once.
pub fn init(
    bus: Spim<'static, peripherals::SPI3>,
    cs: Output<'static>,
    dc: Output<'static>,
    rst: Output<'static>,
) -> Result<Panel, Error> {
    let spi = ExclusiveDevice::new(bus, cs, Delay).map_err(|_| Error::Display)?;
    let buffer = PANEL_BUFFER.init([0u8; 512]);
    let interface = SpiInterface::new(spi, dc, buffer);

    let panel = Builder::new(ST7789, interface)
        .display_size(DISPLAY_WIDTH as u16, DISPLAY_HEIGHT as u16)
        .invert_colors(ColorInversion::Inverted)
        .reset_pin(rst)
        .init(&mut Delay)
        .map_err(|_| Error::Display)?;

    info!("Display ready: {}x{} ST7789", DISPLAY_WIDTH, DISPLAY_HEIGHT);
    Ok(panel)
}
