//! keepsake firmware - nRF52840 entry point.
//!
//! Single cooperative control loop: poll the buttons, feed the navigation
//! state machine, play back the effects it returns, sleep one tick. Every
//! feedback sequence is awaited before input is looked at again.

#![no_std]
#![no_main]

mod drivers;

use defmt::{error, info, warn};
use embassy_executor::Spawner;
use embassy_nrf::gpio::{Input, Level, Output, OutputDrive, Pull};
use embassy_nrf::{bind_interrupts, peripherals, spim};
use embassy_time::{Delay, Instant, Timer};
use embedded_hal_bus::spi::ExclusiveDevice;
use keepsake::config::LOOP_TICK_MS;
use keepsake::error::StorageError;
use keepsake::feedback::haptic::Haptic;
use keepsake::feedback::leds::Indicator;
use keepsake::storage::StorageStatus;
use keepsake::ui::buttons::Buttons;
use keepsake::ui::navigation::{Effect, Navigator};
use keepsake::ui::outputs::Outputs;

use {defmt_rtt as _, panic_probe as _};

bind_interrupts!(struct Irqs {
    SPIM3 => spim::InterruptHandler<peripherals::SPI3>;
    SPIM2_SPIS2_SPI2 => spim::InterruptHandler<peripherals::SPI2>;
});

fn now_ms() -> u64 {
    Instant::now().as_millis()
}

async fn play<D, P, L, T>(outputs: &mut Outputs<D, P, L, T>, effects: &[Effect])
where
    D: embedded_graphics::draw_target::DrawTarget<Color = embedded_graphics::pixelcolor::Rgb565>,
    P: embedded_hal::digital::OutputPin,
    L: keepsake::feedback::leds::LedStrip,
    T: embedded_hal_async::delay::DelayNs,
{
    if let Err(e) = outputs.apply_all(effects).await {
        // No secondary channel to report on: log and keep going.
        warn!("Output error: {}", e);
    }
}

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_nrf::init(Default::default());
    info!("keepsake v{=str} starting", env!("CARGO_PKG_VERSION"));

    // SD card: probed once, the bus is released afterwards.
    let storage = {
        let mut config = spim::Config::default();
        config.frequency = spim::Frequency::K250;
        let bus = spim::Spim::new(p.SPI2, Irqs, p.P0_19, p.P0_21, p.P0_20, config);
        let cs = Output::new(p.P0_22, Level::High, OutputDrive::Standard);
        let probe = ExclusiveDevice::new(bus, cs, Delay)
            .map_err(|_| StorageError::InitFailed)
            .and_then(|spi| drivers::sdcard::probe(spi, Delay));
        StorageStatus::from_probe(probe)
    };

    // Display on SPIM3, write-only.
    let mut config = spim::Config::default();
    config.frequency = spim::Frequency::M32;
    let bus = spim::Spim::new_txonly(p.SPI3, Irqs, p.P0_04, p.P0_05, config);
    let cs = Output::new(p.P0_06, Level::High, OutputDrive::Standard);
    let dc = Output::new(p.P0_07, Level::Low, OutputDrive::Standard);
    let rst = Output::new(p.P0_08, Level::High, OutputDrive::Standard);
    let _backlight = Output::new(p.P0_26, Level::High, OutputDrive::Standard);
    let panel = match drivers::display::init(bus, cs, dc, rst) {
        Ok(panel) => panel,
        Err(e) => {
            error!("Display initialization failed: {}", e);
            loop {
                Timer::after_secs(1).await;
            }
        }
    };

    let strip = match drivers::leds::Ws2812::new(p.PWM0, p.P0_13) {
        Ok(strip) => strip,
        Err(_) => {
            error!("WS2812 PWM setup failed");
            loop {
                Timer::after_secs(1).await;
            }
        }
    };

    let motor = Output::new(p.P0_14, Level::Low, OutputDrive::Standard);

    let mut outputs = Outputs::new(panel, Haptic::new(motor), Indicator::new(strip), Delay);
    let mut buttons = Buttons::new(
        Input::new(p.P0_11, Pull::Up),
        Input::new(p.P0_12, Pull::Up),
        Input::new(p.P0_24, Pull::Up),
        Input::new(p.P0_25, Pull::Up),
    );
    let mut nav = Navigator::new(storage);

    let effects = nav.boot(now_ms());
    play(&mut outputs, &effects).await;

    info!("Entering control loop");
    let mut settle = Delay;
    loop {
        for event in buttons.poll(&mut settle) {
            let effects = nav.handle(event, now_ms());
            play(&mut outputs, &effects).await;
        }

        let effects = nav.tick(now_ms());
        play(&mut outputs, &effects).await;

        Timer::after_millis(LOOP_TICK_MS).await;
    }
}
