//! WS2812 chain on PWM0.
//!
//! Each frame is encoded into PWM duty words by
//! [`keepsake::feedback::ws2812::encode`] and played once through EasyDMA,
//! followed by the reset gap.

use embassy_nrf::gpio::Pin;
use embassy_nrf::peripherals;
use embassy_nrf::pwm::{
    Config, Error as PwmError, Prescaler, SequenceConfig, SequenceLoad, SequencePwm,
    SingleSequenceMode, SingleSequencer,
};
use embassy_nrf::Peripheral;
use embassy_time::Timer;
use embedded_graphics::pixelcolor::Rgb888;
use keepsake::config::LED_COUNT;
use keepsake::feedback::leds::LedStrip;
use keepsake::feedback::ws2812::{encode, FRAME_WORDS, MAX_DUTY, RESET_PERIODS};

/// Upper bound on one frame plus reset (97 words + 799 periods ≈ 1.1 ms).
const LATCH_US: u64 = 1500;

pub struct Ws2812 {
    pwm: SequencePwm<'static, peripherals::PWM0>,
    words: [u16; FRAME_WORDS],
}

impl Ws2812 {
    pub fn new(
        pwm: peripherals::PWM0,
        data: impl Peripheral<P = impl Pin> + 'static,
    ) -> Result<Self, PwmError> {
        let mut config = Config::default();
        config.sequence_load = SequenceLoad::Common;
        config.prescaler = Prescaler::Div1;
        config.max_duty = MAX_DUTY;
        let pwm = SequencePwm::new_1ch(pwm, data, config)?;
        Ok(Self {
            pwm,
            words: [0u16; FRAME_WORDS],
        })
    }
}

impl LedStrip for Ws2812 {
    type Error = PwmError;

    async fn write(
        &mut self,
        pixels: &[Rgb888; LED_COUNT],
        brightness: u8,
    ) -> Result<(), Self::Error> {
        encode(pixels, brightness, &mut self.words);

        let mut seq_config = SequenceConfig::default();
        seq_config.end_delay = RESET_PERIODS;

        let sequencer = SingleSequencer::new(&mut self.pwm, &self.words, seq_config);
        sequencer.start(SingleSequenceMode::Times(1))?;
        Timer::after_micros(LATCH_US).await;
        sequencer.stop();
        Ok(())
    }
}
