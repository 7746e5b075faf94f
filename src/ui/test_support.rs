//! Host-side fakes shared by the unit tests.
//!
//! `MockDisplay` from embedded-graphics is capped at 64×64 and panics on
//! overdraw, so screens are drawn into a plain RGB565 framebuffer instead.

use crate::config::{DISPLAY_HEIGHT, DISPLAY_WIDTH, LED_COUNT};
use crate::feedback::leds::LedStrip;
use core::convert::Infallible;
use embedded_graphics::pixelcolor::{Rgb565, Rgb888};
use embedded_graphics::prelude::*;

/// Framebuffer display that allows overdraw and counts drawn pixels.
pub struct Framebuffer {
    pixels: Vec<Rgb565>,
    width: u32,
    height: u32,
    pub writes: usize,
}

impl Framebuffer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            pixels: vec![Rgb565::BLACK; (width * height) as usize],
            width,
            height,
            writes: 0,
        }
    }

    /// A framebuffer with the panel dimensions.
    pub fn panel() -> Self {
        Self::new(DISPLAY_WIDTH, DISPLAY_HEIGHT)
    }

    pub fn pixel(&self, x: u32, y: u32) -> Rgb565 {
        self.pixels[(y * self.width + x) as usize]
    }

    /// Count pixels of `color` inside the given row band.
    pub fn count_in_rows(&self, color: Rgb565, y0: u32, y1: u32) -> usize {
        (y0..y1)
            .flat_map(|y| (0..self.width).map(move |x| (x, y)))
            .filter(|&(x, y)| self.pixel(x, y) == color)
            .count()
    }
}

impl DrawTarget for Framebuffer {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(coord, color) in pixels {
            if coord.x >= 0
                && coord.y >= 0
                && (coord.x as u32) < self.width
                && (coord.y as u32) < self.height
            {
                let idx = (coord.y as u32 * self.width + coord.x as u32) as usize;
                self.pixels[idx] = color;
                self.writes += 1;
            }
        }
        Ok(())
    }
}

impl OriginDimensions for Framebuffer {
    fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

/// Delay that records every wait instead of sleeping.
#[derive(Default)]
pub struct RecordingDelay {
    pub waits_ns: Vec<u64>,
}

impl RecordingDelay {
    pub fn total_ms(&self) -> u64 {
        self.waits_ns.iter().sum::<u64>() / 1_000_000
    }
}

impl embedded_hal::delay::DelayNs for RecordingDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.waits_ns.push(ns as u64);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.waits_ns.push(ms as u64 * 1_000_000);
    }
}

impl embedded_hal_async::delay::DelayNs for RecordingDelay {
    async fn delay_ns(&mut self, ns: u32) {
        self.waits_ns.push(ns as u64);
    }

    async fn delay_ms(&mut self, ms: u32) {
        self.waits_ns.push(ms as u64 * 1_000_000);
    }
}

/// LED strip that keeps every committed frame.
#[derive(Default)]
pub struct RecordingStrip {
    pub frames: Vec<([Rgb888; LED_COUNT], u8)>,
}

impl RecordingStrip {
    pub fn last(&self) -> Option<&[Rgb888; LED_COUNT]> {
        self.frames.last().map(|(pixels, _)| pixels)
    }
}

impl LedStrip for RecordingStrip {
    type Error = Infallible;

    async fn write(
        &mut self,
        pixels: &[Rgb888; LED_COUNT],
        brightness: u8,
    ) -> Result<(), Self::Error> {
        self.frames.push((*pixels, brightness));
        Ok(())
    }
}

/// LED strip whose every commit fails, as a dead data line would.
#[derive(Default)]
pub struct BrokenStrip {
    pub attempts: usize,
}

impl LedStrip for BrokenStrip {
    type Error = ();

    async fn write(&mut self, _pixels: &[Rgb888; LED_COUNT], _brightness: u8) -> Result<(), ()> {
        self.attempts += 1;
        Err(())
    }
}
