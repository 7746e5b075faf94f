//! Directional slide between two full-screen photos.
//!
//! At step `i` a strip `i * (width / steps)` pixels wide, anchored on the
//! edge the new photo enters from, shows the incoming frame; the rest of the
//! panel still shows the outgoing one. [`Slide::finish`] blits the whole
//! incoming frame so integer rounding can never leave a seam.

use crate::catalog::ImageAsset;
use crate::config::{DISPLAY_HEIGHT, DISPLAY_WIDTH, SLIDE_STEPS};
use embedded_graphics::image::Image;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

/// Which edge the incoming page enters from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SlideDirection {
    /// Next page: enters from the right.
    Forward,
    /// Previous page: enters from the left.
    Backward,
}

impl SlideDirection {
    /// Forward iff the new page index is past the old one.
    pub const fn between(old_page: u8, new_page: u8) -> Self {
        if new_page > old_page {
            SlideDirection::Forward
        } else {
            SlideDirection::Backward
        }
    }
}

/// One running slide transition.
pub struct Slide<'a> {
    incoming: &'a ImageAsset,
    direction: SlideDirection,
    steps: u32,
}

impl<'a> Slide<'a> {
    pub fn new(incoming: &'a ImageAsset, direction: SlideDirection) -> Self {
        Self {
            incoming,
            direction,
            steps: SLIDE_STEPS,
        }
    }

    pub fn steps(&self) -> u32 {
        self.steps
    }

    /// Width of the revealed strip after `step` steps.
    pub fn strip_width(&self, step: u32) -> u32 {
        (step * (DISPLAY_WIDTH / self.steps)).min(DISPLAY_WIDTH)
    }

    /// Reveal the incoming strip for `step` (1-based).
    pub fn draw_step<D>(&self, display: &mut D, step: u32) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let w = self.strip_width(step);
        if w == 0 {
            return Ok(());
        }
        let (strip_x, image_x) = match self.direction {
            SlideDirection::Forward => {
                let x = (DISPLAY_WIDTH - w) as i32;
                (x, x)
            }
            SlideDirection::Backward => (0, w as i32 - DISPLAY_WIDTH as i32),
        };
        let strip = Rectangle::new(Point::new(strip_x, 0), Size::new(w, DISPLAY_HEIGHT));
        let raw = self.incoming.raw();
        Image::new(&raw, Point::new(image_x, 0)).draw(&mut display.clipped(&strip))
    }

    /// Blit the complete incoming frame.
    pub fn finish<D>(&self, display: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let raw = self.incoming.raw();
        Image::new(&raw, Point::zero()).draw(display)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{ContentBody, CATALOG};
    use crate::ui::test_support::Framebuffer;
    use embedded_graphics::pixelcolor::raw::RawU16;

    fn photos() -> &'static [ImageAsset] {
        match CATALOG[1].body {
            ContentBody::ImagePages(images) => images,
            _ => panic!("Memories must be photo pages"),
        }
    }

    fn source_pixel(image: &ImageAsset, x: u32, y: u32) -> Rgb565 {
        let i = ((y * image.width + x) * 2) as usize;
        Rgb565::from(RawU16::new(u16::from_be_bytes([
            image.data[i],
            image.data[i + 1],
        ])))
    }

    fn prefilled() -> Framebuffer {
        let mut fb = Framebuffer::panel();
        fb.clear(Rgb565::RED).unwrap();
        fb
    }

    #[test]
    fn direction_follows_page_order() {
        assert_eq!(SlideDirection::between(0, 1), SlideDirection::Forward);
        assert_eq!(SlideDirection::between(2, 1), SlideDirection::Backward);
        assert_eq!(SlideDirection::between(1, 1), SlideDirection::Backward);
    }

    #[test]
    fn strip_grows_by_one_slice_per_step() {
        let slide = Slide::new(&photos()[0], SlideDirection::Forward);
        let slice = DISPLAY_WIDTH / SLIDE_STEPS;
        assert_eq!(slide.strip_width(0), 0);
        assert_eq!(slide.strip_width(1), slice);
        assert_eq!(slide.strip_width(SLIDE_STEPS), DISPLAY_WIDTH);
    }

    #[test]
    fn forward_reveals_from_the_right_edge() {
        let image = &photos()[1];
        let slide = Slide::new(image, SlideDirection::Forward);
        let mut fb = prefilled();

        slide.draw_step(&mut fb, 1).unwrap();

        let w = slide.strip_width(1);
        // Left edge of the incoming frame sits at the strip start.
        assert_eq!(fb.pixel(DISPLAY_WIDTH - w, 100), source_pixel(image, 0, 100));
        assert_eq!(fb.pixel(DISPLAY_WIDTH - 1, 100), source_pixel(image, w - 1, 100));
        // Outgoing content untouched outside the strip.
        assert_eq!(fb.pixel(DISPLAY_WIDTH - w - 1, 100), Rgb565::RED);
        assert_eq!(fb.pixel(0, 100), Rgb565::RED);
    }

    #[test]
    fn backward_reveals_from_the_left_edge() {
        let image = &photos()[0];
        let slide = Slide::new(image, SlideDirection::Backward);
        let mut fb = prefilled();

        slide.draw_step(&mut fb, 2).unwrap();

        let w = slide.strip_width(2);
        // Right edge of the incoming frame sits at the strip end.
        assert_eq!(fb.pixel(w - 1, 50), source_pixel(image, DISPLAY_WIDTH - 1, 50));
        assert_eq!(fb.pixel(0, 50), source_pixel(image, DISPLAY_WIDTH - w, 50));
        assert_eq!(fb.pixel(w, 50), Rgb565::RED);
    }

    #[test]
    fn finish_leaves_exactly_the_incoming_frame() {
        let image = &photos()[2];
        let slide = Slide::new(image, SlideDirection::Forward);
        let mut fb = prefilled();

        for step in 1..=slide.steps() / 2 {
            slide.draw_step(&mut fb, step).unwrap();
        }
        slide.finish(&mut fb).unwrap();

        for (x, y) in [(0, 0), (119, 120), (239, 239), (17, 203)] {
            assert_eq!(fb.pixel(x, y), source_pixel(image, x, y));
        }
        assert_eq!(fb.count_in_rows(Rgb565::RED, 0, DISPLAY_HEIGHT), 0);
    }
}
