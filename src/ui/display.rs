//! Screen drawing for the 240×240 RGB565 panel.
//!
//! Every routine is a pure function of its arguments: the caller passes a
//! [`Scene`] and the renderer retains nothing between calls. Partial scenes
//! (`PasscodeProgress`, `MenuHighlight`) only touch the pixels that changed.

use crate::catalog::{self, ContentBody, Line, MenuItem, TextPage};
use crate::config::{DISPLAY_WIDTH, PASS_LENGTH, TITLE_BAR_HEIGHT};
use crate::storage::StorageStatus;
use core::fmt::Write;
use embedded_graphics::image::Image;
use embedded_graphics::mono_font::ascii::{FONT_6X10, FONT_7X13, FONT_9X18_BOLD};
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, PrimitiveStyle, Rectangle, RoundedRectangle, Triangle};
use embedded_graphics::text::{Alignment, Baseline, Text, TextStyleBuilder};

const BACKGROUND: Rgb565 = Rgb565::BLACK;
const FOREGROUND: Rgb565 = Rgb565::WHITE;
const MUTED: Rgb565 = Rgb565::new(14, 28, 14);
/// Lock screen, boot heart and passcode dots.
pub const LOCK_ACCENT: Rgb565 = Rgb565::new(29, 18, 15);

const FIRMWARE_LINE: &str = concat!("Firmware v", env!("CARGO_PKG_VERSION"));

// Lock screen layout
const DOT_DIAMETER: u32 = 24;
const DOT_PITCH: i32 = 40;
/// Vertical centre of the passcode dot row.
pub const DOT_ROW_Y: i32 = 150;

// Menu layout
const MENU_TOP: i32 = 44;
const MENU_ROW_PITCH: i32 = 48;
const MENU_ROW_HEIGHT: u32 = 42;
const MENU_MARGIN: i32 = 12;

// Text page layout
const TEXT_MARGIN: i32 = 8;
const LINE_PITCH: i32 = 16;

/// What to put on the panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Scene {
    /// Power-on splash.
    Boot,
    /// Full lock screen with `entered` filled dots.
    Lock { entered: u8 },
    /// Dot row only.
    PasscodeProgress { entered: u8 },
    /// Full menu.
    Menu { selected: u8 },
    /// Only the rows whose highlight changed.
    MenuHighlight { previous: u8, selected: u8 },
    /// One page of a menu entry.
    Content {
        item: u8,
        page: u8,
        storage: StorageStatus,
    },
}

fn body_style(color: Rgb565) -> MonoTextStyle<'static, Rgb565> {
    MonoTextStyle::new(&FONT_7X13, color)
}

fn heading_style(color: Rgb565) -> MonoTextStyle<'static, Rgb565> {
    MonoTextStyle::new(&FONT_9X18_BOLD, color)
}

fn centered() -> embedded_graphics::text::TextStyle {
    TextStyleBuilder::new()
        .alignment(Alignment::Center)
        .baseline(Baseline::Middle)
        .build()
}

fn left_middle() -> embedded_graphics::text::TextStyle {
    TextStyleBuilder::new()
        .alignment(Alignment::Left)
        .baseline(Baseline::Middle)
        .build()
}

fn right_middle() -> embedded_graphics::text::TextStyle {
    TextStyleBuilder::new()
        .alignment(Alignment::Right)
        .baseline(Baseline::Middle)
        .build()
}

fn center_x() -> i32 {
    DISPLAY_WIDTH as i32 / 2
}

/// Draw a scene.
pub fn draw_scene<D>(display: &mut D, scene: &Scene) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    match *scene {
        Scene::Boot => draw_boot(display),
        Scene::Lock { entered } => draw_lock(display, entered),
        Scene::PasscodeProgress { entered } => draw_passcode_dots(display, entered),
        Scene::Menu { selected } => draw_menu(display, selected),
        Scene::MenuHighlight { previous, selected } => {
            draw_menu_row(display, previous, previous == selected)?;
            draw_menu_row(display, selected, true)
        }
        Scene::Content {
            item,
            page,
            storage,
        } => draw_content(display, catalog::item(item as usize), page, &storage),
    }
}

fn draw_heart<D>(display: &mut D, center: Point, size: u32, color: Rgb565) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let style = PrimitiveStyle::with_fill(color);
    let lobe = size / 2 + 2;
    let half = size as i32 / 2;
    Circle::new(center + Point::new(-half, -half), lobe)
        .into_styled(style)
        .draw(display)?;
    Circle::new(center + Point::new(half - lobe as i32, -half), lobe)
        .into_styled(style)
        .draw(display)?;
    Triangle::new(
        center + Point::new(-half, 0),
        center + Point::new(half, 0),
        center + Point::new(0, half + 4),
    )
    .into_styled(style)
    .draw(display)?;
    Ok(())
}

/// Power-on splash: heart and name.
pub fn draw_boot<D>(display: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    display.clear(BACKGROUND)?;
    draw_heart(display, Point::new(center_x(), 96), 64, LOCK_ACCENT)?;
    Text::with_text_style(
        "keepsake",
        Point::new(center_x(), 168),
        heading_style(FOREGROUND),
        centered(),
    )
    .draw(display)?;
    Text::with_text_style(
        "made with love",
        Point::new(center_x(), 192),
        body_style(MUTED),
        centered(),
    )
    .draw(display)?;
    Ok(())
}

/// Full lock screen.
pub fn draw_lock<D>(display: &mut D, entered: u8) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    display.clear(BACKGROUND)?;
    draw_heart(display, Point::new(center_x(), 52), 32, LOCK_ACCENT)?;
    Text::with_text_style(
        "Locked",
        Point::new(center_x(), 96),
        heading_style(FOREGROUND),
        centered(),
    )
    .draw(display)?;
    Text::with_text_style(
        "Enter the code",
        Point::new(center_x(), 118),
        body_style(MUTED),
        centered(),
    )
    .draw(display)?;
    draw_passcode_dots(display, entered)?;
    Text::with_text_style(
        "any button is a symbol",
        Point::new(center_x(), 220),
        MonoTextStyle::new(&FONT_6X10, MUTED),
        centered(),
    )
    .draw(display)?;
    Ok(())
}

/// Centre of passcode dot `index`.
pub fn dot_center(index: usize) -> Point {
    let span = DOT_PITCH * (PASS_LENGTH as i32 - 1);
    Point::new(center_x() - span / 2 + DOT_PITCH * index as i32, DOT_ROW_Y)
}

/// Redraw the dot row only: filled for entered symbols, hollow otherwise.
pub fn draw_passcode_dots<D>(display: &mut D, entered: u8) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let band_top = DOT_ROW_Y - DOT_DIAMETER as i32 / 2 - 2;
    Rectangle::new(Point::new(0, band_top), Size::new(DISPLAY_WIDTH, DOT_DIAMETER + 4))
        .into_styled(PrimitiveStyle::with_fill(BACKGROUND))
        .draw(display)?;

    for i in 0..PASS_LENGTH {
        let style = if i < entered as usize {
            PrimitiveStyle::with_fill(LOCK_ACCENT)
        } else {
            PrimitiveStyle::with_stroke(LOCK_ACCENT, 2)
        };
        Circle::with_center(dot_center(i), DOT_DIAMETER)
            .into_styled(style)
            .draw(display)?;
    }
    Ok(())
}

/// Bounding box of menu row `index`.
pub fn menu_row_bounds(index: u8) -> Rectangle {
    Rectangle::new(
        Point::new(MENU_MARGIN, MENU_TOP + MENU_ROW_PITCH * index as i32),
        Size::new(DISPLAY_WIDTH - 2 * MENU_MARGIN as u32, MENU_ROW_HEIGHT),
    )
}

/// Full menu.
pub fn draw_menu<D>(display: &mut D, selected: u8) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    display.clear(BACKGROUND)?;
    Text::with_text_style(
        "Open me",
        Point::new(center_x(), 22),
        heading_style(FOREGROUND),
        centered(),
    )
    .draw(display)?;
    for index in 0..catalog::ITEM_COUNT as u8 {
        draw_menu_row(display, index, index == selected)?;
    }
    Ok(())
}

/// One menu row; the highlighted row is filled with the entry accent.
pub fn draw_menu_row<D>(display: &mut D, index: u8, highlighted: bool) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let item = catalog::item(index as usize);
    let accent = Rgb565::from(item.accent);
    let bounds = menu_row_bounds(index);
    let shape = RoundedRectangle::with_equal_corners(bounds, Size::new(8, 8));

    bounds
        .into_styled(PrimitiveStyle::with_fill(BACKGROUND))
        .draw(display)?;

    let text_color = if highlighted {
        shape
            .into_styled(PrimitiveStyle::with_fill(accent))
            .draw(display)?;
        BACKGROUND
    } else {
        shape
            .into_styled(PrimitiveStyle::with_stroke(accent, 2))
            .draw(display)?;
        FOREGROUND
    };

    let y = bounds.center().y;
    Text::with_text_style(
        item.title,
        Point::new(MENU_MARGIN + 14, y),
        heading_style(text_color),
        left_middle(),
    )
    .draw(display)?;
    Ok(())
}

/// Accent bar with the entry title and, for multi-page entries, `n/m`.
fn draw_title_bar<D>(display: &mut D, item: &MenuItem, page: u8) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    Rectangle::new(Point::zero(), Size::new(DISPLAY_WIDTH, TITLE_BAR_HEIGHT))
        .into_styled(PrimitiveStyle::with_fill(Rgb565::from(item.accent)))
        .draw(display)?;

    let y = TITLE_BAR_HEIGHT as i32 / 2;
    Text::with_text_style(
        item.title,
        Point::new(TEXT_MARGIN + 2, y),
        heading_style(BACKGROUND),
        left_middle(),
    )
    .draw(display)?;

    if item.page_count() > 1 {
        let mut indicator: heapless::String<8> = heapless::String::new();
        let _ = write!(indicator, "{}/{}", page + 1, item.page_count());
        Text::with_text_style(
            indicator.as_str(),
            Point::new(DISPLAY_WIDTH as i32 - TEXT_MARGIN - 2, y),
            body_style(BACKGROUND),
            right_middle(),
        )
        .draw(display)?;
    }
    Ok(())
}

/// One page of a menu entry.
pub fn draw_content<D>(
    display: &mut D,
    item: &MenuItem,
    page: u8,
    storage: &StorageStatus,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    match item.body {
        ContentBody::ImagePages(images) => {
            if let Some(image) = images.get(page as usize) {
                let raw = image.raw();
                Image::new(&raw, Point::zero()).draw(display)?;
            }
            Ok(())
        }
        ContentBody::TextPages(pages) => {
            display.clear(BACKGROUND)?;
            draw_title_bar(display, item, page)?;
            if let Some(text) = pages.get(page as usize) {
                draw_text_page(display, text, Rgb565::from(item.accent))?;
            }
            Ok(())
        }
        ContentBody::About => {
            display.clear(BACKGROUND)?;
            draw_title_bar(display, item, page)?;
            draw_about(display, storage, Rgb565::from(item.accent))
        }
    }
}

fn first_line_y() -> i32 {
    TITLE_BAR_HEIGHT as i32 + 18
}

fn draw_text_page<D>(display: &mut D, page: &TextPage, accent: Rgb565) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let mut y = first_line_y();
    for line in page.lines {
        match *line {
            Line::Heading(text) => {
                Text::with_text_style(
                    text,
                    Point::new(TEXT_MARGIN, y),
                    heading_style(accent),
                    left_middle(),
                )
                .draw(display)?;
            }
            Line::Body(text) => {
                Text::with_text_style(
                    text,
                    Point::new(TEXT_MARGIN, y),
                    body_style(FOREGROUND),
                    left_middle(),
                )
                .draw(display)?;
            }
            Line::Signature(text) => {
                Text::with_text_style(
                    text,
                    Point::new(DISPLAY_WIDTH as i32 - TEXT_MARGIN, y),
                    body_style(accent),
                    right_middle(),
                )
                .draw(display)?;
            }
            Line::Blank => {}
        }
        y += LINE_PITCH;
    }
    Ok(())
}

/// About screen storage line.
pub fn storage_line(storage: &StorageStatus) -> heapless::String<32> {
    let mut line = heapless::String::new();
    let _ = match (storage.detected, storage.capacity_mb) {
        (true, Some(mb)) => write!(line, "SD: {} MB ({})", mb, storage.media.label()),
        (true, None) => write!(line, "SD: {}, size unknown", storage.media.label()),
        (false, _) => write!(line, "SD: not detected"),
    };
    line
}

fn draw_about<D>(display: &mut D, storage: &StorageStatus, accent: Rgb565) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let mut y = first_line_y();
    Text::with_text_style(
        "keepsake",
        Point::new(TEXT_MARGIN, y),
        heading_style(accent),
        left_middle(),
    )
    .draw(display)?;
    y += 2 * LINE_PITCH;
    Text::with_text_style(
        FIRMWARE_LINE,
        Point::new(TEXT_MARGIN, y),
        body_style(FOREGROUND),
        left_middle(),
    )
    .draw(display)?;
    y += LINE_PITCH;
    let line = storage_line(storage);
    Text::with_text_style(
        line.as_str(),
        Point::new(TEXT_MARGIN, y),
        body_style(FOREGROUND),
        left_middle(),
    )
    .draw(display)?;
    y += 2 * LINE_PITCH;
    Text::with_text_style(
        "nRF52840 + ST7789",
        Point::new(TEXT_MARGIN, y),
        body_style(MUTED),
        left_middle(),
    )
    .draw(display)?;
    y += LINE_PITCH;
    Text::with_text_style(
        "Press BACK for the menu",
        Point::new(TEXT_MARGIN, y),
        body_style(MUTED),
        left_middle(),
    )
    .draw(display)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CATALOG;
    use crate::config::DISPLAY_HEIGHT;
    use crate::storage::MediaKind;
    use crate::ui::test_support::Framebuffer;

    fn render(scene: Scene) -> Framebuffer {
        let mut fb = Framebuffer::panel();
        draw_scene(&mut fb, &scene).unwrap();
        fb
    }

    fn is_filled(fb: &Framebuffer, p: Point) -> bool {
        fb.pixel(p.x as u32, p.y as u32) == LOCK_ACCENT
    }

    #[test]
    fn lock_screen_fills_one_dot_per_entered_symbol() {
        for entered in 0..=PASS_LENGTH as u8 {
            let fb = render(Scene::Lock { entered });
            for i in 0..PASS_LENGTH {
                assert_eq!(
                    is_filled(&fb, dot_center(i)),
                    i < entered as usize,
                    "entered={entered} dot={i}"
                );
            }
        }
    }

    #[test]
    fn passcode_progress_only_touches_the_dot_row() {
        let mut fb = Framebuffer::panel();
        fb.clear(Rgb565::RED).unwrap();

        draw_scene(&mut fb, &Scene::PasscodeProgress { entered: 2 }).unwrap();

        assert!(is_filled(&fb, dot_center(1)));
        assert!(!is_filled(&fb, dot_center(2)));
        assert_eq!(fb.pixel(5, 5), Rgb565::RED);
        assert_eq!(fb.pixel(5, DISPLAY_HEIGHT - 5), Rgb565::RED);
    }

    #[test]
    fn menu_fills_only_the_selected_row() {
        let fb = render(Scene::Menu { selected: 2 });
        for index in 0..catalog::ITEM_COUNT as u8 {
            let bounds = menu_row_bounds(index);
            // Inside the rounded corner, left of the title text.
            let probe = bounds.top_left + Point::new(6, bounds.size.height as i32 / 2);
            let accent = Rgb565::from(CATALOG[index as usize].accent);
            assert_eq!(fb.pixel(probe.x as u32, probe.y as u32) == accent, index == 2);
        }
    }

    #[test]
    fn menu_highlight_redraws_two_rows_only() {
        let mut fb = Framebuffer::panel();
        draw_scene(&mut fb, &Scene::Menu { selected: 0 }).unwrap();
        let untouched = menu_row_bounds(3).center();
        fb.clear(Rgb565::RED).unwrap();

        draw_scene(&mut fb, &Scene::MenuHighlight { previous: 0, selected: 1 }).unwrap();

        let row1 = menu_row_bounds(1);
        let probe = row1.top_left + Point::new(6, row1.size.height as i32 / 2);
        assert_eq!(fb.pixel(probe.x as u32, probe.y as u32), Rgb565::from(CATALOG[1].accent));
        let row0 = menu_row_bounds(0);
        let probe = row0.top_left + Point::new(6, row0.size.height as i32 / 2);
        assert_eq!(fb.pixel(probe.x as u32, probe.y as u32), BACKGROUND);
        assert_eq!(fb.pixel(untouched.x as u32, untouched.y as u32), Rgb565::RED);
        assert_eq!(fb.pixel(120, 10), Rgb565::RED);
    }

    #[test]
    fn text_pages_sit_under_an_accent_title_bar() {
        let fb = render(Scene::Content {
            item: 0,
            page: 1,
            storage: StorageStatus::absent(),
        });
        let accent = Rgb565::from(CATALOG[0].accent);
        assert_eq!(fb.pixel(2, 2), accent);
        assert_eq!(fb.pixel(DISPLAY_WIDTH - 2, TITLE_BAR_HEIGHT - 2), accent);
        assert_eq!(fb.pixel(2, TITLE_BAR_HEIGHT + 2), BACKGROUND);
        // Body text was drawn below the bar.
        assert!(fb.count_in_rows(FOREGROUND, TITLE_BAR_HEIGHT, DISPLAY_HEIGHT) > 0);
    }

    #[test]
    fn photo_pages_are_full_bleed() {
        let fb = render(Scene::Content {
            item: 1,
            page: 0,
            storage: StorageStatus::absent(),
        });
        let ContentBody::ImagePages(images) = CATALOG[1].body else {
            panic!("Memories must be photo pages");
        };
        let mut expected = Framebuffer::panel();
        Image::new(&images[0].raw(), Point::zero()).draw(&mut expected).unwrap();

        let accent = Rgb565::from(CATALOG[1].accent);
        for (x, y) in [(2, 2), (120, 10), (239, 35), (60, 200)] {
            assert_eq!(fb.pixel(x, y), expected.pixel(x, y));
        }
        assert_ne!(fb.count_in_rows(accent, 0, 2), DISPLAY_WIDTH as usize * 2);
    }

    #[test]
    fn storage_line_formats() {
        let card = StorageStatus {
            detected: true,
            capacity_mb: Some(7580),
            media: MediaKind::Sdhc,
        };
        assert_eq!(storage_line(&card).as_str(), "SD: 7580 MB (SDHC)");

        let no_csd = StorageStatus {
            detected: true,
            capacity_mb: None,
            media: MediaKind::Sd2,
        };
        assert_eq!(storage_line(&no_csd).as_str(), "SD: SD v2, size unknown");

        assert_eq!(storage_line(&StorageStatus::absent()).as_str(), "SD: not detected");
    }

    #[test]
    fn about_and_boot_draw_something() {
        let about = render(Scene::Content {
            item: 3,
            page: 0,
            storage: StorageStatus::absent(),
        });
        assert!(about.count_in_rows(FOREGROUND, TITLE_BAR_HEIGHT, DISPLAY_HEIGHT) > 0);

        let boot = render(Scene::Boot);
        assert!(boot.count_in_rows(LOCK_ACCENT, 60, 140) > 0);
    }
}
