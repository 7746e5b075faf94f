//! Static content catalog: the four menu entries and their pages.
//!
//! Each entry is tagged with how its pages are rendered. Text pages carry a
//! hard-coded line layout, photo pages carry raw RGB565 (big-endian) frames
//! and slide between each other, and the About page is built at render time
//! from the boot storage status.

use crate::config::{DISPLAY_HEIGHT, DISPLAY_WIDTH};
use embedded_graphics::image::ImageRawBE;
use embedded_graphics::pixelcolor::{Rgb565, Rgb888};

/// One line of a text page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Line {
    /// Larger accent-coloured line.
    Heading(&'static str),
    /// Regular paragraph line.
    Body(&'static str),
    /// Right-aligned closing line.
    Signature(&'static str),
    /// Paragraph gap.
    Blank,
}

/// A fixed page of text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TextPage {
    pub lines: &'static [Line],
}

/// An opaque full-screen RGB565 frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageAsset {
    pub width: u32,
    pub height: u32,
    pub data: &'static [u8],
}

impl ImageAsset {
    /// embedded-graphics view of the frame.
    pub fn raw(&self) -> ImageRawBE<'static, Rgb565> {
        ImageRawBE::new(self.data, self.width)
    }
}

/// How an entry's pages are rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContentBody {
    /// Title bar + fixed text layout per page.
    TextPages(&'static [TextPage]),
    /// Full-screen photos, no title bar, slide transitions.
    ImagePages(&'static [ImageAsset]),
    /// Device information, single page.
    About,
}

/// A menu entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuItem {
    pub title: &'static str,
    /// Accent colour used for the menu highlight, title bar and ambient LEDs.
    pub accent: Rgb888,
    pub body: ContentBody,
}

impl MenuItem {
    /// Number of pages, always at least 1.
    pub const fn page_count(&self) -> u8 {
        match self.body {
            ContentBody::TextPages(pages) => pages.len() as u8,
            ContentBody::ImagePages(images) => images.len() as u8,
            ContentBody::About => 1,
        }
    }

    /// Whether the page area is drawn under a title bar.
    pub const fn has_title_bar(&self) -> bool {
        !matches!(self.body, ContentBody::ImagePages(_))
    }
}

/// Number of menu entries.
pub const ITEM_COUNT: usize = 4;

/// The menu, in display order.
pub static CATALOG: [MenuItem; ITEM_COUNT] = [
    MenuItem {
        title: "Letter",
        accent: Rgb888::new(0xE8, 0x4A, 0x7A),
        body: ContentBody::TextPages(&LETTER),
    },
    MenuItem {
        title: "Memories",
        accent: Rgb888::new(0x4A, 0x9A, 0xE8),
        body: ContentBody::ImagePages(&MEMORIES),
    },
    MenuItem {
        title: "Quotes",
        accent: Rgb888::new(0xF0, 0xA8, 0x30),
        body: ContentBody::TextPages(&QUOTES),
    },
    MenuItem {
        title: "About",
        accent: Rgb888::new(0x60, 0xC0, 0x80),
        body: ContentBody::About,
    },
];

/// Look up an entry; indices come from the wrapped menu selection.
pub fn item(index: usize) -> &'static MenuItem {
    &CATALOG[index % ITEM_COUNT]
}

const fn photo(data: &'static [u8]) -> ImageAsset {
    ImageAsset {
        width: DISPLAY_WIDTH,
        height: DISPLAY_HEIGHT,
        data,
    }
}

static MEMORIES: [ImageAsset; 3] = [
    photo(include_bytes!("../assets/memory_1.rgb565")),
    photo(include_bytes!("../assets/memory_2.rgb565")),
    photo(include_bytes!("../assets/memory_3.rgb565")),
];

static LETTER: [TextPage; 3] = [
    TextPage {
        lines: &[
            Line::Heading("Hey you,"),
            Line::Blank,
            Line::Body("If you are reading this,"),
            Line::Body("you remembered the code."),
            Line::Body("Of course you did."),
            Line::Blank,
            Line::Body("I wanted to give you"),
            Line::Body("something you could hold,"),
            Line::Body("something that would"),
            Line::Body("buzz back at you."),
        ],
    },
    TextPage {
        lines: &[
            Line::Body("Every page in here is a"),
            Line::Body("small piece of us: the"),
            Line::Body("trips, the late talks,"),
            Line::Body("the terrible puns."),
            Line::Blank,
            Line::Body("Press DOWN whenever you"),
            Line::Body("need a reminder of how"),
            Line::Body("far we have come."),
        ],
    },
    TextPage {
        lines: &[
            Line::Body("Thank you for every"),
            Line::Body("ordinary day that turned"),
            Line::Body("out to be a good one."),
            Line::Blank,
            Line::Body("Here is to many more."),
            Line::Blank,
            Line::Blank,
            Line::Signature("- always yours"),
        ],
    },
];

static QUOTES: [TextPage; 4] = [
    TextPage {
        lines: &[
            Line::Heading("On love"),
            Line::Blank,
            Line::Body("\"Whatever our souls are"),
            Line::Body("made of, his and mine"),
            Line::Body("are the same.\""),
            Line::Blank,
            Line::Signature("- Emily Bronte"),
        ],
    },
    TextPage {
        lines: &[
            Line::Heading("On time"),
            Line::Blank,
            Line::Body("\"The best thing to hold"),
            Line::Body("onto in life is each"),
            Line::Body("other.\""),
            Line::Blank,
            Line::Signature("- Audrey Hepburn"),
        ],
    },
    TextPage {
        lines: &[
            Line::Heading("On home"),
            Line::Blank,
            Line::Body("\"Home is not a place,"),
            Line::Body("it is a feeling.\""),
            Line::Blank,
            Line::Signature("- Cecelia Ahern"),
        ],
    },
    TextPage {
        lines: &[
            Line::Heading("On us"),
            Line::Blank,
            Line::Body("\"I would rather spend"),
            Line::Body("one lifetime with you"),
            Line::Body("than face all the ages"),
            Line::Body("of this world alone.\""),
            Line::Blank,
            Line::Signature("- J.R.R. Tolkien"),
        ],
    },
];
