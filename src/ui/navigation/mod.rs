//! Navigation state machine.
//!
//! Owns the application state, the passcode attempt, the menu selection and
//! the content cursor. Button meaning depends on the state:
//!
//! | State    | Up / Down              | Select        | Back             |
//! |----------|------------------------|---------------|------------------|
//! | Booting  | ignored                | ignored       | ignored          |
//! | Locked   | passcode symbol 0 / 1  | symbol 2      | symbol 3         |
//! | Menu     | move highlight (wraps) | open entry    | ignored          |
//! | Content  | previous / next page   | ignored       | back to the menu |
//!
//! Handlers never touch hardware. They mutate state and return the side
//! effects in the order they must be played: haptic acknowledgement first,
//! then the redraw, then the ambient colour.


use super::display::Scene;
use super::input_logic::{page_next, page_prev, select_next, select_prev};
use super::slide::SlideDirection;
use super::{AppState, Button, ButtonEvent, EventKind};
use crate::catalog::{self, ContentBody, ITEM_COUNT};
use crate::config::{BOOT_SPLASH_MS, CONTENT_AMBIENT_DIM};
use crate::feedback::leds::scale;
use crate::feedback::{FeedbackProfile, COLOR_LOCKED};
use crate::passcode::PasscodeEntry;
use crate::storage::StorageStatus;
use embedded_graphics::pixelcolor::Rgb888;
use heapless::Vec;

/// Longest effect list a single event can produce.
pub const MAX_EFFECTS: usize = 8;

/// Ordered side effects of one event.
pub type Effects = Vec<Effect, MAX_EFFECTS>;

/// A side effect requested by the state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Play a named haptic/LED profile.
    Feedback(FeedbackProfile),
    /// Redraw (part of) the screen.
    Render(Scene),
    /// Animate between two photo pages of `item`.
    Slide {
        item: u8,
        from: u8,
        to: u8,
        direction: SlideDirection,
    },
    /// New ambient LED colour.
    Ambient(Rgb888),
}

/// Position inside a content entry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ContentCursor {
    pub item: u8,
    pub page: u8,
    pub max_pages: u8,
    /// Page shown before the last page turn; picks the slide direction.
    pub last_page: u8,
}

/// The navigation session.
pub struct Navigator {
    state: AppState,
    attempt: PasscodeEntry,
    selection: u8,
    cursor: ContentCursor,
    storage: StorageStatus,
    booted_at_ms: Option<u64>,
}

fn push(effects: &mut Effects, effect: Effect) {
    if effects.push(effect).is_err() {
        warn!("Effect list full, dropping effect");
    }
}

fn accent(item: u8) -> Rgb888 {
    catalog::item(item as usize).accent
}

fn dimmed(item: u8) -> Rgb888 {
    scale(accent(item), CONTENT_AMBIENT_DIM)
}

impl Navigator {
    /// Fresh session: `Booting`, empty attempt, first menu entry.
    pub fn new(storage: StorageStatus) -> Self {
        Self::with_attempt(storage, PasscodeEntry::new())
    }

    /// Session checking attempts against a given reference sequence.
    pub fn with_attempt(storage: StorageStatus, attempt: PasscodeEntry) -> Self {
        Self {
            state: AppState::Booting,
            attempt,
            selection: 0,
            cursor: ContentCursor::default(),
            storage,
            booted_at_ms: None,
        }
    }

    pub fn state(&self) -> AppState {
        self.state
    }

    pub fn selection(&self) -> u8 {
        self.selection
    }

    pub fn cursor(&self) -> ContentCursor {
        self.cursor
    }

    pub fn entered_count(&self) -> usize {
        self.attempt.entered_count()
    }

    pub fn storage(&self) -> &StorageStatus {
        &self.storage
    }

    fn set_state(&mut self, next: AppState) {
        debug!("State {} -> {}", self.state, next);
        self.state = next;
    }

    /// Start the splash. The lock screen follows from [`Navigator::tick`]
    /// once `BOOT_SPLASH_MS` have passed.
    pub fn boot(&mut self, now_ms: u64) -> Effects {
        let mut effects = Effects::new();
        self.state = AppState::Booting;
        self.booted_at_ms = Some(now_ms);
        push(&mut effects, Effect::Render(Scene::Boot));
        push(&mut effects, Effect::Feedback(FeedbackProfile::Boot));
        effects
    }

    /// Time-driven transitions; call once per loop iteration.
    pub fn tick(&mut self, now_ms: u64) -> Effects {
        let mut effects = Effects::new();
        match self.state {
            AppState::Booting => {
                let Some(booted_at) = self.booted_at_ms else {
                    return effects;
                };
                if now_ms.saturating_sub(booted_at) >= BOOT_SPLASH_MS as u64 {
                    self.attempt.reset();
                    self.set_state(AppState::Locked);
                    push(&mut effects, Effect::Render(Scene::Lock { entered: 0 }));
                    push(&mut effects, Effect::Ambient(COLOR_LOCKED));
                }
            }
            AppState::Locked => {
                if self.attempt.is_expired(now_ms) {
                    info!("Passcode attempt timed out");
                    self.attempt.reset();
                    push(
                        &mut effects,
                        Effect::Render(Scene::PasscodeProgress { entered: 0 }),
                    );
                }
            }
            AppState::Unlocking | AppState::Menu | AppState::Content => {}
        }
        effects
    }

    /// React to one debounced button event.
    pub fn handle(&mut self, event: ButtonEvent, now_ms: u64) -> Effects {
        let mut effects = Effects::new();
        if event.kind != EventKind::Pressed {
            return effects;
        }
        match self.state {
            AppState::Booting | AppState::Unlocking => {}
            AppState::Locked => self.on_locked(event.button, now_ms, &mut effects),
            AppState::Menu => self.on_menu(event.button, &mut effects),
            AppState::Content => self.on_content(event.button, &mut effects),
        }
        effects
    }

    fn on_locked(&mut self, button: Button, now_ms: u64, effects: &mut Effects) {
        let result = self.attempt.on_symbol(button.symbol(), now_ms);
        if !result.accepted {
            return;
        }
        push(effects, Effect::Feedback(FeedbackProfile::ButtonPress));
        push(
            effects,
            Effect::Render(Scene::PasscodeProgress {
                entered: self.attempt.entered_count() as u8,
            }),
        );
        if !result.full {
            push(effects, Effect::Ambient(COLOR_LOCKED));
            return;
        }

        if self.attempt.is_match() {
            self.attempt.reset();
            self.set_state(AppState::Unlocking);
            push(effects, Effect::Feedback(FeedbackProfile::Success));
            self.selection = 0;
            self.set_state(AppState::Menu);
            info!("Unlocked");
            push(
                effects,
                Effect::Render(Scene::Menu {
                    selected: self.selection,
                }),
            );
            push(effects, Effect::Feedback(FeedbackProfile::Unlock));
        } else {
            warn!("Wrong passcode");
            self.attempt.reset();
            push(effects, Effect::Feedback(FeedbackProfile::Error));
            push(effects, Effect::Render(Scene::PasscodeProgress { entered: 0 }));
            push(effects, Effect::Ambient(COLOR_LOCKED));
        }
    }

    fn on_menu(&mut self, button: Button, effects: &mut Effects) {
        match button {
            Button::Up | Button::Down => {
                let previous = self.selection;
                let next = if button == Button::Up {
                    select_prev(previous as usize, ITEM_COUNT)
                } else {
                    select_next(previous as usize, ITEM_COUNT)
                };
                self.selection = next as u8;
                debug!("Menu selection {} -> {}", previous, self.selection);
                push(effects, Effect::Feedback(FeedbackProfile::MenuNav));
                push(
                    effects,
                    Effect::Render(Scene::MenuHighlight {
                        previous,
                        selected: self.selection,
                    }),
                );
                push(effects, Effect::Ambient(accent(self.selection)));
            }
            Button::Select => {
                let item = self.selection;
                self.cursor = ContentCursor {
                    item,
                    page: 0,
                    max_pages: catalog::item(item as usize).page_count(),
                    last_page: 0,
                };
                self.set_state(AppState::Content);
                push(effects, Effect::Feedback(FeedbackProfile::ButtonPress));
                push(effects, Effect::Render(self.content_scene()));
                push(effects, Effect::Ambient(dimmed(item)));
            }
            Button::Back => {}
        }
    }

    fn on_content(&mut self, button: Button, effects: &mut Effects) {
        match button {
            Button::Up | Button::Down => {
                let current = self.cursor.page;
                let target = if button == Button::Up {
                    page_prev(current)
                } else {
                    page_next(current, self.cursor.max_pages)
                };
                // Out of range: nothing changes, nothing is played.
                let Some(page) = target else {
                    return;
                };
                self.cursor.last_page = current;
                self.cursor.page = page;
                debug!("Page {} -> {}", current, page);

                push(effects, Effect::Feedback(FeedbackProfile::PageTurn));
                let item = self.cursor.item;
                let redraw = match catalog::item(item as usize).body {
                    ContentBody::ImagePages(_) => Effect::Slide {
                        item,
                        from: current,
                        to: page,
                        direction: SlideDirection::between(current, page),
                    },
                    ContentBody::TextPages(_) | ContentBody::About => {
                        Effect::Render(self.content_scene())
                    }
                };
                push(effects, redraw);
                push(effects, Effect::Ambient(dimmed(item)));
            }
            Button::Back => {
                self.set_state(AppState::Menu);
                push(effects, Effect::Feedback(FeedbackProfile::ButtonPress));
                push(
                    effects,
                    Effect::Render(Scene::Menu {
                        selected: self.selection,
                    }),
                );
                push(effects, Effect::Ambient(accent(self.selection)));
            }
            Button::Select => {}
        }
    }

    fn content_scene(&self) -> Scene {
        Scene::Content {
            item: self.cursor.item,
            page: self.cursor.page,
            storage: self.storage,
        }
    }
}
