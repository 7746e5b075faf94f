//! Passcode entry engine.
//!
//! Accumulates button symbols up to [`PASS_LENGTH`] and compares them with
//! the reference sequence. The passcode is a fixed gesture, not a secret:
//! nothing is hashed or persisted.

use crate::config::{PASSCODE, PASSCODE_TIMEOUT_MS, PASS_LENGTH};

/// Value held by a slot that has not been entered yet.
const EMPTY_SLOT: u8 = u8::MAX;

/// Outcome of feeding one symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EntryResult {
    /// The symbol was stored (false when the attempt was already full).
    pub accepted: bool,
    /// The attempt now holds `PASS_LENGTH` symbols.
    pub full: bool,
}

/// One passcode attempt in progress.
#[derive(Clone, Debug)]
pub struct PasscodeEntry {
    reference: [u8; PASS_LENGTH],
    symbols: [u8; PASS_LENGTH],
    entered: usize,
    last_input_ms: u64,
}

impl PasscodeEntry {
    /// Attempt checked against the configured [`PASSCODE`].
    pub const fn new() -> Self {
        Self::with_reference(PASSCODE)
    }

    /// Attempt checked against an explicit reference sequence.
    pub const fn with_reference(reference: [u8; PASS_LENGTH]) -> Self {
        Self {
            reference,
            symbols: [EMPTY_SLOT; PASS_LENGTH],
            entered: 0,
            last_input_ms: 0,
        }
    }

    /// Append `symbol` at the cursor. A full attempt rejects further input.
    pub fn on_symbol(&mut self, symbol: u8, now_ms: u64) -> EntryResult {
        if self.is_full() {
            return EntryResult {
                accepted: false,
                full: true,
            };
        }

        self.symbols[self.entered] = symbol;
        self.entered += 1;
        self.last_input_ms = now_ms;

        EntryResult {
            accepted: true,
            full: self.is_full(),
        }
    }

    /// Element-wise comparison with the reference sequence.
    ///
    /// Only a full attempt can match; stale slots never count.
    pub fn is_match(&self) -> bool {
        self.is_full() && self.symbols == self.reference
    }

    /// Clear the cursor and every slot.
    pub fn reset(&mut self) {
        self.symbols = [EMPTY_SLOT; PASS_LENGTH];
        self.entered = 0;
    }

    /// Number of symbols entered so far, in `0..=PASS_LENGTH`.
    pub fn entered_count(&self) -> usize {
        self.entered
    }

    pub fn is_full(&self) -> bool {
        self.entered == PASS_LENGTH
    }

    /// Symbols entered so far.
    pub fn entered(&self) -> &[u8] {
        &self.symbols[..self.entered]
    }

    /// A partial attempt left untouched for [`PASSCODE_TIMEOUT_MS`] or longer.
    pub fn is_expired(&self, now_ms: u64) -> bool {
        self.entered > 0 && now_ms.saturating_sub(self.last_input_ms) >= PASSCODE_TIMEOUT_MS
    }
}

impl Default for PasscodeEntry {
    fn default() -> Self {
        Self::new()
    }
}
