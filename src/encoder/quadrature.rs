//! Lookup-table quadrature decoding
//!
//! The previous and current 2-bit line samples form a 4-bit index into a
//! table of valid Gray-code steps. Bounces that skip a state land on a zero
//! entry, so no separate debouncing is needed.

/// Increment for every `(previous << 2) | current` sample pair.
///
/// A sample is `(B << 1) | A`.
pub const TRANSITIONS: [i8; 16] = [0, -1, 1, 0, 1, 0, 0, -1, -1, 0, 0, 1, 0, 1, -1, 0];

const HISTORY_MASK: u8 = 0x0f;

/// Rolling two-sample history of the A/B lines
#[derive(Debug, Clone, Copy, Default)]
pub struct QuadratureDecoder {
    history: u8,
}

impl QuadratureDecoder {
    pub const fn new() -> Self {
        Self { history: 0 }
    }

    /// Start from known line levels so the first edge decodes correctly.
    pub const fn seeded(a: bool, b: bool) -> Self {
        Self {
            history: sample(a, b),
        }
    }

    /// Shift in the current line levels and return the step they complete.
    pub fn update(&mut self, a: bool, b: bool) -> i8 {
        self.history = ((self.history << 2) | sample(a, b)) & HISTORY_MASK;
        TRANSITIONS[usize::from(self.history)]
    }

    /// The current 4-bit history
    pub const fn history(&self) -> u8 {
        self.history
    }
}

#[allow(clippy::cast_lossless)]
const fn sample(a: bool, b: bool) -> u8 {
    ((b as u8) << 1) | a as u8
}
