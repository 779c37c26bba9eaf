//! Short / long click detection
//!
//! Press and release edges are timestamped by the caller. The hold time is
//! classified once, on release, and the result is posted to a [`ClickMailbox`].

use embassy_time::{Duration, Instant};

use crate::config::ClickThresholds;
use crate::mailbox::Mailbox;

/// Pending click classification
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonState {
    /// No click since the last read
    #[default]
    None,
    /// Released after more than the short threshold
    ShortClick,
    /// Released after more than the long threshold
    LongClick,
}

/// Mailbox carrying the latest click to the main loop
pub type ClickMailbox = Mailbox<ButtonState>;

/// Create an empty click mailbox, usable in a `static`.
pub const fn click_mailbox() -> ClickMailbox {
    Mailbox::new(ButtonState::None)
}

impl ClickMailbox {
    /// Read the latest click and reset the mailbox to [`ButtonState::None`].
    pub fn take_click_event(&self) -> ButtonState {
        self.take()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    Pressed(Instant),
}

/// Turns press/release edges into click classifications
#[derive(Debug, Clone, Copy)]
pub struct ClickClassifier {
    thresholds: ClickThresholds,
    phase: Phase,
}

impl ClickClassifier {
    /// Create a classifier with the line released.
    pub const fn new(thresholds: ClickThresholds) -> Self {
        Self {
            thresholds,
            phase: Phase::Idle,
        }
    }

    /// Whether the button is currently held
    pub const fn is_pressed(&self) -> bool {
        matches!(self.phase, Phase::Pressed(_))
    }

    /// Feed the current button level.
    ///
    /// Levels equal to the current phase are ignored, so this is safe to call
    /// on every edge of any line sharing the interrupt.
    pub fn update(&mut self, pressed: bool, now: Instant, mailbox: &ClickMailbox) {
        match (self.phase, pressed) {
            (Phase::Idle, true) => {
                self.phase = Phase::Pressed(now);
            }
            (Phase::Pressed(since), false) => {
                let held = now.saturating_duration_since(since);
                if let Some(click) = self.classify(held) {
                    mailbox.post(click);
                }
                self.phase = Phase::Idle;
            }
            _ => {}
        }
    }

    /// Classify a hold duration in a single step.
    ///
    /// Holds not longer than the short threshold are bounce and yield `None`.
    pub fn classify(&self, held: Duration) -> Option<ButtonState> {
        if held > self.thresholds.long {
            Some(ButtonState::LongClick)
        } else if held > self.thresholds.short {
            Some(ButtonState::ShortClick)
        } else {
            None
        }
    }
}

impl Default for ClickClassifier {
    fn default() -> Self {
        Self::new(ClickThresholds::default())
    }
}
