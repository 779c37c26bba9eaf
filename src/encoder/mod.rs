//! Rotary encoder with push button, decoded from a pin-change interrupt.
//!
//! The interrupt side owns a [`RotaryInput`] (pins plus decoder state). The
//! main loop only sees the shared [`BoundedCounter`] and [`ClickMailbox`],
//! which are meant to live in `static`s:
//!
//! ```ignore
//! static COUNTER: BoundedCounter = BoundedCounter::new();
//! static CLICKS: ClickMailbox = click_mailbox();
//!
//! #[interrupt]
//! fn PCINT2() {
//!     critical_section::with(|cs| {
//!         if let Some(input) = INPUT.borrow_ref_mut(cs).as_mut() {
//!             input.on_encoder_edge();
//!             input.on_button_edge(Instant::now());
//!         }
//!     });
//! }
//! ```

use embassy_time::Instant;
use embedded_hal::digital::InputPin;

mod button;
mod quadrature;

pub use button::{ButtonState, ClickClassifier, ClickMailbox, click_mailbox};
pub use quadrature::{QuadratureDecoder, TRANSITIONS};

use crate::config::{CYCLES_PER_DETENT, ClickThresholds};
use crate::counter::BoundedCounter;

/// Interrupt-side state of one encoder: lines A and B, the button line, and
/// the two independent decoders.
///
/// All lines are active low with pull-ups.
pub struct RotaryInput<'a, A, B, S, const STEPS: i16 = CYCLES_PER_DETENT> {
    line_a: A,
    line_b: B,
    switch: S,
    decoder: QuadratureDecoder,
    classifier: ClickClassifier,
    counter: &'a BoundedCounter<STEPS>,
    clicks: &'a ClickMailbox,
}

impl<'a, A, B, S, const STEPS: i16> RotaryInput<'a, A, B, S, STEPS>
where
    A: InputPin,
    B: InputPin,
    S: InputPin,
{
    /// Take ownership of the lines and seed the decoder from their levels.
    pub fn new(
        mut line_a: A,
        mut line_b: B,
        switch: S,
        thresholds: ClickThresholds,
        counter: &'a BoundedCounter<STEPS>,
        clicks: &'a ClickMailbox,
    ) -> Self {
        let decoder = match (line_a.is_high(), line_b.is_high()) {
            (Ok(a), Ok(b)) => QuadratureDecoder::seeded(a, b),
            _ => QuadratureDecoder::new(),
        };
        Self {
            line_a,
            line_b,
            switch,
            decoder,
            classifier: ClickClassifier::new(thresholds),
            counter,
            clicks,
        }
    }

    /// Sample lines A and B and move the counter by the decoded step.
    ///
    /// A failed pin read skips the sample.
    pub fn on_encoder_edge(&mut self) {
        let (Ok(a), Ok(b)) = (self.line_a.is_high(), self.line_b.is_high()) else {
            return;
        };
        let increment = self.decoder.update(a, b);
        if increment != 0 {
            self.counter.apply_increment(increment);
        }
    }

    /// Sample the button line and post a click on release.
    pub fn on_button_edge(&mut self, now: Instant) {
        let Ok(pressed) = self.switch.is_low() else {
            return;
        };
        self.classifier.update(pressed, now, self.clicks);
    }

    /// Run both handlers in interrupt order: encoder first, then button.
    pub fn on_interrupt(&mut self, now: Instant) {
        self.on_encoder_edge();
        self.on_button_edge(now);
    }

    /// Release the pins.
    pub fn release(self) -> (A, B, S) {
        (self.line_a, self.line_b, self.switch)
    }
}
