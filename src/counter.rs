//! Bounded detent counter shared with the encoder interrupt.
//!
//! The counter keeps raw quadrature steps. Limits and value are stored
//! pre-multiplied by `STEPS` so that one mechanical detent moves the
//! public value by one. All fields live behind one critical-section mutex
//! and are always updated together.

use core::cell::Cell;

use critical_section::Mutex;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::config::CYCLES_PER_DETENT;

/// Error returned by [`BoundedCounter::set_range`] when `min >= max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidRange {
    pub min: i16,
    pub max: i16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CounterState {
    value: i16,
    min: i16,
    max: i16,
    wrap: bool,
}

/// Interrupt-synchronized counter with a `[min, max]` range and a wrap or
/// clamp policy at the limits.
///
/// `STEPS` is the number of raw decoder increments per logical step.
pub struct BoundedCounter<const STEPS: i16 = CYCLES_PER_DETENT> {
    state: Mutex<Cell<CounterState>>,
}

impl<const STEPS: i16> BoundedCounter<STEPS> {
    /// Lowest accepted logical limit. Scaling it by `STEPS` cannot overflow.
    pub const MIN_LIMIT: i16 = i16::MIN / STEPS + 1;

    /// Highest accepted logical limit. Scaling it by `STEPS` cannot overflow.
    pub const MAX_LIMIT: i16 = i16::MAX / STEPS - 1;

    /// Create a counter at zero spanning the whole safe range, clamping.
    pub const fn new() -> Self {
        Self {
            state: Mutex::new(Cell::new(CounterState {
                value: 0,
                min: Self::MIN_LIMIT * STEPS,
                max: Self::MAX_LIMIT * STEPS,
                wrap: false,
            })),
        }
    }

    /// Set value, limits and wrap policy in one atomic update.
    ///
    /// Limits outside `[MIN_LIMIT, MAX_LIMIT]` and a value outside the
    /// resulting range are clamped. Fails without touching the counter if
    /// `min >= max`, before or after clamping the limits.
    pub fn set_range(&self, value: i16, min: i16, max: i16, wrap: bool) -> Result<(), InvalidRange> {
        if min >= max {
            #[cfg(feature = "esp32-log")]
            println!("[BoundedCounter.set_range] rejected range {}..={}", min, max);
            return Err(InvalidRange { min, max });
        }
        let min = min.clamp(Self::MIN_LIMIT, Self::MAX_LIMIT);
        let max = max.clamp(Self::MIN_LIMIT, Self::MAX_LIMIT);
        // A range lying entirely outside the safe span collapses to a point
        if min >= max {
            #[cfg(feature = "esp32-log")]
            println!("[BoundedCounter.set_range] range collapsed to {}..={}", min, max);
            return Err(InvalidRange { min, max });
        }
        let value = value.clamp(min, max);

        let next = CounterState {
            value: value * STEPS,
            min: min * STEPS,
            max: max * STEPS,
            wrap,
        };
        critical_section::with(|cs| self.state.borrow(cs).set(next));
        Ok(())
    }

    /// Current logical value (raw steps divided by `STEPS`).
    pub fn value(&self) -> i16 {
        critical_section::with(|cs| self.state.borrow(cs).get().value / STEPS)
    }

    /// Current logical `(min, max)` limits.
    pub fn range(&self) -> (i16, i16) {
        let state = critical_section::with(|cs| self.state.borrow(cs).get());
        (state.min / STEPS, state.max / STEPS)
    }

    /// Whether the counter wraps at its limits.
    pub fn wraps(&self) -> bool {
        critical_section::with(|cs| self.state.borrow(cs).get().wrap)
    }

    /// Apply one raw decoder increment.
    ///
    /// Only the direction of `increment` counts: any positive value moves
    /// one raw step up, any negative value one step down. Called from the
    /// encoder interrupt. Moving past a limit either jumps to the opposite
    /// limit or stays put, and the increment is dropped.
    pub fn apply_increment(&self, increment: i8) {
        critical_section::with(|cs| {
            let cell = self.state.borrow(cs);
            let mut state = cell.get();
            state.value = step_within(state, increment);
            cell.set(state);
        });
    }
}

impl<const STEPS: i16> Default for BoundedCounter<STEPS> {
    fn default() -> Self {
        Self::new()
    }
}

fn step_within(state: CounterState, increment: i8) -> i16 {
    let increment = increment.signum();
    if increment > 0 && state.value >= state.max {
        return if state.wrap { state.min } else { state.max };
    }
    if increment < 0 && state.value <= state.min {
        return if state.wrap { state.max } else { state.min };
    }
    state.value + i16::from(increment)
}
