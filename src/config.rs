//! Compile-time tunables.
//!
//! Pulse widths come from the WS2812 datasheets and are chosen to be
//! conservative rather than fast. Everything here can be overridden by
//! constructing the config structs directly.

use embassy_time::Duration;

/// Rows in the LED matrix
pub const LED_ROWS: usize = 8;

/// Columns in the LED matrix
pub const LED_COLS: usize = 4;

/// Total number of LEDs driven by the strip
pub const LED_COUNT: usize = LED_ROWS * LED_COLS;

/// Raw quadrature transitions per mechanical detent.
///
/// Set to 1 for encoders without detents.
pub const CYCLES_PER_DETENT: i16 = 4;

/// Nanoseconds per second
pub const NS_PER_SEC: u64 = 1_000_000_000;

/// Cycles spent setting or clearing the data pin around each delay
pub const PIN_TOGGLE_OVERHEAD_CYCLES: u32 = 2;

/// Pulse widths of the one-wire LED protocol, in nanoseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PulseTimings {
    /// High phase of a `1` bit
    pub t1h_ns: u32,
    /// Low phase of a `1` bit
    pub t1l_ns: u32,
    /// High phase of a `0` bit
    pub t0h_ns: u32,
    /// Low phase of a `0` bit
    pub t0l_ns: u32,
    /// Minimum low hold after a frame that makes the LEDs latch it
    pub reset_ns: u32,
}

impl PulseTimings {
    /// Latch hold rounded up to whole microseconds.
    ///
    /// Longer is harmless, shorter may not latch.
    pub const fn reset_us(&self) -> u32 {
        self.reset_ns / 1000 + 1
    }
}

impl Default for PulseTimings {
    fn default() -> Self {
        WS2812_TIMINGS
    }
}

/// Conservative WS2812 timings
pub const WS2812_TIMINGS: PulseTimings = PulseTimings {
    t1h_ns: 900,
    t1l_ns: 600,
    t0h_ns: 400,
    t0l_ns: 900,
    reset_ns: 6000,
};

/// Hold durations separating button clicks from bounce
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClickThresholds {
    /// A release after holding longer than this is a short click
    pub short: Duration,
    /// A release after holding longer than this is a long click
    pub long: Duration,
}

impl Default for ClickThresholds {
    fn default() -> Self {
        DEFAULT_CLICK_THRESHOLDS
    }
}

/// Default click thresholds (20 ms / 500 ms)
pub const DEFAULT_CLICK_THRESHOLDS: ClickThresholds = ClickThresholds {
    short: Duration::from_millis(20),
    long: Duration::from_millis(500),
};

/// Number of hue positions on one full turn of the colour wheel
pub const DEFAULT_HUE_STEPS: i16 = 48;

/// Number of brightness positions above zero
pub const DEFAULT_BRIGHTNESS_STEPS: i16 = 16;
