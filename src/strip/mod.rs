//! Uniform-colour LED strip transmitter
//!
//! Sends one RGB triplet to every LED of a WS2812 chain and latches it.
//! Each pixel goes out as green, red, blue; each byte MSB first. Interrupts
//! stay disabled from the first bit until the latch delay has elapsed, so a
//! frame is never split by an interrupt long enough to latch early.

use embedded_hal::delay::DelayNs;

mod emitter;

pub use emitter::{BitEmitter, BusyWaitEmitter, CycleDelay, CycleTimings, ns_to_cycles};

use crate::OutputDriver;
use crate::color::Rgb;
use crate::config::{LED_COUNT, PulseTimings};

/// Transmitter for a chain of `N` LEDs showing one colour
pub struct LedStrip<E, D, const N: usize = LED_COUNT> {
    emitter: E,
    latch: D,
    reset_us: u32,
}

impl<E, D, const N: usize> LedStrip<E, D, N>
where
    E: BitEmitter,
    D: DelayNs,
{
    /// Number of LEDs in the chain
    pub const LEN: usize = N;

    /// Create a strip transmitter.
    ///
    /// `latch` provides the inter-frame hold; it only has to be at least as
    /// long as requested.
    pub const fn new(emitter: E, latch: D, timings: &PulseTimings) -> Self {
        Self {
            emitter,
            latch,
            reset_us: timings.reset_us(),
        }
    }

    /// Set every LED to `color` and wait until the frame has latched.
    pub fn apply_uniform_colour(&mut self, color: Rgb) {
        critical_section::with(|_| {
            for _ in 0..N {
                self.send_pixel(color);
            }
            self.latch.delay_us(self.reset_us);
        });
    }

    /// Release the emitter and the latch delay.
    pub fn release(self) -> (E, D) {
        (self.emitter, self.latch)
    }

    #[inline(always)]
    fn send_pixel(&mut self, color: Rgb) {
        self.send_byte(color.g);
        self.send_byte(color.r);
        self.send_byte(color.b);
    }

    #[inline(always)]
    fn send_byte(&mut self, byte: u8) {
        for bit in (0..8).rev() {
            self.emitter.emit_bit(byte & (1 << bit) != 0);
        }
    }
}

impl<E, D, const N: usize> OutputDriver for LedStrip<E, D, N>
where
    E: BitEmitter,
    D: DelayNs,
{
    fn write_uniform(&mut self, color: Rgb) {
        self.apply_uniform_colour(color);
    }
}
