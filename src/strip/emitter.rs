//! Bit-level pulse generation
//!
//! [`BitEmitter`] is the only timing-critical seam of the transmitter.
//! [`BusyWaitEmitter`] implements it by toggling a GPIO and spinning for a
//! number of CPU cycles computed from the pulse timings and the core clock.
//! PWM, SPI or DMA back-ends can implement the trait instead.

use core::convert::Infallible;

use embedded_hal::digital::OutputPin;

use crate::config::{NS_PER_SEC, PIN_TOGGLE_OVERHEAD_CYCLES, PulseTimings};

/// Sends one bit of the one-wire LED protocol.
///
/// Implementations must keep each high/low phase within the datasheet
/// tolerance. Callers keep interrupts disabled for the whole frame.
pub trait BitEmitter {
    fn emit_bit(&mut self, bit: bool);
}

/// Cycle-exact busy wait, e.g. `cortex_m::asm::delay`.
pub trait CycleDelay {
    fn delay_cycles(&mut self, cycles: u32);
}

/// Pulse timings converted to busy-wait cycles for one core clock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleTimings {
    pub one_high: u32,
    pub one_low: u32,
    pub zero_high: u32,
    pub zero_low: u32,
}

impl CycleTimings {
    /// Convert pulse widths for a core running at `cpu_hz`.
    ///
    /// Each phase is shortened by the cycles spent toggling the pin.
    pub const fn from_timings(timings: &PulseTimings, cpu_hz: u32) -> Self {
        Self {
            one_high: phase_cycles(timings.t1h_ns, cpu_hz),
            one_low: phase_cycles(timings.t1l_ns, cpu_hz),
            zero_high: phase_cycles(timings.t0h_ns, cpu_hz),
            zero_low: phase_cycles(timings.t0l_ns, cpu_hz),
        }
    }
}

/// Whole CPU cycles that fit in `ns` at `cpu_hz`
#[allow(clippy::cast_possible_truncation, clippy::cast_lossless)]
pub const fn ns_to_cycles(ns: u32, cpu_hz: u32) -> u32 {
    (ns as u64 * cpu_hz as u64 / NS_PER_SEC) as u32
}

const fn phase_cycles(ns: u32, cpu_hz: u32) -> u32 {
    ns_to_cycles(ns, cpu_hz).saturating_sub(PIN_TOGGLE_OVERHEAD_CYCLES)
}

/// Bit-bangs the protocol on a GPIO with calibrated busy waits
pub struct BusyWaitEmitter<P, C> {
    pin: P,
    delay: C,
    cycles: CycleTimings,
}

impl<P, C> BusyWaitEmitter<P, C>
where
    P: OutputPin<Error = Infallible>,
    C: CycleDelay,
{
    /// Create an emitter and drive the data line low.
    pub fn new(mut pin: P, delay: C, timings: &PulseTimings, cpu_hz: u32) -> Self {
        let Ok(()) = pin.set_low();
        Self {
            pin,
            delay,
            cycles: CycleTimings::from_timings(timings, cpu_hz),
        }
    }

    pub const fn cycles(&self) -> CycleTimings {
        self.cycles
    }

    /// Release the pin and the delay.
    pub fn release(self) -> (P, C) {
        (self.pin, self.delay)
    }
}

impl<P, C> BitEmitter for BusyWaitEmitter<P, C>
where
    P: OutputPin<Error = Infallible>,
    C: CycleDelay,
{
    #[inline(always)]
    fn emit_bit(&mut self, bit: bool) {
        let (high, low) = if bit {
            (self.cycles.one_high, self.cycles.one_low)
        } else {
            (self.cycles.zero_high, self.cycles.zero_low)
        };
        let Ok(()) = self.pin.set_high();
        self.delay.delay_cycles(high);
        let Ok(()) = self.pin.set_low();
        self.delay.delay_cycles(low);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WS2812_TIMINGS;

    #[test]
    fn test_ns_to_cycles() {
        assert_eq!(ns_to_cycles(1000, 16_000_000), 16);
        assert_eq!(ns_to_cycles(400, 16_000_000), 6);
        assert_eq!(ns_to_cycles(0, 64_000_000), 0);
    }

    #[test]
    fn test_cycle_timings_at_16_mhz() {
        let cycles = CycleTimings::from_timings(&WS2812_TIMINGS, 16_000_000);
        assert_eq!(
            cycles,
            CycleTimings {
                one_high: 12,
                one_low: 7,
                zero_high: 4,
                zero_low: 12,
            }
        );
    }

    #[test]
    fn test_overhead_saturates() {
        let cycles = CycleTimings::from_timings(&WS2812_TIMINGS, 1_000_000);
        assert_eq!(cycles.zero_high, 0);
    }
}
