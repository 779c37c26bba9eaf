#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::convert::Infallible;
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, InputPin, OutputPin};
use myrtio_knob_light::{BitEmitter, CycleDelay, OutputDriver, Rgb};

/// Input line whose level is driven by the test
#[derive(Clone, Default)]
pub struct FakeLine {
    high: Rc<Cell<bool>>,
}

impl FakeLine {
    pub fn new(high: bool) -> Self {
        Self {
            high: Rc::new(Cell::new(high)),
        }
    }

    pub fn set(&self, high: bool) {
        self.high.set(high);
    }
}

impl ErrorType for FakeLine {
    type Error = Infallible;
}

impl InputPin for FakeLine {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.high.get())
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.high.get())
    }
}

/// Everything the transmitter side does, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    High,
    Low,
    Cycles(u32),
    Bit(bool),
    DelayNs(u32),
}

pub type EventLog = Rc<RefCell<Vec<Event>>>;

pub fn event_log() -> EventLog {
    Rc::new(RefCell::new(Vec::new()))
}

pub struct LoggedPin(pub EventLog);

impl ErrorType for LoggedPin {
    type Error = Infallible;
}

impl OutputPin for LoggedPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.0.borrow_mut().push(Event::Low);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.0.borrow_mut().push(Event::High);
        Ok(())
    }
}

pub struct LoggedCycles(pub EventLog);

impl CycleDelay for LoggedCycles {
    fn delay_cycles(&mut self, cycles: u32) {
        self.0.borrow_mut().push(Event::Cycles(cycles));
    }
}

pub struct LoggedEmitter(pub EventLog);

impl BitEmitter for LoggedEmitter {
    fn emit_bit(&mut self, bit: bool) {
        self.0.borrow_mut().push(Event::Bit(bit));
    }
}

pub struct LoggedDelay(pub EventLog);

impl DelayNs for LoggedDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.0.borrow_mut().push(Event::DelayNs(ns));
    }
}

/// Output driver remembering every frame
#[derive(Default)]
pub struct RecordingDriver {
    pub frames: Vec<Rgb>,
}

impl OutputDriver for RecordingDriver {
    fn write_uniform(&mut self, color: Rgb) {
        self.frames.push(color);
    }
}

/// Bits of the logged frame, in wire order
pub fn bits(log: &EventLog) -> Vec<bool> {
    log.borrow()
        .iter()
        .filter_map(|event| match event {
            Event::Bit(bit) => Some(*bit),
            _ => None,
        })
        .collect()
}

/// Reassemble MSB-first bytes
pub fn bytes(bits: &[bool]) -> Vec<u8> {
    bits.chunks(8)
        .map(|chunk| chunk.iter().fold(0u8, |acc, bit| (acc << 1) | u8::from(*bit)))
        .collect()
}

/// Next `(a, b)` line levels when turning forward.
///
/// Samples `(B << 1) | A` step 00 -> 10 -> 11 -> 01 -> 00.
pub fn forward(a: bool, b: bool) -> (bool, bool) {
    match (a, b) {
        (false, false) => (false, true),
        (false, true) => (true, true),
        (true, true) => (true, false),
        (true, false) => (false, false),
    }
}

/// Next `(a, b)` line levels when turning backward
pub fn backward(a: bool, b: bool) -> (bool, bool) {
    match (a, b) {
        (false, true) => (false, false),
        (true, true) => (false, true),
        (true, false) => (true, true),
        (false, false) => (true, false),
    }
}
