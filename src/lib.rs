#![no_std]

pub mod color;
pub mod config;
pub mod controller;
pub mod counter;
pub mod encoder;
pub mod mailbox;
pub mod strip;

pub use config::{ClickThresholds, PulseTimings, WS2812_TIMINGS};
pub use controller::{AdjustMode, ControllerConfig, LightController, LightState};
pub use counter::{BoundedCounter, InvalidRange};
pub use encoder::{ButtonState, ClickClassifier, ClickMailbox, QuadratureDecoder, RotaryInput, click_mailbox};
pub use mailbox::Mailbox;
pub use strip::{BitEmitter, BusyWaitEmitter, CycleDelay, CycleTimings, LedStrip};

pub use color::{Hsv, Rgb};
pub use embassy_time::{Duration, Instant};

/// Abstract LED output trait
///
/// Implement this trait to support different hardware platforms.
/// The light controller is generic over this trait.
pub trait OutputDriver {
    /// Show one colour on every LED
    fn write_uniform(&mut self, color: Rgb);
}
