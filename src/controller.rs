//! Foreground control loop
//!
//! Polls the encoder counter and click mailbox, keeps the hue / brightness /
//! power state, and writes a new frame whenever the visible colour changes.
//!
//! - Turning the knob adjusts the active quantity.
//! - A short click switches between hue and brightness and re-ranges the
//!   counter for the new quantity.
//! - A long click toggles power.

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::OutputDriver;
use crate::color::{BLACK, Rgb, brightness_curve, hue_brightness_to_rgb, hue_from_step};
use crate::config::{CYCLES_PER_DETENT, DEFAULT_BRIGHTNESS_STEPS, DEFAULT_HUE_STEPS};
use crate::counter::{BoundedCounter, InvalidRange};
use crate::encoder::{ButtonState, ClickMailbox};

/// Quantity currently bound to the knob
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AdjustMode {
    #[default]
    Hue,
    Brightness,
}

impl AdjustMode {
    /// The other mode
    pub const fn next(self) -> Self {
        match self {
            AdjustMode::Hue => AdjustMode::Brightness,
            AdjustMode::Brightness => AdjustMode::Hue,
        }
    }
}

/// Configuration for the light controller
#[derive(Debug, Clone, Copy)]
pub struct ControllerConfig {
    /// Hue positions on one turn of the colour wheel (wraps)
    pub hue_steps: i16,
    /// Brightness positions above zero (clamps)
    pub brightness_steps: i16,
    pub hue_step: i16,
    pub brightness_step: i16,
    pub mode: AdjustMode,
    pub powered: bool,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            hue_steps: DEFAULT_HUE_STEPS,
            brightness_steps: DEFAULT_BRIGHTNESS_STEPS,
            hue_step: 0,
            brightness_step: DEFAULT_BRIGHTNESS_STEPS,
            mode: AdjustMode::Hue,
            powered: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LightState {
    pub hue_step: i16,
    pub brightness_step: i16,
    pub mode: AdjustMode,
    pub powered: bool,
}

/// Main-loop side of the device
pub struct LightController<'a, O: OutputDriver, const STEPS: i16 = CYCLES_PER_DETENT> {
    output: O,
    counter: &'a BoundedCounter<STEPS>,
    clicks: &'a ClickMailbox,
    hue_steps: i16,
    brightness_steps: i16,
    state: LightState,
    last_written: Option<Rgb>,
}

impl<'a, O: OutputDriver, const STEPS: i16> LightController<'a, O, STEPS> {
    /// Create a controller and bind the counter to the initial mode.
    ///
    /// Fails if either quantity would have an empty range.
    pub fn new(
        output: O,
        counter: &'a BoundedCounter<STEPS>,
        clicks: &'a ClickMailbox,
        config: &ControllerConfig,
    ) -> Result<Self, InvalidRange> {
        let mut controller = Self {
            output,
            counter,
            clicks,
            hue_steps: config.hue_steps,
            brightness_steps: config.brightness_steps,
            state: LightState {
                hue_step: config.hue_step,
                brightness_step: config.brightness_step,
                mode: config.mode,
                powered: config.powered,
            },
            last_written: None,
        };
        controller.validate_ranges()?;
        controller.bind_counter()?;
        controller.sync_from_counter();
        Ok(controller)
    }

    /// Process pending input and refresh the LEDs if needed.
    ///
    /// Returns `true` if a frame was written.
    pub fn poll(&mut self) -> bool {
        match self.clicks.take_click_event() {
            ButtonState::ShortClick => {
                self.state.mode = self.state.mode.next();
                #[cfg(feature = "esp32-log")]
                println!("[LightController.poll] adjusting {:?}", self.state.mode);
                let bound = self.bind_counter();
                debug_assert!(bound.is_ok(), "ranges are validated in `new`");
                #[cfg(feature = "esp32-log")]
                if let Err(err) = bound {
                    println!("[LightController.poll] counter kept old range: {:?}", err);
                }
            }
            ButtonState::LongClick => {
                self.state.powered = !self.state.powered;
                #[cfg(feature = "esp32-log")]
                println!("[LightController.poll] power {}", self.state.powered);
            }
            ButtonState::None => {}
        }
        self.sync_from_counter();
        self.refresh()
    }

    /// Colour the LEDs should currently show
    pub fn color(&self) -> Rgb {
        if !self.state.powered {
            return BLACK;
        }
        hue_brightness_to_rgb(
            hue_from_step(self.state.hue_step, self.hue_steps),
            brightness_curve(self.state.brightness_step, self.brightness_steps),
        )
    }

    pub const fn state(&self) -> &LightState {
        &self.state
    }

    pub const fn output(&self) -> &O {
        &self.output
    }

    pub fn output_mut(&mut self) -> &mut O {
        &mut self.output
    }

    /// Range of the active quantity and whether it wraps
    const fn active_range(&self) -> (i16, i16, bool) {
        match self.state.mode {
            AdjustMode::Hue => (0, self.hue_steps - 1, true),
            AdjustMode::Brightness => (0, self.brightness_steps, false),
        }
    }

    const fn active_step(&self) -> i16 {
        match self.state.mode {
            AdjustMode::Hue => self.state.hue_step,
            AdjustMode::Brightness => self.state.brightness_step,
        }
    }

    fn validate_ranges(&self) -> Result<(), InvalidRange> {
        if self.hue_steps < 2 {
            return Err(InvalidRange {
                min: 0,
                max: self.hue_steps - 1,
            });
        }
        if self.brightness_steps < 1 {
            return Err(InvalidRange {
                min: 0,
                max: self.brightness_steps,
            });
        }
        Ok(())
    }

    fn bind_counter(&self) -> Result<(), InvalidRange> {
        let (min, max, wrap) = self.active_range();
        self.counter.set_range(self.active_step(), min, max, wrap)
    }

    fn sync_from_counter(&mut self) {
        let value = self.counter.value();
        match self.state.mode {
            AdjustMode::Hue => self.state.hue_step = value,
            AdjustMode::Brightness => self.state.brightness_step = value,
        }
    }

    fn refresh(&mut self) -> bool {
        let color = self.color();
        if self.last_written == Some(color) {
            return false;
        }
        self.output.write_uniform(color);
        self.last_written = Some(color);
        true
    }
}
