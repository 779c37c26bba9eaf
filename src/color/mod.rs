mod mapping;

pub use mapping::{BRIGHTNESS_GAMMA, brightness_curve, hue_brightness_to_rgb, hue_from_step};
use smart_leds::{RGB8, hsv::Hsv as HSV};

pub type Rgb = RGB8;
pub type Hsv = HSV;

/// All channels off
pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
