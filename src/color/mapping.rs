use smart_leds::hsv::hsv2rgb;

use crate::color::{Hsv, Rgb};

/// Exponent of the perceptual brightness curve
pub const BRIGHTNESS_GAMMA: f32 = 2.2;

/// Fully saturated colour of `hue` (0-255 around the wheel) at `brightness`.
pub fn hue_brightness_to_rgb(hue: u8, brightness: u8) -> Rgb {
    hsv2rgb(Hsv {
        hue,
        sat: 255,
        val: brightness,
    })
}

/// Map a hue step in `0..steps` onto the 0-255 hue circle.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn hue_from_step(step: i16, steps: i16) -> u8 {
    if steps <= 0 {
        return 0;
    }
    let step = i32::from(step).rem_euclid(i32::from(steps));
    (step * 256 / i32::from(steps)) as u8
}

/// Map a brightness step in `0..=max` to an output level along a gamma curve.
///
/// `0` is off and `max` is always full output.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn brightness_curve(step: i16, max: i16) -> u8 {
    if max <= 0 || step <= 0 {
        return 0;
    }
    if step >= max {
        return 255;
    }
    let ratio = f32::from(step) / f32::from(max);
    let level = libm::roundf(255.0 * libm::powf(ratio, BRIGHTNESS_GAMMA));
    level.clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hue_from_step_wraps() {
        assert_eq!(hue_from_step(0, 48), 0);
        assert_eq!(hue_from_step(24, 48), 128);
        assert_eq!(hue_from_step(47, 48), 250);
        assert_eq!(hue_from_step(48, 48), 0);
        assert_eq!(hue_from_step(-1, 48), 250);
        assert_eq!(hue_from_step(5, 0), 0);
    }

    #[test]
    fn test_brightness_curve_is_monotonic() {
        let mut previous = 0;
        for step in 0..=16 {
            let level = brightness_curve(step, 16);
            assert!(level >= previous);
            previous = level;
        }
        assert_eq!(brightness_curve(0, 16), 0);
        assert_eq!(brightness_curve(16, 16), 255);
        assert_eq!(brightness_curve(8, 16), 55);
    }
}
