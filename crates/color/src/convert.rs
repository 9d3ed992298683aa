//! RGB ⇄ CMYK conversion.
//!
//! The two directions are not inverses of each other. K can trade off against
//! C, M and Y, so many CMYK values land on the same RGB value. Going
//! RGB → CMYK → RGB stays within two steps per channel, the other way around
//! can drift much further.

use log::warn;

use crate::{Cmyk, Rgb};

/// Anything at least this dark is pure black. Keeps `1 - k` away from zero.
const BLACK_THRESHOLD: f32 = 0.9999;

/// Converts an RGB triple (0 to 255) to CMYK percentages rounded to 0.1%.
///
/// Inputs are rounded and clamped first, NaN counts as 0. Never fails.
pub fn rgb_to_cmyk(r: f32, g: f32, b: f32) -> Cmyk {
    cmyk_from(Rgb::new(r, g, b))
}

/// Converts CMYK percentages (0 to 100) to RGB. Inputs are clamped first.
pub fn cmyk_to_rgb(c: f32, m: f32, y: f32, k: f32) -> Rgb {
    rgb_from(Cmyk::new(c, m, y, k))
}

pub(crate) fn cmyk_from(rgb: Rgb) -> Cmyk {
    let normalize = |v: u8| f32::from(v) / 255.0;
    let c = 1.0 - normalize(rgb.red());
    let m = 1.0 - normalize(rgb.green());
    let y = 1.0 - normalize(rgb.blue());

    let k = c.min(m).min(y);
    if k >= BLACK_THRESHOLD {
        return Cmyk::new(0.0, 0.0, 0.0, 100.0);
    }

    let scale = |v: f32| percent(((v - k) / (1.0 - k)).max(0.0).min(1.0));
    Cmyk::new(scale(c), scale(m), scale(y), percent(k))
}

pub(crate) fn rgb_from(cmyk: Cmyk) -> Rgb {
    let k = 1.0 - cmyk.black() / 100.0;
    let channel = |v: f32| 255.0 * (1.0 - v / 100.0) * k;
    Rgb::new(
        channel(cmyk.cyan()),
        channel(cmyk.magenta()),
        channel(cmyk.yellow()),
    )
}

/// Clamps `v` into `0.0..=max`. NaN has no nearest bound, so it becomes 0.
pub(crate) fn clamp(v: f32, max: f32) -> f32 {
    if v.is_nan() {
        warn!("NaN color component, using 0");
        0.0
    } else if v > max {
        max
    } else if v < 0.0 {
        0.0
    } else {
        v
    }
}

/// Fraction to percent, rounded to one decimal place.
fn percent(v: f32) -> f32 {
    (v * 1000.0).round() / 10.0
}
