use serde::Serialize;

use crate::{Cmyk, Rgb};

/// Largest per-channel drift expected from RGB → CMYK → RGB.
pub const DEFAULT_ROUND_TRIP_TOLERANCE: f32 = 2.0;

/// How far one RGB value moves when sent through CMYK and back.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConversionAccuracy {
    pub original: Rgb,
    pub cmyk: Cmyk,
    pub reconverted: Rgb,
    pub errors: [u8; 3],
    pub max_error: u8,
    pub within_tolerance: bool,
    pub accuracy_percentage: f32,
}

pub fn conversion_accuracy(rgb: Rgb, tolerance: f32) -> ConversionAccuracy {
    let cmyk = rgb.to_cmyk();
    let reconverted = cmyk.to_rgb();
    let errors = [
        rgb.red().abs_diff(reconverted.red()),
        rgb.green().abs_diff(reconverted.green()),
        rgb.blue().abs_diff(reconverted.blue()),
    ];
    let max_error = errors.iter().copied().max().unwrap_or(0);

    ConversionAccuracy {
        original: rgb,
        cmyk,
        reconverted,
        errors,
        max_error,
        within_tolerance: f32::from(max_error) <= tolerance,
        accuracy_percentage: (100.0 - f32::from(max_error) / 255.0 * 100.0).max(0.0),
    }
}
