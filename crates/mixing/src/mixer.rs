use color::{Cmyk, ColorModel};
use log::trace;

use crate::AdjustmentSet;

/// White and black added together partly cancel into neutral gray. The
/// overlap does no lightening or darkening, it only dulls the color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrayInteraction {
    pub gray_effect: f32,
    pub net_white: f32,
    pub net_black: f32,
    pub saturation_reduction: f32,
}

impl GrayInteraction {
    pub fn of(adjustments: &AdjustmentSet, saturation_factor: f32) -> Self {
        let gray_effect = adjustments.white().min(adjustments.black());
        GrayInteraction {
            gray_effect,
            net_white: adjustments.white() - gray_effect,
            net_black: adjustments.black() - gray_effect,
            saturation_reduction: gray_effect * saturation_factor,
        }
    }
}

/// Adds `adjustments` to `base` and returns the resulting color, with the
/// computed CMYK kept as the authoritative half.
pub(crate) fn apply(
    base: &ColorModel,
    adjustments: &AdjustmentSet,
    saturation_factor: f32,
) -> ColorModel {
    let gray = GrayInteraction::of(adjustments, saturation_factor);
    let start = base.cmyk().rounded();
    let add = |v: f32, amount: f32| (v + amount).max(0.0).min(100.0);

    let mut c = add(start.cyan(), adjustments.cyan());
    let mut m = add(start.magenta(), adjustments.magenta());
    let mut y = add(start.yellow(), adjustments.yellow());
    let mut k = add(start.black(), gray.net_black);

    // white lightens by eating into the key channel
    if gray.net_white > 0.0 {
        k = (k - gray.net_white).max(0.0);
    }
    if gray.gray_effect > 0.0 {
        c = (c - gray.saturation_reduction).max(0.0);
        m = (m - gray.saturation_reduction).max(0.0);
        y = (y - gray.saturation_reduction).max(0.0);
    }

    trace!("{:?} on {} with {:?}", adjustments, base.to_hex(), gray);
    ColorModel::from(Cmyk::new(c, m, y, k))
}
