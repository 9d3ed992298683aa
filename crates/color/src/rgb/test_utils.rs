use approx::{assert_abs_diff_eq, AbsDiffEq};
use crate::Rgb;

/// Channels are integers, so "close" means within `tolerance` steps per channel.
pub fn assert_rgb_within(left: Rgb, right: Rgb, tolerance: u8) {
    assert_abs_diff_eq!(
        AssertableRgb(left),
        AssertableRgb(right),
        epsilon = tolerance
    )
}

#[derive(PartialEq, Debug)]
pub(crate) struct AssertableRgb(pub Rgb);

impl AbsDiffEq for AssertableRgb {
    type Epsilon = u8;

    fn default_epsilon() -> u8 {
        0
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: u8) -> bool {
        self.0.red().abs_diff(other.0.red()) <= epsilon &&
        self.0.green().abs_diff(other.0.green()) <= epsilon &&
        self.0.blue().abs_diff(other.0.blue()) <= epsilon
    }
}
