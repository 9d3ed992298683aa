use approx::{AbsDiffEq, assert_relative_eq, RelativeEq};
use crate::Cmyk;

pub fn assert_relative_eq_cmyk(left: Cmyk, right: Cmyk) {
    assert_relative_eq!(
        AssertableCmyk(left),
        AssertableCmyk(right),
    )
}

/// Conversions round to a tenth of a percent, so allow half of that.
pub fn assert_cmyk_near(left: Cmyk, right: Cmyk) {
    assert_relative_eq!(
        AssertableCmyk(left),
        AssertableCmyk(right),
        epsilon = 0.05
    )
}

#[derive(PartialEq, Debug)]
pub(crate) struct AssertableCmyk(pub Cmyk);

impl AbsDiffEq for AssertableCmyk {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        f32::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        f32::abs_diff_eq(&self.0.cyan(), &other.0.cyan(), epsilon) &&
        f32::abs_diff_eq(&self.0.magenta(), &other.0.magenta(), epsilon) &&
        f32::abs_diff_eq(&self.0.yellow(), &other.0.yellow(), epsilon) &&
        f32::abs_diff_eq(&self.0.black(), &other.0.black(), epsilon)
    }
}

impl RelativeEq for AssertableCmyk {
    fn default_max_relative() -> f32 {
        f32::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
        f32::relative_eq(&self.0.cyan(), &other.0.cyan(), epsilon, max_relative) &&
        f32::relative_eq(&self.0.magenta(), &other.0.magenta(), epsilon, max_relative) &&
        f32::relative_eq(&self.0.yellow(), &other.0.yellow(), epsilon, max_relative) &&
        f32::relative_eq(&self.0.black(), &other.0.black(), epsilon, max_relative)
    }
}
