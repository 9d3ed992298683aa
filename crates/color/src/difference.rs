use deltae::*;
use lab::Lab;

use crate::Rgb;

/// CIE L*a*b* coordinates `(l, a, b)` of an sRGB color, D65 white point.
pub fn rgb_to_lab(rgb: Rgb) -> (f32, f32, f32) {
    let lab = Lab::from_rgb(&[rgb.red(), rgb.green(), rgb.blue()]);
    (lab.l, lab.a, lab.b)
}

/// CIEDE2000 color difference. Around 1.0 is the smallest step most people
/// can see; black against white is 100.
pub fn delta_e(reference: Rgb, sample: Rgb) -> f32 {
    let lab1 = lab_value(reference);
    let lab2 = lab_value(sample);
    *DeltaE::new(&lab1, &lab2, DE2000).value()
}

fn lab_value(rgb: Rgb) -> LabValue {
    let (l, a, b) = rgb_to_lab(rgb);
    LabValue { l, a, b }
}
