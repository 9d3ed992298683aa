use color::ColorModel;

use crate::{calculator, mixer};
use crate::{AdjustmentSet, MixingConfig, MixingPrediction, MixingResult};

/// Entry point for recipe calculations with a given [`MixingConfig`].
///
/// Holds no state besides the config, so one instance can be shared freely
/// between threads.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PaintMixer {
    config: MixingConfig,
}

impl PaintMixer {
    pub fn new(config: MixingConfig) -> Self {
        PaintMixer { config }
    }

    pub fn config(&self) -> &MixingConfig {
        &self.config
    }

    /// Pigments to add to `base` to move it toward `target`. See the crate
    /// docs for how decreases are handled.
    pub fn calculate_mixing_ratio(&self, base: &ColorModel, target: &ColorModel) -> MixingResult {
        calculator::mixing_ratio(base, target)
    }

    /// Color obtained by adding `adjustments` to `base`.
    pub fn calculate_mixing(&self, base: &ColorModel, adjustments: &AdjustmentSet) -> ColorModel {
        mixer::apply(base, adjustments, self.config.gray_saturation_factor())
    }

    /// What following the recipe for `base` → `target` actually produces.
    ///
    /// Only matches `target` exactly when no channel needed a substitute and
    /// nothing hit a limit.
    pub fn calculate_reverse_mixing_color(&self, base: &ColorModel, target: &ColorModel) -> ColorModel {
        let result = self.calculate_mixing_ratio(base, target);
        self.calculate_mixing(base, &AdjustmentSet::from(&result))
    }

    pub fn predict(&self, base: &ColorModel, target: &ColorModel) -> MixingPrediction {
        let result = self.calculate_mixing_ratio(base, target);
        let predicted = self.calculate_mixing(base, &AdjustmentSet::from(&result));
        MixingPrediction::new(result, predicted, target)
    }
}

pub fn calculate_mixing_ratio(base: &ColorModel, target: &ColorModel) -> MixingResult {
    PaintMixer::default().calculate_mixing_ratio(base, target)
}

pub fn calculate_mixing(base: &ColorModel, adjustments: &AdjustmentSet) -> ColorModel {
    PaintMixer::default().calculate_mixing(base, adjustments)
}

pub fn calculate_reverse_mixing_color(base: &ColorModel, target: &ColorModel) -> ColorModel {
    PaintMixer::default().calculate_reverse_mixing_color(base, target)
}

#[cfg(test)]
mod test {
    use color::{ColorModel, Rgb};

    use super::{calculate_reverse_mixing_color, PaintMixer};
    use crate::{AdjustmentSet, MixingConfig, Pigment};

    #[test]
    fn reverse_hits_target_when_only_adding() {
        let base = ColorModel::from_cmyk(10.0, 10.0, 10.0, 10.0);
        let target = ColorModel::from_cmyk(30.0, 40.0, 50.0, 60.0);
        let predicted = calculate_reverse_mixing_color(&base, &target);
        assert_eq!(predicted.cmyk(), target.cmyk());
        assert_eq!(predicted.rgb(), target.rgb());
    }

    #[test]
    fn reverse_with_substitution_is_approximate() {
        let red = ColorModel::from_cmyk(0.0, 100.0, 100.0, 0.0);
        let blue = ColorModel::from_cmyk(100.0, 100.0, 0.0, 0.0);
        let predicted = calculate_reverse_mixing_color(&red, &blue);
        // yellow can't be taken out, so everything saturates to black
        assert_eq!(predicted.rgb(), Rgb::from_u8(0, 0, 0));
        assert_ne!(predicted.rgb(), blue.rgb());
    }

    #[test]
    fn seeding_adjustments_caps_recipe_amounts() {
        let mixer = PaintMixer::default();
        let red = ColorModel::from_cmyk(0.0, 100.0, 100.0, 0.0);
        let blue = ColorModel::from_cmyk(100.0, 100.0, 0.0, 0.0);
        let result = mixer.calculate_mixing_ratio(&red, &blue);
        assert_eq!(result.amount_of(Pigment::Cyan), 200.0);
        let adjustments = AdjustmentSet::from(&result);
        assert_eq!(adjustments.cyan(), 100.0);
        assert_eq!(adjustments.magenta(), 100.0);
        assert_eq!(adjustments.white(), 0.0);
    }

    #[test]
    fn prediction_scores_distance() {
        let mixer = PaintMixer::default();
        let base = ColorModel::from_cmyk(10.0, 10.0, 10.0, 10.0);
        let target = ColorModel::from_cmyk(30.0, 40.0, 50.0, 60.0);
        let prediction = mixer.predict(&base, &target);
        assert_eq!(prediction.distance, 0.0);
        assert!(prediction.delta_e.abs() < 1e-4);
        assert_eq!(prediction.confidence, 1.0);

        let white = ColorModel::from_rgb(255, 255, 255);
        let black = ColorModel::from_rgb(0, 0, 0);
        let prediction = mixer.predict(&black, &white);
        assert_eq!(prediction.result.amount_of(Pigment::White), 100.0);
        assert_eq!(prediction.predicted.rgb(), white.rgb());
        assert_eq!(prediction.confidence, 1.0);
    }

    #[test]
    fn prediction_reports_perceptual_difference() {
        let mixer = PaintMixer::default();
        let red = ColorModel::from_cmyk(0.0, 100.0, 100.0, 0.0);
        let blue = ColorModel::from_cmyk(100.0, 100.0, 0.0, 0.0);
        let prediction = mixer.predict(&red, &blue);
        // the recipe overshoots to black
        assert_eq!(prediction.predicted.rgb(), Rgb::from_u8(0, 0, 0));
        assert!(prediction.distance > 0.0);
        assert!(prediction.delta_e > 1.0);
        assert_eq!(
            prediction.delta_e,
            prediction.predicted.rgb().delta_e(&blue.rgb())
        );
    }

    #[test]
    fn custom_factor_changes_gray_mixing() {
        let base = ColorModel::from_cmyk(50.0, 50.0, 50.0, 20.0);
        let both = AdjustmentSet::new(0.0, 0.0, 0.0, 10.0, 10.0);
        let gentle = PaintMixer::new(MixingConfig::new(0.1).unwrap());
        let harsh = PaintMixer::new(MixingConfig::new(1.0).unwrap());
        assert!((gentle.calculate_mixing(&base, &both).c() - 49.0).abs() < 1e-4);
        assert!((harsh.calculate_mixing(&base, &both).c() - 40.0).abs() < 1e-4);
    }
}
