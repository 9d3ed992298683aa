use std::collections::BTreeMap;

use color::ColorModel;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::{MixingInstruction, MixingResult, Pigment, PigmentAmount};

/// For each CMYK channel: the pigment added when it has to rise, and the
/// pigments added instead when it has to fall.
const CHANNELS: [(Pigment, &[Pigment]); 4] = [
    (Pigment::Cyan, &[Pigment::Magenta, Pigment::Yellow]),
    (Pigment::Magenta, &[Pigment::Cyan, Pigment::Yellow]),
    (Pigment::Yellow, &[Pigment::Cyan, Pigment::Magenta]),
    (Pigment::Black, &[Pigment::White]),
];

pub(crate) fn mixing_ratio(base: &ColorModel, target: &ColorModel) -> MixingResult {
    let from = base.cmyk().rounded();
    let to = target.cmyk().rounded();
    let deltas = [
        to.cyan() - from.cyan(),
        to.magenta() - from.magenta(),
        to.yellow() - from.yellow(),
        to.black() - from.black(),
    ];

    let mut raw = Vec::new();
    for (&(increase, substitutes), &delta) in CHANNELS.iter().zip(deltas.iter()) {
        if delta > 0.0 {
            raw.push((increase, delta));
        } else if delta < 0.0 {
            raw.extend(substitutes.iter().map(|&p| (p, -delta)));
        }
    }

    let instructions = consolidate(raw);
    debug!(
        "{} -> {}: deltas {:?}, {} pigment(s)",
        base.to_hex(),
        target.to_hex(),
        deltas,
        instructions.len()
    );
    MixingResult::new(instructions)
}

/// Sums amounts per pigment. The map keeps pigments in recipe order.
pub(crate) fn consolidate(raw: Vec<(Pigment, f32)>) -> Vec<MixingInstruction> {
    let mut totals: BTreeMap<Pigment, PigmentAmount> = BTreeMap::new();
    for (pigment, amount) in raw {
        *totals.entry(pigment).or_default() += PigmentAmount::new(amount);
    }
    totals
        .into_iter()
        .filter(|(_, amount)| !amount.is_zero())
        .map(|(pigment, amount)| MixingInstruction::new(pigment, amount))
        .collect()
}

/// A recipe together with what following it is expected to produce.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MixingPrediction {
    pub result: MixingResult,
    pub predicted: ColorModel,
    /// RGB distance from the predicted color to the target.
    pub distance: f32,
    /// CIEDE2000 difference from the predicted color to the target.
    pub delta_e: f32,
    /// 1.0 when the prediction lands on the target, down to 0.0.
    pub confidence: f32,
}

impl MixingPrediction {
    pub(crate) fn new(result: MixingResult, predicted: ColorModel, target: &ColorModel) -> Self {
        let distance = predicted.rgb().distance(&target.rgb());
        MixingPrediction {
            result,
            predicted,
            distance,
            delta_e: predicted.rgb().delta_e(&target.rgb()),
            confidence: (1.0 - distance / 255.0).max(0.0),
        }
    }
}
