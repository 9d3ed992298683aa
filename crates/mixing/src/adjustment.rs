use serde::{Deserialize, Serialize};

use crate::{MixingResult, Pigment};

const MAX_ADJUSTMENT: f32 = 100.0;

/// How much of each pigment to add to a base color. Every amount is kept
/// within `0.0..=100.0`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "RawAdjustments")]
pub struct AdjustmentSet {
    cyan: f32,
    magenta: f32,
    yellow: f32,
    black: f32,
    white: f32,
}

impl AdjustmentSet {
    pub fn new(cyan: f32, magenta: f32, yellow: f32, black: f32, white: f32) -> Self {
        AdjustmentSet {
            cyan: clamp(cyan),
            magenta: clamp(magenta),
            yellow: clamp(yellow),
            black: clamp(black),
            white: clamp(white),
        }
    }

    pub fn get(&self, pigment: Pigment) -> f32 {
        match pigment {
            Pigment::Cyan => self.cyan,
            Pigment::Magenta => self.magenta,
            Pigment::Yellow => self.yellow,
            Pigment::Black => self.black,
            Pigment::White => self.white,
        }
    }

    pub fn set(&mut self, pigment: Pigment, amount: f32) {
        let amount = clamp(amount);
        match pigment {
            Pigment::Cyan => self.cyan = amount,
            Pigment::Magenta => self.magenta = amount,
            Pigment::Yellow => self.yellow = amount,
            Pigment::Black => self.black = amount,
            Pigment::White => self.white = amount,
        }
    }

    pub fn with(mut self, pigment: Pigment, amount: f32) -> Self {
        self.set(pigment, amount);
        self
    }

    pub fn cyan(&self) -> f32 {
        self.cyan
    }

    pub fn magenta(&self) -> f32 {
        self.magenta
    }

    pub fn yellow(&self) -> f32 {
        self.yellow
    }

    pub fn black(&self) -> f32 {
        self.black
    }

    pub fn white(&self) -> f32 {
        self.white
    }
}

/// Seeds the set from a recipe. Recipe amounts can exceed 100 after
/// consolidation and are capped here.
impl From<&MixingResult> for AdjustmentSet {
    fn from(result: &MixingResult) -> Self {
        result
            .iter()
            .fold(AdjustmentSet::default(), |set, instruction| {
                set.with(instruction.pigment(), *instruction.amount())
            })
    }
}

fn clamp(v: f32) -> f32 {
    // f32::max drops NaN in favour of the other operand
    v.max(0.0).min(MAX_ADJUSTMENT)
}

#[derive(Deserialize)]
#[serde(default)]
struct RawAdjustments {
    cyan: f32,
    magenta: f32,
    yellow: f32,
    black: f32,
    white: f32,
}

impl Default for RawAdjustments {
    fn default() -> Self {
        RawAdjustments {
            cyan: 0.0,
            magenta: 0.0,
            yellow: 0.0,
            black: 0.0,
            white: 0.0,
        }
    }
}

impl From<RawAdjustments> for AdjustmentSet {
    fn from(raw: RawAdjustments) -> Self {
        AdjustmentSet::new(raw.cyan, raw.magenta, raw.yellow, raw.black, raw.white)
    }
}
