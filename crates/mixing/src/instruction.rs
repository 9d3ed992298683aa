use std::fmt;
use std::slice::Iter;

use color::Rgb;
use serde::{Deserialize, Serialize};

use crate::calculator::consolidate;
use crate::{Pigment, PigmentAmount};

pub const NO_ADJUSTMENT_NEEDED: &str = "No adjustment needed";

/// One line of a recipe: add this much of one pigment.
///
/// Only `pigment` and `amount` are read back when deserializing; the swatch
/// and description are rebuilt from them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "InstructionRepr")]
pub struct MixingInstruction {
    pigment: Pigment,
    amount: PigmentAmount,
    display_color: Rgb,
    description: String,
}

impl MixingInstruction {
    pub fn new(pigment: Pigment, amount: PigmentAmount) -> Self {
        MixingInstruction {
            pigment,
            amount,
            display_color: pigment.display_color(),
            description: format!("{} +{}", pigment, amount),
        }
    }

    pub fn pigment(&self) -> Pigment {
        self.pigment
    }

    pub fn amount(&self) -> PigmentAmount {
        self.amount
    }

    pub fn display_color(&self) -> Rgb {
        self.display_color
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

#[derive(Deserialize)]
struct InstructionRepr {
    pigment: Pigment,
    amount: PigmentAmount,
}

impl From<InstructionRepr> for MixingInstruction {
    fn from(repr: InstructionRepr) -> Self {
        MixingInstruction::new(repr.pigment, repr.amount)
    }
}

/// A consolidated recipe, at most one instruction per pigment, listed Cyan,
/// Magenta, Yellow, Black, White.
///
/// Deserialized recipes are consolidated again, so repeated or out of order
/// pigments are merged and `display_text` is recomputed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "MixingResultRepr")]
pub struct MixingResult {
    instructions: Vec<MixingInstruction>,
    display_text: String,
}

impl MixingResult {
    /// Callers are expected to pass instructions already consolidated and in
    /// pigment order.
    pub(crate) fn new(instructions: Vec<MixingInstruction>) -> Self {
        let display_text = if instructions.is_empty() {
            NO_ADJUSTMENT_NEEDED.to_string()
        } else {
            instructions
                .iter()
                .map(|i| i.description())
                .collect::<Vec<_>>()
                .join("\n")
        };
        MixingResult {
            instructions,
            display_text,
        }
    }

    pub fn instructions(&self) -> &[MixingInstruction] {
        &self.instructions
    }

    pub fn display_text(&self) -> &str {
        &self.display_text
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// 0 when the recipe does not use `pigment`.
    pub fn amount_of(&self, pigment: Pigment) -> f32 {
        self.instructions
            .iter()
            .find(|i| i.pigment == pigment)
            .map(|i| *i.amount)
            .unwrap_or(0.0)
    }

    pub fn iter(&self) -> Iter<'_, MixingInstruction> {
        self.instructions.iter()
    }
}

#[derive(Deserialize)]
struct MixingResultRepr {
    #[serde(default)]
    instructions: Vec<MixingInstruction>,
}

impl From<MixingResultRepr> for MixingResult {
    fn from(repr: MixingResultRepr) -> Self {
        let raw = repr
            .instructions
            .into_iter()
            .map(|i| (i.pigment, *i.amount))
            .collect();
        MixingResult::new(consolidate(raw))
    }
}

impl<'a> IntoIterator for &'a MixingResult {
    type Item = &'a MixingInstruction;
    type IntoIter = Iter<'a, MixingInstruction>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for MixingResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_text)
    }
}
