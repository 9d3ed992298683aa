//! Pigment recipes: which paints to add to one color to reach another.
//!
//! Paint can only be added. A channel that has to go down is approximated by
//! adding the two primaries that make up its complement, and lightening is
//! done with white.

mod adjustment;
mod amount;
mod calculator;
mod config;
mod error;
mod instruction;
mod mixer;
mod paint_mixer;
mod pigment;

pub use adjustment::AdjustmentSet;
pub use amount::PigmentAmount;
pub use calculator::MixingPrediction;
pub use config::{MixingConfig, DEFAULT_GRAY_SATURATION_FACTOR};
pub use error::ConfigError;
pub use instruction::{MixingInstruction, MixingResult, NO_ADJUSTMENT_NEEDED};
pub use mixer::GrayInteraction;
pub use paint_mixer::{
    calculate_mixing, calculate_mixing_ratio, calculate_reverse_mixing_color, PaintMixer,
};
pub use pigment::Pigment;
