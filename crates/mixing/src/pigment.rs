use color::Rgb;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// Paints available for mixing. Declaration order is the order recipes are
/// listed in.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
pub enum Pigment {
    Cyan,
    Magenta,
    Yellow,
    Black,
    White,
}

impl Pigment {
    /// Swatch color used when showing this pigment.
    pub fn display_color(&self) -> Rgb {
        match self {
            Pigment::Cyan => Rgb::from_u8(0, 255, 255),
            Pigment::Magenta => Rgb::from_u8(255, 0, 255),
            Pigment::Yellow => Rgb::from_u8(255, 255, 0),
            Pigment::Black => Rgb::from_u8(0, 0, 0),
            Pigment::White => Rgb::from_u8(255, 255, 255),
        }
    }
}
