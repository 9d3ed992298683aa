//! 1. Only put color-space concepts here. Pigments and recipes live in `mixing`
//! 2. This crate *must* have no dependencies on other local crates in the project

mod accuracy;
mod cmyk;
mod color;
mod convert;
mod difference;
mod editor;
mod error;
mod family;
mod rgb;

pub use accuracy::{conversion_accuracy, ConversionAccuracy, DEFAULT_ROUND_TRIP_TOLERANCE};
pub use cmyk::Cmyk;
pub use color::{Color, ColorModel, ColorSpace};
pub use convert::{cmyk_to_rgb, rgb_to_cmyk};
pub use difference::{delta_e, rgb_to_lab};
pub use editor::{ColorEditor, Edit};
pub use error::ColorError;
pub use family::ColorFamily;
pub use rgb::Rgb;
