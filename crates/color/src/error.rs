use thiserror::Error;

use crate::{Cmyk, ColorSpace, Rgb};

#[derive(Error, Debug, PartialEq)]
pub enum ColorError {
    #[error("Received {0} params for color. Max is four")]
    TooManyParams(usize),
    #[error("Received 0 params for color. At least one is required.")]
    TooFewParams,
    #[error("{space} color takes {expected} params but received {count}")]
    ParamCountMismatch {
        space: ColorSpace,
        expected: usize,
        count: usize,
    },
    #[error("invalid hex color `{0}`")]
    InvalidHex(String),
    #[error("could not parse color `{0}`")]
    InvalidColor(String),
    #[error("{rgb:?} and {cmyk:?} describe different colors")]
    UnsyncedHalves { rgb: Rgb, cmyk: Cmyk },
}
