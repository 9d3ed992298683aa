#[cfg(test)]
pub(crate) mod test_utils;

use serde::{Deserialize, Serialize};

use crate::convert::{self, clamp};
use crate::Rgb;

/// CMYK color as percentages. Every channel is kept within `0.0..=100.0` and
/// may carry fractional precision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "CmykRepr", into = "CmykRepr")]
pub struct Cmyk(f32, f32, f32, f32);

impl Default for Cmyk {
    fn default() -> Self {
        Cmyk(0.0, 0.0, 0.0, 0.0)
    }
}

impl Cmyk {
    pub fn new(c: f32, m: f32, y: f32, k: f32) -> Self {
        let c = Cmyk::clamp(c);
        let m = Cmyk::clamp(m);
        let y = Cmyk::clamp(y);
        let k = Cmyk::clamp(k);
        Cmyk(c, m, y, k)
    }

    pub fn set(&mut self, c: Cmyk) {
        *self = c;
    }

    pub fn cyan(&self) -> f32 {
        self.0
    }

    pub fn magenta(&self) -> f32 {
        self.1
    }

    pub fn yellow(&self) -> f32 {
        self.2
    }

    pub fn black(&self) -> f32 {
        self.3
    }

    pub fn to_tuple(&self) -> (f32, f32, f32, f32) {
        (self.0, self.1, self.2, self.3)
    }

    /// Every channel rounded to a whole percent.
    pub fn rounded(&self) -> Cmyk {
        Cmyk(self.0.round(), self.1.round(), self.2.round(), self.3.round())
    }

    pub fn to_rgb(&self) -> Rgb {
        convert::rgb_from(*self)
    }

    fn clamp(v: f32) -> f32 {
        clamp(v, 100.0)
    }
}

#[derive(Serialize, Deserialize)]
struct CmykRepr {
    c: f32,
    m: f32,
    y: f32,
    k: f32,
}

impl From<CmykRepr> for Cmyk {
    fn from(repr: CmykRepr) -> Self {
        Cmyk::new(repr.c, repr.m, repr.y, repr.k)
    }
}

impl From<Cmyk> for CmykRepr {
    fn from(cmyk: Cmyk) -> Self {
        CmykRepr {
            c: cmyk.0,
            m: cmyk.1,
            y: cmyk.2,
            k: cmyk.3,
        }
    }
}
