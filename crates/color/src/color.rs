use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use strum_macros::Display;

use crate::{Cmyk, ColorError, ColorFamily, Rgb};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
pub enum ColorSpace {
    #[strum(serialize = "RGB")]
    Rgb,
    #[strum(serialize = "CMYK")]
    Cmyk,
}

impl ColorSpace {
    pub fn component_count(&self) -> usize {
        match self {
            ColorSpace::Rgb => 3,
            ColorSpace::Cmyk => 4,
        }
    }
}

pub trait Color {
    fn set_color_space(&mut self, c: ColorSpace);

    fn set_color(&mut self, c: Vec<f32>) -> Result<()>;
}

/// A color held in both RGB and CMYK.
///
/// Whichever half was written last is authoritative and the other half is
/// derived from it, so the two always agree within conversion rounding.
/// CMYK written directly is kept as given, even where `rgb_to_cmyk` would
/// have picked a different K split for the same RGB.
///
/// Deserializing checks that the two halves agree, one way or the other.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ColorModelRepr")]
pub struct ColorModel {
    #[serde(flatten)]
    rgb: Rgb,
    #[serde(flatten)]
    cmyk: Cmyk,
}

impl Default for ColorModel {
    fn default() -> Self {
        ColorModel::from(Rgb::default())
    }
}

impl From<Rgb> for ColorModel {
    fn from(rgb: Rgb) -> Self {
        ColorModel {
            rgb,
            cmyk: rgb.to_cmyk(),
        }
    }
}

impl From<Cmyk> for ColorModel {
    fn from(cmyk: Cmyk) -> Self {
        ColorModel {
            rgb: cmyk.to_rgb(),
            cmyk,
        }
    }
}

impl ColorModel {
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        ColorModel::from(Rgb::from_u8(r, g, b))
    }

    pub fn from_cmyk(c: f32, m: f32, y: f32, k: f32) -> Self {
        ColorModel::from(Cmyk::new(c, m, y, k))
    }

    pub fn update_from_rgb(&mut self, rgb: Rgb) {
        self.rgb.set(rgb);
        self.cmyk.set(rgb.to_cmyk());
    }

    pub fn update_from_cmyk(&mut self, cmyk: Cmyk) {
        self.cmyk.set(cmyk);
        self.rgb.set(cmyk.to_rgb());
    }

    pub fn rgb(&self) -> Rgb {
        self.rgb
    }

    pub fn cmyk(&self) -> Cmyk {
        self.cmyk
    }

    pub fn r(&self) -> u8 {
        self.rgb.red()
    }

    pub fn g(&self) -> u8 {
        self.rgb.green()
    }

    pub fn b(&self) -> u8 {
        self.rgb.blue()
    }

    pub fn c(&self) -> f32 {
        self.cmyk.cyan()
    }

    pub fn m(&self) -> f32 {
        self.cmyk.magenta()
    }

    pub fn y(&self) -> f32 {
        self.cmyk.yellow()
    }

    pub fn k(&self) -> f32 {
        self.cmyk.black()
    }

    pub fn to_hex(&self) -> String {
        self.rgb.to_hex()
    }

    pub fn family(&self) -> ColorFamily {
        ColorFamily::of(self.rgb)
    }

    /// Short label such as `Red RGB(255, 0, 0)`.
    pub fn describe(&self) -> String {
        format!("{} RGB({}, {}, {})", self.family(), self.r(), self.g(), self.b())
    }
}

/// Either half may be left out, in which case it is derived from the other.
#[derive(Deserialize)]
struct ColorModelRepr {
    r: Option<u8>,
    g: Option<u8>,
    b: Option<u8>,
    c: Option<f32>,
    m: Option<f32>,
    y: Option<f32>,
    k: Option<f32>,
}

impl TryFrom<ColorModelRepr> for ColorModel {
    type Error = ColorError;

    fn try_from(repr: ColorModelRepr) -> Result<Self, Self::Error> {
        let rgb = match (repr.r, repr.g, repr.b) {
            (Some(r), Some(g), Some(b)) => Some(Rgb::from_u8(r, g, b)),
            (None, None, None) => None,
            _ => return Err(ColorError::InvalidColor("RGB needs all of r, g and b".to_string())),
        };
        let cmyk = match (repr.c, repr.m, repr.y, repr.k) {
            (Some(c), Some(m), Some(y), Some(k)) => Some(Cmyk::new(c, m, y, k)),
            (None, None, None, None) => None,
            _ => {
                return Err(ColorError::InvalidColor(
                    "CMYK needs all of c, m, y and k".to_string(),
                ))
            }
        };

        match (rgb, cmyk) {
            (Some(rgb), Some(cmyk)) if cmyk.to_rgb() == rgb => Ok(ColorModel::from(cmyk)),
            (Some(rgb), Some(cmyk)) if rgb.to_cmyk() == cmyk => Ok(ColorModel::from(rgb)),
            (Some(rgb), Some(cmyk)) => Err(ColorError::UnsyncedHalves { rgb, cmyk }),
            (Some(rgb), None) => Ok(ColorModel::from(rgb)),
            (None, Some(cmyk)) => Ok(ColorModel::from(cmyk)),
            (None, None) => Err(ColorError::InvalidColor("no color components".to_string())),
        }
    }
}

impl fmt::Display for ColorModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} RGB({}, {}, {}) CMYK({:.1}, {:.1}, {:.1}, {:.1})",
            self.to_hex(),
            self.r(),
            self.g(),
            self.b(),
            self.c(),
            self.m(),
            self.y(),
            self.k()
        )
    }
}

/// Accepts `#rrggbb`, `#rgb`, `rgb(r, g, b)` and `cmyk(c, m, y, k)`. Percent
/// signs after the CMYK numbers are optional.
impl FromStr for ColorModel {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let lower = trimmed.to_ascii_lowercase();
        let invalid = || ColorError::InvalidColor(s.to_string());

        if lower.starts_with('#') {
            return Ok(ColorModel::from(Rgb::from_hex(trimmed)?));
        }
        if let Some(args) = function_args(&lower, "rgb") {
            return match parse_components(args).ok_or_else(invalid)?.as_slice() {
                &[r, g, b] => Ok(ColorModel::from(Rgb::new(r, g, b))),
                _ => Err(invalid()),
            };
        }
        if let Some(args) = function_args(&lower, "cmyk") {
            return match parse_components(args).ok_or_else(invalid)?.as_slice() {
                &[c, m, y, k] => Ok(ColorModel::from_cmyk(c, m, y, k)),
                _ => Err(invalid()),
            };
        }
        Err(invalid())
    }
}

fn function_args<'a>(s: &'a str, name: &str) -> Option<&'a str> {
    s.strip_prefix(name)?
        .trim_start()
        .strip_prefix('(')?
        .strip_suffix(')')
}

fn parse_components(args: &str) -> Option<Vec<f32>> {
    args.split(',')
        .map(|part| part.trim().trim_end_matches('%').trim_end().parse::<f32>().ok())
        .collect()
}
