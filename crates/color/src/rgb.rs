#[cfg(test)]
pub(crate) mod test_utils;

use serde::{Deserialize, Serialize};

use crate::convert::{self, clamp};
use crate::{Cmyk, ColorError};

/// 8-bit RGB color. Channels are always whole numbers in `0..=255`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RgbRepr", into = "RgbRepr")]
pub struct Rgb(u8, u8, u8);

impl Default for Rgb {
    fn default() -> Self {
        Rgb(0, 0, 0)
    }
}

impl Rgb {
    /// Rounds each channel to the nearest integer and clamps it into `0..=255`.
    /// NaN becomes 0.
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        let r = Rgb::clamp(r);
        let g = Rgb::clamp(g);
        let b = Rgb::clamp(b);
        Rgb(r, g, b)
    }

    pub const fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Rgb(r, g, b)
    }

    /// Parses `#rrggbb` or the short `#rgb` form. The leading `#` is optional.
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let invalid = || ColorError::InvalidHex(hex.to_string());
        let digits = hex.trim().trim_start_matches('#');
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid());
        match digits.len() {
            6 => Ok(Rgb(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            )),
            // #abc is shorthand for #aabbcc
            3 => Ok(Rgb(
                channel(&digits[0..1])? * 17,
                channel(&digits[1..2])? * 17,
                channel(&digits[2..3])? * 17,
            )),
            _ => Err(invalid()),
        }
    }

    pub fn set(&mut self, c: Rgb) {
        *self = c;
    }

    pub fn red(&self) -> u8 {
        self.0
    }

    pub fn green(&self) -> u8 {
        self.1
    }

    pub fn blue(&self) -> u8 {
        self.2
    }

    pub fn to_tuple(&self) -> (u8, u8, u8) {
        (self.0, self.1, self.2)
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }

    pub fn to_cmyk(&self) -> Cmyk {
        convert::cmyk_from(*self)
    }

    /// Euclidean distance between two colors in RGB space.
    pub fn distance(&self, other: &Rgb) -> f32 {
        let sq = |a: u8, b: u8| (f32::from(a) - f32::from(b)).powi(2);
        (sq(self.0, other.0) + sq(self.1, other.1) + sq(self.2, other.2)).sqrt()
    }

    /// CIEDE2000 difference, closer to how far apart the colors look than
    /// [`Rgb::distance`].
    pub fn delta_e(&self, other: &Rgb) -> f32 {
        crate::delta_e(*self, *other)
    }

    fn clamp(v: f32) -> u8 {
        clamp(v, 255.0).round() as u8
    }
}

#[derive(Serialize, Deserialize)]
struct RgbRepr {
    r: u8,
    g: u8,
    b: u8,
}

impl From<RgbRepr> for Rgb {
    fn from(repr: RgbRepr) -> Self {
        Rgb(repr.r, repr.g, repr.b)
    }
}

impl From<Rgb> for RgbRepr {
    fn from(rgb: Rgb) -> Self {
        RgbRepr {
            r: rgb.0,
            g: rgb.1,
            b: rgb.2,
        }
    }
}

#[cfg(test)]
mod test {
    use super::test_utils::assert_rgb_within;
    use super::Rgb;
    use crate::ColorError;

    #[test]
    fn min_max() {
        let rgb = Rgb::new(256.0, -1.0, 130.0);
        assert_eq!(rgb, Rgb::from_u8(255, 0, 130))
    }

    #[test]
    fn rounds_to_nearest() {
        assert_eq!(Rgb::new(12.4, 12.5, 254.6), Rgb::from_u8(12, 13, 255));
    }

    #[test]
    fn nan_and_infinity_are_clamped() {
        let rgb = Rgb::new(f32::NAN, f32::INFINITY, f32::NEG_INFINITY);
        assert_eq!(rgb, Rgb::from_u8(0, 255, 0));
    }

    #[test]
    fn hex() {
        assert_eq!(Rgb::from_hex("#ff8000").unwrap(), Rgb::from_u8(255, 128, 0));
        assert_eq!(Rgb::from_hex("0a0B0c").unwrap(), Rgb::from_u8(10, 11, 12));
        assert_eq!(Rgb::from_hex("#f80").unwrap(), Rgb::from_u8(255, 136, 0));
        assert_eq!(Rgb::from_u8(255, 128, 0).to_hex(), "#ff8000");
    }

    #[test]
    fn bad_hex() {
        assert_eq!(
            Rgb::from_hex("#ff80"),
            Err(ColorError::InvalidHex("#ff80".to_string()))
        );
        assert!(Rgb::from_hex("#gg0000").is_err());
        assert!(Rgb::from_hex("#ffé").is_err());
    }

    #[test]
    fn distance() {
        let black = Rgb::from_u8(0, 0, 0);
        assert_eq!(black.distance(&black), 0.0);
        assert_eq!(black.distance(&Rgb::from_u8(3, 4, 0)), 5.0);
    }

    #[test]
    fn cmyk_round_trip_is_close() {
        let rgb = Rgb::from_u8(215, 178, 69);
        assert_rgb_within(rgb.to_cmyk().to_rgb(), rgb, 2);
    }

    #[test]
    fn serializes_named_channels() {
        let json = serde_json::to_string(&Rgb::from_u8(1, 2, 3)).unwrap();
        assert_eq!(json, r#"{"r":1,"g":2,"b":3}"#);
        let back: Rgb = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Rgb::from_u8(1, 2, 3));
    }
}
