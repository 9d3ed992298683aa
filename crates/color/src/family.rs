use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

use crate::Rgb;

/// Rough color name for labelling a picked swatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, Serialize, Deserialize)]
pub enum ColorFamily {
    White,
    Black,
    Red,
    Pink,
    Purple,
    Green,
    Blue,
    Yellow,
    Gray,
}

impl ColorFamily {
    /// Rules are checked in order, the first match wins.
    pub fn of(rgb: Rgb) -> Self {
        let (r, g, b) = rgb.to_tuple();
        if r > 200 && g > 200 && b > 200 {
            ColorFamily::White
        } else if r < 50 && g < 50 && b < 50 {
            ColorFamily::Black
        } else if r > g && r > b {
            if g > 100 || b > 100 {
                if g > b {
                    ColorFamily::Pink
                } else {
                    ColorFamily::Purple
                }
            } else {
                ColorFamily::Red
            }
        } else if g > r && g > b {
            ColorFamily::Green
        } else if b > r && b > g {
            ColorFamily::Blue
        } else if r > 150 && g > 150 && b < 100 {
            ColorFamily::Yellow
        } else {
            ColorFamily::Gray
        }
    }
}

#[cfg(test)]
mod test {
    use strum::IntoEnumIterator;

    use super::ColorFamily;
    use crate::Rgb;

    fn family(r: u8, g: u8, b: u8) -> ColorFamily {
        ColorFamily::of(Rgb::from_u8(r, g, b))
    }

    #[test]
    fn families() {
        assert_eq!(family(250, 250, 250), ColorFamily::White);
        assert_eq!(family(10, 20, 30), ColorFamily::Black);
        assert_eq!(family(255, 0, 0), ColorFamily::Red);
        assert_eq!(family(255, 150, 120), ColorFamily::Pink);
        assert_eq!(family(200, 50, 150), ColorFamily::Purple);
        assert_eq!(family(0, 200, 0), ColorFamily::Green);
        assert_eq!(family(0, 0, 255), ColorFamily::Blue);
        assert_eq!(family(255, 255, 0), ColorFamily::Yellow);
        assert_eq!(family(128, 128, 128), ColorFamily::Gray);
    }

    #[test]
    fn ties_fall_through_to_gray() {
        // red and blue tie, nothing dominates and it is not yellow
        assert_eq!(family(120, 60, 120), ColorFamily::Gray);
    }

    #[test]
    fn names() {
        let names: Vec<String> = ColorFamily::iter().map(|f| f.to_string()).collect();
        assert_eq!(
            names,
            ["White", "Black", "Red", "Pink", "Purple", "Green", "Blue", "Yellow", "Gray"]
        );
    }
}
