use anyhow::Result;
use log::trace;

use crate::{Cmyk, Color, ColorError, ColorModel, ColorSpace, Rgb};

/// A write coming from one of the two sets of input fields.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Edit {
    Rgb(Rgb),
    Cmyk(Cmyk),
}

/// Backs a pair of RGB and CMYK editors bound to the same color.
///
/// Writing one side recomputes the other. When a UI pushes the recomputed
/// values back in as an edit, they match what is already held and are
/// dropped, so the last real write wins and updates never ping-pong.
#[derive(Debug, Clone)]
pub struct ColorEditor {
    color: ColorModel,
    color_space: ColorSpace,
    last_edited: Option<ColorSpace>,
}

impl Default for ColorEditor {
    fn default() -> Self {
        ColorEditor::new(ColorModel::default())
    }
}

impl ColorEditor {
    pub fn new(color: ColorModel) -> Self {
        ColorEditor {
            color,
            color_space: ColorSpace::Rgb,
            last_edited: None,
        }
    }

    pub fn color(&self) -> ColorModel {
        self.color
    }

    pub fn color_space(&self) -> ColorSpace {
        self.color_space
    }

    /// Side of the most recent accepted edit.
    pub fn last_edited(&self) -> Option<ColorSpace> {
        self.last_edited
    }

    /// Returns whether the edit changed the color.
    pub fn apply(&mut self, edit: Edit) -> bool {
        match edit {
            Edit::Rgb(rgb) => {
                if rgb == self.color.rgb() {
                    trace!("dropping RGB edit {:?}, already current", rgb);
                    return false;
                }
                self.color.update_from_rgb(rgb);
                self.last_edited = Some(ColorSpace::Rgb);
            }
            Edit::Cmyk(cmyk) => {
                if cmyk == self.color.cmyk() {
                    trace!("dropping CMYK edit {:?}, already current", cmyk);
                    return false;
                }
                self.color.update_from_cmyk(cmyk);
                self.last_edited = Some(ColorSpace::Cmyk);
            }
        }
        true
    }
}

impl Color for ColorEditor {
    fn set_color_space(&mut self, c: ColorSpace) {
        self.color_space = c;
    }

    fn set_color(&mut self, components: Vec<f32>) -> Result<()> {
        match (components.as_slice(), self.color_space) {
            ([], _) => Err(ColorError::TooFewParams.into()),
            (&[r, g, b], ColorSpace::Rgb) => {
                self.apply(Edit::Rgb(Rgb::new(r, g, b)));
                Ok(())
            }
            (&[c, m, y, k], ColorSpace::Cmyk) => {
                self.apply(Edit::Cmyk(Cmyk::new(c, m, y, k)));
                Ok(())
            }
            (params, space) if params.len() <= 4 => Err(ColorError::ParamCountMismatch {
                space,
                expected: space.component_count(),
                count: params.len(),
            }
            .into()),
            (params, _) => Err(ColorError::TooManyParams(params.len()).into()),
        }
    }
}
