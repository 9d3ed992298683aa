use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};
use color::ColorModel;
use log::debug;

/// Reads a color argument. `photo.png@12,40` samples the pixel at (12, 40),
/// anything else goes through `ColorModel::from_str`.
pub fn resolve_color(arg: &str) -> Result<ColorModel> {
    match arg.rsplit_once('@') {
        Some((path, point)) => {
            let (x, y) = parse_point(point)?;
            sample_pixel(Path::new(path), x, y)
        }
        None => Ok(arg.parse::<ColorModel>()?),
    }
}

pub fn sample_pixel(path: &Path, x: u32, y: u32) -> Result<ColorModel> {
    let image = image::open(path)
        .with_context(|| format!("could not open image {}", path.display()))?
        .to_rgb8();
    let (width, height) = image.dimensions();
    if x >= width || y >= height {
        bail!("pixel ({}, {}) is outside the {}x{} image", x, y, width, height);
    }
    let image::Rgb([r, g, b]) = *image.get_pixel(x, y);
    debug!("sampled ({}, {}) from {}: RGB({}, {}, {})", x, y, path.display(), r, g, b);
    Ok(ColorModel::from_rgb(r, g, b))
}

fn parse_point(point: &str) -> Result<(u32, u32)> {
    let (x, y) = point
        .split_once(',')
        .ok_or_else(|| anyhow!("expected a pixel as `x,y` but got `{}`", point))?;
    let x = x.trim().parse::<u32>().with_context(|| format!("bad x coordinate `{}`", x))?;
    let y = y.trim().parse::<u32>().with_context(|| format!("bad y coordinate `{}`", y))?;
    Ok((x, y))
}

#[cfg(test)]
mod test {
    use super::{parse_point, resolve_color};
    use color::Rgb;

    #[test]
    fn plain_colors_are_parsed() {
        let color = resolve_color("#ff0000").unwrap();
        assert_eq!(color.rgb(), Rgb::from_u8(255, 0, 0));
        assert!(resolve_color("not a color").is_err());
    }

    #[test]
    fn points() {
        assert_eq!(parse_point("3, 4").unwrap(), (3, 4));
        assert!(parse_point("3").is_err());
        assert!(parse_point("-1,2").is_err());
    }

    #[test]
    fn samples_a_pixel() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("swatch.png");
        let mut img = image::RgbImage::from_pixel(2, 2, image::Rgb([255, 255, 255]));
        img.put_pixel(1, 0, image::Rgb([215, 178, 69]));
        img.save(&path).unwrap();

        let arg = format!("{}@1,0", path.display());
        let color = resolve_color(&arg).unwrap();
        assert_eq!(color.rgb(), Rgb::from_u8(215, 178, 69));

        let arg = format!("{}@2,0", path.display());
        let err = resolve_color(&arg).unwrap_err();
        assert!(err.to_string().contains("outside the 2x2 image"));
    }
}
