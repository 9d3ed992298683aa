use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use color::ColorModel;
use log::info;
use mixing::{MixingConfig, MixingPrediction, PaintMixer};

mod sample;
use sample::resolve_color;

/// Work out which paints to add to one color to get another.
///
/// Colors can be given as `#rrggbb`, `rgb(r, g, b)`, `cmyk(c, m, y, k)` or
/// `path/to/image.png@x,y` to pick a pixel from an image.
#[derive(Parser, Debug)]
#[command(name = "playground", version)]
struct Args {
    /// Color you have
    #[arg(long)]
    base: String,

    /// Color you want
    #[arg(long)]
    target: String,

    /// JSON file with mixing settings, e.g. `{"gray_saturation_factor": 0.3}`
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the recipe and prediction as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => MixingConfig::from_path(path)?,
        None => MixingConfig::default(),
    };
    let mixer = PaintMixer::new(config);
    info!("using {:?}", mixer.config());

    let base = resolve_color(&args.base).context("could not read --base")?;
    let target = resolve_color(&args.target).context("could not read --target")?;
    let prediction = mixer.predict(&base, &target);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&prediction)?);
    } else {
        print_report(&base, &target, &prediction);
    }
    Ok(())
}

fn print_report(base: &ColorModel, target: &ColorModel, prediction: &MixingPrediction) {
    println!("base:      {}  ({})", base, base.family());
    println!("target:    {}  ({})", target, target.family());
    println!();
    println!("{}", prediction.result);
    println!();
    println!(
        "predicted: {}  ({})",
        prediction.predicted,
        prediction.predicted.family()
    );
    println!(
        "distance:  {:.1}  dE2000 {:.1}  confidence {:.0}%",
        prediction.distance,
        prediction.delta_e,
        prediction.confidence * 100.0
    );
}
