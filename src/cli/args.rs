use clap::Parser;
use std::path::PathBuf;

use logotrim::{BboxStrategy, DEFAULT_THRESHOLD};

pub const DEFAULT_INPUT: &str = "public/assets/logo-banner.png";
pub const DEFAULT_OUTPUT: &str = "public/assets/logo-banner-trans.png";

#[derive(Parser)]
#[command(name = "logotrim", version, about = "Make near-white pixels transparent and trim to content")]
pub struct CliArgs {
    /// Input image (PNG or any format the image crate decodes)
    #[arg(short, long, default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Output PNG path [default: public/assets/logo-banner-trans.png]
    #[arg(short, long, conflicts_with = "in_place")]
    pub output: Option<PathBuf>,

    /// Overwrite the input file instead of writing a separate output
    #[arg(long, default_value_t = false)]
    pub in_place: bool,

    /// Whiteness threshold: pixels with R, G and B all above it become transparent
    #[arg(short, long, default_value_t = DEFAULT_THRESHOLD)]
    pub threshold: u8,

    /// Bounding-box criterion (alpha or difference-from-white)
    #[arg(long, value_enum, default_value_t = BboxStrategy::Alpha)]
    pub strategy: BboxStrategy,

    /// Only apply transparency, do not crop
    #[arg(long, default_value_t = false)]
    pub no_crop: bool,

    /// Write a JSON report next to the output (same name, .json extension)
    #[arg(long, default_value_t = false)]
    pub report: bool,

    /// Enable debug logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}

impl CliArgs {
    pub fn output_path(&self) -> PathBuf {
        if self.in_place {
            self.input.clone()
        } else {
            self.output
                .clone()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT))
        }
    }
}
