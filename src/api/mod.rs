//! High-level, ergonomic library API: trim an image file to a PNG on disk, or
//! trim an already-decoded image in memory. Prefer these entrypoints over the
//! low-level processing modules when integrating logotrim.
use std::path::Path;

use image::DynamicImage;
use tracing::info;

use crate::core::params::TrimParams;
use crate::core::processing::pipeline::{TrimOutcome, trim_image};
use crate::error::Result;
use crate::io::reader::load_rgba;
use crate::io::writers::png::write_png;
use crate::io::writers::report::TrimReport;

/// Trim an in-memory image (no disk I/O). Non-RGBA inputs are converted first.
pub fn trim_dynamic(img: DynamicImage, params: &TrimParams) -> Result<TrimOutcome> {
    trim_image(img.into_rgba8(), params)
}

/// Decode `input`, make near-white pixels transparent, trim, and write a PNG to `output`.
///
/// `output` may equal `input`: the source is fully decoded before anything is written.
/// Nothing is written when decoding or encoding fails.
pub fn trim_file(input: &Path, output: &Path, params: &TrimParams) -> Result<TrimReport> {
    let img = load_rgba(input)?;
    let outcome = trim_image(img, params)?;

    write_png(output, &outcome.image)?;

    match outcome.bbox {
        Some(bbox) if outcome.cropped() => info!(
            "Cropped to bbox {} ({}x{} -> {}x{}), saved to {:?}",
            bbox,
            outcome.source_width,
            outcome.source_height,
            outcome.image.width(),
            outcome.image.height(),
            output
        ),
        Some(bbox) => info!(
            "Content spans whole image (bbox {}); no crop, saved to {:?}",
            bbox, output
        ),
        None => info!(
            "No crop applied ({}x{}), saved to {:?}",
            outcome.image.width(),
            outcome.image.height(),
            output
        ),
    }

    Ok(TrimReport::new(input, output, params, &outcome))
}
