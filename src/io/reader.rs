use std::path::Path;

use image::{DynamicImage, ImageError, ImageReader, RgbaImage};
use tracing::debug;

use crate::error::{Error, Result};

/// Decode any format the `image` crate understands, sniffing content rather
/// than trusting the extension.
pub fn load_image(path: &Path) -> Result<DynamicImage> {
    let decode_err = |source: ImageError| Error::Decode {
        path: path.to_path_buf(),
        source,
    };

    let reader = ImageReader::open(path)
        .and_then(|r| r.with_guessed_format())
        .map_err(|e| decode_err(ImageError::IoError(e)))?;
    let format = reader.format();
    let img = reader.decode().map_err(decode_err)?;

    debug!(
        "Decoded {:?}: format={:?}, color={:?}, {}x{}",
        path,
        format,
        img.color(),
        img.width(),
        img.height()
    );
    Ok(img)
}

/// Decode and normalize to RGBA8. Sources without alpha become fully opaque.
pub fn load_rgba(path: &Path) -> Result<RgbaImage> {
    Ok(load_image(path)?.to_rgba8())
}
