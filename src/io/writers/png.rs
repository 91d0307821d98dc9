use std::io::Cursor;
use std::path::Path;

use image::{ImageFormat, RgbaImage};
use tracing::debug;

use crate::error::{Error, Result};

/// Encode to PNG bytes without touching the filesystem.
pub fn encode_png(img: &RgbaImage) -> Result<Vec<u8>> {
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, ImageFormat::Png)
        .map_err(Error::Encode)?;
    Ok(buf.into_inner())
}

/// Encode fully in memory, then write the file in one call so an encode
/// failure never leaves a truncated output behind.
pub fn write_png(output: &Path, img: &RgbaImage) -> Result<()> {
    let bytes = encode_png(img)?;
    std::fs::write(output, &bytes).map_err(|e| Error::write(output, e))?;
    debug!("Wrote {} bytes of PNG to {:?}", bytes.len(), output);
    Ok(())
}
