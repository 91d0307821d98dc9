use image::{Rgba, RgbaImage, imageops};
use tracing::debug;

use crate::error::{Error, Result};
use crate::types::{BboxStrategy, BoundingBox};

const OPAQUE_WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Whether `pixel` is empty background under `strategy`.
///
/// `Alpha` treats any fully transparent pixel as background regardless of color.
/// `DifferenceFromWhite` treats only exact opaque white as background: the
/// per-channel absolute difference against a white canvas must be zero in all
/// four channels.
#[inline]
pub fn is_background(pixel: &Rgba<u8>, strategy: BboxStrategy) -> bool {
    match strategy {
        BboxStrategy::Alpha => pixel[3] == 0,
        BboxStrategy::DifferenceFromWhite => *pixel == OPAQUE_WHITE,
    }
}

/// Smallest rectangle enclosing every non-background pixel.
/// Returns `None` when the image holds no content (or has zero size).
pub fn find_bbox(img: &RgbaImage, strategy: BboxStrategy) -> Option<BoundingBox> {
    let mut left = u32::MAX;
    let mut top = u32::MAX;
    let mut right = 0u32;
    let mut bottom = 0u32;
    let mut found = false;

    for (x, y, pixel) in img.enumerate_pixels() {
        if is_background(pixel, strategy) {
            continue;
        }
        found = true;
        left = left.min(x);
        top = top.min(y);
        right = right.max(x + 1);
        bottom = bottom.max(y + 1);
    }

    if !found {
        debug!("No content pixels under {} strategy", strategy);
        return None;
    }

    Some(BoundingBox {
        left,
        top,
        right,
        bottom,
    })
}

/// Copy the region described by `bbox` into a new buffer.
pub fn crop_to_bbox(img: &RgbaImage, bbox: BoundingBox) -> Result<RgbaImage> {
    if bbox.left >= bbox.right
        || bbox.top >= bbox.bottom
        || bbox.right > img.width()
        || bbox.bottom > img.height()
    {
        return Err(Error::InvalidArgument {
            arg: "bbox",
            value: format!("{} for {}x{} image", bbox, img.width(), img.height()),
        });
    }

    Ok(imageops::crop_imm(img, bbox.left, bbox.top, bbox.width(), bbox.height()).to_image())
}
