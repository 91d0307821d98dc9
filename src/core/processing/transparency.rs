use image::{Rgba, RgbaImage};
use tracing::debug;

/// Value written for every pixel classified as near-white.
pub const TRANSPARENT_WHITE: Rgba<u8> = Rgba([255, 255, 255, 0]);

/// R, G and B all strictly above `threshold`. Alpha is not consulted.
#[inline]
pub fn is_near_white(pixel: &Rgba<u8>, threshold: u8) -> bool {
    let [r, g, b, _] = pixel.0;
    r > threshold && g > threshold && b > threshold
}

/// Map a single pixel: near-white becomes transparent white, everything else passes through.
#[inline]
pub fn classify(pixel: Rgba<u8>, threshold: u8) -> Rgba<u8> {
    if is_near_white(&pixel, threshold) {
        TRANSPARENT_WHITE
    } else {
        pixel
    }
}

/// Apply `classify` across the whole buffer in place.
/// Returns how many pixels were classified as near-white.
pub fn apply_transparency(img: &mut RgbaImage, threshold: u8) -> usize {
    let mut cleared = 0usize;
    for pixel in img.pixels_mut() {
        if is_near_white(pixel, threshold) {
            *pixel = TRANSPARENT_WHITE;
            cleared += 1;
        }
    }

    debug!(
        "Transparency pass: threshold={}, cleared={} of {} pixels",
        threshold,
        cleared,
        img.width() as usize * img.height() as usize
    );
    cleared
}
