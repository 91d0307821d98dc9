use image::RgbaImage;
use tracing::{debug, info};

use crate::core::params::TrimParams;
use crate::core::processing::bbox::{crop_to_bbox, find_bbox};
use crate::core::processing::transparency::apply_transparency;
use crate::error::Result;
use crate::types::{BboxStrategy, BoundingBox};

/// Result of running the transparency + trim pipeline on one buffer
#[derive(Debug, Clone)]
pub struct TrimOutcome {
    pub image: RgbaImage,
    /// Dimensions before any cropping
    pub source_width: u32,
    pub source_height: u32,
    /// Box the image was cropped to; `None` when cropping was skipped or no content was found
    pub bbox: Option<BoundingBox>,
    /// Pixels turned transparent by the threshold pass
    pub cleared: usize,
}

impl TrimOutcome {
    /// True only when a box was found and it was smaller than the source frame.
    pub fn cropped(&self) -> bool {
        self.bbox
            .is_some_and(|bbox| !bbox.covers(self.source_width, self.source_height))
    }
}

fn crop_if_content(
    img: RgbaImage,
    strategy: BboxStrategy,
) -> Result<(RgbaImage, Option<BoundingBox>)> {
    match find_bbox(&img, strategy) {
        Some(bbox) if bbox.covers(img.width(), img.height()) => {
            debug!("Content spans the whole image; nothing to trim");
            Ok((img, Some(bbox)))
        }
        Some(bbox) => {
            let cropped = crop_to_bbox(&img, bbox)?;
            Ok((cropped, Some(bbox)))
        }
        None => {
            info!("No content found; keeping full {}x{} image", img.width(), img.height());
            Ok((img, None))
        }
    }
}

/// Make near-white pixels transparent and crop to content.
///
/// With `BboxStrategy::Alpha` the transparency pass runs first and the box is
/// taken from the modified alpha channel, so whitened borders are trimmed.
/// With `BboxStrategy::DifferenceFromWhite` the box is taken from the untouched
/// image and the transparency pass runs on the cropped region.
pub fn trim_image(img: RgbaImage, params: &TrimParams) -> Result<TrimOutcome> {
    let (source_width, source_height) = img.dimensions();
    debug!(
        "Trimming {}x{} image: threshold={}, strategy={}, crop={}",
        source_width, source_height, params.threshold, params.strategy, params.crop
    );

    let (image, bbox, cleared) = match (params.crop, params.strategy) {
        (false, _) => {
            let mut img = img;
            let cleared = apply_transparency(&mut img, params.threshold);
            (img, None, cleared)
        }
        (true, BboxStrategy::Alpha) => {
            let mut img = img;
            let cleared = apply_transparency(&mut img, params.threshold);
            let (img, bbox) = crop_if_content(img, BboxStrategy::Alpha)?;
            (img, bbox, cleared)
        }
        (true, BboxStrategy::DifferenceFromWhite) => {
            let (mut img, bbox) = crop_if_content(img, BboxStrategy::DifferenceFromWhite)?;
            let cleared = apply_transparency(&mut img, params.threshold);
            (img, bbox, cleared)
        }
    };

    Ok(TrimOutcome {
        image,
        source_width,
        source_height,
        bbox,
        cleared,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
    const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
    const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);

    fn params(threshold: u8, strategy: BboxStrategy) -> TrimParams {
        TrimParams {
            threshold,
            strategy,
            crop: true,
        }
    }

    fn red_square_on_white() -> RgbaImage {
        let mut img = RgbaImage::from_pixel(4, 4, WHITE);
        for y in 1..=2 {
            for x in 1..=2 {
                img.put_pixel(x, y, RED);
            }
        }
        img
    }

    #[test]
    fn red_center_crops_to_opaque_red_square() {
        for strategy in [BboxStrategy::Alpha, BboxStrategy::DifferenceFromWhite] {
            let out = trim_image(red_square_on_white(), &params(230, strategy)).unwrap();
            assert_eq!(out.image.dimensions(), (2, 2), "{strategy}");
            assert!(out.image.pixels().all(|p| *p == RED), "{strategy}");
            assert_eq!(
                out.bbox,
                Some(BoundingBox {
                    left: 1,
                    top: 1,
                    right: 3,
                    bottom: 3
                })
            );
            assert_eq!((out.source_width, out.source_height), (4, 4));
        }
    }

    #[test]
    fn full_frame_content_is_not_reported_as_cropped() {
        let img = RgbaImage::from_pixel(3, 2, RED);
        let out = trim_image(img, &params(230, BboxStrategy::Alpha)).unwrap();
        assert!(out.bbox.unwrap().covers(3, 2));
        assert!(!out.cropped());

        let out = trim_image(red_square_on_white(), &params(230, BboxStrategy::Alpha)).unwrap();
        assert!(out.cropped());

        let blank = RgbaImage::from_pixel(2, 2, WHITE);
        assert!(!trim_image(blank, &params(230, BboxStrategy::Alpha)).unwrap().cropped());
    }

    #[test]
    fn black_center_at_240_crops_to_single_pixel() {
        let mut img = RgbaImage::from_pixel(3, 3, WHITE);
        img.put_pixel(1, 1, BLACK);

        for strategy in [BboxStrategy::Alpha, BboxStrategy::DifferenceFromWhite] {
            let out = trim_image(img.clone(), &params(240, strategy)).unwrap();
            assert_eq!(out.image.dimensions(), (1, 1));
            assert_eq!(*out.image.get_pixel(0, 0), BLACK);
        }
    }

    #[test]
    fn all_white_keeps_size_and_turns_transparent() {
        for strategy in [BboxStrategy::Alpha, BboxStrategy::DifferenceFromWhite] {
            let img = RgbaImage::from_pixel(5, 3, WHITE);
            let out = trim_image(img, &params(230, strategy)).unwrap();
            assert_eq!(out.image.dimensions(), (5, 3));
            assert_eq!(out.bbox, None);
            assert_eq!(out.cleared, 15);
            assert!(out.image.pixels().all(|p| p.0 == [255, 255, 255, 0]));
        }
    }

    #[test]
    fn orderings_diverge_on_near_white_border() {
        // A near-white (but not pure white) frame around a dark pixel.
        let mut img = RgbaImage::from_pixel(3, 3, Rgba([245, 245, 245, 255]));
        img.put_pixel(1, 1, BLACK);

        let alpha = trim_image(img.clone(), &params(230, BboxStrategy::Alpha)).unwrap();
        assert_eq!(alpha.image.dimensions(), (1, 1));

        // The frame differs from pure white, so it is content before transparency.
        let diff =
            trim_image(img, &params(230, BboxStrategy::DifferenceFromWhite)).unwrap();
        assert_eq!(diff.image.dimensions(), (3, 3));
        assert_eq!(*diff.image.get_pixel(0, 0), Rgba([255, 255, 255, 0]));
        assert_eq!(*diff.image.get_pixel(1, 1), BLACK);
    }

    #[test]
    fn alpha_strategy_trims_preexisting_transparency() {
        let mut img = RgbaImage::from_pixel(4, 2, Rgba([0, 0, 0, 0]));
        img.put_pixel(2, 1, Rgba([10, 20, 30, 90]));

        let out = trim_image(img, &params(230, BboxStrategy::Alpha)).unwrap();
        assert_eq!(out.image.dimensions(), (1, 1));
        assert_eq!(*out.image.get_pixel(0, 0), Rgba([10, 20, 30, 90]));
        assert_eq!(out.cleared, 0);
    }

    #[test]
    fn no_crop_only_applies_transparency() {
        let p = TrimParams {
            crop: false,
            ..TrimParams::default()
        };
        let out = trim_image(red_square_on_white(), &p).unwrap();
        assert_eq!(out.image.dimensions(), (4, 4));
        assert_eq!(out.bbox, None);
        assert_eq!(out.cleared, 12);
        assert_eq!(*out.image.get_pixel(1, 1), RED);
        assert_eq!(*out.image.get_pixel(0, 0), Rgba([255, 255, 255, 0]));
    }

    #[test]
    fn second_run_is_a_fixed_point() {
        let mut img = RgbaImage::from_pixel(6, 5, WHITE);
        img.put_pixel(1, 1, Rgba([240, 250, 250, 255]));
        img.put_pixel(4, 3, Rgba([12, 34, 56, 200]));
        img.put_pixel(2, 2, Rgba([233, 100, 233, 255]));

        for strategy in [BboxStrategy::Alpha, BboxStrategy::DifferenceFromWhite] {
            let p = params(230, strategy);
            let first = trim_image(img.clone(), &p).unwrap();
            let second = trim_image(first.image.clone(), &p).unwrap();
            assert_eq!(first.image, second.image, "{strategy}");
        }
    }

    #[test]
    fn non_white_pixels_survive_unchanged() {
        let mut img = RgbaImage::from_pixel(3, 1, WHITE);
        img.put_pixel(0, 0, Rgba([231, 231, 230, 255]));
        img.put_pixel(2, 0, Rgba([1, 2, 3, 4]));

        let out = trim_image(img, &params(230, BboxStrategy::Alpha)).unwrap();
        assert_eq!(out.image.dimensions(), (3, 1));
        assert_eq!(*out.image.get_pixel(0, 0), Rgba([231, 231, 230, 255]));
        assert_eq!(*out.image.get_pixel(1, 0), Rgba([255, 255, 255, 0]));
        assert_eq!(*out.image.get_pixel(2, 0), Rgba([1, 2, 3, 4]));
    }
}
