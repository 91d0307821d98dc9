#![doc = r#"
logotrim — make near-white logo backgrounds transparent and trim to content.

This crate takes a logo image (PNG or anything the `image` crate decodes),
replaces every pixel whose red, green and blue channels all exceed a threshold
with transparent white, crops the image to the bounding box of its remaining
content, and writes an RGBA PNG. It powers the `logotrim` CLI and can be
embedded in your own Rust applications.

Quick start: trim a file
------------------------
```rust,no_run
use std::path::Path;
use logotrim::{trim_file, BboxStrategy, TrimParams};

fn main() -> logotrim::Result<()> {
    let params = TrimParams {
        threshold: 230,
        strategy: BboxStrategy::Alpha,
        crop: true,
    };

    let report = trim_file(
        Path::new("public/assets/logo-banner.png"),
        Path::new("public/assets/logo-banner-trans.png"),
        &params,
    )?;
    println!("bbox={:?} cleared={}", report.bbox, report.cleared_pixels);
    Ok(())
}
```

Trim in memory
--------------
```rust
use image::{Rgba, RgbaImage};
use logotrim::{trim_image, TrimParams};

fn main() -> logotrim::Result<()> {
    let mut img = RgbaImage::from_pixel(4, 4, Rgba([255, 255, 255, 255]));
    img.put_pixel(2, 1, Rgba([200, 0, 0, 255]));

    let out = trim_image(img, &TrimParams::default())?;
    assert_eq!(out.image.dimensions(), (1, 1));
    Ok(())
}
```

Bounding-box strategies
-----------------------
- [`BboxStrategy::Alpha`] (default): transparency first, then crop to pixels
  whose alpha is non-zero. Whitened borders are trimmed away.
- [`BboxStrategy::DifferenceFromWhite`]: crop first to pixels that differ from
  opaque white, then apply transparency inside the cropped region.

Error handling
--------------
All public functions return `logotrim::Result<T>`; match on `logotrim::Error`
to tell decode, encode and write failures apart.

```rust,no_run
use std::path::Path;
use logotrim::{trim_file, Error, TrimParams};

fn main() {
    match trim_file(Path::new("missing.png"), Path::new("out.png"), &TrimParams::default()) {
        Ok(_) => {}
        Err(Error::Decode { path, .. }) => eprintln!("cannot read {path:?}"),
        Err(other) => eprintln!("Other error: {other}"),
    }
}
```

Useful modules
--------------
- [`api`] — high-level entry points.
- [`core`] — parameters, the transparency pass, bbox detection and the pipeline.
- [`io`] — decoding and PNG/report writers.
- [`types`] — `BboxStrategy` and `BoundingBox`.
- [`error`] — crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
// Types
pub use crate::core::params::{DEFAULT_THRESHOLD, TrimParams};
pub use crate::error::{Error, Result};
pub use crate::types::{BboxStrategy, BoundingBox};

// Primitives
pub use crate::core::processing::bbox::{crop_to_bbox, find_bbox, is_background};
pub use crate::core::processing::pipeline::{TrimOutcome, trim_image};
pub use crate::core::processing::transparency::{apply_transparency, classify, is_near_white};

// I/O
pub use crate::io::reader::{load_image, load_rgba};
pub use crate::io::writers::png::{encode_png, write_png};
pub use crate::io::writers::report::{TrimReport, sidecar_path, write_report_sidecar};

// High-level API re-exports
pub use crate::api::{trim_dynamic, trim_file};
