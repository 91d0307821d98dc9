//! Shared types used across logotrim.
//! Includes the `BboxStrategy` selector and the `BoundingBox` rectangle.
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Which pixels count as empty background when computing the trim box.
#[derive(
    Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum BboxStrategy {
    /// Background is alpha == 0. Transparency runs first, then the trim.
    #[default]
    Alpha,
    /// Background is exactly opaque white. The trim runs first, then transparency.
    DifferenceFromWhite,
}

impl std::fmt::Display for BboxStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BboxStrategy::Alpha => write!(f, "Alpha"),
            BboxStrategy::DifferenceFromWhite => write!(f, "DifferenceFromWhite"),
        }
    }
}

/// Pixel rectangle with inclusive `left`/`top` and exclusive `right`/`bottom`.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct BoundingBox {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl BoundingBox {
    /// Zero for an inverted box; `crop_to_bbox` rejects those.
    pub fn width(&self) -> u32 {
        self.right.saturating_sub(self.left)
    }

    pub fn height(&self) -> u32 {
        self.bottom.saturating_sub(self.top)
    }

    /// True when the box spans the whole `width` x `height` image.
    pub fn covers(&self, width: u32, height: u32) -> bool {
        self.left == 0 && self.top == 0 && self.right == width && self.bottom == height
    }
}

impl std::fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({}, {}, {}, {})",
            self.left, self.top, self.right, self.bottom
        )
    }
}
