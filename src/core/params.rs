use serde::{Deserialize, Serialize};

use crate::types::BboxStrategy;

/// Default whiteness threshold; channels strictly above it count as white.
pub const DEFAULT_THRESHOLD: u8 = 230;

/// Trim parameters suitable for config files and presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrimParams {
    /// R, G and B must all exceed this for a pixel to be made transparent
    pub threshold: u8,
    /// Background criterion for the trim box; also fixes the step order
    pub strategy: BboxStrategy,
    /// If false, only the transparency pass runs
    pub crop: bool,
}

impl Default for TrimParams {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            strategy: BboxStrategy::Alpha,
            crop: true,
        }
    }
}
