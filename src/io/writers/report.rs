use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::params::TrimParams;
use crate::core::processing::pipeline::TrimOutcome;
use crate::error::{Error, Result};
use crate::types::BoundingBox;

/// Summary of one file-level trim run, also written as a JSON sidecar on request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrimReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub params: TrimParams,
    pub source_width: u32,
    pub source_height: u32,
    pub output_width: u32,
    pub output_height: u32,
    pub bbox: Option<BoundingBox>,
    pub cleared_pixels: usize,
    pub processed_at: String,
}

impl TrimReport {
    pub fn new(input: &Path, output: &Path, params: &TrimParams, outcome: &TrimOutcome) -> Self {
        Self {
            input: input.to_path_buf(),
            output: output.to_path_buf(),
            params: *params,
            source_width: outcome.source_width,
            source_height: outcome.source_height,
            output_width: outcome.image.width(),
            output_height: outcome.image.height(),
            bbox: outcome.bbox,
            cleared_pixels: outcome.cleared,
            processed_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Sidecar location for a given output image: same stem, `.json` extension.
pub fn sidecar_path(output: &Path) -> PathBuf {
    output.with_extension("json")
}

/// Write `report` as pretty JSON next to `output`. Returns the sidecar path.
///
/// Refuses outputs that already carry a `.json` extension, since the sidecar
/// would land on the image itself.
pub fn write_report_sidecar(output: &Path, report: &TrimReport) -> Result<PathBuf> {
    let path = sidecar_path(output);
    if path == output {
        return Err(Error::InvalidArgument {
            arg: "output",
            value: format!("{:?} collides with its report sidecar", output),
        });
    }
    let json_string = serde_json::to_string_pretty(report)?;
    std::fs::write(&path, json_string).map_err(|e| Error::write(&path, e))?;

    info!("Created trim report sidecar: {:?}", path);
    Ok(path)
}
