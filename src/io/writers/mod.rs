//! Output writers: PNG encoding and the JSON trim report sidecar.
pub mod png;
pub mod report;
