//! I/O layer: decoding source images to RGBA and writing PNG outputs and
//! report sidecars.
pub mod reader;
pub use reader::{load_image, load_rgba};

pub mod writers;
pub use writers::report::TrimReport;
