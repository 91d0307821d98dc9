//! Core processing building blocks: trim parameters, the transparency pass,
//! bounding-box detection and the trim pipeline. These are internal
//! primitives consumed by the high-level `api` module.
pub mod params;
pub mod processing;
