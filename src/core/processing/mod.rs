//! Pixel-level building blocks: the near-white transparency pass, bounding
//! box detection and cropping, and the pipeline that orders them.
pub mod bbox;
pub mod pipeline;
pub mod transparency;
