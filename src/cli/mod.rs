//! Command Line Interface (CLI) layer for logotrim.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) for a single trim run. It wires
//! user-provided options to the library exposed via `logotrim::api`.
//!
//! If you are embedding logotrim into another application, prefer using
//! the high-level `logotrim::api` module instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
