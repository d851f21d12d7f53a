//! API Module
//!
//! Entry points for collaborators (CLI, HTTP service, tests).
//!
//! Usage:
//! - `api::predict(&features)` - score with the built-in model
//! - `api::submit(&classifier, &features, strict)` - validate, then score

pub mod commands;

pub use commands::*;
