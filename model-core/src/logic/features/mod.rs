//! Features Module - Input side of the classifier
//!
//! Layout and catalog of the 30 WDBC features, the raw `FeatureSet` a
//! submission arrives as, and helpers for bulk CSV input and completeness.

pub mod bulk;
pub mod catalog;
pub mod layout;
pub mod set;
pub mod summary;

#[cfg(test)]
mod tests;

// Re-export common types
pub use bulk::{parse_bulk_input, sample_features, SAMPLE_CSV};
pub use catalog::{FeatureCategory, FeatureSpec, ImportanceTier, FEATURE_CATALOG};
pub use layout::{FEATURE_COUNT, FEATURE_LAYOUT};
pub use set::{FeatureSet, FeatureValue};
pub use summary::{summarize, CompletionStatus, InputSummary};
