//! Input completeness summary for a submission in progress.

use serde::{Deserialize, Serialize};

use super::catalog::FeatureCategory;
use super::layout::FEATURE_COUNT;
use super::set::FeatureSet;

/// Coarse completeness bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompletionStatus {
    Empty,
    Insufficient,
    Partial,
    Good,
    Complete,
}

impl CompletionStatus {
    pub fn from_count(entered: usize) -> Self {
        match entered {
            0 => CompletionStatus::Empty,
            n if n < 10 => CompletionStatus::Insufficient,
            n if n < 20 => CompletionStatus::Partial,
            n if n < FEATURE_COUNT => CompletionStatus::Good,
            _ => CompletionStatus::Complete,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            CompletionStatus::Empty => "No data entered",
            CompletionStatus::Insufficient => "Insufficient data",
            CompletionStatus::Partial => "Partial data",
            CompletionStatus::Good => "Good data coverage",
            CompletionStatus::Complete => "All features complete!",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputSummary {
    pub entered_features: usize,
    pub total_features: usize,
    pub completion_percentage: f64,
    pub mean_features: usize,
    pub se_features: usize,
    pub worst_features: usize,
    pub status: CompletionStatus,
    pub message: String,
}

/// Counts keys as entered, without looking at their values
pub fn summarize(features: &FeatureSet) -> InputSummary {
    let entered = features.len();
    let count = |category: FeatureCategory| {
        features.keys().filter(|k| FeatureCategory::of_key(k) == Some(category)).count()
    };
    let status = CompletionStatus::from_count(entered);

    InputSummary {
        entered_features: entered,
        total_features: FEATURE_COUNT,
        completion_percentage: entered as f64 / FEATURE_COUNT as f64 * 100.0,
        mean_features: count(FeatureCategory::Mean),
        se_features: count(FeatureCategory::Se),
        worst_features: count(FeatureCategory::Worst),
        status,
        message: status.message().to_string(),
    }
}
