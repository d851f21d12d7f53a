//! Decision Threshold & Risk Bands
//!
//! Turns a malignant probability into a label, a 0-10 risk score and a
//! coarse risk level.

use serde::{Deserialize, Serialize};

use super::types::Classification;

/// Probability above which a sample is labelled malignant
pub const MALIGNANT_THRESHOLD: f64 = 0.5;

/// Risk score at or above which the risk level is high
pub const HIGH_RISK_MIN: u8 = 7;

/// Risk score at or above which the risk level is medium
pub const MEDIUM_RISK_MIN: u8 = 5;

/// Threshold Configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ThresholdConfig {
    /// Strict lower bound for `Malignant`
    pub malignant_threshold: f64,
    pub high_risk_min: u8,
    pub medium_risk_min: u8,
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            malignant_threshold: MALIGNANT_THRESHOLD,
            high_risk_min: HIGH_RISK_MIN,
            medium_risk_min: MEDIUM_RISK_MIN,
        }
    }
}

impl ThresholdConfig {
    /// Exactly at the threshold resolves to `Benign`
    pub fn classify(&self, malignant_probability: f64) -> Classification {
        if malignant_probability > self.malignant_threshold {
            Classification::Malignant
        } else {
            Classification::Benign
        }
    }

    pub fn risk_level(&self, risk_score: u8) -> RiskLevel {
        if risk_score >= self.high_risk_min {
            RiskLevel::High
        } else if risk_score >= self.medium_risk_min {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }
}

/// round(p × 10), clamped to 0..=10
pub fn risk_score(malignant_probability: f64) -> u8 {
    (malignant_probability * 10.0).round().clamp(0.0, 10.0) as u8
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low Risk",
            RiskLevel::Medium => "Medium Risk",
            RiskLevel::High => "High Risk",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
