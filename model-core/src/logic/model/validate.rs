//! Input validation
//!
//! Reports problems without blocking anything: only unparseable values are
//! hard errors, and even those are left to the caller to act on.

use serde::{Deserialize, Serialize};

use crate::logic::features::set::{format_decimal, FeatureSet};

use super::inference::Classifier;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub valid_features: usize,
    pub invalid_features: usize,
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
            valid_features: 0,
            invalid_features: 0,
        }
    }
}

impl Classifier {
    /// Check every submitted entry against the known ranges
    pub fn validate_features(&self, features: &FeatureSet) -> ValidationResult {
        let mut validation = ValidationResult::default();

        for (key, value) in features.iter() {
            let Some(range) = self.params().range(key) else {
                validation.warnings.push(format!("Unknown feature: {}", key));
                validation.invalid_features += 1;
                continue;
            };

            if value.is_missing() {
                validation.warnings.push(format!("Missing value for {}", key));
                validation.invalid_features += 1;
                continue;
            }

            let Some(num) = value.as_f64() else {
                validation.errors.push(format!("Invalid numeric value for {}: {}", key, value));
                validation.invalid_features += 1;
                validation.is_valid = false;
                continue;
            };

            if !range.is_typical(num) {
                validation.warnings.push(format!(
                    "{} value {} seems out of typical range [{}-{}]",
                    key,
                    format_decimal(num),
                    format_decimal(range.min),
                    format_decimal(range.max)
                ));
            }

            validation.valid_features += 1;
        }

        if !validation.is_valid {
            log::debug!("Validation failed: {}", validation.errors.join(", "));
        }

        validation
    }
}
