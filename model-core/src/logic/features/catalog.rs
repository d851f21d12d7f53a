//! Feature Catalog
//!
//! Descriptive metadata for the 30 WDBC features, consumed by collaborators
//! that render input forms. The classifier itself only needs the keys.

use serde::{Deserialize, Serialize};

use super::layout::FEATURE_COUNT;

// ============================================================================
// CATEGORY / IMPORTANCE
// ============================================================================

/// Which statistic of the nucleus measurement a feature carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureCategory {
    /// Average over all nuclei in the image
    Mean,
    /// Standard error of the measurement
    Se,
    /// Mean of the three largest values
    Worst,
}

impl FeatureCategory {
    pub const ALL: [FeatureCategory; 3] = [Self::Mean, Self::Se, Self::Worst];

    pub fn as_str(&self) -> &'static str {
        match self {
            FeatureCategory::Mean => "mean",
            FeatureCategory::Se => "se",
            FeatureCategory::Worst => "worst",
        }
    }

    /// Key prefix used by features in this category
    pub fn prefix(&self) -> &'static str {
        match self {
            FeatureCategory::Mean => "mean_",
            FeatureCategory::Se => "se_",
            FeatureCategory::Worst => "worst_",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            FeatureCategory::Mean => "Mean Features",
            FeatureCategory::Se => "Standard Error Features",
            FeatureCategory::Worst => "Worst Features",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            FeatureCategory::Mean => "Average values of cell nucleus measurements",
            FeatureCategory::Se => "Standard error values indicating measurement variability",
            FeatureCategory::Worst => "Largest (worst) values found in the cell nucleus",
        }
    }

    /// Category of an arbitrary key, by prefix
    pub fn of_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| key.starts_with(c.prefix()))
    }
}

impl std::fmt::Display for FeatureCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for FeatureCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mean" => Ok(Self::Mean),
            "se" => Ok(Self::Se),
            "worst" => Ok(Self::Worst),
            other => Err(format!("unknown feature category: {}", other)),
        }
    }
}

/// Rough clinical relevance tier shown next to each input
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImportanceTier {
    Low,
    Medium,
    High,
    VeryHigh,
}

impl ImportanceTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImportanceTier::Low => "low",
            ImportanceTier::Medium => "medium",
            ImportanceTier::High => "high",
            ImportanceTier::VeryHigh => "very_high",
        }
    }
}

impl std::fmt::Display for ImportanceTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ImportanceTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('-', "_").as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            "very_high" => Ok(Self::VeryHigh),
            other => Err(format!("unknown importance tier: {}", other)),
        }
    }
}

// ============================================================================
// CATALOG ENTRIES
// ============================================================================

/// One catalog row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeatureSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub category: FeatureCategory,
    pub unit: &'static str,
    pub importance: ImportanceTier,
}

const fn spec(
    key: &'static str,
    label: &'static str,
    description: &'static str,
    category: FeatureCategory,
    unit: &'static str,
    importance: ImportanceTier,
) -> FeatureSpec {
    FeatureSpec { key, label, description, category, unit, importance }
}

use FeatureCategory::{Mean, Se, Worst};
use ImportanceTier::{High, Low, Medium, VeryHigh};

/// Catalog in layout order
pub static FEATURE_CATALOG: [FeatureSpec; FEATURE_COUNT] = [
    spec("mean_radius", "Mean Radius", "Mean of distances from center to points on the perimeter", Mean, "pixels", High),
    spec("mean_texture", "Mean Texture", "Standard deviation of gray-scale values", Mean, "unitless", Medium),
    spec("mean_perimeter", "Mean Perimeter", "Mean size of the core tumor", Mean, "pixels", High),
    spec("mean_area", "Mean Area", "Mean area of the tumor", Mean, "pixels²", High),
    spec("mean_smoothness", "Mean Smoothness", "Mean of local variation in radius lengths", Mean, "unitless", Medium),
    spec("mean_compactness", "Mean Compactness", "Mean of perimeter² / area - 1.0", Mean, "unitless", High),
    spec("mean_concavity", "Mean Concavity", "Mean of severity of concave portions of the contour", Mean, "unitless", High),
    spec("mean_concave_points", "Mean Concave Points", "Mean for number of concave portions of the contour", Mean, "count", VeryHigh),
    spec("mean_symmetry", "Mean Symmetry", "Mean symmetry of the cell nucleus", Mean, "unitless", Medium),
    spec("mean_fractal_dimension", "Mean Fractal Dimension", "Mean for \"coastline approximation\" - 1", Mean, "unitless", Low),

    spec("se_radius", "SE Radius", "Standard error for the mean of distances from center to points on the perimeter", Se, "pixels", Medium),
    spec("se_texture", "SE Texture", "Standard error for standard deviation of gray-scale values", Se, "unitless", Low),
    spec("se_perimeter", "SE Perimeter", "Standard error for perimeter", Se, "pixels", Medium),
    spec("se_area", "SE Area", "Standard error for area", Se, "pixels²", Medium),
    spec("se_smoothness", "SE Smoothness", "Standard error for smoothness", Se, "unitless", Low),
    spec("se_compactness", "SE Compactness", "Standard error for compactness", Se, "unitless", Medium),
    spec("se_concavity", "SE Concavity", "Standard error for concavity", Se, "unitless", Medium),
    spec("se_concave_points", "SE Concave Points", "Standard error for concave points", Se, "count", High),
    spec("se_symmetry", "SE Symmetry", "Standard error for symmetry", Se, "unitless", Low),
    spec("se_fractal_dimension", "SE Fractal Dimension", "Standard error for fractal dimension", Se, "unitless", Low),

    spec("worst_radius", "Worst Radius", "Worst (largest) radius", Worst, "pixels", VeryHigh),
    spec("worst_texture", "Worst Texture", "Worst texture", Worst, "unitless", Medium),
    spec("worst_perimeter", "Worst Perimeter", "Worst perimeter", Worst, "pixels", VeryHigh),
    spec("worst_area", "Worst Area", "Worst area", Worst, "pixels²", VeryHigh),
    spec("worst_smoothness", "Worst Smoothness", "Worst smoothness", Worst, "unitless", Medium),
    spec("worst_compactness", "Worst Compactness", "Worst compactness", Worst, "unitless", High),
    spec("worst_concavity", "Worst Concavity", "Worst concavity", Worst, "unitless", High),
    spec("worst_concave_points", "Worst Concave Points", "Worst concave points", Worst, "count", VeryHigh),
    spec("worst_symmetry", "Worst Symmetry", "Worst symmetry", Worst, "unitless", Medium),
    spec("worst_fractal_dimension", "Worst Fractal Dimension", "Worst fractal dimension", Worst, "unitless", Low),
];

// ============================================================================
// LOOKUPS
// ============================================================================

/// Get a catalog entry by key
pub fn by_key(key: &str) -> Option<&'static FeatureSpec> {
    FEATURE_CATALOG.iter().find(|f| f.key == key)
}

/// All entries of a category, in layout order
pub fn by_category(category: FeatureCategory) -> Vec<&'static FeatureSpec> {
    FEATURE_CATALOG.iter().filter(|f| f.category == category).collect()
}

/// All entries of an importance tier, in layout order
pub fn by_importance(importance: ImportanceTier) -> Vec<&'static FeatureSpec> {
    FEATURE_CATALOG.iter().filter(|f| f.importance == importance).collect()
}

/// Catalog narrowed by category and/or importance tier, in layout order
pub fn filtered(category: Option<FeatureCategory>, importance: Option<ImportanceTier>) -> Vec<&'static FeatureSpec> {
    match (category, importance) {
        (Some(c), Some(i)) => by_category(c).into_iter().filter(|f| f.importance == i).collect(),
        (Some(c), None) => by_category(c),
        (None, Some(i)) => by_importance(i),
        (None, None) => FEATURE_CATALOG.iter().collect(),
    }
}

/// Per-category overview
#[derive(Debug, Clone, Serialize)]
pub struct CategorySummary {
    pub category: FeatureCategory,
    pub name: &'static str,
    pub description: &'static str,
    pub count: usize,
}

pub fn category_summaries() -> Vec<CategorySummary> {
    FeatureCategory::ALL
        .iter()
        .map(|&category| CategorySummary {
            category,
            name: category.display_name(),
            description: category.description(),
            count: by_category(category).len(),
        })
        .collect()
}
