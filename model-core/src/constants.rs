//! Central Configuration Constants
//!
//! Single source of truth for configuration defaults shared by the CLI and
//! the HTTP service.

use std::path::PathBuf;

/// Version tag stamped on every prediction made with the built-in tables
pub const MODEL_VERSION: &str = "1.0.0";

/// Crate version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// App name
pub const APP_NAME: &str = "WDBC Classifier";

/// Environment variable pointing at a JSON parameter file
pub const MODEL_PARAMS_ENV: &str = "WDBC_MODEL_PARAMS";

/// Default log filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "info";

// ============================================
// Helper functions to read from env with fallback
// ============================================

/// Parameter file from the environment, if any
pub fn get_model_params_path() -> Option<PathBuf> {
    std::env::var(MODEL_PARAMS_ENV)
        .ok()
        .filter(|s| !s.trim().is_empty())
        .map(PathBuf::from)
}
