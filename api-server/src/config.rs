//! Configuration module

use std::env;
use std::path::PathBuf;

use wdbc_core::constants::get_model_params_path;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,

    /// Environment (development, production)
    pub environment: String,

    /// Optional JSON file replacing the built-in model parameters
    pub model_params_path: Option<PathBuf>,

    /// Reject predictions whose input has non-numeric values
    pub strict_validation: bool,

    /// Upper bound on the length of a pasted CSV row
    pub max_bulk_input_len: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            environment: "development".to_string(),
            model_params_path: None,
            strict_validation: true,
            max_bulk_input_len: 4096,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),

            environment: env::var("ENVIRONMENT")
                .unwrap_or(defaults.environment),

            model_params_path: get_model_params_path(),

            strict_validation: env::var("STRICT_VALIDATION")
                .map(|s| parse_flag(&s))
                .unwrap_or(defaults.strict_validation),

            max_bulk_input_len: env::var("MAX_BULK_INPUT_LEN")
                .ok()
                .and_then(|n| n.parse().ok())
                .unwrap_or(defaults.max_bulk_input_len),
        }
    }
}

fn parse_flag(value: &str) -> bool {
    let value = value.trim().to_lowercase();
    value != "false" && value != "0" && value != "no"
}
