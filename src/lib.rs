//! Naukri-Harvest: a browser-driven job listing scraper
//!
//! This crate drives a headless Chrome session against the Naukri job search
//! site, paginates listing pages, opens each job card's detail page, extracts
//! a fixed set of fields, and writes filtered results plus a skill-frequency
//! summary to CSV files.

pub mod browser;
pub mod config;
pub mod output;
pub mod record;
pub mod scraper;

use thiserror::Error;

/// Main error type for Naukri-Harvest operations
#[derive(Debug, Error)]
pub enum HarvestError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Browser error: {0}")]
    Browser(String),

    #[error("Navigation failed for {url}: {message}")]
    Navigation { url: String, message: String },

    #[error("Timed out waiting for selector '{selector}'")]
    WaitTimeout { selector: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid filter pattern: {0}")]
    FilterPattern(#[from] regex::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

// headless_chrome surfaces its failures as anyhow errors; flatten them at the
// session boundary so the rest of the crate stays on HarvestError.
impl From<anyhow::Error> for HarvestError {
    fn from(err: anyhow::Error) -> Self {
        HarvestError::Browser(err.to_string())
    }
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for Naukri-Harvest operations
pub type Result<T> = std::result::Result<T, HarvestError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use record::JobRecord;
pub use scraper::PageOutcome;
