//! Configuration System
//!
//! Layered configuration: built-in defaults, then the global config file (or
//! an explicit `--config` file), then `CIDLS__SECTION__KEY` environment
//! variables. CLI flags are applied on top by the caller.

use crate::error::ListingError;
use crate::listing::entry::CidVersion;
use crate::listing::palette::ColorMode;
use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CidlsConfig {
    /// Listing behavior
    #[serde(default)]
    pub listing: ListingConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Listing settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingConfig {
    /// CID version: 0 or 1
    #[serde(default = "default_cid_version")]
    pub cid_version: u8,

    /// When to colorize output
    #[serde(default)]
    pub color: ColorMode,

    /// Print order for results
    #[serde(default)]
    pub order: OutputOrder,

    /// Output format
    #[serde(default)]
    pub format: OutputFormat,
}

fn default_cid_version() -> u8 {
    1
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            cid_version: default_cid_version(),
            color: ColorMode::default(),
            order: OutputOrder::default(),
            format: OutputFormat::default(),
        }
    }
}

impl ListingConfig {
    pub fn cid_version(&self) -> Result<CidVersion, ListingError> {
        CidVersion::try_from(self.cid_version)
    }

    /// Validate listing configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.cid_version > 1 {
            return Err(format!(
                "cid_version must be 0 or 1, got {}",
                self.cid_version
            ));
        }
        Ok(())
    }
}

/// Order in which result lines are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputOrder {
    /// Listing order, once every entry is done
    #[default]
    Sorted,
    /// As each worker finishes
    Completion,
}

impl FromStr for OutputOrder {
    type Err = ListingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sorted" => Ok(OutputOrder::Sorted),
            "completion" => Ok(OutputOrder::Completion),
            other => Err(ListingError::ConfigError(format!(
                "Invalid order: {} (must be 'sorted' or 'completion')",
                other
            ))),
        }
    }
}

/// Output format for the listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = ListingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(ListingError::ConfigError(format!(
                "Invalid format: {} (must be 'text' or 'json')",
                other
            ))),
        }
    }
}

/// Configuration validation errors
#[derive(Debug, Clone)]
pub enum ValidationError {
    Listing(String),
    Logging(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Listing(msg) => write!(f, "Listing: {}", msg),
            ValidationError::Logging(msg) => write!(f, "Logging: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl CidlsConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(e) = self.listing.validate() {
            errors.push(ValidationError::Listing(e));
        }

        if self.logging.output == "file" && self.logging.file.is_none() {
            errors.push(ValidationError::Logging(
                "output 'file' requires a log file path".to_string(),
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
