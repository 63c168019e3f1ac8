//! Runtime configuration loaded from environment variables.
//!
//! ## Variables
//!
//! - `AGENCY_NAME` - Name given to agencies built with
//!   [`Agency::from_config`](crate::domain::Agency::from_config)
//!   (default: `Realty Agency`, 1-30 characters)
//! - `RUST_LOG` - Log filter directive (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//!
//! A `.env` file in the working directory can supply any of these; call
//! [`load_dotenv`] before [`load_from_env`] to read it.

use anyhow::{Context, Result};
use std::env;

use crate::domain::rules::{MAX_AGENCY_NAME_LENGTH, MIN_AGENCY_NAME_LENGTH};

pub const DEFAULT_AGENCY_NAME: &str = "Realty Agency";

/// Library configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub agency_name: String,
    pub log_level: String,
    pub log_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            agency_name: DEFAULT_AGENCY_NAME.to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
        }
    }
}

impl Config {
    /// Reads configuration from environment variables, falling back to defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but is not valid unicode.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let agency_name = read_var("AGENCY_NAME")?.unwrap_or(defaults.agency_name);
        let log_level = read_var("RUST_LOG")?.unwrap_or(defaults.log_level);
        let log_format = read_var("LOG_FORMAT")?.unwrap_or(defaults.log_format);

        Ok(Self {
            agency_name,
            log_level,
            log_format,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `agency_name` is outside the agency name length bounds
    /// - `log_format` is not `text` or `json`
    pub fn validate(&self) -> Result<()> {
        let name_length = self.agency_name.chars().count() as u64;
        if !(MIN_AGENCY_NAME_LENGTH..=MAX_AGENCY_NAME_LENGTH).contains(&name_length) {
            anyhow::bail!(
                "AGENCY_NAME must be {}-{} characters, got '{}'",
                MIN_AGENCY_NAME_LENGTH,
                MAX_AGENCY_NAME_LENGTH,
                self.agency_name
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        Ok(())
    }

    pub fn is_json_logging(&self) -> bool {
        self.log_format == "json"
    }

    /// Logs the loaded configuration.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Agency name: {}", self.agency_name);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

fn read_var(key: &str) -> Result<Option<String>> {
    match env::var(key) {
        Ok(value) => Ok(Some(value)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(e).with_context(|| format!("{key} is not valid unicode")),
    }
}

/// Loads variables from a `.env` file into the process environment.
///
/// Returns `false` when no file was found; other failures are errors.
pub fn load_dotenv() -> Result<bool> {
    match dotenvy::dotenv() {
        Ok(_) => Ok(true),
        Err(e) if e.not_found() => Ok(false),
        Err(e) => Err(e).context("Failed to read .env file"),
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable cannot be read or validation fails.
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
