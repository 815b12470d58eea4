//! # Chaincode Configuration
//!
//! Read once at startup and handed to the router by value. Contracts never
//! read the environment themselves.

use cc_02_dispute_resolution::DisputeConfig;
use cc_03_geo_store::GeoConfig;
use std::env;
use thiserror::Error;

/// Complete chaincode configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChaincodeConfig {
    /// Dispute contract configuration.
    pub disputes: DisputeConfig,
    /// Geo store configuration.
    pub geo: GeoConfig,
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A boolean variable holds something other than true/false/1/0.
    #[error("{var} must be true or false, got {value:?}")]
    InvalidBool {
        /// Variable name
        var: &'static str,
        /// Rejected value
        value: String,
    },
}

impl ChaincodeConfig {
    /// Load configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `CC_ENFORCE_DEFENDANT_RESPONSE`: Require the defendant to respond
    ///   (default: true)
    /// - `CC_GEO_COLLECTIONS`: Comma-separated collection allow-list
    ///   (default: empty, any collection)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = lookup("CC_ENFORCE_DEFENDANT_RESPONSE") {
            config.disputes.enforce_defendant_response =
                parse_bool("CC_ENFORCE_DEFENDANT_RESPONSE", &value)?;
        }

        if let Some(value) = lookup("CC_GEO_COLLECTIONS") {
            config.geo.allowed_collections = value
                .split(',')
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .map(String::from)
                .collect();
        }

        Ok(config)
    }
}

fn parse_bool(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            var,
            value: value.to_string(),
        }),
    }
}
