//! Configuration loading for the external-resources record.
//!
//! Uses serde_json to load the flat `config.json` schema shared across the
//! Accord suite. The JSON keys stay flat and case-sensitive (`Dbuser`,
//! `RRDbhost`, ...); the Rust model groups them into per-cluster sub-records
//! via `#[serde(flatten)]`, so the wire format is unchanged.

mod auth;
mod database;
mod env;
mod error;
mod repo;
mod s3;
mod smtp;
mod testers;

pub use auth::AuthConfig;
pub use database::{DbConfig, MojoDbConfig, RentRollDbConfig, WreisDbConfig};
pub use env::Environment;
pub use error::ConfigError;
pub use repo::RepoConfig;
pub use s3::S3Config;
pub use smtp::SmtpConfig;
pub use testers::TesterConfig;

use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Root external-resources record.
///
/// Every field has a default, so a partial config file leaves the remaining
/// fields zero-valued (`"GMT"` for the timezone). Unknown JSON keys are
/// ignored. Once loaded the record is read-only; components that want their
/// own copy clone it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ExternalResources {
    /// Deployment environment, stored as the integer `Env`.
    #[serde(rename = "Env", default)]
    pub env: Environment,
    /// Authentication service endpoint.
    #[serde(flatten)]
    pub auth: AuthConfig,
    /// Primary ("accord") database credentials.
    #[serde(flatten)]
    pub db: DbConfig,
    /// RentRoll database credentials, shared by "receipts".
    #[serde(flatten)]
    pub rr_db: RentRollDbConfig,
    /// Mojo database credentials and web address.
    #[serde(flatten)]
    pub mojo_db: MojoDbConfig,
    /// WREIS database credentials.
    #[serde(flatten)]
    pub wreis_db: WreisDbConfig,
    /// Outbound mail settings.
    #[serde(flatten)]
    pub smtp: SmtpConfig,
    /// S3 bucket for profile images.
    #[serde(flatten)]
    pub s3: S3Config,
    /// Artifactory credentials.
    #[serde(flatten)]
    pub repo: RepoConfig,
    /// Test-account credentials.
    #[serde(flatten)]
    pub testers: TesterConfig,
    /// Timezone name; defaults to "GMT" when absent from the file.
    #[serde(rename = "Timezone", default = "default_timezone")]
    pub timezone: String,
    /// Session timeout in minutes.
    #[serde(rename = "SessionTimeout", default)]
    pub session_timeout: i64,
    /// Handler for the web app where the url filepath is "/".
    #[serde(rename = "RootHandler", default)]
    pub root_handler: String,
    /// Key for encryption/decryption, must be 32 chars long.
    #[serde(rename = "CryptoKey", default)]
    pub crypto_key: String,
    /// Key for using the Google Maps API.
    #[serde(rename = "MapKey", default)]
    pub map_key: String,
}

fn default_timezone() -> String {
    "GMT".to_string()
}

impl Default for ExternalResources {
    fn default() -> Self {
        Self {
            env: Environment::default(),
            auth: AuthConfig::default(),
            db: DbConfig::default(),
            rr_db: RentRollDbConfig::default(),
            mojo_db: MojoDbConfig::default(),
            wreis_db: WreisDbConfig::default(),
            smtp: SmtpConfig::default(),
            s3: S3Config::default(),
            repo: RepoConfig::default(),
            testers: TesterConfig::default(),
            timezone: default_timezone(),
            session_timeout: 0,
            root_handler: String::new(),
            crypto_key: String::new(),
            map_key: String::new(),
        }
    }
}

impl ExternalResources {
    /// Load the record from a JSON file at the given path.
    ///
    /// Fails with `ConfigError::NotFound` if the path does not exist and
    /// `ConfigError::Parse` on malformed or type-mismatched JSON. Field
    /// contents are not validated; that is the caller's concern.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        let resources: ExternalResources = serde_json::from_str(&content)?;

        Ok(resources)
    }
}

#[cfg(test)]
mod tests;
