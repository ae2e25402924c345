//! Authentication service configuration.

use serde::Deserialize;

/// Endpoint of the authentication service used across the suite.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AuthConfig {
    #[serde(rename = "AuthNHost", default)]
    pub host: String,
    #[serde(rename = "AuthNType", default)]
    pub auth_type: String,
    #[serde(rename = "AuthNPort", default)]
    pub port: u16,
}
