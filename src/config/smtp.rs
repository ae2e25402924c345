//! SMTP configuration.

use serde::Deserialize;

/// Outbound mail settings.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SmtpConfig {
    #[serde(rename = "SmtpHost", default)]
    pub host: String,
    #[serde(rename = "SmtpPort", default)]
    pub port: u16,
    #[serde(rename = "SmtpLogin", default)]
    pub login: String,
    #[serde(rename = "SmtpPass", default)]
    pub pass: String,
}
