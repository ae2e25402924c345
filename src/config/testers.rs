//! Test-account configuration.

use serde::Deserialize;

/// Credentials for the two standing tester accounts.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TesterConfig {
    #[serde(rename = "Tester1Name", default)]
    pub tester1_name: String,
    #[serde(rename = "Tester1Pass", default)]
    pub tester1_pass: String,
    #[serde(rename = "Tester2Name", default)]
    pub tester2_name: String,
    #[serde(rename = "Tester2Pass", default)]
    pub tester2_pass: String,
}
