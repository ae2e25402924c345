//! Artifact repository configuration.

use serde::Deserialize;

/// Artifactory credentials.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RepoConfig {
    #[serde(rename = "RepoUser", default)]
    pub user: String,
    #[serde(rename = "RepoPass", default)]
    pub pass: String,
    #[serde(rename = "RepoURL", default)]
    pub url: String,
}
