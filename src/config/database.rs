//! Database credential clusters.
//!
//! One sub-record per logical database. The JSON keys keep their original
//! flat prefixes (`Db*`, `RRDb*`, `MojoDb*`, `WREISDb*`).

use serde::Deserialize;

/// Primary ("accord" / phonebook) database credentials.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DbConfig {
    #[serde(rename = "Dbuser", default)]
    pub user: String,
    #[serde(rename = "Dbname", default)]
    pub name: String,
    #[serde(rename = "Dbpass", default)]
    pub pass: String,
    #[serde(rename = "Dbhost", default)]
    pub host: String,
    #[serde(rename = "Dbport", default)]
    pub port: u16,
    #[serde(rename = "Dbtype", default)]
    pub db_type: String,
}

/// RentRoll database credentials. The "receipts" database shares this
/// cluster.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RentRollDbConfig {
    #[serde(rename = "RRDbuser", default)]
    pub user: String,
    #[serde(rename = "RRDbname", default)]
    pub name: String,
    #[serde(rename = "RRDbpass", default)]
    pub pass: String,
    #[serde(rename = "RRDbhost", default)]
    pub host: String,
    #[serde(rename = "RRDbport", default)]
    pub port: u16,
    #[serde(rename = "RRDbtype", default)]
    pub db_type: String,
}

/// Mojo database credentials.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MojoDbConfig {
    #[serde(rename = "MojoDbuser", default)]
    pub user: String,
    #[serde(rename = "MojoDbname", default)]
    pub name: String,
    #[serde(rename = "MojoDbpass", default)]
    pub pass: String,
    #[serde(rename = "MojoDbhost", default)]
    pub host: String,
    #[serde(rename = "MojoDbport", default)]
    pub port: u16,
    #[serde(rename = "MojoDbtype", default)]
    pub db_type: String,
    /// Address of the Mojo web service.
    #[serde(rename = "MojoWebAddr", default)]
    pub web_addr: String,
}

/// WREIS database credentials.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct WreisDbConfig {
    #[serde(rename = "WREISDbuser", default)]
    pub user: String,
    #[serde(rename = "WREISDbname", default)]
    pub name: String,
    #[serde(rename = "WREISDbpass", default)]
    pub pass: String,
    #[serde(rename = "WREISDbhost", default)]
    pub host: String,
    #[serde(rename = "WREISDbport", default)]
    pub port: u16,
    #[serde(rename = "WREISDbtype", default)]
    pub db_type: String,
}
