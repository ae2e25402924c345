//! Deployment environment flag.

use serde::Deserialize;
use std::fmt;

/// Deployment environment, stored in `config.json` as the integer `Env`.
///
/// Only development and production carry database connection conventions;
/// QA is recognized by the loader but rejected by the DSN builder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "u8")]
pub enum Environment {
    /// Local development; databases use trust-authenticated local sockets.
    #[default]
    Development,
    /// Production; databases are reached over tcp with full credentials.
    Production,
    /// QA.
    Qa,
}

impl TryFrom<u8> for Environment {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Development),
            1 => Ok(Self::Production),
            2 => Ok(Self::Qa),
            other => Err(format!("unknown environment value: {}", other)),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Development => "development",
            Self::Production => "production",
            Self::Qa => "QA",
        };
        f.write_str(name)
    }
}
