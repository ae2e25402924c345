//! Connection-string construction for the databases of the Accord suite.
//!
//! Builds the DSN text a data-access layer passes to its MySQL driver; this
//! module never contacts the network. Development strings assume a local
//! trust-authenticated connection and omit host and port; production strings
//! embed the full `tcp(host:port)` address.

mod error;

pub use error::DsnError;

use crate::config::{Environment, ExternalResources};
use tracing::warn;

const DSN_PARAMS: &str = "charset=utf8&parseTime=True";

/// Logical database names recognized by the builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalDb {
    /// Primary phonebook database.
    Accord,
    RentRoll,
    /// Shares the RentRoll cluster's credentials.
    Receipts,
    Mojo,
    Wreis,
}

impl LogicalDb {
    /// Case-insensitive lookup. Returns `None` for names with no dedicated
    /// credentials.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "accord" => Some(Self::Accord),
            "rentroll" => Some(Self::RentRoll),
            "receipts" => Some(Self::Receipts),
            "mojo" => Some(Self::Mojo),
            "wreis" => Some(Self::Wreis),
            _ => None,
        }
    }

    /// Database name embedded in the DSN.
    pub fn canonical_name(self) -> &'static str {
        match self {
            Self::Accord => "accord",
            Self::RentRoll => "rentroll",
            Self::Receipts => "receipts",
            Self::Mojo => "mojo",
            Self::Wreis => "wreis",
        }
    }
}

/// A built connection string, marking whether the requested name had
/// dedicated credentials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dsn {
    /// The name matched a known logical database.
    Known(String),
    /// No dedicated credentials exist for the requested name; this is a
    /// restrictive login string using only the primary username.
    Fallback(String),
}

impl Dsn {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Known(s) | Self::Fallback(s) => s,
        }
    }

    pub fn into_string(self) -> String {
        match self {
            Self::Known(s) | Self::Fallback(s) => s,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback(_))
    }
}

/// Build the string to use for opening a sql database.
///
/// `name` is matched case-insensitively against the known logical databases:
/// "accord" for the phonebook, "rentroll" and "receipts" for RentRoll,
/// "mojo", "wreis". Unrecognized names produce `Dsn::Fallback` rather than
/// an error so call sites can decide how to react; an environment other than
/// development or production is a configuration error.
pub fn build_connection_string(
    name: &str,
    resources: &ExternalResources,
) -> Result<Dsn, DsnError> {
    let Some(db) = LogicalDb::from_name(name) else {
        warn!(
            db = %name,
            "db is not recognized, a restrictive login string is returned"
        );
        let s = format!(
            "{}:@/{}?{}",
            resources.db.user,
            name.to_lowercase(),
            DSN_PARAMS
        );
        return Ok(Dsn::Fallback(s));
    };

    let (user, pass, host, port) = credentials(db, resources);
    let dbname = db.canonical_name();

    let s = match resources.env {
        Environment::Development => {
            // Local trust-authenticated connection; only the primary
            // database logs in with a password.
            if db == LogicalDb::Accord {
                format!("{}:{}@/{}?{}", user, pass, dbname, DSN_PARAMS)
            } else {
                format!("{}:@/{}?{}", user, dbname, DSN_PARAMS)
            }
        }
        Environment::Production => format!(
            "{}:{}@tcp({}:{})/{}?{}",
            user, pass, host, port, dbname, DSN_PARAMS
        ),
        Environment::Qa => return Err(DsnError::UnhandledEnvironment(resources.env)),
    };

    Ok(Dsn::Known(s))
}

/// Select the credential cluster for a known logical database.
fn credentials(db: LogicalDb, x: &ExternalResources) -> (&str, &str, &str, u16) {
    match db {
        LogicalDb::Accord => (&x.db.user, &x.db.pass, &x.db.host, x.db.port),
        LogicalDb::RentRoll | LogicalDb::Receipts => {
            (&x.rr_db.user, &x.rr_db.pass, &x.rr_db.host, x.rr_db.port)
        }
        LogicalDb::Mojo => (
            &x.mojo_db.user,
            &x.mojo_db.pass,
            &x.mojo_db.host,
            x.mojo_db.port,
        ),
        LogicalDb::Wreis => (
            &x.wreis_db.user,
            &x.wreis_db.pass,
            &x.wreis_db.host,
            x.wreis_db.port,
        ),
    }
}
