//! External-resource configuration for the Accord suite.
//!
//! Loads the flat `config.json` schema shared across the suite into a typed
//! record and builds the connection strings that data-access layers pass to
//! their MySQL driver. The record is loaded once at startup and treated as
//! read-only afterwards; this crate never opens a connection itself.

pub mod config;
pub mod dsn;

pub use config::{ConfigError, Environment, ExternalResources};
pub use dsn::{Dsn, DsnError, LogicalDb, build_connection_string};
