//! DSN builder error types.

use crate::config::Environment;
use thiserror::Error;

/// Connection-string construction error.
#[derive(Debug, Error)]
pub enum DsnError {
    /// The configured environment has no connection conventions. The caller
    /// decides whether this aborts the application.
    #[error("unhandled configuration environment: {0}")]
    UnhandledEnvironment(Environment),
}
