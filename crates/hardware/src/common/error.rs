//! Configuration error definitions.
//!
//! The runahead tables have no runtime failure modes: every insert and query is a
//! total function of the address and the current table contents. The only errors
//! are raised while building a unit from its configuration, and they are reported
//! immediately rather than deferred to the first table access.

use thiserror::Error;

/// Errors raised while constructing runahead tables from configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The stalling-slice table was configured with no entries.
    #[error("stalling-slice table must have at least one entry")]
    ZeroSstEntries,

    /// The configuration document could not be deserialized.
    #[error("invalid runahead configuration: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}
