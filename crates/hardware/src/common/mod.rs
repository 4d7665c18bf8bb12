//! Common utilities and types used throughout the runahead tables.
//!
//! This module provides the building blocks shared by every table. It includes:
//! 1. **Constants:** Table geometry, saturation ceiling, and classification thresholds.
//! 2. **Error Handling:** Configuration errors reported at construction time.

/// Common constants used throughout the tables.
pub mod constants;

/// Configuration error types.
pub mod error;

pub use constants::{MISP_ROWS, MISP_WAYS};
pub use error::ConfigError;
