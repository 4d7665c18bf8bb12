//! Tests for shared constants and error types.

/// Table geometry and threshold constants.
pub mod constants;
