//! # Unit Components
//!
//! Fine-grained tests for each module of the crate, laid out like `src/`.

/// Unit tests for constants and error types.
pub mod common;
