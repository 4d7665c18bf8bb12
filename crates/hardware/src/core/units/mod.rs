//! Execution-side predictive units.
//!
//! This module contains the structures a pipeline consults alongside its
//! execution units. Currently that is the precise runahead execution unit,
//! with its stalling slice and misprediction tables.

/// Precise runahead execution tables (SST and misprediction table).
pub mod pre;
