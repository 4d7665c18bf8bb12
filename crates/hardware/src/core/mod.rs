//! Core-side components.
//!
//! This module contains the pipeline interfaces the tables consume and the
//! units that implement them.

/// Pipeline-facing traits (instruction handle).
pub mod pipeline;

/// Predictive units (precise runahead tables).
pub mod units;

pub use self::pipeline::DynInst;
pub use self::units::pre::PreUnit;
