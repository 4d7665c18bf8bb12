//! Precise runahead execution tables.
//!
//! This crate implements the two predictive structures a runahead-capable
//! out-of-order core model consults on every instruction and branch event:
//! 1. **Stalling Slice Table:** An LRU set of instruction addresses that recently led to stalls.
//! 2. **Misprediction Table:** An 8×8 set-associative classifier of chronically mispredicted branches.
//! 3. **Unit:** [`PreUnit`], which owns both tables, applies the enable flags, and counts usage.
//! 4. **Configuration:** JSON-deserializable settings validated at construction.
//!
//! Both tables are plain values: single-threaded, synchronous, and allocation-free
//! after construction.

/// Common constants and error types.
pub mod common;
/// Runahead configuration (defaults, validation, JSON loading).
pub mod config;
/// Core-side components (pipeline traits, runahead tables).
pub mod core;
/// Runahead usage statistics.
pub mod stats;

/// Root configuration type; use `Config::default()` or `Config::from_json`.
pub use crate::config::Config;
/// Instruction handle consumed by the tables.
pub use crate::core::DynInst;
/// Runahead unit owning both tables.
pub use crate::core::PreUnit;
/// Misprediction table and its record outcome.
pub use crate::core::units::pre::{MispRecord, MispTable};
/// Stalling slice table.
pub use crate::core::units::pre::StallingSliceTable;
