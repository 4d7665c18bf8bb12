//! Global Table Constants.
//!
//! This module defines the fixed geometry and thresholds of the runahead tables. It includes:
//! 1. **Instruction Constants:** Alignment assumed when hashing a PC into a table row.
//! 2. **Misprediction Table Geometry:** Rows, ways, and the counter saturation ceiling.
//! 3. **Classification Thresholds:** Warm-up reference count and misprediction rate.

/// Number of low PC bits dropped before indexing (2-byte instruction alignment).
pub const INST_ALIGN_SHIFT: u32 = 1;

/// Number of rows (sets) in the misprediction table.
pub const MISP_ROWS: usize = 8;

/// Number of ways per misprediction table row.
pub const MISP_WAYS: usize = 8;

/// Mask applied to the shifted PC to select a misprediction table row.
pub const MISP_ROW_MASK: u64 = (MISP_ROWS - 1) as u64;

/// Rank held by the least-recently-used way of a row.
pub const MISP_LRU_RANK: u8 = (MISP_WAYS - 1) as u8;

/// Reference count at which both counters of a way are halved.
pub const MISP_MAX_REF: u16 = 256;

/// Minimum number of references before a branch can be classified.
pub const MISP_HIGH_MIN_REFS: u16 = 64;

/// A branch is high-misprediction when `misps >= refs >> MISP_HIGH_RATE_SHIFT` (rate 1/8).
pub const MISP_HIGH_RATE_SHIFT: u32 = 3;

/// Default number of stalling-slice table entries.
pub const DEFAULT_SST_ENTRIES: usize = 128;
