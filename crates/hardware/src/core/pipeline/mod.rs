//! Pipeline-facing interfaces.
//!
//! The runahead tables sit beside an out-of-order pipeline rather than inside
//! it. This module holds the traits through which that pipeline hands
//! instructions to the tables.

/// Instruction handle trait consumed by the runahead tables.
pub mod traits;

pub use traits::DynInst;
