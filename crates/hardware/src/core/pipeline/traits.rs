//! Pipeline Instruction Interfaces.
//!
//! This module defines the view of a dynamic instruction that the runahead
//! tables consume. The host pipeline owns its instruction representation; the
//! tables only read the two fields below and never retain or mutate the handle.

/// Read-only view of an in-flight (dynamic) instruction.
///
/// Implemented by whatever the host pipeline uses to represent retired,
/// replayed, or resolved instructions.
pub trait DynInst {
    /// Returns the instruction address.
    fn pc(&self) -> u64;

    /// Returns whether this instruction is a branch that was mispredicted.
    ///
    /// Only consulted for resolved branches; other instructions may return `false`.
    fn mispredicted(&self) -> bool;
}

impl<T: DynInst + ?Sized> DynInst for &T {
    #[inline(always)]
    fn pc(&self) -> u64 {
        (**self).pc()
    }

    #[inline(always)]
    fn mispredicted(&self) -> bool {
        (**self).mispredicted()
    }
}
