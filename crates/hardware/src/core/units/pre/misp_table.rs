//! Misprediction Table.
//!
//! Classifies branches whose long-run misprediction rate is high enough that
//! runahead should treat them as unreliable. The table is 8-way set
//! associative with 8 rows, indexed by the PC with the alignment bit dropped.
//! Each way keeps a pair of saturating counters: references and
//! mispredictions among those references. When the reference counter reaches
//! the ceiling both counters are halved, which preserves their ratio while
//! discounting old history.
//!
//! Replacement within a row is true LRU, kept as a rank permutation (0 = MRU,
//! 7 = LRU) rather than a linked list, so the whole table is a fixed array with
//! no allocation after construction.
//!
//! # Performance
//!
//! - **Time Complexity:**
//!   - `record()`: O(W) where W is the number of ways
//!   - `is_high_misprediction()`: O(W)
//! - **Space Complexity:** O(R × W), fixed at 64 ways
//! - **Hardware Cost:** Low - 3-bit rank, two 9-bit counters and a tag per way

use tracing::trace;

use crate::common::constants::{
    INST_ALIGN_SHIFT, MISP_HIGH_MIN_REFS, MISP_HIGH_RATE_SHIFT, MISP_LRU_RANK, MISP_MAX_REF,
    MISP_ROW_MASK, MISP_ROWS, MISP_WAYS,
};
use crate::core::pipeline::DynInst;

/// A single way of the misprediction table.
#[derive(Clone, Copy, Debug, Default)]
struct MispCell {
    /// Branch address held by this way.
    pc: u64,
    /// LRU stack position within the row (0 = MRU).
    rank: u8,
    /// References counted since the last halving.
    refs: u16,
    /// Mispredictions among the counted references.
    misps: u16,
    /// Whether this way has ever been filled.
    valid: bool,
}

impl MispCell {
    /// Returns whether the counters meet the high-misprediction threshold.
    #[inline]
    const fn is_high(&self) -> bool {
        self.refs >= MISP_HIGH_MIN_REFS && self.misps >= self.refs >> MISP_HIGH_RATE_SHIFT
    }
}

/// One set of the table.
type MispRow = [MispCell; MISP_WAYS];

/// Snapshot of the counters held for a resident branch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MispCounters {
    /// References counted since the last halving.
    pub refs: u16,
    /// Mispredictions among the counted references.
    pub misps: u16,
}

/// Effect of [`MispTable::record`] on the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MispRecord {
    /// The branch was resident; its counters were updated.
    Hit,
    /// The branch claimed a way that had never been filled.
    Fill,
    /// The branch replaced the LRU way of its row.
    Replace {
        /// Address of the branch that was evicted.
        victim: u64,
    },
}

/// Set-associative misprediction classifier.
#[derive(Clone, Debug)]
pub struct MispTable {
    /// Rows of ways; ranks within each row form a permutation of `0..MISP_WAYS`.
    table: [MispRow; MISP_ROWS],
}

impl MispTable {
    /// Creates an empty table with ranks assigned in way order.
    pub fn new() -> Self {
        let mut table = [[MispCell::default(); MISP_WAYS]; MISP_ROWS];
        for row in &mut table {
            for (way, cell) in row.iter_mut().enumerate() {
                cell.rank = way as u8;
            }
        }
        Self { table }
    }

    /// Returns the row a branch address maps to.
    #[inline(always)]
    pub const fn row_index(pc: u64) -> usize {
        ((pc >> INST_ALIGN_SHIFT) & MISP_ROW_MASK) as usize
    }

    /// Records the outcome of a resolved branch.
    ///
    /// On a hit the counters are bumped (and halved at the ceiling) and the way
    /// becomes MRU. On a miss the single LRU way of the row is overwritten with
    /// fresh counters and becomes MRU.
    ///
    /// # Arguments
    ///
    /// * `pc` - Address of the branch.
    /// * `mispredicted` - Whether the branch was mispredicted.
    pub fn record(&mut self, pc: u64, mispredicted: bool) -> MispRecord {
        let row = &mut self.table[Self::row_index(pc)];

        if let Some(way) = Self::find(row, pc) {
            let cell = &mut row[way];
            cell.refs += 1;
            if mispredicted {
                cell.misps += 1;
            }
            if cell.refs == MISP_MAX_REF {
                cell.refs >>= 1;
                cell.misps >>= 1;
            }
            Self::promote(row, way);
            return MispRecord::Hit;
        }

        // The victim is fixed before any rank moves, so a miss replaces exactly one way.
        let victim = (1..MISP_WAYS).fold(0, |lru, way| {
            if row[way].rank > row[lru].rank {
                way
            } else {
                lru
            }
        });
        debug_assert_eq!(row[victim].rank, MISP_LRU_RANK);
        let old = row[victim];
        row[victim] = MispCell {
            pc,
            rank: old.rank,
            refs: 1,
            misps: u16::from(mispredicted),
            valid: true,
        };
        Self::promote(row, victim);

        if old.valid {
            trace!("misp: replace {:#x} with {pc:#x}", old.pc);
            MispRecord::Replace { victim: old.pc }
        } else {
            MispRecord::Fill
        }
    }

    /// Records a resolved branch instruction.
    ///
    /// See [`Self::record`].
    #[inline]
    pub fn record_inst<I: DynInst + ?Sized>(&mut self, inst: &I) -> MispRecord {
        self.record(inst.pc(), inst.mispredicted())
    }

    /// Queries whether a branch has a high misprediction rate.
    ///
    /// True once the branch has at least 64 counted references and at least
    /// one in eight of them mispredicted. Non-resident branches are never high.
    /// The query does not affect replacement order.
    pub fn is_high_misprediction(&self, pc: u64) -> bool {
        let row = &self.table[Self::row_index(pc)];
        Self::find(row, pc).is_some_and(|way| row[way].is_high())
    }

    /// Queries a branch instruction.
    ///
    /// See [`Self::is_high_misprediction`].
    #[inline]
    pub fn is_high_inst<I: DynInst + ?Sized>(&self, inst: &I) -> bool {
        self.is_high_misprediction(inst.pc())
    }

    /// Returns the counters of a resident branch, or `None` if it is not resident.
    pub fn counters(&self, pc: u64) -> Option<MispCounters> {
        let row = &self.table[Self::row_index(pc)];
        Self::find(row, pc).map(|way| MispCounters {
            refs: row[way].refs,
            misps: row[way].misps,
        })
    }

    /// Returns the LRU ranks of a row in way order.
    ///
    /// # Panics
    ///
    /// Panics if `row >= MISP_ROWS`.
    pub fn row_ranks(&self, row: usize) -> [u8; MISP_WAYS] {
        self.table[row].map(|cell| cell.rank)
    }

    /// Finds the valid way tagged with `pc`.
    #[inline]
    fn find(row: &MispRow, pc: u64) -> Option<usize> {
        row.iter().position(|cell| cell.valid && cell.pc == pc)
    }

    /// Moves `way` to rank 0, shifting every way that was more recent down by one.
    #[inline]
    fn promote(row: &mut MispRow, way: usize) {
        let old_rank = row[way].rank;
        for cell in row.iter_mut() {
            if cell.rank < old_rank {
                cell.rank += 1;
            }
        }
        row[way].rank = 0;
    }
}

impl Default for MispTable {
    fn default() -> Self {
        Self::new()
    }
}
