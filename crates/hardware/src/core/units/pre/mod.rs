//! Precise runahead execution (PRE) tables.
//!
//! This module contains the two predictive tables consulted by a runahead-capable
//! out-of-order pipeline: the stalling slice table, which remembers instructions
//! that led to full-window stalls, and the misprediction table, which flags
//! branches that mispredict too often to be trusted during runahead.
//!
//! [`PreUnit`] bundles both tables the way a pipeline embeds them, gated by the
//! [`PreConfig`] enable flags and instrumented with [`PreStats`].

/// Set-associative classifier of high-misprediction branches.
pub mod misp_table;

/// LRU set of stalling-slice instruction addresses.
pub mod sst;

pub use self::misp_table::{MispCounters, MispRecord, MispTable};
pub use self::sst::StallingSliceTable;

use tracing::debug;

use crate::common::ConfigError;
use crate::config::PreConfig;
use crate::core::pipeline::DynInst;
use crate::stats::PreStats;

/// Runahead tables owned by one pipeline.
///
/// All operations are single-threaded and never fail once the unit is built.
/// When a table is disabled its queries answer `false` and its updates are
/// dropped, so callers can invoke the hooks unconditionally.
#[derive(Debug, Clone)]
pub struct PreUnit {
    /// Stalling slice table.
    sst: StallingSliceTable,
    /// Branch misprediction classifier.
    misp: MispTable,
    /// Stalling-slice tracking is active.
    sst_enabled: bool,
    /// Branch classification is active.
    branch_enabled: bool,
    /// Usage counters.
    stats: PreStats,
}

impl PreUnit {
    /// Creates the runahead tables described by `config`.
    ///
    /// Enabling branch classification also enables stalling-slice tracking.
    ///
    /// # Errors
    ///
    /// Returns any error reported by [`PreConfig::validate`].
    pub fn new(config: &PreConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        debug!(
            sst_entries = config.sst_entries,
            pre = config.pre_active(),
            pre_branch = config.branch_enabled,
            "building runahead tables"
        );

        Ok(Self {
            sst: StallingSliceTable::new(config.sst_entries)?,
            misp: MispTable::new(),
            sst_enabled: config.pre_active(),
            branch_enabled: config.branch_enabled,
            stats: PreStats::default(),
        })
    }

    /// Returns whether stalling-slice tracking is active.
    #[inline]
    pub const fn sst_enabled(&self) -> bool {
        self.sst_enabled
    }

    /// Returns whether branch classification is active.
    #[inline]
    pub const fn branch_enabled(&self) -> bool {
        self.branch_enabled
    }

    /// Marks an instruction as part of a stalling slice.
    pub fn on_stall<I: DynInst + ?Sized>(&mut self, inst: &I) {
        if !self.sst_enabled {
            return;
        }

        let before = self.sst.len();
        match self.sst.add_inst(inst) {
            Some(_) => {
                self.stats.sst_inserts += 1;
                self.stats.sst_evictions += 1;
            }
            None if self.sst.len() > before => self.stats.sst_inserts += 1,
            None => self.stats.sst_touches += 1,
        }
    }

    /// Checks whether an instruction belongs to a recent stalling slice.
    ///
    /// A hit refreshes the instruction's recency.
    pub fn in_stalling_slice<I: DynInst + ?Sized>(&mut self, inst: &I) -> bool {
        if !self.sst_enabled {
            return false;
        }

        self.stats.sst_queries += 1;
        let hit = self.sst.has_inst(inst);
        if hit {
            self.stats.sst_hits += 1;
        }
        hit
    }

    /// Records the outcome of a resolved branch.
    pub fn on_branch_resolved<I: DynInst + ?Sized>(&mut self, inst: &I) {
        if !self.branch_enabled {
            return;
        }

        self.stats.misp_records += 1;
        match self.misp.record_inst(inst) {
            MispRecord::Hit => self.stats.misp_hits += 1,
            MispRecord::Fill => self.stats.misp_fills += 1,
            MispRecord::Replace { .. } => self.stats.misp_replacements += 1,
        }
    }

    /// Checks whether a branch mispredicts often enough to be distrusted.
    pub fn is_high_misp_branch<I: DynInst + ?Sized>(&mut self, inst: &I) -> bool {
        if !self.branch_enabled {
            return false;
        }

        self.stats.misp_queries += 1;
        let high = self.misp.is_high_inst(inst);
        if high {
            self.stats.misp_high += 1;
        }
        high
    }

    /// Returns the stalling slice table.
    #[inline]
    pub const fn sst(&self) -> &StallingSliceTable {
        &self.sst
    }

    /// Returns the misprediction table.
    #[inline]
    pub const fn misp_table(&self) -> &MispTable {
        &self.misp
    }

    /// Returns the usage counters collected so far.
    #[inline]
    pub const fn stats(&self) -> &PreStats {
        &self.stats
    }
}
