//! Runahead statistics collection and reporting.
//!
//! This module tracks how the runahead tables are used. It provides:
//! 1. **Stalling-slice table:** Inserts, refreshes, evictions, and query hit rate.
//! 2. **Misprediction table:** Hits, fills, replacements, and classification results.

/// Runahead statistics structure.
///
/// Counters are updated by [`crate::core::units::pre::PreUnit`] as the host
/// pipeline drives it; derived rates never divide by zero.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PreStats {
    /// Addresses newly inserted into the stalling-slice table.
    pub sst_inserts: u64,
    /// Insertions of addresses that were already tracked.
    pub sst_touches: u64,
    /// Addresses evicted from the stalling-slice table.
    pub sst_evictions: u64,
    /// Stalling-slice membership queries.
    pub sst_queries: u64,
    /// Membership queries that found the address.
    pub sst_hits: u64,

    /// Resolved branches recorded in the misprediction table.
    pub misp_records: u64,
    /// Records that hit a resident branch.
    pub misp_hits: u64,
    /// Records that filled a previously unused way.
    pub misp_fills: u64,
    /// Records that replaced a resident branch.
    pub misp_replacements: u64,
    /// High-misprediction classification queries.
    pub misp_queries: u64,
    /// Queries that classified the branch as high-misprediction.
    pub misp_high: u64,
}

impl PreStats {
    /// Returns the fraction of stalling-slice queries that hit, in `[0, 1]`.
    pub const fn sst_hit_rate(&self) -> f64 {
        if self.sst_queries == 0 {
            0.0
        } else {
            self.sst_hits as f64 / self.sst_queries as f64
        }
    }

    /// Returns the fraction of classification queries answered high, in `[0, 1]`.
    pub const fn misp_high_rate(&self) -> f64 {
        if self.misp_queries == 0 {
            0.0
        } else {
            self.misp_high as f64 / self.misp_queries as f64
        }
    }

    /// Prints all runahead statistics to stdout.
    pub fn print(&self) {
        println!("\n==========================================================");
        println!("PRECISE RUNAHEAD STATISTICS");
        println!("==========================================================");
        println!("STALLING SLICE TABLE");
        println!("  sst.inserts            {}", self.sst_inserts);
        println!("  sst.touches            {}", self.sst_touches);
        println!("  sst.evictions          {}", self.sst_evictions);
        println!("  sst.queries            {}", self.sst_queries);
        println!(
            "  sst.hits               {} ({:.2}%)",
            self.sst_hits,
            self.sst_hit_rate() * 100.0
        );
        println!("----------------------------------------------------------");
        println!("MISPREDICTION TABLE");
        println!("  misp.records           {}", self.misp_records);
        println!("  misp.hits              {}", self.misp_hits);
        println!("  misp.fills             {}", self.misp_fills);
        println!("  misp.replacements      {}", self.misp_replacements);
        println!("  misp.queries           {}", self.misp_queries);
        println!(
            "  misp.high              {} ({:.2}%)",
            self.misp_high,
            self.misp_high_rate() * 100.0
        );
        println!("----------------------------------------------------------");
    }
}
