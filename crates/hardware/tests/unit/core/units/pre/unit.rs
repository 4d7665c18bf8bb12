//! Runahead Unit Tests.
//!
//! Verifies that `PreUnit` applies the enable flags, forwards to the right
//! table, and keeps its statistics consistent with what the tables did.

use pretty_assertions::assert_eq;
use runahead_core::PreUnit;
use runahead_core::common::ConfigError;
use runahead_core::config::PreConfig;
use runahead_core::stats::PreStats;

use crate::common::builder::instruction::{branch, inst};
use crate::common::harness::TestContext;

fn config(enabled: bool, branch_enabled: bool, sst_entries: usize) -> PreConfig {
    PreConfig {
        enabled,
        branch_enabled,
        sst_entries,
    }
}

// ══════════════════════════════════════════════════════════
// 1. Construction
// ══════════════════════════════════════════════════════════

#[test]
fn zero_sst_entries_fail_fast() {
    assert_eq!(
        PreUnit::new(&config(true, false, 0)).err(),
        Some(ConfigError::ZeroSstEntries)
    );
}

#[test]
fn zero_sst_entries_fail_even_when_disabled() {
    assert!(PreUnit::new(&config(false, false, 0)).is_err());
}

#[test]
fn sst_uses_configured_capacity() {
    let ctx = TestContext::with_config(&config(true, false, 16));
    assert_eq!(ctx.unit.sst().capacity(), 16);
}

#[test]
fn branch_mode_implies_sst() {
    let ctx = TestContext::with_config(&config(false, true, 8));
    assert!(ctx.unit.sst_enabled());
    assert!(ctx.unit.branch_enabled());
}

#[test]
fn pre_alone_leaves_branches_off() {
    let ctx = TestContext::with_config(&config(true, false, 8));
    assert!(ctx.unit.sst_enabled());
    assert!(!ctx.unit.branch_enabled());
}

// ══════════════════════════════════════════════════════════
// 2. Disabled tables
// ══════════════════════════════════════════════════════════

#[test]
fn disabled_unit_ignores_everything() {
    let mut ctx = TestContext::with_config(&config(false, false, 8));
    ctx.stall_on(&[0x100, 0x104]);
    assert!(!ctx.in_slice(0x100));
    ctx.resolve(0x200, 64, 64);
    assert!(!ctx.high(0x200));

    assert!(ctx.unit.sst().is_empty());
    assert_eq!(ctx.unit.misp_table().counters(0x200), None);
    assert_eq!(ctx.unit.stats(), &PreStats::default());
}

#[test]
fn branch_hooks_ignored_without_branch_mode() {
    let mut ctx = TestContext::with_config(&config(true, false, 8));
    ctx.resolve(0x200, 64, 64);
    assert!(!ctx.high(0x200));
    assert_eq!(ctx.unit.misp_table().counters(0x200), None);

    ctx.stall_on(&[0x100]);
    assert!(ctx.in_slice(0x100));
}

// ══════════════════════════════════════════════════════════
// 3. Statistics
// ══════════════════════════════════════════════════════════

#[test]
fn sst_stats_track_inserts_touches_and_evictions() {
    let mut ctx = TestContext::with_config(&config(true, false, 2));
    ctx.stall_on(&[0x10, 0x20, 0x10, 0x30]);
    assert!(ctx.in_slice(0x10));
    assert!(!ctx.in_slice(0x20));

    let s = ctx.unit.stats();
    assert_eq!(s.sst_inserts, 3);
    assert_eq!(s.sst_touches, 1);
    assert_eq!(s.sst_evictions, 1);
    assert_eq!(s.sst_queries, 2);
    assert_eq!(s.sst_hits, 1);
    assert!((s.sst_hit_rate() - 0.5).abs() < f64::EPSILON);
}

#[test]
fn misp_stats_track_table_outcomes() {
    let mut ctx = TestContext::new();
    // Nine branches in one row: eight fills, then one replacement.
    for i in 0..9 {
        ctx.unit.on_branch_resolved(&branch(0x1000 + 16 * i, true));
    }
    ctx.unit.on_branch_resolved(&branch(0x1000 + 16 * 8, false));
    assert!(!ctx.high(0x1000 + 16 * 8));

    let s = ctx.unit.stats();
    assert_eq!(s.misp_records, 10);
    assert_eq!(s.misp_fills, 8);
    assert_eq!(s.misp_replacements, 1);
    assert_eq!(s.misp_hits, 1);
    assert_eq!(s.misp_queries, 1);
    assert_eq!(s.misp_high, 0);
}

// ══════════════════════════════════════════════════════════
// 4. End-to-end
// ══════════════════════════════════════════════════════════

#[test]
fn stalling_slice_scenario() {
    let (a, b, c, d, e, f) = (0xA0, 0xB0, 0xC0, 0xD0, 0xE0, 0xF0);
    let mut ctx = TestContext::with_config(&config(true, false, 4));

    ctx.stall_on(&[a, b, c, d, e]);
    assert_eq!(ctx.unit.sst().iter().collect::<Vec<_>>(), vec![e, d, c, b]);

    assert!(ctx.in_slice(b));
    assert_eq!(ctx.unit.sst().iter().collect::<Vec<_>>(), vec![b, e, d, c]);

    ctx.stall_on(&[f]);
    assert!(!ctx.in_slice(c));
    assert!(!ctx.in_slice(a));
    assert_eq!(ctx.unit.stats().sst_evictions, 2);
}

#[test]
fn high_misprediction_scenario() {
    let mut ctx = TestContext::new();
    ctx.resolve(0x4000, 64, 64);
    assert!(ctx.high(0x4000));

    ctx.resolve(0x4100, 64, 7);
    assert!(!ctx.high(0x4100));

    ctx.resolve(0x4200, 64, 8);
    assert!(ctx.high(0x4200));

    assert_eq!(ctx.unit.stats().misp_high, 2);
    assert!((ctx.unit.stats().misp_high_rate() - 2.0 / 3.0).abs() < 1e-9);
}

#[test]
fn sst_and_misp_table_do_not_interact() {
    let mut ctx = TestContext::new();
    ctx.stall_on(&[0x4000]);
    assert_eq!(ctx.unit.misp_table().counters(0x4000), None);

    ctx.unit.on_branch_resolved(&branch(0x5000, true));
    assert!(!ctx.unit.in_stalling_slice(&inst(0x5000)));
}
