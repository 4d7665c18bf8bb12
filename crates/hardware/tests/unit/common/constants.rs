//! # Constants Tests
//!
//! Checks the fixed table geometry and the relationships between thresholds.

use runahead_core::common::constants::*;

#[test]
fn test_misp_geometry() {
    assert_eq!(MISP_ROWS, 8);
    assert_eq!(MISP_WAYS, 8);
    assert!(MISP_ROWS.is_power_of_two());
    assert_eq!(MISP_ROW_MASK, 7);
    assert_eq!(MISP_LRU_RANK as usize, MISP_WAYS - 1);
}

#[test]
fn test_thresholds() {
    assert_eq!(MISP_MAX_REF, 256);
    assert_eq!(MISP_HIGH_MIN_REFS, 64);
    assert_eq!(MISP_HIGH_MIN_REFS >> MISP_HIGH_RATE_SHIFT, 8);
    assert!(MISP_HIGH_MIN_REFS < MISP_MAX_REF / 2, "a halved way must stay classifiable");
}

#[test]
fn test_alignment_and_defaults() {
    assert_eq!(INST_ALIGN_SHIFT, 1);
    assert!(DEFAULT_SST_ENTRIES > 0);
}
