//! Configuration system for the runahead tables.
//!
//! This module defines the configuration structures used to parameterize the
//! precise runahead execution (PRE) unit. It provides:
//! 1. **Defaults:** Baseline sizes for the stalling-slice table.
//! 2. **Structures:** `Config` and its `PreConfig` section.
//! 3. **Validation:** Construction-time checks that reject unusable sizes.
//!
//! Configuration is supplied as JSON by the host pipeline model, or use `Config::default()`.
//! The misprediction table geometry is fixed and therefore not configurable; see
//! [`crate::common::constants`].

use serde::Deserialize;

use crate::common::ConfigError;

/// Default configuration constants for the runahead tables.
mod defaults {
    use crate::common::constants::DEFAULT_SST_ENTRIES;

    /// Stalling-slice table entry count.
    ///
    /// Number of instruction addresses tracked simultaneously.
    pub const SST_ENTRIES: usize = DEFAULT_SST_ENTRIES;
}

/// Root configuration structure containing all runahead settings.
///
/// # Examples
///
/// ```
/// use runahead_core::config::Config;
///
/// let config = Config::default();
/// assert!(!config.pre.enabled);
/// assert_eq!(config.pre.sst_entries, 128);
/// ```
///
/// Deserializing from JSON:
///
/// ```
/// use runahead_core::config::Config;
///
/// let json = r#"{ "pre": { "enabled": true, "sst_entries": 64 } }"#;
/// let config = Config::from_json(json).unwrap();
/// assert!(config.pre.enabled);
/// assert!(!config.pre.branch_enabled);
/// assert_eq!(config.pre.sst_entries, 64);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Precise runahead execution settings
    #[serde(default)]
    pub pre: PreConfig,
}

impl Config {
    /// Parses and validates a configuration from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the document is malformed, or any error
    /// reported by [`PreConfig::validate`].
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.pre.validate()?;
        Ok(config)
    }
}

/// Precise runahead execution configuration.
///
/// `enabled` turns on stalling-slice tracking. `branch_enabled` additionally
/// consults the misprediction table for resolved branches, and implies `enabled`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PreConfig {
    /// Track stalling slices in the SST
    #[serde(default)]
    pub enabled: bool,

    /// Classify high-misprediction branches (implies `enabled`)
    #[serde(default)]
    pub branch_enabled: bool,

    /// Stalling-slice table capacity
    #[serde(default = "PreConfig::default_sst_entries")]
    pub sst_entries: usize,
}

impl PreConfig {
    /// Returns the default stalling-slice table capacity.
    const fn default_sst_entries() -> usize {
        defaults::SST_ENTRIES
    }

    /// Returns whether runahead tracking is active at all.
    pub const fn pre_active(&self) -> bool {
        self.enabled || self.branch_enabled
    }

    /// Checks that the configuration describes buildable tables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroSstEntries`] if `sst_entries` is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sst_entries == 0 {
            return Err(ConfigError::ZeroSstEntries);
        }
        Ok(())
    }
}

impl Default for PreConfig {
    /// Creates a default runahead configuration.
    ///
    /// Runahead is disabled and the stalling-slice table uses the default capacity.
    fn default() -> Self {
        Self {
            enabled: false,
            branch_enabled: false,
            sst_entries: defaults::SST_ENTRIES,
        }
    }
}
