//! Report Data Structures

use chrono::{DateTime, Utc};
use selbench_core::{CacheProbeResult, TierSummary};
use serde::{Deserialize, Serialize};

/// Version of the JSON layout below
pub const SCHEMA_VERSION: u32 = 1;

/// Complete harness report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Run metadata
    pub meta: ReportMeta,
    /// Tiers in the order they were run
    pub tiers: Vec<TierSummary>,
    /// Cache effectiveness probe, run after all tiers
    pub cache_probe: CacheProbeResult,
}

/// Report metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMeta {
    /// Always [`SCHEMA_VERSION`]
    pub schema_version: u32,
    /// selbench version that produced the report
    pub version: String,
    /// When the report was assembled
    pub timestamp: DateTime<Utc>,
    /// Settings the run used
    pub config: ReportConfig,
}

/// Iteration settings captured in report metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Timed calls per tier input
    pub tier_iterations: u64,
    /// Untimed calls before each tier input
    pub tier_warmup_iterations: u64,
    /// Timed calls in the cache probe
    pub probe_iterations: u64,
    /// Minimum measurable duration, in nanoseconds
    pub min_measured_ns: u64,
    /// Cap on repeated timed rounds
    pub max_timing_rounds: u32,
}

impl Report {
    /// Assemble a report stamped with the current time
    pub fn new(config: ReportConfig, tiers: Vec<TierSummary>, cache_probe: CacheProbeResult) -> Self {
        Self {
            meta: ReportMeta {
                schema_version: SCHEMA_VERSION,
                version: env!("CARGO_PKG_VERSION").to_string(),
                timestamp: Utc::now(),
                config,
            },
            tiers,
            cache_probe,
        }
    }
}
