#![warn(missing_docs)]
//! selbench Core - Measurement Runtime
//!
//! This crate provides the measurement side of the harness:
//! - `TimedExecutor` for warm-up plus timed-loop execution
//! - Tier aggregation (mean throughput per complexity tier)
//! - The cache effectiveness probe
//! - An injectable `Clock` so timing can be stubbed deterministically
//!
//! The parser under test is reached only through [`SelectorParser`].

mod error;
mod executor;
mod measure;
mod parser;
mod probe;
mod tier;

pub use error::{HarnessError, ParseError, ParseErrorSource, Result};
pub use executor::{DEFAULT_MAX_ROUNDS, DEFAULT_MIN_MEASURED, TimedExecutor, ops_per_sec};
pub use measure::{Clock, ManualClock, MonotonicClock, Timer, duration_ms};
pub use parser::SelectorParser;
pub use probe::{DEFAULT_PROBE_ITERATIONS, ProbePlan, probe_cache};
pub use tier::{
    DEFAULT_TIER_ITERATIONS, DEFAULT_TIER_WARMUP, TierPlan, mean_ops_per_sec, run_tier,
    run_tier_with,
};

use serde::{Deserialize, Serialize};

/// One input measured at one iteration count
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkResult {
    /// Selector that was parsed
    pub input: String,
    /// Measured (timed) calls
    pub iterations: u64,
    /// Elapsed time of the measured phase only
    pub duration_ms: f64,
    /// `iterations / duration_ms * 1000`
    pub ops_per_sec: f64,
}

/// Results for one complexity tier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierSummary {
    /// Tier display name
    pub tier_name: String,
    /// Per-input results in declared order
    pub results: Vec<BenchmarkResult>,
    /// Unweighted mean of `results[..].ops_per_sec`
    pub average_ops_per_sec: f64,
}

/// The single cache effectiveness measurement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheProbeResult {
    /// Repeated selector
    pub input: String,
    /// Measured calls
    pub iterations: u64,
    /// Elapsed time of the measured phase
    pub duration_ms: f64,
    /// `iterations / duration_ms * 1000`
    pub ops_per_sec: f64,
}
