#![warn(missing_docs)]
//! # selbench
//!
//! Throughput harness for CSS selector parsers.
//!
//! selbench measures how many selectors per second a parser handles across
//! three complexity tiers, then probes repeated parsing of a single selector:
//! - **Timed execution**: untimed warm-up followed by a timed loop, against an
//!   injectable monotonic clock
//! - **Tier aggregation**: mean throughput per tier (mean over ops/sec)
//! - **Cache probe**: one high-iteration run over a single repeated input
//! - **Reports**: streamed human-readable lines or a JSON document
//!
//! ## Quick Start
//!
//! ```ignore
//! use selbench::prelude::*;
//!
//! let executor = TimedExecutor::new(MonotonicClock::new());
//! let mut parser = |input: &str| {
//!     my_parser::parse(input).map_err(|e| ParseError::new(input, e))
//! };
//! let summary = run_tier(&executor, "simple", &["div", ".a"], &mut parser, &TierPlan::default())?;
//! println!("{:.0} ops/sec", summary.average_ops_per_sec);
//! ```

// Re-export core types
pub use selbench_core::{
    BenchmarkResult, CacheProbeResult, Clock, HarnessError, ManualClock, MonotonicClock,
    ParseError, ProbePlan, SelectorParser, TierPlan, TierSummary, TimedExecutor,
    mean_ops_per_sec, probe_cache, run_tier, run_tier_with,
};

// Re-export report types
pub use selbench_report::{
    Emitter, HumanEmitter, JsonEmitter, NullEmitter, OutputFormat, Report, format_human_report,
    generate_json_report,
};

// Re-export the driver
pub use selbench_cli::{Corpus, HarnessConfig, SELECTOR_CORPUS, Tier, run_harness};

/// The bundled selector parser
pub mod parser {
    pub use selbench_parser::*;
}

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        BenchmarkResult, Clock, MonotonicClock, ParseError, ProbePlan, SelectorParser, TierPlan,
        TierSummary, TimedExecutor, probe_cache, run_tier,
    };
}

/// Run the selbench CLI.
///
/// Call this from the binary's `main()`:
/// ```ignore
/// fn main() {
///     selbench::run().unwrap();
/// }
/// ```
pub use selbench_cli::run;
