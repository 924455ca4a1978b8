//! Cache Effectiveness Prober
//!
//! A single high-iteration measurement over one repeated input, with no
//! warm-up. Only the "cold" regime is measured (no call with this exact input
//! precedes the probe); no cache-busting baseline is taken, so the probe
//! cannot by itself show a speedup.

use crate::error::Result;
use crate::executor::TimedExecutor;
use crate::measure::Clock;
use crate::parser::SelectorParser;
use crate::CacheProbeResult;
use serde::{Deserialize, Serialize};

/// Default measured calls for the probe
pub const DEFAULT_PROBE_ITERATIONS: u64 = 100_000;

/// Iteration count for the probe. Warm-up is always zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbePlan {
    /// Measured calls
    pub iterations: u64,
}

impl Default for ProbePlan {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_PROBE_ITERATIONS,
        }
    }
}

/// Measure repeated parsing of `input`.
pub fn probe_cache<C, P>(
    executor: &TimedExecutor<C>,
    input: &str,
    parser: &mut P,
    plan: &ProbePlan,
) -> Result<CacheProbeResult>
where
    C: Clock,
    P: SelectorParser + ?Sized,
{
    tracing::debug!(input, iterations = plan.iterations, "probing cache");

    let result = executor.run(input, parser, plan.iterations, 0)?;
    Ok(CacheProbeResult {
        input: result.input,
        iterations: result.iterations,
        duration_ms: result.duration_ms,
        ops_per_sec: result.ops_per_sec,
    })
}
