//! Tier Aggregator
//!
//! Measures every input of a tier in declared order and reduces the per-input
//! throughputs to an unweighted mean. The mean is taken over ops/sec, not
//! over durations.

use crate::error::{HarnessError, Result};
use crate::executor::TimedExecutor;
use crate::measure::Clock;
use crate::parser::SelectorParser;
use crate::{BenchmarkResult, TierSummary};
use serde::{Deserialize, Serialize};

/// Default measured calls per input
pub const DEFAULT_TIER_ITERATIONS: u64 = 10_000;

/// Default untimed calls per input
pub const DEFAULT_TIER_WARMUP: u64 = 100;

/// Iteration counts applied to every input of a tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierPlan {
    /// Measured calls per input
    pub iterations: u64,
    /// Untimed calls per input
    pub warmup_iterations: u64,
}

impl Default for TierPlan {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_TIER_ITERATIONS,
            warmup_iterations: DEFAULT_TIER_WARMUP,
        }
    }
}

/// Measure every input of a tier.
pub fn run_tier<C, P>(
    executor: &TimedExecutor<C>,
    tier_name: &str,
    inputs: &[&str],
    parser: &mut P,
    plan: &TierPlan,
) -> Result<TierSummary>
where
    C: Clock,
    P: SelectorParser + ?Sized,
{
    run_tier_with(executor, tier_name, inputs, parser, plan, |_| {})
}

/// Like [`run_tier`], calling `on_result` with each result as soon as it is
/// measured.
pub fn run_tier_with<C, P, F>(
    executor: &TimedExecutor<C>,
    tier_name: &str,
    inputs: &[&str],
    parser: &mut P,
    plan: &TierPlan,
    mut on_result: F,
) -> Result<TierSummary>
where
    C: Clock,
    P: SelectorParser + ?Sized,
    F: FnMut(&BenchmarkResult),
{
    if inputs.is_empty() {
        return Err(HarnessError::EmptyTier(tier_name.to_string()));
    }

    tracing::debug!(tier = tier_name, inputs = inputs.len(), "running tier");

    let mut results = Vec::with_capacity(inputs.len());
    for input in inputs {
        let result = executor.run(input, parser, plan.iterations, plan.warmup_iterations)?;
        on_result(&result);
        results.push(result);
    }

    TierSummary::from_results(tier_name, results)
}

/// Unweighted arithmetic mean of the results' throughput.
///
/// Returns `None` for an empty slice.
pub fn mean_ops_per_sec(results: &[BenchmarkResult]) -> Option<f64> {
    if results.is_empty() {
        return None;
    }
    let sum: f64 = results.iter().map(|r| r.ops_per_sec).sum();
    Some(sum / results.len() as f64)
}

impl TierSummary {
    /// Build a summary from already-measured results
    pub fn from_results(tier_name: &str, results: Vec<BenchmarkResult>) -> Result<Self> {
        let average_ops_per_sec = mean_ops_per_sec(&results)
            .ok_or_else(|| HarnessError::EmptyTier(tier_name.to_string()))?;

        Ok(Self {
            tier_name: tier_name.to_string(),
            results,
            average_ops_per_sec,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseError;
    use crate::measure::ManualClock;
    use std::time::Duration;

    fn result(input: &str, ops_per_sec: f64) -> BenchmarkResult {
        BenchmarkResult {
            input: input.to_string(),
            iterations: 1_000,
            duration_ms: 1_000.0 * 1_000.0 / ops_per_sec,
            ops_per_sec,
        }
    }

    #[test]
    fn test_default_plan() {
        let plan = TierPlan::default();
        assert_eq!(plan.iterations, 10_000);
        assert_eq!(plan.warmup_iterations, 100);
    }

    #[test]
    fn test_average_of_two() {
        let summary =
            TierSummary::from_results("pair", vec![result("a", 1_000.0), result("b", 3_000.0)])
                .unwrap();
        assert_eq!(summary.average_ops_per_sec, 2_000.0);
    }

    #[test]
    fn test_average_is_order_independent() {
        let values = [1_250.5, 98_000.0, 7.25, 3_333_333.0, 42.0];
        let forward: Vec<_> = values.iter().map(|v| result("x", *v)).collect();
        let backward: Vec<_> = values.iter().rev().map(|v| result("x", *v)).collect();

        let a = mean_ops_per_sec(&forward).unwrap();
        let b = mean_ops_per_sec(&backward).unwrap();
        let expected = values.iter().sum::<f64>() / values.len() as f64;

        assert!(((a - b) / expected).abs() < 1e-12);
        assert!(((a - expected) / expected).abs() < 1e-12);
    }

    #[test]
    fn test_mean_is_over_throughput_not_duration() {
        // Durations 1000ms and 250ms (1000 iters): mean of throughputs is 2500,
        // throughput of the mean duration would be 1600.
        let summary =
            TierSummary::from_results("t", vec![result("a", 1_000.0), result("b", 4_000.0)])
                .unwrap();
        assert_eq!(summary.average_ops_per_sec, 2_500.0);
    }

    #[test]
    fn test_single_input_tier() {
        let summary = TierSummary::from_results("one", vec![result("a", 1_234.0)]).unwrap();
        assert_eq!(summary.average_ops_per_sec, 1_234.0);
    }

    #[test]
    fn test_empty_tier_rejected() {
        let clock = ManualClock::new();
        let executor = TimedExecutor::new(&clock);
        let mut parser = |_: &str| -> std::result::Result<(), ParseError> { Ok(()) };

        let err = run_tier(&executor, "empty", &[], &mut parser, &TierPlan::default()).unwrap_err();
        assert!(matches!(err, HarnessError::EmptyTier(name) if name == "empty"));
    }

    #[test]
    fn test_run_tier_preserves_order_and_streams() {
        let clock = ManualClock::new();
        let executor = TimedExecutor::new(&clock);
        // "div" costs 1ms per call, ".class" costs 2ms per call
        let mut parser = |input: &str| -> std::result::Result<(), ParseError> {
            let cost = if input == "div" { 1 } else { 2 };
            clock.advance(Duration::from_millis(cost));
            Ok(())
        };
        let plan = TierPlan {
            iterations: 100,
            warmup_iterations: 5,
        };

        let mut streamed = Vec::new();
        let summary = run_tier_with(
            &executor,
            "Simple",
            &["div", ".class"],
            &mut parser,
            &plan,
            |r| streamed.push(r.input.clone()),
        )
        .unwrap();

        assert_eq!(streamed, vec!["div", ".class"]);
        assert_eq!(summary.tier_name, "Simple");
        assert_eq!(summary.results[0].input, "div");
        assert_eq!(summary.results[0].ops_per_sec, 1_000.0);
        assert_eq!(summary.results[1].ops_per_sec, 500.0);
        assert_eq!(summary.average_ops_per_sec, 750.0);
    }

    #[test]
    fn test_failure_aborts_tier() {
        let clock = ManualClock::new();
        let executor = TimedExecutor::new(&clock);
        let mut parser = |input: &str| -> std::result::Result<(), ParseError> {
            clock.advance(Duration::from_millis(1));
            if input == "bad" {
                return Err(ParseError::new(input, "unexpected token"));
            }
            Ok(())
        };

        let mut streamed = 0;
        let err = run_tier_with(
            &executor,
            "Mixed",
            &["div", "bad", "span"],
            &mut parser,
            &TierPlan::default(),
            |_| streamed += 1,
        )
        .unwrap_err();

        assert!(matches!(err, HarnessError::Parse(_)));
        assert_eq!(streamed, 1);
    }
}
