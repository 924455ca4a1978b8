//! Harness configuration
//!
//! Iteration counts and timing limits live here rather than at call sites.
//! They are built in code only; the harness exposes no file or flag that
//! changes what is measured.

use selbench_core::{
    Clock, DEFAULT_MAX_ROUNDS, DEFAULT_PROBE_ITERATIONS, DEFAULT_TIER_ITERATIONS,
    DEFAULT_TIER_WARMUP, ProbePlan, TierPlan, TimedExecutor,
};
use selbench_report::ReportConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// selbench configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HarnessConfig {
    /// Measured calls per tier input
    #[serde(default = "default_tier_iterations")]
    pub tier_iterations: u64,
    /// Untimed calls per tier input
    #[serde(default = "default_tier_warmup")]
    pub tier_warmup_iterations: u64,
    /// Measured calls for the cache probe
    #[serde(default = "default_probe_iterations")]
    pub probe_iterations: u64,
    /// Minimum measurable duration of a measured phase, in nanoseconds
    #[serde(default = "default_min_measured_ns")]
    pub min_measured_ns: u64,
    /// Timed rounds attempted before a measurement is declared degenerate
    #[serde(default = "default_max_timing_rounds")]
    pub max_timing_rounds: u32,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            tier_iterations: default_tier_iterations(),
            tier_warmup_iterations: default_tier_warmup(),
            probe_iterations: default_probe_iterations(),
            min_measured_ns: default_min_measured_ns(),
            max_timing_rounds: default_max_timing_rounds(),
        }
    }
}

fn default_tier_iterations() -> u64 {
    DEFAULT_TIER_ITERATIONS
}
fn default_tier_warmup() -> u64 {
    DEFAULT_TIER_WARMUP
}
fn default_probe_iterations() -> u64 {
    DEFAULT_PROBE_ITERATIONS
}
fn default_min_measured_ns() -> u64 {
    1_000
}
fn default_max_timing_rounds() -> u32 {
    DEFAULT_MAX_ROUNDS
}

impl HarnessConfig {
    /// Reject settings that cannot produce a measurement
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.tier_iterations == 0 {
            anyhow::bail!("tier_iterations must be greater than zero");
        }
        if self.probe_iterations == 0 {
            anyhow::bail!("probe_iterations must be greater than zero");
        }
        if self.max_timing_rounds == 0 {
            anyhow::bail!("max_timing_rounds must be greater than zero");
        }
        Ok(())
    }

    /// Per-input plan for every tier
    pub fn tier_plan(&self) -> TierPlan {
        TierPlan {
            iterations: self.tier_iterations,
            warmup_iterations: self.tier_warmup_iterations,
        }
    }

    /// Plan for the cache probe
    pub fn probe_plan(&self) -> ProbePlan {
        ProbePlan {
            iterations: self.probe_iterations,
        }
    }

    /// Minimum measurable duration
    pub fn min_measured(&self) -> Duration {
        Duration::from_nanos(self.min_measured_ns)
    }

    /// Executor over `clock` with this configuration's timing limits
    pub fn executor<C: Clock>(&self, clock: C) -> TimedExecutor<C> {
        TimedExecutor::new(clock)
            .with_min_measured(self.min_measured())
            .with_max_rounds(self.max_timing_rounds)
    }

    /// Settings echoed into report metadata
    pub fn report_config(&self) -> ReportConfig {
        ReportConfig {
            tier_iterations: self.tier_iterations,
            tier_warmup_iterations: self.tier_warmup_iterations,
            probe_iterations: self.probe_iterations,
            min_measured_ns: self.min_measured_ns,
            max_timing_rounds: self.max_timing_rounds,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use selbench_core::ManualClock;

    #[test]
    fn test_default_config() {
        let config = HarnessConfig::default();
        assert_eq!(config.tier_iterations, 10_000);
        assert_eq!(config.tier_warmup_iterations, 100);
        assert_eq!(config.probe_iterations, 100_000);
        assert_eq!(config.min_measured(), Duration::from_micros(1));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: HarnessConfig = serde_json::from_str(r#"{ "tier_iterations": 50 }"#).unwrap();
        assert_eq!(config.tier_iterations, 50);
        assert_eq!(config.probe_iterations, 100_000);
        assert_eq!(config.max_timing_rounds, DEFAULT_MAX_ROUNDS);
    }

    #[test]
    fn test_validate_rejects_zero_counts() {
        let zero_tier = HarnessConfig {
            tier_iterations: 0,
            ..HarnessConfig::default()
        };
        assert!(zero_tier.validate().is_err());

        let zero_probe = HarnessConfig {
            probe_iterations: 0,
            ..HarnessConfig::default()
        };
        assert!(zero_probe.validate().is_err());

        let zero_rounds = HarnessConfig {
            max_timing_rounds: 0,
            ..HarnessConfig::default()
        };
        assert!(zero_rounds.validate().is_err());

        // Zero warm-up is allowed
        let no_warmup = HarnessConfig {
            tier_warmup_iterations: 0,
            ..HarnessConfig::default()
        };
        assert!(no_warmup.validate().is_ok());
    }

    #[test]
    fn test_executor_carries_limits() {
        let config = HarnessConfig {
            min_measured_ns: 5_000,
            max_timing_rounds: 3,
            ..HarnessConfig::default()
        };
        let clock = ManualClock::new();
        let executor = config.executor(&clock);
        assert_eq!(executor.min_measured(), Duration::from_micros(5));
        assert_eq!(executor.max_rounds(), 3);
    }

    #[test]
    fn test_report_config_mirrors_settings() {
        let config = HarnessConfig::default();
        let report = config.report_config();
        assert_eq!(report.tier_iterations, config.tier_iterations);
        assert_eq!(report.probe_iterations, config.probe_iterations);
        assert_eq!(report.min_measured_ns, 1_000);
    }
}
