//! JSON Output

use crate::emitter::Emitter;
use crate::report::Report;
use std::io::{self, Write};

/// Generate a prettified JSON report.
pub fn generate_json_report(report: &Report) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

/// Writes the complete report as JSON once the run finishes.
///
/// Nothing is written for a run that fails part-way.
pub struct JsonEmitter<W: Write> {
    out: W,
}

impl<W: Write> JsonEmitter<W> {
    /// Write to `out`
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Recover the writer
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Emitter for JsonEmitter<W> {
    fn finish(&mut self, report: &Report) -> io::Result<()> {
        let json = generate_json_report(report)?;
        writeln!(self.out, "{}", json)?;
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{ReportConfig, SCHEMA_VERSION};
    use selbench_core::{BenchmarkResult, CacheProbeResult, TierSummary};

    fn report() -> Report {
        let result = BenchmarkResult {
            input: "div > p".to_string(),
            iterations: 10_000,
            duration_ms: 10_000.0,
            ops_per_sec: 1_000.0,
        };
        let tier = TierSummary {
            tier_name: "Medium Complexity".to_string(),
            results: vec![result],
            average_ops_per_sec: 1_000.0,
        };
        let probe = CacheProbeResult {
            input: "div.test > p#content".to_string(),
            iterations: 100_000,
            duration_ms: 1_000.0,
            ops_per_sec: 100_000.0,
        };
        let config = ReportConfig {
            tier_iterations: 10_000,
            tier_warmup_iterations: 100,
            probe_iterations: 100_000,
            min_measured_ns: 1_000,
            max_timing_rounds: 16,
        };
        Report::new(config, vec![tier], probe)
    }

    #[test]
    fn test_json_shape() {
        let json = generate_json_report(&report()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["meta"]["schema_version"], SCHEMA_VERSION);
        assert_eq!(value["meta"]["config"]["tier_warmup_iterations"], 100);
        assert_eq!(value["tiers"][0]["tier_name"], "Medium Complexity");
        assert_eq!(value["tiers"][0]["results"][0]["ops_per_sec"], 1_000.0);
        assert_eq!(value["cache_probe"]["duration_ms"], 1_000.0);
    }

    #[test]
    fn test_emitter_writes_only_on_finish() {
        let report = report();
        let mut emitter = JsonEmitter::new(Vec::new());

        emitter.begin().unwrap();
        emitter.tier_started("Medium Complexity").unwrap();
        emitter.result(&report.tiers[0].results[0]).unwrap();
        emitter.cache_probe(&report.cache_probe).unwrap();
        assert!(emitter.out.is_empty());

        emitter.finish(&report).unwrap();
        let written = String::from_utf8(emitter.into_inner()).unwrap();
        let parsed: Report = serde_json::from_str(&written).unwrap();
        assert_eq!(parsed.tiers, report.tiers);
        assert_eq!(parsed.cache_probe, report.cache_probe);
    }
}
