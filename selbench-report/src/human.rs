//! Human-readable Output
//!
//! Terminal layout:
//! - Banner
//! - One block per tier with a line per selector
//! - Summary block with each tier's average throughput
//! - Cache effectiveness block
//!
//! Durations are printed with two decimals, throughput as a rounded integer
//! with thousands separators.

use crate::emitter::Emitter;
use crate::report::Report;
use selbench_core::{BenchmarkResult, CacheProbeResult, TierSummary};
use std::io::{self, Write};

const WIDTH: usize = 70;

/// Round to the nearest integer and group digits by three (`1,234,567`).
pub fn format_thousands(value: f64) -> String {
    let rounded = value.round();
    if !rounded.is_finite() {
        return rounded.to_string();
    }

    let digits = format!("{:.0}", rounded.abs());
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if rounded < 0.0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// `  "div": 1.23ms (8,130,081 ops/sec)`
pub fn format_result_line(result: &BenchmarkResult) -> String {
    format!(
        "  \"{}\": {:.2}ms ({} ops/sec)",
        result.input,
        result.duration_ms,
        format_thousands(result.ops_per_sec)
    )
}

/// `Simple Selectors Average: 8,130,081 ops/sec`
pub fn format_tier_average(tier: &TierSummary) -> String {
    format!(
        "{} Average: {} ops/sec",
        tier.tier_name,
        format_thousands(tier.average_ops_per_sec)
    )
}

/// `Cold cache: 12.34ms (8,103,728 ops/sec)`
pub fn format_cache_probe(probe: &CacheProbeResult) -> String {
    format!(
        "Cold cache: {:.2}ms ({} ops/sec)",
        probe.duration_ms,
        format_thousands(probe.ops_per_sec)
    )
}

/// Render a finished report in one go
pub fn format_human_report(report: &Report) -> String {
    let mut emitter = HumanEmitter::new(Vec::new());
    // Writes into a Vec<u8> cannot fail
    let _ = emitter.replay(report);
    String::from_utf8_lossy(&emitter.into_inner()).into_owned()
}

/// Streams human-readable lines as results are produced.
///
/// Each hook flushes so a failing run leaves every line up to the failure
/// point on screen.
pub struct HumanEmitter<W: Write> {
    out: W,
}

impl<W: Write> HumanEmitter<W> {
    /// Write to `out`
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Recover the writer
    pub fn into_inner(self) -> W {
        self.out
    }

    fn replay(&mut self, report: &Report) -> io::Result<()> {
        self.begin()?;
        for tier in &report.tiers {
            self.tier_started(&tier.tier_name)?;
            for result in &tier.results {
                self.result(result)?;
            }
        }
        self.tiers_finished(&report.tiers)?;
        self.cache_probe(&report.cache_probe)?;
        self.finish(report)
    }

    fn rule(&mut self, ch: char) -> io::Result<()> {
        writeln!(self.out, "{}", ch.to_string().repeat(WIDTH))
    }
}

impl<W: Write> Emitter for HumanEmitter<W> {
    fn begin(&mut self) -> io::Result<()> {
        self.rule('=')?;
        writeln!(self.out, "CSS Selector Parser Performance Benchmark")?;
        self.rule('=')?;
        self.out.flush()
    }

    fn tier_started(&mut self, tier_name: &str) -> io::Result<()> {
        writeln!(self.out, "\n{}:", tier_name)?;
        self.out.flush()
    }

    fn result(&mut self, result: &BenchmarkResult) -> io::Result<()> {
        writeln!(self.out, "{}", format_result_line(result))?;
        self.out.flush()
    }

    fn tiers_finished(&mut self, tiers: &[TierSummary]) -> io::Result<()> {
        writeln!(self.out)?;
        self.rule('=')?;
        writeln!(self.out, "Summary:")?;
        self.rule('=')?;
        for tier in tiers {
            writeln!(self.out, "{}", format_tier_average(tier))?;
        }
        self.rule('=')?;
        self.out.flush()
    }

    fn cache_probe(&mut self, probe: &CacheProbeResult) -> io::Result<()> {
        writeln!(self.out, "\nCache Effectiveness Test:")?;
        self.rule('-')?;
        writeln!(self.out, "{}", format_cache_probe(probe))?;
        writeln!(
            self.out,
            "Note: {} calls on \"{}\" with no prior call for that input;",
            format_thousands(probe.iterations as f64),
            probe.input
        )?;
        writeln!(
            self.out,
            "      no uncached baseline is measured, so this is not a speedup figure"
        )?;
        self.rule('=')?;
        self.out.flush()
    }
}
