//! Streaming report hooks

use crate::report::Report;
use selbench_core::{BenchmarkResult, CacheProbeResult, TierSummary};
use std::io;

/// Receives harness output in run order.
///
/// Hooks fire as values are produced: `begin`, then per tier
/// `tier_started` and one `result` per input, then `tiers_finished`,
/// `cache_probe`, and finally `finish` with the assembled report. A failed
/// run stops calling hooks at the failure point. Every hook defaults to a
/// no-op.
pub trait Emitter {
    /// Run started
    fn begin(&mut self) -> io::Result<()> {
        Ok(())
    }

    /// A tier is about to be measured
    fn tier_started(&mut self, _tier_name: &str) -> io::Result<()> {
        Ok(())
    }

    /// One input finished measuring
    fn result(&mut self, _result: &BenchmarkResult) -> io::Result<()> {
        Ok(())
    }

    /// All tiers finished
    fn tiers_finished(&mut self, _tiers: &[TierSummary]) -> io::Result<()> {
        Ok(())
    }

    /// The cache probe finished
    fn cache_probe(&mut self, _probe: &CacheProbeResult) -> io::Result<()> {
        Ok(())
    }

    /// The complete report
    fn finish(&mut self, _report: &Report) -> io::Result<()> {
        Ok(())
    }
}

impl<E: Emitter + ?Sized> Emitter for &mut E {
    fn begin(&mut self) -> io::Result<()> {
        (**self).begin()
    }

    fn tier_started(&mut self, tier_name: &str) -> io::Result<()> {
        (**self).tier_started(tier_name)
    }

    fn result(&mut self, result: &BenchmarkResult) -> io::Result<()> {
        (**self).result(result)
    }

    fn tiers_finished(&mut self, tiers: &[TierSummary]) -> io::Result<()> {
        (**self).tiers_finished(tiers)
    }

    fn cache_probe(&mut self, probe: &CacheProbeResult) -> io::Result<()> {
        (**self).cache_probe(probe)
    }

    fn finish(&mut self, report: &Report) -> io::Result<()> {
        (**self).finish(report)
    }
}

/// Discards everything
#[derive(Debug, Default, Clone, Copy)]
pub struct NullEmitter;

impl Emitter for NullEmitter {}
