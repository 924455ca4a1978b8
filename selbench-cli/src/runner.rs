//! Harness orchestration
//!
//! Drives the tiers in corpus order, then the cache probe, forwarding every
//! value to the emitter as soon as it exists. The first failure ends the run;
//! nothing is emitted after it.

use crate::config::HarnessConfig;
use crate::corpus::Corpus;
use anyhow::Context;
use selbench_core::{Clock, SelectorParser, probe_cache, run_tier_with};
use selbench_report::{Emitter, Report};
use tracing::info;

/// Run every tier of `corpus` and the cache probe against `parser`.
pub fn run_harness<C, P, E>(
    config: &HarnessConfig,
    corpus: &Corpus,
    clock: C,
    parser: &mut P,
    mut emitter: E,
) -> anyhow::Result<Report>
where
    C: Clock,
    P: SelectorParser + ?Sized,
    E: Emitter,
{
    config.validate()?;
    let executor = config.executor(clock);
    let tier_plan = config.tier_plan();

    emitter.begin()?;

    let mut tiers = Vec::with_capacity(corpus.tiers.len());
    for tier in corpus.tiers {
        info!(tier = tier.id, inputs = tier.inputs.len(), "measuring tier");
        emitter.tier_started(tier.name)?;

        let mut write_error = None;
        let summary = run_tier_with(
            &executor,
            tier.name,
            tier.inputs,
            parser,
            &tier_plan,
            |result| {
                if write_error.is_none() {
                    write_error = emitter.result(result).err();
                }
            },
        )
        .with_context(|| format!("tier {:?} aborted", tier.name))?;
        if let Some(err) = write_error {
            return Err(err.into());
        }

        info!(
            tier = tier.id,
            average_ops_per_sec = summary.average_ops_per_sec,
            "tier complete"
        );
        tiers.push(summary);
    }
    emitter.tiers_finished(&tiers)?;

    let probe = probe_cache(
        &executor,
        corpus.cache_probe_input,
        parser,
        &config.probe_plan(),
    )
    .context("cache probe aborted")?;
    info!(
        input = corpus.cache_probe_input,
        ops_per_sec = probe.ops_per_sec,
        "cache probe complete"
    );
    emitter.cache_probe(&probe)?;

    let report = Report::new(config.report_config(), tiers, probe);
    emitter.finish(&report)?;
    Ok(report)
}
