//! Timed Executor
//!
//! Runs one input through the parser in two phases:
//! - Warm-up: a fixed number of calls, never timed
//! - Measurement: a fixed number of calls between two clock reads
//!
//! A measured phase shorter than the minimum measurable duration is repeated
//! (accumulating calls and elapsed time) so throughput is never derived from
//! a zero-length interval.

use crate::error::{HarnessError, Result};
use crate::measure::{Clock, Timer, duration_ms};
use crate::parser::SelectorParser;
use crate::BenchmarkResult;
use std::time::Duration;

/// Default minimum measurable duration for one measurement
pub const DEFAULT_MIN_MEASURED: Duration = Duration::from_micros(1);

/// Default cap on repeated timed rounds
pub const DEFAULT_MAX_ROUNDS: u32 = 16;

/// Executes warm-up and measured phases against an injected clock.
#[derive(Debug, Clone)]
pub struct TimedExecutor<C> {
    clock: C,
    min_measured: Duration,
    max_rounds: u32,
}

impl<C: Clock> TimedExecutor<C> {
    /// Create an executor with the default timing floor
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            min_measured: DEFAULT_MIN_MEASURED,
            max_rounds: DEFAULT_MAX_ROUNDS,
        }
    }

    /// Override the minimum measurable duration
    pub fn with_min_measured(mut self, min_measured: Duration) -> Self {
        self.min_measured = min_measured;
        self
    }

    /// Override the maximum number of timed rounds (at least 1)
    pub fn with_max_rounds(mut self, max_rounds: u32) -> Self {
        self.max_rounds = max_rounds.max(1);
        self
    }

    /// The injected clock
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Minimum measurable duration
    pub fn min_measured(&self) -> Duration {
        self.min_measured
    }

    /// Maximum number of timed rounds
    pub fn max_rounds(&self) -> u32 {
        self.max_rounds
    }

    /// Measure `parser` on `input`.
    ///
    /// Calls the parser `warmup_iterations` times untimed, then `iterations`
    /// times timed. Any parse failure aborts immediately.
    pub fn run<P>(
        &self,
        input: &str,
        parser: &mut P,
        iterations: u64,
        warmup_iterations: u64,
    ) -> Result<BenchmarkResult>
    where
        P: SelectorParser + ?Sized,
    {
        if iterations == 0 {
            return Err(HarnessError::InvalidConfig(
                "iterations must be greater than zero".to_string(),
            ));
        }

        for _ in 0..warmup_iterations {
            std::hint::black_box(parser.parse(std::hint::black_box(input))?);
        }
        tracing::trace!(input, warmup_iterations, "warm-up complete");

        let mut elapsed = Duration::ZERO;
        let mut measured = 0u64;
        let mut rounds = 0u32;

        while rounds < self.max_rounds {
            rounds += 1;

            let timer = Timer::start(&self.clock);
            for _ in 0..iterations {
                std::hint::black_box(parser.parse(std::hint::black_box(input))?);
            }
            elapsed += timer.stop();
            measured += iterations;

            if !elapsed.is_zero() && elapsed >= self.min_measured {
                let result = BenchmarkResult::from_measurement(input, measured, elapsed);
                tracing::debug!(
                    input,
                    iterations = measured,
                    rounds,
                    duration_ms = result.duration_ms,
                    ops_per_sec = result.ops_per_sec,
                    "measured"
                );
                return Ok(result);
            }

            tracing::debug!(
                input,
                rounds,
                elapsed_ns = elapsed.as_nanos() as u64,
                "measured phase below floor, repeating"
            );
        }

        Err(HarnessError::DegenerateTiming {
            input: input.to_string(),
            floor: self.min_measured,
            rounds,
        })
    }
}

/// Throughput for `iterations` calls over `duration_ms` milliseconds.
///
/// Callers guarantee `duration_ms > 0`.
#[inline]
pub fn ops_per_sec(iterations: u64, duration_ms: f64) -> f64 {
    iterations as f64 / duration_ms * 1000.0
}

impl BenchmarkResult {
    pub(crate) fn from_measurement(input: &str, iterations: u64, elapsed: Duration) -> Self {
        let duration_ms = duration_ms(elapsed);
        Self {
            input: input.to_string(),
            iterations,
            duration_ms,
            ops_per_sec: ops_per_sec(iterations, duration_ms),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseError;
    use crate::measure::ManualClock;

    /// Stub parser that advances `clock` by `tick` per call
    fn ticking(
        clock: &ManualClock,
        tick: Duration,
    ) -> impl FnMut(&str) -> std::result::Result<(), ParseError> + '_ {
        move |_: &str| {
            clock.advance(tick);
            Ok(())
        }
    }

    #[test]
    fn test_warmup_excluded_from_duration() {
        let clock = ManualClock::new();
        let executor = TimedExecutor::new(&clock);
        let mut parser = ticking(&clock, Duration::from_millis(1));

        let result = executor.run("div", &mut parser, 10_000, 100).unwrap();

        assert_eq!(result.iterations, 10_000);
        assert_eq!(result.duration_ms, 10_000.0);
        assert_eq!(result.ops_per_sec, 1_000.0);
        // Warm-up still ran: the clock saw every call
        assert_eq!(clock.now(), Duration::from_millis(10_100));
    }

    #[test]
    fn test_warmup_and_measured_call_counts() {
        let clock = ManualClock::new();
        let executor = TimedExecutor::new(&clock);
        let mut calls = 0u64;
        let mut parser = |_: &str| -> std::result::Result<(), ParseError> {
            calls += 1;
            clock.advance(Duration::from_micros(3));
            Ok(())
        };

        executor.run("a", &mut parser, 250, 40).unwrap();
        assert_eq!(calls, 290);
    }

    #[test]
    fn test_throughput_formula() {
        let clock = ManualClock::new();
        let executor = TimedExecutor::new(&clock);
        let mut parser = ticking(&clock, Duration::from_nanos(737));

        let result = executor.run("ul li a", &mut parser, 1_234, 7).unwrap();
        let expected = 1_234.0 / result.duration_ms * 1000.0;
        assert!(((result.ops_per_sec - expected) / expected).abs() < 1e-9);
    }

    #[test]
    fn test_failure_aborts_measurement() {
        let clock = ManualClock::new();
        let executor = TimedExecutor::new(&clock);
        let mut calls = 0u64;
        let mut parser = |input: &str| -> std::result::Result<(), ParseError> {
            calls += 1;
            clock.advance(Duration::from_millis(1));
            // 100 warm-up calls, then fail on the 5th timed call
            if calls == 105 {
                return Err(ParseError::new(input, "boom"));
            }
            Ok(())
        };

        let err = executor.run("div", &mut parser, 10_000, 100).unwrap_err();
        assert!(matches!(err, HarnessError::Parse(ref e) if e.input == "div"));
        assert_eq!(calls, 105);
    }

    #[test]
    fn test_failure_during_warmup() {
        let clock = ManualClock::new();
        let executor = TimedExecutor::new(&clock);
        let mut parser = |input: &str| -> std::result::Result<(), ParseError> {
            Err(ParseError::new(input, "bad"))
        };

        let err = executor.run("[", &mut parser, 10, 1).unwrap_err();
        assert!(matches!(err, HarnessError::Parse(_)));
    }

    #[test]
    fn test_zero_iterations_rejected() {
        let clock = ManualClock::new();
        let executor = TimedExecutor::new(&clock);
        let mut parser = ticking(&clock, Duration::from_millis(1));

        let err = executor.run("div", &mut parser, 0, 0).unwrap_err();
        assert!(matches!(err, HarnessError::InvalidConfig(_)));
    }

    #[test]
    fn test_zero_duration_is_degenerate() {
        let clock = ManualClock::new();
        let executor = TimedExecutor::new(&clock).with_max_rounds(4);
        let mut calls = 0u64;
        let mut parser = |_: &str| -> std::result::Result<(), ParseError> {
            calls += 1;
            Ok(())
        };

        let err = executor.run("*", &mut parser, 10, 0).unwrap_err();
        match err {
            HarnessError::DegenerateTiming { rounds, .. } => assert_eq!(rounds, 4),
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(calls, 40);
    }

    #[test]
    fn test_short_rounds_accumulate_until_floor() {
        let clock = ManualClock::new();
        let executor = TimedExecutor::new(&clock).with_min_measured(Duration::from_micros(10));
        // 10 calls x 300ns = 3us per round, floor reached on the 4th round
        let mut parser = ticking(&clock, Duration::from_nanos(300));

        let result = executor.run("#id", &mut parser, 10, 0).unwrap();
        assert_eq!(result.iterations, 40);
        assert_eq!(result.duration_ms, 0.012);
        assert!(result.ops_per_sec.is_finite());
    }

    #[test]
    fn test_deterministic_results() {
        let run = || {
            let clock = ManualClock::new();
            let executor = TimedExecutor::new(&clock);
            let mut parser = ticking(&clock, Duration::from_nanos(1_234));
            ["div", ".class", "#id"]
                .iter()
                .map(|s| executor.run(s, &mut parser, 500, 10).unwrap())
                .collect::<Vec<_>>()
        };

        assert_eq!(run(), run());
    }
}
