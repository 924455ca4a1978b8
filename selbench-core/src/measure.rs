//! Clocks and Timing
//!
//! The harness never reads a global timer. Every measurement goes through a
//! [`Clock`], so production runs use [`MonotonicClock`] while tests drive a
//! [`ManualClock`] that only moves when told to.

use std::cell::Cell;
use std::time::Duration;

/// Source of monotonic elapsed time.
pub trait Clock {
    /// Time elapsed since the clock's origin. Never decreases.
    fn now(&self) -> Duration;
}

impl<C: Clock + ?Sized> Clock for &C {
    #[inline(always)]
    fn now(&self) -> Duration {
        (**self).now()
    }
}

// ─── MonotonicClock ──────────────────────────────────────────────────────────

/// Wall-clock time backed by `std::time::Instant` (sub-microsecond resolution
/// on every tier-1 platform).
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: std::time::Instant,
}

impl MonotonicClock {
    /// Start a clock whose origin is the current instant
    pub fn new() -> Self {
        Self {
            origin: std::time::Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    #[inline(always)]
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

// ─── ManualClock ─────────────────────────────────────────────────────────────

/// Deterministic clock that advances only through [`ManualClock::advance`].
///
/// Uses interior mutability so a stub parser and the executor can share it
/// by reference.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<Duration>,
}

impl ManualClock {
    /// Create a clock reading zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the clock forward
    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}

// ─── Timer ───────────────────────────────────────────────────────────────────

/// Timer for a measured phase
pub struct Timer<'c, C: Clock + ?Sized> {
    clock: &'c C,
    start: Duration,
}

impl<'c, C: Clock + ?Sized> Timer<'c, C> {
    /// Start a new timer
    #[inline(always)]
    pub fn start(clock: &'c C) -> Self {
        Self {
            clock,
            start: clock.now(),
        }
    }

    /// Elapsed time since `start`, saturating at zero
    #[inline(always)]
    pub fn stop(&self) -> Duration {
        self.clock.now().saturating_sub(self.start)
    }
}

/// Convert a duration to fractional milliseconds.
///
/// Goes through whole nanoseconds so that round values (e.g. 10 s) convert
/// exactly.
pub fn duration_ms(d: Duration) -> f64 {
    d.as_nanos() as f64 / 1_000_000.0
}
