//! Harness error taxonomy

use std::time::Duration;
use thiserror::Error;

/// Boxed collaborator error
pub type ParseErrorSource = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Failure reported by the parser under test.
///
/// The harness does not interpret the cause; it only records which input
/// failed and forwards the collaborator's own error.
#[derive(Debug, Error)]
#[error("failed to parse {input:?}: {source}")]
pub struct ParseError {
    /// Input that was being parsed
    pub input: String,
    /// Underlying collaborator error
    #[source]
    pub source: ParseErrorSource,
}

impl ParseError {
    /// Wrap a collaborator error for `input`
    pub fn new(input: impl Into<String>, source: impl Into<ParseErrorSource>) -> Self {
        Self {
            input: input.into(),
            source: source.into(),
        }
    }
}

/// Errors that abort a harness run
#[derive(Debug, Error)]
pub enum HarnessError {
    /// The parser failed during warm-up or measurement
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The measured phase never reached the minimum measurable duration
    #[error(
        "measured phase for {input:?} stayed below {floor:?} after {rounds} rounds; throughput is undefined"
    )]
    DegenerateTiming {
        /// Input being measured
        input: String,
        /// Minimum measurable duration
        floor: Duration,
        /// Timed rounds attempted
        rounds: u32,
    },

    /// Iteration counts or limits that cannot produce a measurement
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A tier with nothing to measure
    #[error("tier {0:?} has no inputs")]
    EmptyTier(String),
}

/// Result alias for harness operations
pub type Result<T> = std::result::Result<T, HarnessError>;
