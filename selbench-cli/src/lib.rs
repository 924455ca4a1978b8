#![warn(missing_docs)]
//! selbench CLI Library
//!
//! Wires the harness together: the built-in selector corpus, the harness
//! configuration, the selector parser under test, and the report emitter.
//! Call [`run`] from the binary's `main()`.
//!
//! # Example
//!
//! ```ignore
//! fn main() {
//!     if let Err(e) = selbench_cli::run() {
//!         eprintln!("Error: {e:#}");
//!         std::process::exit(1);
//!     }
//! }
//! ```

mod config;
mod corpus;
mod runner;

pub use config::HarnessConfig;
pub use corpus::{COMPLEX, Corpus, MEDIUM, SELECTOR_CORPUS, SIMPLE, Tier};
pub use runner::run_harness;

use clap::Parser;
use selbench_core::{MonotonicClock, ParseError};
use selbench_parser::CachingParser;
use selbench_report::{HumanEmitter, JsonEmitter, OutputFormat};
use tracing_subscriber::EnvFilter;

/// selbench CLI arguments
#[derive(Parser, Debug)]
#[command(name = "selbench")]
#[command(author, version, about = "selbench - CSS selector parser throughput harness")]
pub struct Cli {
    /// Output format: human, json
    #[arg(long, default_value = "human", value_parser = parse_format)]
    pub format: OutputFormat,

    /// Verbose logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parse the process arguments and run the full harness.
///
/// # Returns
/// Returns `Ok(())` on success, or the first error that aborted the run.
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run_with_cli(cli)
}

/// Run the harness with pre-parsed arguments.
pub fn run_with_cli(cli: Cli) -> anyhow::Result<()> {
    init_logging(cli.verbose);

    let config = HarnessConfig::default();
    let mut cache = CachingParser::new();
    let mut parser = |input: &str| cache.parse(input).map_err(|e| ParseError::new(input, e));

    let clock = MonotonicClock::new();
    let stdout = std::io::stdout().lock();
    let report = match cli.format {
        OutputFormat::Human => run_harness(
            &config,
            &SELECTOR_CORPUS,
            clock,
            &mut parser,
            HumanEmitter::new(stdout),
        )?,
        OutputFormat::Json => run_harness(
            &config,
            &SELECTOR_CORPUS,
            clock,
            &mut parser,
            JsonEmitter::new(stdout),
        )?,
    };

    tracing::debug!(
        cache_hits = cache.hits(),
        cache_misses = cache.misses(),
        tiers = report.tiers.len(),
        "run complete"
    );
    Ok(())
}

fn parse_format(s: &str) -> Result<OutputFormat, String> {
    s.parse()
}

/// Install the stderr log subscriber. `RUST_LOG` overrides the default
/// filter.
fn init_logging(verbose: bool) {
    let default = if verbose {
        "selbench=debug"
    } else {
        "selbench=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    // A second initialization (e.g. from tests) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
