#![warn(missing_docs)]
//! selbench Report - Report Emission
//!
//! Renders harness results in two formats:
//! - Human (streamed line by line while the harness runs)
//! - JSON (machine-readable, written once the run completes)

mod emitter;
mod human;
mod json;
mod report;

pub use emitter::{Emitter, NullEmitter};
pub use human::{
    HumanEmitter, format_cache_probe, format_human_report, format_result_line,
    format_thousands, format_tier_average,
};
pub use json::{JsonEmitter, generate_json_report};
pub use report::{Report, ReportConfig, ReportMeta, SCHEMA_VERSION};

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable terminal output
    Human,
    /// JSON with full schema
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" | "text" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("Unknown output format: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_parse() {
        assert_eq!("human".parse::<OutputFormat>(), Ok(OutputFormat::Human));
        assert_eq!("TEXT".parse::<OutputFormat>(), Ok(OutputFormat::Human));
        assert_eq!("json".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert!("csv".parse::<OutputFormat>().is_err());
    }
}
