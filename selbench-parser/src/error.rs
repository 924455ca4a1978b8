// Error types for the selector parser.
//
// pest's error type stays inside this crate; callers only see
// `SelectorError`.

use crate::parser::Rule;

/// Default maximum parenthesis nesting, e.g. `:not(:is(...))`.
pub const MAX_NESTING_DEPTH: usize = 32;

/// Top-level error type for parsing.
///
/// Positions are byte offsets into the input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectorError {
    /// The input contained no selector.
    #[error("empty selector")]
    Empty,

    /// The grammar rejected the input.
    #[error("syntax error at {position}: expected {expected}")]
    Syntax {
        /// Byte offset where parsing could go no further
        position: usize,
        /// Character at `position`, `None` at end of input
        found: Option<char>,
        /// Grammar rules that would have been accepted there
        expected: String,
    },

    /// Parentheses nested deeper than the configured limit.
    #[error("nesting depth {depth} at {position} exceeds maximum of {limit}")]
    NestingTooDeep {
        /// Byte offset of the opening parenthesis that crossed the limit
        position: usize,
        /// Depth reached
        depth: usize,
        /// Configured limit
        limit: usize,
    },

    /// The parser gave up, e.g. on reaching its rule call limit.
    #[error("parser aborted at {position}: {message}")]
    Aborted {
        /// Byte offset reported by the parser
        position: usize,
        /// Parser message
        message: String,
    },
}

impl SelectorError {
    pub(crate) fn syntax(input: &str, position: usize, expected: impl Into<String>) -> Self {
        Self::Syntax {
            position,
            found: input.get(position..).and_then(|rest| rest.chars().next()),
            expected: expected.into(),
        }
    }

    pub(crate) fn from_pest(err: pest::error::Error<Rule>, input: &str) -> Self {
        use pest::error::{ErrorVariant, InputLocation};

        let position = match err.location {
            InputLocation::Pos(pos) => pos,
            InputLocation::Span((start, _)) => start,
        };

        match err.variant {
            ErrorVariant::ParsingError {
                positives,
                negatives,
            } => {
                let expected = positives
                    .iter()
                    .map(|r| format!("{r:?}"))
                    .chain(negatives.iter().map(|r| format!("not {r:?}")))
                    .collect::<Vec<_>>()
                    .join(", ");
                let expected = if expected.is_empty() {
                    "selector".to_string()
                } else {
                    expected
                };
                Self::syntax(input, position, expected)
            }
            ErrorVariant::CustomError { message } => Self::Aborted { position, message },
        }
    }
}

/// Result type alias for selector parsing.
pub type Result<T> = std::result::Result<T, SelectorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_syntax_records_found_char() {
        let err = SelectorError::syntax("div)", 3, "compound");
        assert_eq!(
            err,
            SelectorError::Syntax {
                position: 3,
                found: Some(')'),
                expected: "compound".to_string(),
            }
        );
        assert_eq!(err.to_string(), "syntax error at 3: expected compound");
    }

    #[test]
    fn test_syntax_at_end_of_input() {
        let err = SelectorError::syntax("div >", 5, "compound");
        assert!(matches!(err, SelectorError::Syntax { found: None, .. }));
    }

    #[test]
    fn test_nesting_message() {
        let err = SelectorError::NestingTooDeep {
            position: 10,
            depth: 33,
            limit: 32,
        };
        assert_eq!(
            err.to_string(),
            "nesting depth 33 at 10 exceeds maximum of 32"
        );
    }
}
