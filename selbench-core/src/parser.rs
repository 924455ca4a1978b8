//! Parser call contract

use crate::error::ParseError;

/// The collaborator under measurement.
///
/// Takes `&mut self` because an implementation may keep an internal cache;
/// the harness never inspects or resets that state.
pub trait SelectorParser {
    /// Parse outcome. Opaque to the harness.
    type Output;

    /// Parse one selector
    fn parse(&mut self, input: &str) -> Result<Self::Output, ParseError>;
}

impl<F, T> SelectorParser for F
where
    F: FnMut(&str) -> Result<T, ParseError>,
{
    type Output = T;

    #[inline]
    fn parse(&mut self, input: &str) -> Result<T, ParseError> {
        self(input)
    }
}
