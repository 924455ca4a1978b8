#![warn(missing_docs)]
//! selbench Parser - CSS Selector Parsing
//!
//! The parser measured by the selbench harness:
//! - [`parse`]: pest grammar parser producing a [`SelectorList`], with
//!   [`parse_with_config`] for custom nesting and call limits
//! - [`CachingParser`]: the same parser behind an exact-text result cache
//!
//! Supported syntax: selector lists, descendant/child/sibling combinators,
//! type, universal, id, class and attribute selectors, pseudo-classes (with
//! nested selector lists for `:not`, `:is`, `:where`, `:has`) and
//! pseudo-elements.

mod ast;
mod cache;
mod error;
mod parser;

pub use ast::{
    AttrOperator, AttributeSelector, Combinator, ComplexSelector, CompoundSelector,
    PseudoArgument, PseudoClass, SelectorList, SimpleSelector,
};
pub use cache::{CachingParser, DEFAULT_CACHE_CAPACITY};
pub use error::{MAX_NESTING_DEPTH, Result, SelectorError};
pub use parser::{DEFAULT_CALL_LIMIT, ParseConfig, parse, parse_with_config};
