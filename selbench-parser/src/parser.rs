// Selector Parser
//
// Parses with the pest grammar in `grammar.pest`, then lowers the parse tree
// into the typed AST. Parenthesis depth is checked before pest runs, since
// pest's call limit bounds total rule invocations but not recursion depth.

use crate::ast::{
    AttrOperator, AttributeSelector, Combinator, ComplexSelector, CompoundSelector,
    PseudoArgument, PseudoClass, SelectorList, SimpleSelector,
};
use crate::error::{MAX_NESTING_DEPTH, Result, SelectorError};
use pest::Parser;
use pest::iterators::Pair;
use pest_derive::Parser;
use std::num::NonZeroUsize;

#[derive(Parser)]
#[grammar = "grammar.pest"]
struct SelectorGrammar;

/// Default pest call limit
pub const DEFAULT_CALL_LIMIT: usize = 1_000_000;

/// Limits applied while parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseConfig {
    /// Maximum parenthesis nesting depth
    pub max_nesting_depth: usize,
    /// Maximum number of rule invocations per parse (0 disables the limit)
    pub max_call_limit: usize,
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            max_nesting_depth: MAX_NESTING_DEPTH,
            max_call_limit: DEFAULT_CALL_LIMIT,
        }
    }
}

/// Parse a selector list with the default limits.
///
/// # Example
/// ```
/// use selbench_parser::{parse, SimpleSelector};
///
/// let list = parse("div.item")?;
/// assert_eq!(list.0[0].first.0[1], SimpleSelector::Class("item".into()));
/// # Ok::<(), selbench_parser::SelectorError>(())
/// ```
pub fn parse(input: &str) -> Result<SelectorList> {
    parse_with_config(input, ParseConfig::default())
}

/// Parse a selector list with custom limits.
pub fn parse_with_config(input: &str, config: ParseConfig) -> Result<SelectorList> {
    if input.trim().is_empty() {
        return Err(SelectorError::Empty);
    }

    pest::set_call_limit(NonZeroUsize::new(config.max_call_limit));
    validate_nesting_depth(input, config.max_nesting_depth)?;

    let pairs = SelectorGrammar::parse(Rule::selectors, input)
        .map_err(|e| SelectorError::from_pest(e, input))?;

    // selectors = { SOI ~ ws* ~ selector_list ~ ws* ~ EOI }
    let list = pairs
        .flat_map(|pair| pair.into_inner())
        .find(|pair| pair.as_rule() == Rule::selector_list)
        .ok_or(SelectorError::Empty)?;
    build_list(list, input)
}

/// Reject input whose parentheses nest deeper than `max_depth`.
///
/// Counts every `(`, including ones inside quoted strings.
fn validate_nesting_depth(input: &str, max_depth: usize) -> Result<()> {
    let mut depth = 0usize;

    for (position, ch) in input.char_indices() {
        match ch {
            '(' => {
                depth += 1;
                if depth > max_depth {
                    return Err(SelectorError::NestingTooDeep {
                        position,
                        depth,
                        limit: max_depth,
                    });
                }
            }
            ')' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }

    Ok(())
}

// ============================================================================
// Parse tree -> AST
// ============================================================================

fn build_list(pair: Pair<'_, Rule>, input: &str) -> Result<SelectorList> {
    pair.into_inner()
        .filter(|p| p.as_rule() == Rule::complex)
        .map(|p| build_complex(p, input))
        .collect::<Result<Vec<_>>>()
        .map(SelectorList)
}

fn build_complex(pair: Pair<'_, Rule>, input: &str) -> Result<ComplexSelector> {
    let mut compounds = Vec::new();
    let mut combinators = Vec::new();

    for p in pair.into_inner() {
        match p.as_rule() {
            Rule::compound => compounds.push(build_compound(p, input)?),
            Rule::combinator => combinators.push(combinator(p.as_str())),
            _ => {}
        }
    }

    // complex = { compound ~ (combinator ~ compound)* }
    let mut compounds = compounds.into_iter();
    let first = compounds.next().unwrap_or_default();
    let rest = combinators.into_iter().zip(compounds).collect();
    Ok(ComplexSelector { first, rest })
}

fn combinator(text: &str) -> Combinator {
    match text.trim() {
        ">" => Combinator::Child,
        "+" => Combinator::NextSibling,
        "~" => Combinator::SubsequentSibling,
        _ => Combinator::Descendant,
    }
}

fn build_compound(pair: Pair<'_, Rule>, input: &str) -> Result<CompoundSelector> {
    let mut parts = Vec::new();

    for p in pair.into_inner() {
        let text = p.as_str();
        let simple = match p.as_rule() {
            Rule::universal => SimpleSelector::Universal,
            Rule::type_sel => SimpleSelector::Type(unescape(text)),
            Rule::id => SimpleSelector::Id(unescape(&text[1..])),
            Rule::class => SimpleSelector::Class(unescape(&text[1..])),
            Rule::attribute => SimpleSelector::Attribute(build_attribute(p)),
            Rule::pseudo_element => {
                SimpleSelector::PseudoElement(unescape(&text[2..]).to_ascii_lowercase())
            }
            Rule::pseudo_class => SimpleSelector::PseudoClass(build_pseudo_class(p, input)?),
            _ => continue,
        };
        parts.push(simple);
    }

    Ok(CompoundSelector(parts))
}

fn build_attribute(pair: Pair<'_, Rule>) -> AttributeSelector {
    let mut name = String::new();
    let mut operator = None;
    let mut value = None;
    let mut case_flag = None;

    for p in pair.into_inner() {
        match p.as_rule() {
            Rule::attr_name => name = unescape(p.as_str()),
            Rule::attr_operator => operator = Some(attr_operator(p.as_str())),
            Rule::attr_ident => value = Some(unescape(p.as_str())),
            Rule::string => value = Some(unquote(p.as_str())),
            Rule::case_flag => {
                case_flag = p.as_str().chars().next().map(|c| c.to_ascii_lowercase());
            }
            _ => {}
        }
    }

    AttributeSelector {
        name,
        matcher: operator.zip(value),
        case_flag,
    }
}

fn attr_operator(text: &str) -> AttrOperator {
    match text {
        "~=" => AttrOperator::Includes,
        "|=" => AttrOperator::DashMatch,
        "^=" => AttrOperator::Prefix,
        "$=" => AttrOperator::Suffix,
        "*=" => AttrOperator::Substring,
        _ => AttrOperator::Equals,
    }
}

fn build_pseudo_class(pair: Pair<'_, Rule>, input: &str) -> Result<PseudoClass> {
    let mut name = String::new();
    let mut argument = None;

    // pseudo_class = { ":" ~ (selector_fn | raw_fn | pseudo_name) }
    for p in pair.into_inner().flat_map(|p| match p.as_rule() {
        Rule::selector_fn | Rule::raw_fn => p.into_inner().collect(),
        _ => vec![p],
    }) {
        match p.as_rule() {
            Rule::selector_fn_name | Rule::pseudo_name => {
                name = unescape(p.as_str()).to_ascii_lowercase();
            }
            Rule::selector_list => {
                argument = Some(PseudoArgument::Selectors(build_list(p, input)?));
            }
            Rule::raw_argument => {
                let raw = p.as_str().trim();
                if raw.is_empty() {
                    let position = p.as_span().start();
                    return Err(SelectorError::syntax(input, position, "pseudo-class argument"));
                }
                argument = Some(PseudoArgument::Raw(raw.to_string()));
            }
            _ => {}
        }
    }

    Ok(PseudoClass { name, argument })
}

/// Strip the quotes from a string token and resolve its escapes.
fn unquote(text: &str) -> String {
    let inner = text.get(1..text.len().saturating_sub(1)).unwrap_or_default();
    unescape(inner)
}

/// Resolve CSS escapes: `\` plus up to six hex digits (one trailing
/// whitespace char is consumed), `\` plus newline (removed), or `\` plus any
/// other char (taken literally).
fn unescape(text: &str) -> String {
    if !text.contains('\\') {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }

        let mut code = 0u32;
        let mut digits = 0;
        while digits < 6 {
            match chars.peek().and_then(|c| c.to_digit(16)) {
                Some(d) => {
                    code = code * 16 + d;
                    digits += 1;
                    chars.next();
                }
                None => break,
            }
        }

        if digits > 0 {
            match chars.peek() {
                Some('\r') => {
                    chars.next();
                    if chars.peek() == Some(&'\n') {
                        chars.next();
                    }
                }
                Some(' ' | '\t' | '\n' | '\x0C') => {
                    chars.next();
                }
                _ => {}
            }
            out.push(match char::from_u32(code) {
                Some(ch) if code != 0 => ch,
                _ => char::REPLACEMENT_CHARACTER,
            });
            continue;
        }

        match chars.next() {
            Some('\r') => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
            }
            Some('\n' | '\x0C') | None => {}
            Some(other) => out.push(other),
        }
    }

    out
}
