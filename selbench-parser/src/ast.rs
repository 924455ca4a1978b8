// Selector AST.

/// Comma-separated list of selectors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorList(pub Vec<ComplexSelector>);

/// Compound selectors joined by combinators.
///
/// `rest[i]` pairs the combinator to the left of a compound with that compound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComplexSelector {
    /// Leftmost compound
    pub first: CompoundSelector,
    /// Remaining (combinator, compound) pairs, left to right
    pub rest: Vec<(Combinator, CompoundSelector)>,
}

/// Relationship between two compound selectors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Combinator {
    /// Whitespace
    Descendant,
    /// `>`
    Child,
    /// `+`
    NextSibling,
    /// `~`
    SubsequentSibling,
}

/// Simple selectors with no combinator between them
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CompoundSelector(pub Vec<SimpleSelector>);

/// One simple selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimpleSelector {
    /// `*`
    Universal,
    /// `div`
    Type(String),
    /// `#id`
    Id(String),
    /// `.class`
    Class(String),
    /// `[attr op value]`
    Attribute(AttributeSelector),
    /// `:name` or `:name(args)`
    PseudoClass(PseudoClass),
    /// `::name`
    PseudoElement(String),
}

/// Attribute selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeSelector {
    /// Attribute name
    pub name: String,
    /// Operator and value, absent for `[name]`
    pub matcher: Option<(AttrOperator, String)>,
    /// `i` or `s` flag
    pub case_flag: Option<char>,
}

/// Attribute comparison operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttrOperator {
    /// `=`
    Equals,
    /// `~=`
    Includes,
    /// `|=`
    DashMatch,
    /// `^=`
    Prefix,
    /// `$=`
    Suffix,
    /// `*=`
    Substring,
}

/// Pseudo-class with optional argument
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PseudoClass {
    /// Name, lowercased
    pub name: String,
    /// Argument, if the pseudo-class was written as a function
    pub argument: Option<PseudoArgument>,
}

/// Pseudo-class argument
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PseudoArgument {
    /// Nested selectors, for `:not`, `:is`, `:where` and `:has`
    Selectors(SelectorList),
    /// Any other argument, trimmed (e.g. `2n+1` for `:nth-child`)
    Raw(String),
}
