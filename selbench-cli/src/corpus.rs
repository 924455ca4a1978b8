//! Selector corpus

/// A named group of selectors of similar complexity
#[derive(Debug, Clone, Copy)]
pub struct Tier {
    /// Short identifier used in logs
    pub id: &'static str,
    /// Display name
    pub name: &'static str,
    /// Selectors, in reporting order
    pub inputs: &'static [&'static str],
}

/// Tiers plus the selector repeated by the cache probe
#[derive(Debug, Clone, Copy)]
pub struct Corpus {
    /// Tiers, in run order
    pub tiers: &'static [Tier],
    /// Input for the cache effectiveness probe
    pub cache_probe_input: &'static str,
}

/// Single-component selectors
pub const SIMPLE: Tier = Tier {
    id: "simple",
    name: "Simple Selectors",
    inputs: &["div", ".class", "#id", "*"],
};

/// Two or three compounds with plain combinators
pub const MEDIUM: Tier = Tier {
    id: "medium",
    name: "Medium Complexity",
    inputs: &["div > p", ".container .item", "#main > div.active", "ul li a"],
};

/// Attributes, pseudo-classes and sibling combinators
pub const COMPLEX: Tier = Tier {
    id: "complex",
    name: "Complex Selectors",
    inputs: &[
        r#"div[data-id="value"] > p.class:nth-child(2)"#,
        "#header .nav ul li:not(.active) a[href]",
        ".container > div:first-child + span",
        r#"input[type="text"]:focus ~ label"#,
    ],
};

/// The built-in corpus: simple, medium, complex, then the probe input
pub const SELECTOR_CORPUS: Corpus = Corpus {
    tiers: &[SIMPLE, MEDIUM, COMPLEX],
    cache_probe_input: "div.test > p#content",
};
