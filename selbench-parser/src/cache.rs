// Memoizing front-end for `parse`, keyed by exact input text.

use crate::ast::SelectorList;
use crate::error::Result;
use crate::parser::parse;
use fxhash::FxHashMap;
use std::sync::Arc;

/// Default number of distinct selectors kept before the cache is flushed.
pub const DEFAULT_CACHE_CAPACITY: usize = 1024;

/// Parser that returns a shared result for any input it has seen before.
///
/// Failed parses are not cached. When the cache is full it is cleared
/// wholesale before the next insert.
#[derive(Debug)]
pub struct CachingParser {
    cache: FxHashMap<String, Arc<SelectorList>>,
    capacity: usize,
    hits: u64,
    misses: u64,
}

impl CachingParser {
    /// Create a parser with [`DEFAULT_CACHE_CAPACITY`]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CACHE_CAPACITY)
    }

    /// Create a parser holding at most `capacity` entries (0 disables caching)
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cache: FxHashMap::default(),
            capacity,
            hits: 0,
            misses: 0,
        }
    }

    /// Parse `input`, consulting the cache first
    pub fn parse(&mut self, input: &str) -> Result<Arc<SelectorList>> {
        if let Some(hit) = self.cache.get(input) {
            self.hits += 1;
            return Ok(Arc::clone(hit));
        }

        self.misses += 1;
        let parsed = Arc::new(parse(input)?);
        if self.capacity > 0 {
            if self.cache.len() >= self.capacity {
                self.cache.clear();
            }
            self.cache.insert(input.to_owned(), Arc::clone(&parsed));
        }
        Ok(parsed)
    }

    /// Lookups answered from the cache
    pub fn hits(&self) -> u64 {
        self.hits
    }

    /// Lookups that ran the parser
    pub fn misses(&self) -> u64 {
        self.misses
    }

    /// Cached entries
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// Whether nothing is cached
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Drop every cached entry (counters are kept)
    pub fn clear(&mut self) {
        self.cache.clear();
    }
}

impl Default for CachingParser {
    fn default() -> Self {
        Self::new()
    }
}
