//! Prefix-based symbol filter.
//!
//! Excludes symbols whose names start with any of a configured set of prefixes.
//! With no prefixes configured nothing is excluded.

use super::SymbolFilter;

/// Prefix GCC gives to the labels of nested (local) functions.
pub const NESTED_FUNCTION_PREFIX: &str = "__func__.";

/// Excludes names starting with one of its prefixes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrefixFilter {
    prefixes: Vec<String>,
}

impl PrefixFilter {
    pub fn new<I, S>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            prefixes: prefixes.into_iter().map(Into::into).collect(),
        }
    }

    /// A filter dropping compiler-generated nested-function labels.
    pub fn nested_functions() -> Self {
        Self::new([NESTED_FUNCTION_PREFIX])
    }

    /// Adds a prefix to exclude.
    pub fn push(&mut self, prefix: impl Into<String>) {
        self.prefixes.push(prefix.into());
    }

    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }

    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty()
    }
}

impl SymbolFilter for PrefixFilter {
    fn excludes(&self, name: &str) -> bool {
        self.prefixes.iter().any(|p| name.starts_with(p.as_str()))
    }
}
