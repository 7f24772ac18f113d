//! Symbol filtering.
//!
//! This module defines the `SymbolFilter` trait, the exclusion predicate applied
//! to well-formed records before they reach the table. The emitter stays
//! generic over it; concrete policies live in submodules.

pub mod prefix;

/// Decides whether a symbol is left out of the generated table.
pub trait SymbolFilter {
    /// Returns true if the symbol called `name` must not be emitted.
    fn excludes(&self, name: &str) -> bool;
}

impl<F> SymbolFilter for F
where
    F: Fn(&str) -> bool,
{
    fn excludes(&self, name: &str) -> bool {
        self(name)
    }
}
