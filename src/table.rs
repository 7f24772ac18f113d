//! The emitted symbol table.
//!
//! Holds the rendered initializers of retained records in input order. The
//! declared table size is always the number of entries held here.

use crate::symbol::SymbolRecord;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolTable {
    entries: Vec<String>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders `record` and appends it.
    pub fn push(&mut self, record: &SymbolRecord<'_>) {
        self.entries.push(record.to_string());
    }

    /// Number of entries; this is the value of `symbol_table_size`.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Rendered initializers, in the order they were pushed.
    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }
}
