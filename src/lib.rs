//! Kernel symbol table generator library.
//!
//! This library turns a symbol listing into the C source of the kernel's
//! static symbol table. It is organized into several modules:
//! - `config`: CLI configuration.
//! - `emitter`: Drives listing lines through parsing, filtering and collection.
//! - `filter`: Exclusion predicates for symbol names.
//! - `symbol`: Listing line parsing and record rendering.
//! - `table`: The collected table entries.
//! - `writer`: C source output.

pub mod config;
pub mod emitter;
pub mod error;
pub mod filter;
pub mod symbol;
pub mod table;
pub mod utils;
pub mod writer;
