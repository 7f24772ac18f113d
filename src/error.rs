//! Error types.
//!
//! Malformed or excluded lines are not errors; they are dropped by the emitter.
//! Everything here aborts generation.

use thiserror::Error;

pub type SymtabResult<T> = Result<T, SymtabError>;

#[derive(Error, Debug)]
pub enum SymtabError {
    #[error("line {line}: {field} field is not a hexadecimal number: {value:?}")]
    InvalidHex {
        line: usize,
        field: &'static str,
        value: String,
    },
    #[error("line {line}: not valid UTF-8")]
    InvalidUtf8 { line: usize },
    #[error("line {line}: symbol kind must be a single character: {value:?}")]
    InvalidKind { line: usize, value: String },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
