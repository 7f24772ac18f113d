//! Symbol records.
//!
//! A listing line looks like `nm -S` output: `<address> <size> <kind> <name>`.
//! Records borrow their fields from the line and are rendered straight into
//! a C initializer; nothing outlives the line they came from.

use std::fmt;

use crate::error::{SymtabError, SymtabResult};
use crate::utils::is_hex;

/// Separator between listing fields.
///
/// This is a literal single space, not "any whitespace". A tab or two
/// consecutive spaces either change the field count or leave an empty
/// field; both make the line malformed and it is dropped. The upstream
/// listing producer relies on this, so do not switch to `split_whitespace`.
pub const FIELD_SEPARATOR: char = ' ';

/// Number of fields in a well-formed listing line.
pub const FIELD_COUNT: usize = 4;

/// Splits a listing line into its fields.
///
/// Surrounding whitespace is stripped first. Returns `None` unless the line
/// has exactly [`FIELD_COUNT`] fields, none of them empty.
pub fn split_fields(line: &str) -> Option<[&str; FIELD_COUNT]> {
    let mut parts = line.trim().split(FIELD_SEPARATOR);
    let fields = [parts.next()?, parts.next()?, parts.next()?, parts.next()?];
    if parts.next().is_some() || fields.iter().any(|f| f.is_empty()) {
        return None;
    }
    Some(fields)
}

/// One symbol taken from a listing line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolRecord<'a> {
    /// Start address, hex digits as written in the listing.
    pub address: &'a str,
    /// Size in bytes, hex digits as written in the listing.
    pub size: &'a str,
    /// `nm` type character (`T`, `t`, `D`, ...).
    pub kind: char,
    /// Symbol name. Emitted verbatim inside a string literal.
    pub name: &'a str,
}

impl<'a> SymbolRecord<'a> {
    /// Builds a record from split fields, validating the numeric and kind
    /// fields. `line` is the 1-based input line number used in errors.
    pub fn from_fields(line: usize, fields: [&'a str; FIELD_COUNT]) -> SymtabResult<Self> {
        let [address, size, kind, name] = fields;

        for (field, value) in [("address", address), ("size", size)] {
            if !is_hex(value) {
                return Err(SymtabError::InvalidHex {
                    line,
                    field,
                    value: value.to_string(),
                });
            }
        }

        let mut chars = kind.chars();
        let kind = match (chars.next(), chars.next()) {
            (Some(c), None) => c,
            _ => {
                return Err(SymtabError::InvalidKind {
                    line,
                    value: kind.to_string(),
                })
            }
        };

        Ok(Self {
            address,
            size,
            kind,
            name,
        })
    }
}

/// Renders the record as a `struct symbol` initializer.
impl fmt::Display for SymbolRecord<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{ 0x{}ul, 0x{}, '{}', \"{}\" }}",
            self.address, self.size, self.kind, self.name
        )
    }
}
