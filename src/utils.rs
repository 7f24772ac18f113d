//! Utility functions.

/// Returns true if `field` is a non-empty run of hexadecimal digits.
///
/// No `0x` prefix is accepted; the prefix is added on output.
pub fn is_hex(field: &str) -> bool {
    !field.is_empty() && field.bytes().all(|b| b.is_ascii_hexdigit())
}
