//! City-name validity rule.
//!
//! The rule is byte-wise, not char-wise: a name is valid when it is non-empty
//! and no byte is an ASCII control code (0..=31) or the field separator `;`.
//! Bytes ≥ 128 are allowed as-is, so any non-ASCII UTF-8 name passes.

/// `true` when `name` may denote a city.
///
/// Accepts every non-empty byte string free of `;` and of bytes `0..=31`.
/// Space (32) and DEL (127) are permitted.
#[inline]
pub fn valid_city_name(name: &str) -> bool {
    !name.is_empty() && name.bytes().all(|b| b >= 32 && b != b';')
}
