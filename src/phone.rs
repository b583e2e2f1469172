//! Brazilian phone number pattern and input masking

use regex::Regex;
use std::sync::LazyLock;

/// Masked Brazilian phone formats: `(dd) dddd-dddd` or `(dd) ddddd-dddd`
pub static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\(\d{2}\) \d{4,5}-\d{4}$").expect("valid phone regex"));

/// Maximum number of digits a phone number can carry (mobile with area code)
pub const MAX_PHONE_DIGITS: usize = 11;

/// Width of a fully masked phone number, e.g. `(11) 98765-4321`
pub const MASKED_PHONE_WIDTH: usize = 15;

/// Check a masked phone string against the accepted formats
pub fn is_valid_phone(value: &str) -> bool {
    PHONE_RE.is_match(value)
}

/// Apply the progressive phone mask to raw input.
///
/// Strips non-digit characters, truncates at [`MAX_PHONE_DIGITS`], then
/// formats: area code in parentheses once a third digit arrives, hyphen
/// before the trailing digits once more than seven accumulate. Idempotent.
pub fn normalize_phone(raw: &str) -> String {
    let digits: String = raw
        .chars()
        .filter(char::is_ascii_digit)
        .take(MAX_PHONE_DIGITS)
        .collect();

    match digits.len() {
        0..=2 => digits,
        3..=7 => format!("({}) {}", &digits[..2], &digits[2..]),
        _ => format!("({}) {}-{}", &digits[..2], &digits[2..7], &digits[7..]),
    }
}
