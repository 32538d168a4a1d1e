//! Guess input sanitization.

use crate::session::PIN_LENGTH;

/// Rewrite raw input into at most [`PIN_LENGTH`] digits.
///
/// Every non-digit is dropped and the rest is truncated. Keystrokes are never
/// rejected, the field value is simply rewritten after each edit.
///
/// # Examples
///
/// ```
/// use pinhash::game::filter_input;
///
/// assert_eq!(filter_input("4a5-7"), "457");
/// assert_eq!(filter_input("12345"), "123");
/// assert_eq!(filter_input("abc"), "");
/// ```
#[must_use]
pub fn filter_input(raw: &str) -> String {
    raw.chars()
        .filter(char::is_ascii_digit)
        .take(PIN_LENGTH)
        .collect()
}

/// Drop every non-digit without truncating.
#[must_use]
pub fn strip_non_digits(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Check if `raw` becomes a well-formed guess once non-digits are stripped.
#[must_use]
pub fn is_well_formed(raw: &str) -> bool {
    strip_non_digits(raw).len() == PIN_LENGTH
}
