//! Conversions between column numbers and letter labels.

use super::error::AddressError;

const RADIX: usize = 26;

/// Converts a 1-based column number to its letter label (1 -> "A", 27 -> "AA").
///
/// # Errors
///
/// Returns `AddressError::ZeroColumn` for 0.
pub fn number_to_letter(number: usize) -> Result<String, AddressError> {
    if number == 0 {
        return Err(AddressError::ZeroColumn);
    }

    let mut letters = Vec::new();
    let mut n = number;
    while n > 0 {
        // (n - 1) % 26 < 26, so the cast cannot truncate
        #[allow(clippy::cast_possible_truncation)]
        letters.push(char::from(b'A' + ((n - 1) % RADIX) as u8));
        n = (n - 1) / RADIX;
    }

    Ok(letters.into_iter().rev().collect())
}

/// Converts a letter label to its 1-based column number ("A" -> 1, "AZ" -> 52).
///
/// Lowercase letters are accepted.
///
/// # Errors
///
/// Returns `AddressError::EmptyLabel`, `AddressError::InvalidCharacter` or
/// `AddressError::Overflow`.
pub fn letter_to_number(label: &str) -> Result<usize, AddressError> {
    if label.is_empty() {
        return Err(AddressError::EmptyLabel);
    }

    label.chars().try_fold(0usize, |acc, c| {
        if !c.is_ascii_alphabetic() {
            return Err(AddressError::InvalidCharacter {
                label: label.to_string(),
                character: c,
            });
        }
        let value = usize::from(c.to_ascii_uppercase() as u8 - b'A' + 1);
        acc.checked_mul(RADIX)
            .and_then(|shifted| shifted.checked_add(value))
            .ok_or_else(|| AddressError::Overflow(label.to_string()))
    })
}
