/// Check if a byte may start a scheme (ASCII letter)
pub fn is_scheme_start(b: u8) -> bool {
    b.is_ascii_alphabetic()
}

/// Check if a byte may continue a scheme: letters, `+`, `.`, `-`.
/// Digits are not accepted.
pub fn is_scheme_char(b: u8) -> bool {
    b.is_ascii_alphabetic() || matches!(b, b'+' | b'.' | b'-')
}

/// Check if a byte is an ASCII decimal digit
pub fn is_digit(b: u8) -> bool {
    b.is_ascii_digit()
}
