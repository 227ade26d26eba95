use crate::character_sets::{is_digit, is_scheme_char, is_scheme_start};

/// Find the length of a leading `scheme:` prefix, excluding the colon.
/// Returns None if the input does not start with a scheme.
pub fn scheme_len(input: &str) -> Option<usize> {
    let bytes = input.as_bytes();
    if !is_scheme_start(*bytes.first()?) {
        return None;
    }

    let len = bytes.iter().position(|&b| !is_scheme_char(b))?;
    (bytes[len] == b':').then_some(len)
}

/// Split a trailing `:digits` port off the input.
/// Returns the remaining input and the port, or None if there is no port
/// suffix or the digits do not fit in a u16.
pub fn split_port(input: &str) -> Option<(&str, u16)> {
    let colon = input.rfind(':')?;
    let port = parse_port(&input[colon + 1..])?;
    Some((&input[..colon], port))
}

/// Parse a port string to u16.
/// Returns None if empty, contains non-digit characters, or is out of range.
pub fn parse_port(port: &str) -> Option<u16> {
    if port.is_empty() || !port.bytes().all(is_digit) {
        return None;
    }
    port.parse::<u16>().ok()
}
