/// IPv6 literal validation (RFC 4291 text form, no zone identifiers)
use crate::compat::Vec;
use crate::error::{Error, Result};
use crate::ipv4::parse_ipv4;

/// Parse an IPv6 literal (without brackets, e.g. "`::1`" or "`2001:db8::1`").
/// Returns the 8 u16 segments if valid, or an error if malformed.
pub fn parse_ipv6(input: &str) -> Result<[u16; 8]> {
    // Zone IDs (%) are not part of a URI host
    if input.is_empty() || input.contains('%') {
        return Err(Error::InvalidIpAddress);
    }

    // Check for embedded IPv4 (e.g., "::127.0.0.1")
    let has_embedded_ipv4 = input
        .rfind(':')
        .is_some_and(|pos| input[pos + 1..].contains('.'));

    if has_embedded_ipv4 {
        parse_ipv6_with_ipv4(input)
    } else {
        expand_segments(input, 8)
    }
}

/// Check if the input is an IPv6 literal
pub fn is_ipv6(input: &str) -> bool {
    parse_ipv6(input).is_ok()
}

/// Strip surrounding brackets from `[...]`, if both are present
pub fn strip_brackets(input: &str) -> Option<&str> {
    input.strip_prefix('[')?.strip_suffix(']')
}

/// Parse IPv6 with embedded IPv4 (e.g., "`::ffff:192.168.1.1`").
fn parse_ipv6_with_ipv4(input: &str) -> Result<[u16; 8]> {
    let last_colon = input.rfind(':').ok_or(Error::InvalidIpAddress)?;
    let ipv4 = parse_ipv4(&input[last_colon + 1..])?;

    // "::1.2.3.4" keeps its "::", "1:2:3:4:5:6:1.2.3.4" drops the separator
    let ipv6_part = if input[..last_colon].ends_with(':') {
        &input[..=last_colon]
    } else {
        &input[..last_colon]
    };

    let head = expand_segments(ipv6_part, 6)?;
    let mut segments = [0u16; 8];
    segments[..6].copy_from_slice(&head[..6]);
    segments[6] = u16::from_be_bytes([ipv4[0], ipv4[1]]);
    segments[7] = u16::from_be_bytes([ipv4[2], ipv4[3]]);

    Ok(segments)
}

/// Expand colon-separated hex segments with at most one `::` into exactly
/// `count` segments. The result is always 8 wide; unused tail stays zero.
fn expand_segments(input: &str, count: usize) -> Result<[u16; 8]> {
    let mut segments = [0u16; 8];

    let Some(double_colon_pos) = input.find("::") else {
        // No :: compression - must have exactly `count` segments
        let parsed = parse_segments(input)?;
        if parsed.len() != count {
            return Err(Error::InvalidIpAddress);
        }
        segments[..count].copy_from_slice(&parsed);
        return Ok(segments);
    };

    // Split around :: and parse both parts
    let before = parse_segments(&input[..double_colon_pos])?;
    let after = parse_segments(&input[double_colon_pos + 2..])?;

    // "::" stands for at least one zero segment
    let total = before.len() + after.len();
    if total >= count {
        return Err(Error::InvalidIpAddress);
    }

    segments[..before.len()].copy_from_slice(&before);
    let after_start = count - after.len();
    segments[after_start..count].copy_from_slice(&after);

    Ok(segments)
}

/// Parse a single hex segment (0-ffff).
fn parse_hex_segment(s: &str) -> Result<u16> {
    if s.is_empty() || s.len() > 4 || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(Error::InvalidIpAddress);
    }
    u16::from_str_radix(s, 16).map_err(|_| Error::InvalidIpAddress)
}

/// Parse colon-separated hex segments from a string.
fn parse_segments(s: &str) -> Result<Vec<u16>> {
    if s.is_empty() {
        return Ok(Vec::new());
    }
    s.split(':').map(parse_hex_segment).collect()
}
