/// IPv4 literal validation.
/// Only the strict dotted-decimal form is accepted: four octets, each a
/// decimal number in 0..=255 without leading zeros.
use crate::error::{Error, Result};

/// Parse a dotted-decimal IPv4 literal into its four octets.
pub fn parse_ipv4(input: &str) -> Result<[u8; 4]> {
    let mut octets = [0u8; 4];
    let mut parts = input.split('.');

    for octet in &mut octets {
        let part = parts.next().ok_or(Error::InvalidIpAddress)?;
        *octet = parse_ipv4_octet(part)?;
    }

    if parts.next().is_some() {
        return Err(Error::InvalidIpAddress);
    }

    Ok(octets)
}

/// Check if the input is a dotted-decimal IPv4 literal
pub fn is_ipv4(input: &str) -> bool {
    parse_ipv4(input).is_ok()
}

/// Parse a single decimal octet.
fn parse_ipv4_octet(part: &str) -> Result<u8> {
    if part.is_empty() || part.len() > 3 || !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::InvalidIpAddress);
    }

    // "0" is fine, "01" is not
    if part.len() > 1 && part.starts_with('0') {
        return Err(Error::InvalidIpAddress);
    }

    part.parse::<u8>().map_err(|_| Error::InvalidIpAddress)
}
