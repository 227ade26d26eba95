/// Errors raised by the validating setters.
///
/// Parsing itself never fails; this is the invalid-input condition reported
/// when a value handed to a setter cannot be represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The value passed to `Host::set_ip` is neither an IPv4 nor an IPv6 literal
    InvalidIpAddress,
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            Self::InvalidIpAddress => "Invalid IP address provided",
        };
        f.write_str(msg)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// Result type for validating setters
pub type Result<T> = core::result::Result<T, Error>;
