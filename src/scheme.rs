use crate::types::AuthorityMarker;

/// Get the well-known port of a scheme, if any.
/// The scheme is expected to be lowercase already.
pub fn default_port(scheme: &str) -> Option<u16> {
    match scheme {
        "ftp" => Some(21),
        "ssh" => Some(22),
        "http" => Some(80),
        "https" => Some(443),
        _ => None,
    }
}

/// Check if `port` is the well-known port of `scheme`
pub fn is_default_port(port: u16, scheme: &str) -> bool {
    default_port(scheme) == Some(port)
}

/// Get the `//` rule for a scheme.
pub fn authority_marker(scheme: &str) -> AuthorityMarker {
    match scheme {
        "about" | "mailto" | "opera" | "data" => AuthorityMarker::Never,
        "file" => AuthorityMarker::Always,
        _ => AuthorityMarker::WhenAuthority,
    }
}
