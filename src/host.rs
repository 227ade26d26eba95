use crate::compat::{String, ToString};
use crate::error::{Error, Result};
use crate::filter::Filter;
use crate::ipv4::is_ipv4;
use crate::ipv6::{is_ipv6, strip_brackets};

/// A validated IP address literal, stored as written.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum IpAddress {
    /// Dotted-decimal IPv4 literal
    V4(String),
    /// IPv6 literal without brackets
    V6(String),
}

impl IpAddress {
    /// Validate an IPv4 or IPv6 literal (IPv6 without brackets).
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidIpAddress` when `input` is neither a
    /// dotted-decimal IPv4 literal nor an unbracketed IPv6 literal.
    pub fn parse(input: &str) -> Result<Self> {
        if is_ipv4(input) {
            Ok(Self::V4(input.to_string()))
        } else if is_ipv6(input) {
            Ok(Self::V6(input.to_string()))
        } else {
            Err(Error::InvalidIpAddress)
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::V4(ip) | Self::V6(ip) => ip,
        }
    }

    pub fn is_ipv6(&self) -> bool {
        matches!(self, Self::V6(_))
    }
}

impl core::fmt::Display for IpAddress {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::V4(ip) => f.write_str(ip),
            Self::V6(ip) => write!(f, "[{ip}]"),
        }
    }
}

/// URI host, held either as an IP address or as a
/// subdomain / root domain / top-level domain triple.
///
/// ```
/// use urikit::{Filter, Host};
///
/// let host = Host::parse("www.example.com");
/// assert_eq!(host.sub_domain(), "www");
/// assert_eq!(host.root_domain(), "example");
/// assert_eq!(host.top_level_domain(), "com");
/// assert_eq!(host.get_host(Filter::STRIP_SUBDOMAIN), "example.com");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Host {
    ip: Option<IpAddress>,
    sub_domain: String,
    root_domain: String,
    top_level_domain: String,
}

impl Host {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a host string. Never fails: anything that is neither an IP
    /// literal nor a dotted name ends up as the root domain.
    pub fn parse(host: &str) -> Self {
        if is_ipv4(host) {
            return Self {
                ip: Some(IpAddress::V4(host.to_string())),
                ..Self::default()
            };
        }

        if let Some(ip) = strip_brackets(host).filter(|ip| is_ipv6(ip)) {
            return Self {
                ip: Some(IpAddress::V6(ip.to_string())),
                ..Self::default()
            };
        }

        if let Some((sub_domain, root_domain, top_level_domain)) = split_domain(host) {
            return Self {
                ip: None,
                sub_domain: sub_domain.to_string(),
                root_domain: root_domain.to_string(),
                top_level_domain: top_level_domain.to_string(),
            };
        }

        if !host.is_empty() {
            tracing::trace!(host, "host is not a dotted name, keeping it as root domain");
        }
        Self {
            root_domain: host.to_string(),
            ..Self::default()
        }
    }

    /// Render the host. Only `Filter::STRIP_SUBDOMAIN` affects the output.
    pub fn get_host(&self, filter: Filter) -> String {
        if let Some(ip) = &self.ip {
            return ip.to_string();
        }

        if self.root_domain.is_empty() || self.top_level_domain.is_empty() {
            return self.root_domain.clone();
        }

        let mut host = String::with_capacity(
            self.sub_domain.len() + self.root_domain.len() + self.top_level_domain.len() + 2,
        );
        if !self.sub_domain.is_empty() && !filter.contains(Filter::STRIP_SUBDOMAIN) {
            host.push_str(&self.sub_domain);
            host.push('.');
        }
        host.push_str(&self.root_domain);
        host.push('.');
        host.push_str(&self.top_level_domain);
        host
    }

    /// Check if nothing would be rendered
    pub fn is_empty(&self) -> bool {
        self.ip.is_none() && self.root_domain.is_empty()
    }

    pub fn is_ip(&self) -> bool {
        self.ip.is_some()
    }

    /// Set the IP address. An empty string clears it; a valid address
    /// replaces any domain labels.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidIpAddress` when `ip` is neither an IPv4 nor an
    /// IPv6 literal; the host is left unchanged.
    pub fn set_ip(&mut self, ip: &str) -> Result<&mut Self> {
        if ip.is_empty() {
            self.ip = None;
            return Ok(self);
        }

        match IpAddress::parse(ip) {
            Ok(ip) => {
                *self = Self {
                    ip: Some(ip),
                    ..Self::default()
                };
                Ok(self)
            }
            Err(err) => {
                tracing::debug!(ip, "rejecting invalid IP address");
                Err(err)
            }
        }
    }

    pub fn ip(&self) -> Option<&IpAddress> {
        self.ip.as_ref()
    }

    pub fn set_sub_domain(&mut self, sub_domain: &str) -> &mut Self {
        self.sub_domain = sub_domain.to_string();
        self
    }

    pub fn sub_domain(&self) -> &str {
        &self.sub_domain
    }

    pub fn set_root_domain(&mut self, root_domain: &str) -> &mut Self {
        self.root_domain = root_domain.to_string();
        self
    }

    pub fn root_domain(&self) -> &str {
        &self.root_domain
    }

    pub fn set_top_level_domain(&mut self, top_level_domain: &str) -> &mut Self {
        self.top_level_domain = top_level_domain.to_string();
        self
    }

    pub fn top_level_domain(&self) -> &str {
        &self.top_level_domain
    }
}

/// Split `sub.root.tld` on its last two dots.
/// Returns None unless both root and top-level labels are non-empty.
/// The subdomain keeps every leading label (`a.b` in `a.b.example.com`).
fn split_domain(host: &str) -> Option<(&str, &str, &str)> {
    let (rest, top_level_domain) = host.rsplit_once('.')?;
    let (sub_domain, root_domain) = rest.rsplit_once('.').unwrap_or(("", rest));

    if root_domain.is_empty() || top_level_domain.is_empty() {
        return None;
    }

    Some((sub_domain, root_domain, top_level_domain))
}

impl core::fmt::Display for Host {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.get_host(Filter::NONE))
    }
}

impl From<&str> for Host {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl From<String> for Host {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Host {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.get_host(Filter::NONE))
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Host {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::parse(&s))
    }
}
