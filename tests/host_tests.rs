#![allow(clippy::unwrap_used, clippy::panic, clippy::expect_used)]

/// Host decomposition tests
///
/// This test suite covers:
/// - Subdomain / root domain / top-level domain splitting
/// - IPv4 and bracketed IPv6 literals
/// - IP validation on `set_ip`
/// - Rendering with and without the subdomain
use urikit::{Error, Filter, Host};

#[test]
fn test_parse_subdomain_full_host() {
    let host = Host::parse("www.test.com");
    assert_eq!(host.sub_domain(), "www");
    assert_eq!(host.root_domain(), "test");
    assert_eq!(host.top_level_domain(), "com");
}

#[test]
fn test_parse_missing_subdomain() {
    let host = Host::parse("test.com");
    assert_eq!(host.sub_domain(), "");
    assert_eq!(host.root_domain(), "test");
    assert_eq!(host.top_level_domain(), "com");

    let host = Host::parse(".test.com");
    assert_eq!(host.sub_domain(), "");
    assert_eq!(host.root_domain(), "test");
}

#[test]
fn test_parse_nested_subdomain() {
    let host = Host::parse("api.eu.example.org");
    assert_eq!(host.sub_domain(), "api.eu");
    assert_eq!(host.root_domain(), "example");
    assert_eq!(host.top_level_domain(), "org");
    assert_eq!(host.get_host(Filter::NONE), "api.eu.example.org");
    assert_eq!(host.get_host(Filter::STRIP_SUBDOMAIN), "example.org");
}

#[test]
fn test_parse_ip() {
    let host = Host::parse("192.168.1.1");
    assert_eq!(host.ip().map(|ip| ip.as_str()), Some("192.168.1.1"));
    assert!(!host.ip().unwrap().is_ipv6());
}

#[test]
fn test_parse_bracketed_ipv6() {
    let host = Host::parse("[::1]");
    assert_eq!(host.ip().map(|ip| ip.as_str()), Some("::1"));
    assert!(host.ip().unwrap().is_ipv6());
    assert_eq!(host.get_host(Filter::NONE), "[::1]");
}

#[test]
fn test_invalid_ip_is_rejected() {
    let mut host = Host::new();
    assert_eq!(host.set_ip("test").unwrap_err(), Error::InvalidIpAddress);
    assert!(host.ip().is_none());
}

#[test]
fn test_invalid_ip_leaves_previous_value() {
    let mut host = Host::new();
    host.set_ip("10.1.2.3").unwrap();

    for invalid in ["999.1.1.1", "1.2.3", "[::1]", "fe80::1%eth0", "localhost", "1.2.3.4 "] {
        assert!(host.set_ip(invalid).is_err(), "{invalid} should be rejected");
        assert_eq!(host.get_host(Filter::NONE), "10.1.2.3");
    }
}

#[test]
fn test_valid_ips_render() {
    let cases = [
        ("127.0.0.1", "127.0.0.1"),
        ("255.255.255.255", "255.255.255.255"),
        ("::1", "[::1]"),
        ("2001:db8::ff00:42:8329", "[2001:db8::ff00:42:8329]"),
        ("::ffff:192.0.2.128", "[::ffff:192.0.2.128]"),
        ("FE80:0000:0000:0000:0202:B3FF:FE1E:8329", "[FE80:0000:0000:0000:0202:B3FF:FE1E:8329]"),
    ];
    for (ip, rendered) in cases {
        let mut host = Host::new();
        host.set_ip(ip).unwrap();
        assert_eq!(host.get_host(Filter::NONE), rendered);
    }
}

#[test]
fn test_get_host_full_host() {
    assert_eq!(Host::parse("www.test.com").get_host(Filter::NONE), "www.test.com");
}

#[test]
fn test_get_host_missing_subdomain() {
    assert_eq!(Host::parse("test.com").get_host(Filter::NONE), "test.com");
}

#[test]
fn test_get_host_incomplete() {
    let mut host = Host::new();
    host.set_sub_domain("www").set_root_domain("test");
    assert_eq!(host.get_host(Filter::NONE), "test");
}

#[test]
fn test_get_host_from_labels() {
    let mut host = Host::new();
    host.set_sub_domain("www")
        .set_root_domain("test")
        .set_top_level_domain("com");
    assert_eq!(host.get_host(Filter::NONE), "www.test.com");
    assert_eq!(host, Host::parse("www.test.com"));
}

#[test]
fn test_get_host_stripped_subdomain() {
    assert_eq!(
        Host::parse("www.test.com").get_host(Filter::STRIP_SUBDOMAIN),
        "test.com"
    );
}

#[test]
fn test_strip_subdomain_ignored_for_ip() {
    assert_eq!(
        Host::parse("10.0.0.1").get_host(Filter::STRIP_SUBDOMAIN),
        "10.0.0.1"
    );
}

#[test]
fn test_get_host_localhost() {
    let host = Host::parse("localhost");
    assert_eq!(host.get_host(Filter::NONE), "localhost");
    assert_eq!(host.to_string(), "localhost");
}

#[test]
fn test_trailing_dot_falls_back_to_root_domain() {
    let host = Host::parse("example.com.");
    assert_eq!(host.root_domain(), "example.com.");
    assert_eq!(host.top_level_domain(), "");
    assert_eq!(host.to_string(), "example.com.");
}

#[test]
fn test_value_equality() {
    assert_eq!(Host::parse("www.test.com"), Host::from("www.test.com"));
    assert_ne!(Host::parse("www.test.com"), Host::parse("test.com"));
}
