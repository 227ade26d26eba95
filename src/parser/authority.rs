use crate::checkers::split_port;
use crate::helpers::split_userinfo;

/// Borrowed pieces of a `user[:pass]@host[:port]` segment
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct AuthorityParts<'a> {
    pub username: Option<&'a str>,
    pub password: Option<&'a str>,
    pub host: &'a str,
    pub port: Option<u16>,
}

impl core::fmt::Debug for AuthorityParts<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AuthorityParts")
            .field("username", &self.username)
            .field("password", &self.password.map(|_| "***"))
            .field("host", &self.host)
            .field("port", &self.port)
            .finish()
    }
}

/// Split an authority segment.
/// The port is taken from the end first, then the userinfo from the front.
pub fn split_authority(input: &str) -> AuthorityParts<'_> {
    let (rest, port) = match split_port(input) {
        Some((rest, port)) => (rest, Some(port)),
        None => (input, None),
    };

    let (userinfo, host) = split_userinfo(rest);
    let (username, password) = match userinfo {
        Some(userinfo) if !userinfo.is_empty() => match userinfo.split_once(':') {
            Some((username, password)) => (Some(username), Some(password)),
            None => (Some(userinfo), None),
        },
        _ => (None, None),
    };

    AuthorityParts {
        username,
        password,
        host,
        port,
    }
}
