//! Typed view over the client cookie jar. The backend issues the CSRF token
//! as a readable cookie while the session cookie stays opaque; the adapter
//! only ever needs "give me cookie N for the API origin", so that is the
//! whole surface here.

use reqwest::cookie::{CookieStore, Jar};
use std::sync::Arc;
use url::Url;

/// Name of the CSRF cookie issued by the backend bootstrap endpoint.
pub const XSRF_COOKIE: &str = "XSRF-TOKEN";

/// Cookie jar scoped to the API origin with name-based lookup.
#[derive(Clone, Debug)]
pub struct CookieJar {
    inner: Arc<Jar>,
    origin: Url,
}

impl CookieJar {
    /// Creates an empty jar for the given API origin.
    #[must_use]
    pub fn new(origin: Url) -> Self {
        Self {
            inner: Arc::new(Jar::default()),
            origin,
        }
    }

    /// Shared store handed to the HTTP client so responses update the jar.
    #[must_use]
    pub(crate) fn provider(&self) -> Arc<Jar> {
        Arc::clone(&self.inner)
    }

    /// Returns the percent-decoded value of the named cookie, matching the
    /// name exactly. Absent cookies are `None`, never an error.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<String> {
        let header = self.inner.cookies(&self.origin)?;
        let raw = header.to_str().ok()?;

        raw.split("; ").find_map(|pair| {
            let (cookie_name, value) = pair.split_once('=')?;
            if cookie_name == name {
                Some(percent_decode(value))
            } else {
                None
            }
        })
    }
}

/// Decodes `%XX` escapes, leaving malformed escapes untouched.
fn percent_decode(value: &str) -> String {
    let bytes = value.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len());
    let mut index = 0;

    while index < bytes.len() {
        if bytes[index] == b'%' && index + 2 < bytes.len() {
            if let (Some(hi), Some(lo)) = (hex_value(bytes[index + 1]), hex_value(bytes[index + 2]))
            {
                decoded.push(hi * 16 + lo);
                index += 3;
                continue;
            }
        }
        decoded.push(bytes[index]);
        index += 1;
    }

    String::from_utf8_lossy(&decoded).into_owned()
}

fn hex_value(byte: u8) -> Option<u8> {
    char::from(byte).to_digit(16).map(|digit| digit as u8)
}

#[cfg(test)]
mod tests {
    use super::{percent_decode, CookieJar, XSRF_COOKIE};
    use url::Url;

    fn origin() -> Url {
        Url::parse("https://api.comunidad.test").expect("valid origin")
    }

    #[test]
    fn decodes_percent_escapes() {
        assert_eq!(percent_decode("abc%3D"), "abc=");
        assert_eq!(percent_decode("a%2Fb%2Bc"), "a/b+c");
        assert_eq!(percent_decode("plain"), "plain");
        // Malformed escapes pass through untouched.
        assert_eq!(percent_decode("abc%"), "abc%");
        assert_eq!(percent_decode("abc%3"), "abc%3");
        assert_eq!(percent_decode("abc%ZZ"), "abc%ZZ");
    }

    #[test]
    fn get_matches_cookie_names_exactly() {
        let jar = CookieJar::new(origin());
        jar.provider()
            .add_cookie_str("XSRF-TOKEN=abc%3D; Path=/", &origin());
        jar.provider()
            .add_cookie_str("NOT-XSRF-TOKEN=other; Path=/", &origin());

        assert_eq!(jar.get(XSRF_COOKIE), Some("abc=".to_string()));
        assert_eq!(jar.get("missing"), None);
    }

    #[test]
    fn absent_cookie_is_none() {
        let jar = CookieJar::new(origin());
        assert_eq!(jar.get(XSRF_COOKIE), None);
    }
}
