use std::fmt;

use crate::HELLO_API_PATH;

/// Address of the remote service the page calls.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl(String);

impl BaseUrl {
    /// Returns `None` for an empty or blank value, which counts as "not configured".
    pub fn new<S: AsRef<str>>(url: S) -> Option<Self> {
        let url = url.as_ref().trim().trim_end_matches('/');
        if url.is_empty() {
            None
        } else {
            Some(Self(url.to_string()))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str { &self.0 }

    #[must_use]
    pub fn hello_endpoint(&self) -> String { format!("{}{HELLO_API_PATH}", self.0) }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.0) }
}

#[cfg(test)]
mod tests {
    use crate::BaseUrl;

    #[test]
    fn test_hello_endpoint() {
        let base_url = BaseUrl::new("http://localhost:8000").unwrap();
        assert_eq!(base_url.hello_endpoint(), "http://localhost:8000/api/hello");

        let base_url = BaseUrl::new("http://localhost:8000//").unwrap();
        assert_eq!(base_url.hello_endpoint(), "http://localhost:8000/api/hello");

        let base_url = BaseUrl::new("https://example.com/prefix/").unwrap();
        assert_eq!(base_url.hello_endpoint(), "https://example.com/prefix/api/hello");
    }

    #[test]
    fn test_blank_is_not_configured() {
        assert!(BaseUrl::new("").is_none());
        assert!(BaseUrl::new("   ").is_none());
        assert!(BaseUrl::new("/").is_none());
    }
}
