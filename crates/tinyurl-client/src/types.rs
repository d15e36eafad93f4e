use std::{fmt, time::Duration};

use url::Url;

/// Fixed creation endpoint of the public shortening API.
pub(crate) const CREATE_ENDPOINT: &str = "https://tinyurl.com/api-create.php";

/// One shortening intent: the target URL plus an optional custom alias.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShortenRequest {
    url: String,
    alias: Option<String>,
}

impl ShortenRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            alias: None,
        }
    }

    /// Sets a custom alias for the short link.
    #[must_use]
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }
}

/// A validated short link returned by the service.
///
/// Guaranteed non-empty and prefixed with the canonical short-link host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShortUrl(String);

impl ShortUrl {
    pub(crate) fn new(url: String) -> Self {
        Self(url)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for ShortUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ShortUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Debug)]
pub struct ClientOptions {
    pub request_timeout: Duration,
    /// Max idle connections per host. Set to 0 to disable pooling and reduce memory.
    pub pool_max_idle_per_host: usize,
    /// Creation endpoint. Overridable so the client can be pointed at a
    /// loopback server in tests; defaults to the public API.
    pub endpoint: Url,
}

impl ClientOptions {
    #[must_use]
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_endpoint(mut self, endpoint: Url) -> Self {
        self.endpoint = endpoint;
        self
    }
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(30),
            pool_max_idle_per_host: 0,
            endpoint: Url::parse(CREATE_ENDPOINT).expect("create endpoint is a valid URL"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shorten_request_holds_url_and_alias() {
        let request = ShortenRequest::new("https://www.example.com").with_alias("myalias");
        assert_eq!(request.url(), "https://www.example.com");
        assert_eq!(request.alias(), Some("myalias"));
    }

    #[test]
    fn shorten_request_without_alias() {
        let request = ShortenRequest::new("https://www.example.com");
        assert_eq!(request.alias(), None);
    }

    #[test]
    fn short_url_accessors() {
        let short = ShortUrl::new("https://tinyurl.com/abc123".to_string());
        assert_eq!(short.as_str(), "https://tinyurl.com/abc123");
        assert_eq!(short.to_string(), "https://tinyurl.com/abc123");
        assert_eq!(short.clone().into_string(), "https://tinyurl.com/abc123");
    }

    #[test]
    fn client_options_defaults() {
        let options = ClientOptions::default();
        assert_eq!(options.request_timeout, Duration::from_secs(30));
        assert_eq!(options.pool_max_idle_per_host, 0);
        assert_eq!(options.endpoint.as_str(), CREATE_ENDPOINT);
    }

    #[test]
    fn client_options_chainers() {
        let endpoint = Url::parse("http://127.0.0.1:9999/api-create.php").unwrap();
        let options = ClientOptions::default()
            .with_request_timeout(Duration::from_millis(250))
            .with_endpoint(endpoint.clone());
        assert_eq!(options.request_timeout, Duration::from_millis(250));
        assert_eq!(options.endpoint, endpoint);
    }
}
