//! The shortening client and its transport handle.

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;
use tracing::debug;
use url::Url;

use crate::{
    error::{ShortenError, ShortenResult},
    response::{self, Classified},
    traits::Shortener,
    types::{ClientOptions, ShortenRequest, ShortUrl},
    validate,
};

/// HTTP transport handle with its construction-time ownership mode.
///
/// `close()` releases the underlying client only when it was created
/// internally; an externally supplied transport is never released.
#[derive(Debug)]
struct Transport {
    client: Option<reqwest::Client>,
    owned: bool,
}

impl Transport {
    /// # Panics
    ///
    /// Panics if the `reqwest::Client` builder fails to build.
    fn owned(options: &ClientOptions) -> Self {
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .pool_max_idle_per_host(options.pool_max_idle_per_host)
            .build()
            .expect("failed to build reqwest client");
        Self {
            client: Some(client),
            owned: true,
        }
    }

    fn shared(client: reqwest::Client) -> Self {
        Self {
            client: Some(client),
            owned: false,
        }
    }

    fn get(&self) -> ShortenResult<&reqwest::Client> {
        self.client
            .as_ref()
            .ok_or_else(|| ShortenError::invalid_argument("client", "client has been closed"))
    }

    /// Idempotent. Only an owned client is released.
    fn close(&mut self) {
        if self.owned {
            self.client.take();
        }
    }
}

/// Client for the public TinyURL shortening API.
///
/// Stateless across calls; the underlying transport is safe for concurrent
/// in-flight requests. No automatic retries: every failure surfaces once as a
/// [`ShortenError`] and retrying is the caller's decision.
#[derive(Debug)]
pub struct TinyUrlClient {
    transport: Transport,
    options: ClientOptions,
}

impl TinyUrlClient {
    /// Creates a client that owns its transport.
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(ClientOptions::default())
    }

    /// Creates a client that owns its transport, with explicit options.
    #[must_use]
    pub fn with_options(options: ClientOptions) -> Self {
        Self {
            transport: Transport::owned(&options),
            options,
        }
    }

    /// Creates a client on a caller-owned transport. The transport is never
    /// released by this client.
    #[must_use]
    pub fn from_transport(client: reqwest::Client) -> Self {
        Self::from_transport_with_options(client, ClientOptions::default())
    }

    /// Creates a client on a caller-owned transport, with explicit options.
    #[must_use]
    pub fn from_transport_with_options(client: reqwest::Client, options: ClientOptions) -> Self {
        Self {
            transport: Transport::shared(client),
            options,
        }
    }

    /// Releases the transport if this client created it. Safe to call more
    /// than once; a caller-owned transport is left untouched and stays
    /// usable. Dropping the client has the same effect.
    pub fn close(&mut self) {
        self.transport.close();
    }

    /// Checks whether the owned transport has been released.
    pub fn is_closed(&self) -> bool {
        self.transport.client.is_none()
    }

    /// Checks whether this client created (and will release) its transport.
    pub fn owns_transport(&self) -> bool {
        self.transport.owned
    }

    /// # Errors
    ///
    /// Returns [`ShortenError`] on invalid input, service failure, or
    /// cancellation.
    pub async fn create_short_url(
        &self,
        url: &str,
        alias: Option<&str>,
        cancel: &CancellationToken,
    ) -> ShortenResult<ShortUrl> {
        <Self as Shortener>::create_short_url(self, url, alias, cancel).await
    }

    /// # Errors
    ///
    /// Returns [`ShortenError`] on invalid input, service failure, or
    /// cancellation.
    pub async fn create_from_request(
        &self,
        request: &ShortenRequest,
        cancel: &CancellationToken,
    ) -> ShortenResult<ShortUrl> {
        <Self as Shortener>::create_from_request(self, request, cancel).await
    }

    fn build_request_url(&self, url: &str, alias: Option<&str>) -> Url {
        let mut request_url = self.options.endpoint.clone();
        {
            let mut query = request_url.query_pairs_mut();
            query.append_pair("url", url);
            if let Some(alias) = alias {
                query.append_pair("alias", alias);
            }
        }
        request_url
    }

    async fn execute(
        &self,
        url: &str,
        alias: Option<&str>,
        cancel: &CancellationToken,
    ) -> ShortenResult<ShortUrl> {
        // Local validation first: malformed input never reaches the network.
        validate::target_url(url)?;
        let alias = validate::normalize_alias(alias)?;

        let http = self.transport.get()?;
        let request_url = self.build_request_url(url, alias);

        debug!(url, alias = ?alias, "requesting short link");

        let request = http.get(request_url).timeout(self.options.request_timeout);

        let response = tokio::select! {
            biased;

            () = cancel.cancelled() => return Err(ShortenError::Cancelled),
            sent = request.send() => sent.map_err(transport_error)?,
        };

        let status = response.status();

        // Body is read regardless of status: the service reports errors as
        // plain text under any status code.
        let body = tokio::select! {
            biased;

            () = cancel.cancelled() => return Err(ShortenError::Cancelled),
            read = response.text() => read.map_err(transport_error)?,
        };

        if !status.is_success() {
            return Err(ShortenError::service(format!(
                "service returned error: {status} - {body}"
            )));
        }

        match response::classify(&body) {
            Classified::Success(short) => {
                debug!(short = %short, "short link created");
                Ok(ShortUrl::new(short))
            }
            Classified::Failure(reason) => Err(ShortenError::service(reason)),
        }
    }
}

impl Default for TinyUrlClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Shortener for TinyUrlClient {
    async fn create_short_url(
        &self,
        url: &str,
        alias: Option<&str>,
        cancel: &CancellationToken,
    ) -> ShortenResult<ShortUrl> {
        self.execute(url, alias, cancel).await
    }
}

/// Maps a transport-level failure, distinguishing the internal request
/// timeout from other network errors. Caller cancellation never reaches this
/// path; it is handled before the transport error surfaces.
fn transport_error(err: reqwest::Error) -> ShortenError {
    if err.is_timeout() {
        ShortenError::transport("request timed out", err)
    } else {
        ShortenError::transport(format!("failed to communicate with service: {err}"), err)
    }
}
