use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::error::ShortenResult;
use crate::types::{ShortenRequest, ShortUrl};

/// Contract shared by every shortening client.
///
/// [`TinyUrlClient`](crate::TinyUrlClient) implements it against the public,
/// unauthenticated API; richer authenticated clients expose the same creation
/// contract and can be swapped in behind this trait.
#[async_trait]
pub trait Shortener: Send + Sync {
    /// Create a short URL for `url`, optionally under a custom `alias`.
    ///
    /// A `None`, empty, or whitespace-only alias requests an auto-generated
    /// suffix.
    async fn create_short_url(
        &self,
        url: &str,
        alias: Option<&str>,
        cancel: &CancellationToken,
    ) -> ShortenResult<ShortUrl>;

    /// Request-object form; routes through [`Shortener::create_short_url`].
    async fn create_from_request(
        &self,
        request: &ShortenRequest,
        cancel: &CancellationToken,
    ) -> ShortenResult<ShortUrl> {
        self.create_short_url(request.url(), request.alias(), cancel)
            .await
    }
}
