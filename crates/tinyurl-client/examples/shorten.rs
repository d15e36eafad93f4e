//! Shorten a URL from the command line, optionally under a custom alias.
//!
//! ```
//! cargo run -p tinyurl-client --example shorten -- <URL> [ALIAS]
//! ```

use std::{env::args, error::Error};

use tinyurl_client::TinyUrlClient;
use tokio_util::sync::CancellationToken;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let url = args()
        .nth(1)
        .unwrap_or_else(|| "https://www.rust-lang.org/".to_string());
    let alias = args().nth(2);

    info!("shortening {url}");

    let client = TinyUrlClient::new();
    let short = client
        .create_short_url(&url, alias.as_deref(), &CancellationToken::new())
        .await?;

    println!("{short}");

    Ok(())
}
