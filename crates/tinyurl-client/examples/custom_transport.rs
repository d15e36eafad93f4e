//! Share one caller-owned transport across clients, with Ctrl-C cancellation.
//!
//! ```
//! cargo run -p tinyurl-client --example custom_transport -- <URL>...
//! ```

use std::{env::args, error::Error};

use tinyurl_client::TinyUrlClient;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let mut urls: Vec<String> = args().skip(1).collect();
    if urls.is_empty() {
        urls.push("https://www.rust-lang.org/".to_string());
    }

    // The transport belongs to this function, not to any shortening client.
    let http = reqwest::Client::builder().use_rustls_tls().build()?;

    let cancel = CancellationToken::new();
    let ctrl_c = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            ctrl_c.cancel();
        }
    });

    let mut client = TinyUrlClient::from_transport(http.clone());
    for url in &urls {
        match client.create_short_url(url, None, &cancel).await {
            Ok(short) => info!("{url} -> {short}"),
            Err(err) if err.is_cancelled() => {
                warn!("cancelled, stopping");
                break;
            }
            Err(err) => warn!("{url}: {err}"),
        }
    }

    // close() never releases a caller-owned transport: the handle is still
    // good for further clients.
    client.close();
    let another = TinyUrlClient::from_transport(http);
    if let Ok(short) = another
        .create_short_url("https://docs.rs/", None, &cancel)
        .await
    {
        info!("transport reused after close: {short}");
    }

    Ok(())
}
