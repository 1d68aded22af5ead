//! querydash-web - Web frontend for querydash using Leptos + Axum

#![recursion_limit = "1024"]

pub mod app;
pub mod components;
pub mod pages;
pub mod session;

#[cfg(feature = "ssr")]
pub mod router;

pub use app::App;
#[cfg(feature = "ssr")]
pub use router::create_router;

#[cfg(feature = "ssr")]
use anyhow::{Context, Result};
#[cfg(feature = "ssr")]
use querydash_core::Config;
#[cfg(feature = "ssr")]
use tokio::net::TcpListener;
#[cfg(feature = "ssr")]
use tracing::info;

/// Run the web server hosting the compiled frontend
#[cfg(feature = "ssr")]
pub async fn run(config: &Config) -> Result<()> {
    let router = create_router(&config.server);

    let addr = config.bind_address();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("Web server listening on http://{}", addr);

    axum::serve(listener, router).await?;

    Ok(())
}
