// SPDX-License-Identifier: BUSL-1.1
//! FMCSA registry stub server for local development.
//!
//! Serves `GET /carriers/{number}?webKey=...` in the same wire shape as the
//! live QCMobile service so `freight-api` can be exercised without a real
//! registry key. Point the API at it with
//! `FMCSA_BASE_URL=http://127.0.0.1:8091 FMCSA_API_KEY=stub-web-key`.
//!
//! Storage is in-memory (DashMap), seeded with fixture carriers at startup.

mod routes;
mod store;

use std::net::SocketAddr;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let port: u16 = std::env::var("FMCSA_STUB_PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(8091);

    let web_key = std::env::var("FMCSA_STUB_WEB_KEY")
        .ok()
        .filter(|k| !k.is_empty())
        .unwrap_or_else(|| store::DEFAULT_WEB_KEY.to_string());

    let state = store::AppState::seeded(web_key);
    tracing::info!(carriers = state.carriers().len(), "seeded fixture carriers");
    let app = routes::router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("freight-fmcsa-stub listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
