//! probe — a terminal sensor inspector with per-parameter sparkline rows.
//!
//! Run with:  `RUST_LOG=info probe`

mod app;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Structured logging — RUST_LOG controls verbosity (default: warn, so
    // log lines don't fight the rendered rows for the terminal).
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    tracing::info!("probe v{} starting", env!("CARGO_PKG_VERSION"));

    app::run().await.map_err(Into::into)
}
