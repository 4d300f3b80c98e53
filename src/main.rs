use fund_tracker::alpaca::AlpacaClient;
use fund_tracker::datastructures::config::Config;
use fund_tracker::server::{router, AppState};
use fund_tracker::settings::SecretStore;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")))
        .init();

    let store = SecretStore::load()?;
    let addr = store.bind_addr()?;

    // A halted state still serves the page so the missing keys are visible.
    let state = AppState::<AlpacaClient>::from_secrets(&store, Config::builder());
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Baris AI Fund tracker listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
