use std::sync::Arc;
use std::net::SocketAddr;
use gambit_api::{app, AppState};
use gambit_core::OfferRepository;
use gambit_store::FixtureOfferRepository;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gambit_api=debug,tower_http=debug,axum::rejection=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = gambit_store::app_config::Config::load()?;
    tracing::info!("Starting Gambit API on port {}", config.server.port);

    let repo = match &config.data.fixture_path {
        Some(path) => FixtureOfferRepository::from_path(path).await?,
        None => {
            let repo = FixtureOfferRepository::embedded()?;
            tracing::info!(offers = repo.len(), "using bundled offer fixture");
            repo
        }
    };
    let offer_repo: Arc<dyn OfferRepository> = Arc::new(repo);

    let app = app(AppState::new(offer_repo, config.dashboard.clone()));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
