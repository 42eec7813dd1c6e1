use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use cartoffer_api::{app, AppState};
use cartoffer_core::OfferRepository;
use cartoffer_store::app_config::{Config, StoreBackend};
use cartoffer_store::{HttpSegmentResolver, InMemoryOfferRepository, RedisOfferRepository};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cartoffer_api=debug,cartoffer_offer=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().context("Failed to load config")?;
    tracing::info!("Starting Cart Offer API on port {}", config.server.port);

    let repo: Arc<dyn OfferRepository> = match config.store.backend {
        StoreBackend::Memory => Arc::new(InMemoryOfferRepository::new()),
        StoreBackend::Redis => {
            let url = config
                .store
                .redis_url
                .as_deref()
                .context("store.redis_url is required for the redis backend")?;
            Arc::new(RedisOfferRepository::new(url).context("Invalid Redis URL")?)
        }
    };
    tracing::info!("Offer store backend: {:?}", config.store.backend);

    let resolver = HttpSegmentResolver::from_config(&config.segment_service)
        .context("Failed to build segment service client")?;
    tracing::info!("Segment service at {}", config.segment_service.base_url);

    let app = app(AppState::new(repo, Arc::new(resolver)));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
