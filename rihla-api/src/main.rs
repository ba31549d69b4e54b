use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use rihla_api::{app, AppState, ConversationService};
use rihla_core::{QueryParser, SessionStore};
use rihla_offer::KiwiClient;
use rihla_store::app_config::{Config, SessionBackend};
use rihla_store::{InMemorySessionStore, RedisSessionStore};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rihla_api=debug,rihla_core=info,rihla_offer=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().context("Failed to load config")?;
    tracing::info!("Starting Rihla API on port {}", config.server.port);

    if config.kiwi.api_key.is_empty() {
        tracing::warn!("kiwi.api_key is empty; airport lookups and searches will be rejected");
    }

    let kiwi = Arc::new(KiwiClient::new(&config.kiwi).context("Failed to build Kiwi client")?);

    let sessions: Arc<dyn SessionStore> = match config.session.backend {
        SessionBackend::Memory => {
            tracing::info!("Using in-memory session store");
            Arc::new(InMemorySessionStore::new())
        }
        SessionBackend::Redis => {
            let url = config
                .session
                .redis_url
                .as_deref()
                .context("session.redis_url is required for the redis backend")?;
            Arc::new(RedisSessionStore::new(url, config.session.ttl_seconds).context("Failed to configure Redis")?)
        }
    };

    let parser = Arc::new(
        QueryParser::new(kiwi.clone()).with_resolve_timeout(config.parser.resolve_timeout()),
    );
    let conversation = Arc::new(ConversationService::new(sessions, parser.clone(), kiwi));

    let app = app(AppState { conversation, parser });

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
