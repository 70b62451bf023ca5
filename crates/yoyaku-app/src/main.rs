use std::sync::Arc;

use salvo::conn::TcpListener;
use salvo::{Listener, Router};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};

use yoyaku_app::app::api::routes;
use yoyaku_app::service_handler::ServiceHandler;
use yoyaku_core::config::load_config;
use yoyaku_db::db::connection::create_pool;
use yoyaku_db::db::migrations;
use yoyaku_service::scheduling::SchedulingService;
use yoyaku_service::store::memory::MemoryStore;
use yoyaku_service::store::pg::PgStore;
use yoyaku_service::store::SchedulingStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new("debug"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(
            fmt::layer()
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    tracing::info!("Starting Yoyaku scheduling server");

    let config = load_config()?;

    tracing::info!(config = ?config, "Configuration loaded");

    if let Ok(filter) = EnvFilter::try_new(config.logging.level.as_str()) {
        if let Err(e) = filter_handle.modify(|current| *current = filter) {
            tracing::warn!(error = %e, "Failed to update log filter from config");
        }
    } else {
        tracing::warn!(level = %config.logging.level, "Invalid log level in config, keeping debug");
    }

    let store: Arc<dyn SchedulingStore> = match &config.database.url {
        Some(database_url) => {
            migrations::run_pending(database_url).await?;

            let pool = create_pool(database_url, u32::from(config.database.max_connections)).await?;

            tracing::info!("Database connection pool created.");

            Arc::new(PgStore::new(pool))
        }
        None => {
            tracing::warn!("No database configured, using in-memory store; data will not survive a restart");
            Arc::new(MemoryStore::new())
        }
    };

    let service = Arc::new(SchedulingService::new(store));

    let bind_addr = config.server.bind_addr();
    let acceptor = TcpListener::new(bind_addr.clone()).bind().await;

    let router = Router::new()
        .hoop(ServiceHandler { service })
        .push(routes());

    tracing::info!("Server listening on {bind_addr}");

    salvo::Server::new(acceptor).serve(router).await;

    Ok(())
}
