use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{App, HttpServer};
use anyhow::Context;
use rk_storefront::config::{Config, StoreBackend};
use rk_storefront::core::traits::RecordStore;
use rk_storefront::middleware::{ErrorHandler, RequestId};
use rk_storefront::store::{InMemoryRecordStore, MySqlRecordStore};
use rk_storefront::AppState;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("rk_storefront={},actix_web=info", config.app.log_level).into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    config.validate().context("Configuration validation failed")?;

    tracing::info!("Starting RK Construction storefront back-office");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Server binding to: {}", config.server.bind_address());

    let store: Arc<dyn RecordStore> = match (&config.store, &config.database) {
        (StoreBackend::Mysql, Some(database)) => {
            let pool = database
                .create_pool()
                .await
                .context("Failed to create database pool")?;
            tracing::info!(
                "Database pool initialized ({} connections)",
                database.pool_size
            );

            let store = MySqlRecordStore::new(pool);
            store.migrate().await.context("Failed to run migrations")?;
            Arc::new(store)
        }
        _ => {
            tracing::warn!("Using in-memory record store; data is lost on restart");
            Arc::new(InMemoryRecordStore::new())
        }
    };

    let engine = config.renderer.build_engine();
    tracing::info!(
        "Invoice engine: {:?} ({})",
        config.renderer.engine,
        config.renderer.bin
    );

    let state = AppState::new(store, engine);
    let admin_key_hash = config.security.admin_api_key_hash.clone();

    // Start HTTP server
    let bind_address = config.server.bind_address();
    let server = HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(ErrorHandler)
            .wrap(RequestId)
            .wrap(TracingLogger::default())
            .configure(|cfg| state.configure(cfg, &admin_key_hash))
    })
    .workers(config.server.workers)
    .bind(&bind_address)
    .with_context(|| format!("Failed to bind {}", bind_address))?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await?;
    Ok(())
}
