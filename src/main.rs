//! Library Server - Library Management System
//!
//! REST API server for a catalog of books and its users.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use library_server::{
    api,
    config::{AppConfig, LoggingConfig},
    db,
    repository::Repository,
    services::Services,
    AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("Failed to load configuration")?;

    init_tracing(&config.logging, config.database.echo);

    tracing::info!("Starting Library Server v{}", env!("CARGO_PKG_VERSION"));

    let url = db::resolve_url(&config.database);
    if config.database.development_mode {
        tracing::info!("Development mode enabled");
    }

    db::prepare_storage(&url).context("Failed to prepare database storage")?;
    let pool = db::connect_url(&url, &config.database).context("Invalid database URL")?;
    tracing::info!("Using database {}", db::redact(&url));

    let repository = Repository::new(pool);
    repository
        .create_tables()
        .await
        .context("Failed to create database tables")?;

    let addr = SocketAddr::new(
        config.server.host.parse().context("Invalid host address")?,
        config.server.port,
    );

    let state = AppState {
        config: Arc::new(config),
        services: Arc::new(Services::new(repository)),
    };

    let app = api::create_router(state);

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn init_tracing(logging: &LoggingConfig, echo_sql: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        // sqlx logs statements at debug
        let sqlx_level = if echo_sql { "debug" } else { "warn" };
        format!(
            "library_server={},sqlx={},tower_http=debug",
            logging.level, sqlx_level
        )
        .into()
    });

    let registry = tracing_subscriber::registry().with(filter);

    if logging.format == "json" {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
