//! Database connection provider
//!
//! Resolves which SQLite database to use from [`DatabaseConfig`] and builds
//! the single pool shared by every repository for the process lifetime.

use std::path::Path;
use std::str::FromStr;

use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions},
    ConnectOptions,
};

use crate::{
    config::DatabaseConfig,
    error::{AppError, AppResult},
};

/// File name of the fallback store inside `database.data_dir`
pub const FALLBACK_DATABASE_FILE: &str = "database.db";

/// Pick the connection string for the configured mode.
///
/// An unset or empty URL for the active mode falls back to the SQLite file
/// under the data directory, so the result is never empty.
pub fn resolve_url(config: &DatabaseConfig) -> String {
    let explicit = if config.development_mode {
        config.dev_url.as_deref()
    } else {
        config.prod_url.as_deref()
    };

    match explicit.map(str::trim).filter(|url| !url.is_empty()) {
        Some(url) => url.to_string(),
        None => fallback_url(&config.data_dir),
    }
}

fn fallback_url(data_dir: &str) -> String {
    let path = Path::new(data_dir).join(FALLBACK_DATABASE_FILE);
    format!("sqlite://{}", path.display())
}

/// Build the shared pool without opening a connection.
///
/// A malformed URL is rejected here; an unreachable database only fails on
/// the first query.
pub fn connect(config: &DatabaseConfig) -> AppResult<SqlitePool> {
    connect_url(&resolve_url(config), config)
}

/// Same as [`connect`] with an already resolved URL
pub fn connect_url(url: &str, config: &DatabaseConfig) -> AppResult<SqlitePool> {
    let mut options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);
    if !config.echo {
        options = options.disable_statement_logging();
    }

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect_lazy_with(options);

    tracing::debug!("Database pool created for {}", redact(url));
    Ok(pool)
}

/// Create the directory that will hold the SQLite file named by `url`.
///
/// SQLite creates a missing database file but not its parent directories.
/// In-memory databases are left alone.
pub fn prepare_storage(url: &str) -> AppResult<()> {
    let options = SqliteConnectOptions::from_str(url)?;
    let filename = options.get_filename();
    // sqlx names in-memory databases `file:sqlx-in-memory-N`
    if filename == Path::new(":memory:") || filename.to_string_lossy().starts_with("file:") {
        return Ok(());
    }

    if let Some(parent) = filename.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            AppError::Internal(format!("Failed to create {}: {}", parent.display(), e))
        })?;
        tracing::debug!("Database directory {} ready", parent.display());
    }
    Ok(())
}

/// Strip credentials from a URL before it reaches the logs.
pub fn redact(url: &str) -> String {
    match (url.find("://"), url.rfind('@')) {
        (Some(scheme_end), Some(at)) if at > scheme_end => {
            format!("{}://***{}", &url[..scheme_end], &url[at..])
        }
        _ => url.to_string(),
    }
}
