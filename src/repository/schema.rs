//! Table declarations and startup schema creation

use sqlx::SqlitePool;

use crate::error::AppResult;

/// DDL for every persisted entity, in creation order
pub const TABLES: &[(&str, &str)] = &[
    (
        "users",
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id              INTEGER PRIMARY KEY AUTOINCREMENT,
            username        TEXT    NOT NULL UNIQUE,
            email           TEXT    NOT NULL,
            hashed_password TEXT    NOT NULL,
            is_active       BOOLEAN NOT NULL,
            is_superuser    BOOLEAN NOT NULL,
            id_type         TEXT,
            id_number       TEXT
        )
        "#,
    ),
    (
        "books",
        r#"
        CREATE TABLE IF NOT EXISTS books (
            id             INTEGER PRIMARY KEY AUTOINCREMENT,
            title          TEXT    NOT NULL,
            author         TEXT    NOT NULL,
            published_year INTEGER,
            isbn           TEXT    UNIQUE
        )
        "#,
    ),
];

/// Create the tables if they are missing. Safe to call on every startup.
pub async fn create_tables(pool: &SqlitePool) -> AppResult<()> {
    for &(name, ddl) in TABLES {
        sqlx::query(ddl).execute(pool).await?;
        tracing::debug!("Table {} ready", name);
    }
    tracing::info!("Database schema ready ({} tables)", TABLES.len());
    Ok(())
}
