//! Repository layer for database operations

pub mod books;
pub mod schema;
pub mod users;

use sqlx::SqlitePool;

use crate::error::AppResult;

/// Main repository struct holding the shared database pool
#[derive(Clone)]
pub struct Repository {
    pub pool: SqlitePool,
    pub books: books::BooksRepository,
    pub users: users::UsersRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            books: books::BooksRepository::new(pool.clone()),
            users: users::UsersRepository::new(pool.clone()),
            pool,
        }
    }

    /// Create every declared table that does not exist yet
    pub async fn create_tables(&self) -> AppResult<()> {
        schema::create_tables(&self.pool).await
    }

    /// Round-trip a trivial query to check the database is reachable
    pub async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
