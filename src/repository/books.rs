//! Books repository for database operations

use sqlx::{Pool, Sqlite};

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, CreateBook, UpdateBook},
};

const DUPLICATE_ISBN: &str = "ISBN already exists";

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Sqlite>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// List all books in storage order
    pub async fn get_all(&self) -> AppResult<Vec<Book>> {
        let books = sqlx::query_as::<_, Book>("SELECT * FROM books ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(books)
    }

    /// Get book by ID
    pub async fn get_by_id(&self, id: i64) -> AppResult<Option<Book>> {
        let book = sqlx::query_as::<_, Book>("SELECT * FROM books WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(book)
    }

    /// Insert a new book and return it with its assigned id
    pub async fn save(&self, data: &CreateBook) -> AppResult<Book> {
        let mut tx = self.pool.begin().await?;

        let book = sqlx::query_as::<_, Book>(
            r#"
            INSERT INTO books (title, author, published_year, isbn)
            VALUES (?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(&data.title)
        .bind(&data.author)
        .bind(data.published_year)
        .bind(&data.isbn)
        .fetch_one(&mut *tx)
        .await
        .map_err(AppError::on_unique_violation(DUPLICATE_ISBN))?;

        tx.commit().await?;

        tracing::info!("Created book {} ({})", book.id, book.title);
        Ok(book)
    }

    /// Overwrite the supplied attributes of `book` and return the stored row
    pub async fn update(&self, book: &Book, data: &UpdateBook) -> AppResult<Book> {
        if data.is_empty() {
            return self
                .get_by_id(book.id)
                .await?
                .ok_or_else(|| AppError::NotFound(format!("Book {} not found", book.id)));
        }

        let mut sets: Vec<&str> = Vec::new();

        macro_rules! add_field {
            ($field:expr, $name:literal) => {
                if $field.is_some() {
                    sets.push(concat!($name, " = ?"));
                }
            };
        }

        add_field!(data.title, "title");
        add_field!(data.author, "author");
        add_field!(data.published_year, "published_year");
        add_field!(data.isbn, "isbn");

        let query = format!("UPDATE books SET {} WHERE id = ? RETURNING *", sets.join(", "));

        let mut builder = sqlx::query_as::<_, Book>(&query);

        macro_rules! bind_field {
            ($field:expr) => {
                if let Some(ref val) = $field {
                    builder = builder.bind(val);
                }
            };
        }

        bind_field!(data.title);
        bind_field!(data.author);
        bind_field!(data.published_year);
        bind_field!(data.isbn);

        let mut tx = self.pool.begin().await?;

        let updated = builder
            .bind(book.id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(AppError::on_unique_violation(DUPLICATE_ISBN))?
            .ok_or_else(|| AppError::NotFound(format!("Book {} not found", book.id)))?;

        tx.commit().await?;

        tracing::debug!("Updated book {} ({} fields)", updated.id, sets.len());
        Ok(updated)
    }

    /// Delete the row backing `book`
    pub async fn delete(&self, book: &Book) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("DELETE FROM books WHERE id = ?")
            .bind(book.id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        if result.rows_affected() == 0 {
            tracing::warn!("Book {} was already gone", book.id);
        } else {
            tracing::info!("Deleted book {}", book.id);
        }
        Ok(())
    }
}
