//! Book catalog service

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, CreateBook, UpdateBook},
    repository::Repository,
};

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
}

impl BooksService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Book>> {
        self.repository.books.get_all().await
    }

    pub async fn get(&self, id: i64) -> AppResult<Book> {
        self.repository
            .books
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Book not found".to_string()))
    }

    pub async fn create(&self, data: &CreateBook) -> AppResult<Book> {
        data.validate()?;
        self.repository.books.save(data).await
    }

    /// Apply a partial update. Loading and writing are separate units of work.
    pub async fn update(&self, id: i64, data: &UpdateBook) -> AppResult<Book> {
        let book = self.get(id).await?;
        data.validate()?;
        self.repository.books.update(&book, data).await
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let book = self.get(id).await?;
        self.repository.books.delete(&book).await
    }
}
