//! Book model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Persisted book record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub published_year: Option<i32>,
    /// Unique across all books when present
    pub isbn: Option<String>,
}

/// Create book request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateBook {
    pub title: String,
    pub author: String,
    pub published_year: Option<i32>,
    #[validate(length(max = 13, message = "ISBN must be at most 13 characters"))]
    pub isbn: Option<String>,
}

/// Partial update of a book.
///
/// Only populated slots are written. For the nullable columns the outer
/// `Option` says whether the field was supplied and the inner one carries
/// the new value, so `{"isbn": null}` clears the ISBN while omitting `isbn`
/// leaves it alone.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateBook {
    pub title: Option<String>,
    pub author: Option<String>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<i32>)]
    pub published_year: Option<Option<i32>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<String>)]
    #[validate(length(max = 13, message = "ISBN must be at most 13 characters"))]
    pub isbn: Option<Option<String>>,
}

impl UpdateBook {
    /// True when no attribute was supplied
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.author.is_none()
            && self.published_year.is_none()
            && self.isbn.is_none()
    }
}
