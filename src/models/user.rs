//! User model and related types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::enums::IdType;

/// Full user model from database
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    /// Hashed password (argon2)
    #[serde(skip_serializing)]
    pub hashed_password: String,
    pub is_active: bool,
    pub is_superuser: bool,
    pub id_type: Option<IdType>,
    pub id_number: Option<String>,
}

/// Create user request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateUser {
    #[validate(length(min = 1, message = "Username must not be empty"))]
    pub username: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(min = 4, message = "Password must be at least 4 characters"))]
    pub password: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub is_superuser: bool,
    pub id_type: Option<IdType>,
    pub id_number: Option<String>,
}

fn default_true() -> bool {
    true
}

/// Row to insert, with the password already hashed
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub hashed_password: String,
    pub is_active: bool,
    pub is_superuser: bool,
    pub id_type: Option<IdType>,
    pub id_number: Option<String>,
}

impl NewUser {
    pub fn from_request(request: CreateUser, hashed_password: String) -> Self {
        Self {
            username: request.username,
            email: request.email,
            hashed_password,
            is_active: request.is_active,
            is_superuser: request.is_superuser,
            id_type: request.id_type,
            id_number: request.id_number,
        }
    }
}
