//! User lookup and registration service

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
    Argon2,
};
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::user::{CreateUser, NewUser, User},
    repository::Repository,
};

#[derive(Clone)]
pub struct UsersService {
    repository: Repository,
}

impl UsersService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Get user by username
    pub async fn get_by_username(&self, username: &str) -> AppResult<User> {
        self.repository
            .users
            .by_username(username)
            .await?
            .ok_or_else(|| AppError::UserNotFound("User not found".to_string()))
    }

    /// Create a new user, storing only the password hash
    pub async fn create_user(&self, request: CreateUser) -> AppResult<User> {
        request.validate()?;
        let hashed_password = hash_password(&request.password)?;
        let user = NewUser::from_request(request, hashed_password);
        self.repository.users.create(&user).await
    }
}

/// Hash a password using Argon2
fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))?;
    Ok(hash.to_string())
}
