//! Data models for the library server

pub mod book;
pub mod enums;
pub mod user;

// Re-export commonly used types
pub use book::{Book, CreateBook, UpdateBook};
pub use enums::IdType;
pub use user::{CreateUser, NewUser, User};
