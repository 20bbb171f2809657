//! User repository behavior

use library_server::{
    models::{IdType, NewUser},
    AppError,
};

use crate::common::test_db;

fn new_user(username: &str) -> NewUser {
    NewUser {
        username: username.to_string(),
        email: format!("{}@example.org", username),
        hashed_password: "$argon2id$v=19$placeholder".to_string(),
        is_active: true,
        is_superuser: false,
        id_type: Some(IdType::NationalId),
        id_number: Some("AB123456".to_string()),
    }
}

#[tokio::test]
async fn test_by_username_absent() {
    let db = test_db().await;
    let user = db.repository.users.by_username("nonexistent").await.unwrap();
    assert!(user.is_none());
}

#[tokio::test]
async fn test_by_username_found() {
    let db = test_db().await;
    let users = &db.repository.users;

    let created = users.create(&new_user("alice")).await.unwrap();
    users.create(&new_user("bob")).await.unwrap();

    let found = users.by_username("alice").await.unwrap().unwrap();
    assert_eq!(found, created);
    assert_eq!(found.id_type, Some(IdType::NationalId));
    assert!(found.is_active);
    assert!(!found.is_superuser);

    // Exact match only
    assert!(users.by_username("Alice").await.unwrap().is_none());
}

#[tokio::test]
async fn test_username_is_unique() {
    let db = test_db().await;
    let users = &db.repository.users;

    users.create(&new_user("carol")).await.unwrap();
    let err = users.create(&new_user("carol")).await.unwrap_err();
    assert!(matches!(err, AppError::Duplicate(_)));
}
