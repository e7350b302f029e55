//! Local username + password accounts.

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::{info, warn};

use super::password::{hash_password, verify_password};
use crate::error::{Error, Result};
use crate::models::{Role, User};

/// Create a new account. The caller sends the user on to the login page.
pub async fn register(
    pool: &SqlitePool,
    role: Role,
    name: &str,
    username: &str,
    password: &str,
) -> Result<User> {
    let name = name.trim();
    let username = username.trim();

    if name.is_empty() || username.is_empty() || password.is_empty() {
        return Err(Error::IncompleteInput);
    }

    let existing: Option<(i64,)> = sqlx::query_as("SELECT 1 FROM users WHERE username = $1")
        .bind(username)
        .fetch_optional(pool)
        .await?;

    if existing.is_some() {
        return Err(Error::DuplicateUsername);
    }

    let password_hash = hash_password(password)?;

    // The UNIQUE constraint still catches a registration racing this one.
    let user: User = sqlx::query_as(
        "INSERT INTO users (role, name, username, password_hash, created_at)
         VALUES ($1, $2, $3, $4, $5) RETURNING *",
    )
    .bind(role)
    .bind(name)
    .bind(username)
    .bind(&password_hash)
    .bind(Utc::now())
    .fetch_one(pool)
    .await
    .map_err(|e| match e {
        sqlx::Error::Database(ref db) if db.is_unique_violation() => Error::DuplicateUsername,
        other => Error::Database(other),
    })?;

    info!(user_id = user.id, role = %user.role, "registered user");
    Ok(user)
}

/// Check a username and password. Never says which of the two was wrong.
pub async fn login(pool: &SqlitePool, username: &str, password: &str) -> Result<User> {
    let username = username.trim();

    let Some(user) = find_user(pool, username).await? else {
        warn!(username, "login for unknown user");
        return Err(Error::InvalidCredentials);
    };

    if !verify_password(password, &user.password_hash)? {
        warn!(user_id = user.id, "login with wrong password");
        return Err(Error::InvalidCredentials);
    }

    info!(user_id = user.id, role = %user.role, "user logged in");
    Ok(user)
}

/// Look up a user by exact username.
pub async fn find_user(pool: &SqlitePool, username: &str) -> Result<Option<User>> {
    Ok(
        sqlx::query_as("SELECT * FROM users WHERE username = $1")
            .bind(username)
            .fetch_optional(pool)
            .await?,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::connect_in_memory;

    #[tokio::test]
    async fn test_duplicate_username_is_rejected() {
        let pool = connect_in_memory().await.unwrap();

        let first = register(&pool, Role::Farmer, "Ada", "ada", "pw1").await.unwrap();
        let second = register(&pool, Role::Customer, "Other Ada", "ada", "pw2").await;
        assert!(matches!(second, Err(Error::DuplicateUsername)));

        let stored = find_user(&pool, "ada").await.unwrap().unwrap();
        assert_eq!(stored.id, first.id);
        assert_eq!(stored.role, Role::Farmer);
        assert_eq!(stored.name, "Ada");
    }

    #[tokio::test]
    async fn test_password_is_not_stored_in_plain_text() {
        let pool = connect_in_memory().await.unwrap();
        let user = register(&pool, Role::Customer, "Bo", "bo", "secret").await.unwrap();
        assert_ne!(user.password_hash, "secret");
        assert!(user.password_hash.starts_with("$argon2id$"));
    }

    #[tokio::test]
    async fn test_register_requires_every_field() {
        let pool = connect_in_memory().await.unwrap();
        assert!(matches!(
            register(&pool, Role::Customer, "  ", "bo", "secret").await,
            Err(Error::IncompleteInput)
        ));
        assert!(matches!(
            register(&pool, Role::Customer, "Bo", "bo", "").await,
            Err(Error::IncompleteInput)
        ));
    }

    #[tokio::test]
    async fn test_login_matches_stored_role() {
        let pool = connect_in_memory().await.unwrap();
        register(&pool, Role::Farmer, "Ada", "ada", "pw1").await.unwrap();

        let user = login(&pool, "ada", "pw1").await.unwrap();
        assert_eq!(user.to_info().role, Role::Farmer);
        assert_eq!(user.to_info().name, "Ada");
    }

    #[tokio::test]
    async fn test_login_failures_look_the_same() {
        let pool = connect_in_memory().await.unwrap();
        register(&pool, Role::Farmer, "Ada", "ada", "pw1").await.unwrap();

        let wrong_password = login(&pool, "ada", "pw2").await.unwrap_err();
        let wrong_username = login(&pool, "eve", "pw1").await.unwrap_err();
        assert!(matches!(wrong_password, Error::InvalidCredentials));
        assert!(matches!(wrong_username, Error::InvalidCredentials));
        assert_eq!(wrong_password.to_string(), wrong_username.to_string());
    }
}
