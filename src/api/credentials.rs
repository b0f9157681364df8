//! Decision layer between the HTTP handlers and the store.
//!
//! Deliberately a pass-through: password hashing or lockout policy would
//! slot in here without touching the handlers or the queries. Until then,
//! passwords are compared verbatim against stored rows.

use crate::api::storage;
use sqlx::PgPool;

/// True when a user with this username is already registered.
/// # Errors
/// Returns the underlying `sqlx::Error` when the store cannot be reached.
pub async fn is_username_taken(pool: &PgPool, username: &str) -> Result<bool, sqlx::Error> {
    storage::exists_by_username(pool, username).await
}

/// Persist a new user record.
/// # Errors
/// Returns the underlying `sqlx::Error` when the insert fails.
pub async fn register_user(
    pool: &PgPool,
    username: &str,
    password: &str,
    email: &str,
) -> Result<(), sqlx::Error> {
    storage::insert_user(pool, username, password, email).await
}

/// True when a stored record matches this username/password pair exactly.
/// # Errors
/// Returns the underlying `sqlx::Error` when the store cannot be reached.
pub async fn verify_login(
    pool: &PgPool,
    username: &str,
    password: &str,
) -> Result<bool, sqlx::Error> {
    storage::verify_credentials(pool, username, password).await
}
