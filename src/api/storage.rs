//! Store accessor: the three `users`-table queries.
//!
//! Every statement is parameterized; user input never lands in SQL text.
//! Errors propagate as `sqlx::Error` so callers can tell "store unreachable"
//! apart from "no matching row".

use sqlx::{PgPool, Row};

/// True iff a row with this username exists.
/// # Errors
/// Returns the underlying `sqlx::Error` when the query cannot be run.
pub async fn exists_by_username(pool: &PgPool, username: &str) -> Result<bool, sqlx::Error> {
    match sqlx::query("SELECT EXISTS(SELECT 1 FROM users WHERE username = $1) AS exists")
        .bind(username)
        .fetch_one(pool)
        .await
    {
        Ok(row) => Ok(row.get("exists")),
        Err(e) => Err(e),
    }
}

/// Insert one user row.
/// # Errors
/// Returns the underlying `sqlx::Error`, including the unique violation
/// raised when a concurrent registration won the race for this username.
pub async fn insert_user(
    pool: &PgPool,
    username: &str,
    password: &str,
    email: &str,
) -> Result<(), sqlx::Error> {
    sqlx::query("INSERT INTO users (username, password, email) VALUES ($1, $2, $3)")
        .bind(username)
        .bind(password)
        .bind(email)
        .execute(pool)
        .await?;

    Ok(())
}

/// True iff a row matches both username and password exactly.
/// # Errors
/// Returns the underlying `sqlx::Error` when the query cannot be run.
pub async fn verify_credentials(
    pool: &PgPool,
    username: &str,
    password: &str,
) -> Result<bool, sqlx::Error> {
    match sqlx::query(
        "SELECT EXISTS(SELECT 1 FROM users WHERE username = $1 AND password = $2) AS exists",
    )
    .bind(username)
    .bind(password)
    .fetch_one(pool)
    .await
    {
        Ok(row) => Ok(row.get("exists")),
        Err(e) => Err(e),
    }
}

pub(crate) fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => db_err.code().is_some_and(|code| code.as_ref() == "23505"),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::error::{DatabaseError, ErrorKind};
    use std::{borrow::Cow, error::Error as StdError, fmt};

    #[derive(Debug)]
    struct TestDbError {
        code: Option<&'static str>,
    }

    impl fmt::Display for TestDbError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "test database error")
        }
    }

    impl StdError for TestDbError {}

    impl DatabaseError for TestDbError {
        fn message(&self) -> &'static str {
            "test database error"
        }

        fn code(&self) -> Option<Cow<'_, str>> {
            self.code.map(Cow::Borrowed)
        }

        fn as_error(&self) -> &(dyn StdError + Send + Sync + 'static) {
            self
        }

        fn as_error_mut(&mut self) -> &mut (dyn StdError + Send + Sync + 'static) {
            self
        }

        fn into_error(self: Box<Self>) -> Box<dyn StdError + Send + Sync + 'static> {
            self
        }

        fn kind(&self) -> ErrorKind {
            ErrorKind::UniqueViolation
        }
    }

    #[test]
    fn is_unique_violation_matches_sqlstate() {
        let err = sqlx::Error::Database(Box::new(TestDbError {
            code: Some("23505"),
        }));
        assert!(is_unique_violation(&err));

        let err = sqlx::Error::Database(Box::new(TestDbError {
            code: Some("99999"),
        }));
        assert!(!is_unique_violation(&err));

        let err = sqlx::Error::RowNotFound;
        assert!(!is_unique_violation(&err));
    }
}
