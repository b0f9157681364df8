pub mod health;
pub use self::health::healthz;

pub mod user_register;
pub use self::user_register::{register, register_health};

pub mod user_login;
pub use self::user_login::{login, login_health};

#[cfg(test)]
mod tests;

// common functions for the handlers
use axum::{
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use regex::Regex;
use serde_json::json;

/// Symbols the registration password policy accepts.
pub const PASSWORD_SYMBOLS: &str = "!@#$%^&*()_+=-";

pub fn valid_email(email: &str) -> bool {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").is_ok_and(|re| re.is_match(email))
}

/// At least 8 characters with a lowercase letter, a digit and a symbol.
pub fn valid_password(password: &str) -> bool {
    password.chars().count() >= 8
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| PASSWORD_SYMBOLS.contains(c))
}

pub(crate) fn header_or_unknown<'a>(headers: &'a HeaderMap, name: &str) -> &'a str {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("unknown")
}

// axum handler for OPTIONS requests that are not browser preflights; real
// preflights carry Access-Control-Request-Method and are answered by the
// CORS layer before reaching this.
pub async fn preflight() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({"message": "CORS preflight passed"})),
    )
}
