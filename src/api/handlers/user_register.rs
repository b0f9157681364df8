use crate::api::{
    credentials,
    handlers::{header_or_unknown, valid_email, valid_password},
    storage,
};
use axum::{
    extract::Extension,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use sqlx::PgPool;
use tracing::{debug, error, info, instrument};
use utoipa::ToSchema;

#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct UserRegister {
    username: Option<String>,
    password: Option<String>,
    email: Option<String>,
}

#[utoipa::path(
    post,
    path= "/app-one/register",
    request_body = UserRegister,
    responses (
        (status = 201, description = "Registration successful", content_type = "application/json"),
        (status = 400, description = "Missing or malformed fields"),
        (status = 409, description = "User with the specified username already exists"),
    ),
    tag= "register"
)]
// axum handler for user registration
#[instrument]
pub async fn register(
    pool: Extension<PgPool>,
    payload: Option<Json<UserRegister>>,
) -> impl IntoResponse {
    let user: UserRegister = match payload {
        Some(Json(payload)) => payload,
        None => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({"success": false, "error": "No data provided"})),
            );
        }
    };

    debug!("user: {:?}", user);

    // field checks run in a fixed order, only the first failure is reported
    let Some(username) = user
        .username
        .as_deref()
        .filter(|username| !username.trim().is_empty())
    else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"success": false, "error": "username is required"})),
        );
    };

    let Some(password) = user
        .password
        .as_deref()
        .filter(|password| !password.trim().is_empty())
    else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"success": false, "error": "password is required"})),
        );
    };

    if !valid_password(password) {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "success": false,
                "error": "password must be at least 8 characters and contain a lowercase letter, a digit and a special character"
            })),
        );
    }

    let Some(email) = user.email.as_deref().filter(|email| !email.trim().is_empty()) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"success": false, "error": "email is required"})),
        );
    };

    if !valid_email(email) {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"success": false, "error": "email must be a valid email address"})),
        );
    }

    // check if user exists
    match credentials::is_username_taken(&pool, username).await {
        Ok(true) => {
            error!("Username already exists");
            return (
                StatusCode::CONFLICT,
                Json(json!({"success": false, "error": "Username already exists"})),
            );
        }
        Ok(false) => (),
        Err(e) => {
            error!("Error checking if username exists: {:?}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"success": false, "error": "Error checking username"})),
            );
        }
    }

    // insert user into database
    match credentials::register_user(&pool, username, password, email).await {
        Ok(()) => (
            StatusCode::CREATED,
            Json(json!({"success": true, "message": "User registered successfully"})),
        ),
        // the pre-check is not atomic with the insert, the unique index
        // settles the race
        Err(e) if storage::is_unique_violation(&e) => {
            error!("Username already exists");
            (
                StatusCode::CONFLICT,
                Json(json!({"success": false, "error": "Username already exists"})),
            )
        }
        Err(e) => {
            error!("Error inserting user: {:?}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"success": false, "error": "Error registering user"})),
            )
        }
    }
}

#[utoipa::path(
    get,
    path= "/app-one/register",
    responses (
        (status = 200, description = "Registration service is up"),
    ),
    tag= "register"
)]
// axum handler for the registration health check
pub async fn register_health(headers: HeaderMap) -> impl IntoResponse {
    info!(
        "Health check received from: {}",
        header_or_unknown(&headers, "x-forwarded-for")
    );
    info!("User-Agent: {}", header_or_unknown(&headers, "user-agent"));

    (
        StatusCode::OK,
        Json(json!({"success": true, "message": "Health Check Passed"})),
    )
}
