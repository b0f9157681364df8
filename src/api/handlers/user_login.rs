use crate::api::{credentials, handlers::header_or_unknown};
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
pub struct UserLogin {
    username: Option<String>,
    password: Option<String>,
}

#[utoipa::path(
    post,
    path= "/app-two/login",
    request_body = UserLogin,
    responses (
        (status = 200, description = "Login successful", content_type = "application/json"),
        (status = 400, description = "Missing fields"),
        (status = 401, description = "Invalid credentials"),
    ),
    tag= "login"
)]
// axum handler for user login
#[instrument]
pub async fn login(
    pool: Extension<PgPool>,
    payload: Option<Json<UserLogin>>,
) -> impl IntoResponse {
    let user: UserLogin = match payload {
        Some(Json(payload)) => payload,
        None => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({"success": false, "error": "No data provided"})),
            );
        }
    };

    debug!("user: {:?}", user);

    let (Some(username), Some(password)) = (user.username.as_deref(), user.password.as_deref())
    else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"success": false, "error": "Missing fields"})),
        );
    };

    match credentials::verify_login(&pool, username, password).await {
        Ok(true) => {
            debug!("Login successful");

            (
                StatusCode::OK,
                Json(json!({"success": true, "message": "Login Succeed"})),
            )
        }
        Ok(false) => {
            debug!("Invalid credentials");

            (
                StatusCode::UNAUTHORIZED,
                Json(json!({"success": false, "error": "Invalid credentials"})),
            )
        }
        Err(e) => {
            error!("Error verifying credentials: {:?}", e);

            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"success": false, "error": "Error verifying credentials"})),
            )
        }
    }
}

#[utoipa::path(
    get,
    path= "/app-two/login",
    responses (
        (status = 200, description = "Login service is up"),
    ),
    tag= "login"
)]
// axum handler for the login health check
pub async fn login_health(headers: HeaderMap) -> impl IntoResponse {
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
