use crate::api::{handlers::header_or_unknown, GIT_COMMIT_HASH};
use axum::{
    http::{HeaderMap, HeaderValue, StatusCode},
    response::IntoResponse,
};
use tracing::{debug, info};

// axum handler for the plain liveness probe; Route 53 and the load balancer
// only look at the status code
#[utoipa::path(
    get,
    path= "/healthz",
    responses (
        (status = 200, description = "Service is alive", body = String, content_type = "text/plain"),
    ),
    tag= "health"
)]
pub async fn healthz(headers: HeaderMap) -> impl IntoResponse {
    info!(
        "Health check received from: {}",
        header_or_unknown(&headers, "x-forwarded-for")
    );
    info!("User-Agent: {}", header_or_unknown(&headers, "user-agent"));

    let short_hash = if GIT_COMMIT_HASH.len() > 7 {
        &GIT_COMMIT_HASH[0..7]
    } else {
        ""
    };

    let mut response_headers = HeaderMap::new();
    match format!(
        "{}:{}:{}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        short_hash
    )
    .parse::<HeaderValue>()
    {
        Ok(value) => {
            response_headers.insert("X-App", value);
        }
        Err(err) => debug!("Failed to parse X-App header: {}", err),
    }

    (StatusCode::OK, response_headers, "OK")
}
