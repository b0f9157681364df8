//! Cross-origin authorization for the browser frontend.
//!
//! Only the shop origins below may make credentialed requests. The match is
//! exact and case-sensitive: no wildcard, no subdomain generalization. A
//! matching `Origin` is echoed back in `Access-Control-Allow-Origin`; any
//! other origin gets no CORS headers and the browser blocks the response.

use axum::http::{
    header::{AUTHORIZATION, CONTENT_TYPE},
    HeaderValue, Method,
};
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Origins allowed to make credentialed cross-site requests.
pub const ALLOWED_ORIGINS: [&str; 2] = ["https://ljhun.shop", "https://www.ljhun.shop"];

#[must_use]
pub fn layer() -> CorsLayer {
    let origins: Vec<HeaderValue> = ALLOWED_ORIGINS
        .iter()
        .map(|origin| HeaderValue::from_static(origin))
        .collect();

    CorsLayer::new()
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
}
