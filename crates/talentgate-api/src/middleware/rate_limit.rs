//! Fixed-window rate limiting middleware.
//!
//! Every throttled response, allowed or blocked, carries the
//! `X-RateLimit-Limit`, `X-RateLimit-Remaining`, and `X-RateLimit-Reset`
//! headers so clients can pace themselves without probing.

use std::net::SocketAddr;

use axum::Json;
use axum::extract::{ConnectInfo, Request, State};
use axum::http::{HeaderValue, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use talentgate_auth::rate_limit::RateLimitDecision;
use talentgate_cache::keys;

use crate::dto::response::RateLimitedResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// Count the request against its route/caller window and block it once
/// the budget is spent.
pub async fn throttle(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let route = request.uri().path().to_string();
    let caller = client_ip(&request);
    let key = keys::rate_limit(&route, &caller);

    let decision = match state.rate_limiter.hit(&key).await {
        Ok(decision) => decision,
        Err(err) => return ApiError(err).into_response(),
    };

    if !decision.allowed {
        let body = RateLimitedResponse {
            message: "Too many requests".to_string(),
            reset: decision.reset_at.timestamp(),
        };
        let mut response = (StatusCode::TOO_MANY_REQUESTS, Json(body)).into_response();
        apply_headers(&mut response, &decision);
        return response;
    }

    let mut response = next.run(request).await;
    apply_headers(&mut response, &decision);
    response
}

/// Caller identity for throttling purposes.
///
/// Behind a reverse proxy the client address arrives in
/// `X-Forwarded-For`; the first entry is the originating client. For
/// direct connections the peer address is used instead.
fn client_ip(request: &Request) -> String {
    let forwarded = request
        .headers()
        .get("x-forwarded-for")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(|ip| ip.trim().to_string());
    if let Some(ip) = forwarded {
        return ip;
    }

    request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|info| info.0.ip().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

fn apply_headers(response: &mut Response, decision: &RateLimitDecision) {
    let headers = response.headers_mut();
    headers.insert(
        "x-ratelimit-limit",
        header_value(decision.limit.to_string()),
    );
    headers.insert(
        "x-ratelimit-remaining",
        header_value(decision.remaining.to_string()),
    );
    headers.insert(
        "x-ratelimit-reset",
        header_value(decision.reset_at.timestamp().to_string()),
    );
}

fn header_value(value: String) -> HeaderValue {
    HeaderValue::from_str(&value).unwrap_or_else(|_| HeaderValue::from_static("0"))
}
