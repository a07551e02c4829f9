//! Integration tests for the fixed-window rate limiter.

mod helpers;

use http::StatusCode;

use helpers::TestApp;
use talentgate_core::clock::Clock;

fn login_body() -> serde_json::Value {
    serde_json::json!({
        "email": "owner@acme.test",
        "password": "wrong password here",
    })
}

#[tokio::test]
async fn throttled_routes_count_down_and_block() {
    let app = TestApp::new();

    // Five requests per window; headers count down on every response.
    for expected_remaining in [4, 3, 2, 1, 0] {
        let response = app.request("POST", "/login", Some(login_body()), None).await;
        assert_eq!(response.status, StatusCode::UNAUTHORIZED);
        assert_eq!(response.header("x-ratelimit-limit"), Some("5"));
        assert_eq!(
            response.header("x-ratelimit-remaining"),
            Some(expected_remaining.to_string().as_str())
        );
        assert!(response.header("x-ratelimit-reset").is_some());
    }

    let blocked = app.request("POST", "/login", Some(login_body()), None).await;
    assert_eq!(blocked.status, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(blocked.header("x-ratelimit-remaining"), Some("0"));
    assert_eq!(blocked.body["message"], "Too many requests");

    // The reset timestamp points at the end of the current window.
    let reset = blocked.body["reset"].as_i64().unwrap();
    let now = app.clock.now().timestamp();
    assert!(reset > now && reset <= now + 300);
}

#[tokio::test]
async fn the_window_resets_after_it_elapses() {
    let app = TestApp::new();

    for _ in 0..6 {
        app.request("POST", "/login", Some(login_body()), None).await;
    }
    let blocked = app.request("POST", "/login", Some(login_body()), None).await;
    assert_eq!(blocked.status, StatusCode::TOO_MANY_REQUESTS);

    app.clock.advance(chrono::Duration::seconds(301));

    let fresh = app.request("POST", "/login", Some(login_body()), None).await;
    assert_eq!(fresh.status, StatusCode::UNAUTHORIZED);
    assert_eq!(fresh.header("x-ratelimit-remaining"), Some("4"));
}

#[tokio::test]
async fn routes_are_throttled_independently() {
    let app = TestApp::new();

    for _ in 0..6 {
        app.request("POST", "/login", Some(login_body()), None).await;
    }
    let blocked = app.request("POST", "/login", Some(login_body()), None).await;
    assert_eq!(blocked.status, StatusCode::TOO_MANY_REQUESTS);

    // A different route has its own window.
    let validate = app
        .request("GET", "/validate?token=no-such-token", None, None)
        .await;
    assert_eq!(validate.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unthrottled_routes_carry_no_rate_headers() {
    let app = TestApp::new();

    let health = app.request("GET", "/health", None, None).await;
    assert_eq!(health.status, StatusCode::OK);
    assert!(health.header("x-ratelimit-limit").is_none());
}
