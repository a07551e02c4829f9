//! Integration tests for registration, login, and logout.

mod helpers;

use http::StatusCode;

use helpers::TestApp;

#[tokio::test]
async fn register_sets_a_session_cookie() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/register",
            Some(serde_json::json!({
                "email": "owner@acme.test",
                "first_name": "Ada",
                "last_name": "Lovelace",
                "password": "correct horse battery",
                "team_name": "Acme",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["expires_in"], 3600);
    let cookie = response.headers.get("set-cookie").unwrap().to_str().unwrap();
    assert!(cookie.starts_with("access_token="));
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("SameSite=Strict"));
    assert_eq!(app.users.user_count(), 1);
    assert_eq!(app.users.team_count(), 1);
}

#[tokio::test]
async fn login_succeeds_with_the_registered_password() {
    let app = TestApp::new();
    app.register_owner("owner@acme.test", "Acme").await;

    let response = app
        .request(
            "POST",
            "/login",
            Some(serde_json::json!({
                "email": "owner@acme.test",
                "password": "correct horse battery",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.access_cookie().is_some());
}

#[tokio::test]
async fn login_failures_are_indistinguishable() {
    let app = TestApp::new();
    app.register_owner("owner@acme.test", "Acme").await;

    let unknown = app
        .request(
            "POST",
            "/login",
            Some(serde_json::json!({
                "email": "nobody@acme.test",
                "password": "correct horse battery",
            })),
            None,
        )
        .await;
    let wrong_password = app
        .request(
            "POST",
            "/login",
            Some(serde_json::json!({
                "email": "owner@acme.test",
                "password": "wrong password here",
            })),
            None,
        )
        .await;

    assert_eq!(unknown.status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_password.status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown.body, wrong_password.body);
}

#[tokio::test]
async fn duplicate_registration_conflicts_without_a_second_team() {
    let app = TestApp::new();
    app.register_owner("owner@acme.test", "Acme").await;

    let response = app
        .request(
            "POST",
            "/register",
            Some(serde_json::json!({
                "email": "owner@acme.test",
                "first_name": "Eve",
                "last_name": "Other",
                "password": "another password",
                "team_name": "Acme Two",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(app.users.user_count(), 1);
    assert_eq!(app.users.team_count(), 1);
}

#[tokio::test]
async fn invalid_payloads_are_rejected_before_the_service() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/register",
            Some(serde_json::json!({
                "email": "not-an-email",
                "first_name": "Ada",
                "last_name": "Lovelace",
                "password": "short",
                "team_name": "Acme",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(app.users.user_count(), 0);
}

#[tokio::test]
async fn logout_revokes_the_session() {
    let app = TestApp::new();
    let cookie = app.register_owner("owner@acme.test", "Acme").await;

    let logout = app.request("POST", "/logout", None, Some(&cookie)).await;
    assert_eq!(logout.status, StatusCode::OK);
    // The response clears the cookie.
    let cleared = logout.headers.get("set-cookie").unwrap().to_str().unwrap();
    assert!(cleared.starts_with("access_token=;"));

    // The token still verifies but its session is gone.
    let invite = app
        .request(
            "POST",
            "/invite",
            Some(serde_json::json!({ "email": "new@acme.test", "role": "member" })),
            Some(&cookie),
        )
        .await;
    assert_eq!(invite.status, StatusCode::UNAUTHORIZED);

    // Logging out again is idempotent.
    let again = app.request("POST", "/logout", None, Some(&cookie)).await;
    assert_eq!(again.status, StatusCode::OK);
}

#[tokio::test]
async fn sessions_expire_with_the_token_ttl() {
    let app = TestApp::new();
    let cookie = app.register_owner("owner@acme.test", "Acme").await;

    // The session store TTL equals the token TTL; once it elapses the
    // cached session disappears even though nobody logged out.
    app.clock.advance(chrono::Duration::seconds(3601));

    let response = app
        .request(
            "POST",
            "/invite",
            Some(serde_json::json!({ "email": "new@acme.test", "role": "member" })),
            Some(&cookie),
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}
