//! Integration tests for the invitation flow.

mod helpers;

use http::StatusCode;
use talentgate_database::UserRepository;
use uuid::Uuid;

use helpers::TestApp;

#[tokio::test]
async fn owner_invites_and_the_invitee_joins() {
    let app = TestApp::new();
    let owner = app.register_owner("owner@acme.test", "Acme").await;

    let invite_token = app
        .create_invite(&owner, "recruiter@acme.test", "recruiter")
        .await;

    // The join page learns the email and nothing else.
    let validate = app
        .request(
            "GET",
            &format!("/validate?token={invite_token}"),
            None,
            None,
        )
        .await;
    assert_eq!(validate.status, StatusCode::OK);
    assert_eq!(
        validate.body,
        serde_json::json!({ "email": "recruiter@acme.test" })
    );

    let accept = app
        .request(
            "POST",
            "/create-user",
            Some(serde_json::json!({
                "token": invite_token,
                "password": "welcome aboard!",
                "first_name": "Grace",
                "last_name": "Hopper",
            })),
            None,
        )
        .await;
    assert_eq!(accept.status, StatusCode::OK);
    // Accepting logs the new user straight in.
    assert!(accept.access_cookie().is_some());
    assert_eq!(app.users.user_count(), 2);
    assert_eq!(app.invites.invite_count(), 0);
}

#[tokio::test]
async fn accepting_transfers_job_grants() {
    let app = TestApp::new();
    let owner = app.register_owner("owner@acme.test", "Acme").await;
    let job_ids = vec![Uuid::new_v4(), Uuid::new_v4()];

    let invite = app
        .request(
            "POST",
            "/invite",
            Some(serde_json::json!({
                "email": "recruiter@acme.test",
                "role": "recruiter",
                "job_ids": job_ids,
            })),
            Some(&owner),
        )
        .await;
    assert_eq!(invite.status, StatusCode::OK);
    let invite_token = invite.body["token"].as_str().unwrap();

    let accept = app
        .request(
            "POST",
            "/create-user",
            Some(serde_json::json!({
                "token": invite_token,
                "password": "welcome aboard!",
                "first_name": "Grace",
                "last_name": "Hopper",
            })),
            None,
        )
        .await;
    assert_eq!(accept.status, StatusCode::OK);

    let user = app
        .users
        .find_by_email("recruiter@acme.test")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(app.invites.user_grants(user.id), job_ids);
}

#[tokio::test]
async fn members_may_not_invite() {
    let app = TestApp::new();
    let owner = app.register_owner("owner@acme.test", "Acme").await;
    let invite_token = app
        .create_invite(&owner, "member@acme.test", "member")
        .await;

    let accept = app
        .request(
            "POST",
            "/create-user",
            Some(serde_json::json!({
                "token": invite_token,
                "password": "welcome aboard!",
                "first_name": "Grace",
                "last_name": "Hopper",
            })),
            None,
        )
        .await;
    let member = accept.access_cookie().unwrap();

    let denied = app
        .request(
            "POST",
            "/invite",
            Some(serde_json::json!({ "email": "x@acme.test", "role": "member" })),
            Some(&member),
        )
        .await;
    assert_eq!(denied.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn invites_require_a_session() {
    let app = TestApp::new();

    let anonymous = app
        .request(
            "POST",
            "/invite",
            Some(serde_json::json!({ "email": "x@acme.test", "role": "member" })),
            None,
        )
        .await;
    assert_eq!(anonymous.status, StatusCode::UNAUTHORIZED);

    let garbage = app
        .request(
            "POST",
            "/invite",
            Some(serde_json::json!({ "email": "x@acme.test", "role": "member" })),
            Some("not-a-real-token"),
        )
        .await;
    assert_eq!(garbage.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn unknown_consumed_and_expired_invites_are_distinct() {
    let app = TestApp::new();
    let owner = app.register_owner("owner@acme.test", "Acme").await;

    // Unknown token.
    let unknown = app
        .request("GET", "/validate?token=no-such-token", None, None)
        .await;
    assert_eq!(unknown.status, StatusCode::NOT_FOUND);

    // Consumed invite: accepting twice finds nothing the second time.
    let invite_token = app
        .create_invite(&owner, "one@acme.test", "member")
        .await;
    let body = serde_json::json!({
        "token": invite_token,
        "password": "welcome aboard!",
        "first_name": "Grace",
        "last_name": "Hopper",
    });
    let first = app
        .request("POST", "/create-user", Some(body.clone()), None)
        .await;
    assert_eq!(first.status, StatusCode::OK);
    let second = app.request("POST", "/create-user", Some(body), None).await;
    assert_eq!(second.status, StatusCode::NOT_FOUND);

    // Expired invite.
    let expiring = app.create_invite(&owner, "two@acme.test", "member").await;
    app.clock.advance(chrono::Duration::hours(49));
    let expired = app
        .request("GET", &format!("/validate?token={expiring}"), None, None)
        .await;
    assert_eq!(expired.status, StatusCode::GONE);

    // Acceptance of the expired invite fails the same way.
    let expired_accept = app
        .request(
            "POST",
            "/create-user",
            Some(serde_json::json!({
                "token": expiring,
                "password": "welcome aboard!",
                "first_name": "Grace",
                "last_name": "Hopper",
            })),
            None,
        )
        .await;
    assert_eq!(expired_accept.status, StatusCode::GONE);
    assert_eq!(app.users.user_count(), 2);
}

#[tokio::test]
async fn accepting_with_a_taken_email_conflicts() {
    let app = TestApp::new();
    let owner = app.register_owner("owner@acme.test", "Acme").await;
    let invite_token = app
        .create_invite(&owner, "owner@acme.test", "member")
        .await;

    let accept = app
        .request(
            "POST",
            "/create-user",
            Some(serde_json::json!({
                "token": invite_token,
                "password": "welcome aboard!",
                "first_name": "Grace",
                "last_name": "Hopper",
            })),
            None,
        )
        .await;
    assert_eq!(accept.status, StatusCode::CONFLICT);
    // The failed accept did not consume the invite.
    assert_eq!(app.invites.invite_count(), 1);
}
