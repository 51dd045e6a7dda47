use super::*;
use crate::net::test_support::fake_client;

// =============================================================
// Paths
// =============================================================

#[test]
fn period_path_formats_actions() {
    assert_eq!(period_path(4, None), "/periods/4");
    assert_eq!(period_path(4, Some("toggle-status")), "/periods/4/toggle-status");
}

#[test]
fn registrations_path_builds_query() {
    assert_eq!(registrations_path(None, None), "/registrations");
    assert_eq!(registrations_path(Some(2), None), "/registrations?period_id=2");
    assert_eq!(
        registrations_path(Some(2), Some(RegistrationStatus::Verified)),
        "/registrations?status=verified&period_id=2"
    );
}

#[test]
fn users_path_adds_school_filter() {
    assert_eq!(users_path(None), "/users");
    assert_eq!(users_path(Some(12)), "/users?school_id=12");
}

#[test]
fn period_link_path_keeps_well_formed_tokens() {
    assert_eq!(period_link_path("abc-123_X").unwrap(), "/period-by-link/abc-123_X");
    assert_eq!(period_link_path(" abc-123 ").unwrap(), "/period-by-link/abc-123");
}

#[test]
fn period_link_path_rejects_instead_of_rewriting() {
    for token in ["abc.def", "a b/c", "../../users?x=1", "", "   "] {
        let error = period_link_path(token).unwrap_err();
        assert!(matches!(error, ApiError::InvalidLinkToken(_)), "{token:?}");
        assert!(error.is_not_found());
    }
}

// =============================================================
// Requests
// =============================================================

#[tokio::test]
async fn login_posts_credentials_and_unwraps_data() {
    let (api, fake) = fake_client();
    fake.respond(
        200,
        json!({ "data": { "token": "t-1", "user": { "id": 1, "name": "A", "email": "a@x.id", "role": "student" } } }),
    );

    let data = api.login("a@x.id", "secret").await.unwrap();
    assert_eq!(data.token, "t-1");

    let sent = fake.requests();
    assert_eq!(sent[0].method, Method::POST);
    assert_eq!(sent[0].path, "/login");
    assert_eq!(sent[0].bearer, None);
    assert_eq!(sent[0].body, Some(json!({ "email": "a@x.id", "password": "secret" })));
}

#[tokio::test]
async fn non_2xx_carries_server_message() {
    let (api, fake) = fake_client();
    fake.respond(401, json!({ "message": "Email atau password salah" }));

    let err = api.login("a@x.id", "bad").await.unwrap_err();
    assert_eq!(err.status(), Some(401));
    assert_eq!(err.user_message("x"), "Email atau password salah");
}

#[tokio::test]
async fn authenticated_calls_send_bearer() {
    let (api, fake) = fake_client();
    fake.respond(200, json!({ "data": [] }));

    let periods = api.list_periods("tok").await.unwrap();
    assert!(periods.is_empty());
    assert_eq!(fake.requests()[0].bearer.as_deref(), Some("tok"));
}

#[tokio::test]
async fn empty_ack_body_decodes() {
    let (api, fake) = fake_client();
    fake.respond(204, serde_json::Value::Null);

    let ack = api.end_period("tok", 3).await.unwrap();
    assert_eq!(ack.message, None);
    assert_eq!(fake.requests()[0].path, "/periods/3/end");
}

#[tokio::test]
async fn active_period_absent_is_none() {
    let (api, fake) = fake_client();
    fake.respond(200, json!({ "data": null }));
    assert_eq!(api.active_period("tok").await.unwrap(), None);
}

#[tokio::test]
async fn wrong_shape_is_decode_error() {
    let (api, fake) = fake_client();
    fake.respond(200, json!({ "data": { "unexpected": true } }));

    let err = api.period_by_link("abc").await.unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[tokio::test]
async fn status_update_posts_status_and_notes() {
    let (api, fake) = fake_client();
    fake.respond(200, json!({ "message": "ok" }));

    let update = StatusUpdate { status: RegistrationStatus::Rejected, notes: "Berkas kurang".to_owned() };
    api.update_registration_status("tok", 11, &update).await.unwrap();

    let sent = &fake.requests()[0];
    assert_eq!(sent.path, "/registrations/11/status");
    assert_eq!(sent.body, Some(json!({ "status": "rejected", "notes": "Berkas kurang" })));
}

#[tokio::test]
async fn current_user_reads_user_field() {
    let (api, fake) = fake_client();
    fake.respond(200, json!({ "user": { "id": 5, "name": "B", "email": "b@x.id", "role": "super_admin" } }));

    let user = api.current_user("tok").await.unwrap();
    assert_eq!(user.id, 5);
    assert_eq!(fake.requests()[0].path, "/me");
}
