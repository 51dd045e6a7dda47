use super::*;
use crate::net::test_support::fake_client;
use crate::util::storage::MemoryStorage;
use serde_json::json;

fn login_body(role: &str) -> serde_json::Value {
    json!({
        "data": {
            "token": "tok-1",
            "user": { "id": 3, "name": "Rina", "email": "rina@sman1.sch.id", "role": role }
        }
    })
}

fn stored_user_json() -> String {
    json!({ "id": 3, "name": "Rina", "email": "rina@sman1.sch.id", "role": "school_admin" }).to_string()
}

// =============================================================
// Routes
// =============================================================

#[test]
fn route_for_role_maps_three_destinations_and_home() {
    assert_eq!(Route::for_role(Role::SchoolAdmin).path(), "/admin/dashboard");
    assert_eq!(Route::for_role(Role::Student).path(), "/student/dashboard");
    assert_eq!(Route::for_role(Role::SuperAdmin).path(), "/super-admin/dashboard");
    assert_eq!(Route::for_role(Role::Other).path(), "/");
}

// =============================================================
// Restore
// =============================================================

#[test]
fn restore_reads_stored_pair() {
    let mut storage = MemoryStorage::new();
    storage.set(TOKEN_KEY, "tok-1").unwrap();
    storage.set(USER_KEY, &stored_user_json()).unwrap();

    let session = Session::restore(storage);
    assert_eq!(session.token(), Some("tok-1"));
    assert_eq!(session.user().map(|u| u.role), Some(Role::SchoolAdmin));
}

#[test]
fn restore_with_corrupt_user_clears_storage() {
    let mut storage = MemoryStorage::new();
    storage.set(TOKEN_KEY, "tok-1").unwrap();
    storage.set(USER_KEY, "{oops").unwrap();

    let session = Session::restore(storage);
    assert!(!session.is_authenticated());
    assert_eq!(session.storage().get(TOKEN_KEY), None);
    assert_eq!(session.storage().get(USER_KEY), None);
}

#[test]
fn restore_requires_both_keys() {
    let mut storage = MemoryStorage::new();
    storage.set(TOKEN_KEY, "tok-1").unwrap();

    let session = Session::restore(storage);
    assert!(!session.is_authenticated());
    assert!(matches!(session.bearer(), Err(ApiError::Unauthenticated)));
}

// =============================================================
// Login / logout
// =============================================================

#[tokio::test]
async fn login_stores_pair_and_routes_by_role() {
    let (api, fake) = fake_client();
    fake.respond(200, login_body("student"));

    let mut session = Session::restore(MemoryStorage::new());
    let route = session.login(&api, "rina@sman1.sch.id", "pw").await.unwrap();

    assert_eq!(route, Route::StudentDashboard);
    assert_eq!(session.bearer().unwrap(), "tok-1");
    assert_eq!(session.storage().get(TOKEN_KEY).as_deref(), Some("tok-1"));
    let stored: User = serde_json::from_str(&session.storage().get(USER_KEY).unwrap()).unwrap();
    assert_eq!(stored.name, "Rina");
}

#[tokio::test]
async fn failed_login_leaves_session_empty() {
    let (api, fake) = fake_client();
    fake.respond(401, json!({ "message": "Email atau password salah" }));

    let mut session = Session::restore(MemoryStorage::new());
    let err = session.login(&api, "x@y.id", "bad").await.unwrap_err();

    assert!(matches!(err, SessionError::Api(ApiError::Status { status: 401, .. })));
    assert!(!session.is_authenticated());
    assert_eq!(session.storage().get(TOKEN_KEY), None);
}

#[tokio::test]
async fn logout_clears_memory_and_storage_and_blocks_requests() {
    let (api, fake) = fake_client();
    fake.respond(200, login_body("school_admin"));

    let mut session = Session::restore(MemoryStorage::new());
    session.login(&api, "rina@sman1.sch.id", "pw").await.unwrap();
    assert_eq!(session.logout().unwrap(), Route::Home);

    assert_eq!(session.token(), None);
    assert_eq!(session.user(), None);
    assert_eq!(session.storage().get(TOKEN_KEY), None);
    assert_eq!(session.storage().get(USER_KEY), None);

    let err = session.refresh_user(&api).await.unwrap_err();
    assert!(matches!(err, SessionError::Api(ApiError::Unauthenticated)));
    assert_eq!(fake.request_count(), 1, "only the login request was sent");
}

#[tokio::test]
async fn refresh_user_replaces_cached_user() {
    let (api, fake) = fake_client();
    fake.respond(200, login_body("school_admin"));
    fake.respond(200, json!({ "user": { "id": 3, "name": "Rina S.", "email": "rina@sman1.sch.id", "role": "school_admin" } }));

    let mut session = Session::restore(MemoryStorage::new());
    session.login(&api, "rina@sman1.sch.id", "pw").await.unwrap();
    let user = session.refresh_user(&api).await.unwrap();

    assert_eq!(user.name, "Rina S.");
    assert_eq!(fake.requests()[1].bearer.as_deref(), Some("tok-1"));
}
