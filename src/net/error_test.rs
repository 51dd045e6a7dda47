use super::*;
use serde_json::json;

#[test]
fn server_message_prefers_message_over_error() {
    let body = json!({ "message": "Email sudah terdaftar", "error": "conflict" });
    assert_eq!(server_message(&body).as_deref(), Some("Email sudah terdaftar"));
}

#[test]
fn server_message_falls_back_to_error_field() {
    let body = json!({ "error": "Gagal update status" });
    assert_eq!(server_message(&body).as_deref(), Some("Gagal update status"));
}

#[test]
fn server_message_ignores_blank_and_non_string_values() {
    assert_eq!(server_message(&json!({ "message": "  ", "error": 42 })), None);
    assert_eq!(server_message(&serde_json::Value::Null), None);
}

#[test]
fn user_message_uses_server_text_then_fallback() {
    let with_text = ApiError::from_status(422, &json!({ "message": "Kuota penuh" }));
    assert_eq!(with_text.user_message("fallback"), "Kuota penuh");

    let bare = ApiError::from_status(500, &serde_json::Value::Null);
    assert_eq!(bare.user_message("Request gagal"), "Request gagal");
}

#[test]
fn user_message_is_generic_for_network_failures() {
    let err = ApiError::Network("connection refused".to_owned());
    assert_eq!(err.user_message("ignored"), GENERIC_FAILURE_MESSAGE);
    assert_eq!(ApiError::Unauthenticated.user_message("ignored"), SESSION_REQUIRED_MESSAGE);
}

#[test]
fn status_helpers_classify_codes() {
    let conflict = ApiError::from_status(409, &json!({}));
    assert!(conflict.is_conflict());
    assert!(!conflict.is_not_found());
    assert!(ApiError::from_status(404, &json!({})).is_not_found());
    assert_eq!(ApiError::Decode("x".to_owned()).status(), None);
}

#[test]
fn display_includes_status_and_message() {
    let err = ApiError::from_status(401, &json!({ "message": "Unauthenticated." }));
    assert_eq!(err.to_string(), "HTTP 401: Unauthenticated.");
    let bare = ApiError::Status { status: 500, message: None };
    assert_eq!(bare.to_string(), "HTTP 500: no message");
}
