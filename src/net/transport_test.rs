use super::*;

#[test]
fn join_url_normalizes_slashes() {
    assert_eq!(join_url("http://localhost:8000/api", "/login"), "http://localhost:8000/api/login");
    assert_eq!(join_url("http://localhost:8000/api/", "periods/3/end"), "http://localhost:8000/api/periods/3/end");
}

#[test]
fn parse_body_tolerates_empty_and_html() {
    assert_eq!(parse_body(""), Value::Null);
    assert_eq!(parse_body("<html>502</html>"), Value::Null);
    assert_eq!(parse_body(r#"{"ok":true}"#), serde_json::json!({ "ok": true }));
}

#[test]
fn request_builder_sets_bearer_and_body() {
    let request = ApiRequest::new(Method::POST, "/periods/1/toggle-status")
        .bearer("tok")
        .json(serde_json::json!({ "notes": "" }));
    assert_eq!(request.bearer.as_deref(), Some("tok"));
    assert_eq!(request.body, Some(serde_json::json!({ "notes": "" })));
}

#[test]
fn response_success_is_2xx_only() {
    assert!(ApiResponse { status: 201, body: Value::Null }.is_success());
    assert!(!ApiResponse { status: 409, body: Value::Null }.is_success());
    assert!(!ApiResponse { status: 302, body: Value::Null }.is_success());
}

#[test]
fn http_transport_trims_base_url() {
    let transport = HttpTransport::new("http://localhost:8000/api/", Timeouts::default()).unwrap();
    assert_eq!(transport.base_url(), "http://localhost:8000/api");
}
