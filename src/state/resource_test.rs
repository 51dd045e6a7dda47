use super::*;
use serde_json::json;

#[test]
fn default_is_loading() {
    let resource: Resource<u8> = Resource::default();
    assert!(resource.is_loading());
    assert_eq!(resource.ready(), None);
}

#[test]
fn from_result_maps_ok_and_err() {
    let ready = Resource::from_result(Ok::<_, ApiError>(3), "x");
    assert_eq!(ready.ready(), Some(&3));

    let failed: Resource<u8> = Resource::from_result(Err(ApiError::from_status(500, &json!({}))), "Gagal mengambil data");
    assert_eq!(failed.error(), Some("Gagal mengambil data"));
}

#[test]
fn map_preserves_state() {
    assert_eq!(Resource::Ready(2).map(|v| v * 10), Resource::Ready(20));
    assert_eq!(Resource::<u8>::Error("e".to_owned()).map(|v| v * 10), Resource::Error("e".to_owned()));
    assert_eq!(Resource::<u8>::Loading.map(|v| v * 10), Resource::Loading);
}

#[tokio::test]
async fn load_awaits_fetch() {
    let resource = load(async { Ok::<_, ApiError>("ok") }, "x").await;
    assert_eq!(resource, Resource::Ready("ok"));
}

#[tokio::test]
async fn load_cancellable_returns_none_when_cancelled() {
    let cancel = CancellationToken::new();
    cancel.cancel();

    let outcome = load_cancellable(&cancel, std::future::pending::<Result<u8, ApiError>>(), "x").await;
    assert_eq!(outcome, None);
}

#[tokio::test]
async fn load_cancellable_applies_result_when_live() {
    let cancel = CancellationToken::new();
    let outcome = load_cancellable(&cancel, async { Ok::<_, ApiError>(7) }, "x").await;
    assert_eq!(outcome, Some(Resource::Ready(7)));
}

#[tokio::test]
async fn cancel_during_pending_fetch_drops_response() {
    let cancel = CancellationToken::new();
    let child = cancel.clone();
    let fetch = async {
        tokio::time::sleep(std::time::Duration::from_secs(60)).await;
        Ok::<_, ApiError>(1)
    };

    let handle = tokio::spawn(async move { load_cancellable(&child, fetch, "x").await });
    cancel.cancel();
    assert_eq!(handle.await.unwrap(), None);
}

#[tokio::test]
async fn fetch_cancellable_passes_errors_through_unreduced() {
    let cancel = CancellationToken::new();
    let outcome = fetch_cancellable(&cancel, async { Err::<u8, _>(ApiError::Status { status: 500, message: None }) }).await;
    assert!(matches!(outcome, Some(Err(ApiError::Status { status: 500, .. }))));

    cancel.cancel();
    let outcome = fetch_cancellable(&cancel, async { Ok::<_, ApiError>(1) }).await;
    assert!(outcome.is_none());
}
