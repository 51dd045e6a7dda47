use super::*;
use crate::net::test_support::fake_client;
use serde_json::{Value, json};

const TOKEN: &str = "tok";

fn dashboard_json() -> Value {
    json!({
        "stats": { "total_schools": 3, "pending_schools": 1, "active_schools": 2, "total_registrations": 40 },
        "pending_schools": [{ "id": 7, "name": "SMA Harapan", "status": "pending" }]
    })
}

fn schools_json() -> Value {
    json!({ "data": [
        { "id": 1, "name": "SMAN 1 Bandung", "email": "info@sman1.sch.id", "status": "active" },
        { "id": 7, "name": "SMA Harapan", "npsn": "20212345", "status": "pending" }
    ] })
}

#[tokio::test]
async fn dashboard_loads_stats_and_pending_schools() {
    let (api, fake) = fake_client();
    fake.respond(200, dashboard_json());
    let mut page = SuperAdminDashboardPage::new(api);
    page.refresh(TOKEN).await;

    let dashboard = page.dashboard().ready().unwrap();
    assert_eq!(dashboard.stats.active_schools, 2);
    assert_eq!(dashboard.pending_schools[0].id, 7);
    assert_eq!(fake.requests()[0].path, "/dashboard/super-admin");
}

#[tokio::test]
async fn dashboard_failure_has_no_placeholder_data() {
    let (api, fake) = fake_client();
    fake.respond(500, json!({}));
    let mut page = SuperAdminDashboardPage::new(api);
    page.refresh(TOKEN).await;
    assert_eq!(page.dashboard().error(), Some("Gagal memuat data dashboard"));
}

#[tokio::test]
async fn verify_sends_notes_and_returns_link() {
    let (api, fake) = fake_client();
    fake.respond(200, json!({ "registration_link": "sma-harapan-x1" }));
    fake.respond(200, dashboard_json());
    let mut page = SuperAdminDashboardPage::new(api);

    assert_eq!(page.verify(TOKEN, 7).await.as_deref(), Some("sma-harapan-x1"));
    let sent = fake.requests();
    assert_eq!(sent[0].path, "/schools/7/verify");
    assert_eq!(sent[0].body, Some(json!({ "notes": VERIFY_NOTES })));
    assert_eq!(sent[1].path, "/dashboard/super-admin");
}

#[tokio::test]
async fn reject_sends_reason_and_reports_failure() {
    let (api, fake) = fake_client();
    fake.respond(200, json!({}));
    fake.respond(200, dashboard_json());
    fake.respond(500, json!({}));
    let mut page = SuperAdminDashboardPage::new(api);

    assert!(page.reject(TOKEN, 7).await);
    assert_eq!(fake.requests()[0].body, Some(json!({ "reason": REJECT_REASON })));
    assert_eq!(page.notice(), Some(&Notice::success("Sekolah berhasil ditolak.")));

    assert!(!page.reject(TOKEN, 7).await);
    assert_eq!(page.notice(), Some(&Notice::error("Gagal memproses aksi")));
}

#[tokio::test]
async fn school_list_filters_locally() {
    let (api, fake) = fake_client();
    fake.respond(200, schools_json());
    let mut page = SchoolsPage::new(api);
    page.refresh(TOKEN).await;
    assert_eq!(page.visible().len(), 2);

    page.filter.status = Some(SchoolStatus::Pending);
    assert_eq!(page.visible()[0].id, 7);

    page.filter = SchoolFilter { status: None, search: "2021".to_owned() };
    assert_eq!(page.visible().len(), 1);
    assert_eq!(fake.request_count(), 1);
}
