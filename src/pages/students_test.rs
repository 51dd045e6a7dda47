use super::*;
use crate::net::test_support::fake_client;
use crate::net::types::{RegistrationFormData, StudentSummary};
use reqwest::Method;
use serde_json::{Value, json};

const TOKEN: &str = "tok";

fn registration(id: i64, status: RegistrationStatus, name: &str, email: &str) -> Registration {
    Registration {
        id,
        student_id: Some(id + 100),
        program: Some("IPA".to_owned()),
        academic_year: None,
        status,
        form_data: RegistrationFormData { name: name.to_owned(), email: email.to_owned(), ..Default::default() },
        period_id: Some(1),
        period: None,
        student: Some(StudentSummary { id: id + 100, name: name.to_owned(), email: email.to_owned() }),
        school: None,
        created_at: None,
        updated_at: None,
    }
}

fn list_json() -> Value {
    json!({ "data": [
        { "id": 1, "status": "submitted", "form_data": { "name": "Andi", "email": "andi@mail.com" } },
        { "id": 2, "status": "verified", "student": { "id": 20, "name": "Budi", "email": "budi@mail.com" } }
    ] })
}

// =============================================================
// Filters & controls
// =============================================================

#[test]
fn actions_only_for_submitted() {
    let submitted = registration(1, RegistrationStatus::Submitted, "A", "a@x");
    assert_eq!(available_actions(&submitted), &[StatusAction::Verify, StatusAction::Reject]);
    for status in [RegistrationStatus::Draft, RegistrationStatus::Verified, RegistrationStatus::Rejected] {
        assert!(available_actions(&registration(1, status, "A", "a@x")).is_empty());
    }
}

#[test]
fn filter_by_status_and_search() {
    let list = vec![
        registration(1, RegistrationStatus::Submitted, "Andi Pratama", "andi@mail.com"),
        registration(2, RegistrationStatus::Verified, "Budi", "budi@mail.com"),
        registration(3, RegistrationStatus::Submitted, "Citra", "andi.citra@mail.com"),
    ];
    let by_status = RegistrationFilter { status: Some(RegistrationStatus::Submitted), search: String::new() };
    assert_eq!(filter_registrations(&list, &by_status).len(), 2);

    let by_search = RegistrationFilter { status: None, search: "ANDI".to_owned() };
    let ids: Vec<i64> = filter_registrations(&list, &by_search).iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 3]);
}

#[test]
fn search_falls_back_to_student_record() {
    let mut reg = registration(4, RegistrationStatus::Verified, "", "");
    reg.student = Some(StudentSummary { id: 9, name: "Dewi".to_owned(), email: "dewi@mail.com".to_owned() });
    let filter = RegistrationFilter { status: None, search: "dewi".to_owned() };
    assert_eq!(filter_registrations(std::slice::from_ref(&reg), &filter).len(), 1);
}

// =============================================================
// Review actions
// =============================================================

#[tokio::test]
async fn verify_posts_status_and_refetches() {
    let (api, fake) = fake_client();
    fake.respond(200, json!({ "message": "ok" }));
    fake.respond(200, list_json());

    let mut page = RegistrationsPage::new(api, RegistrationQuery { period_id: Some(1), status: None });
    let reg = registration(1, RegistrationStatus::Submitted, "Andi", "andi@mail.com");
    assert!(page.decide(TOKEN, &reg, StatusAction::Verify, " lengkap ").await);

    let sent = fake.requests();
    assert_eq!(sent[0].path, "/registrations/1/status");
    assert_eq!(sent[0].body, Some(json!({ "status": "verified", "notes": "lengkap" })));
    assert_eq!(sent[1].path, "/registrations?period_id=1");
    assert_eq!(page.notice(), Some(&Notice::success("Siswa berhasil diverifikasi!")));
    assert_eq!(page.visible().len(), 2);
}

#[tokio::test]
async fn processed_registration_cannot_be_decided() {
    let (api, fake) = fake_client();
    let mut page = RegistrationsPage::new(api, RegistrationQuery::default());
    let reg = registration(1, RegistrationStatus::Verified, "Andi", "andi@mail.com");

    assert!(!page.decide(TOKEN, &reg, StatusAction::Reject, "").await);
    assert_eq!(fake.request_count(), 0);
}

#[tokio::test]
async fn reject_failure_surfaces_error_field() {
    let (api, fake) = fake_client();
    fake.respond(403, json!({ "error": "Forbidden" }));
    let mut page = RegistrationsPage::new(api, RegistrationQuery::default());
    let reg = registration(1, RegistrationStatus::Submitted, "Andi", "andi@mail.com");

    assert!(!page.decide(TOKEN, &reg, StatusAction::Reject, "").await);
    assert_eq!(page.notice(), Some(&Notice::error("Forbidden")));
}

#[tokio::test]
async fn reset_password_returns_new_secret() {
    let (api, fake) = fake_client();
    fake.respond(200, json!({ "new_password": "Zz9xY8" }));
    let mut page = RegistrationsPage::new(api, RegistrationQuery::default());

    assert_eq!(page.reset_password(TOKEN, 5).await.as_deref(), Some("Zz9xY8"));
    assert_eq!(fake.requests()[0].path, "/registrations/5/reset-password");
}

// =============================================================
// Verified students
// =============================================================

#[tokio::test]
async fn verified_roster_fetches_by_status() {
    let (api, fake) = fake_client();
    fake.respond(200, list_json());
    let mut page = VerifiedStudentsPage::new(api);
    page.refresh(TOKEN).await;

    assert_eq!(fake.requests()[0].path, "/registrations?status=verified");
    page.search = "budi".to_owned();
    assert_eq!(page.visible().len(), 1);
}

#[tokio::test]
async fn verified_roster_passes_period_filter() {
    let (api, fake) = fake_client();
    fake.respond(200, list_json());
    let mut page = VerifiedStudentsPage::new(api);
    page.period_id = Some(4);
    page.refresh(TOKEN).await;

    assert_eq!(fake.requests()[0].path, "/registrations?status=verified&period_id=4");
}

#[tokio::test]
async fn period_options_list_open_periods_first() {
    let (api, fake) = fake_client();
    fake.respond(
        200,
        json!({ "data": [
            { "id": 1, "name": "Gelombang 1", "academic_year": "2024/2025", "is_open": false },
            { "id": 2, "name": "Gelombang 2", "academic_year": "2025/2026", "is_open": true },
            { "id": 3, "name": "Gelombang 3", "academic_year": "2023/2024", "is_open": false },
            { "id": 4, "name": "Gelombang 4", "academic_year": "2025/2026", "is_open": true }
        ] }),
    );
    let mut page = VerifiedStudentsPage::new(api);
    page.load_period_options(TOKEN).await;

    let ids: Vec<i64> = page.period_options().ready().map(|all| all.iter().map(|p| p.id).collect()).unwrap_or_default();
    assert_eq!(ids, vec![2, 4, 1, 3]);
    assert_eq!(fake.requests()[0].path, "/periods");
}

#[tokio::test]
async fn period_options_failure_is_an_error_state() {
    let (api, fake) = fake_client();
    fake.respond(500, json!({}));
    let mut page = RegistrationsPage::new(api, RegistrationQuery::default());
    page.load_period_options(TOKEN).await;

    assert_eq!(page.period_options().error(), Some("Gagal memuat periode"));
}

#[tokio::test]
async fn update_email_puts_to_student_user() {
    let (api, fake) = fake_client();
    fake.respond(200, json!({ "message": "User updated" }));
    fake.respond(200, list_json());
    let mut page = VerifiedStudentsPage::new(api);
    let reg = registration(2, RegistrationStatus::Verified, "Budi", "budi@mail.com");

    assert!(page.update_email(TOKEN, &reg, " budi.baru@mail.com ").await);
    let sent = fake.requests();
    assert_eq!(sent[0].method, Method::PUT);
    assert_eq!(sent[0].path, "/users/102");
    assert_eq!(sent[0].body, Some(json!({ "name": "Budi", "email": "budi.baru@mail.com" })));
}

#[tokio::test]
async fn account_actions_need_a_student_record() {
    let (api, fake) = fake_client();
    let mut page = VerifiedStudentsPage::new(api);
    let mut reg = registration(2, RegistrationStatus::Verified, "Budi", "budi@mail.com");
    reg.student = None;

    assert!(!page.delete_account(TOKEN, &reg).await);
    assert!(!page.update_email(TOKEN, &reg, "x@y").await);
    assert_eq!(fake.request_count(), 0);
}

#[tokio::test]
async fn delete_failure_uses_fallback() {
    let (api, fake) = fake_client();
    fake.respond(500, json!({}));
    let mut page = VerifiedStudentsPage::new(api);
    let reg = registration(2, RegistrationStatus::Verified, "Budi", "budi@mail.com");

    assert!(!page.delete_account(TOKEN, &reg).await);
    assert_eq!(page.notice(), Some(&Notice::error("Gagal menghapus akun.")));
}
