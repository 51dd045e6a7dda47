use super::*;
use crate::net::test_support::fake_client;
use serde_json::{Value, json};

const TOKEN: &str = "tok";

fn users_json() -> Value {
    json!({ "data": [
        { "id": 1, "name": "Rina", "email": "rina@sman1.sch.id", "role": "school_admin", "is_active": true },
        { "id": 2, "name": "Andi", "email": "andi@mail.com", "role": "student", "is_active": true },
        { "id": 3, "name": "Root", "email": "root@yuksekolah.id", "role": "super_admin" }
    ] })
}

#[tokio::test]
async fn list_filters_by_role_and_search() {
    let (api, fake) = fake_client();
    fake.respond(200, users_json());
    let mut page = UsersPage::new(api, Some(4));
    page.refresh(TOKEN).await;
    assert_eq!(fake.requests()[0].path, "/users?school_id=4");
    assert_eq!(page.visible().len(), 3);

    page.filter.role = Some(Role::Student);
    assert_eq!(page.visible()[0].name, "Andi");

    page.filter = UserFilter { role: None, search: "SMAN1".to_owned() };
    assert_eq!(page.visible()[0].id, 1);
}

#[tokio::test]
async fn block_toggle_uses_server_message_and_refetches() {
    let (api, fake) = fake_client();
    fake.respond(200, json!({ "message": "User diblokir" }));
    fake.respond(200, users_json());
    let mut page = UsersPage::new(api, None);

    assert!(page.toggle_block(TOKEN, 2).await);
    assert_eq!(fake.requests()[0].path, "/users/2/block");
    assert_eq!(fake.requests()[1].path, "/users");
    assert_eq!(page.notice(), Some(&Notice::success("User diblokir")));
}

#[tokio::test]
async fn update_reports_fixed_success_text() {
    let (api, fake) = fake_client();
    fake.respond(200, json!({ "message": "ok" }));
    fake.respond(200, users_json());
    let mut page = UsersPage::new(api, None);
    let update = UserUpdate { name: "Andi P".to_owned(), email: "andi@mail.com".to_owned(), role: Some(Role::Student) };

    assert!(page.update(TOKEN, 2, &update).await);
    assert_eq!(fake.requests()[0].body.as_ref().unwrap()["role"], "student");
    assert_eq!(page.notice(), Some(&Notice::success("User berhasil diupdate")));
}

#[tokio::test]
async fn reset_password_shows_new_password() {
    let (api, fake) = fake_client();
    fake.respond(200, json!({ "new_password": "Qw7Er8" }));
    let mut page = UsersPage::new(api, None);

    assert_eq!(page.reset_password(TOKEN, 2).await.as_deref(), Some("Qw7Er8"));
    assert_eq!(page.notice(), Some(&Notice::success("Password baru: Qw7Er8")));
}

#[tokio::test]
async fn delete_failure_keeps_list() {
    let (api, fake) = fake_client();
    fake.respond(200, users_json());
    fake.respond(400, json!({ "error": "Tidak dapat menghapus akun sendiri" }));
    let mut page = UsersPage::new(api, None);
    page.refresh(TOKEN).await;

    assert!(!page.delete(TOKEN, 3).await);
    assert_eq!(page.users().ready().map(Vec::len), Some(3));
    assert_eq!(page.notice(), Some(&Notice::error("Tidak dapat menghapus akun sendiri")));
}
