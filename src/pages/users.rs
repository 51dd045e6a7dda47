//! User management (super admin; school admins see their own school).

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use super::{Notice, apply_refresh, matches_search};
use crate::net::api::ApiClient;
use crate::net::error::ApiError;
use crate::net::types::{Ack, Role, User, UserUpdate};
use crate::state::resource::Resource;

const LOAD_FAILED: &str = "Gagal mengambil data user";
const BLOCK_FAILED: &str = "Gagal mengubah status user";
const RESET_FAILED: &str = "Gagal reset password";
const DELETE_FAILED: &str = "Gagal menghapus user";
const UPDATE_FAILED: &str = "Gagal update user";
const UPDATED: &str = "User berhasil diupdate";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserFilter {
    pub role: Option<Role>,
    pub search: String,
}

#[must_use]
pub fn filter_users<'a>(users: &'a [User], filter: &UserFilter) -> Vec<&'a User> {
    users
        .iter()
        .filter(|u| filter.role.is_none_or(|role| u.role == role))
        .filter(|u| matches_search(&[u.name.as_str(), u.email.as_str()], &filter.search))
        .collect()
}

#[derive(Clone)]
pub struct UsersPage {
    api: ApiClient,
    school_id: Option<i64>,
    users: Resource<Vec<User>>,
    pub filter: UserFilter,
    notice: Option<Notice>,
}

impl UsersPage {
    /// `school_id` restricts the server-side listing to one school.
    #[must_use]
    pub fn new(api: ApiClient, school_id: Option<i64>) -> Self {
        Self { api, school_id, users: Resource::Loading, filter: UserFilter::default(), notice: None }
    }

    #[must_use]
    pub fn users(&self) -> &Resource<Vec<User>> {
        &self.users
    }

    #[must_use]
    pub fn visible(&self) -> Vec<&User> {
        self.users.ready().map_or_else(Vec::new, |all| filter_users(all, &self.filter))
    }

    #[must_use]
    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub async fn refresh(&mut self, token: &str) {
        let result = self.api.list_users(token, self.school_id).await;
        apply_refresh(&mut self.users, &mut self.notice, result, LOAD_FAILED);
    }

    pub async fn toggle_block(&mut self, token: &str, user_id: i64) -> bool {
        let result = self.api.toggle_user_block(token, user_id).await;
        self.settle(token, result, None, BLOCK_FAILED).await
    }

    pub async fn delete(&mut self, token: &str, user_id: i64) -> bool {
        let result = self.api.delete_user(token, user_id).await;
        self.settle(token, result, None, DELETE_FAILED).await
    }

    pub async fn update(&mut self, token: &str, user_id: i64, update: &UserUpdate) -> bool {
        let result = self.api.update_user(token, user_id, update).await;
        self.settle(token, result, Some(UPDATED), UPDATE_FAILED).await
    }

    /// Reset a user's password; the new one is also put in the notice.
    pub async fn reset_password(&mut self, token: &str, user_id: i64) -> Option<String> {
        match self.api.reset_user_password(token, user_id).await {
            Ok(reset) => {
                self.notice = Some(Notice::success(format!("Password baru: {}", reset.new_password)));
                Some(reset.new_password)
            }
            Err(error) => {
                self.notice = Some(Notice::from_error(&error, RESET_FAILED));
                None
            }
        }
    }

    /// `success` overrides the server acknowledgement text.
    async fn settle(
        &mut self,
        token: &str,
        result: Result<Ack, ApiError>,
        success: Option<&str>,
        fallback: &str,
    ) -> bool {
        match result {
            Ok(ack) => {
                self.notice = success.map(ToOwned::to_owned).or(ack.message).map(Notice::success);
                self.refresh(token).await;
                true
            }
            Err(error) => {
                tracing::warn!(%error, "user action failed");
                self.notice = Some(Notice::from_error(&error, fallback));
                false
            }
        }
    }
}
