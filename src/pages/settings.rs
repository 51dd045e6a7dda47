//! Account and school settings: password change and maintenance mode.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use super::{Notice, apply_refresh};
use crate::net::api::ApiClient;
use crate::net::types::{PasswordChange, Settings};
use crate::state::resource::Resource;

pub const CONFIRMATION_MISMATCH: &str = "Konfirmasi password tidak cocok.";

const LOAD_FAILED: &str = "Gagal memuat pengaturan";
const PASSWORD_CHANGED: &str = "Password berhasil diperbarui.";
const PASSWORD_FAILED: &str = "Gagal memperbarui password.";
const MAINTENANCE_FAILED: &str = "Gagal mengubah mode maintenance.";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PasswordForm {
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

#[derive(Clone)]
pub struct SettingsPage {
    api: ApiClient,
    settings: Resource<Settings>,
    notice: Option<Notice>,
}

impl SettingsPage {
    #[must_use]
    pub fn new(api: ApiClient) -> Self {
        Self { api, settings: Resource::Loading, notice: None }
    }

    #[must_use]
    pub fn settings(&self) -> &Resource<Settings> {
        &self.settings
    }

    #[must_use]
    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub async fn refresh(&mut self, token: &str) {
        let result = self.api.settings(token).await;
        apply_refresh(&mut self.settings, &mut self.notice, result, LOAD_FAILED);
    }

    /// Change the signed-in user's password. A mismatched confirmation is
    /// rejected locally.
    pub async fn change_password(&mut self, token: &str, form: &PasswordForm) -> bool {
        if form.new_password != form.confirm_password {
            self.notice = Some(Notice::error(CONFIRMATION_MISMATCH));
            return false;
        }
        let change = PasswordChange {
            current_password: form.current_password.clone(),
            new_password: form.new_password.clone(),
            new_password_confirmation: form.confirm_password.clone(),
        };
        match self.api.change_password(token, &change).await {
            Ok(_) => {
                tracing::info!("password changed");
                self.notice = Some(Notice::success(PASSWORD_CHANGED));
                true
            }
            Err(error) => {
                self.notice = Some(Notice::from_error(&error, PASSWORD_FAILED));
                false
            }
        }
    }

    /// Flip maintenance mode; returns the new state.
    pub async fn toggle_maintenance(&mut self, token: &str) -> Option<bool> {
        match self.api.toggle_maintenance(token).await {
            Ok(state) => {
                tracing::info!(is_maintenance = state.is_maintenance, "maintenance mode changed");
                if let Some(settings) = self.settings.ready_mut() {
                    settings.is_maintenance = state.is_maintenance;
                }
                self.notice = state.message.map(Notice::success);
                Some(state.is_maintenance)
            }
            Err(error) => {
                self.notice = Some(Notice::from_error(&error, MAINTENANCE_FAILED));
                None
            }
        }
    }
}
