//! Public registration page reached through a period's link token.
//!
//! Resolves the period, gates the wizard on `can_register`, and after a
//! successful submission tries one automatic login with the issued
//! credentials.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use crate::net::api::ApiClient;
use crate::net::error::ApiError;
use crate::net::types::{PeriodLinkInfo, User};
use crate::state::resource::Resource;
use crate::state::wizard::RegistrationWizard;

pub const INVALID_LINK_MESSAGE: &str = "Link pendaftaran tidak valid atau sudah kadaluarsa";
pub const LOAD_FAILED_MESSAGE: &str = "Gagal memuat informasi pendaftaran";
pub const PERIOD_CLOSED_MESSAGE: &str = "Pendaftaran untuk periode ini sudah ditutup";
pub const QUOTA_FULL_MESSAGE: &str = "Kuota pendaftaran untuk periode ini sudah penuh";

fn load_error_message(error: &ApiError) -> &'static str {
    if error.is_not_found() { INVALID_LINK_MESSAGE } else { LOAD_FAILED_MESSAGE }
}

/// Why registration is unavailable, if it is.
#[must_use]
pub fn gate_message(period: &PeriodLinkInfo) -> Option<&'static str> {
    if period.can_register {
        None
    } else if !period.is_open {
        Some(PERIOD_CLOSED_MESSAGE)
    } else {
        Some(QUOTA_FULL_MESSAGE)
    }
}

#[derive(Clone, Debug)]
pub struct RegisterPage {
    period: Resource<PeriodLinkInfo>,
    wizard: RegistrationWizard,
}

impl RegisterPage {
    #[must_use]
    pub fn new(link_token: impl Into<String>) -> Self {
        Self { period: Resource::Loading, wizard: RegistrationWizard::new(link_token) }
    }

    #[must_use]
    pub fn period(&self) -> &Resource<PeriodLinkInfo> {
        &self.period
    }

    #[must_use]
    pub fn wizard(&self) -> &RegistrationWizard {
        &self.wizard
    }

    pub fn wizard_mut(&mut self) -> &mut RegistrationWizard {
        &mut self.wizard
    }

    /// Gate message for the loaded period; `None` while loading or on error.
    #[must_use]
    pub fn gate(&self) -> Option<&'static str> {
        self.period.ready().and_then(gate_message)
    }

    fn refusal(&self) -> Option<String> {
        match &self.period {
            Resource::Ready(period) => gate_message(period).map(str::to_owned),
            Resource::Error(message) => Some(message.clone()),
            Resource::Loading => Some(LOAD_FAILED_MESSAGE.to_owned()),
        }
    }

    /// Resolve the link token; prefill from `viewer` when a student is signed in.
    pub async fn load(&mut self, api: &ApiClient, viewer: Option<&User>) {
        if let Some(user) = viewer {
            self.wizard.prefill_from_user(user);
        }
        match api.period_by_link(self.wizard.link_token()).await {
            Ok(period) => {
                self.wizard.apply_period(&period);
                self.period = Resource::Ready(period);
            }
            Err(error) => {
                tracing::warn!(%error, link = self.wizard.link_token(), "period lookup failed");
                self.period = Resource::Error(load_error_message(&error).to_owned());
            }
        }
    }

    /// Submit the wizard, then attempt the automatic login.
    ///
    /// Refused while the period is unresolved or gated; the reason becomes
    /// the wizard error. Returns whether the registration completed during
    /// this call.
    pub async fn submit(&mut self, api: &ApiClient) -> bool {
        if let Some(reason) = self.refusal() {
            self.wizard.refuse(&reason);
            return false;
        }
        if !self.wizard.submit(api).await {
            return false;
        }

        let Some(outcome) = self.wizard.outcome_mut() else {
            return true;
        };
        let Some(account) = outcome.account.clone() else {
            return true;
        };
        match api.login(&account.email, &account.password).await {
            Ok(data) => outcome.auth_token = Some(data.token),
            Err(error) => tracing::warn!(%error, "automatic login after registration failed"),
        }
        true
    }
}
