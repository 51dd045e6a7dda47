//! Applicant review for school admins, plus the verified-students roster.
//!
//! SYSTEM CONTEXT
//! ==============
//! A registration moves submitted -> verified or submitted -> rejected. The
//! server owns the rule; this controller only offers the two actions for
//! submitted registrations ([`available_actions`]) and refetches after each.
//!
//! Verified students are registrations filtered server-side by status; their
//! account actions (email change, delete) go through `/users/{student_id}`.

#[cfg(test)]
#[path = "students_test.rs"]
mod students_test;

use super::{Notice, apply_refresh, matches_search};
use crate::net::api::{ApiClient, RegistrationQuery};
use crate::net::types::{Period, Registration, RegistrationStatus, StatusUpdate, UserUpdate};
use crate::state::resource::{Resource, load};

const LOAD_FAILED: &str = "Gagal mengambil data";
const STATUS_FAILED: &str = "Gagal update status";
const RESET_FAILED: &str = "Gagal reset password";
const RESET_DONE: &str = "Password berhasil direset!";
const EMAIL_FAILED: &str = "Gagal update email.";
const DELETE_FAILED: &str = "Gagal menghapus akun.";
const NO_ACCOUNT: &str = "Akun siswa tidak ditemukan.";
const NOT_REVIEWABLE: &str = "Pendaftaran ini sudah diproses.";
const PERIODS_FAILED: &str = "Gagal memuat periode";

/// Order periods for the period filter: open ones first, otherwise as served.
#[must_use]
pub fn open_first(mut periods: Vec<Period>) -> Vec<Period> {
    periods.sort_by_key(|p| !p.is_open);
    periods
}

async fn load_period_options(api: &ApiClient, token: &str) -> Resource<Vec<Period>> {
    load(api.list_periods(token), PERIODS_FAILED).await.map(open_first)
}

/// Review decision on a submitted registration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusAction {
    Verify,
    Reject,
}

impl StatusAction {
    #[must_use]
    pub fn target(self) -> RegistrationStatus {
        match self {
            Self::Verify => RegistrationStatus::Verified,
            Self::Reject => RegistrationStatus::Rejected,
        }
    }

    fn success_message(self) -> &'static str {
        match self {
            Self::Verify => "Siswa berhasil diverifikasi!",
            Self::Reject => "Pendaftaran ditolak.",
        }
    }
}

/// Controls offered for `registration`: both decisions while submitted, none otherwise.
#[must_use]
pub fn available_actions(registration: &Registration) -> &'static [StatusAction] {
    match registration.status {
        RegistrationStatus::Submitted => &[StatusAction::Verify, StatusAction::Reject],
        _ => &[],
    }
}

/// Client-side list filter.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistrationFilter {
    /// `None` shows every status.
    pub status: Option<RegistrationStatus>,
    /// Matched against applicant name and email.
    pub search: String,
}

#[must_use]
pub fn filter_registrations<'a>(registrations: &'a [Registration], filter: &RegistrationFilter) -> Vec<&'a Registration> {
    registrations
        .iter()
        .filter(|r| filter.status.is_none_or(|status| r.status == status))
        .filter(|r| matches_search(&[r.display_name(), r.display_email()], &filter.search))
        .collect()
}

// =============================================================================
// REGISTRATIONS
// =============================================================================

#[derive(Clone)]
pub struct RegistrationsPage {
    api: ApiClient,
    query: RegistrationQuery,
    registrations: Resource<Vec<Registration>>,
    period_options: Resource<Vec<Period>>,
    pub filter: RegistrationFilter,
    notice: Option<Notice>,
}

impl RegistrationsPage {
    /// `query` narrows the fetch server-side (period, status).
    #[must_use]
    pub fn new(api: ApiClient, query: RegistrationQuery) -> Self {
        Self {
            api,
            query,
            registrations: Resource::Loading,
            period_options: Resource::Loading,
            filter: RegistrationFilter::default(),
            notice: None,
        }
    }

    #[must_use]
    pub fn registrations(&self) -> &Resource<Vec<Registration>> {
        &self.registrations
    }

    /// Periods offered by the period filter, open ones first.
    #[must_use]
    pub fn period_options(&self) -> &Resource<Vec<Period>> {
        &self.period_options
    }

    pub async fn load_period_options(&mut self, token: &str) {
        self.period_options = load_period_options(&self.api, token).await;
    }

    /// Loaded registrations after the local filter.
    #[must_use]
    pub fn visible(&self) -> Vec<&Registration> {
        self.registrations.ready().map_or_else(Vec::new, |all| filter_registrations(all, &self.filter))
    }

    #[must_use]
    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub async fn refresh(&mut self, token: &str) {
        let result = self.api.list_registrations(token, self.query).await;
        apply_refresh(&mut self.registrations, &mut self.notice, result, LOAD_FAILED);
    }

    /// Verify or reject a submitted registration.
    pub async fn decide(&mut self, token: &str, registration: &Registration, action: StatusAction, notes: &str) -> bool {
        if !available_actions(registration).contains(&action) {
            self.notice = Some(Notice::error(NOT_REVIEWABLE));
            return false;
        }
        let update = StatusUpdate { status: action.target(), notes: notes.trim().to_owned() };
        match self.api.update_registration_status(token, registration.id, &update).await {
            Ok(_) => {
                tracing::info!(registration_id = registration.id, status = update.status.as_str(), "registration reviewed");
                self.notice = Some(Notice::success(action.success_message()));
                self.refresh(token).await;
                true
            }
            Err(error) => {
                self.notice = Some(Notice::from_error(&error, STATUS_FAILED));
                false
            }
        }
    }

    /// Issue a new password for the applicant's account.
    pub async fn reset_password(&mut self, token: &str, registration_id: i64) -> Option<String> {
        match self.api.reset_registration_password(token, registration_id).await {
            Ok(reset) => {
                self.notice = Some(Notice::success(RESET_DONE));
                Some(reset.new_password)
            }
            Err(error) => {
                self.notice = Some(Notice::from_error(&error, RESET_FAILED));
                None
            }
        }
    }
}

// =============================================================================
// VERIFIED STUDENTS
// =============================================================================

#[derive(Clone)]
pub struct VerifiedStudentsPage {
    api: ApiClient,
    students: Resource<Vec<Registration>>,
    period_options: Resource<Vec<Period>>,
    /// Server-side period filter; `None` lists every period.
    pub period_id: Option<i64>,
    pub search: String,
    notice: Option<Notice>,
}

impl VerifiedStudentsPage {
    #[must_use]
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            students: Resource::Loading,
            period_options: Resource::Loading,
            period_id: None,
            search: String::new(),
            notice: None,
        }
    }

    #[must_use]
    pub fn students(&self) -> &Resource<Vec<Registration>> {
        &self.students
    }

    #[must_use]
    pub fn period_options(&self) -> &Resource<Vec<Period>> {
        &self.period_options
    }

    pub async fn load_period_options(&mut self, token: &str) {
        self.period_options = load_period_options(&self.api, token).await;
    }

    #[must_use]
    pub fn visible(&self) -> Vec<&Registration> {
        let filter = RegistrationFilter { status: None, search: self.search.clone() };
        self.students.ready().map_or_else(Vec::new, |all| filter_registrations(all, &filter))
    }

    #[must_use]
    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub async fn refresh(&mut self, token: &str) {
        let query = RegistrationQuery { period_id: self.period_id, status: Some(RegistrationStatus::Verified) };
        let result = self.api.list_registrations(token, query).await;
        apply_refresh(&mut self.students, &mut self.notice, result, LOAD_FAILED);
    }

    /// Change the login email of the student behind `registration`.
    pub async fn update_email(&mut self, token: &str, registration: &Registration, new_email: &str) -> bool {
        let Some(student) = &registration.student else {
            self.notice = Some(Notice::error(NO_ACCOUNT));
            return false;
        };
        let update = UserUpdate { name: student.name.clone(), email: new_email.trim().to_owned(), role: None };
        match self.api.update_user(token, student.id, &update).await {
            Ok(ack) => {
                self.notice = ack.message.map(Notice::success);
                self.refresh(token).await;
                true
            }
            Err(error) => {
                self.notice = Some(Notice::from_error(&error, EMAIL_FAILED));
                false
            }
        }
    }

    /// Delete the student account behind `registration`.
    pub async fn delete_account(&mut self, token: &str, registration: &Registration) -> bool {
        let Some(student) = &registration.student else {
            self.notice = Some(Notice::error(NO_ACCOUNT));
            return false;
        };
        match self.api.delete_user(token, student.id).await {
            Ok(ack) => {
                tracing::info!(student_id = student.id, "student account deleted");
                self.notice = ack.message.map(Notice::success);
                self.refresh(token).await;
                true
            }
            Err(error) => {
                self.notice = Some(Notice::from_error(&error, DELETE_FAILED));
                false
            }
        }
    }

    pub async fn reset_password(&mut self, token: &str, registration_id: i64) -> Option<String> {
        match self.api.reset_registration_password(token, registration_id).await {
            Ok(reset) => Some(reset.new_password),
            Err(error) => {
                self.notice = Some(Notice::from_error(&error, "Gagal mereset password"));
                None
            }
        }
    }
}
