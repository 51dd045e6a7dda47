//! Super-admin screens: platform dashboard with pending schools, and the
//! full school list.

#[cfg(test)]
#[path = "schools_test.rs"]
mod schools_test;

use super::{Notice, apply_refresh, matches_search};
use crate::net::api::ApiClient;
use crate::net::types::{School, SchoolStatus, SuperAdminDashboard};
use crate::state::resource::Resource;

pub const VERIFY_NOTES: &str = "Verified by super admin";
pub const REJECT_REASON: &str = "Rejected by super admin";

const DASHBOARD_FAILED: &str = "Gagal memuat data dashboard";
const SCHOOLS_FAILED: &str = "Gagal mengambil data sekolah";
const ACTION_FAILED: &str = "Gagal memproses aksi";
const REJECTED: &str = "Sekolah berhasil ditolak.";
const VERIFIED: &str = "Sekolah berhasil diverifikasi.";

#[derive(Clone)]
pub struct SuperAdminDashboardPage {
    api: ApiClient,
    dashboard: Resource<SuperAdminDashboard>,
    notice: Option<Notice>,
}

impl SuperAdminDashboardPage {
    #[must_use]
    pub fn new(api: ApiClient) -> Self {
        Self { api, dashboard: Resource::Loading, notice: None }
    }

    #[must_use]
    pub fn dashboard(&self) -> &Resource<SuperAdminDashboard> {
        &self.dashboard
    }

    #[must_use]
    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub async fn refresh(&mut self, token: &str) {
        let result = self.api.super_admin_dashboard(token).await;
        apply_refresh(&mut self.dashboard, &mut self.notice, result, DASHBOARD_FAILED);
    }

    /// Approve a pending school; returns the registration link it was issued.
    pub async fn verify(&mut self, token: &str, school_id: i64) -> Option<String> {
        match self.api.verify_school(token, school_id, VERIFY_NOTES).await {
            Ok(verification) => {
                tracing::info!(school_id, "school verified");
                self.notice = Some(Notice::success(VERIFIED));
                self.refresh(token).await;
                verification.registration_link
            }
            Err(error) => {
                tracing::warn!(%error, school_id, "school verification failed");
                self.notice = Some(Notice::from_error(&error, ACTION_FAILED));
                None
            }
        }
    }

    pub async fn reject(&mut self, token: &str, school_id: i64) -> bool {
        match self.api.reject_school(token, school_id, REJECT_REASON).await {
            Ok(_) => {
                tracing::info!(school_id, "school rejected");
                self.notice = Some(Notice::success(REJECTED));
                self.refresh(token).await;
                true
            }
            Err(error) => {
                tracing::warn!(%error, school_id, "school rejection failed");
                self.notice = Some(Notice::from_error(&error, ACTION_FAILED));
                false
            }
        }
    }
}

/// Local filter for the school list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SchoolFilter {
    pub status: Option<SchoolStatus>,
    pub search: String,
}

#[must_use]
pub fn filter_schools<'a>(schools: &'a [School], filter: &SchoolFilter) -> Vec<&'a School> {
    schools
        .iter()
        .filter(|s| filter.status.is_none_or(|status| s.status == Some(status)))
        .filter(|s| {
            let email = s.email.as_deref().unwrap_or("");
            let npsn = s.npsn.as_deref().unwrap_or("");
            matches_search(&[s.name.as_str(), email, npsn], &filter.search)
        })
        .collect()
}

#[derive(Clone)]
pub struct SchoolsPage {
    api: ApiClient,
    schools: Resource<Vec<School>>,
    pub filter: SchoolFilter,
    notice: Option<Notice>,
}

impl SchoolsPage {
    #[must_use]
    pub fn new(api: ApiClient) -> Self {
        Self { api, schools: Resource::Loading, filter: SchoolFilter::default(), notice: None }
    }

    #[must_use]
    pub fn schools(&self) -> &Resource<Vec<School>> {
        &self.schools
    }

    #[must_use]
    pub fn visible(&self) -> Vec<&School> {
        self.schools.ready().map_or_else(Vec::new, |all| filter_schools(all, &self.filter))
    }

    #[must_use]
    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub async fn refresh(&mut self, token: &str) {
        let result = self.api.list_schools(token).await;
        apply_refresh(&mut self.schools, &mut self.notice, result, SCHOOLS_FAILED);
    }
}
