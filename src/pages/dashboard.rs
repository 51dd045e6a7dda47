//! Landing dashboards for school admins and students.
//!
//! DESIGN
//! ======
//! The school-admin dashboard loads its active period and stats through
//! [`load_cancellable`]. Tearing the page down cancels the shared token, so
//! a response arriving afterwards is dropped instead of applied. The
//! student dashboard shows only what the server returned; a failed load is
//! an error state with no stand-in data.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use tokio_util::sync::CancellationToken;

use super::{Notice, apply_refresh};
use crate::net::api::ApiClient;
use crate::net::types::{Period, SchoolStats, StudentDashboard};
use crate::state::resource::{Resource, fetch_cancellable, load, load_cancellable};

const PERIOD_FAILED: &str = "Gagal memuat periode aktif";
const STATS_FAILED: &str = "Gagal memuat statistik";
const END_FAILED: &str = "Gagal mengakhiri periode";
const STUDENT_FAILED: &str = "Gagal memuat data siswa";

/// Public registration URL for `period`: `{app_url}/register/{token}`.
#[must_use]
pub fn registration_link(app_url: &str, period: &Period) -> Option<String> {
    let token = period.registration_link.as_deref().filter(|t| !t.is_empty())?;
    Some(format!("{}/register/{token}", app_url.trim_end_matches('/')))
}

pub struct SchoolDashboardPage {
    api: ApiClient,
    app_url: String,
    cancel: CancellationToken,
    active_period: Resource<Option<Period>>,
    stats: Resource<SchoolStats>,
    notice: Option<Notice>,
}

impl SchoolDashboardPage {
    #[must_use]
    pub fn new(api: ApiClient, app_url: impl Into<String>) -> Self {
        Self {
            api,
            app_url: app_url.into(),
            cancel: CancellationToken::new(),
            active_period: Resource::Loading,
            stats: Resource::Loading,
            notice: None,
        }
    }

    /// Token to cancel from outside when the page goes away mid-load.
    #[must_use]
    pub fn cancel_handle(&self) -> CancellationToken {
        self.cancel.clone()
    }

    pub fn teardown(&self) {
        self.cancel.cancel();
    }

    #[must_use]
    pub fn active_period(&self) -> &Resource<Option<Period>> {
        &self.active_period
    }

    #[must_use]
    pub fn stats(&self) -> &Resource<SchoolStats> {
        &self.stats
    }

    #[must_use]
    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Shareable link of the active period, if one is open.
    #[must_use]
    pub fn share_link(&self) -> Option<String> {
        let period = self.active_period.ready()?.as_ref()?;
        registration_link(&self.app_url, period)
    }

    /// Load period and stats. Returns `false` when cancelled; nothing is applied then.
    pub async fn load(&mut self, token: &str) -> bool {
        let Some(period) = load_cancellable(&self.cancel, self.api.active_period(token), PERIOD_FAILED).await else {
            return false;
        };
        let Some(stats) = load_cancellable(&self.cancel, self.api.school_stats(token), STATS_FAILED).await else {
            return false;
        };
        self.active_period = period;
        self.stats = stats;
        true
    }

    /// Refetch after an action; failures keep what is shown and become the notice.
    async fn refresh(&mut self, token: &str) {
        let Some(period) = fetch_cancellable(&self.cancel, self.api.active_period(token)).await else {
            return;
        };
        apply_refresh(&mut self.active_period, &mut self.notice, period, PERIOD_FAILED);
        let Some(stats) = fetch_cancellable(&self.cancel, self.api.school_stats(token)).await else {
            return;
        };
        apply_refresh(&mut self.stats, &mut self.notice, stats, STATS_FAILED);
    }

    /// End the active period, then refetch.
    ///
    /// The period is cleared from the page as soon as the server accepts.
    pub async fn end_active_period(&mut self, token: &str) -> bool {
        let Some(Some(period)) = self.active_period.ready() else {
            return false;
        };
        if period.is_ended() {
            return false;
        }
        let period_id = period.id;
        match self.api.end_period(token, period_id).await {
            Ok(ack) => {
                tracing::info!(period_id, "active period ended");
                self.active_period = Resource::Ready(None);
                self.notice = ack.message.map(Notice::success);
                self.refresh(token).await;
                true
            }
            Err(error) => {
                self.notice = Some(Notice::from_error(&error, END_FAILED));
                false
            }
        }
    }
}

pub struct StudentDashboardPage {
    api: ApiClient,
    dashboard: Resource<StudentDashboard>,
}

impl StudentDashboardPage {
    #[must_use]
    pub fn new(api: ApiClient) -> Self {
        Self { api, dashboard: Resource::Loading }
    }

    #[must_use]
    pub fn dashboard(&self) -> &Resource<StudentDashboard> {
        &self.dashboard
    }

    pub async fn load(&mut self, token: &str) {
        self.dashboard = load(self.api.student_dashboard(token), STUDENT_FAILED).await;
    }
}
