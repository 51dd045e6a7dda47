//! Registration-period management for school admins.
//!
//! DESIGN
//! ======
//! Periods move open <-> closed freely until ended; ending is one-way. The
//! controller exposes no toggle or end control for an ended period and
//! refuses those actions locally without a request. Every successful
//! mutation refetches the list.

#[cfg(test)]
#[path = "periods_test.rs"]
mod periods_test;

use super::{Notice, apply_refresh};
use crate::net::api::ApiClient;
use crate::net::error::ApiError;
use crate::net::types::{Ack, Period, PeriodPayload};
use crate::state::resource::Resource;

const LOAD_FAILED: &str = "Gagal mengambil data periode";
const CREATE_FAILED: &str = "Gagal membuat periode";
const UPDATE_FAILED: &str = "Gagal update periode";
const TOGGLE_FAILED: &str = "Gagal mengubah status";
const END_FAILED: &str = "Gagal mengakhiri periode";
const DELETE_FAILED: &str = "Gagal menghapus periode";
const REGENERATE_FAILED: &str = "Gagal membuat ulang link";
const ENDED_MESSAGE: &str = "Periode sudah berakhir";

#[must_use]
pub fn can_toggle(period: &Period) -> bool {
    !period.is_ended()
}

#[must_use]
pub fn can_end(period: &Period) -> bool {
    !period.is_ended()
}

/// Share of the quota taken, in percent, capped at 100.
#[must_use]
pub fn quota_usage(period: &Period) -> Option<u8> {
    let quota = period.quota.filter(|q| *q > 0)?;
    let percent = (u64::from(period.registered_count) * 100 / u64::from(quota)).min(100);
    u8::try_from(percent).ok()
}

/// Create/edit form as typed by the admin.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PeriodForm {
    pub name: String,
    pub academic_year: String,
    /// Empty means unlimited.
    pub quota: String,
    pub programs: Vec<String>,
    pub is_open: bool,
}

impl Default for PeriodForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            academic_year: String::new(),
            quota: String::new(),
            programs: vec![String::new()],
            is_open: true,
        }
    }
}

impl PeriodForm {
    /// Form prefilled for editing `period`.
    #[must_use]
    pub fn from_period(period: &Period) -> Self {
        Self {
            name: period.name.clone(),
            academic_year: period.academic_year.clone(),
            quota: period.quota.map(|q| q.to_string()).unwrap_or_default(),
            programs: if period.programs.is_empty() { vec![String::new()] } else { period.programs.clone() },
            is_open: period.is_open,
        }
    }

    /// Request body: quota as a number or null, blank programs dropped.
    ///
    /// # Errors
    ///
    /// Returns a message when the quota is present but not a whole number.
    pub fn to_payload(&self) -> Result<PeriodPayload, &'static str> {
        let quota = match self.quota.trim() {
            "" => None,
            raw => Some(raw.parse::<u32>().map_err(|_| "Kuota harus berupa angka")?),
        };
        Ok(PeriodPayload {
            name: self.name.trim().to_owned(),
            academic_year: self.academic_year.trim().to_owned(),
            quota,
            programs: self
                .programs
                .iter()
                .map(String::as_str)
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .map(ToOwned::to_owned)
                .collect(),
            is_open: self.is_open,
        })
    }
}

#[derive(Clone)]
pub struct PeriodsPage {
    api: ApiClient,
    periods: Resource<Vec<Period>>,
    notice: Option<Notice>,
}

impl PeriodsPage {
    #[must_use]
    pub fn new(api: ApiClient) -> Self {
        Self { api, periods: Resource::Loading, notice: None }
    }

    #[must_use]
    pub fn periods(&self) -> &Resource<Vec<Period>> {
        &self.periods
    }

    #[must_use]
    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub async fn refresh(&mut self, token: &str) {
        let result = self.api.list_periods(token).await;
        apply_refresh(&mut self.periods, &mut self.notice, result, LOAD_FAILED);
    }

    pub async fn create(&mut self, token: &str, form: &PeriodForm) -> bool {
        let payload = match form.to_payload() {
            Ok(payload) => payload,
            Err(message) => {
                self.notice = Some(Notice::error(message));
                return false;
            }
        };
        let result = self.api.create_period(token, &payload).await;
        self.settle(token, result, CREATE_FAILED).await
    }

    pub async fn update(&mut self, token: &str, period_id: i64, form: &PeriodForm) -> bool {
        let payload = match form.to_payload() {
            Ok(payload) => payload,
            Err(message) => {
                self.notice = Some(Notice::error(message));
                return false;
            }
        };
        let result = self.api.update_period(token, period_id, &payload).await;
        self.settle(token, result, UPDATE_FAILED).await
    }

    /// Open or close `period`; refused for ended periods.
    pub async fn toggle(&mut self, token: &str, period: &Period) -> bool {
        if !can_toggle(period) {
            self.notice = Some(Notice::error(ENDED_MESSAGE));
            return false;
        }
        let result = self.api.toggle_period(token, period.id).await;
        self.settle(token, result, TOGGLE_FAILED).await
    }

    /// End `period` for good; refused when already ended.
    pub async fn end(&mut self, token: &str, period: &Period) -> bool {
        if !can_end(period) {
            self.notice = Some(Notice::error(ENDED_MESSAGE));
            return false;
        }
        let result = self.api.end_period(token, period.id).await;
        self.settle(token, result, END_FAILED).await
    }

    pub async fn delete(&mut self, token: &str, period_id: i64) -> bool {
        let result = self.api.delete_period(token, period_id).await;
        self.settle(token, result, DELETE_FAILED).await
    }

    pub async fn regenerate_link(&mut self, token: &str, period_id: i64) -> bool {
        let result = self.api.regenerate_period_link(token, period_id).await;
        self.settle(token, result, REGENERATE_FAILED).await
    }

    async fn settle(&mut self, token: &str, result: Result<Ack, ApiError>, fallback: &str) -> bool {
        match result {
            Ok(ack) => {
                self.notice = ack.message.map(Notice::success);
                self.refresh(token).await;
                true
            }
            Err(error) => {
                tracing::warn!(%error, "period action failed");
                self.notice = Some(Notice::from_error(&error, fallback));
                false
            }
        }
    }
}
