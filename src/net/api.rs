//! Typed REST helpers for the PPDB API.
//!
//! Each public method maps to exactly one endpoint and performs exactly one
//! request. Authenticated methods take the bearer token explicitly; callers
//! get it from [`crate::state::session::Session::bearer`], which refuses to
//! hand out a token after logout.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx responses become [`ApiError::Status`] carrying the server's
//! `message`/`error` text. Nothing is retried.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::sync::Arc;

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value, json};

use super::error::ApiError;
use super::transport::{ApiRequest, HttpTransport, Transport};
use super::types::{
    Ack, Envelope, ListEnvelope, LoginData, MaintenanceState, PasswordChange, PasswordReset, Period, PeriodLinkInfo,
    PeriodPayload, Registration, RegistrationStatus, School, SchoolRegistration, SchoolStats, SchoolVerification,
    Settings, StatusUpdate, StudentDashboard, SubmitRegistration, SubmitRegistrationResponse, SuperAdminDashboard,
    User, UserUpdate,
};
use crate::config::ClientConfig;

fn period_path(period_id: i64, action: Option<&str>) -> String {
    match action {
        Some(action) => format!("/periods/{period_id}/{action}"),
        None => format!("/periods/{period_id}"),
    }
}

fn registrations_path(period_id: Option<i64>, status: Option<RegistrationStatus>) -> String {
    let mut params = Vec::new();
    if let Some(status) = status {
        params.push(format!("status={}", status.as_str()));
    }
    if let Some(period_id) = period_id {
        params.push(format!("period_id={period_id}"));
    }
    with_query("/registrations", &params)
}

fn users_path(school_id: Option<i64>) -> String {
    let params: Vec<String> = school_id.map(|id| format!("school_id={id}")).into_iter().collect();
    with_query("/users", &params)
}

fn with_query(path: &str, params: &[String]) -> String {
    if params.is_empty() {
        path.to_owned()
    } else {
        format!("{path}?{}", params.join("&"))
    }
}

fn period_link_path(link_token: &str) -> Result<String, ApiError> {
    let token = link_token.trim();
    let well_formed =
        !token.is_empty() && token.chars().all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_'));
    if !well_formed {
        return Err(ApiError::InvalidLinkToken(link_token.to_owned()));
    }
    Ok(format!("/period-by-link/{token}"))
}

/// Server-side filters for `GET /registrations`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RegistrationQuery {
    pub period_id: Option<i64>,
    pub status: Option<RegistrationStatus>,
}

/// Typed client over a [`Transport`].
#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn Transport>,
}

impl ApiClient {
    #[must_use]
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Build a client talking HTTP to `config.api_url`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::HttpClientBuild`] if the HTTP client cannot be built.
    pub fn from_config(config: &ClientConfig) -> Result<Self, ApiError> {
        let transport = HttpTransport::new(&config.api_url, config.timeouts)?;
        Ok(Self::new(Arc::new(transport)))
    }

    async fn execute(&self, request: ApiRequest) -> Result<Value, ApiError> {
        let method = request.method.clone();
        let path = request.path.clone();
        let response = self.transport.send(request).await?;
        if !response.is_success() {
            tracing::debug!(%method, %path, status = response.status, "api request rejected");
            return Err(ApiError::from_status(response.status, &response.body));
        }
        Ok(response.body)
    }

    async fn fetch<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T, ApiError> {
        let body = self.execute(request).await?;
        decode(body)
    }

    async fn fetch_data<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T, ApiError> {
        let envelope: Envelope<T> = self.fetch(request).await?;
        envelope.data.ok_or_else(|| ApiError::Decode("missing `data`".to_owned()))
    }

    async fn fetch_list<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<Vec<T>, ApiError> {
        let envelope: ListEnvelope<T> = self.fetch(request).await?;
        Ok(envelope.data)
    }

    // =========================================================================
    // PUBLIC ENDPOINTS
    // =========================================================================

    /// `GET /test-connection`
    ///
    /// # Errors
    ///
    /// Any transport or status failure.
    pub async fn test_connection(&self) -> Result<Value, ApiError> {
        self.execute(ApiRequest::new(Method::GET, "/test-connection")).await
    }

    /// `POST /login`
    ///
    /// # Errors
    ///
    /// Status errors for bad credentials; decode errors if no token/user came back.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginData, ApiError> {
        let request = ApiRequest::new(Method::POST, "/login").json(json!({ "email": email, "password": password }));
        self.fetch_data(request).await
    }

    /// `POST /register-school`; returns the server's `data` payload.
    ///
    /// # Errors
    ///
    /// Any transport or status failure.
    pub async fn register_school(&self, payload: &SchoolRegistration) -> Result<Value, ApiError> {
        let request = ApiRequest::new(Method::POST, "/register-school").json(to_body(payload)?);
        let envelope: Envelope<Value> = self.fetch(request).await?;
        Ok(envelope.data.unwrap_or(Value::Null))
    }

    /// `GET /period-by-link/{token}`
    ///
    /// # Errors
    ///
    /// HTTP 404 when the link is unknown or expired;
    /// [`ApiError::InvalidLinkToken`] without a request when the token is malformed.
    pub async fn period_by_link(&self, link_token: &str) -> Result<PeriodLinkInfo, ApiError> {
        let path = period_link_path(link_token)?;
        self.fetch_data(ApiRequest::new(Method::GET, path)).await
    }

    /// `POST /submit-registration`
    ///
    /// # Errors
    ///
    /// HTTP 409 when the applicant must log in first; other status failures.
    pub async fn submit_registration(
        &self,
        payload: &SubmitRegistration,
    ) -> Result<SubmitRegistrationResponse, ApiError> {
        let request = ApiRequest::new(Method::POST, "/submit-registration").json(to_body(payload)?);
        self.fetch(request).await
    }

    // =========================================================================
    // SESSION & DASHBOARDS
    // =========================================================================

    /// `GET /me`
    ///
    /// # Errors
    ///
    /// Any transport or status failure.
    pub async fn current_user(&self, token: &str) -> Result<User, ApiError> {
        #[derive(serde::Deserialize)]
        struct MeResponse {
            user: User,
        }
        let me: MeResponse = self.fetch(ApiRequest::new(Method::GET, "/me").bearer(token)).await?;
        Ok(me.user)
    }

    /// `GET /dashboard/school-stats`
    ///
    /// # Errors
    ///
    /// Any transport or status failure.
    pub async fn school_stats(&self, token: &str) -> Result<SchoolStats, ApiError> {
        self.fetch(ApiRequest::new(Method::GET, "/dashboard/school-stats").bearer(token)).await
    }

    /// `GET /dashboard/super-admin`
    ///
    /// # Errors
    ///
    /// Any transport or status failure.
    pub async fn super_admin_dashboard(&self, token: &str) -> Result<SuperAdminDashboard, ApiError> {
        self.fetch(ApiRequest::new(Method::GET, "/dashboard/super-admin").bearer(token)).await
    }

    /// `GET /dashboard/student`
    ///
    /// # Errors
    ///
    /// Any transport or status failure.
    pub async fn student_dashboard(&self, token: &str) -> Result<StudentDashboard, ApiError> {
        self.fetch(ApiRequest::new(Method::GET, "/dashboard/student").bearer(token)).await
    }

    // =========================================================================
    // PERIODS
    // =========================================================================

    /// `GET /periods`
    ///
    /// # Errors
    ///
    /// Any transport or status failure.
    pub async fn list_periods(&self, token: &str) -> Result<Vec<Period>, ApiError> {
        self.fetch_list(ApiRequest::new(Method::GET, "/periods").bearer(token)).await
    }

    /// `GET /periods/active`; `None` when the school has no active period.
    ///
    /// # Errors
    ///
    /// Any transport or status failure.
    pub async fn active_period(&self, token: &str) -> Result<Option<Period>, ApiError> {
        let envelope: Envelope<Period> =
            self.fetch(ApiRequest::new(Method::GET, "/periods/active").bearer(token)).await?;
        Ok(envelope.data)
    }

    /// `POST /periods`
    ///
    /// # Errors
    ///
    /// Any transport or status failure.
    pub async fn create_period(&self, token: &str, payload: &PeriodPayload) -> Result<Ack, ApiError> {
        let request = ApiRequest::new(Method::POST, "/periods").bearer(token).json(to_body(payload)?);
        self.fetch(request).await
    }

    /// `PUT /periods/{id}`
    ///
    /// # Errors
    ///
    /// Any transport or status failure.
    pub async fn update_period(&self, token: &str, period_id: i64, payload: &PeriodPayload) -> Result<Ack, ApiError> {
        let request = ApiRequest::new(Method::PUT, period_path(period_id, None))
            .bearer(token)
            .json(to_body(payload)?);
        self.fetch(request).await
    }

    /// `POST /periods/{id}/toggle-status`
    ///
    /// # Errors
    ///
    /// Any transport or status failure.
    pub async fn toggle_period(&self, token: &str, period_id: i64) -> Result<Ack, ApiError> {
        let request = ApiRequest::new(Method::POST, period_path(period_id, Some("toggle-status"))).bearer(token);
        self.fetch(request).await
    }

    /// `POST /periods/{id}/end`
    ///
    /// # Errors
    ///
    /// Any transport or status failure.
    pub async fn end_period(&self, token: &str, period_id: i64) -> Result<Ack, ApiError> {
        let request = ApiRequest::new(Method::POST, period_path(period_id, Some("end"))).bearer(token);
        self.fetch(request).await
    }

    /// `DELETE /periods/{id}`
    ///
    /// # Errors
    ///
    /// Any transport or status failure.
    pub async fn delete_period(&self, token: &str, period_id: i64) -> Result<Ack, ApiError> {
        let request = ApiRequest::new(Method::DELETE, period_path(period_id, None)).bearer(token);
        self.fetch(request).await
    }

    /// `POST /periods/{id}/regenerate-link`
    ///
    /// # Errors
    ///
    /// Any transport or status failure.
    pub async fn regenerate_period_link(&self, token: &str, period_id: i64) -> Result<Ack, ApiError> {
        let request = ApiRequest::new(Method::POST, period_path(period_id, Some("regenerate-link"))).bearer(token);
        self.fetch(request).await
    }

    // =========================================================================
    // REGISTRATIONS
    // =========================================================================

    /// `GET /registrations[?status=..&period_id=..]`
    ///
    /// # Errors
    ///
    /// Any transport or status failure.
    pub async fn list_registrations(
        &self,
        token: &str,
        query: RegistrationQuery,
    ) -> Result<Vec<Registration>, ApiError> {
        let path = registrations_path(query.period_id, query.status);
        self.fetch_list(ApiRequest::new(Method::GET, path).bearer(token)).await
    }

    /// `POST /registrations/{id}/status`
    ///
    /// # Errors
    ///
    /// Any transport or status failure.
    pub async fn update_registration_status(
        &self,
        token: &str,
        registration_id: i64,
        update: &StatusUpdate,
    ) -> Result<Ack, ApiError> {
        let request = ApiRequest::new(Method::POST, format!("/registrations/{registration_id}/status"))
            .bearer(token)
            .json(to_body(update)?);
        self.fetch(request).await
    }

    /// `POST /registrations/{id}/reset-password`
    ///
    /// # Errors
    ///
    /// Any transport or status failure.
    pub async fn reset_registration_password(
        &self,
        token: &str,
        registration_id: i64,
    ) -> Result<PasswordReset, ApiError> {
        let request =
            ApiRequest::new(Method::POST, format!("/registrations/{registration_id}/reset-password")).bearer(token);
        self.fetch(request).await
    }

    // =========================================================================
    // SCHOOLS
    // =========================================================================

    /// `GET /schools`
    ///
    /// # Errors
    ///
    /// Any transport or status failure.
    pub async fn list_schools(&self, token: &str) -> Result<Vec<School>, ApiError> {
        self.fetch_list(ApiRequest::new(Method::GET, "/schools").bearer(token)).await
    }

    /// `POST /schools/{id}/verify`; returns the issued registration link.
    ///
    /// # Errors
    ///
    /// Any transport or status failure.
    pub async fn verify_school(&self, token: &str, school_id: i64, notes: &str) -> Result<SchoolVerification, ApiError> {
        let request = ApiRequest::new(Method::POST, format!("/schools/{school_id}/verify"))
            .bearer(token)
            .json(json!({ "notes": notes }));
        self.fetch(request).await
    }

    /// `POST /schools/{id}/reject`
    ///
    /// # Errors
    ///
    /// Any transport or status failure.
    pub async fn reject_school(&self, token: &str, school_id: i64, reason: &str) -> Result<Ack, ApiError> {
        let request = ApiRequest::new(Method::POST, format!("/schools/{school_id}/reject"))
            .bearer(token)
            .json(json!({ "reason": reason }));
        self.fetch(request).await
    }

    // =========================================================================
    // USERS
    // =========================================================================

    /// `GET /users[?school_id=..]`
    ///
    /// # Errors
    ///
    /// Any transport or status failure.
    pub async fn list_users(&self, token: &str, school_id: Option<i64>) -> Result<Vec<User>, ApiError> {
        self.fetch_list(ApiRequest::new(Method::GET, users_path(school_id)).bearer(token)).await
    }

    /// `PUT /users/{id}`
    ///
    /// # Errors
    ///
    /// Any transport or status failure.
    pub async fn update_user(&self, token: &str, user_id: i64, update: &UserUpdate) -> Result<Ack, ApiError> {
        let request = ApiRequest::new(Method::PUT, format!("/users/{user_id}"))
            .bearer(token)
            .json(to_body(update)?);
        self.fetch(request).await
    }

    /// `DELETE /users/{id}`
    ///
    /// # Errors
    ///
    /// Any transport or status failure.
    pub async fn delete_user(&self, token: &str, user_id: i64) -> Result<Ack, ApiError> {
        self.fetch(ApiRequest::new(Method::DELETE, format!("/users/{user_id}")).bearer(token)).await
    }

    /// `POST /users/{id}/block` (toggles block/unblock)
    ///
    /// # Errors
    ///
    /// Any transport or status failure.
    pub async fn toggle_user_block(&self, token: &str, user_id: i64) -> Result<Ack, ApiError> {
        self.fetch(ApiRequest::new(Method::POST, format!("/users/{user_id}/block")).bearer(token)).await
    }

    /// `POST /users/{id}/reset-password`
    ///
    /// # Errors
    ///
    /// Any transport or status failure.
    pub async fn reset_user_password(&self, token: &str, user_id: i64) -> Result<PasswordReset, ApiError> {
        self.fetch(ApiRequest::new(Method::POST, format!("/users/{user_id}/reset-password")).bearer(token)).await
    }

    // =========================================================================
    // SETTINGS
    // =========================================================================

    /// `GET /settings`
    ///
    /// # Errors
    ///
    /// Any transport or status failure.
    pub async fn settings(&self, token: &str) -> Result<Settings, ApiError> {
        self.fetch(ApiRequest::new(Method::GET, "/settings").bearer(token)).await
    }

    /// `PUT /settings/password`
    ///
    /// # Errors
    ///
    /// Any transport or status failure.
    pub async fn change_password(&self, token: &str, change: &PasswordChange) -> Result<Ack, ApiError> {
        let request = ApiRequest::new(Method::PUT, "/settings/password")
            .bearer(token)
            .json(to_body(change)?);
        self.fetch(request).await
    }

    /// `POST /settings/maintenance` (toggles maintenance mode)
    ///
    /// # Errors
    ///
    /// Any transport or status failure.
    pub async fn toggle_maintenance(&self, token: &str) -> Result<MaintenanceState, ApiError> {
        self.fetch(ApiRequest::new(Method::POST, "/settings/maintenance").bearer(token)).await
    }
}

fn to_body<T: serde::Serialize>(payload: &T) -> Result<Value, ApiError> {
    serde_json::to_value(payload).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Decode a 2xx body; an empty body decodes as `{}` so acknowledgements work.
fn decode<T: DeserializeOwned>(body: Value) -> Result<T, ApiError> {
    let body = if body.is_null() { Value::Object(Map::new()) } else { body };
    serde_json::from_value(body).map_err(|e| ApiError::Decode(e.to_string()))
}
