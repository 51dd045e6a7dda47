//! Request/response records mirrored from the PPDB REST API.
//!
//! DESIGN
//! ======
//! The client never owns these entities; it decodes whatever the server
//! returns. Decoding is lenient: unknown fields are ignored, optional fields
//! default, and unknown enum strings land in an `Other` variant instead of
//! failing the whole response.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// `{ "data": ... }` envelope used by most list and lookup endpoints.
#[derive(Clone, Debug, Deserialize)]
pub struct Envelope<T> {
    pub data: Option<T>,
}

/// `{ "data": [...] }` envelope; a missing or null `data` decodes as empty.
#[derive(Clone, Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ListEnvelope<T> {
    #[serde(default = "Vec::new", deserialize_with = "null_as_empty")]
    pub data: Vec<T>,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

// =============================================================================
// USERS & SCHOOLS
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    SuperAdmin,
    SchoolAdmin,
    Student,
    #[serde(other)]
    Other,
}

impl Role {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SuperAdmin => "super_admin",
            Self::SchoolAdmin => "school_admin",
            Self::Student => "student",
            Self::Other => "other",
        }
    }

    /// Parse a CLI/filter value; `Other` is never produced.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "super_admin" => Some(Self::SuperAdmin),
            "school_admin" => Some(Self::SchoolAdmin),
            "student" => Some(Self::Student),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub school_id: Option<i64>,
    #[serde(default)]
    pub school: Option<School>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchoolStatus {
    Pending,
    Active,
    Inactive,
    #[serde(other)]
    Other,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct School {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub npsn: Option<String>,
    #[serde(default)]
    pub status: Option<SchoolStatus>,
    /// Registration-link token issued when the school was verified.
    #[serde(default)]
    pub registration_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verified_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

// =============================================================================
// PERIODS
// =============================================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Period {
    pub id: i64,
    pub name: String,
    pub academic_year: String,
    pub is_open: bool,
    #[serde(default)]
    pub quota: Option<u32>,
    #[serde(default)]
    pub registered_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remaining_quota: Option<i64>,
    #[serde(default)]
    pub programs: Vec<String>,
    /// Unique link token; the public URL is `{app}/register/{token}`.
    #[serde(default)]
    pub registration_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default)]
    pub ended_at: Option<String>,
}

impl Period {
    /// Ended periods are terminal: no toggle, no end, no reopen.
    #[must_use]
    pub fn is_ended(&self) -> bool {
        self.ended_at.is_some()
    }
}

/// School summary embedded in a period resolved by link token.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PeriodSchool {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub npsn: Option<String>,
}

/// Public view of a period returned by `GET /period-by-link/{token}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PeriodLinkInfo {
    pub id: i64,
    pub name: String,
    pub academic_year: String,
    pub is_open: bool,
    #[serde(default)]
    pub programs: Vec<String>,
    #[serde(default)]
    pub quota: Option<u32>,
    #[serde(default)]
    pub registered_count: u32,
    #[serde(default)]
    pub remaining_quota: Option<i64>,
    pub can_register: bool,
    pub school: PeriodSchool,
}

/// Body for `POST /periods` and `PUT /periods/{id}`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PeriodPayload {
    pub name: String,
    pub academic_year: String,
    pub quota: Option<u32>,
    pub programs: Vec<String>,
    pub is_open: bool,
}

// =============================================================================
// REGISTRATIONS
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegistrationStatus {
    Draft,
    Submitted,
    Verified,
    Rejected,
}

impl RegistrationStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Submitted => "submitted",
            Self::Verified => "verified",
            Self::Rejected => "rejected",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "draft" => Some(Self::Draft),
            "submitted" => Some(Self::Submitted),
            "verified" => Some(Self::Verified),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }
}

/// Applicant-entered fields stored on the registration as `form_data`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistrationFormData {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub program: String,
    pub birth_place: String,
    pub birth_date: String,
    pub gender: String,
    pub previous_school: String,
    pub previous_school_year: String,
    pub address: String,
    pub province: String,
    pub city: String,
    pub postal_code: String,
    pub father_name: String,
    pub father_phone: String,
    pub father_job: String,
    pub mother_name: String,
    pub mother_phone: String,
    pub mother_job: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodSummary {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub academic_year: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentSummary {
    pub id: i64,
    pub name: String,
    pub email: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Registration {
    pub id: i64,
    #[serde(default)]
    pub student_id: Option<i64>,
    #[serde(default)]
    pub program: Option<String>,
    #[serde(default)]
    pub academic_year: Option<String>,
    pub status: RegistrationStatus,
    #[serde(default)]
    pub form_data: RegistrationFormData,
    #[serde(default)]
    pub period_id: Option<i64>,
    #[serde(default)]
    pub period: Option<PeriodSummary>,
    #[serde(default)]
    pub student: Option<StudentSummary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub school: Option<School>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Registration {
    /// Applicant name: form data first, then the linked student account.
    #[must_use]
    pub fn display_name(&self) -> &str {
        non_empty(&self.form_data.name)
            .or_else(|| self.student.as_ref().map(|s| s.name.as_str()))
            .unwrap_or("")
    }

    #[must_use]
    pub fn display_email(&self) -> &str {
        non_empty(&self.form_data.email)
            .or_else(|| self.student.as_ref().map(|s| s.email.as_str()))
            .unwrap_or("")
    }
}

fn non_empty(value: &str) -> Option<&str> {
    if value.is_empty() { None } else { Some(value) }
}

/// Body for `POST /registrations/{id}/status`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StatusUpdate {
    pub status: RegistrationStatus,
    pub notes: String,
}

/// Body for `POST /submit-registration`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SubmitRegistration {
    pub period_link: String,
    pub form_data: RegistrationFormData,
}

/// Credentials the server issues for a new student account.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentAccount {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SubmitRegistrationResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub student_account: Option<StudentAccount>,
}

// =============================================================================
// AUTH & ACCOUNTS
// =============================================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginData {
    pub token: String,
    pub user: User,
}

/// Body for `POST /register-school`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SchoolRegistration {
    pub school_name: String,
    pub school_email: String,
    pub school_phone: String,
    pub school_address: String,
    pub admin_name: String,
    pub admin_email: String,
    pub admin_password: String,
    pub admin_password_confirmation: String,
}

/// Body for `PUT /users/{id}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct UserUpdate {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct PasswordReset {
    pub new_password: String,
}

/// Generic `{ "message": ... }` acknowledgement.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ack {
    #[serde(default)]
    pub message: Option<String>,
}

/// Body for `PUT /settings/password`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PasswordChange {
    pub current_password: String,
    pub new_password: String,
    pub new_password_confirmation: String,
}

// =============================================================================
// DASHBOARDS & SETTINGS
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchoolStatCounts {
    pub total_registrations: u64,
    pub pending_verification: u64,
    pub verified: u64,
    pub today_registrations: u64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SchoolStats {
    #[serde(default)]
    pub stats: SchoolStatCounts,
    #[serde(default)]
    pub recent_registrations: Vec<Value>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlatformStats {
    pub total_schools: u64,
    pub pending_schools: u64,
    pub active_schools: u64,
    pub total_registrations: u64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SuperAdminDashboard {
    #[serde(default)]
    pub stats: PlatformStats,
    #[serde(default)]
    pub pending_schools: Vec<School>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StudentDashboard {
    #[serde(default)]
    pub registration: Option<Registration>,
    #[serde(default)]
    pub user: Option<User>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SchoolVerification {
    #[serde(default)]
    pub registration_link: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub school: Option<School>,
    #[serde(default)]
    pub is_maintenance: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaintenanceState {
    pub is_maintenance: bool,
    #[serde(default)]
    pub message: Option<String>,
}
