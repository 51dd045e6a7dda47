//! Student registration wizard: five validated steps plus a terminal step.
//!
//! DESIGN
//! ======
//! Each step owns a pure validator over the form. `next` advances only when
//! the active step validates; `back` always succeeds and clears the error.
//! `submit` is only accepted on [`Step::Confirmation`]; it validates every
//! step locally, then performs a single request. Once the wizard reaches
//! [`Step::Complete`] it never submits again.
//!
//! ERROR HANDLING
//! ==============
//! Validation, status, and network failures all end up as one inline
//! message in `error`. An HTTP 409 additionally raises `login_required` so
//! the page can offer a login prompt.

#[cfg(test)]
#[path = "wizard_test.rs"]
mod wizard_test;

use serde::{Deserialize, Serialize};

use crate::net::api::ApiClient;
use crate::net::types::{PeriodLinkInfo, RegistrationFormData, Role, StudentAccount, SubmitRegistration, User};

pub const SUBMIT_FAILED_MESSAGE: &str = "Pendaftaran gagal. Silakan coba lagi.";
pub const DEFAULT_PREVIOUS_SCHOOL_YEAR: &str = "2024";

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Step {
    Personal,
    Education,
    Address,
    Guardians,
    Confirmation,
    /// Terminal: registration accepted, credentials shown.
    Complete,
}

impl Step {
    /// Steps that carry form fields, in order.
    pub const FORM_STEPS: [Self; 5] = [Self::Personal, Self::Education, Self::Address, Self::Guardians, Self::Confirmation];

    /// 1-based position as shown in the progress bar.
    #[must_use]
    pub fn number(self) -> u8 {
        match self {
            Self::Personal => 1,
            Self::Education => 2,
            Self::Address => 3,
            Self::Guardians => 4,
            Self::Confirmation => 5,
            Self::Complete => 6,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Personal => "Data Diri",
            Self::Education => "Pendidikan",
            Self::Address => "Alamat",
            Self::Guardians => "Wali",
            Self::Confirmation => "Konfirmasi",
            Self::Complete => "Selesai",
        }
    }

    /// Following form step; `next` never reaches `Complete`.
    fn following(self) -> Self {
        match self {
            Self::Personal => Self::Education,
            Self::Education => Self::Address,
            Self::Address => Self::Guardians,
            Self::Guardians | Self::Confirmation => Self::Confirmation,
            Self::Complete => Self::Complete,
        }
    }

    fn preceding(self) -> Self {
        match self {
            Self::Personal | Self::Education => Self::Personal,
            Self::Address => Self::Education,
            Self::Guardians => Self::Address,
            Self::Confirmation => Self::Guardians,
            Self::Complete => Self::Complete,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Male,
    Female,
}

impl Gender {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

/// Field values entered by the applicant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistrationForm {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub birth_place: String,
    /// ISO date (`YYYY-MM-DD`) as typed; only presence is checked.
    pub birth_date: String,
    pub gender: Gender,
    pub program: String,
    pub previous_school: String,
    pub previous_school_year: String,
    pub address: String,
    pub city: String,
    pub province: String,
    pub postal_code: String,
    pub father_name: String,
    pub father_phone: String,
    pub father_job: String,
    pub mother_name: String,
    pub mother_phone: String,
    pub mother_job: String,
    pub terms_accepted: bool,
}

impl Default for RegistrationForm {
    fn default() -> Self {
        Self {
            full_name: String::new(),
            email: String::new(),
            phone: String::new(),
            birth_place: String::new(),
            birth_date: String::new(),
            gender: Gender::Male,
            program: String::new(),
            previous_school: String::new(),
            previous_school_year: DEFAULT_PREVIOUS_SCHOOL_YEAR.to_owned(),
            address: String::new(),
            city: String::new(),
            province: String::new(),
            postal_code: String::new(),
            father_name: String::new(),
            father_phone: String::new(),
            father_job: String::new(),
            mother_name: String::new(),
            mother_phone: String::new(),
            mother_job: String::new(),
            terms_accepted: false,
        }
    }
}

impl RegistrationForm {
    /// Package the form as the `form_data` blob the server stores.
    #[must_use]
    pub fn to_form_data(&self) -> RegistrationFormData {
        RegistrationFormData {
            name: self.full_name.trim().to_owned(),
            email: self.email.trim().to_owned(),
            phone: self.phone.trim().to_owned(),
            program: self.program.clone(),
            birth_place: self.birth_place.trim().to_owned(),
            birth_date: self.birth_date.clone(),
            gender: self.gender.as_str().to_owned(),
            previous_school: self.previous_school.trim().to_owned(),
            previous_school_year: self.previous_school_year.clone(),
            address: self.address.trim().to_owned(),
            province: self.province.trim().to_owned(),
            city: self.city.trim().to_owned(),
            postal_code: self.postal_code.trim().to_owned(),
            father_name: self.father_name.trim().to_owned(),
            father_phone: self.father_phone.trim().to_owned(),
            father_job: self.father_job.trim().to_owned(),
            mother_name: self.mother_name.trim().to_owned(),
            mother_phone: self.mother_phone.trim().to_owned(),
            mother_job: self.mother_job.trim().to_owned(),
            notes: None,
        }
    }
}

fn blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Validate the fields owned by `step`; the first failing rule wins.
///
/// # Errors
///
/// Returns the user-facing message for the first missing or malformed field.
pub fn validate_step(step: Step, form: &RegistrationForm) -> Result<(), &'static str> {
    match step {
        Step::Personal => {
            if blank(&form.full_name) {
                return Err("Nama lengkap harus diisi");
            }
            if blank(&form.email) {
                return Err("Email harus diisi");
            }
            if !form.email.contains('@') {
                return Err("Format email tidak valid");
            }
            if blank(&form.phone) {
                return Err("Nomor telepon harus diisi");
            }
            if blank(&form.birth_place) {
                return Err("Tempat lahir harus diisi");
            }
            if form.birth_date.is_empty() {
                return Err("Tanggal lahir harus diisi");
            }
        }
        Step::Education => {
            if form.program.is_empty() {
                return Err("Pilih program/jurusan");
            }
            if blank(&form.previous_school) {
                return Err("Sekolah asal harus diisi");
            }
            if form.previous_school_year.is_empty() {
                return Err("Tahun lulus harus diisi");
            }
        }
        Step::Address => {
            if blank(&form.address) {
                return Err("Alamat harus diisi");
            }
            if blank(&form.city) {
                return Err("Kota harus diisi");
            }
            if blank(&form.province) {
                return Err("Provinsi harus diisi");
            }
        }
        Step::Guardians => {
            if blank(&form.father_name) {
                return Err("Nama ayah harus diisi");
            }
            if blank(&form.father_phone) {
                return Err("Nomor telepon ayah harus diisi");
            }
            if blank(&form.mother_name) {
                return Err("Nama ibu harus diisi");
            }
            if blank(&form.mother_phone) {
                return Err("Nomor telepon ibu harus diisi");
            }
        }
        Step::Confirmation => {
            if !form.terms_accepted {
                return Err("Anda harus menyetujui syarat dan ketentuan");
            }
        }
        Step::Complete => {}
    }
    Ok(())
}

/// Result of an accepted registration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegistrationOutcome {
    pub message: Option<String>,
    /// Server-issued login for the new student account.
    pub account: Option<StudentAccount>,
    /// Token from the automatic login attempt, when it succeeded.
    pub auth_token: Option<String>,
}

#[derive(Clone, Debug)]
pub struct RegistrationWizard {
    link_token: String,
    pub form: RegistrationForm,
    step: Step,
    error: Option<String>,
    login_required: bool,
    submitting: bool,
    outcome: Option<RegistrationOutcome>,
}

impl RegistrationWizard {
    /// Start a wizard bound to a period's registration-link token.
    #[must_use]
    pub fn new(link_token: impl Into<String>) -> Self {
        Self {
            link_token: link_token.into(),
            form: RegistrationForm::default(),
            step: Step::Personal,
            error: None,
            login_required: false,
            submitting: false,
            outcome: None,
        }
    }

    #[must_use]
    pub fn link_token(&self) -> &str {
        &self.link_token
    }

    #[must_use]
    pub fn step(&self) -> Step {
        self.step
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[must_use]
    pub fn login_required(&self) -> bool {
        self.login_required
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    #[must_use]
    pub fn outcome(&self) -> Option<&RegistrationOutcome> {
        self.outcome.as_ref()
    }

    pub(crate) fn outcome_mut(&mut self) -> Option<&mut RegistrationOutcome> {
        self.outcome.as_mut()
    }

    /// Show a refusal decided outside the wizard (e.g. a gated period).
    pub(crate) fn refuse(&mut self, message: &str) {
        self.error = Some(message.to_owned());
    }

    /// Fill name and email from a signed-in student account.
    pub fn prefill_from_user(&mut self, user: &User) {
        if user.role == Role::Student {
            self.form.full_name.clone_from(&user.name);
            self.form.email.clone_from(&user.email);
        }
    }

    /// Default the program to the period's first one when none is chosen.
    pub fn apply_period(&mut self, period: &PeriodLinkInfo) {
        if self.form.program.is_empty() {
            if let Some(first) = period.programs.first() {
                self.form.program.clone_from(first);
            }
        }
    }

    /// Advance one step if the active step validates.
    ///
    /// Returns whether the step changed.
    pub fn next(&mut self) -> bool {
        if self.step == Step::Complete {
            return false;
        }
        if let Err(message) = validate_step(self.step, &self.form) {
            self.error = Some(message.to_owned());
            return false;
        }
        self.error = None;
        let before = self.step;
        self.step = self.step.following();
        self.step != before
    }

    /// Go back one step; always clears the displayed error.
    pub fn back(&mut self) {
        self.error = None;
        self.step = self.step.preceding();
    }

    /// Validate all form steps locally; the first failure is surfaced.
    fn validate_all(&mut self) -> bool {
        for step in Step::FORM_STEPS {
            if let Err(message) = validate_step(step, &self.form) {
                self.error = Some(message.to_owned());
                return false;
            }
        }
        true
    }

    /// Submit the registration.
    ///
    /// Only accepted from [`Step::Confirmation`], and never while a
    /// submission is in flight. Local validation failures never reach the
    /// network. Returns whether the wizard moved to [`Step::Complete`]
    /// during this call.
    pub async fn submit(&mut self, api: &ApiClient) -> bool {
        if self.step != Step::Confirmation || self.submitting {
            return false;
        }
        if !self.validate_all() {
            return false;
        }

        self.submitting = true;
        self.error = None;
        self.login_required = false;

        let payload = SubmitRegistration { period_link: self.link_token.clone(), form_data: self.form.to_form_data() };
        let result = api.submit_registration(&payload).await;
        self.submitting = false;

        match result {
            Ok(response) => {
                tracing::info!(period_link = %self.link_token, "registration submitted");
                self.outcome = Some(RegistrationOutcome {
                    message: response.message,
                    account: response.student_account,
                    auth_token: None,
                });
                self.step = Step::Complete;
                true
            }
            Err(error) => {
                tracing::warn!(%error, "registration submit failed");
                self.login_required = error.is_conflict();
                self.error = Some(error.user_message(SUBMIT_FAILED_MESSAGE));
                false
            }
        }
    }
}
