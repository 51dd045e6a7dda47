//! School self-registration: school details, then the admin account.
//!
//! Same contract as the student wizard, with two steps. The school lands
//! in `pending` status server-side until a super admin verifies it.

#[cfg(test)]
#[path = "school_signup_test.rs"]
mod school_signup_test;

use serde_json::Value;

use crate::net::api::ApiClient;
use crate::net::types::SchoolRegistration;

pub const MIN_PASSWORD_LEN: usize = 8;
const SIGNUP_FAILED_MESSAGE: &str = "Pendaftaran gagal. Silakan coba lagi.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SignupStep {
    School,
    Admin,
    Complete,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SchoolSignupForm {
    pub school_name: String,
    pub school_email: String,
    pub school_phone: String,
    pub school_address: String,
    pub admin_name: String,
    pub admin_email: String,
    pub admin_password: String,
    pub confirm_password: String,
    pub terms_accepted: bool,
}

/// # Errors
///
/// Returns the message for the first missing or malformed school field.
pub fn validate_school(form: &SchoolSignupForm) -> Result<(), &'static str> {
    if form.school_name.trim().is_empty() {
        return Err("Nama sekolah harus diisi");
    }
    if form.school_email.trim().is_empty() {
        return Err("Email sekolah harus diisi");
    }
    if !form.school_email.contains('@') {
        return Err("Format email tidak valid");
    }
    if form.school_phone.trim().is_empty() {
        return Err("Nomor telepon harus diisi");
    }
    if form.school_address.trim().is_empty() {
        return Err("Alamat sekolah harus diisi");
    }
    Ok(())
}

/// # Errors
///
/// Returns the message for the first failing admin-account rule.
pub fn validate_admin(form: &SchoolSignupForm) -> Result<(), &'static str> {
    if form.admin_name.trim().is_empty() {
        return Err("Nama admin harus diisi");
    }
    if form.admin_email.trim().is_empty() {
        return Err("Email admin harus diisi");
    }
    if !form.admin_email.contains('@') {
        return Err("Format email admin tidak valid");
    }
    if form.admin_password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Password minimal 8 karakter");
    }
    if form.admin_password != form.confirm_password {
        return Err("Password tidak cocok");
    }
    if !form.terms_accepted {
        return Err("Anda harus menyetujui syarat dan ketentuan");
    }
    Ok(())
}

#[derive(Clone, Debug)]
pub struct SchoolSignup {
    pub form: SchoolSignupForm,
    step: SignupStep,
    error: Option<String>,
    result: Option<Value>,
}

impl Default for SchoolSignup {
    fn default() -> Self {
        Self::new()
    }
}

impl SchoolSignup {
    #[must_use]
    pub fn new() -> Self {
        Self { form: SchoolSignupForm::default(), step: SignupStep::School, error: None, result: None }
    }

    #[must_use]
    pub fn step(&self) -> SignupStep {
        self.step
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Server `data` returned on success.
    #[must_use]
    pub fn result(&self) -> Option<&Value> {
        self.result.as_ref()
    }

    /// Move from the school step to the admin step.
    pub fn next(&mut self) -> bool {
        if self.step != SignupStep::School {
            return false;
        }
        match validate_school(&self.form) {
            Ok(()) => {
                self.error = None;
                self.step = SignupStep::Admin;
                true
            }
            Err(message) => {
                self.error = Some(message.to_owned());
                false
            }
        }
    }

    pub fn back(&mut self) {
        if self.step == SignupStep::Admin {
            self.step = SignupStep::School;
        }
        self.error = None;
    }

    /// Submit both steps; returns whether the signup completed now.
    pub async fn submit(&mut self, api: &ApiClient) -> bool {
        if self.step == SignupStep::Complete {
            return false;
        }
        let check = validate_school(&self.form).and_then(|()| validate_admin(&self.form));
        if let Err(message) = check {
            self.error = Some(message.to_owned());
            return false;
        }
        self.error = None;

        let form = &self.form;
        let payload = SchoolRegistration {
            school_name: form.school_name.trim().to_owned(),
            school_email: form.school_email.trim().to_owned(),
            school_phone: form.school_phone.trim().to_owned(),
            school_address: form.school_address.trim().to_owned(),
            admin_name: form.admin_name.trim().to_owned(),
            admin_email: form.admin_email.trim().to_owned(),
            admin_password: form.admin_password.clone(),
            admin_password_confirmation: form.confirm_password.clone(),
        };

        match api.register_school(&payload).await {
            Ok(data) => {
                tracing::info!(school = %payload.school_name, "school registered");
                self.result = Some(data);
                self.step = SignupStep::Complete;
                true
            }
            Err(error) => {
                tracing::warn!(%error, "school registration failed");
                self.error = Some(error.user_message(SIGNUP_FAILED_MESSAGE));
                false
            }
        }
    }
}
