//! Terminal renderings of the registration and school sign-up forms.

use std::io::{self, BufRead, Write};

use yuksekolah::state::school_signup::{SchoolSignupForm, SignupStep};
use yuksekolah::state::wizard::{Gender, RegistrationForm, Step};

use crate::prompt::Prompter;

/// Prompt for the fields owned by `step`, keeping existing answers as defaults.
pub fn fill_registration_step<R: BufRead, W: Write>(
    prompt: &mut Prompter<R, W>,
    step: Step,
    programs: &[String],
    form: &mut RegistrationForm,
) -> io::Result<()> {
    prompt.say(&format!("\n== Langkah {}: {} ==", step.number(), step.label()))?;
    match step {
        Step::Personal => {
            form.full_name = prompt.ask_or("Nama lengkap", &form.full_name)?;
            form.email = prompt.ask_or("Email", &form.email)?;
            form.phone = prompt.ask_or("Nomor telepon", &form.phone)?;
            form.birth_place = prompt.ask_or("Tempat lahir", &form.birth_place)?;
            form.birth_date = prompt.ask_or("Tanggal lahir (YYYY-MM-DD)", &form.birth_date)?;
            let gender = prompt.ask_or("Jenis kelamin (male/female)", form.gender.as_str())?;
            form.gender = if gender.eq_ignore_ascii_case("female") { Gender::Female } else { Gender::Male };
        }
        Step::Education => {
            form.program = if programs.is_empty() {
                prompt.ask_or("Program/jurusan", &form.program)?
            } else {
                prompt.choose("Program/jurusan", programs, &form.program)?
            };
            form.previous_school = prompt.ask_or("Sekolah asal", &form.previous_school)?;
            form.previous_school_year = prompt.ask_or("Tahun lulus", &form.previous_school_year)?;
        }
        Step::Address => {
            form.address = prompt.ask_or("Alamat", &form.address)?;
            form.city = prompt.ask_or("Kota", &form.city)?;
            form.province = prompt.ask_or("Provinsi", &form.province)?;
            form.postal_code = prompt.ask_or("Kode pos (opsional)", &form.postal_code)?;
        }
        Step::Guardians => {
            form.father_name = prompt.ask_or("Nama ayah", &form.father_name)?;
            form.father_phone = prompt.ask_or("Telepon ayah", &form.father_phone)?;
            form.father_job = prompt.ask_or("Pekerjaan ayah (opsional)", &form.father_job)?;
            form.mother_name = prompt.ask_or("Nama ibu", &form.mother_name)?;
            form.mother_phone = prompt.ask_or("Telepon ibu", &form.mother_phone)?;
            form.mother_job = prompt.ask_or("Pekerjaan ibu (opsional)", &form.mother_job)?;
        }
        Step::Confirmation => {
            prompt.say(&format!("Nama      : {}", form.full_name))?;
            prompt.say(&format!("Email     : {}", form.email))?;
            prompt.say(&format!("Program   : {}", form.program))?;
            prompt.say(&format!("Asal      : {} ({})", form.previous_school, form.previous_school_year))?;
            prompt.say(&format!("Alamat    : {}, {}, {}", form.address, form.city, form.province))?;
            form.terms_accepted = prompt.confirm("Saya menyetujui syarat dan ketentuan")?;
        }
        Step::Complete => {}
    }
    Ok(())
}

pub fn fill_signup_step<R: BufRead, W: Write>(
    prompt: &mut Prompter<R, W>,
    step: SignupStep,
    form: &mut SchoolSignupForm,
) -> io::Result<()> {
    match step {
        SignupStep::School => {
            prompt.say("\n== Data Sekolah ==")?;
            form.school_name = prompt.ask_or("Nama sekolah", &form.school_name)?;
            form.school_email = prompt.ask_or("Email sekolah", &form.school_email)?;
            form.school_phone = prompt.ask_or("Nomor telepon", &form.school_phone)?;
            form.school_address = prompt.ask_or("Alamat sekolah", &form.school_address)?;
        }
        SignupStep::Admin => {
            prompt.say("\n== Akun Admin ==")?;
            form.admin_name = prompt.ask_or("Nama admin", &form.admin_name)?;
            form.admin_email = prompt.ask_or("Email admin", &form.admin_email)?;
            form.admin_password = prompt.ask("Password")?;
            form.confirm_password = prompt.ask("Konfirmasi password")?;
            form.terms_accepted = prompt.confirm("Saya menyetujui syarat dan ketentuan")?;
        }
        SignupStep::Complete => {}
    }
    Ok(())
}
