mod forms;
mod prompt;

use std::io;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use serde_json::{Value, json};
use tracing_subscriber::EnvFilter;
use yuksekolah::config::{ClientConfig, ConfigError};
use yuksekolah::net::api::{ApiClient, RegistrationQuery};
use yuksekolah::net::error::ApiError;
use yuksekolah::net::types::{Period, Registration, RegistrationStatus, Role, SchoolStatus, UserUpdate};
use yuksekolah::pages::Notice;
use yuksekolah::pages::dashboard::{SchoolDashboardPage, StudentDashboardPage};
use yuksekolah::pages::login::LoginPage;
use yuksekolah::pages::periods::{PeriodForm, PeriodsPage};
use yuksekolah::pages::register::RegisterPage;
use yuksekolah::pages::schools::{SchoolFilter, SchoolsPage, SuperAdminDashboardPage};
use yuksekolah::pages::settings::{PasswordForm, SettingsPage};
use yuksekolah::pages::students::{RegistrationFilter, RegistrationsPage, StatusAction, VerifiedStudentsPage};
use yuksekolah::pages::users::{UserFilter, UsersPage};
use yuksekolah::state::resource::Resource;
use yuksekolah::state::school_signup::{SchoolSignup, SignupStep, validate_admin};
use yuksekolah::state::session::{Session, SessionError};
use yuksekolah::state::wizard::Step;
use yuksekolah::util::storage::{FileStorage, StorageError};

use crate::prompt::Prompter;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("api request failed: {0}")]
    Api(#[from] ApiError),
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error("session storage failed: {0}")]
    Storage(#[from] StorageError),
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("{0}")]
    Rejected(String),
    #[error("{kind} {id} not found")]
    NotFound { kind: &'static str, id: i64 },
}

#[derive(Parser, Debug)]
#[command(name = "yuksekolah-cli", about = "YukSekolah PPDB API client")]
struct Cli {
    #[arg(long, env = "YUKSEKOLAH_API_URL")]
    api_url: Option<String>,

    #[arg(long, env = "YUKSEKOLAH_SESSION_FILE", help = "Where the login session is kept")]
    session_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

struct CliContext {
    config: ClientConfig,
    api: ApiClient,
    session: Session<FileStorage>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check that the API answers.
    Ping,
    Login {
        #[arg(long)]
        email: String,
        #[arg(long, env = "YUKSEKOLAH_PASSWORD", hide_env_values = true)]
        password: String,
    },
    Logout,
    Whoami {
        #[arg(long, help = "Re-fetch the user from the server")]
        refresh: bool,
    },
    /// Fill in a student registration for a period link token.
    Register {
        link_token: String,
    },
    /// Register a new school and its admin account.
    SignupSchool,
    /// Show the dashboard for the signed-in role.
    Dashboard,
    Period(PeriodCommand),
    Registration(RegistrationCommand),
    Student(StudentCommand),
    School(SchoolCommand),
    User(UserCommand),
    Settings(SettingsCommand),
}

#[derive(Args, Debug)]
struct PeriodCommand {
    #[command(subcommand)]
    command: PeriodSubcommand,
}

#[derive(Args, Debug)]
struct PeriodArgs {
    #[arg(long)]
    name: String,
    #[arg(long)]
    academic_year: String,
    #[arg(long, default_value = "", help = "Empty for unlimited")]
    quota: String,
    #[arg(long = "program")]
    programs: Vec<String>,
    #[arg(long, help = "Create the period closed")]
    closed: bool,
}

impl PeriodArgs {
    fn to_form(&self) -> PeriodForm {
        PeriodForm {
            name: self.name.clone(),
            academic_year: self.academic_year.clone(),
            quota: self.quota.clone(),
            programs: self.programs.clone(),
            is_open: !self.closed,
        }
    }
}

#[derive(Subcommand, Debug)]
enum PeriodSubcommand {
    List,
    Create(PeriodArgs),
    Update {
        period_id: i64,
        #[command(flatten)]
        args: PeriodArgs,
    },
    Toggle {
        period_id: i64,
    },
    End {
        period_id: i64,
    },
    Delete {
        period_id: i64,
    },
    RegenerateLink {
        period_id: i64,
    },
}

#[derive(Args, Debug)]
struct RegistrationCommand {
    #[command(subcommand)]
    command: RegistrationSubcommand,
}

#[derive(Subcommand, Debug)]
enum RegistrationSubcommand {
    List {
        #[arg(long)]
        period_id: Option<i64>,
        #[arg(long, value_parser = parse_registration_status)]
        status: Option<RegistrationStatus>,
        #[arg(long, default_value = "")]
        search: String,
    },
    Verify {
        registration_id: i64,
        #[arg(long, default_value = "")]
        notes: String,
    },
    Reject {
        registration_id: i64,
        #[arg(long, default_value = "")]
        notes: String,
    },
    ResetPassword {
        registration_id: i64,
    },
    /// Periods to filter by, open ones first.
    Periods,
}

#[derive(Args, Debug)]
struct StudentCommand {
    #[command(subcommand)]
    command: StudentSubcommand,
}

#[derive(Subcommand, Debug)]
enum StudentSubcommand {
    List {
        #[arg(long)]
        period_id: Option<i64>,
        #[arg(long, default_value = "")]
        search: String,
    },
    /// Periods to filter by, open ones first.
    Periods,
    UpdateEmail {
        registration_id: i64,
        email: String,
    },
    Delete {
        registration_id: i64,
    },
    ResetPassword {
        registration_id: i64,
    },
}

#[derive(Args, Debug)]
struct SchoolCommand {
    #[command(subcommand)]
    command: SchoolSubcommand,
}

#[derive(Subcommand, Debug)]
enum SchoolSubcommand {
    List {
        #[arg(long, value_parser = parse_school_status)]
        status: Option<SchoolStatus>,
        #[arg(long, default_value = "")]
        search: String,
    },
    Verify {
        school_id: i64,
    },
    Reject {
        school_id: i64,
    },
}

#[derive(Args, Debug)]
struct UserCommand {
    #[command(subcommand)]
    command: UserSubcommand,
}

#[derive(Subcommand, Debug)]
enum UserSubcommand {
    List {
        #[arg(long)]
        school_id: Option<i64>,
        #[arg(long, value_parser = parse_role)]
        role: Option<Role>,
        #[arg(long, default_value = "")]
        search: String,
    },
    Update {
        user_id: i64,
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long, value_parser = parse_role)]
        role: Option<Role>,
    },
    Delete {
        user_id: i64,
    },
    Block {
        user_id: i64,
    },
    ResetPassword {
        user_id: i64,
    },
}

#[derive(Args, Debug)]
struct SettingsCommand {
    #[command(subcommand)]
    command: SettingsSubcommand,
}

#[derive(Subcommand, Debug)]
enum SettingsSubcommand {
    Show,
    Password {
        #[arg(long)]
        current: String,
        #[arg(long)]
        new: String,
        #[arg(long)]
        confirm: String,
    },
    Maintenance,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    let mut config = ClientConfig::from_env()?;
    if let Some(url) = cli.api_url.as_deref() {
        config = config.with_api_url(url)?;
    }
    if let Some(path) = cli.session_file {
        config.session_path = path;
    }
    let api = ApiClient::from_config(&config)?;
    let session = Session::restore(FileStorage::open(&config.session_path));
    let mut ctx = CliContext { config, api, session };

    match cli.command {
        Command::Ping => run_ping(&ctx).await,
        Command::Login { email, password } => run_login(&mut ctx, email, password).await,
        Command::Logout => run_logout(&mut ctx),
        Command::Whoami { refresh } => run_whoami(&mut ctx, refresh).await,
        Command::Register { link_token } => run_register(&ctx, &link_token).await,
        Command::SignupSchool => run_signup_school(&ctx).await,
        Command::Dashboard => run_dashboard(&ctx).await,
        Command::Period(period) => run_period(&ctx, period).await,
        Command::Registration(registration) => run_registration(&ctx, registration).await,
        Command::Student(student) => run_student(&ctx, student).await,
        Command::School(school) => run_school(&ctx, school).await,
        Command::User(user) => run_user(&ctx, user).await,
        Command::Settings(settings) => run_settings(&ctx, settings).await,
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();
}

// =============================================================================
// SESSION
// =============================================================================

async fn run_ping(ctx: &CliContext) -> Result<(), CliError> {
    let body = ctx.api.test_connection().await?;
    print_json(&body)
}

async fn run_login(ctx: &mut CliContext, email: String, password: String) -> Result<(), CliError> {
    let mut page = LoginPage::new();
    page.email = email;
    page.password = password;
    let Some(route) = page.submit(&mut ctx.session, &ctx.api).await else {
        return Err(rejected(page.error()));
    };
    print_json(&json!({ "user": ctx.session.user(), "route": route.path() }))
}

fn run_logout(ctx: &mut CliContext) -> Result<(), CliError> {
    let route = ctx.session.logout()?;
    println!("logged out, go to {}", route.path());
    Ok(())
}

async fn run_whoami(ctx: &mut CliContext, refresh: bool) -> Result<(), CliError> {
    if refresh {
        ctx.session.refresh_user(&ctx.api).await?;
    }
    let user = ctx.session.user().ok_or(ApiError::Unauthenticated)?;
    print_serialized(user)
}

// =============================================================================
// WIZARDS
// =============================================================================

async fn run_register(ctx: &CliContext, link_token: &str) -> Result<(), CliError> {
    let mut page = RegisterPage::new(link_token);
    page.load(&ctx.api, ctx.session.user()).await;
    if let Some(message) = page.period().error() {
        return Err(CliError::Rejected(message.to_owned()));
    }
    if let Some(gate) = page.gate() {
        return Err(CliError::Rejected(gate.to_owned()));
    }
    let period = ready(page.period())?.clone();

    let stdin = io::stdin();
    let mut prompt = Prompter::new(stdin.lock(), io::stdout());
    prompt.say(&format!("{} | {} ({})", period.school.name, period.name, period.academic_year))?;

    while page.wizard().step() != Step::Confirmation {
        let step = page.wizard().step();
        forms::fill_registration_step(&mut prompt, step, &period.programs, &mut page.wizard_mut().form)?;
        if !page.wizard_mut().next() {
            prompt.say(&format!("! {}", page.wizard().error().unwrap_or_default()))?;
        }
    }
    forms::fill_registration_step(&mut prompt, Step::Confirmation, &period.programs, &mut page.wizard_mut().form)?;
    if !page.wizard().form.terms_accepted {
        return Err(CliError::Rejected("Pendaftaran dibatalkan".to_owned()));
    }

    if !page.submit(&ctx.api).await {
        let wizard = page.wizard();
        let message = wizard.error().unwrap_or_default();
        if wizard.login_required() {
            return Err(CliError::Rejected(format!("{message} (login dulu dengan `yuksekolah-cli login`)")));
        }
        return Err(CliError::Rejected(message.to_owned()));
    }

    let outcome = page.wizard().outcome();
    print_json(&json!({
        "message": outcome.and_then(|o| o.message.clone()),
        "student_account": outcome.and_then(|o| o.account.clone()),
        "logged_in": outcome.is_some_and(|o| o.auth_token.is_some()),
    }))
}

async fn run_signup_school(ctx: &CliContext) -> Result<(), CliError> {
    let stdin = io::stdin();
    let mut prompt = Prompter::new(stdin.lock(), io::stdout());
    let mut signup = SchoolSignup::new();

    while signup.step() == SignupStep::School {
        forms::fill_signup_step(&mut prompt, SignupStep::School, &mut signup.form)?;
        if !signup.next() {
            prompt.say(&format!("! {}", signup.error().unwrap_or_default()))?;
        }
    }
    loop {
        forms::fill_signup_step(&mut prompt, SignupStep::Admin, &mut signup.form)?;
        match validate_admin(&signup.form) {
            Ok(()) => break,
            Err(message) => prompt.say(&format!("! {message}"))?,
        }
    }

    if !signup.submit(&ctx.api).await {
        return Err(rejected(signup.error()));
    }
    prompt.say("Pendaftaran sekolah berhasil. Menunggu verifikasi super admin.")?;
    print_json(signup.result().unwrap_or(&Value::Null))
}

// =============================================================================
// DASHBOARDS
// =============================================================================

async fn run_dashboard(ctx: &CliContext) -> Result<(), CliError> {
    let role = ctx.session.user().map(|user| user.role).ok_or(ApiError::Unauthenticated)?;
    let token = ctx.session.bearer()?;

    match role {
        Role::SchoolAdmin => {
            let mut page = SchoolDashboardPage::new(ctx.api.clone(), ctx.config.app_url.clone());
            let cancel = page.cancel_handle();
            let watcher = tokio::spawn(async move {
                if tokio::signal::ctrl_c().await.is_ok() {
                    cancel.cancel();
                }
            });
            let loaded = page.load(token).await;
            watcher.abort();
            if !loaded {
                return Err(CliError::Rejected("dibatalkan".to_owned()));
            }
            print_json(&json!({
                "active_period": to_json(ready(page.active_period())?)?,
                "stats": to_json(ready(page.stats())?)?,
                "registration_link": page.share_link(),
            }))
        }
        Role::Student => {
            let mut page = StudentDashboardPage::new(ctx.api.clone());
            page.load(token).await;
            print_serialized(ready(page.dashboard())?)
        }
        Role::SuperAdmin => {
            let mut page = SuperAdminDashboardPage::new(ctx.api.clone());
            page.refresh(token).await;
            print_serialized(ready(page.dashboard())?)
        }
        Role::Other => Err(CliError::Rejected("no dashboard for this role".to_owned())),
    }
}

// =============================================================================
// PERIODS
// =============================================================================

async fn run_period(ctx: &CliContext, period: PeriodCommand) -> Result<(), CliError> {
    let token = ctx.session.bearer()?;
    let mut page = PeriodsPage::new(ctx.api.clone());

    match period.command {
        PeriodSubcommand::List => {
            page.refresh(token).await;
            print_serialized(ready(page.periods())?)
        }
        PeriodSubcommand::Create(args) => {
            let ok = page.create(token, &args.to_form()).await;
            finish(ok, page.notice())
        }
        PeriodSubcommand::Update { period_id, args } => {
            let ok = page.update(token, period_id, &args.to_form()).await;
            finish(ok, page.notice())
        }
        PeriodSubcommand::Toggle { period_id } => {
            let target = find_period(&mut page, token, period_id).await?;
            let ok = page.toggle(token, &target).await;
            finish(ok, page.notice())
        }
        PeriodSubcommand::End { period_id } => {
            let target = find_period(&mut page, token, period_id).await?;
            let ok = page.end(token, &target).await;
            finish(ok, page.notice())
        }
        PeriodSubcommand::Delete { period_id } => {
            let ok = page.delete(token, period_id).await;
            finish(ok, page.notice())
        }
        PeriodSubcommand::RegenerateLink { period_id } => {
            let ok = page.regenerate_link(token, period_id).await;
            finish(ok, page.notice())
        }
    }
}

async fn find_period(page: &mut PeriodsPage, token: &str, period_id: i64) -> Result<Period, CliError> {
    page.refresh(token).await;
    ready(page.periods())?
        .iter()
        .find(|p| p.id == period_id)
        .cloned()
        .ok_or(CliError::NotFound { kind: "period", id: period_id })
}

// =============================================================================
// REGISTRATIONS & STUDENTS
// =============================================================================

async fn run_registration(ctx: &CliContext, registration: RegistrationCommand) -> Result<(), CliError> {
    let token = ctx.session.bearer()?;

    match registration.command {
        RegistrationSubcommand::List { period_id, status, search } => {
            let mut page = RegistrationsPage::new(ctx.api.clone(), RegistrationQuery { period_id, status });
            page.refresh(token).await;
            ready(page.registrations())?;
            page.filter = RegistrationFilter { status: None, search };
            print_serialized(&page.visible())
        }
        RegistrationSubcommand::Verify { registration_id, notes } => {
            decide(ctx, token, registration_id, StatusAction::Verify, &notes).await
        }
        RegistrationSubcommand::Reject { registration_id, notes } => {
            decide(ctx, token, registration_id, StatusAction::Reject, &notes).await
        }
        RegistrationSubcommand::ResetPassword { registration_id } => {
            let mut page = RegistrationsPage::new(ctx.api.clone(), RegistrationQuery::default());
            let password = page.reset_password(token, registration_id).await;
            print_password(password, page.notice())
        }
        RegistrationSubcommand::Periods => {
            let mut page = RegistrationsPage::new(ctx.api.clone(), RegistrationQuery::default());
            page.load_period_options(token).await;
            print_serialized(ready(page.period_options())?)
        }
    }
}

async fn decide(
    ctx: &CliContext,
    token: &str,
    registration_id: i64,
    action: StatusAction,
    notes: &str,
) -> Result<(), CliError> {
    let mut page = RegistrationsPage::new(ctx.api.clone(), RegistrationQuery::default());
    page.refresh(token).await;
    let target = find_registration(ready(page.registrations())?, registration_id)?;
    let ok = page.decide(token, &target, action, notes).await;
    finish(ok, page.notice())
}

fn find_registration(registrations: &[Registration], registration_id: i64) -> Result<Registration, CliError> {
    registrations
        .iter()
        .find(|r| r.id == registration_id)
        .cloned()
        .ok_or(CliError::NotFound { kind: "registration", id: registration_id })
}

async fn run_student(ctx: &CliContext, student: StudentCommand) -> Result<(), CliError> {
    let token = ctx.session.bearer()?;
    let mut page = VerifiedStudentsPage::new(ctx.api.clone());

    match student.command {
        StudentSubcommand::List { period_id, search } => {
            page.period_id = period_id;
            page.refresh(token).await;
            ready(page.students())?;
            page.search = search;
            print_serialized(&page.visible())
        }
        StudentSubcommand::UpdateEmail { registration_id, email } => {
            page.refresh(token).await;
            let target = find_registration(ready(page.students())?, registration_id)?;
            let ok = page.update_email(token, &target, &email).await;
            finish(ok, page.notice())
        }
        StudentSubcommand::Delete { registration_id } => {
            page.refresh(token).await;
            let target = find_registration(ready(page.students())?, registration_id)?;
            let ok = page.delete_account(token, &target).await;
            finish(ok, page.notice())
        }
        StudentSubcommand::ResetPassword { registration_id } => {
            let password = page.reset_password(token, registration_id).await;
            print_password(password, page.notice())
        }
        StudentSubcommand::Periods => {
            page.load_period_options(token).await;
            print_serialized(ready(page.period_options())?)
        }
    }
}

// =============================================================================
// SCHOOLS, USERS, SETTINGS
// =============================================================================

async fn run_school(ctx: &CliContext, school: SchoolCommand) -> Result<(), CliError> {
    let token = ctx.session.bearer()?;

    match school.command {
        SchoolSubcommand::List { status, search } => {
            let mut page = SchoolsPage::new(ctx.api.clone());
            page.refresh(token).await;
            ready(page.schools())?;
            page.filter = SchoolFilter { status, search };
            print_serialized(&page.visible())
        }
        SchoolSubcommand::Verify { school_id } => {
            let mut page = SuperAdminDashboardPage::new(ctx.api.clone());
            let Some(link) = page.verify(token, school_id).await else {
                return Err(rejected(page.notice().map(|n| n.text.as_str())));
            };
            print_json(&json!({ "registration_link": link }))
        }
        SchoolSubcommand::Reject { school_id } => {
            let mut page = SuperAdminDashboardPage::new(ctx.api.clone());
            let ok = page.reject(token, school_id).await;
            finish(ok, page.notice())
        }
    }
}

async fn run_user(ctx: &CliContext, user: UserCommand) -> Result<(), CliError> {
    let token = ctx.session.bearer()?;

    match user.command {
        UserSubcommand::List { school_id, role, search } => {
            let mut page = UsersPage::new(ctx.api.clone(), school_id);
            page.refresh(token).await;
            ready(page.users())?;
            page.filter = UserFilter { role, search };
            print_serialized(&page.visible())
        }
        UserSubcommand::Update { user_id, name, email, role } => {
            let mut page = UsersPage::new(ctx.api.clone(), None);
            let ok = page.update(token, user_id, &UserUpdate { name, email, role }).await;
            finish(ok, page.notice())
        }
        UserSubcommand::Delete { user_id } => {
            let mut page = UsersPage::new(ctx.api.clone(), None);
            let ok = page.delete(token, user_id).await;
            finish(ok, page.notice())
        }
        UserSubcommand::Block { user_id } => {
            let mut page = UsersPage::new(ctx.api.clone(), None);
            let ok = page.toggle_block(token, user_id).await;
            finish(ok, page.notice())
        }
        UserSubcommand::ResetPassword { user_id } => {
            let mut page = UsersPage::new(ctx.api.clone(), None);
            let password = page.reset_password(token, user_id).await;
            print_password(password, page.notice())
        }
    }
}

async fn run_settings(ctx: &CliContext, settings: SettingsCommand) -> Result<(), CliError> {
    let token = ctx.session.bearer()?;
    let mut page = SettingsPage::new(ctx.api.clone());

    match settings.command {
        SettingsSubcommand::Show => {
            page.refresh(token).await;
            print_serialized(ready(page.settings())?)
        }
        SettingsSubcommand::Password { current, new, confirm } => {
            let form = PasswordForm { current_password: current, new_password: new, confirm_password: confirm };
            let ok = page.change_password(token, &form).await;
            finish(ok, page.notice())
        }
        SettingsSubcommand::Maintenance => {
            let Some(is_maintenance) = page.toggle_maintenance(token).await else {
                return Err(rejected(page.notice().map(|n| n.text.as_str())));
            };
            print_json(&json!({ "is_maintenance": is_maintenance }))
        }
    }
}

// =============================================================================
// HELPERS
// =============================================================================

fn parse_registration_status(raw: &str) -> Result<RegistrationStatus, String> {
    RegistrationStatus::parse(raw).ok_or_else(|| format!("expected draft, submitted, verified or rejected, got `{raw}`"))
}

fn parse_role(raw: &str) -> Result<Role, String> {
    Role::parse(raw).ok_or_else(|| format!("expected super_admin, school_admin or student, got `{raw}`"))
}

fn parse_school_status(raw: &str) -> Result<SchoolStatus, String> {
    match raw {
        "pending" => Ok(SchoolStatus::Pending),
        "active" => Ok(SchoolStatus::Active),
        "inactive" => Ok(SchoolStatus::Inactive),
        _ => Err(format!("expected pending, active or inactive, got `{raw}`")),
    }
}

fn ready<T>(resource: &Resource<T>) -> Result<&T, CliError> {
    match resource {
        Resource::Ready(value) => Ok(value),
        Resource::Error(message) => Err(CliError::Rejected(message.clone())),
        Resource::Loading => Err(CliError::Rejected("not loaded".to_owned())),
    }
}

fn rejected(message: Option<&str>) -> CliError {
    CliError::Rejected(message.unwrap_or("request failed").to_owned())
}

fn finish(ok: bool, notice: Option<&Notice>) -> Result<(), CliError> {
    let text = notice.map(|n| n.text.as_str());
    if !ok {
        return Err(rejected(text));
    }
    println!("{}", text.unwrap_or("ok"));
    Ok(())
}

fn print_password(password: Option<String>, notice: Option<&Notice>) -> Result<(), CliError> {
    let Some(password) = password else {
        return Err(rejected(notice.map(|n| n.text.as_str())));
    };
    print_json(&json!({ "new_password": password }))
}

fn to_json<T: Serialize>(value: &T) -> Result<Value, CliError> {
    Ok(serde_json::to_value(value)?)
}

fn print_serialized<T: Serialize>(value: &T) -> Result<(), CliError> {
    print_json(&to_json(value)?)
}

fn print_json(value: &Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
