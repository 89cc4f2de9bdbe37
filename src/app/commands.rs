use crate::adapters::connection::ConnectionDriver;
use crate::adapters::lesson_repo::LessonSource;
use crate::adapters::mailer::LogMailer;
use crate::adapters::output::OutputFormat;
use crate::adapters::sales_repo::InMemorySalesRepository;
use crate::adapters::shapes::ShapeSpec;
use crate::adapters::workers::{AndroidWorker, HumanWorker};
use crate::config::toml_config::AppConfig;
use crate::core::access::policy_for;
use crate::core::area::AreaCalculator;
use crate::core::captain::Captain;
use crate::core::lessons::{display_lessons, total_duration};
use crate::core::reminder::PasswordReminder;
use crate::core::reporter::SalesReporter;
use crate::core::{LessonRepository, ReminderOutcome, Session, Shape, ShiftLog, Worker};
use crate::utils::error::{Result, SolidError};
use crate::utils::validation::{parse_datetime, validate_required_field};
use serde::Serialize;
use std::fmt;

/// Command-line values for `report`; unset fields fall back to the config file.
#[derive(Debug, Clone, Default)]
pub struct ReportRequest {
    pub start: Option<String>,
    pub end: Option<String>,
    pub format: Option<OutputFormat>,
    pub user: Option<String>,
}

pub fn run_report(config: &AppConfig, request: &ReportRequest) -> Result<String> {
    let session = match &request.user {
        Some(user) => Session::authenticated(user.clone()),
        None => Session::anonymous(),
    };
    policy_for(config.require_auth()).authorize(&session)?;

    let start = request.start.clone().or_else(|| config.reporting.start.clone());
    let end = request.end.clone().or_else(|| config.reporting.end.clone());
    let start = parse_datetime("start", validate_required_field("reporting.start", &start)?, false)?;
    let end = parse_datetime("end", validate_required_field("reporting.end", &end)?, true)?;

    let format = request.format.unwrap_or_else(|| config.output_format());
    tracing::debug!("Rendering sales report as {}", format);

    let reporter = SalesReporter::new(InMemorySalesRepository::default(), format.into_output());
    reporter.report_between(start, end)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AreaReport {
    pub rows: Vec<(String, f64)>,
    pub total: f64,
}

impl AreaReport {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for AreaReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, area) in &self.rows {
            writeln!(f, "{:<10} {:>12.3}", name, area)?;
        }
        write!(f, "{:<10} {:>12.3}", "total", self.total)
    }
}

/// Shapes from the command line win; otherwise the `[[shapes]]` table is used.
pub fn run_area(config: &AppConfig, specs: &[ShapeSpec]) -> Result<AreaReport> {
    let specs = if specs.is_empty() { &config.shapes[..] } else { specs };
    if specs.is_empty() {
        return Err(SolidError::validation(
            "no shapes given; pass e.g. circle:2 or add [[shapes]] to the config",
        ));
    }

    let shapes = specs
        .iter()
        .map(|spec| spec.into_shape())
        .collect::<Result<Vec<Box<dyn Shape>>>>()?;

    let calculator = AreaCalculator::new();
    let rows = calculator
        .breakdown(&shapes)
        .into_iter()
        .map(|(name, area)| (name.to_string(), area))
        .collect();

    Ok(AreaReport {
        rows,
        total: calculator.calculate(&shapes),
    })
}

pub fn run_lessons(source: LessonSource, as_json: bool) -> Result<String> {
    let repo = source.into_repository();
    if as_json {
        return Ok(serde_json::to_string_pretty(&repo.get_all())?);
    }
    Ok(format!(
        "{}\nTotal: {} min",
        display_lessons(repo.as_ref()),
        total_duration(repo.as_ref())
    ))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum CrewDuty {
    #[default]
    Manage,
    Work,
    Rest,
}

pub fn default_crew() -> Vec<Box<dyn Worker>> {
    vec![
        Box::new(HumanWorker::new("Ada")),
        Box::new(AndroidWorker::new("R2")),
    ]
}

pub fn run_workers(duty: CrewDuty, crew: &[Box<dyn Worker>]) -> ShiftLog {
    let mut captain = Captain::new();
    match duty {
        CrewDuty::Manage => captain.manage_team(crew),
        CrewDuty::Work => captain.coordinate_work(crew),
        CrewDuty::Rest => captain.rest_team(crew),
    }
    captain.into_log()
}

pub fn run_remind(
    config: &AppConfig,
    email: &str,
    driver: Option<ConnectionDriver>,
) -> Result<ReminderOutcome> {
    let driver = driver.unwrap_or_else(|| config.driver());
    tracing::debug!("Using {} driver for password reminder", driver);

    let connection = driver.into_connection(config.connection_settings());
    let mut reminder = PasswordReminder::new(connection, LogMailer);
    reminder.send_reminder(email)
}
