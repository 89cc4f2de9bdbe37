use crate::adapters::connection::ConnectionDriver;
use crate::adapters::lesson_repo::LessonSource;
use crate::adapters::output::OutputFormat;
use crate::adapters::shapes::ShapeSpec;
use crate::app::commands::{CrewDuty, ReportRequest};
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "solid")]
#[command(about = "SOLID design principles, one subcommand per principle")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Sales report for a date range (single responsibility)
    Report {
        #[arg(long)]
        start: Option<String>,
        #[arg(long)]
        end: Option<String>,
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
        /// Run as this authenticated user
        #[arg(long)]
        user: Option<String>,
    },
    /// Total area of the given shapes (open-closed)
    Area {
        /// e.g. rect:3x4 circle:2 triangle:6x4 square:5
        shapes: Vec<ShapeSpec>,
        #[arg(long)]
        json: bool,
    },
    /// List lessons from either repository (Liskov substitution)
    Lessons {
        #[arg(long, value_enum, default_value = "file")]
        source: LessonSource,
        #[arg(long)]
        json: bool,
    },
    /// Run a shift over a mixed crew (interface segregation)
    Workers {
        #[arg(long, value_enum, default_value = "manage")]
        duty: CrewDuty,
    },
    /// Send a password reminder (dependency inversion)
    Remind {
        #[arg(long)]
        email: String,
        #[arg(long, value_enum)]
        driver: Option<ConnectionDriver>,
    },
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Report { .. } => "report",
            Command::Area { .. } => "area",
            Command::Lessons { .. } => "lessons",
            Command::Workers { .. } => "workers",
            Command::Remind { .. } => "remind",
        }
    }

    pub fn report_request(&self) -> Option<ReportRequest> {
        match self {
            Command::Report {
                start,
                end,
                format,
                user,
            } => Some(ReportRequest {
                start: start.clone(),
                end: end.clone(),
                format: *format,
                user: user.clone(),
            }),
            _ => None,
        }
    }
}
