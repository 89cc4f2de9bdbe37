use clap::Parser;
use solid_principles::app::commands;
use solid_principles::config::{self, Command};
use solid_principles::core::ReminderOutcome;
use solid_principles::utils::{logger, validation::Validate};
use solid_principles::{AppConfig, CliConfig, Result};

fn main() {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting solid CLI: {}", cli.command.name());
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    if let Err(e) = run(&cli) {
        tracing::error!(
            "❌ {} failed: {} (Category: {:?})",
            cli.command.name(),
            e,
            e.category()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e);
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }
}

fn run(cli: &CliConfig) -> Result<()> {
    let app_config: AppConfig = config::load(cli.config.as_deref())?;
    app_config.validate()?;

    match &cli.command {
        Command::Report { .. } => {
            let request = cli.command.report_request().unwrap_or_default();
            println!("{}", commands::run_report(&app_config, &request)?);
        }
        Command::Area { shapes, json } => {
            let report = commands::run_area(&app_config, shapes)?;
            if *json {
                println!("{}", report.to_json()?);
            } else {
                println!("{}", report);
            }
        }
        Command::Lessons { source, json } => {
            println!("{}", commands::run_lessons(*source, *json)?);
        }
        Command::Workers { duty } => {
            let log = commands::run_workers(*duty, &commands::default_crew());
            for line in &log.lines {
                println!("{}", line);
            }
        }
        Command::Remind { email, driver } => {
            match commands::run_remind(&app_config, email, *driver)? {
                ReminderOutcome::Sent { email } => {
                    println!("✅ Password reminder sent to {}", email)
                }
                ReminderOutcome::NoMatchingUser { email } => {
                    println!("No account found for {}", email)
                }
            }
        }
    }

    Ok(())
}
