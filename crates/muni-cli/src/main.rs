//! # muni CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.

use std::path::PathBuf;

use clap::Parser;

use muni_admin::{AdminConsole, ConsoleConfig};

/// Ward console CLI — MyArea municipality administration.
///
/// Seeds the Ward 5 fixture, signs the operator in with the demo
/// credentials, and drives the requested console operation.
#[derive(Parser, Debug)]
#[command(name = "muni", version, about)]
struct Cli {
    /// Console configuration YAML file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Operator email for the demo login.
    #[arg(long, global = true, default_value = "admin@municipality.gov.in")]
    email: String,

    /// Operator password for the demo login (any non-empty value).
    #[arg(long, global = true, default_value = "demo-password")]
    password: String,

    /// One-time code for the demo login.
    #[arg(long, global = true, default_value = muni_auth::DEMO_CODE)]
    code: String,

    /// Print JSON instead of human-readable lines.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Walk the two-factor login flow.
    Login(muni_cli::login::LoginArgs),
    /// Citizen verification queue.
    Citizen(muni_cli::citizen::CitizenArgs),
    /// SOS alert triage.
    Sos(muni_cli::sos::SosArgs),
    /// Notice management.
    Notice(muni_cli::notice::NoticeArgs),
    /// Help request tracking.
    Requests(muni_cli::requests::RequestsArgs),
    /// Volunteer events.
    Events(muni_cli::events::EventsArgs),
    /// Safety alerts.
    Safety(muni_cli::safety::SafetyArgs),
    /// Community polls.
    Poll(muni_cli::poll::PollArgs),
    /// Session audit log.
    Audit(muni_cli::audit::AuditArgs),
    /// Dashboard overview.
    Stats(muni_cli::stats::StatsArgs),
    /// Scripted walkthrough of the console.
    Demo(muni_cli::demo::DemoArgs),
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => ConsoleConfig::from_yaml_file(path)?,
        None => ConsoleConfig::default(),
    };
    let mut console = AdminConsole::seeded(&config)?;
    tracing::info!(ward = %config.ward, "ward console seeded");

    match cli.command {
        // The login subcommand walks the flow itself.
        Commands::Login(args) => {
            muni_cli::login::run(args, &mut console, &cli.email, &cli.password, &cli.code)
        }
        // Every other command needs a verified session first.
        command => {
            console.login(&cli.email, &cli.password)?;
            console.submit_code(&cli.code)?;
            match command {
                Commands::Login(_) => Ok(()),
                Commands::Citizen(args) => muni_cli::citizen::run(args, &mut console, cli.json),
                Commands::Sos(args) => muni_cli::sos::run(args, &mut console, cli.json),
                Commands::Notice(args) => muni_cli::notice::run(args, &mut console, cli.json),
                Commands::Requests(args) => muni_cli::requests::run(args, &mut console, cli.json),
                Commands::Events(args) => muni_cli::events::run(args, &mut console, cli.json),
                Commands::Safety(args) => muni_cli::safety::run(args, &mut console, cli.json),
                Commands::Poll(args) => muni_cli::poll::run(args, &mut console, cli.json),
                Commands::Audit(args) => muni_cli::audit::run(args, &mut console, cli.json),
                Commands::Stats(args) => muni_cli::stats::run(args, &mut console, cli.json),
                Commands::Demo(args) => muni_cli::demo::run(args, &mut console),
            }
        }
    }
}
