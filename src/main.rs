//! ec2-audit - interactive EC2 instance and AMI usage auditor.

mod audit;
mod config;
mod ec2;
mod error;
mod logging;
mod output;

use std::path::Path;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use dialoguer::{theme::ColorfulTheme, Select};
use tracing::{error, info};

use config::{Args, Config, ReportKind};
use ec2::AuditClient;

const MENU_ITEMS: &[&str] = &["EC2 instances", "AMI usage", "Exit"];

#[tokio::main]
async fn main() {
    let args = Args::parse();
    let config = Config::from_args(args);

    let log_path = match logging::init(&config.log_dir, &config.log_level) {
        Ok(path) => path,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            std::process::exit(1);
        }
    };

    info!(
        version = config::VERSION,
        commit = config::COMMIT,
        build_date = config::BUILD_DATE,
        "ec2-audit starting"
    );

    if let Err(e) = run(&config, &log_path).await {
        error!(error = %e, "Audit run failed");
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

async fn run(config: &Config, log_path: &Path) -> Result<()> {
    let client = AuditClient::new(config.profile.as_deref(), config.region.as_deref()).await?;

    print_banner(config, &client, log_path).await;

    match config.report {
        Some(report) => run_report(&client, report).await,
        None => run_menu(&client).await,
    }
}

/// Print the session header with identity, region, and log destination.
async fn print_banner(config: &Config, client: &AuditClient, log_path: &Path) {
    let account = client
        .account_id()
        .await
        .unwrap_or_else(|| "unknown".to_string());

    println!(
        "{} {}",
        "ec2-audit".bright_cyan().bold(),
        format!("v{}", config::VERSION).bright_cyan()
    );
    println!(
        "{} {}  {} {}  {} {}",
        "Account:".bright_blue(),
        account.bright_yellow(),
        "Region:".bright_blue(),
        client.region().bright_yellow(),
        "Profile:".bright_blue(),
        config.profile_display().bright_yellow()
    );
    println!(
        "{} {}",
        "Log file:".bright_blue(),
        log_path.display().to_string().bright_black()
    );

    info!(
        account = %account,
        region = %client.region(),
        profile = %config.profile_display(),
        interactive = config.is_interactive(),
        "Audit session started"
    );
}

/// Interactive menu loop. A failed audit step is reported and the loop
/// continues; only the exit choice or prompt cancellation ends the session.
async fn run_menu(client: &AuditClient) -> Result<()> {
    loop {
        println!();
        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Select an audit")
            .items(MENU_ITEMS)
            .default(0)
            .interact_opt()?;

        match selection {
            Some(0) => run_step(client, ReportKind::Instances).await,
            Some(1) => run_step(client, ReportKind::Amis).await,
            _ => {
                println!("{}", "Goodbye!".bright_cyan());
                break;
            }
        }
    }

    Ok(())
}

async fn run_report(client: &AuditClient, report: ReportKind) -> Result<()> {
    match report {
        ReportKind::Instances => audit::instances::run(client).await,
        ReportKind::Amis => audit::images::run(client).await,
    }
}

async fn run_step(client: &AuditClient, report: ReportKind) {
    if let Err(e) = run_report(client, report).await {
        error!(error = %e, report = ?report, "Audit step failed");

        let message = match report {
            ReportKind::Instances => "Error: unable to retrieve EC2 instance information",
            ReportKind::Amis => "Error: unable to retrieve AMI usage information",
        };
        println!("{}", message.red());
    }
}
