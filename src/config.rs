//! CLI configuration and argument parsing.

use std::path::PathBuf;

use clap::Parser;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const COMMIT: &str = env!("BUILD_COMMIT");
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Interactive CLI to audit EC2 instances and AMI usage.
#[derive(Parser, Debug, Clone)]
#[command(name = "ec2-audit")]
#[command(about = "Interactive CLI to audit EC2 instances and AMI usage")]
#[command(version = const_format::formatcp!(
    "{} (commit: {}, build date: {})",
    VERSION, COMMIT, BUILD_DATE
))]
pub struct Args {
    /// AWS profile to use
    #[arg(short, long, env = "AWS_PROFILE")]
    pub profile: Option<String>,

    /// AWS region (if not set, resolved from the AWS SDK default chain)
    #[arg(short, long, env = "AWS_REGION")]
    pub region: Option<String>,

    /// Run a single report and exit (instances, amis)
    #[arg(long, value_name = "REPORT")]
    pub report: Option<String>,

    /// Directory for the run log file
    #[arg(long, default_value = ".", env = "EC2_AUDIT_LOG_DIR")]
    pub log_dir: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", env = "EC2_AUDIT_LOG_LEVEL")]
    pub log_level: String,
}

/// Audit reports the tool can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    Instances,
    Amis,
}

impl ReportKind {
    fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "instances" => Some(ReportKind::Instances),
            "amis" => Some(ReportKind::Amis),
            _ => None,
        }
    }
}

/// Application configuration derived from CLI args.
#[derive(Debug, Clone)]
pub struct Config {
    pub profile: Option<String>,
    pub region: Option<String>,
    pub report: Option<ReportKind>,
    pub log_dir: PathBuf,
    pub log_level: String,
}

impl Config {
    /// Create config from CLI arguments.
    pub fn from_args(args: Args) -> Self {
        let report = args.report.as_deref().and_then(|s| {
            let parsed = ReportKind::parse(s);
            if parsed.is_none() {
                eprintln!(
                    "WARN: Unknown report '{}' (expected: instances, amis), starting interactive menu",
                    s
                );
            }
            parsed
        });

        Self {
            profile: args.profile,
            region: args.region,
            report,
            log_dir: args.log_dir,
            log_level: args.log_level,
        }
    }

    /// Check if running in interactive mode.
    pub fn is_interactive(&self) -> bool {
        self.report.is_none()
    }

    /// Get profile display name for UI.
    pub fn profile_display(&self) -> &str {
        self.profile.as_deref().unwrap_or("default")
    }
}
