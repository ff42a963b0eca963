//! GuardianOS CLI
//!
//! One-shot commands against the GuardianOS backend:
//! - Dashboard statistics
//! - Recent complaints
//! - Seed reports and users
//! - Default config generation

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};

use guardian::backend::{BackendClient, DashboardSource};
use guardian::config::{generate_default_config, Config, ConfigOrigin};
use guardian::fixtures;
use guardian::logging::{self, LogSink};
use guardian::model::{display_count, format_count, DashboardStats};
use guardian::server::StubStore;
use guardian::sync::fetch_cycle;

#[derive(Parser)]
#[command(name = "guardian-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Command-line access to the GuardianOS dashboard data")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: search standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Backend API base URL (overrides config)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Read from built-in fixtures instead of the backend
    #[arg(long, global = true)]
    pub demo: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table, global = true)]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show dashboard statistics (one refresh cycle)
    Stats,

    /// List the most recent complaints
    Recent,

    /// List seed incident reports
    Reports,

    /// List seed user accounts
    Users,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (mut config, origin) = match &cli.config {
        Some(path) => (Config::load_with_env(path)?, ConfigOrigin::explicit(path)),
        None => Config::load_default(),
    };
    if let Some(url) = &cli.api_url {
        config.backend.base_url = url.clone();
    }

    logging::init(&config.logging, LogSink::Stderr)?;
    origin.log();

    match cli.command {
        Commands::Stats => {
            let source = build_source(&config, cli.demo)?;
            let data = fetch_cycle(source.as_ref())
                .await
                .with_context(|| format!("Cannot read dashboard data from {}", source.name()))?;
            let stats = DashboardStats::from_responses(&data.complaints, &data.sos);

            match cli.format {
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&stats)?);
                }
                OutputFormat::Table => print_stats(&stats, source.name()),
            }
        }

        Commands::Recent => {
            let source = build_source(&config, cli.demo)?;
            let recent = source
                .recent_complaints()
                .await
                .with_context(|| format!("Cannot read recent complaints from {}", source.name()))?;

            match cli.format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&recent)?),
                OutputFormat::Table if recent.is_empty() => println!("No recent reports"),
                OutputFormat::Table => {
                    println!("{:<8} {:<32} {:<14} {:<16} {}", "ID", "Title", "Type", "Reported", "Status");
                    println!("{}", "-".repeat(86));
                    for item in &recent {
                        println!(
                            "{:<8} {:<32} {:<14} {:<16} {}",
                            item.id_display(),
                            truncate(item.title_text(), 32),
                            truncate(item.crime_type_text(), 14),
                            item.created_display(),
                            item.status_text()
                        );
                    }
                }
            }
        }

        Commands::Reports => {
            let reports = fixtures::reports();
            match cli.format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(reports)?),
                OutputFormat::Table => {
                    println!("{:<14} {:<32} {:<10} {:<24} {}", "ID", "Title", "Type", "Location", "Status");
                    println!("{}", "-".repeat(100));
                    for report in reports {
                        println!(
                            "{:<14} {:<32} {:<10} {:<24} {}",
                            report.id,
                            truncate(&report.title, 32),
                            report.category,
                            truncate(&report.location, 24),
                            report.status
                        );
                    }
                }
            }
        }

        Commands::Users => {
            let users = fixtures::users();
            match cli.format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(users)?),
                OutputFormat::Table => {
                    println!(
                        "{:<10} {:<20} {:<26} {:<12} {:>10} {}",
                        "ID", "Name", "Email", "Status", "Complaints", "Joined"
                    );
                    println!("{}", "-".repeat(96));
                    for user in users {
                        println!(
                            "{:<10} {:<20} {:<26} {:<12} {:>10} {}",
                            user.id,
                            user.name,
                            user.email,
                            user.verification,
                            user.complaints,
                            user.join_date
                        );
                    }
                }
            }
        }

        Commands::Config { output } => {
            let config = generate_default_config();

            match output {
                Some(path) => {
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, &config)?;
                    println!("Config written to {:?}", path);
                }
                None => {
                    print!("{}", config);
                }
            }
        }
    }

    Ok(())
}

fn build_source(config: &Config, demo: bool) -> anyhow::Result<Arc<dyn DashboardSource>> {
    if demo {
        return Ok(Arc::new(StubStore::seeded(chrono::Utc::now())));
    }
    Ok(Arc::new(BackendClient::new(config.backend.client_config())?))
}

fn print_stats(stats: &DashboardStats, source: &str) {
    println!("GuardianOS dashboard ({})", source);
    println!();
    println!("  {:<16} {}", "Total Reports", format_count(stats.total_reports));
    println!("  {:<16} {}", "Reports Today", format_count(stats.today_reports));
    println!("  {:<16} {}", "High Priority", display_count(stats.high_priority));
    println!("  {:<16} {}", "SOS Alerts", format_count(stats.sos_alerts));
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", kept)
    }
}
