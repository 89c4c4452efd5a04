//! SARO CLI
//!
//! Command-line access to the SARO backend through the same client core,
//! navigation shell and page models the browser dashboard uses:
//! - Check backend health and the dashboard summary
//! - Watch the dashboard refresh on the poll interval
//! - Open any dashboard page headlessly and print its loaded state
//! - Ingest documents, run audits, check guardrails, onboard

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use saro::api::dto::RiskLevel;
use saro::config::generate_default_config;
use saro::navigation::{NavSection, PageId};
use saro::pages::overview::Persona;
use saro::pages::{AgenticPage, AuditPage, IngestionPage, OnboardingPage, PageState};
use saro::{poll_dashboard, ApiClient, ClientError, Config, Shell};

#[derive(Parser)]
#[command(name = "saro")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "SARO AI regulatory intelligence from the command line")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Backend base URL (overrides config and SARO_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Config file (default: search the standard locations)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Pretty, global = true)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Pretty,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check backend health
    Health,

    /// Show the dashboard summary
    Dashboard {
        /// Show the risk heatmap instead
        #[arg(long)]
        heatmap: bool,
    },

    /// Print the dashboard summary on every poll until Ctrl-C
    Watch {
        /// Poll interval in seconds (default: dashboard.poll_interval_secs)
        #[arg(short, long)]
        interval: Option<u64>,
    },

    /// List dashboard pages
    Pages,

    /// Open a page, run its initial fetch and print its state
    Open {
        /// Page key (see `saro pages`)
        page: String,
    },

    /// Issue a raw GET through the client
    Get {
        /// Path below the base URL, e.g. /api/v1/health
        path: String,
    },

    /// Ingest a regulatory document
    Ingest {
        #[arg(short, long)]
        title: String,
        /// Document text; read from --file when omitted
        #[arg(short, long)]
        content: Option<String>,
        #[arg(long)]
        file: Option<PathBuf>,
        #[arg(short, long, default_value = "EU")]
        jurisdiction: String,
        #[arg(long, default_value = "regulation")]
        doc_type: String,
        #[arg(long)]
        source: Option<String>,
        #[arg(short = 'T', long)]
        tags: Vec<String>,
    },

    /// Run a model audit
    Audit {
        /// Model name
        model: String,
        #[arg(short, long)]
        use_case: String,
        #[arg(long, default_value = "1.0")]
        version: String,
        #[arg(short, long, default_value = "EU")]
        jurisdiction: String,
        /// low, medium, high or critical
        #[arg(short, long, default_value = "medium")]
        risk: String,
    },

    /// Check a model output against the guardrails
    Guardrails {
        /// Output text to check
        text: String,
        #[arg(short, long, default_value = "HRScreener-v1")]
        model: String,
    },

    /// Create an account
    Onboard {
        company: String,
        #[arg(long, default_value = "Technology")]
        industry: String,
        #[arg(long, default_value = "professional")]
        plan: String,
        #[arg(long, default_value = "enabler")]
        persona: String,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        match e.downcast_ref::<ClientError>() {
            Some(client_error) => eprintln!("Error [{}]: {}", client_error.kind(), client_error),
            None => eprintln!("Error: {:#}", e),
        }
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    init_logging(&config);

    let format = cli.format;
    let client = ApiClient::from_config(&config, cli.api_url.as_deref())?;

    match cli.command {
        Commands::Health => print_value(format, &client.health().await?)?,

        Commands::Dashboard { heatmap } => {
            let value = if heatmap {
                client.risk_heatmap().await?
            } else {
                client.dashboard().await?
            };
            print_value(format, &value)?;
        }

        Commands::Watch { interval } => {
            let period = Duration::from_secs(
                interval
                    .unwrap_or(config.dashboard.poll_interval_secs)
                    .max(1),
            );
            let client = Arc::new(client);

            print_value(format, &client.dashboard().await?)?;

            let handle = poll_dashboard(Arc::clone(&client), period, move |result| {
                if let Ok(summary) = result {
                    if let Err(e) = print_value(format, &summary) {
                        tracing::warn!(error = %e, "Failed to print dashboard");
                    }
                }
            });

            tokio::signal::ctrl_c().await?;
            drop(handle);
        }

        Commands::Pages => print_pages(),

        Commands::Open { page } => {
            let mut shell = Shell::new();
            shell.navigate(&page);
            if let PageState::Overview(overview) = shell.page_mut() {
                overview.persona = Persona::parse(&config.dashboard.persona).unwrap_or_default();
            }
            shell.load(&client).await;

            eprintln!("{}", shell.breadcrumb());
            print_value(format, shell.page())?;
            if let Some(error) = shell.page().error() {
                bail!("{} failed to load: {}", shell.active().label(), error);
            }
        }

        Commands::Get { path } => print_value(format, &client.get(&path).await?)?,

        Commands::Ingest {
            title,
            content,
            file,
            jurisdiction,
            doc_type,
            source,
            tags,
        } => {
            let content = match (content, file) {
                (Some(content), _) => content,
                (None, Some(path)) => std::fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read {:?}", path))?,
                (None, None) => String::new(),
            };

            let mut page = IngestionPage::default();
            page.form.title = title;
            page.form.content = content;
            page.form.jurisdiction = jurisdiction;
            page.form.doc_type = doc_type;
            page.form.source = source;
            page.form.tags = tags;
            page.ingest(&client).await;

            if let Some(error) = page.error {
                bail!(error);
            }
            print_option(format, page.result.as_ref())?;
        }

        Commands::Audit {
            model,
            use_case,
            version,
            jurisdiction,
            risk,
        } => {
            let Some(risk_category) = RiskLevel::parse(&risk) else {
                bail!("Unknown risk level {:?}; expected low, medium, high or critical", risk);
            };

            let mut page = AuditPage::default();
            page.form.model_name = model;
            page.form.use_case = use_case;
            page.form.model_version = version;
            page.form.jurisdiction = jurisdiction;
            page.form.risk_category = risk_category;
            page.run_audit(&client).await;

            if let Some(error) = page.error {
                bail!(error);
            }
            print_option(format, page.result.as_ref())?;
        }

        Commands::Guardrails { text, model } => {
            let mut page = AgenticPage::default();
            page.guard_form.output_text = text;
            page.guard_form.model_id = model;
            page.check(&client).await;

            if let Some(error) = page.guard_error {
                bail!(error);
            }
            print_option(format, page.guard_result.as_ref())?;
        }

        Commands::Onboard {
            company,
            industry,
            plan,
            persona,
        } => {
            let mut page = OnboardingPage::default();
            page.form.company_name = company;
            page.form.industry = industry;
            page.form.plan = plan;
            page.form.persona = persona;
            page.submit(&client).await;

            if let Some(error) = page.error {
                bail!(error);
            }
            print_option(format, page.result.as_ref())?;
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

fn init_logging(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| {
            tracing_subscriber::EnvFilter::new(format!("saro={}", config.logging.level))
        });
    let registry = tracing_subscriber::registry().with(filter);

    if config.logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn print_value<T: Serialize + ?Sized>(format: OutputFormat, value: &T) -> Result<()> {
    let text = match format {
        OutputFormat::Json => serde_json::to_string(value)?,
        OutputFormat::Pretty => serde_json::to_string_pretty(value)?,
    };
    println!("{}", text);
    Ok(())
}

fn print_option(format: OutputFormat, value: Option<&serde_json::Value>) -> Result<()> {
    match value {
        Some(value) => print_value(format, value),
        None => Ok(()),
    }
}

fn print_pages() {
    for section in NavSection::ALL {
        println!("{}", section.label());
        for page in PageId::in_section(section) {
            let badge = page.badge().map(|b| format!(" [{}]", b)).unwrap_or_default();
            println!("  {:<14} {}{}", page.key(), page.title(), badge);
        }
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "saro",
            "open",
            "mvp2",
            "--api-url",
            "https://api.example.com",
            "--format",
            "json",
        ])
        .unwrap();

        assert_eq!(cli.api_url.as_deref(), Some("https://api.example.com"));
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(matches!(cli.command, Commands::Open { ref page } if page == "mvp2"));
    }

    #[test]
    fn test_audit_defaults() {
        let cli = Cli::try_parse_from(["saro", "audit", "CreditScorer-v3", "--use-case", "credit"])
            .unwrap();
        match cli.command {
            Commands::Audit { risk, jurisdiction, version, .. } => {
                assert_eq!(risk, "medium");
                assert_eq!(jurisdiction, "EU");
                assert_eq!(version, "1.0");
            }
            _ => panic!("expected audit"),
        }
        assert_eq!(cli.format, OutputFormat::Pretty);
    }
}
