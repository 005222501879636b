use std::path::PathBuf;

use clap::{Parser, Subcommand};
use pawtrack_database::{AnalyticsEvent, ContentReport, Database, DatabaseInfo};
use pawtrack_models::v0::{self, AnalyticsProperties, DataReportPet};
use pawtrack_result::{create_error, Result};
use serde_json::Value;

/// Pawtrack operator tooling
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Access token of the signed-in user
    #[arg(long, env = "PAWTRACK_SESSION", global = true, hide_env_values = true)]
    pub session: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Report a pet listing for moderation
    Report {
        /// Pet listing being reported
        #[arg(long)]
        pet: String,
        /// Reason for the report
        #[arg(long)]
        reason: String,
        /// Additional context
        #[arg(long)]
        details: Option<String>,
    },
    /// List reports filed against a pet listing
    Reports {
        /// Pet listing to look up
        #[arg(long)]
        pet: String,
    },
    /// Upload an evidence image for a claim
    UploadEvidence {
        /// Image to upload
        file: PathBuf,
        /// Claim the evidence belongs to
        #[arg(long)]
        claim: String,
    },
    /// Record an analytics event
    LogEvent {
        /// Name of the event
        event: String,
        /// User who triggered the event
        #[arg(long)]
        user: Option<String>,
        /// Event property as key=value, value parsed as JSON where possible
        #[arg(long = "property", value_parser = parse_property)]
        properties: Vec<(String, Value)>,
    },
    /// Print the resolved configuration
    Config,
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Commands::Report {
                pet,
                reason,
                details,
            } => {
                let db = connect().await?;
                let report = ContentReport::create(
                    &db,
                    self.session.as_deref(),
                    DataReportPet {
                        pet_id: pet,
                        reason,
                        details,
                    },
                )
                .await?;

                let report = v0::ContentReport::from(report);
                if report.is_placeholder() {
                    log::warn!("Backend is not configured, report was not persisted.");
                }

                print_json(&report)
            }
            Commands::Reports { pet } => {
                let db = connect().await?;
                let reports: Vec<v0::ContentReport> = db
                    .fetch_reports_for_pet(&pet)
                    .await?
                    .into_iter()
                    .map(Into::into)
                    .collect();

                print_json(&reports)
            }
            Commands::UploadEvidence { file, claim } => {
                let upload = pawtrack_files::upload_evidence(&file, &claim).await?;
                print_json(&upload)
            }
            Commands::LogEvent {
                event,
                user,
                properties,
            } => {
                let db = connect().await?;
                let properties: AnalyticsProperties = properties.into_iter().collect();
                AnalyticsEvent::log(&db, user, event, properties).await;
                Ok(())
            }
            Commands::Config => {
                pawtrack_config::init().await;
                Ok(())
            }
        }
    }
}

async fn connect() -> Result<Database> {
    DatabaseInfo::Auto.connect().await.map_err(|err| {
        log::error!("{err}");
        create_error!(BackendUnavailable)
    })
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).map_err(|_| create_error!(InternalError))?;
    println!("{json}");
    Ok(())
}

/// Parse a `key=value` property
fn parse_property(input: &str) -> std::result::Result<(String, Value), String> {
    let (key, value) = input
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got {input:?}"))?;

    if key.is_empty() {
        return Err("property key cannot be empty".to_string());
    }

    let value = serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_string()));
    Ok((key.to_string(), value))
}
