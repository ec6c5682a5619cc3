//! Storage sync CLI commands.

use clap::{Args, Subcommand, ValueEnum};
use serde::Serialize;
use tabled::Tabled;

use docshelf_api::AppState;
use docshelf_core::config::AppConfig;
use docshelf_core::error::AppError;
use docshelf_entity::sync::{SyncKind, SyncLog};

use crate::output::{self, OutputFormat};

/// Arguments for sync commands
#[derive(Debug, Args)]
pub struct SyncArgs {
    /// Sync subcommand
    #[command(subcommand)]
    pub command: SyncCommand,
}

/// Sync subcommands
#[derive(Debug, Subcommand)]
pub enum SyncCommand {
    /// Run a sync now and wait for it to finish
    Run {
        /// Full rescan or changes since the last cursor
        #[arg(short, long, value_enum, default_value = "incremental")]
        kind: KindArg,
    },
    /// Show sync status and library totals
    Status,
    /// List recent sync runs
    Logs {
        /// Number of runs
        #[arg(short, long)]
        limit: Option<i64>,
    },
}

/// Sync kind choices
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    Full,
    Incremental,
}

impl From<KindArg> for SyncKind {
    fn from(arg: KindArg) -> Self {
        match arg {
            KindArg::Full => Self::Full,
            KindArg::Incremental => Self::Incremental,
        }
    }
}

/// Sync log display row
#[derive(Debug, Serialize, Tabled)]
struct SyncLogRow {
    /// Start time
    started: String,
    /// Kind
    kind: String,
    /// Status
    status: String,
    /// Groups created
    groups: i32,
    /// Added
    added: i32,
    /// Updated
    updated: i32,
    /// Reactivated
    reactivated: i32,
    /// Deactivated
    deactivated: i32,
    /// Duration
    duration: String,
}

impl From<&SyncLog> for SyncLogRow {
    fn from(log: &SyncLog) -> Self {
        Self {
            started: log.started_at.format("%Y-%m-%d %H:%M:%S").to_string(),
            kind: log.kind.to_string(),
            status: log.status.to_string(),
            groups: log.groups_created,
            added: log.documents_added,
            updated: log.documents_updated,
            reactivated: log.documents_reactivated,
            deactivated: log.documents_deactivated,
            duration: log
                .duration_ms()
                .map(|ms| format!("{:.1}s", ms as f64 / 1000.0))
                .unwrap_or_else(|| "-".to_string()),
        }
    }
}

/// Execute sync commands
pub async fn execute(
    args: &SyncArgs,
    config: AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let db = super::connect_db(&config).await?;
    let state = AppState::build(config, db.clone()).await?;

    match &args.command {
        SyncCommand::Run { kind } => {
            let log = state.sync_service.run((*kind).into()).await?;
            match format {
                OutputFormat::Json => output::print_json(&log),
                OutputFormat::Table => {
                    output::print_success(&format!("{} sync completed", log.kind));
                    output::print_list(&[SyncLogRow::from(&log)], format);
                }
            }
        }
        SyncCommand::Status => {
            let status = state.sync_service.status().await?;
            match format {
                OutputFormat::Json => output::print_json(&status),
                OutputFormat::Table => {
                    output::print_kv("Syncing", &status.is_syncing.to_string());
                    output::print_kv("Documents", &status.total_documents.to_string());
                    output::print_kv("Groups", &status.total_groups.to_string());
                    match &status.last_sync {
                        Some(log) => {
                            output::print_kv("Last sync", &format!("{} ({})", log.started_at, log.status));
                            if let Some(ref message) = log.error_message {
                                output::print_kv("Last error", message);
                            }
                        }
                        None => output::print_kv("Last sync", "never"),
                    }
                }
            }
        }
        SyncCommand::Logs { limit } => {
            let logs = state.sync_service.recent_logs(*limit).await?;
            let rows: Vec<SyncLogRow> = logs.iter().map(SyncLogRow::from).collect();
            output::print_list(&rows, format);
        }
    }

    db.close().await;
    Ok(())
}
