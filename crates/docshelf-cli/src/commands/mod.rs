//! CLI command definitions and dispatch.

pub mod config;
pub mod serve;
pub mod sync;
pub mod tree;

use clap::{Parser, Subcommand};

use docshelf_core::config::AppConfig;
use docshelf_core::error::AppError;
use docshelf_database::DatabasePool;

use crate::output::OutputFormat;

/// DocShelf: document library synced from cloud storage
#[derive(Debug, Parser)]
#[command(name = "docshelf", version, about, long_about = None)]
pub struct Cli {
    /// Base configuration file (extension optional)
    #[arg(short, long, default_value = "config/default")]
    pub config: String,

    /// Environment overlay loaded next to the base file
    #[arg(short, long, default_value = "development")]
    pub env: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the HTTP server
    Serve(serve::ServeArgs),
    /// Run or inspect storage syncs
    Sync(sync::SyncArgs),
    /// Print the library tree
    Tree(tree::TreeArgs),
    /// Configuration management
    Config(config::ConfigArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        let config = || self.load_config();
        match &self.command {
            Commands::Serve(args) => serve::execute(args, config()?).await,
            Commands::Sync(args) => sync::execute(args, config()?, self.format).await,
            Commands::Tree(args) => tree::execute(args, config()?, self.format).await,
            Commands::Config(args) => config::execute(args, config(), &self.config),
        }
    }

    fn load_config(&self) -> Result<AppConfig, AppError> {
        AppConfig::load_from(&self.config, &self.env)
    }
}

/// Helper: connect to the configured database
pub async fn connect_db(config: &AppConfig) -> Result<DatabasePool, AppError> {
    DatabasePool::connect(&config.database).await
}
