//! Configuration management CLI commands.

use clap::{Args, Subcommand};

use docshelf_core::config::AppConfig;
use docshelf_core::error::AppError;
use docshelf_database::connection::mask_password;

use crate::output;

/// Arguments for config commands
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Config subcommand
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the merged configuration as JSON
    Show,
    /// Validate configuration and print a summary
    Validate,
    /// Write the bundled default configuration to a file
    Generate {
        /// Output file path
        #[arg(short, long, default_value = "config/generated.toml")]
        output: String,
    },
}

const DEFAULT_CONFIG: &str = include_str!("../../../../config/default.toml");

/// Execute config commands
pub fn execute(
    args: &ConfigArgs,
    config: Result<AppConfig, AppError>,
    config_path: &str,
) -> Result<(), AppError> {
    match &args.command {
        ConfigCommand::Show => {
            let mut config = config?;
            config.database.url = mask_password(&config.database.url);
            if !config.storage.dropbox.access_token.is_empty() {
                config.storage.dropbox.access_token = "****".to_string();
            }
            if !config.storage.dropbox.refresh_token.is_empty() {
                config.storage.dropbox.refresh_token = "****".to_string();
            }
            if !config.storage.dropbox.app_secret.is_empty() {
                config.storage.dropbox.app_secret = "****".to_string();
            }
            output::print_json(&config);
        }
        ConfigCommand::Validate => match config {
            Ok(config) => {
                output::print_success(&format!("Configuration '{config_path}' is valid"));
                output::print_kv(
                    "Server",
                    &format!("{}:{}", config.server.host, config.server.port),
                );
                output::print_kv("Database", &mask_password(&config.database.url));
                output::print_kv("Storage", &config.storage.provider);
                output::print_kv("Library root", &config.storage.root_path);
                output::print_kv("Scheduled sync", &config.sync.schedule_enabled.to_string());
            }
            Err(e) => {
                output::print_error(&format!("Configuration invalid: {e}"));
                return Err(e);
            }
        },
        ConfigCommand::Generate { output: out_path } => {
            if let Some(parent) = std::path::Path::new(out_path).parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(out_path, DEFAULT_CONFIG)?;
            output::print_success(&format!("Default config written to '{out_path}'"));
        }
    }

    Ok(())
}
