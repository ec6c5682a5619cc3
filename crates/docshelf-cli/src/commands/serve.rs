//! Start the DocShelf server.

use clap::Args;

use docshelf_core::config::AppConfig;
use docshelf_core::error::AppError;

/// Arguments for the serve command
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Override the server port
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Override the server host
    #[arg(long)]
    pub host: Option<String>,

    /// Enable the cron sync schedule regardless of configuration
    #[arg(long)]
    pub schedule: bool,
}

/// Execute the serve command
pub async fn execute(args: &ServeArgs, mut config: AppConfig) -> Result<(), AppError> {
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(ref host) = args.host {
        config.server.host = host.clone();
    }
    if args.schedule {
        config.sync.schedule_enabled = true;
    }

    println!("Starting DocShelf server...");
    println!("  Host: {}", config.server.host);
    println!("  Port: {}", config.server.port);

    let db = super::connect_db(&config).await?;
    docshelf_api::run_server(config, db).await
}
