use anyhow::Result;
use clap::{Parser, Subcommand};
use job_board::admin_cli::{handle_admin_command, AdminCli};
use job_board::{start_web_server, EnvironmentConfig};
use tracing::info;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "rozgar")]
#[command(about = "Job marketplace backend")]
struct Cli {
    #[command(subcommand)]
    command: Option<TopCommand>,
}

#[derive(Subcommand)]
enum TopCommand {
    /// Run the API server (default)
    Serve,
    /// Manage job postings
    Jobs(AdminCli),
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("job_board=info,rocket::server=off")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(TopCommand::Jobs(admin)) => handle_admin_command(admin).await,
        Some(TopCommand::Serve) | None => {
            let port = std::env::var("ROCKET_PORT")
                .map_err(|_| anyhow::anyhow!("ROCKET_PORT environment variable not set"))?
                .parse::<u16>()
                .map_err(|_| anyhow::anyhow!("ROCKET_PORT must be a valid port number"))?;

            let config = EnvironmentConfig::load()?;

            info!("Starting rozgar job marketplace API server");
            info!(
                "Environment: {}",
                std::env::var("ENVIRONMENT").unwrap_or_else(|_| "local".to_string())
            );
            info!("Database: {}", config.database_path.display());
            info!("Server: http://0.0.0.0:{}", port);

            start_web_server(config.database_path, config.page_size, port).await
        }
    }
}
