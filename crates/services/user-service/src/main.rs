//! User Service - HTTP server for user management.

use clap::{Parser, Subcommand};

use common::{env_or, init_tracing, DEFAULT_ENVIRONMENT};
use user_service_lib::config::UserServiceConfig;

#[derive(Parser)]
#[command(name = "user-service")]
#[command(about = "User management service with age calculation")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Host to bind to (overrides APP_HOST)
        #[arg(long)]
        host: Option<String>,
        /// Port to listen on (overrides APP_PORT)
        #[arg(long)]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing before config so fallback warnings are visible
    init_tracing(env_or("APP_ENV", DEFAULT_ENVIRONMENT).eq_ignore_ascii_case("production"));

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { host, port } => {
            let config = UserServiceConfig::from_env().with_addr(host, port);
            tracing::debug!(?config, "Configuration loaded");
            user_service_lib::run_server(config).await?;
        }
    }

    Ok(())
}
