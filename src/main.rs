use clap::{Parser, Subcommand, ValueEnum};
use colorchef::config::Config;
use colorchef::error::AppResult;
use colorchef::server;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// colorchef - ColorChef backend service
#[derive(Parser, Debug)]
#[command(name = "colorchef")]
#[command(version)]
#[command(about = "ColorChef backend service", long_about = None)]
struct Cli {
    /// Log output format
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum LogFormat {
    /// Human-readable lines
    Text,
    /// One JSON object per event
    Json,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the web server
    Server {
        /// Host to bind to (overrides SERVER_HOST env var)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to (overrides SERVER_PORT env var)
        #[arg(long)]
        port: Option<u16>,
    },

    /// Print the effective settings as JSON
    Settings,
}

#[tokio::main]
async fn main() -> AppResult<()> {
    let cli = Cli::parse();

    init_tracing(cli.log_format);

    // Load configuration
    let config = Config::from_env()?;

    match cli.command {
        Commands::Server { host, port } => {
            // Override config with CLI args if provided
            let mut config = config;
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            let addr = config.server.addr();

            server::run_server(config, addr).await
        }
        Commands::Settings => {
            println!("{}", serde_json::to_string_pretty(&config)?);
            Ok(())
        }
    }
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(Level::INFO.to_string()));

    match format {
        LogFormat::Text => tracing_subscriber::fmt().with_env_filter(filter).init(),
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init(),
    }
}
