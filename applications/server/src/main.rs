/// Devroster Server - developer record forms over HTTP
use clap::{Parser, Subcommand};
use devroster_core::DevService;
use devroster_server::{config::ServerConfig, create_router, services::FlashStore, state::AppState};
use devroster_storage::SqliteDevService;
use std::{net::SocketAddr, path::PathBuf, sync::Arc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "devroster-server")]
#[command(about = "Developer roster form server", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Configuration file path
        #[arg(short, long, env = "DEVROSTER_CONFIG")]
        config: Option<PathBuf>,
    },
    /// Print all stored developers
    ListDevs {
        /// Configuration file path
        #[arg(short, long, env = "DEVROSTER_CONFIG")]
        config: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "devroster_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { config } => {
            serve(config).await?;
        }
        Commands::ListDevs { config } => {
            list_devs(config).await?;
        }
    }

    Ok(())
}

fn load_config(path: Option<PathBuf>) -> anyhow::Result<ServerConfig> {
    let config = ServerConfig::load(path.as_deref())?;
    config.validate()?;
    Ok(config)
}

async fn serve(config_path: Option<PathBuf>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;

    tracing::info!("Starting Devroster Server");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);

    let devs = SqliteDevService::connect(&config.storage.database_url).await?;
    tracing::info!("Database connected");

    let flash = Arc::new(FlashStore::new(config.flash.ttl()));

    let app_state = AppState::new(Arc::new(devs), flash);
    let app = create_router(app_state);

    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn list_devs(config_path: Option<PathBuf>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let devs = SqliteDevService::connect(&config.storage.database_url).await?;

    println!("Developers:");
    for dev in devs.select_all().await? {
        let gender = dev.gender.map(|g| g.as_str()).unwrap_or("-");
        println!(
            "  {} - {} ({} years, {}, {}) [{}]",
            dev.id,
            dev.name,
            dev.career,
            dev.email,
            gender,
            dev.languages.join(", ")
        );
    }

    Ok(())
}
