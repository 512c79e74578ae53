use std::sync::Arc;

use anyhow::Result;
use axum::http::HeaderValue;
use clap::{Parser, Subcommand};
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pitchside::api::state::AppState;
use pitchside::calculate::{summarize, team_stats};
use pitchside::config::AppConfig;
use pitchside::models::StatField;
use pitchside::store::{ClubStore, PgStore, SampleStore};

#[derive(Parser)]
#[command(name = "pitchside")]
#[command(about = "Club tracker: rosters, match schedule, standings")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(long, default_value = "./config.toml")]
    config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the API server
    Serve {
        /// Bind address (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Port number (overrides config)
        #[arg(long)]
        port: Option<u16>,

        /// Serve fixed sample data instead of the database
        #[arg(long)]
        sample: bool,
    },

    /// Print current-season standings to stdout
    Standings {
        /// Use fixed sample data instead of the database
        #[arg(long)]
        sample: bool,
    },

    /// Load and validate the configuration file
    CheckConfig,
}

async fn build_store(config: &AppConfig, sample: bool) -> Result<Arc<dyn ClubStore>> {
    if sample || config.data.use_sample_data {
        tracing::info!("using fixed sample data; writes will be ignored");
        return Ok(Arc::new(SampleStore::new()));
    }

    let store = PgStore::connect(&config.database).await?;
    store.migrate().await?;
    Ok(Arc::new(store))
}

fn cors_layer(origin: &str) -> Result<CorsLayer> {
    let layer = if origin == "*" {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        CorsLayer::new()
            .allow_origin(origin.parse::<HeaderValue>()?)
            .allow_methods(Any)
            .allow_headers(Any)
    };
    Ok(layer)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));

    if cli.json_logs {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    tracing::info!("Starting pitchside v{}", env!("CARGO_PKG_VERSION"));

    let config_path = std::path::Path::new(&cli.config);
    let config = AppConfig::load(config_path)?;

    match cli.command {
        Commands::Serve { host, port, sample } => {
            let store = build_store(&config, sample).await?;
            let state = AppState::new(store, config.auth.clone());

            let app = pitchside::api::build_router(state)
                .layer(cors_layer(&config.server.cors_origin)?);

            let host = host.unwrap_or_else(|| config.server.host.clone());
            let port = port.unwrap_or(config.server.port);
            let addr = format!("{}:{}", host, port);
            let listener = tokio::net::TcpListener::bind(&addr).await?;
            tracing::info!("Club API: http://{}", addr);
            axum::serve(listener, app).await?;
        }
        Commands::Standings { sample } => {
            let store = build_store(&config, sample).await?;
            let Some(season) = store.current_season().await? else {
                anyhow::bail!("store has no current season; seed data or pass --sample");
            };

            let games = store.season_games(season.id).await?;
            let teams = store.season_teams(season.id).await?;
            let stats = team_stats(&games, &teams);

            println!("\n=== {} ===", season.name);
            for field in StatField::ALL {
                let summary = summarize(&stats, field);
                println!("\n{} (total {})", field.label(), summary.total);
                for entry in &summary.ranked {
                    println!("  {:<24} {}", entry.name, entry.value);
                }
            }
        }
        Commands::CheckConfig => {
            println!("Configuration OK ({})", cli.config);
            println!("  server:      {}:{}", config.server.host, config.server.port);
            println!("  sample data: {}", config.data.use_sample_data);
            let club_login = if config.auth.club_password.is_empty() {
                "disabled"
            } else {
                "enabled"
            };
            let admin_login = if config.auth.admin_password.is_empty() {
                "disabled"
            } else {
                "enabled"
            };
            println!("  club login:  {}", club_login);
            println!("  admin login: {}", admin_login);
        }
    }

    Ok(())
}
