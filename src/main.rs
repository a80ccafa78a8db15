// Main entry point - Dependency injection and command dispatch
use std::path::PathBuf;
use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use axum::{routing::get, Router};
use clap::{Parser, Subcommand};
use tower_http::trace::TraceLayer;

use health_dashboard::application::dashboard_service::DashboardService;
use health_dashboard::application::export_service::convert_export;
use health_dashboard::domain::focus::FocusMode;
use health_dashboard::domain::window::Timeframe;
use health_dashboard::infrastructure::config::load_config;
use health_dashboard::infrastructure::json_repository::JsonFileRepository;
use health_dashboard::presentation::app_state::AppState;
use health_dashboard::presentation::handlers::{get_dashboard, health_check, list_focus_modes};

/// Personal health metrics dashboard
#[derive(Parser, Debug)]
#[command(name = "health-dashboard")]
struct Args {
    /// Config file, without extension (defaults to config/dashboard if present)
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Normalize a CSV export and print it as a JSON array
    Convert {
        /// CSV export to normalize
        input: PathBuf,
    },
    /// Print the dashboard view for one focus mode as JSON
    View {
        /// sleep, stress, heart-rate, oxygenation or activity
        #[arg(short, long)]
        focus: String,
        /// Window length in days (7, 14, 30 or 90)
        #[arg(short, long)]
        days: Option<u32>,
        /// Samples JSON, overriding the configured path
        #[arg(short, long)]
        samples: Option<PathBuf>,
    },
    /// Serve dashboard views over HTTP
    Serve,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so JSON on stdout stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = load_config(args.config.as_deref())?;

    match args.command {
        Command::Convert { input } => {
            let text = std::fs::read_to_string(&input)
                .with_context(|| format!("Failed to read {}", input.display()))?;
            println!("{}", convert_export(&text)?);
        }
        Command::View {
            focus,
            days,
            samples,
        } => {
            let focus: FocusMode = focus.parse()?;
            let timeframe = match days {
                Some(days) => Timeframe::try_from(days)?,
                None => config.dashboard.default_timeframe()?,
            };
            let path = samples.unwrap_or_else(|| PathBuf::from(&config.data.samples_path));

            let service = DashboardService::from_repository(&JsonFileRepository::new(path))?;
            let view = service.get_dashboard(timeframe, focus);
            println!("{}", serde_json::to_string_pretty(&*view)?);
        }
        Command::Serve => {
            // Create repository (infrastructure layer)
            let repository = JsonFileRepository::new(&config.data.samples_path);

            // Create services (application layer)
            let dashboard_service = DashboardService::from_repository(&repository)?;

            let state = Arc::new(AppState {
                dashboard_service,
                default_timeframe: config.dashboard.default_timeframe()?,
            });

            // Build router (presentation layer)
            let router = Router::new()
                .route("/healthz", get(health_check))
                .route("/focus", get(list_focus_modes))
                .route("/dashboards/:focus", get(get_dashboard))
                .layer(TraceLayer::new_for_http())
                .with_state(state);

            let addr: SocketAddr = config
                .server
                .bind
                .parse()
                .with_context(|| format!("Invalid bind address {}", config.server.bind))?;
            tracing::info!(%addr, "Starting health-dashboard service");

            axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;
        }
    }

    Ok(())
}
