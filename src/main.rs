use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use portfolio_dashboard::config::loader::load_or_default;
use portfolio_dashboard::lifecycle::{startup, Shutdown};
use portfolio_dashboard::observability::{logging, metrics};
use portfolio_dashboard::HttpServer;

#[derive(Parser)]
#[command(name = "portfolio-dashboard")]
#[command(about = "Portfolio site catalog and fetch proxy API", long_about = None)]
struct Cli {
    /// TOML config file; built-in defaults are used when omitted.
    #[arg(short, long, env = "DASHBOARD_CONFIG")]
    config: Option<PathBuf>,

    /// Port to listen on, overriding the config's bind address port.
    #[arg(short, long, env = "PORT")]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_or_default(cli.config.as_deref())?;

    logging::init_logging(&config.observability)?;

    tracing::info!("portfolio-dashboard v{} starting", env!("CARGO_PKG_VERSION"));

    let mut bind_address = config.listener.socket_addr()?;
    if let Some(port) = cli.port {
        bind_address.set_port(port);
    }

    tracing::info!(
        bind_address = %bind_address,
        config_file = ?cli.config,
        request_timeout_secs = config.timeouts.request_secs,
        frontend = %config.frontend.index_path,
        "Configuration loaded"
    );

    let state = startup::build_state(&config)?;

    let listener = TcpListener::bind(bind_address).await?;
    tracing::info!(
        address = %listener.local_addr()?,
        "Listening for connections"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(e) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                error = %e,
                "Failed to parse metrics address"
            ),
        }
    }

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config, state);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
