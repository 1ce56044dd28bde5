//! Gateway entry point: CLI parsing, config load, origin resolution, serve.

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use api_gateway::config::loader::load_config;
use api_gateway::config::origin::BackendOrigin;
use api_gateway::config::schema::GatewayConfig;
use api_gateway::http::GatewayServer;
use api_gateway::lifecycle::Shutdown;
use api_gateway::observability::init_tracing;

#[derive(Parser)]
#[command(name = "api-gateway")]
#[command(about = "Forwarding gateway between browser clients and the backend API", long_about = None)]
struct Cli {
    /// Path to a TOML config file. Omit to run with built-in defaults.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => GatewayConfig::default(),
    };

    init_tracing(&config.observability.log_level);

    // Resolved once per process lifetime; handlers never re-read it.
    let origin = BackendOrigin::resolve_from_env(config.backend.origin.as_deref())?;

    tracing::info!(
        bind_address = %config.listener.bind_address,
        backend = %origin,
        max_in_flight = config.listener.max_in_flight,
        max_body_bytes = config.limits.max_body_bytes,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(shutdown.trigger_on_ctrl_c());

    let server = GatewayServer::new(config, origin);
    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
