//! Process entrypoint: CLI flags, logging, configuration, server bootstrap.

use clap::Parser;
use lapwatch::api;
use lapwatch::config::ServerConfig;

/// Stopwatch and world-clock HTTP service.
#[derive(Parser, Debug)]
#[command(name = "lapwatch", version, about)]
struct Cli {
    /// Bind host (overrides the config file and HOST).
    #[arg(long)]
    host: Option<String>,

    /// Bind port (overrides the config file and PORT).
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let mut config = ServerConfig::load()?;
    if let Some(host) = cli.host {
        config.host = host;
    }
    if let Some(port) = cli.port {
        config.port = port;
    }

    let (shutdown_tx, shutdown_rx) = tokio::sync::watch::channel(false);
    let (_addr, server) = api::start_http_server(config.bind_addr()?, shutdown_rx).await?;

    tokio::signal::ctrl_c().await?;
    tracing::info!("shutdown signal received");
    let _ = shutdown_tx.send(true);
    server.await?;

    Ok(())
}
