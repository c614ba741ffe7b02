//! # cep-api: Binary Entry Point
//!
//! Starts the Axum HTTP server for the ConsultaCEP adapter.
//! Binds to a configurable port (default 3000).

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cep_api::state::{AppConfig, AppState, DEFAULT_ACCESS_TOKEN, DEFAULT_PORT};
use cep_viacep_client::{ViaCepClient, ViaCepConfig};

/// ConsultaCEP verification adapter.
///
/// ViaCEP endpoint and timeout come from `VIACEP_BASE_URL` and
/// `VIACEP_TIMEOUT_SECS`; log filtering from `RUST_LOG` (default `info`).
#[derive(Parser, Debug)]
#[command(name = "cep-api", version, about, long_about = None)]
struct Cli {
    /// Port to listen on.
    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Bearer token returned by the `oauthToken` action.
    #[arg(long, env = "ACCESS_TOKEN", hide_env_values = true)]
    access_token: Option<String>,

    /// Emit logs as JSON lines.
    #[arg(long, env = "LOG_JSON")]
    log_json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize structured tracing.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if cli.log_json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    let config = AppConfig {
        port: cli.port,
        access_token: cli
            .access_token
            .filter(|t| !t.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ACCESS_TOKEN.to_string()),
    };

    let viacep_config = ViaCepConfig::from_env().context("invalid ViaCEP configuration")?;
    tracing::info!(base_url = %viacep_config.base_url, "ViaCEP client configured");
    let viacep = ViaCepClient::new(viacep_config).context("failed to build ViaCEP client")?;

    let port = config.port;
    let app = cep_api::app(AppState::new(config, viacep));

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!("ConsultaCEP server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
