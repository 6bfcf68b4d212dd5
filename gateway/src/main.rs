//! Service Gateway Entry Point

use clap::Parser;
use service_gateway::cli::Cli;
use service_gateway::{config, logging, server, AppState};
use service_gateway_common::error::GatewayResult;
use service_gateway_common::types::ServiceName;
use tracing::info;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = run(cli).await {
        tracing::error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> GatewayResult<()> {
    info!("Service Gateway v{}", env!("CARGO_PKG_VERSION"));

    // 設定は起動時に一度だけ読み込む
    let config = cli.apply(config::load_from_env());

    for name in ServiceName::ALL {
        match config.services.get(name) {
            Some(url) => info!(service = %name, base_url = %url, "Downstream service configured"),
            None => info!(service = %name, env = name.env_var(), "Downstream service not configured"),
        }
    }
    info!(
        timeout_secs = config.probe_timeout().as_secs(),
        "Probe timeout configured"
    );

    let bind_addr = config.bind_addr();
    let state = AppState::new(config)?;

    server::run(state, &bind_addr).await
}
