//! CLI module for service-gateway
//!
//! サブコマンドは持たず、起動オプションのみを受け付ける。
//! 環境変数は `config::load_from_env` が読み、ここで指定したフラグがそれを上書きする。

use clap::Parser;
use service_gateway_common::config::GatewayConfig;

/// Service gateway - aggregates downstream service status behind GET /info
#[derive(Parser, Debug)]
#[command(name = "service-gateway")]
#[command(version, about, long_about = None)]
#[command(after_help = r#"ENVIRONMENT VARIABLES:
    GATEWAY_HOST                Bind address (default: 0.0.0.0)
    GATEWAY_PORT                Listen port (default: 8080)
    GATEWAY_PROBE_TIMEOUT_SECS  Per-probe timeout in seconds (default: 5)
    GATEWAY_LOG_LEVEL           Log level (default: info)
    MESSAGE_SERVICE_URL         Message service base URL
    PRESENCE_SERVICE_URL        Presence service base URL
    USER_SERVICE_URL            User service base URL
    NOTIFICATION_SERVICE_URL    Notification service base URL
    MODERATION_SERVICE_URL      Moderation service base URL
"#)]
pub struct Cli {
    /// Bind address
    #[arg(short = 'H', long)]
    pub host: Option<String>,

    /// Listen port
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Per-probe timeout in seconds
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub probe_timeout_secs: Option<u64>,
}

impl Cli {
    /// 指定されたオプションで設定を上書きする
    pub fn apply(&self, mut config: GatewayConfig) -> GatewayConfig {
        if let Some(host) = &self.host {
            config.host = host.clone();
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(secs) = self.probe_timeout_secs {
            config.probe_timeout_secs = secs;
        }
        config
    }
}
