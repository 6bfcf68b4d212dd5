//! ロギング初期化
//!
//! `GATEWAY_LOG_LEVEL`（旧: `RUST_LOG`）からフィルタを組み立て、標準出力へ出力する。

use crate::config::get_env_with_fallback_or;
use service_gateway_common::error::{GatewayError, GatewayResult};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// デフォルトのログフィルタ
const DEFAULT_LOG_FILTER: &str = "info";

/// ログフィルタ文字列を取得
pub fn log_filter() -> String {
    get_env_with_fallback_or("GATEWAY_LOG_LEVEL", "RUST_LOG", DEFAULT_LOG_FILTER)
}

/// グローバルsubscriberを初期化
pub fn init() -> GatewayResult<()> {
    let filter = EnvFilter::try_new(log_filter())
        .or_else(|_| EnvFilter::try_new(DEFAULT_LOG_FILTER))
        .map_err(|e| GatewayError::Config(format!("Invalid log filter: {}", e)))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .try_init()
        .map_err(|e| GatewayError::Config(format!("Failed to initialize logging: {}", e)))
}
