//! Service Gateway Server
//!
//! 下流マイクロサービスの到達状況を `GET /info` で集約して返すゲートウェイ

#![warn(missing_docs)]

/// REST APIハンドラー
pub mod api;

/// CLIインターフェース
pub mod cli;

/// 設定管理（環境変数ヘルパー）
pub mod config;

/// 下流サービスのプローブ
pub mod health;

/// ロギング初期化ユーティリティ
pub mod logging;

/// axumサーバー起動
pub mod server;

/// Shutdown controller
pub mod shutdown;

use service_gateway_common::config::GatewayConfig;
use service_gateway_common::error::GatewayResult;
use std::sync::Arc;

/// アプリケーション状態
#[derive(Clone)]
pub struct AppState {
    /// 起動時に確定したゲートウェイ設定
    pub config: Arc<GatewayConfig>,
    /// サービスプローバー（接続プーリング有効）
    pub prober: health::ServiceProber,
    /// Cooperative shutdown controller
    pub shutdown: shutdown::ShutdownController,
}

impl AppState {
    /// 設定からアプリケーション状態を作成
    pub fn new(config: GatewayConfig) -> GatewayResult<Self> {
        let prober = health::ServiceProber::new(config.probe_timeout())?;
        Ok(Self {
            config: Arc::new(config),
            prober,
            shutdown: shutdown::ShutdownController::default(),
        })
    }
}
