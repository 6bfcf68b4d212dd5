//! エラー型定義
//!
//! 統一エラー型（thiserror使用）
//!
//! `ProbeError` は個々のプローブ失敗の原因で、レポート上は常に
//! `unreachable` になる。`GatewayError` は起動経路でのみ返される。

use thiserror::Error;

/// プローブ失敗の原因
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProbeError {
    /// タイムアウト
    #[error("probe timed out")]
    Timeout,

    /// 接続失敗（DNS解決失敗・接続拒否を含む）
    #[error("connection failed: {0}")]
    Connect(String),

    /// ベースURLからリクエストURLを組み立てられない
    #[error("invalid url: {0}")]
    InvalidUrl(String),

    /// その他のリクエストエラー（TLS、不正なレスポンス等）
    #[error("request failed: {0}")]
    Request(String),
}

/// ゲートウェイのエラー型
#[derive(Debug, Error)]
pub enum GatewayError {
    /// 設定エラー
    #[error("Configuration error: {0}")]
    Config(String),

    /// HTTPクライアントエラー
    #[error("HTTP client error: {0}")]
    Http(String),

    /// アドレスへのバインド失敗
    #[error("Failed to bind to address: {0}")]
    Bind(String),

    /// サーバー実行エラー
    #[error("Server error: {0}")]
    Server(String),
}

/// ゲートウェイのResult型
pub type GatewayResult<T> = Result<T, GatewayError>;
