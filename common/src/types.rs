//! 共通型定義
//!
//! 下流サービス名、プローブ結果、集約レポート

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::convert::Infallible;
use std::str::FromStr;

/// `gateway` フィールドの固定値
pub const GATEWAY_OK: &str = "ok";

/// 下流サービス
///
/// 集約レポートのキーと設定用の環境変数名を持つ固定の5サービス。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceName {
    /// メッセージサービス
    Message,
    /// プレゼンスサービス
    Presence,
    /// ユーザーサービス
    User,
    /// 通知サービス
    Notification,
    /// モデレーションサービス
    Moderation,
}

impl ServiceName {
    /// レポートに現れる順序の全サービス
    pub const ALL: [ServiceName; 5] = [
        Self::Message,
        Self::Presence,
        Self::User,
        Self::Notification,
        Self::Moderation,
    ];

    /// レポートのJSONキー
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Message => "message",
            Self::Presence => "presence",
            Self::User => "user",
            Self::Notification => "notification",
            Self::Moderation => "moderation",
        }
    }

    /// ベースURLを読み取る環境変数名
    pub fn env_var(&self) -> &'static str {
        match self {
            Self::Message => "MESSAGE_SERVICE_URL",
            Self::Presence => "PRESENCE_SERVICE_URL",
            Self::User => "USER_SERVICE_URL",
            Self::Notification => "NOTIFICATION_SERVICE_URL",
            Self::Moderation => "MODERATION_SERVICE_URL",
        }
    }
}

impl std::fmt::Display for ServiceName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 1サービスのプローブ結果
///
/// JSON上はただの文字列として表現される。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum ServiceStatus {
    /// ベースURL未設定
    NotConfigured,
    /// 接続失敗・タイムアウト等でレスポンスを得られなかった
    Unreachable,
    /// レスポンスのステータス行（例: "200 OK"）
    Reported(String),
}

impl ServiceStatus {
    /// レポートに書き出す文字列
    pub fn as_str(&self) -> &str {
        match self {
            Self::NotConfigured => "not-configured",
            Self::Unreachable => "unreachable",
            Self::Reported(line) => line,
        }
    }
}

impl FromStr for ServiceStatus {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s.to_string()))
    }
}

impl From<String> for ServiceStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "not-configured" => Self::NotConfigured,
            "unreachable" => Self::Unreachable,
            _ => Self::Reported(s),
        }
    }
}

impl From<ServiceStatus> for String {
    fn from(status: ServiceStatus) -> Self {
        match status {
            ServiceStatus::Reported(line) => line,
            other => other.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for ServiceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// ステータス行を組み立てる
///
/// 理由句が無いコードは数値だけを返す。
pub fn status_line(code: u16, reason: Option<&str>) -> String {
    match reason {
        Some(reason) if !reason.is_empty() => format!("{} {}", code, reason),
        _ => code.to_string(),
    }
}

/// `GET /info` のレスポンスボディ
///
/// フィールドの宣言順がそのままJSONのキー順になる。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AggregateReport {
    /// ゲートウェイ自身の状態（常に "ok"）
    pub gateway: String,
    /// メッセージサービス
    pub message: ServiceStatus,
    /// プレゼンスサービス
    pub presence: ServiceStatus,
    /// ユーザーサービス
    pub user: ServiceStatus,
    /// 通知サービス
    pub notification: ServiceStatus,
    /// モデレーションサービス
    pub moderation: ServiceStatus,
}

impl AggregateReport {
    /// サービスごとの結果からレポートを作成
    ///
    /// 結果が欠けているサービスは `Unreachable` として扱う。
    pub fn from_statuses(mut statuses: HashMap<ServiceName, ServiceStatus>) -> Self {
        let mut take = |name: ServiceName| {
            statuses
                .remove(&name)
                .unwrap_or(ServiceStatus::Unreachable)
        };

        Self {
            gateway: GATEWAY_OK.to_string(),
            message: take(ServiceName::Message),
            presence: take(ServiceName::Presence),
            user: take(ServiceName::User),
            notification: take(ServiceName::Notification),
            moderation: take(ServiceName::Moderation),
        }
    }

    /// 指定サービスの結果
    pub fn get(&self, name: ServiceName) -> &ServiceStatus {
        match name {
            ServiceName::Message => &self.message,
            ServiceName::Presence => &self.presence,
            ServiceName::User => &self.user,
            ServiceName::Notification => &self.notification,
            ServiceName::Moderation => &self.moderation,
        }
    }
}
