//! 設定管理
//!
//! GatewayConfig, ServiceUrls等の設定構造体

use crate::types::ServiceName;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// ゲートウェイ設定
///
/// 起動時に一度だけ組み立て、以後は変更しない。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GatewayConfig {
    /// ホストアドレス (デフォルト: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// ポート番号 (デフォルト: 8080)
    #[serde(default = "default_port")]
    pub port: u16,

    /// プローブ1回あたりのタイムアウト（秒）(デフォルト: 5)
    #[serde(default = "default_probe_timeout")]
    pub probe_timeout_secs: u64,

    /// 下流サービスのベースURL
    #[serde(default)]
    pub services: ServiceUrls,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

/// デフォルトのプローブタイムアウト（秒）
pub const DEFAULT_PROBE_TIMEOUT_SECS: u64 = 5;

fn default_probe_timeout() -> u64 {
    DEFAULT_PROBE_TIMEOUT_SECS
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            probe_timeout_secs: default_probe_timeout(),
            services: ServiceUrls::default(),
        }
    }
}

impl GatewayConfig {
    /// バインドアドレス（"host:port"）
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// プローブのタイムアウト
    ///
    /// 0秒は無制限待ちと区別できないためデフォルト値に置き換える。
    pub fn probe_timeout(&self) -> Duration {
        match self.probe_timeout_secs {
            0 => Duration::from_secs(DEFAULT_PROBE_TIMEOUT_SECS),
            secs => Duration::from_secs(secs),
        }
    }
}

/// 下流サービスのベースURL
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServiceUrls {
    /// MESSAGE_SERVICE_URL
    #[serde(default)]
    pub message: Option<String>,
    /// PRESENCE_SERVICE_URL
    #[serde(default)]
    pub presence: Option<String>,
    /// USER_SERVICE_URL
    #[serde(default)]
    pub user: Option<String>,
    /// NOTIFICATION_SERVICE_URL
    #[serde(default)]
    pub notification: Option<String>,
    /// MODERATION_SERVICE_URL
    #[serde(default)]
    pub moderation: Option<String>,
}

impl ServiceUrls {
    /// 指定サービスのベースURL
    ///
    /// 空文字・空白のみの値は未設定として扱う。
    pub fn get(&self, name: ServiceName) -> Option<&str> {
        let value = match name {
            ServiceName::Message => &self.message,
            ServiceName::Presence => &self.presence,
            ServiceName::User => &self.user,
            ServiceName::Notification => &self.notification,
            ServiceName::Moderation => &self.moderation,
        };
        value.as_deref().map(str::trim).filter(|url| !url.is_empty())
    }

    /// 指定サービスのベースURLを設定
    pub fn set(&mut self, name: ServiceName, url: Option<String>) {
        let slot = match name {
            ServiceName::Message => &mut self.message,
            ServiceName::Presence => &mut self.presence,
            ServiceName::User => &mut self.user,
            ServiceName::Notification => &mut self.notification,
            ServiceName::Moderation => &mut self.moderation,
        };
        *slot = url;
    }

    /// 指定サービスだけを設定したServiceUrlsを作成
    pub fn with(mut self, name: ServiceName, url: impl Into<String>) -> Self {
        self.set(name, Some(url.into()));
        self
    }

    /// ベースURLが設定されているサービス一覧
    pub fn configured(&self) -> Vec<ServiceName> {
        ServiceName::ALL
            .into_iter()
            .filter(|name| self.get(*name).is_some())
            .collect()
    }
}
