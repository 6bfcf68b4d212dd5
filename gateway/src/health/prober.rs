//! サービスプローバー
//!
//! 1回の `GET /info` リクエストごとに5サービスを並列にプローブする。

use futures::future::join_all;
use hyper::ext::ReasonPhrase;
use reqwest::{Client, Response};
use service_gateway_common::config::ServiceUrls;
use service_gateway_common::error::{GatewayError, GatewayResult, ProbeError};
use service_gateway_common::types::{status_line, AggregateReport, ServiceName, ServiceStatus};
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tracing::{debug, error, warn};

/// プローブ先のパス
const INFO_PATH: &str = "/info";

/// サービスプローバー
///
/// 接続プール付きのHTTPクライアントを1つ保持し、全プローブで共有する。
/// クライアントのタイムアウトは接続からボディ読み取りまでを含む。
#[derive(Clone, Debug)]
pub struct ServiceProber {
    client: Client,
    timeout: Duration,
}

impl ServiceProber {
    /// 新しいプローバーを作成
    pub fn new(timeout: Duration) -> GatewayResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GatewayError::Http(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, timeout })
    }

    /// プローブ1回あたりのタイムアウト
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// 全サービスを並列にプローブしてレポートを作成
    ///
    /// 全タスクの完了を待ってから返す。タスクがパニックした場合は
    /// そのサービスだけが `Unreachable` になる。
    pub async fn probe_all(&self, urls: &ServiceUrls) -> AggregateReport {
        let (names, handles): (Vec<_>, Vec<_>) = ServiceName::ALL
            .into_iter()
            .map(|name| {
                let prober = self.clone();
                let base_url = urls.get(name).map(str::to_string);
                let handle =
                    tokio::spawn(async move { prober.probe(name, base_url.as_deref()).await });
                (name, handle)
            })
            .unzip();

        let mut statuses = HashMap::with_capacity(names.len());
        for (name, result) in names.into_iter().zip(join_all(handles).await) {
            let status = match result {
                Ok(status) => status,
                Err(e) => {
                    error!(service = %name, "Probe task join error: {}", e);
                    ServiceStatus::Unreachable
                }
            };
            statuses.insert(name, status);
        }

        AggregateReport::from_statuses(statuses)
    }

    /// 単一サービスのプローブ
    pub async fn probe(&self, name: ServiceName, base_url: Option<&str>) -> ServiceStatus {
        let Some(base_url) = base_url else {
            return ServiceStatus::NotConfigured;
        };

        let start = Instant::now();
        match self.fetch_status_line(base_url).await {
            Ok(line) => {
                debug!(
                    service = %name,
                    base_url = %base_url,
                    latency_ms = start.elapsed().as_millis() as u64,
                    status = %line,
                    "Probe succeeded"
                );
                ServiceStatus::Reported(line)
            }
            Err(e) => {
                warn!(
                    service = %name,
                    base_url = %base_url,
                    error = %e,
                    "Service unreachable"
                );
                ServiceStatus::Unreachable
            }
        }
    }

    async fn fetch_status_line(&self, base_url: &str) -> Result<String, ProbeError> {
        let url = info_url(base_url);
        let mut response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(classify_error)?;

        let status = response.status();
        let line = status_line(
            status.as_u16(),
            reason_phrase(&response).or(status.canonical_reason()),
        );

        // ボディは読み捨てて接続をプールに戻す。レスポンスはdropで必ず解放される。
        if let Err(e) = drain(&mut response).await {
            debug!(url = %url, error = %e, "Failed to drain probe response body");
        }

        Ok(line)
    }
}

/// `<base>/info` を組み立てる
fn info_url(base_url: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), INFO_PATH)
}

/// 下流が実際に送信した理由句
///
/// hyperは標準の理由句と異なる場合のみ拡張として保持する。
fn reason_phrase(response: &Response) -> Option<&str> {
    response
        .extensions()
        .get::<ReasonPhrase>()
        .and_then(|reason| std::str::from_utf8(reason.as_bytes()).ok())
}

async fn drain(response: &mut Response) -> Result<(), ProbeError> {
    while response.chunk().await.map_err(classify_error)?.is_some() {}
    Ok(())
}

fn classify_error(err: reqwest::Error) -> ProbeError {
    if err.is_timeout() {
        ProbeError::Timeout
    } else if err.is_builder() {
        ProbeError::InvalidUrl(err.to_string())
    } else if err.is_connect() {
        ProbeError::Connect(err.to_string())
    } else {
        ProbeError::Request(err.to_string())
    }
}
