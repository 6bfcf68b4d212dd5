use service_gateway::AppState;
use service_gateway_common::config::{GatewayConfig, ServiceUrls};
use service_gateway_common::types::ServiceName;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::http::{spawn_gateway, TestServer};

/// テスト用のプローブタイムアウト（秒）
pub const TEST_PROBE_TIMEOUT_SECS: u64 = 1;

/// 指定したベースURLでゲートウェイを起動する
pub async fn spawn_test_gateway(services: ServiceUrls) -> TestServer {
    let config = GatewayConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        probe_timeout_secs: TEST_PROBE_TIMEOUT_SECS,
        services,
    };
    let state = AppState::new(config).expect("failed to create gateway state");
    spawn_gateway(state).await
}

/// `GET /info` に固定ステータスで応答する下流サービスのモック
pub async fn mock_service(status: u16) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/info"))
        .respond_with(ResponseTemplate::new(status).set_body_string("{\"status\":\"ok\"}"))
        .mount(&server)
        .await;
    server
}

/// 接続を拒否するベースURL
pub async fn closed_service_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

/// 全サービスに同じベースURLを設定する
#[allow(dead_code)]
pub fn all_services(url: &str) -> ServiceUrls {
    ServiceName::ALL
        .into_iter()
        .fold(ServiceUrls::default(), |urls, name| urls.with(name, url))
}
