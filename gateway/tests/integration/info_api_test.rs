//! Integration Test: GET /info
//!
//! 実ポートで起動したゲートウェイに対し、下流サービスの状態ごとの
//! 集約レスポンスを検証する。

use std::time::{Duration, Instant};

use reqwest::Client;
use serde_json::Value;
use service_gateway_common::config::ServiceUrls;
use service_gateway_common::types::{AggregateReport, ServiceName, ServiceStatus};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::support::gateway::{
    all_services, closed_service_url, mock_service, spawn_test_gateway,
};

async fn get_info(url: &str) -> (u16, Value) {
    let response = Client::new().get(url).send().await.unwrap();
    let status = response.status().as_u16();
    let body: Value = response.json().await.unwrap();
    (status, body)
}

fn assert_six_keys(body: &Value) {
    let object = body.as_object().expect("body must be a JSON object");
    let mut keys: Vec<_> = object.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(
        keys,
        vec!["gateway", "message", "moderation", "notification", "presence", "user"]
    );
    assert!(object.values().all(Value::is_string));
}

/// 全サービス未設定なら全フィールドが not-configured
#[tokio::test]
async fn test_info_all_unset_exact_body() {
    let server = spawn_test_gateway(ServiceUrls::default()).await;

    let response = Client::new().get(server.url("/info")).send().await.unwrap();
    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(
        response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok()),
        Some("application/json")
    );
    assert_eq!(
        response.text().await.unwrap(),
        r#"{"gateway":"ok","message":"not-configured","presence":"not-configured","user":"not-configured","notification":"not-configured","moderation":"not-configured"}"#
    );

    server.stop().await.unwrap();
}

/// messageのみ設定され200を返す
#[tokio::test]
async fn test_info_message_ok_others_unset() {
    let message = mock_service(200).await;
    let services = ServiceUrls::default().with(ServiceName::Message, message.uri());
    let server = spawn_test_gateway(services).await;

    let (status, body) = get_info(&server.url("/info")).await;

    assert_eq!(status, 200);
    assert_eq!(body["gateway"], "ok");
    assert_eq!(body["message"], "200 OK");
    for key in ["presence", "user", "notification", "moderation"] {
        assert_eq!(body[key], "not-configured", "field {}", key);
    }
    assert_six_keys(&body);

    server.stop().await.unwrap();
}

/// 下流のエラーコードはunreachableに変換されず、そのまま報告される
#[tokio::test]
async fn test_info_downstream_error_reported_verbatim() {
    let degraded = mock_service(503).await;
    let server = spawn_test_gateway(all_services(&degraded.uri())).await;

    let (status, body) = get_info(&server.url("/info")).await;

    assert_eq!(status, 200);
    for name in ServiceName::ALL {
        assert_eq!(body[name.as_str()], "503 Service Unavailable");
    }

    server.stop().await.unwrap();
}

/// 全サービスに到達できなくても200とgateway=okを返す
#[tokio::test]
async fn test_info_all_unreachable_still_ok() {
    let closed = closed_service_url().await;
    let server = spawn_test_gateway(all_services(&closed)).await;

    let (status, body) = get_info(&server.url("/info")).await;

    assert_eq!(status, 200);
    assert_eq!(body["gateway"], "ok");
    for name in ServiceName::ALL {
        assert_eq!(body[name.as_str()], "unreachable");
    }
    assert_six_keys(&body);

    server.stop().await.unwrap();
}

/// 応答しない下流サービスはタイムアウトでunreachableになり、全体を止めない
#[tokio::test]
async fn test_info_hung_service_times_out() {
    let hung = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/info"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(10)))
        .mount(&hung)
        .await;
    let healthy = mock_service(200).await;

    let services = ServiceUrls::default()
        .with(ServiceName::Presence, hung.uri())
        .with(ServiceName::User, healthy.uri());
    let server = spawn_test_gateway(services).await;

    let start = Instant::now();
    let (status, body) = get_info(&server.url("/info")).await;

    assert_eq!(status, 200);
    assert_eq!(body["presence"], "unreachable");
    assert_eq!(body["user"], "200 OK");
    assert_eq!(body["message"], "not-configured");
    assert!(start.elapsed() < Duration::from_secs(5));

    server.stop().await.unwrap();
}

/// 各サービスの状態は独立して反映される
#[tokio::test]
async fn test_info_mixed_outcomes_are_independent() {
    let ok = mock_service(200).await;
    let not_found = mock_service(404).await;
    let closed = closed_service_url().await;

    let services = ServiceUrls::default()
        .with(ServiceName::Message, ok.uri())
        .with(ServiceName::Presence, not_found.uri())
        .with(ServiceName::User, closed)
        .with(ServiceName::Notification, "");
    let server = spawn_test_gateway(services).await;

    let response = Client::new().get(server.url("/info")).send().await.unwrap();
    let report: AggregateReport = response.json().await.unwrap();

    assert_eq!(report.gateway, "ok");
    assert_eq!(report.message, ServiceStatus::Reported("200 OK".to_string()));
    assert_eq!(
        report.presence,
        ServiceStatus::Reported("404 Not Found".to_string())
    );
    assert_eq!(report.user, ServiceStatus::Unreachable);
    assert_eq!(report.notification, ServiceStatus::NotConfigured);
    assert_eq!(report.moderation, ServiceStatus::NotConfigured);

    server.stop().await.unwrap();
}

/// 下流の状態が変わらなければ繰り返し呼び出しても同じレポートになる
#[tokio::test]
async fn test_info_is_idempotent() {
    let ok = mock_service(200).await;
    let closed = closed_service_url().await;
    let services = ServiceUrls::default()
        .with(ServiceName::Message, ok.uri())
        .with(ServiceName::Moderation, closed);
    let server = spawn_test_gateway(services).await;

    let (_, first) = get_info(&server.url("/info")).await;
    let (_, second) = get_info(&server.url("/info")).await;
    let (_, third) = get_info(&server.url("/info")).await;

    assert_eq!(first, second);
    assert_eq!(second, third);

    server.stop().await.unwrap();
}

/// 下流へは `GET <base>/info` を1リクエストごとに1回だけ送る
#[tokio::test]
async fn test_info_probes_each_service_once_per_request() {
    let downstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/info"))
        .respond_with(ResponseTemplate::new(200))
        .expect(5)
        .mount(&downstream)
        .await;

    let server = spawn_test_gateway(all_services(&downstream.uri())).await;
    let (status, _) = get_info(&server.url("/info")).await;
    assert_eq!(status, 200);

    server.stop().await.unwrap();
    downstream.verify().await;
}
