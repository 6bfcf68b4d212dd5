use std::net::SocketAddr;

use service_gateway::{server, shutdown::ShutdownController, AppState};
use service_gateway_common::error::GatewayResult;
use tokio::{net::TcpListener, task::JoinHandle};

/// テスト用に実ポートで起動したゲートウェイ
#[allow(dead_code)]
pub struct TestServer {
    addr: SocketAddr,
    shutdown: ShutdownController,
    handle: JoinHandle<GatewayResult<()>>,
}

#[allow(dead_code)]
impl TestServer {
    /// サーバーがバインドしているアドレスを返す
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// `http://<addr><path>` を返す
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// サーバーを停止し、バックグラウンドタスクの終了を待つ
    pub async fn stop(self) -> GatewayResult<()> {
        self.shutdown.request_shutdown();
        self.handle.await.expect("server task panicked")
    }
}

/// 任意のゲートウェイ状態を127.0.0.1のエフェメラルポートで起動する
pub async fn spawn_gateway(state: AppState) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let shutdown = state.shutdown.clone();
    let handle = tokio::spawn(server::serve(listener, state));

    TestServer {
        addr,
        shutdown,
        handle,
    }
}
