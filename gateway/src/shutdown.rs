//! ゲートウェイ停止要求
//!
//! `server::serve` はOSシグナルに加えてこの要求でも graceful shutdown する。

use std::sync::Arc;
use tokio::sync::watch;

/// 停止要求を共有するハンドル
///
/// クローンはすべて同じ状態を参照する。一度要求された停止は取り消せない。
#[derive(Clone, Debug)]
pub struct ShutdownController {
    requested: Arc<watch::Sender<bool>>,
}

impl Default for ShutdownController {
    fn default() -> Self {
        let (requested, _) = watch::channel(false);
        Self {
            requested: Arc::new(requested),
        }
    }
}

impl ShutdownController {
    /// 停止が要求済みか
    pub fn is_shutdown_requested(&self) -> bool {
        *self.requested.borrow()
    }

    /// 停止を要求し、待機中のタスクをすべて起こす
    pub fn request_shutdown(&self) {
        self.requested.send_replace(true);
    }

    /// 停止が要求されるまで待機
    pub async fn wait(&self) {
        let mut rx = self.requested.subscribe();
        // Senderは自身が保持しているため閉じることはない
        let _ = rx.wait_for(|requested| *requested).await;
    }
}
