//! 集約ステータスAPIハンドラー

use crate::AppState;
use axum::{extract::State, Json};
use service_gateway_common::types::AggregateReport;

/// GET /info - ゲートウェイと下流サービスの状態
///
/// 下流の障害は該当フィールドだけに反映され、レスポンスは常に200を返す。
pub async fn get_info(State(state): State<AppState>) -> Json<AggregateReport> {
    Json(state.prober.probe_all(&state.config.services).await)
}
