//! 下流サービスのプローブ
//!
//! 各サービスの `GET <base>/info` を呼び出し、ステータス行を集約する。
//! 失敗はサービス単位で `unreachable` に変換され、集約全体は失敗しない。

/// サービスプローバー
pub mod prober;

pub use prober::ServiceProber;
