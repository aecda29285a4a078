//! # ヘルスチェックハンドラ

use axum::Json;
use datajam_shared::HealthResponse;

/// ヘルスチェックエンドポイント
///
/// 監視系からの死活確認に応答する。認証・CORS 制御の対象外。
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status:  "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
