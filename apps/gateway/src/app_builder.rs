//! # ゲートウェイアプリケーション構築
//!
//! ルーター定義とミドルウェア適用を担当する。`main.rs` は設定読み込みと
//! サーバー起動に集中する。
//!
//! `/api/proxy` と `/api/notify` は CORS プリフライト（OPTIONS）を
//! 受けるため `any` で登録し、メソッドの振り分けは各ハンドラが行う。

use std::sync::Arc;

use axum::{
    Router,
    routing::{any, get},
};
use datajam_shared::observability::{MakeRequestUuidV7, make_request_span};
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::handler::{NotifyState, ProxyState, health_check, notify, proxy};

/// ルーター構築を行う
///
/// 初期化済みの State を受け取り、ルート定義とレイヤー適用のみを行う。
pub fn build_app(proxy_state: Arc<ProxyState>, notify_state: Arc<NotifyState>) -> Router {
    // Request ID + TraceLayer により、すべての HTTP リクエストに request_id が付与されログに自動注入される
    Router::new()
        .route("/health", get(health_check))
        .merge(
            Router::new()
                .route("/api/proxy", any(proxy))
                .with_state(proxy_state),
        )
        .merge(
            Router::new()
                .route("/api/notify", any(notify))
                .with_state(notify_state),
        )
        // Request ID レイヤー（レイヤー順序が重要: 下に書いたものが外側）
        // 1. SetRequestIdLayer（最外）: リクエスト受信時に UUID v7 を生成（またはクライアント提供値を使用）
        // 2. TraceLayer: カスタムスパンに request_id を含め、全ログに自動注入
        // 3. PropagateRequestIdLayer: レスポンスヘッダーに X-Request-Id をコピー
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
}
