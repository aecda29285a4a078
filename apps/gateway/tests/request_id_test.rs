//! # Request ID レイヤーのテスト
//!
//! ゲートウェイの Request ID レイヤー（SetRequestIdLayer +
//! PropagateRequestIdLayer + カスタム make_span_with）が
//! 正しく動作することを検証する。
//!
//! - レスポンスに `X-Request-Id` ヘッダーが含まれる
//! - クライアント提供の `X-Request-Id` がそのまま返される
//! - 自動生成の `X-Request-Id` が UUID v7 形式である

use std::sync::Arc;

use axum::Router;
use datajam_domain::{clock::SystemClock, credentials::ApiCredentials, endpoint::VendorEndpoint};
use datajam_gateway::{
    app_builder::build_app,
    client::{VendorApi, VendorApiError},
    handler::{NotifyState, ProxyState},
    template::TemplateRenderer,
};
use http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

/// Request ID の検証では呼ばれないベンダー API スタブ
struct UnusedVendorApi;

#[async_trait::async_trait]
impl VendorApi for UnusedVendorApi {
    async fn forward(
        &self,
        _endpoint: VendorEndpoint,
        _credentials: &ApiCredentials,
        _payload: &Value,
    ) -> Result<Value, VendorApiError> {
        unreachable!("ヘルスチェックでベンダー API は呼ばれない");
    }
}

/// レイヤー構成込みの実アプリケーションを構築する
fn test_app() -> Router {
    let vendor: Arc<dyn VendorApi> = Arc::new(UnusedVendorApi);
    let proxy_state = Arc::new(ProxyState { vendor });
    let notify_state = Arc::new(NotifyState {
        sender:   None,
        renderer: TemplateRenderer::new().unwrap(),
        clock:    Arc::new(SystemClock),
    });

    build_app(proxy_state, notify_state)
}

#[tokio::test]
async fn test_レスポンスにx_request_idヘッダーが含まれる() {
    let app = test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(
        response.headers().contains_key("x-request-id"),
        "レスポンスに x-request-id ヘッダーが含まれること"
    );
}

#[tokio::test]
async fn test_クライアント提供のx_request_idがそのまま返される() {
    let app = test_app();
    let custom_id = "client-provided-request-id-123";

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .header("x-request-id", custom_id)
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get("x-request-id")
            .unwrap()
            .to_str()
            .unwrap(),
        custom_id,
        "クライアント提供の Request ID がそのまま返されること"
    );
}

#[tokio::test]
async fn test_自動生成のx_request_idがuuid_v7形式である() {
    let app = test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let request_id = response
        .headers()
        .get("x-request-id")
        .unwrap()
        .to_str()
        .unwrap();

    let uuid = uuid::Uuid::parse_str(request_id)
        .unwrap_or_else(|_| panic!("有効な UUID であること: {request_id}"));
    assert_eq!(
        uuid.get_version(),
        Some(uuid::Version::SortRand),
        "UUID v7（SortRand）であること"
    );
}
