//! # プロキシハンドラ
//!
//! ブラウザからのリクエストをベンダー API へ転送する。
//!
//! ## 処理の流れ
//!
//! 1. `Origin` ヘッダーを許可リストと突き合わせる
//! 2. OPTIONS はプリフライト応答、POST 以外は 405
//! 3. 許可リスト外のオリジンは 403（CORS ヘッダーなし）
//! 4. ボディを検証し、エンドポイント名と資格情報を解決する
//! 5. ベンダー API へ転送し、上流のボディを 200 で中継する
//!
//! ## 設計方針
//!
//! - **上流ステータスの隠蔽**: 上流の成否はボディの中身で判断させる。
//!   ゲートウェイがエラーステータスを返すのは自身の検証・接続失敗のみ
//! - **資格情報は預かるだけ**: 検証・保存はせず、形式チェックのみ行って
//!   Basic 認証ヘッダーとして上流へ渡す

use std::sync::Arc;

use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::{HeaderMap, Method, StatusCode},
    response::{IntoResponse, Response},
};
use datajam_domain::{credentials::ApiCredentials, endpoint::VendorEndpoint};
use datajam_shared::{event_log::event, log_business_event};
use serde::Deserialize;
use serde_json::Value;

use crate::{
    client::VendorApi,
    cors::{self, ResolvedOrigin},
    error::{
        invalid_body_response, invalid_credentials_response, invalid_endpoint_response,
        method_not_allowed_response, origin_forbidden_response, proxy_failed_response,
    },
};

/// プロキシハンドラの共有状態
pub struct ProxyState {
    pub vendor: Arc<dyn VendorApi>,
}

#[derive(Debug, Deserialize)]
struct ProxyRequest {
    endpoint:    Option<String>,
    credentials: Option<String>,
    #[serde(default)]
    payload:     Value,
}

/// プロキシエンドポイント
#[tracing::instrument(skip_all)]
pub async fn proxy(
    State(state): State<Arc<ProxyState>>,
    method: Method,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let origin = ResolvedOrigin::from_headers(&headers);

    if method == Method::OPTIONS {
        return cors::preflight_response(origin.allow_origin());
    }
    if method != Method::POST {
        return method_not_allowed_response(origin.allow_origin());
    }

    if origin == ResolvedOrigin::Denied {
        log_business_event!(
            event.category = event::category::PROXY,
            event.action = event::action::PROXY_REJECTED,
            event.result = event::result::FAILURE,
            "許可リスト外のオリジンからのリクエストを拒否しました"
        );
        return origin_forbidden_response();
    }
    let allow_origin = origin.allow_origin();

    let request = match serde_json::from_slice::<ProxyRequest>(&body) {
        Ok(request) => request,
        Err(e) => {
            tracing::warn!("リクエストボディを JSON として解釈できません: {}", e);
            return invalid_body_response(allow_origin);
        }
    };

    let Some(Ok(endpoint)) = request.endpoint.as_deref().map(str::parse::<VendorEndpoint>) else {
        return invalid_endpoint_response(allow_origin);
    };

    let Some(Ok(credentials)) = request.credentials.as_deref().map(ApiCredentials::parse) else {
        return invalid_credentials_response(allow_origin);
    };

    match state.vendor.forward(endpoint, &credentials, &request.payload).await {
        Ok(upstream) => {
            log_business_event!(
                event.category = event::category::PROXY,
                event.action = event::action::PROXY_FORWARDED,
                event.result = event::result::SUCCESS,
                endpoint = %endpoint,
                "ベンダー API への転送が完了しました"
            );
            (
                StatusCode::OK,
                cors::cors_headers(allow_origin),
                Json(upstream),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(
                error.category = "external_service",
                error.kind = "vendor_api",
                endpoint = %endpoint,
                "ベンダー API への転送に失敗しました: {}",
                e
            );
            proxy_failed_response(allow_origin)
        }
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::client::VendorApiError;

    struct EchoVendorApi;

    #[async_trait]
    impl VendorApi for EchoVendorApi {
        async fn forward(
            &self,
            endpoint: VendorEndpoint,
            _credentials: &ApiCredentials,
            payload: &Value,
        ) -> Result<Value, VendorApiError> {
            Ok(json!({ "endpoint": endpoint.to_string(), "payload": payload }))
        }
    }

    fn make_state() -> State<Arc<ProxyState>> {
        State(Arc::new(ProxyState {
            vendor: Arc::new(EchoVendorApi),
        }))
    }

    #[tokio::test]
    async fn test_未知のエンドポイント名は400になる() {
        let body = Bytes::from(
            serde_json::to_vec(&json!({
                "endpoint": "DropTables",
                "credentials": "user:pass"
            }))
            .unwrap(),
        );

        let response = proxy(make_state(), Method::POST, HeaderMap::new(), body).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_検証を通過したリクエストは転送される() {
        let body = Bytes::from(
            serde_json::to_vec(&json!({
                "endpoint": "GetData",
                "credentials": "user:pass",
                "payload": { "DeviceID": 7 }
            }))
            .unwrap(),
        );

        let response = proxy(make_state(), Method::POST, HeaderMap::new(), body).await;

        assert_eq!(response.status(), StatusCode::OK);
    }
}
