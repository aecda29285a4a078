//! # エラーレスポンス生成
//!
//! ハンドラが返すエラーレスポンスをここに集約する。
//! ボディは共通の `ErrorBody` 形式で、CORS ヘッダーの付与方針が
//! プロキシ用と通知用で異なる。
//!
//! ## 設計方針
//!
//! - **プロキシ用**: 解決済みオリジンを反映した CORS ヘッダーを付与する。
//!   ただしオリジン拒否（403）だけは CORS ヘッダーなしで返す
//! - **通知用**: 常に全オリジン許可（`*`）
//! - **上流の失敗は抽象化**: 接続エラーの詳細はログにのみ残し、
//!   レスポンスには固定メッセージを返す

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use datajam_domain::endpoint::VendorEndpoint;
use datajam_shared::ErrorBody;

use crate::cors;

// --- プロキシ用レスポンス ---

/// 405 Method Not Allowed
pub fn method_not_allowed_response(allow_origin: &str) -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        cors::cors_headers(allow_origin),
        Json(ErrorBody::method_not_allowed()),
    )
        .into_response()
}

/// 400 Bad Request（JSON として解釈できないボディ）
pub fn invalid_body_response(allow_origin: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        cors::cors_headers(allow_origin),
        Json(ErrorBody::invalid_request_body()),
    )
        .into_response()
}

/// 400 Bad Request（未知のエンドポイント名）
///
/// `details` に有効なエンドポイント名の一覧を含める。
pub fn invalid_endpoint_response(allow_origin: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        cors::cors_headers(allow_origin),
        Json(ErrorBody::invalid_endpoint().with_details(VendorEndpoint::allowed_names())),
    )
        .into_response()
}

/// 400 Bad Request（資格情報の形式不正）
pub fn invalid_credentials_response(allow_origin: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        cors::cors_headers(allow_origin),
        Json(ErrorBody::invalid_credentials()),
    )
        .into_response()
}

/// 403 Forbidden（許可リスト外のオリジン）
///
/// CORS ヘッダーを意図的に付けない。ブラウザはレスポンスボディを
/// 読めず、CORS エラーとして失敗する。
pub fn origin_forbidden_response() -> Response {
    (StatusCode::FORBIDDEN, Json(ErrorBody::origin_not_allowed())).into_response()
}

/// 500 Internal Server Error（ベンダー API への転送失敗）
pub fn proxy_failed_response(allow_origin: &str) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        cors::cors_headers(allow_origin),
        Json(ErrorBody::proxy_failed()),
    )
        .into_response()
}

// --- 通知用レスポンス ---

/// 405 Method Not Allowed
pub fn notify_method_not_allowed_response() -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        cors::permissive_headers(),
        Json(ErrorBody::method_not_allowed()),
    )
        .into_response()
}

/// 400 Bad Request（JSON として解釈できないボディ）
pub fn notify_invalid_body_response() -> Response {
    (
        StatusCode::BAD_REQUEST,
        cors::permissive_headers(),
        Json(ErrorBody::invalid_request_body()),
    )
        .into_response()
}

/// 400 Bad Request（メールアドレス未指定）
pub fn email_required_response() -> Response {
    (
        StatusCode::BAD_REQUEST,
        cors::permissive_headers(),
        Json(ErrorBody::email_required()),
    )
        .into_response()
}

/// 500 Internal Server Error（メール送信サービス未設定）
pub fn email_not_configured_response() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        cors::permissive_headers(),
        Json(ErrorBody::email_service_not_configured()),
    )
        .into_response()
}

/// 500 Internal Server Error（メール送信失敗）
pub fn notification_failed_response() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        cors::permissive_headers(),
        Json(ErrorBody::notification_failed()),
    )
        .into_response()
}

/// 500 Internal Server Error（テンプレート描画等の内部エラー）
pub fn internal_error_response() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        cors::permissive_headers(),
        Json(ErrorBody::internal_error()),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use axum::http::header;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_プロキシ用レスポンスは解決済みオリジンを反映する() {
        let response = method_not_allowed_response("http://localhost:8888");

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .unwrap(),
            "http://localhost:8888"
        );
    }

    #[test]
    fn test_オリジン拒否レスポンスにcorsヘッダーが付かない() {
        let response = origin_forbidden_response();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .is_none()
        );
    }

    #[test]
    fn test_通知用レスポンスは全オリジンを許可する() {
        let response = email_required_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .unwrap(),
            "*"
        );
    }
}
