//! # CORS ヘッダー管理
//!
//! プロキシ API はオリジン許可リストで制御し、通知 API は全オリジンを許可する。
//!
//! ## 設計方針
//!
//! - **リクエスト単位の解決**: `Origin` ヘッダーを `ResolvedOrigin` に解決し、
//!   レスポンスの `Access-Control-Allow-Origin` に反映する
//! - **拒否時は CORS ヘッダーを付けない**: 許可リスト外のオリジンには 403 を返し、
//!   ブラウザ側でもレスポンスを読めないようにする

use axum::{
    http::{
        HeaderMap, HeaderName, HeaderValue, StatusCode,
        header::{self, ORIGIN},
    },
    response::{IntoResponse, Response},
};
use datajam_domain::origin::{self, DEFAULT_ALLOWED_ORIGIN};

/// 通知 API が返す全オリジン許可値
pub const ANY_ORIGIN: &str = "*";

/// リクエストの `Origin` ヘッダーを許可リストと突き合わせた結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedOrigin {
    /// 許可リストに含まれるオリジン
    Allowed(String),
    /// `Origin` ヘッダーなし（curl 等の非ブラウザクライアント）
    Absent,
    /// 許可リスト外、または UTF-8 として読めないオリジン
    Denied,
}

impl ResolvedOrigin {
    /// リクエストヘッダーからオリジンを解決する
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let Some(value) = headers.get(ORIGIN) else {
            return Self::Absent;
        };

        match value.to_str() {
            Ok(origin) if origin::is_allowed(origin) => Self::Allowed(origin.to_string()),
            _ => Self::Denied,
        }
    }

    /// `Access-Control-Allow-Origin` に設定する値
    ///
    /// ヘッダーなしの場合は既定オリジンを返す。拒否済みオリジンに対しては
    /// 呼び出し側が 403 を返すため、この値は使われない。
    pub fn allow_origin(&self) -> &str {
        match self {
            Self::Allowed(origin) => origin,
            Self::Absent | Self::Denied => DEFAULT_ALLOWED_ORIGIN,
        }
    }
}

fn allow_origin_value(allow_origin: &str) -> HeaderValue {
    HeaderValue::from_str(allow_origin)
        .unwrap_or_else(|_| HeaderValue::from_static(DEFAULT_ALLOWED_ORIGIN))
}

/// プロキシ API 用の CORS ヘッダー
///
/// オリジンごとに値が変わるため `Vary: Origin` を併せて返す。
pub fn cors_headers(allow_origin: &str) -> [(HeaderName, HeaderValue); 2] {
    [
        (
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            allow_origin_value(allow_origin),
        ),
        (header::VARY, HeaderValue::from_static("Origin")),
    ]
}

/// 通知 API 用の CORS ヘッダー（全オリジン許可）
pub fn permissive_headers() -> [(HeaderName, HeaderValue); 1] {
    [(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static(ANY_ORIGIN),
    )]
}

/// プリフライトリクエスト（OPTIONS）への応答
pub fn preflight_response(allow_origin: &str) -> Response {
    (
        StatusCode::OK,
        [
            (
                header::ACCESS_CONTROL_ALLOW_ORIGIN,
                allow_origin_value(allow_origin),
            ),
            (
                header::ACCESS_CONTROL_ALLOW_METHODS,
                HeaderValue::from_static("POST, OPTIONS"),
            ),
            (
                header::ACCESS_CONTROL_ALLOW_HEADERS,
                HeaderValue::from_static("Content-Type"),
            ),
        ],
    )
        .into_response()
}
