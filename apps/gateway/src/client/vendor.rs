//! # ベンダー API クライアント
//!
//! センサーデータポータルのベンダー API へリクエストを転送する。
//!
//! ## 接続先 API 仕様
//!
//! - エンドポイント: `{base_url}/CustomerAPI/{操作名}/`
//! - 認証: Basic 認証（呼び出し元から預かった `identity:secret` を
//!   base64 エンコードして送る）
//! - HTTP メソッド: `AddData` のみ POST、それ以外は GET。
//!   GET でも JSON ボディを送る必要がある（ベンダー API の仕様）
//! - レスポンス: 成功・失敗を問わずボディをそのまま中継する
//!
//! ## 設計方針
//!
//! - **TLS 検証の無効化はこのクライアントに閉じる**: ベンダー API の証明書
//!   チェーンが不完全なため検証を無効化するが、影響範囲をこのクライアント
//!   専用の `reqwest::Client` に限定する
//! - **上流ステータスの透過**: 上流が 4xx/5xx を返してもボディを中継する。
//!   エラーを返すのはネットワーク層の失敗のみ

use std::time::Duration;

use async_trait::async_trait;
use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use datajam_domain::{
    credentials::ApiCredentials,
    endpoint::{UpstreamMethod, VendorEndpoint},
};
use reqwest::{Method, header};
use serde_json::{Value, json};
use thiserror::Error;

/// ベンダー API への接続タイムアウト
const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, Error)]
pub enum VendorApiError {
    #[error("ベンダー API への接続がタイムアウトしました")]
    Timeout,

    #[error("ベンダー API への接続に失敗しました: {0}")]
    Network(String),

    #[error("リクエストの構築に失敗しました: {0}")]
    RequestBuild(String),
}

impl From<reqwest::Error> for VendorApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::Timeout
        } else {
            Self::Network(e.to_string())
        }
    }
}

/// ベンダー API 転送のインターフェース
///
/// テストではモックに差し替える。
#[async_trait]
pub trait VendorApi: Send + Sync {
    /// リクエストをベンダー API へ転送し、レスポンスボディを JSON で返す
    async fn forward(
        &self,
        endpoint: VendorEndpoint,
        credentials: &ApiCredentials,
        payload: &Value,
    ) -> Result<Value, VendorApiError>;
}

/// reqwest によるベンダー API クライアント
pub struct VendorApiClient {
    base_url: String,
    client:   reqwest::Client,
}

impl VendorApiClient {
    /// 新しいクライアントインスタンスを作成
    pub fn new(base_url: &str) -> Result<Self, VendorApiError> {
        let client = reqwest::Client::builder()
            .danger_accept_invalid_certs(true)
            .timeout(UPSTREAM_TIMEOUT)
            .build()
            .map_err(|e| VendorApiError::RequestBuild(e.to_string()))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn build_request(
        &self,
        endpoint: VendorEndpoint,
        credentials: &ApiCredentials,
        payload: &Value,
    ) -> Result<reqwest::Request, VendorApiError> {
        let url = format!("{}{}", self.base_url, endpoint.path());
        let method = match endpoint.upstream_method() {
            UpstreamMethod::Get => Method::GET,
            UpstreamMethod::Post => Method::POST,
        };
        let body = serde_json::to_vec(payload)
            .map_err(|e| VendorApiError::RequestBuild(e.to_string()))?;

        self.client
            .request(method, url)
            .header(
                header::AUTHORIZATION,
                format!("Basic {}", BASE64.encode(credentials.as_str())),
            )
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::CONTENT_LENGTH, body.len())
            .body(body)
            .build()
            .map_err(|e| VendorApiError::RequestBuild(e.to_string()))
    }
}

#[async_trait]
impl VendorApi for VendorApiClient {
    async fn forward(
        &self,
        endpoint: VendorEndpoint,
        credentials: &ApiCredentials,
        payload: &Value,
    ) -> Result<Value, VendorApiError> {
        let request = self.build_request(endpoint, credentials, payload)?;
        let response = self.client.execute(request).await?;

        relay_body(response).await
    }
}

/// 上流レスポンスのボディを JSON として中継する
///
/// JSON として解釈できないボディは `{"raw": <本文>}` に包んで返す。
async fn relay_body(response: reqwest::Response) -> Result<Value, VendorApiError> {
    let text = response.text().await?;

    Ok(serde_json::from_str(&text).unwrap_or_else(|_| json!({ "raw": text })))
}
