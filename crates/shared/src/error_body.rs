//! # エラーレスポンスボディ
//!
//! 両ハンドラ共通の `{"error": "..."}` 形式のレスポンスボディを提供する。
//!
//! ## 設計
//!
//! - `ErrorBody` は純粋なデータ構造（`Serialize` / `Deserialize` のみ）
//! - axum の `IntoResponse` 変換はゲートウェイ側の責務（shared に axum 依存を入れない）
//! - クライアントへ返すメッセージは短い固定文言のみ。例外の内容や上流のエラー詳細は
//!   サーバーログに出力し、レスポンスには含めない
//! - `details` は静的な補足（許可エンドポイント一覧など）に限って使用する

use serde::{Deserialize, Serialize};

/// エラーレスポンスボディ
///
/// すべてのエラーレスポンスで統一された `{"error": "...", "details"?: "..."}` 形式。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error:   String,
    /// 静的な補足メッセージ（存在する場合のみシリアライズされる）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorBody {
    /// 汎用コンストラクタ
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error:   message.into(),
            details: None,
        }
    }

    /// 静的な補足メッセージを付加する
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// 405 Method Not Allowed
    pub fn method_not_allowed() -> Self {
        Self::new("Method not allowed")
    }

    /// 400 リクエストボディが JSON として解析できない
    pub fn invalid_request_body() -> Self {
        Self::new("Invalid request body")
    }

    /// 400 エンドポイントが許可リスト外
    pub fn invalid_endpoint() -> Self {
        Self::new("Invalid endpoint")
    }

    /// 400 認証情報が形式不正
    pub fn invalid_credentials() -> Self {
        Self::new("Invalid credentials")
    }

    /// 403 オリジンが許可リスト外
    pub fn origin_not_allowed() -> Self {
        Self::new("Origin not allowed")
    }

    /// 500 上流転送の失敗（詳細はログのみ）
    pub fn proxy_failed() -> Self {
        Self::new("Proxy request failed")
    }

    /// 400 メールアドレス未指定
    pub fn email_required() -> Self {
        Self::new("Email required")
    }

    /// 500 メール API キー未設定
    pub fn email_service_not_configured() -> Self {
        Self::new("Email service not configured")
    }

    /// 500 メール送信の失敗（詳細はログのみ）
    pub fn notification_failed() -> Self {
        Self::new("Failed to send notification")
    }

    /// 500 Internal Server Error
    pub fn internal_error() -> Self {
        Self::new("Internal server error")
    }
}
