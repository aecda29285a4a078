//! Resend 通知送信実装
//!
//! Resend の REST API（`POST /emails`）を使用してメールを送信する。
//! 認証は Bearer トークン（API キー）。
//!
//! TLS 検証は reqwest の既定のまま有効にする（検証を緩めるのは
//! ベンダー API 専用クライアントだけで、メール送信には及ばない）。

use async_trait::async_trait;
use datajam_domain::notification::{EmailMessage, NotificationError, SendReceipt};
use serde::{Deserialize, Serialize};

use super::NotificationSender;

/// Resend API の既定ベース URL
pub const DEFAULT_RESEND_BASE_URL: &str = "https://api.resend.com";

/// Resend 通知送信
pub struct ResendMailer {
    base_url: String,
    api_key:  String,
    client:   reqwest::Client,
}

/// `POST /emails` のリクエストボディ
#[derive(Debug, Serialize)]
struct SendEmailRequest<'a> {
    from:    &'a str,
    to:      &'a [String],
    subject: &'a str,
    html:    &'a str,
}

/// `POST /emails` の成功レスポンスボディ
#[derive(Debug, Deserialize)]
struct SendEmailResponse {
    id: String,
}

impl ResendMailer {
    /// 新しい Resend 送信インスタンスを作成
    ///
    /// # 引数
    ///
    /// - `base_url`: Resend API のベース URL（テストではスタブに差し替える）
    /// - `api_key`: Resend の API キー
    pub fn new(base_url: &str, api_key: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl NotificationSender for ResendMailer {
    async fn send_email(&self, email: &EmailMessage) -> Result<SendReceipt, NotificationError> {
        let url = format!("{}/emails", self.base_url);
        let request = SendEmailRequest {
            from:    &email.from,
            to:      &email.to,
            subject: &email.subject,
            html:    &email.html_body,
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| NotificationError::SendFailed(format!("Resend への接続に失敗: {e}")))?;

        parse_receipt(response).await
    }
}

/// Resend のレスポンスを送信受理に変換する
///
/// 成功ステータス以外はボディごとエラーに畳み込む（呼び出し側でログに出す）。
async fn parse_receipt(response: reqwest::Response) -> Result<SendReceipt, NotificationError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(NotificationError::SendFailed(format!(
            "Resend がエラーを返しました ({status}): {body}"
        )));
    }

    let body: SendEmailResponse = response.json().await.map_err(|e| {
        NotificationError::SendFailed(format!("Resend レスポンスの解析に失敗: {e}"))
    })?;

    Ok(SendReceipt { id: body.id })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    /// テスト用の偽レスポンスを作成する
    fn make_response(status: u16, body: &str) -> reqwest::Response {
        let http_response = http::Response::builder()
            .status(status)
            .header("content-type", "application/json")
            .body(body.to_string())
            .unwrap();
        reqwest::Response::from(http_response)
    }

    #[test]
    fn test_送信リクエストのシリアライズ形状が正しい() {
        let to = vec![
            "arran@data-jam.com".to_string(),
            "rhea@data-jam.com".to_string(),
        ];
        let request = SendEmailRequest {
            from:    "API ACCESS ALERT <leads@data-jam.com>",
            to:      &to,
            subject: "New API Docs Visitor: visitor@example.com",
            html:    "<p>hello</p>",
        };
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "from":    "API ACCESS ALERT <leads@data-jam.com>",
                "to":      ["arran@data-jam.com", "rhea@data-jam.com"],
                "subject": "New API Docs Visitor: visitor@example.com",
                "html":    "<p>hello</p>"
            })
        );
    }

    #[tokio::test]
    async fn test_成功レスポンスから送信idを取り出す() {
        let response = make_response(200, r#"{"id": "re_AbC123"}"#);

        let receipt = parse_receipt(response).await.unwrap();

        assert_eq!(receipt.id, "re_AbC123");
    }

    #[tokio::test]
    async fn test_エラーステータスはsend_failedになる() {
        let response = make_response(422, r#"{"message": "Invalid from address"}"#);

        let error = parse_receipt(response).await.unwrap_err();

        // ステータスとプロバイダのボディがログ用の詳細に含まれる
        let NotificationError::SendFailed(detail) = error else {
            panic!("SendFailed であること: {error:?}");
        };
        assert!(detail.contains("422"));
        assert!(detail.contains("Invalid from address"));
    }

    #[tokio::test]
    async fn test_idを含まない成功レスポンスはsend_failedになる() {
        let response = make_response(200, r#"{"unexpected": true}"#);

        assert!(parse_receipt(response).await.is_err());
    }

    #[test]
    fn test_ベースurlの末尾スラッシュは取り除かれる() {
        let mailer = ResendMailer::new("https://api.resend.com/", "re_key".to_string());

        assert_eq!(mailer.base_url, "https://api.resend.com");
    }

    #[test]
    fn test_送信器はsendとsyncを実装している() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ResendMailer>();
    }
}
