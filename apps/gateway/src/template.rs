//! # 通知メールテンプレート
//!
//! tera テンプレートエンジンで訪問者通知メールの HTML を生成する。
//!
//! ## 設計方針
//!
//! - **`include_str!` によるコンパイル時埋め込み**: テンプレートはバイナリに埋め込まれる
//! - **件名パターン**: `New API Docs Visitor: {email}`
//! - **自動エスケープ**: テンプレート名が `.html` のため、訪問者由来の値
//!   （メールアドレス・User-Agent）は tera が HTML エスケープする

use chrono::{DateTime, Utc};
use datajam_domain::notification::{EmailMessage, NotificationError, VisitorNotification};
use tera::{Context, Tera};

/// 通知メールの送信元（Resend で検証済みのドメイン）
pub const FROM_ADDRESS: &str = "API ACCESS ALERT <leads@data-jam.com>";

/// 通知メールの宛先
pub const RECIPIENTS: [&str; 2] = ["arran@data-jam.com", "rhea@data-jam.com"];

/// 訪問時刻の表示形式（例: `Friday 22 August 2025 at 14:30 UTC`）
const TIMESTAMP_FORMAT: &str = "%A %-d %B %Y at %H:%M UTC";

/// テンプレートレンダラー
///
/// tera テンプレートエンジンをラップし、`VisitorNotification` から
/// `EmailMessage` を生成する。
pub struct TemplateRenderer {
    engine: Tera,
}

impl TemplateRenderer {
    /// 新しいレンダラーインスタンスを作成
    ///
    /// `include_str!` で埋め込んだテンプレートを tera に登録する。
    pub fn new() -> Result<Self, NotificationError> {
        let mut engine = Tera::default();

        engine
            .add_raw_templates(vec![(
                "visitor_alert.html",
                include_str!("../templates/notifications/visitor_alert.html"),
            )])
            .map_err(|e| NotificationError::TemplateFailed(e.to_string()))?;

        Ok(Self { engine })
    }

    /// 訪問イベントからメールメッセージを生成する
    ///
    /// # 引数
    ///
    /// - `notification`: 訪問イベント
    /// - `visited_at`: 訪問時刻（ハンドラが Clock から取得して渡す）
    pub fn render(
        &self,
        notification: &VisitorNotification,
        visited_at: DateTime<Utc>,
    ) -> Result<EmailMessage, NotificationError> {
        let mut context = Context::new();
        context.insert("email", &notification.email);
        context.insert("timestamp", &visited_at.format(TIMESTAMP_FORMAT).to_string());
        context.insert("user_agent", notification.user_agent_display());

        let html_body = self
            .engine
            .render("visitor_alert.html", &context)
            .map_err(|e| NotificationError::TemplateFailed(e.to_string()))?;

        Ok(EmailMessage {
            from:    FROM_ADDRESS.to_string(),
            to:      RECIPIENTS.map(String::from).into(),
            subject: notification.subject(),
            html_body,
        })
    }
}
