//! # 訪問者通知
//!
//! API ドキュメント訪問イベントのメール通知に関するドメインモデルを定義する。
//!
//! ## ドメイン用語
//!
//! | 型 | ドメイン用語 | 用途 |
//! |---|------------|------|
//! | [`VisitorNotification`] | 訪問イベント | ドキュメントサイトからの通知リクエスト |
//! | [`EmailMessage`] | メールメッセージ | テンプレートレンダリングの出力 |
//! | [`SendReceipt`] | 送信受理 | メールプロバイダが発行した送信 ID |
//!
//! ## 設計方針
//!
//! - **テンプレート分離**: 訪問イベントとメール生成は分離する
//!   （レンダリングはゲートウェイ側の TemplateRenderer が担当）
//! - **送信結果の透過**: 送信の成否はハンドラがそのまま HTTP
//!   レスポンスに反映する（fire-and-forget にしない）

use thiserror::Error;

/// 通知送信エラー
#[derive(Debug, Clone, Error)]
pub enum NotificationError {
    /// メール送信に失敗
    #[error("メール送信に失敗: {0}")]
    SendFailed(String),

    /// テンプレートレンダリングに失敗
    #[error("テンプレートレンダリングに失敗: {0}")]
    TemplateFailed(String),
}

/// API ドキュメント訪問イベント
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitorNotification {
    /// 訪問者のメールアドレス
    pub email:      String,
    /// 訪問者のブラウザ User-Agent（取得できない場合は `None`）
    pub user_agent: Option<String>,
}

impl VisitorNotification {
    /// 通知メールの件名
    pub fn subject(&self) -> String {
        format!("New API Docs Visitor: {}", self.email)
    }

    /// User-Agent の表示用文字列
    ///
    /// 未取得の場合はプレースホルダ `"Unknown"` を返す。
    pub fn user_agent_display(&self) -> &str {
        self.user_agent.as_deref().unwrap_or("Unknown")
    }
}

/// メールメッセージ
///
/// テンプレートレンダリングの出力。NotificationSender に渡される。
#[derive(Debug, Clone)]
pub struct EmailMessage {
    /// 送信元（表示名付きアドレス）
    pub from:      String,
    /// 送信先メールアドレス
    pub to:        Vec<String>,
    /// 件名
    pub subject:   String,
    /// HTML 本文
    pub html_body: String,
}

/// メールプロバイダが発行した送信受理の識別子
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendReceipt {
    pub id: String,
}
