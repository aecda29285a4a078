//! # 通知送信
//!
//! メール通知の送信を担当するインフラストラクチャモジュール。
//!
//! ## 設計方針
//!
//! - **trait による抽象化**: `NotificationSender` trait でメール送信を抽象化
//! - **Resend 実装**: 本番は Resend の REST API 経由で送信する
//! - **受理 ID の透過**: プロバイダが発行する送信 ID をハンドラまで返す
//!   （レスポンスの `id` フィールドになる）

mod resend;

use async_trait::async_trait;
use datajam_domain::notification::{EmailMessage, NotificationError, SendReceipt};
pub use resend::{DEFAULT_RESEND_BASE_URL, ResendMailer};

/// メール送信トレイト
///
/// 通知基盤の中核。メール送信の具体的な方法を抽象化する。
/// 送信に成功した場合はプロバイダ発行の送信 ID を返す。
#[async_trait]
pub trait NotificationSender: Send + Sync {
    /// メールを送信する
    async fn send_email(&self, email: &EmailMessage) -> Result<SendReceipt, NotificationError>;
}
