//! # テスト用モック送信器
//!
//! ハンドラテストで使用するインメモリのメール送信器。
//! `test-utils` feature を有効にすることで、他クレートからも利用可能。
//!
//! ```toml
//! [dev-dependencies]
//! datajam-infra = { workspace = true, features = ["test-utils"] }
//! ```

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use datajam_domain::notification::{EmailMessage, NotificationError, SendReceipt};

use crate::notification::NotificationSender;

/// 送信されたメールを記録するモック送信器
///
/// `Clone` してもハンドルは同じ記録を共有する。テスト側はハンドルを
/// 保持しておき、送信後に [`sent_emails`](Self::sent_emails) で検証する。
#[derive(Clone)]
pub struct MockNotificationSender {
    sent:    Arc<Mutex<Vec<EmailMessage>>>,
    outcome: Arc<Mutex<Result<String, String>>>,
}

impl MockNotificationSender {
    /// 常に成功し、固定の送信 ID を返すモックを作成する
    pub fn succeeding(receipt_id: &str) -> Self {
        Self {
            sent:    Arc::new(Mutex::new(Vec::new())),
            outcome: Arc::new(Mutex::new(Ok(receipt_id.to_string()))),
        }
    }

    /// 常に `SendFailed` で失敗するモックを作成する
    pub fn failing(detail: &str) -> Self {
        Self {
            sent:    Arc::new(Mutex::new(Vec::new())),
            outcome: Arc::new(Mutex::new(Err(detail.to_string()))),
        }
    }

    /// これまでに送信されたメールのコピーを返す
    pub fn sent_emails(&self) -> Vec<EmailMessage> {
        self.sent.lock().unwrap().clone()
    }

    /// 送信回数を返す
    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

#[async_trait]
impl NotificationSender for MockNotificationSender {
    async fn send_email(&self, email: &EmailMessage) -> Result<SendReceipt, NotificationError> {
        self.sent.lock().unwrap().push(email.clone());

        match &*self.outcome.lock().unwrap() {
            Ok(id) => Ok(SendReceipt { id: id.clone() }),
            Err(detail) => Err(NotificationError::SendFailed(detail.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn make_email() -> EmailMessage {
        EmailMessage {
            from:      "alert@example.com".to_string(),
            to:        vec!["dev@example.com".to_string()],
            subject:   "subject".to_string(),
            html_body: "<p>body</p>".to_string(),
        }
    }

    #[tokio::test]
    async fn test_succeedingは固定idの受理を返し送信を記録する() {
        let sender = MockNotificationSender::succeeding("re_mock_1");

        let receipt = sender.send_email(&make_email()).await.unwrap();

        assert_eq!(receipt.id, "re_mock_1");
        assert_eq!(sender.sent_count(), 1);
        assert_eq!(sender.sent_emails()[0].subject, "subject");
    }

    #[tokio::test]
    async fn test_failingはsend_failedを返すが送信は記録する() {
        let sender = MockNotificationSender::failing("provider down");

        let error = sender.send_email(&make_email()).await.unwrap_err();

        assert!(matches!(error, NotificationError::SendFailed(_)));
        assert_eq!(sender.sent_count(), 1);
    }

    #[tokio::test]
    async fn test_cloneしたハンドルは記録を共有する() {
        let sender = MockNotificationSender::succeeding("re_mock_1");
        let handle = sender.clone();

        sender.send_email(&make_email()).await.unwrap();

        assert_eq!(handle.sent_count(), 1);
    }
}
