//! # ビジネスイベントログとエラーコンテキストの構造化ヘルパー
//!
//! 運用時に `jq` で効率的に調査できるよう、ログフィールドの命名規約と
//! ヘルパーマクロを提供する。
//!
//! ## ビジネスイベント
//!
//! [`log_business_event!`] マクロで出力する。`event.kind = "business_event"` マーカーが
//! 自動付与され、`jq 'select(.["event.kind"] == "business_event")'` でフィルタできる。
//!
//! ## エラーコンテキスト
//!
//! 既存の `tracing::error!` に `error.category` + `error.kind` フィールドを直接追加する。
//! 定数は [`error`] モジュールで提供。
//!
//! ## フィールド命名規約
//!
//! ドット記法（`event.category`、`error.kind`）を使用。tracing の
//! `$($field:ident).+` パターンでサポートされ、JSON 出力でフラットなキーになる。

/// ビジネスイベントを構造化ログとして出力する。
///
/// `event.kind = "business_event"` マーカーを自動付与し、
/// `tracing::info!` レベルで出力する。
///
/// ## 必須フィールド（慣例）
///
/// - `event.category`: イベントカテゴリ（[`event::category`] の定数を使用）
/// - `event.action`: アクション名（[`event::action`] の定数を使用）
/// - `event.result`: 結果（[`event::result`] の定数を使用）
#[macro_export]
macro_rules! log_business_event {
    ($($args:tt)*) => {
        ::tracing::info!(
            event.kind = "business_event",
            $($args)*
        )
    };
}

/// イベントフィールドの定数
pub mod event {
    /// イベントカテゴリ
    pub mod category {
        pub const PROXY: &str = "proxy";
        pub const NOTIFICATION: &str = "notification";
    }

    /// イベントアクション
    pub mod action {
        // プロキシ
        pub const PROXY_FORWARDED: &str = "proxy.forwarded";
        pub const PROXY_REJECTED: &str = "proxy.rejected";

        // 通知
        pub const NOTIFICATION_SENT: &str = "notification.sent";
        pub const NOTIFICATION_FAILED: &str = "notification.failed";
    }

    /// イベント結果
    pub mod result {
        pub const SUCCESS: &str = "success";
        pub const FAILURE: &str = "failure";
    }
}

/// エラーコンテキストフィールドの定数
pub mod error {
    /// エラーカテゴリ
    pub mod category {
        /// 外部サービス呼び出し（ベンダー API、Resend）
        pub const EXTERNAL_SERVICE: &str = "external_service";
        /// 設定不備（環境変数の未設定など）
        pub const CONFIGURATION: &str = "configuration";
        /// ゲートウェイ内部（テンプレートレンダリングなど）
        pub const INTERNAL: &str = "internal";
    }

    /// エラー種別
    pub mod kind {
        pub const VENDOR_API: &str = "vendor_api";
        pub const MAIL_PROVIDER: &str = "mail_provider";
        pub const MISSING_API_KEY: &str = "missing_api_key";
        pub const TEMPLATE: &str = "template";
    }
}
