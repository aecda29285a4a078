//! # Data Jam ゲートウェイ共有ユーティリティ
//!
//! このクレートは、datajam-gateway
//! ワークスペース全体で使用される共通ユーティリティを提供する。
//!
//! ## 設計方針
//!
//! - 他のすべてのクレート（domain, infra, gateway）から依存される
//! - ビジネスロジックを含まない純粋なユーティリティのみを配置
//! - 外部クレートへの依存は最小限に抑える（tracing 関連は
//!   `observability` フィーチャーの背後に置く）

pub mod error_body;
pub mod event_log;
pub mod health;
pub mod observability;

pub use error_body::ErrorBody;
pub use health::HealthResponse;
