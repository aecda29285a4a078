//! # Data Jam ゲートウェイ インフラ層
//!
//! 外部システムとの接続・通信を担当するインフラストラクチャ層。
//!
//! ## 設計方針
//!
//! このクレートはドメイン層が要求する送信インターフェースの具体実装を提供する。
//! 外部プロバイダの REST API の詳細をカプセル化し、ハンドラをプロバイダの
//! 変更から保護する。
//!
//! ## 依存関係
//!
//! ```text
//! gateway → infra → domain
//! ```
//!
//! ドメイン層はインフラ層に依存しない（依存性逆転の原則）。
//!
//! ## モジュール構成
//!
//! - [`notification`] - メール送信トレイトと Resend 実装
//! - [`mock`] - テスト用モック送信器（`test-utils` feature）

pub mod notification;

#[cfg(any(test, feature = "test-utils"))]
pub mod mock;
