//! # Data Jam ゲートウェイ ドメイン層
//!
//! ゲートウェイのビジネスルールを定義する。
//!
//! ## 設計方針
//!
//! このクレートはゲートウェイが守るべき不変条件を型で表現する:
//!
//! - **値オブジェクト**: 検証済みであることを型で保証する（例:
//!   [`credentials::ApiCredentials`]）
//! - **閉じた列挙**: 許可リストを enum で表現し、リスト外の値が
//!   型として存在できないようにする（例: [`endpoint::VendorEndpoint`]）
//! - **ドメインエラー**: 検証失敗を表現するエラー型
//!
//! ## 依存関係の方向
//!
//! ```text
//! gateway → infra → domain
//! ```
//!
//! ドメイン層はインフラ層（HTTP クライアント、メールプロバイダ）に一切依存しない。
//!
//! ## モジュール構成
//!
//! - [`clock`] - テスト注入可能な時刻プロバイダ
//! - [`credentials`] - ベンダー API 認証情報の値オブジェクト
//! - [`endpoint`] - ベンダー API エンドポイントの許可リスト
//! - [`notification`] - 訪問者通知のドメインモデル
//! - [`origin`] - ブラウザオリジンの許可リスト

pub mod clock;
pub mod credentials;
pub mod endpoint;
pub mod notification;
pub mod origin;

/// 機密値の Debug 出力に使うマスク文字列
pub const REDACTED: &str = "[REDACTED]";
