//! # Data Jam ゲートウェイ ライブラリ
//!
//! バイナリ（`main.rs`）と統合テストの両方から利用するモジュールを公開する。
//!
//! ## モジュール構成
//!
//! - [`app_builder`] - State 注入とルーター構築
//! - [`client`] - ベンダー API クライアント
//! - [`cors`] - オリジン検証と CORS ヘッダー構築
//! - [`error`] - エラーレスポンスヘルパー
//! - [`handler`] - HTTP リクエストハンドラ
//! - [`template`] - 通知メールテンプレート

pub mod app_builder;
pub mod client;
pub mod cors;
pub mod error;
pub mod handler;
pub mod template;
