//! # ゲートウェイ設定
//!
//! 環境変数からゲートウェイサーバーの設定を読み込む。

use std::env;

use datajam_infra::notification::DEFAULT_RESEND_BASE_URL;

/// ベンダー API の既定 URL
const DEFAULT_VENDOR_BASE_URL: &str = "https://datajamportal.com";

/// ゲートウェイサーバーの設定
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// バインドアドレス
    pub host:            String,
    /// ポート番号
    pub port:            u16,
    /// ベンダー API のベース URL
    pub vendor_base_url: String,
    /// Resend API のベース URL
    pub resend_base_url: String,
    /// Resend API キー
    ///
    /// 未設定・空文字のときは `None` になり、通知エンドポイントは
    /// 500 を返す（起動は継続する）。
    pub resend_api_key:  Option<String>,
}

impl GatewayConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Result<Self, env::VarError> {
        Ok(Self {
            host: env::var("GATEWAY_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("GATEWAY_PORT")
                .expect("GATEWAY_PORT が設定されていません（.env を確認してください）")
                .parse()
                .expect("GATEWAY_PORT は有効なポート番号である必要があります"),
            vendor_base_url: env::var("VENDOR_API_URL")
                .unwrap_or_else(|_| DEFAULT_VENDOR_BASE_URL.to_string()),
            resend_base_url: env::var("RESEND_API_URL")
                .unwrap_or_else(|_| DEFAULT_RESEND_BASE_URL.to_string()),
            resend_api_key: parse_api_key(env::var("RESEND_API_KEY").ok()),
        })
    }
}

/// `RESEND_API_KEY` の値を解釈する
///
/// 空文字は未設定と同じ扱いにする。
fn parse_api_key(value: Option<String>) -> Option<String> {
    value.filter(|key| !key.is_empty())
}
