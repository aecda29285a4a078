//! # Data Jam API ゲートウェイサーバー
//!
//! API ドキュメントサイト専用のゲートウェイサーバー。
//!
//! ## 役割
//!
//! ゲートウェイはブラウザ（API ドキュメントサイト）とベンダー API の間に
//! 位置し、以下の責務を担う:
//!
//! - **API プロキシ**: ブラウザから直接呼べないベンダー API への中継と
//!   CORS 制御
//! - **資格情報の中継**: 呼び出し元から預かった資格情報を Basic 認証
//!   ヘッダーに変換して上流へ渡す（検証・保存はしない）
//! - **TLS 検証の隔離**: 証明書チェーンが不完全なベンダー API への接続を
//!   ゲートウェイ内に閉じ込める
//! - **訪問者通知**: ドキュメント閲覧開始を運用チームへメールで知らせる
//!
//! ## アーキテクチャ
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌───────────────────┐
//! │   Browser    │────▶│   Gateway    │────▶│    Vendor API     │
//! │  (API Docs)  │     │  /api/proxy  │     │ datajamportal.com │
//! └──────────────┘     │  /api/notify │     └───────────────────┘
//!                      └──────┬───────┘
//!                             │
//!                             ▼
//!                      ┌──────────────┐
//!                      │    Resend    │
//!                      │ (Email API)  │
//!                      └──────────────┘
//! ```
//!
//! ## 環境変数
//!
//! ポート番号は `.env` ファイルで設定する。
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `GATEWAY_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `GATEWAY_PORT` | **Yes** | ポート番号 |
//! | `VENDOR_API_URL` | No | ベンダー API のベース URL（デフォルト: `https://datajamportal.com`） |
//! | `RESEND_API_URL` | No | Resend API のベース URL（デフォルト: `https://api.resend.com`） |
//! | `RESEND_API_KEY` | No | Resend API キー（未設定時は通知エンドポイントが 500 を返す） |
//! | `LOG_FORMAT` | No | ログ形式（`json` / `pretty`、デフォルト: `pretty`） |
//!
//! ## 起動方法
//!
//! ```bash
//! # 開発環境（.env ファイルを使用）
//! cargo run -p datajam-gateway
//!
//! # 本番環境（環境変数を直接指定）
//! GATEWAY_PORT=3000 RESEND_API_KEY=re_... cargo run -p datajam-gateway --release
//! ```

mod config;

use std::{net::SocketAddr, sync::Arc};

use config::GatewayConfig;
use datajam_domain::clock::SystemClock;
use datajam_gateway::{
    app_builder::build_app,
    client::VendorApiClient,
    handler::{NotifyState, ProxyState},
    template::TemplateRenderer,
};
use datajam_infra::notification::{NotificationSender, ResendMailer};
use datajam_shared::observability::TracingConfig;
use tokio::net::TcpListener;

/// ゲートウェイサーバーのエントリーポイント
///
/// 以下の順序で初期化を行う:
///
/// 1. 環境変数の読み込み（.env ファイル）
/// 2. トレーシングの初期化
/// 3. アプリケーション設定の読み込み
/// 4. ルーターの構築
/// 5. HTTP サーバーの起動
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    // 本番環境では .env ファイルは使用せず、環境変数を直接設定する
    dotenvy::dotenv().ok();

    // トレーシング初期化
    let tracing_config = TracingConfig::from_env("gateway");
    datajam_shared::observability::init_tracing(tracing_config);
    let _tracing_guard = tracing::info_span!("app", service = "gateway").entered();

    // 設定読み込み
    let config = GatewayConfig::from_env().expect("設定の読み込みに失敗しました");

    tracing::info!("ゲートウェイサーバーを起動します: {}:{}", config.host, config.port);

    // 依存関係の初期化
    // 具象型で構築し、State 注入時にトレイトオブジェクトへ coerce する
    let vendor_client = VendorApiClient::new(&config.vendor_base_url)
        .expect("ベンダー API クライアントの構築に失敗しました");

    // 通知送信器は API キーがあるときだけ構築する
    // 未設定でも起動は継続し、通知エンドポイントが 500 を返す
    let sender: Option<Arc<dyn NotificationSender>> = match &config.resend_api_key {
        Some(api_key) => Some(Arc::new(ResendMailer::new(
            &config.resend_base_url,
            api_key.clone(),
        ))),
        None => {
            tracing::warn!("RESEND_API_KEY が未設定のため、通知エンドポイントは 500 を返します");
            None
        }
    };

    let renderer = TemplateRenderer::new().expect("通知メールテンプレートの読み込みに失敗しました");

    let proxy_state = Arc::new(ProxyState {
        vendor: Arc::new(vendor_client),
    });
    let notify_state = Arc::new(NotifyState {
        sender,
        renderer,
        clock: Arc::new(SystemClock),
    });

    // ルーター構築
    let app = build_app(proxy_state, notify_state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .expect("アドレスのパースに失敗しました");

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("ゲートウェイサーバーが起動しました: {}", addr);

    // Graceful shutdown は axum::serve が自動的に処理する
    axum::serve(listener, app).await?;

    Ok(())
}
