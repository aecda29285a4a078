//! # 訪問者通知ハンドラ
//!
//! API ドキュメントの閲覧開始を運用チームへメールで知らせる。
//!
//! ## 処理の流れ
//!
//! 1. OPTIONS はプリフライト応答、POST 以外は 405
//! 2. ボディからメールアドレスと User-Agent を取り出す
//! 3. テンプレートから通知メールを生成し、Resend 経由で送信する
//!
//! ## 設計方針
//!
//! - **未設定でも起動は継続**: `RESEND_API_KEY` 未設定時は送信器が `None` に
//!   なり、このハンドラが 500 を返す。外部への接続は一切行わない
//! - **公開エンドポイント**: ドキュメントサイトの配信元が多様なため
//!   全オリジンを許可する

use std::sync::Arc;

use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
};
use datajam_domain::{clock::Clock, notification::VisitorNotification};
use datajam_infra::notification::NotificationSender;
use datajam_shared::{event_log::event, log_business_event};
use serde::{Deserialize, Serialize};

use crate::{
    cors,
    error::{
        email_not_configured_response, email_required_response, internal_error_response,
        notification_failed_response, notify_invalid_body_response,
        notify_method_not_allowed_response,
    },
    template::TemplateRenderer,
};

/// 通知ハンドラの共有状態
pub struct NotifyState {
    pub sender:   Option<Arc<dyn NotificationSender>>,
    pub renderer: TemplateRenderer,
    pub clock:    Arc<dyn Clock>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct NotifyRequest {
    email:      Option<String>,
    user_agent: Option<String>,
}

#[derive(Debug, Serialize)]
struct NotifyResponse {
    success: bool,
    id:      String,
}

/// 訪問者通知エンドポイント
#[tracing::instrument(skip_all)]
pub async fn notify(
    State(state): State<Arc<NotifyState>>,
    method: Method,
    body: Bytes,
) -> Response {
    if method == Method::OPTIONS {
        return cors::preflight_response(cors::ANY_ORIGIN);
    }
    if method != Method::POST {
        return notify_method_not_allowed_response();
    }

    let request = match serde_json::from_slice::<NotifyRequest>(&body) {
        Ok(request) => request,
        Err(e) => {
            tracing::warn!("リクエストボディを JSON として解釈できません: {}", e);
            return notify_invalid_body_response();
        }
    };

    let Some(email) = request.email.filter(|email| !email.is_empty()) else {
        return email_required_response();
    };

    let Some(sender) = state.sender.as_ref() else {
        tracing::error!(
            error.category = "configuration",
            error.kind = "missing_api_key",
            "RESEND_API_KEY が未設定のため通知を送信できません"
        );
        return email_not_configured_response();
    };

    let notification = VisitorNotification {
        email,
        user_agent: request.user_agent,
    };

    let message = match state.renderer.render(&notification, state.clock.now()) {
        Ok(message) => message,
        Err(e) => {
            tracing::error!(
                error.category = "internal",
                error.kind = "template",
                "通知メールの生成に失敗しました: {}",
                e
            );
            return internal_error_response();
        }
    };

    match sender.send_email(&message).await {
        Ok(receipt) => {
            log_business_event!(
                event.category = event::category::NOTIFICATION,
                event.action = event::action::NOTIFICATION_SENT,
                event.result = event::result::SUCCESS,
                notification.recipient_count = message.to.len(),
                "訪問者通知メールを送信しました"
            );
            (
                StatusCode::OK,
                cors::permissive_headers(),
                Json(NotifyResponse {
                    success: true,
                    id:      receipt.id,
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(
                error.category = "external_service",
                error.kind = "mail_provider",
                "通知メールの送信に失敗しました: {}",
                e
            );
            log_business_event!(
                event.category = event::category::NOTIFICATION,
                event.action = event::action::NOTIFICATION_FAILED,
                event.result = event::result::FAILURE,
                "訪問者通知メールを送信できませんでした"
            );
            notification_failed_response()
        }
    }
}
