//! # ベンダー API 認証情報
//!
//! 呼び出し元が持ち込む `identity:secret` 形式の認証情報を値オブジェクトとして定義する。
//!
//! ## ドメイン用語
//!
//! | 型 | ドメイン用語 | 用途 |
//! |---|------------|------|
//! | [`ApiCredentials`] | ベンダー API 認証情報 | 上流リクエストの Basic 認証ヘッダーの素材 |
//!
//! ## 設計方針
//!
//! ゲートウェイは認証情報を検証・保管せず、形式チェックだけを行って
//! 上流へ素通しする。値はゲートウェイのログ・レスポンスに一切出さない。

use std::fmt;

use thiserror::Error;

use crate::REDACTED;

/// identity と secret の区切り文字
pub const CREDENTIALS_SEPARATOR: char = ':';

/// 認証情報の形式エラー
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CredentialsError {
    /// 空文字列
    #[error("認証情報が空です")]
    Empty,

    /// 区切り文字 `:` を含まない
    #[error("認証情報に区切り文字 ':' が含まれていません")]
    MissingSeparator,
}

/// ベンダー API 認証情報（`identity:secret` 形式）
///
/// # セキュリティ
///
/// Debug 出力では値をマスクする。
#[derive(Clone, PartialEq, Eq)]
pub struct ApiCredentials(String);

impl ApiCredentials {
    /// 形式を検証して認証情報を作成する
    ///
    /// 空文字列、または区切り文字 `:` を含まない文字列は拒否する。
    /// identity / secret それぞれの中身は検証しない（上流の責務）。
    pub fn parse(raw: &str) -> Result<Self, CredentialsError> {
        if raw.is_empty() {
            return Err(CredentialsError::Empty);
        }
        if !raw.contains(CREDENTIALS_SEPARATOR) {
            return Err(CredentialsError::MissingSeparator);
        }
        Ok(Self(raw.to_string()))
    }

    /// 文字列参照を取得する
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ApiCredentials").field(&REDACTED).finish()
    }
}
