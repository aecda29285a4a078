//! # ブラウザオリジンの許可リスト
//!
//! プロキシエンドポイントを呼び出せるブラウザオリジンを定義する。
//!
//! ## 設計方針
//!
//! - 許可リストは固定の定数。環境ごとに変わるのはベンダー URL や API
//!   キーであり、呼び出し元サイトは Data Jam のドキュメントサイトに限られる
//! - `Origin` ヘッダーなし（同一オリジン、curl 等の非ブラウザ呼び出し）は
//!   拒否せず、レスポンスヘッダーには既定オリジンを設定する

/// プロキシ呼び出しを許可するオリジン
pub const ALLOWED_ORIGINS: [&str; 3] = [
    "https://data-jam.com",
    "https://www.data-jam.com",
    "http://localhost:8888",
];

/// `Origin` ヘッダーなしのリクエストに対してレスポンスヘッダーへ設定する既定オリジン
pub const DEFAULT_ALLOWED_ORIGIN: &str = "https://data-jam.com";

/// オリジンが許可リストに含まれるか
pub fn is_allowed(origin: &str) -> bool {
    ALLOWED_ORIGINS.contains(&origin)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_許可リスト内のオリジンはallowedになる() {
        assert!(is_allowed("https://data-jam.com"));
        assert!(is_allowed("https://www.data-jam.com"));
        assert!(is_allowed("http://localhost:8888"));
    }

    #[test]
    fn test_許可リスト外のオリジンは拒否される() {
        assert!(!is_allowed("https://evil.example.com"));
        assert!(!is_allowed("http://data-jam.com"));
        assert!(!is_allowed("https://data-jam.com/"));
        assert!(!is_allowed(""));
    }

    #[test]
    fn test_既定オリジンは許可リストに含まれる() {
        assert!(is_allowed(DEFAULT_ALLOWED_ORIGIN));
    }
}
