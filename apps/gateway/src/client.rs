//! # 外部 API クライアント
//!
//! ゲートウェイが接続する外部サービスのクライアントを集約する。

pub mod vendor;

pub use vendor::{VendorApi, VendorApiClient, VendorApiError};
