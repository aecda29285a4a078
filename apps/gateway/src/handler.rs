//! # HTTP ハンドラ
//!
//! ゲートウェイの各エンドポイントに対応するハンドラを集約する。
//!
//! `/api/proxy` と `/api/notify` はブラウザのプリフライトを受けるため
//! 全メソッドで登録し、メソッドの振り分けをハンドラ内で行う。

pub mod health;
pub mod notify;
pub mod proxy;

pub use health::health_check;
pub use notify::{NotifyState, notify};
pub use proxy::{ProxyState, proxy};
