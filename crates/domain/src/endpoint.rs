//! # ベンダー API エンドポイント
//!
//! ベンダー API（Data Jam ポータル）のエンドポイント許可リストを定義する。
//!
//! ## ドメイン用語
//!
//! | 型 | ドメイン用語 | 要件 |
//! |---|------------|------|
//! | [`VendorEndpoint`] | 転送可能なエンドポイント | 許可リスト外への転送を型レベルで禁止 |
//! | [`UpstreamMethod`] | 上流リクエストのメソッド | AddData のみ POST、他は GET（ボディ付き） |
//!
//! ## 設計方針
//!
//! - **enum による許可リスト**: パースに成功した時点で転送可能と確定する。
//!   リスト外のエンドポイント名は `FromStr` が `Err` を返す
//! - **ワイヤ名 = バリアント名**: リクエストボディの `endpoint` 値と
//!   PascalCase のバリアント名が一致する

use strum::{EnumIter, IntoStaticStr};

/// 上流リクエストの HTTP メソッド
///
/// ベンダー API は読み取り系エンドポイントでも JSON ボディを要求するため、
/// GET でもボディを送信する。メソッドの使い分けだけをここで表現する。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpstreamMethod {
    Get,
    Post,
}

/// 転送可能なベンダー API エンドポイント
///
/// リクエストボディの `endpoint` 値はバリアント名そのもの（PascalCase）。
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    EnumIter,
    IntoStaticStr,
    strum::Display,
    strum::EnumString,
)]
pub enum VendorEndpoint {
    /// 計測データの取得
    GetData,
    /// デバイス情報の取得
    GetDeviceInfo,
    /// 計測データの登録
    AddData,
    /// 在室データの取得
    GetOccuData,
}

impl VendorEndpoint {
    /// 上流 URL のパスセグメント（末尾スラッシュ付き）
    ///
    /// 例: `GetData` → `/CustomerAPI/GetData/`
    pub fn path(&self) -> String {
        format!("/CustomerAPI/{self}/")
    }

    /// 上流リクエストに使うメソッド
    ///
    /// 書き込み系の `AddData` のみ POST、読み取り系は GET。
    pub fn upstream_method(&self) -> UpstreamMethod {
        match self {
            Self::AddData => UpstreamMethod::Post,
            Self::GetData | Self::GetDeviceInfo | Self::GetOccuData => UpstreamMethod::Get,
        }
    }

    /// 許可エンドポイント名のカンマ区切り一覧（エラーレスポンスの補足用）
    pub fn allowed_names() -> String {
        use strum::IntoEnumIterator;

        Self::iter()
            .map(<&'static str>::from)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("GetData", VendorEndpoint::GetData)]
    #[case("GetDeviceInfo", VendorEndpoint::GetDeviceInfo)]
    #[case("AddData", VendorEndpoint::AddData)]
    #[case("GetOccuData", VendorEndpoint::GetOccuData)]
    fn test_許可リスト内のエンドポイント名はパースできる(
        #[case] name: &str,
        #[case] expected: VendorEndpoint,
    ) {
        assert_eq!(VendorEndpoint::from_str(name).unwrap(), expected);
    }

    #[rstest]
    #[case("DeleteData")]
    #[case("getdata")]
    #[case("GetData ")]
    #[case("")]
    fn test_許可リスト外のエンドポイント名はパースに失敗する(#[case] name: &str) {
        assert!(VendorEndpoint::from_str(name).is_err());
    }

    #[test]
    fn test_pathが末尾スラッシュ付きのパスを返す() {
        assert_eq!(VendorEndpoint::GetData.path(), "/CustomerAPI/GetData/");
        assert_eq!(
            VendorEndpoint::GetDeviceInfo.path(),
            "/CustomerAPI/GetDeviceInfo/"
        );
        assert_eq!(VendorEndpoint::AddData.path(), "/CustomerAPI/AddData/");
        assert_eq!(VendorEndpoint::GetOccuData.path(), "/CustomerAPI/GetOccuData/");
    }

    #[test]
    fn test_adddataのみpostで他はgetになる() {
        assert_eq!(
            VendorEndpoint::AddData.upstream_method(),
            UpstreamMethod::Post
        );
        assert_eq!(
            VendorEndpoint::GetData.upstream_method(),
            UpstreamMethod::Get
        );
        assert_eq!(
            VendorEndpoint::GetDeviceInfo.upstream_method(),
            UpstreamMethod::Get
        );
        assert_eq!(
            VendorEndpoint::GetOccuData.upstream_method(),
            UpstreamMethod::Get
        );
    }

    #[test]
    fn test_allowed_namesが全エンドポイントを列挙する() {
        assert_eq!(
            VendorEndpoint::allowed_names(),
            "GetData, GetDeviceInfo, AddData, GetOccuData"
        );
    }
}
