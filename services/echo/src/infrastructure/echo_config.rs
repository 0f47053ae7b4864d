// エコー関数設定
//
// 環境変数からレスポンスに含める固定メッセージを読み込む
// インフラストラクチャ層コンポーネント。

use thiserror::Error;

use crate::domain::{ParseVariantError, Variant};

/// 環境変数名: メッセージを直接指定
pub const ENV_ECHO_MESSAGE: &str = "ECHO_MESSAGE";

/// 環境変数名: プリセット（test-1〜test-4）を指定
pub const ENV_ECHO_VARIANT: &str = "ECHO_VARIANT";

/// エコー設定のエラー型
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EchoConfigError {
    #[error("Unknown echo variant: {0}")]
    UnknownVariant(String),
}

impl From<ParseVariantError> for EchoConfigError {
    fn from(err: ParseVariantError) -> Self {
        EchoConfigError::UnknownVariant(err.0)
    }
}

/// エコー関数設定
///
/// コールドスタート時に一度だけ読み込み、以降の呼び出しで共有する。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EchoConfig {
    message: String,
}

impl EchoConfig {
    /// 環境変数から設定を読み込み
    ///
    /// 優先順位:
    /// 1. ECHO_MESSAGE: メッセージをそのまま使用
    /// 2. ECHO_VARIANT: 対応するプリセットのメッセージを使用
    /// 3. どちらも未設定: デフォルトプリセット（test-1）
    ///
    /// 空白のみの値は未設定として扱う。
    pub fn from_env() -> Result<Self, EchoConfigError> {
        // 空文字はNone扱い
        let get_optional_string = |key: &str| -> Option<String> {
            std::env::var(key).ok().filter(|s| !s.trim().is_empty())
        };

        if let Some(message) = get_optional_string(ENV_ECHO_MESSAGE) {
            return Ok(Self::new(message));
        }

        let variant = match get_optional_string(ENV_ECHO_VARIANT) {
            Some(id) => id.parse::<Variant>()?,
            None => Variant::default(),
        };

        Ok(Self::from_variant(variant))
    }

    /// 明示的なメッセージで作成（テスト用）
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// プリセットから作成
    pub fn from_variant(variant: Variant) -> Self {
        Self::new(variant.message())
    }

    /// レスポンスに含めるメッセージ
    pub fn message(&self) -> &str {
        &self.message
    }
}
