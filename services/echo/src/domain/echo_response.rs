// エコーレスポンス
//
// Lambda呼び出し元に返却するレスポンスと、
// その`body`に格納するJSONドキュメントの構造を定義する。

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::json_format::to_spaced_ascii_string;

/// 成功時のHTTPステータスコード（常にこの値を返す）
pub const STATUS_OK: u16 = 200;

/// `body`に格納するエコードキュメント
///
/// 固定メッセージと、受信したイベントをそのまま保持する。
/// フィールドは`message`と`input_event`の2つのみ。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EchoBody {
    /// 設定で固定されたメッセージ
    pub message: String,

    /// 受信したイベント（未加工）
    pub input_event: Value,
}

impl EchoBody {
    /// 新しいエコードキュメントを作成
    pub fn new(message: impl Into<String>, input_event: Value) -> Self {
        Self {
            message: message.into(),
            input_event,
        }
    }

    /// JSON文字列にシリアライズ
    ///
    /// 区切りは`", "`と`": "`、非ASCII文字は`\uXXXX`。
    /// `input_event`内のキー順は受信時のまま。
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        to_spaced_ascii_string(self)
    }
}

/// Lambdaレスポンス
///
/// `{"statusCode": 200, "body": "..."}` 形式でシリアライズされる。
/// ステータスコードは非公開フィールドとし、`ok`経由でのみ構築することで
/// 常に200であることを保証する。
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LambdaResponse {
    status_code: u16,
    body: String,
}

impl LambdaResponse {
    /// ステータス200のレスポンスを作成
    pub fn ok(body: String) -> Self {
        Self {
            status_code: STATUS_OK,
            body,
        }
    }

    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    /// シリアライズ済みのbody文字列
    pub fn body(&self) -> &str {
        &self.body
    }

    /// bodyを`EchoBody`としてパース
    pub fn parse_body(&self) -> Result<EchoBody, serde_json::Error> {
        serde_json::from_str(&self.body)
    }
}
