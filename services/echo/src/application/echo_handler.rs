// エコーハンドラー
//
// 受信したイベントを固定メッセージと共にbodyへ格納し、
// ステータス200のレスポンスを返却する。

use lambda_runtime::Context;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::domain::{EchoBody, LambdaResponse};
use crate::infrastructure::EchoConfig;

/// エコーハンドラーのエラー型
#[derive(Debug, Error)]
pub enum EchoHandlerError {
    /// イベントまたはbodyのJSONシリアライズに失敗
    #[error("Failed to serialize event: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// イベントをエコーバックするハンドラー
///
/// 状態を持たず、全ての呼び出しで同じメッセージを返す。
#[derive(Debug, Clone)]
pub struct EchoHandler {
    /// レスポンスに含める固定メッセージ
    message: String,
}

impl EchoHandler {
    /// 新しいEchoHandlerを作成
    pub fn new(config: EchoConfig) -> Self {
        Self {
            message: config.message().to_string(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// イベントを処理してレスポンスを生成
    ///
    /// # 処理フロー
    /// 1. イベントをJSON値に変換（変換できない場合はエラー）
    /// 2. 受信イベントをログ出力
    /// 3. `{"message": ..., "input_event": ...}` をシリアライズしてbodyに格納
    ///
    /// `context`はレスポンスに影響しない。
    pub fn handle<E>(
        &self,
        event: &E,
        _context: &Context,
    ) -> Result<LambdaResponse, EchoHandlerError>
    where
        E: Serialize + ?Sized,
    {
        let input_event = serde_json::to_value(event)?;

        info!(input_event = %input_event, "イベント受信");

        let body = EchoBody::new(self.message.as_str(), input_event).to_json()?;

        debug!(body_length = body.len(), "レスポンス生成");

        Ok(LambdaResponse::ok(body))
    }
}
