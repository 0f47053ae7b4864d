/// エコーLambdaエントリポイント
///
/// 受信したイベントを固定メッセージと共にそのまま返却する。
/// メッセージは環境変数ECHO_MESSAGE / ECHO_VARIANTで設定する。
use echo::application::EchoHandler;
use echo::domain::LambdaResponse;
use echo::infrastructure::{EchoConfig, init_logging};
use lambda_runtime::{Error, LambdaEvent, service_fn};
use serde_json::Value;
use tracing::{info, info_span};

#[tokio::main]
async fn main() -> Result<(), Error> {
    // 構造化ログを初期化
    init_logging();

    // 設定はコールドスタート時に一度だけ読み込む
    let config = EchoConfig::from_env()?;
    info!(echo_message = config.message(), "エコーLambda関数を初期化");

    let echo_handler = EchoHandler::new(config);
    let echo_handler = &echo_handler;

    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| async move {
        handler(echo_handler, event).await
    }))
    .await
}

/// Lambda関数のメインハンドラー
///
/// シリアライズに失敗した場合はエラーを返し、呼び出し失敗として扱われる。
async fn handler(
    echo_handler: &EchoHandler,
    event: LambdaEvent<Value>,
) -> Result<LambdaResponse, Error> {
    let (payload, context) = event.into_parts();
    let span = info_span!("invocation", request_id = %context.request_id);

    let response = span.in_scope(|| echo_handler.handle(&payload, &context))?;

    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use echo::domain::Variant;
    use echo::infrastructure::{ENV_ECHO_MESSAGE, ENV_ECHO_VARIANT};
    use lambda_runtime::Context;
    use serde_json::json;
    use serial_test::serial;

    // テストで環境変数を安全に設定/削除するヘルパー
    // 注: Rust 2024エディションでset_var/remove_varはunsafe
    unsafe fn set_env(key: &str, value: &str) {
        unsafe { std::env::set_var(key, value) };
    }

    unsafe fn remove_env(key: &str) {
        unsafe { std::env::remove_var(key) };
    }

    unsafe fn cleanup_echo_env() {
        unsafe {
            remove_env(ENV_ECHO_MESSAGE);
            remove_env(ENV_ECHO_VARIANT);
        }
    }

    fn lambda_event(payload: Value) -> LambdaEvent<Value> {
        LambdaEvent::new(payload, Context::default())
    }

    /// ランタイムに返るJSONがstatusCodeとbodyのみを持つ
    #[tokio::test]
    async fn test_handler_returns_status_code_and_body() {
        let echo_handler = EchoHandler::new(EchoConfig::new("Hello"));

        let response = handler(&echo_handler, lambda_event(json!({ "a": 1 })))
            .await
            .unwrap();

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["statusCode"], 200);
        assert_eq!(value.as_object().unwrap().len(), 2);

        assert_eq!(
            value["body"],
            r#"{"message": "Hello", "input_event": {"a": 1}}"#
        );
    }

    #[tokio::test]
    async fn test_handler_echoes_null_payload() {
        let echo_handler = EchoHandler::new(EchoConfig::new("Hello"));

        let response = handler(&echo_handler, lambda_event(Value::Null))
            .await
            .unwrap();

        assert_eq!(response.status_code(), 200);
        assert_eq!(response.parse_body().unwrap().input_event, Value::Null);
    }

    /// ランタイムから受け取ったイベントのキー順と数値がそのまま返る
    #[tokio::test]
    async fn test_handler_echoes_payload_unmodified() {
        let echo_handler = EchoHandler::new(EchoConfig::new("m"));
        let payload: Value =
            serde_json::from_str(r#"{"z": 18446744073709551616, "a": ["é"]}"#).unwrap();

        let response = handler(&echo_handler, lambda_event(payload)).await.unwrap();

        assert_eq!(
            response.body(),
            r#"{"message": "m", "input_event": {"z": 18446744073709551616, "a": ["\u00e9"]}}"#
        );
    }

    /// 同一ハンドラーで複数回呼び出しても状態は残らない
    #[tokio::test]
    async fn test_handler_is_stateless_across_invocations() {
        let echo_handler = EchoHandler::new(EchoConfig::new("Hello"));

        let first = handler(&echo_handler, lambda_event(json!({ "n": 1 })))
            .await
            .unwrap();
        let second = handler(&echo_handler, lambda_event(json!({ "n": 2 })))
            .await
            .unwrap();
        let again = handler(&echo_handler, lambda_event(json!({ "n": 1 })))
            .await
            .unwrap();

        assert_ne!(first, second);
        assert_eq!(first, again);
    }

    /// 環境変数のプリセットがレスポンスに反映される
    #[tokio::test]
    #[serial(echo_env)]
    async fn test_handler_reflects_variant_env() {
        unsafe {
            cleanup_echo_env();
            set_env(ENV_ECHO_VARIANT, "test-4");
        }

        let echo_handler = EchoHandler::new(EchoConfig::from_env().unwrap());
        let response = handler(&echo_handler, lambda_event(json!({})))
            .await
            .unwrap();

        assert_eq!(
            response.parse_body().unwrap().message,
            Variant::Test4.message()
        );

        unsafe { cleanup_echo_env() };
    }

    #[tokio::test]
    #[serial(echo_env)]
    async fn test_handler_reflects_message_env() {
        unsafe {
            cleanup_echo_env();
            set_env(ENV_ECHO_MESSAGE, "Deployed message");
        }

        let echo_handler = EchoHandler::new(EchoConfig::from_env().unwrap());
        let response = handler(&echo_handler, lambda_event(json!([1, 2, 3])))
            .await
            .unwrap();

        let body = response.parse_body().unwrap();
        assert_eq!(body.message, "Deployed message");
        assert_eq!(body.input_event, json!([1, 2, 3]));

        unsafe { cleanup_echo_env() };
    }
}
