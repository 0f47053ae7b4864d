// Infrastructure layer modules
pub mod echo_config;
pub mod logging;

// Re-exports
pub use echo_config::{ENV_ECHO_MESSAGE, ENV_ECHO_VARIANT, EchoConfig, EchoConfigError};
pub use logging::{init_logging, json_layer};
#[cfg(test)]
pub use logging::{capture_json_logs, init_test_logging};
