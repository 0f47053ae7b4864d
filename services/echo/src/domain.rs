// Domain layer modules
pub mod echo_response;
pub mod json_format;
pub mod variant;

// Re-exports
pub use echo_response::{EchoBody, LambdaResponse, STATUS_OK};
pub use json_format::{SpacedAsciiFormatter, to_spaced_ascii_string};
pub use variant::{ParseVariantError, Variant};
