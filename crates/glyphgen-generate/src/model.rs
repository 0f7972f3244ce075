use serde::Deserialize;
use serde_json::Value;

use glyphgen_core::GenerateOptions;

/// A generation request as it arrives over a dynamically-typed boundary
/// (CLI input, JSON config).
///
/// `length` stays a raw JSON value so validation can distinguish a missing
/// value from a mistyped one.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub length: Option<Value>,
    #[serde(flatten)]
    pub options: GenerateOptions,
}
