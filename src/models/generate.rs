use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body posted to the generation endpoint.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct GenerateRequest {
    pub prompt: String,
    pub max_tokens: u32,
}

/// Reply from the generation endpoint. Only `result` is kept; a missing key
/// means an empty suggestion, while a `result` of any other type is rejected.
#[derive(Deserialize, Debug, Default, PartialEq)]
pub struct GenerateResponse {
    #[serde(default)]
    pub result: String,
}

impl GenerateResponse {
    /// Parses a reply body. Anything other than a JSON object is rejected.
    pub fn from_body(body: &str) -> Result<Self, serde_json::Error> {
        match serde_json::from_str::<Value>(body)? {
            Value::Object(map) => serde_json::from_value(Value::Object(map)),
            other => Err(<serde_json::Error as serde::de::Error>::custom(format!(
                "expected a JSON object, got {}",
                other
            ))),
        }
    }
}
