use crate::error::{ArtivoraError, Result};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Raw JSON body accepted by `POST /generate`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateRequestBody {
    pub prompt: Option<String>,
    /// Non-string values are dropped so the request falls back to the default style.
    #[serde(default, deserialize_with = "string_or_none")]
    pub style: Option<String>,
}

fn string_or_none<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(style)) => Ok(Some(style)),
        _ => Ok(None),
    }
}

/// A validated generation request. The prompt is trimmed and never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub prompt: String,
    pub style: Option<String>,
}

impl GenerationRequest {
    /// Trims `prompt` and rejects it when nothing is left.
    pub fn new(prompt: impl Into<String>, style: Option<String>) -> Result<Self> {
        let prompt = prompt.into();
        let trimmed = prompt.trim();
        if trimmed.is_empty() {
            return Err(ArtivoraError::Validation("Prompt cannot be empty".into()));
        }
        Ok(Self {
            prompt: trimmed.to_string(),
            style,
        })
    }

    /// Validates a decoded body: `prompt` must be present and non-blank.
    pub fn from_body(body: GenerateRequestBody) -> Result<Self> {
        let prompt = body
            .prompt
            .ok_or_else(|| ArtivoraError::Validation("Prompt is required".into()))?;
        Self::new(prompt, body.style)
    }

    /// Parses a raw request body. Anything that is not a JSON object with a
    /// string `prompt` is treated as a missing prompt.
    pub fn from_json_bytes(bytes: &[u8]) -> Result<Self> {
        let body: GenerateRequestBody = serde_json::from_slice(bytes)
            .map_err(|_| ArtivoraError::Validation("Prompt is required".into()))?;
        Self::from_body(body)
    }
}
