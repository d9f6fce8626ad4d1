use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GenerateResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl GenerateResponse {
    pub fn success(image: impl Into<String>) -> Self {
        Self {
            success: true,
            image: Some(image.into()),
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            image: None,
            error: Some(error.into()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HealthResponse {
    pub status: String,
    pub generator: String,
}

impl HealthResponse {
    pub fn healthy(generator: impl Into<String>) -> Self {
        Self {
            status: "healthy".to_string(),
            generator: generator.into(),
        }
    }
}

/// Successful generation, including what was actually sent upstream.
#[derive(Debug, Clone)]
pub struct GeneratedImage {
    pub image: String,
    pub enhanced_prompt: String,
    pub style: String,
}
