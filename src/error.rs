use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ArtivoraError {
    #[error("{0}")]
    Validation(String),
    #[error("Upstream returned status {0}")]
    UpstreamStatus(u16),
    #[error("Upstream request timed out")]
    Timeout,
    #[error("Transport error: {0}")]
    Transport(String),
    #[error("Image decode error: {0}")]
    Decode(String),
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Coarse classification of why a generation did not produce an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureCause {
    Validation,
    UpstreamStatus,
    Timeout,
    Transport,
    Decode,
    Config,
}

impl ArtivoraError {
    pub fn cause(&self) -> FailureCause {
        match self {
            ArtivoraError::Validation(_) => FailureCause::Validation,
            ArtivoraError::UpstreamStatus(_) => FailureCause::UpstreamStatus,
            ArtivoraError::Timeout => FailureCause::Timeout,
            ArtivoraError::Transport(_) => FailureCause::Transport,
            ArtivoraError::Decode(_) => FailureCause::Decode,
            ArtivoraError::Config(_) => FailureCause::Config,
        }
    }

    pub fn is_client_error(&self) -> bool {
        matches!(self, ArtivoraError::Validation(_))
    }

    /// HTTP status the boundary reports for this error.
    pub fn status_code(&self) -> u16 {
        if self.is_client_error() {
            400
        } else {
            500
        }
    }

    /// Message placed in the `error` field of a failure response.
    pub fn user_message(&self) -> String {
        match self {
            ArtivoraError::Validation(msg) => msg.clone(),
            ArtivoraError::UpstreamStatus(_) => {
                "Failed to generate image. Please try again.".to_string()
            }
            ArtivoraError::Timeout => "Request timeout - please try again".to_string(),
            ArtivoraError::Transport(detail) | ArtivoraError::Decode(detail) => {
                format!("Error: {}", detail)
            }
            ArtivoraError::Config(detail) => format!("Server error: {}", detail),
        }
    }
}

pub type Result<T> = std::result::Result<T, ArtivoraError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_maps_to_bad_request() {
        let err = ArtivoraError::Validation("Prompt is required".into());
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.cause(), FailureCause::Validation);
        assert_eq!(err.user_message(), "Prompt is required");
    }

    #[test]
    fn test_upstream_failures_map_to_server_error() {
        let errors = vec![
            ArtivoraError::UpstreamStatus(503),
            ArtivoraError::Timeout,
            ArtivoraError::Transport("connection refused".into()),
            ArtivoraError::Decode("unsupported format".into()),
        ];
        for err in errors {
            assert_eq!(err.status_code(), 500, "{:?}", err);
            assert!(!err.is_client_error());
        }
    }

    #[test]
    fn test_user_messages() {
        assert!(ArtivoraError::Timeout.user_message().contains("timeout"));
        assert_eq!(
            ArtivoraError::UpstreamStatus(502).user_message(),
            "Failed to generate image. Please try again."
        );
        assert_eq!(
            ArtivoraError::Transport("dns failure".into()).user_message(),
            "Error: dns failure"
        );
    }

    #[test]
    fn test_cause_serializes_snake_case() {
        let json = serde_json::to_string(&FailureCause::UpstreamStatus).unwrap();
        assert_eq!(json, "\"upstream_status\"");
    }
}
