use thiserror::Error;

/// Error types that can occur when calling the completion endpoint.
#[derive(Debug, Error)]
pub enum LLMError {
    /// No API key was configured
    #[error("API key belum diisi. Set OPENROUTER_API_KEY atau gunakan --api-key.")]
    MissingCredential,
    /// Transport-level HTTP errors
    #[error("HTTP error: {0}")]
    HttpError(String),
    /// The request did not finish within the timeout budget
    #[error("request timed out after {0}s")]
    Timeout(u64),
    /// The endpoint answered with a non-success status
    #[error("Gagal memanggil OpenRouter: {status} {body}")]
    EndpointStatus { status: u16, body: String },
    /// API response parsing or format error
    #[error("Response format error: {message}. Raw response: {raw_response}")]
    ResponseFormatError {
        message: String,
        raw_response: String,
    },
    /// JSON serialization/deserialization errors
    #[error("JSON parse error: {0}")]
    JsonError(String),
    /// Invalid request parameters
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl LLMError {
    /// True for failures reported by the endpoint or the transport, as
    /// opposed to problems detected before the request was sent.
    pub fn is_endpoint_failure(&self) -> bool {
        matches!(
            self,
            LLMError::HttpError(_)
                | LLMError::Timeout(_)
                | LLMError::EndpointStatus { .. }
                | LLMError::ResponseFormatError { .. }
                | LLMError::JsonError(_)
        )
    }
}

/// Converts reqwest HTTP errors into LLMErrors
impl From<reqwest::Error> for LLMError {
    fn from(err: reqwest::Error) -> Self {
        LLMError::HttpError(err.to_string())
    }
}

impl From<serde_json::Error> for LLMError {
    fn from(err: serde_json::Error) -> Self {
        LLMError::JsonError(format!(
            "{} at line {} column {}",
            err,
            err.line(),
            err.column()
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_status_renders_code_and_body() {
        let err = LLMError::EndpointStatus {
            status: 401,
            body: "{\"error\":\"no auth\"}".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Gagal memanggil OpenRouter: 401 {\"error\":\"no auth\"}"
        );
        assert!(err.is_endpoint_failure());
    }

    #[test]
    fn missing_credential_is_not_an_endpoint_failure() {
        assert!(!LLMError::MissingCredential.is_endpoint_failure());
        assert!(!LLMError::InvalidRequest("x".into()).is_endpoint_failure());
    }

    #[test]
    fn json_errors_carry_position() {
        let err: LLMError = serde_json::from_str::<serde_json::Value>("{oops")
            .unwrap_err()
            .into();
        let text = err.to_string();
        assert!(text.starts_with("JSON parse error:"));
        assert!(text.contains("line 1"));
    }
}
