//! Network/fetch error types for backend requests.

use thiserror::Error;

/// Errors from talking to the notes backend.
///
/// Splits the two failure classes the UI treats differently: a rejected fetch
/// ([`FetchError::Network`]) and a non-2xx response whose JSON body may carry
/// a server-provided `detail` ([`FetchError::Api`]). The remaining variants
/// are client-side plumbing failures and surface the same way as network
/// errors.
#[derive(Debug, Clone, Error)]
pub enum FetchError {
    /// Browser window not available.
    #[error("browser window not available")]
    NoWindow,
    /// Failed to create the HTTP request or its form body.
    #[error("failed to create request")]
    RequestCreationFailed,
    /// Network request failed (connection refused, CORS, DNS).
    #[error("network error: {0}")]
    Network(String),
    /// HTTP error response (non-2xx status), with the parsed `detail` field
    /// of the body when the backend supplied one.
    #[error("HTTP error {status}")]
    Api {
        status: u16,
        detail: Option<String>,
    },
    /// Failed to read the response body.
    #[error("failed to read response")]
    ResponseReadFailed,
    /// Response body was not text.
    #[error("invalid response content")]
    InvalidContent,
    /// Response body did not match the expected JSON shape.
    #[error("JSON parse error: {0}")]
    JsonParse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let api = FetchError::Api {
            status: 500,
            detail: Some("index missing".to_string()),
        };
        assert_eq!(api.to_string(), "HTTP error 500");

        let network = FetchError::Network("connection refused".to_string());
        assert_eq!(network.to_string(), "network error: connection refused");
    }
}
