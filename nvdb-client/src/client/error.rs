//! Client error types.

/// Errors from the road network API client.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The requested resource does not exist
    #[error("not found")]
    NotFound,

    /// API returned an error status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Response body was not valid JSON
    #[error("JSON parse error: {message}")]
    Json {
        message: String,
        body: Option<String>,
    },

    /// Response was JSON but not in the expected shape
    #[error("unexpected response shape: {0}")]
    UnexpectedShape(&'static str),

    /// A configured value cannot be sent as a header
    #[error("invalid value for header {name}")]
    InvalidHeader { name: &'static str },
}
