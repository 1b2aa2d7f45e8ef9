//! Error types for docusign-client.

use crate::response::ResponseError;

/// Result type alias for docusign-client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for docusign-client operations.
#[derive(Debug, thiserror::Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional source error.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl Error {
    /// Create a new error with the given kind.
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind, source: None }
    }

    /// Create a new error with the given kind and source.
    pub fn with_source(
        kind: ErrorKind,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            source: Some(Box::new(source)),
        }
    }

    /// Returns true if the call was cancelled or ran past its deadline.
    pub fn is_cancelled(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::Cancelled | ErrorKind::DeadlineExceeded
        )
    }

    /// Returns true if DocuSign rejected the call's credential (401).
    pub fn is_auth_error(&self) -> bool {
        self.status() == Some(401)
    }

    /// The vendor error response, if the call failed with one.
    pub fn api_error(&self) -> Option<&ResponseError> {
        match &self.kind {
            ErrorKind::Api(err) => Some(err),
            _ => None,
        }
    }

    /// HTTP status of a vendor error response.
    pub fn status(&self) -> Option<u16> {
        self.api_error().map(|e| e.status)
    }
}

/// The kind of error that occurred.
#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    /// Failure below the HTTP layer.
    #[error("Transport error: {0}")]
    Transport(String),

    /// Connection error.
    #[error("Connection error: {0}")]
    Connection(String),

    /// Transport-level timeout.
    #[error("Request timeout")]
    Timeout,

    /// The call's cancellation token fired before a response arrived.
    #[error("Call cancelled")]
    Cancelled,

    /// The call's deadline passed before a response arrived.
    #[error("Call deadline exceeded")]
    DeadlineExceeded,

    /// Non-success status returned by DocuSign.
    #[error("DocuSign API error: {0}")]
    Api(ResponseError),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(String),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Failure while streaming a multipart request body.
    #[error("Multipart error: {0}")]
    Multipart(String),

    /// Local I/O failure while reading an upload or writing a download.
    #[error("I/O error: {0}")]
    Io(String),

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        let kind = if err.is_timeout() {
            ErrorKind::Timeout
        } else if err.is_connect() {
            ErrorKind::Connection(err.to_string())
        } else if err.is_decode() {
            ErrorKind::Json(err.to_string())
        } else {
            ErrorKind::Transport(err.to_string())
        };

        Error::with_source(kind, err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::with_source(ErrorKind::Json(err.to_string()), err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::with_source(ErrorKind::Io(err.to_string()), err)
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error::with_source(ErrorKind::InvalidUrl(err.to_string()), err)
    }
}

impl From<ResponseError> for Error {
    fn from(err: ResponseError) -> Self {
        Error::new(ErrorKind::Api(err))
    }
}
