use std::fmt;

use http::StatusCode;
use thiserror::Error;

/// The error type for DEM API operations.
#[derive(Error, Debug)]
#[error("{message}")]
pub struct Error {
    kind: ErrorKind,
    message: String,
    status: Option<StatusCode>,
    #[source]
    source: Option<anyhow::Error>,
}

/// The kind of error that occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Call context the request depends on is not configured
    /// (site id, credentials)
    MissingContext,

    /// The HTTP method is outside the set the API accepts
    UnsupportedMethod,

    /// The server rejected the request signature or key (HTTP 401)
    Unauthorized,

    /// A parameter was invalid, reported by the server (HTTP 400) or
    /// detected locally before any request was made
    InvalidArgument,

    /// The addressed resource does not exist (HTTP 404)
    NotFound,

    /// The server could not handle the request (HTTP 500)
    ServerError,

    /// The request never completed: connect, DNS or timeout failure
    Transport,
}

impl Error {
    /// Create a new error with the given kind and message.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            status: None,
            source: None,
        }
    }

    /// Add a source error.
    pub fn with_source(mut self, source: impl Into<anyhow::Error>) -> Self {
        self.source = Some(source.into());
        self
    }

    fn with_status(mut self, status: StatusCode) -> Self {
        self.status = Some(status);
        self
    }

    /// Get the error kind.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The HTTP status this error was derived from, if the server answered.
    pub fn status(&self) -> Option<StatusCode> {
        self.status
    }

    /// Check if the request never reached the server.
    pub fn is_transport(&self) -> bool {
        self.kind == ErrorKind::Transport
    }

    /// Check if this error mirrors a response the server actually sent.
    pub fn is_rejection(&self) -> bool {
        self.status.is_some()
    }

    /// Map a response status onto the error taxonomy.
    ///
    /// Only 401, 400, 404 and 500 are rejections; every other status,
    /// 2xx or not, is passed through to the caller as a success. The
    /// error message carries the raw response body so server-side detail
    /// is never lost.
    pub fn from_status(status: StatusCode, body: &str) -> Option<Self> {
        let kind = match status {
            StatusCode::UNAUTHORIZED => ErrorKind::Unauthorized,
            StatusCode::BAD_REQUEST => ErrorKind::InvalidArgument,
            StatusCode::NOT_FOUND => ErrorKind::NotFound,
            StatusCode::INTERNAL_SERVER_ERROR => ErrorKind::ServerError,
            _ => return None,
        };

        let message = if body.is_empty() {
            format!("server returned {status} with an empty body")
        } else {
            body.to_string()
        };

        Some(Self::new(kind, message).with_status(status))
    }
}

// Convenience constructors. Rejection kinds have none; those errors only
// come out of `from_status` so they always carry their status.
impl Error {
    /// Create a missing context error.
    pub fn missing_context(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::MissingContext, message)
    }

    /// Create an unsupported method error.
    pub fn unsupported_method(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnsupportedMethod, message)
    }

    /// Create an invalid argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidArgument, message)
    }

    /// Create a transport error.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Transport, message)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::MissingContext => write!(f, "missing call context"),
            ErrorKind::UnsupportedMethod => write!(f, "unsupported http method"),
            ErrorKind::Unauthorized => write!(f, "unauthorized"),
            ErrorKind::InvalidArgument => write!(f, "invalid argument"),
            ErrorKind::NotFound => write!(f, "not found"),
            ErrorKind::ServerError => write!(f, "server error"),
            ErrorKind::Transport => write!(f, "transport failure"),
        }
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, Error>;

// Common From implementations
impl From<http::Error> for Error {
    fn from(err: http::Error) -> Self {
        Self::invalid_argument(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::header::InvalidHeaderValue> for Error {
    fn from(err: http::header::InvalidHeaderValue) -> Self {
        Self::invalid_argument(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::uri::InvalidUri> for Error {
    fn from(err: http::uri::InvalidUri) -> Self {
        Self::invalid_argument(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::invalid_argument(err.to_string()).with_source(anyhow::Error::from(err))
    }
}
