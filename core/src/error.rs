use std::fmt;
use thiserror::Error;

/// The error type for ocisign operations
#[derive(Error, Debug)]
#[error("{kind}: {message}")]
pub struct Error {
    kind: ErrorKind,
    message: String,
    #[source]
    source: Option<anyhow::Error>,
}

/// The kind of error that occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Signer configuration is incomplete: tenancy, user, fingerprint or
    /// private key is not set.
    ParamsNotSet,

    /// Request has no method, so `(request-target)` can't be built.
    MethodMissing,

    /// Request has no URL, so `(request-target)` can't be built.
    UrlMissing,

    /// A header selected for signing is not present on the request.
    SigningHeaderMissing,

    /// The RSA signing operation failed.
    SigningFailed,

    /// Key material could not be parsed.
    KeyInvalid,

    /// Request cannot be represented (invalid header value, bad endpoint, etc.)
    RequestInvalid,

    /// Unexpected errors
    Unexpected,
}

impl Error {
    /// Create a new error with the given kind and message
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error
    pub fn with_source(mut self, source: impl Into<anyhow::Error>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

// Convenience constructors
impl Error {
    /// Create a params not set error
    pub fn params_not_set(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ParamsNotSet, message)
    }

    /// Create a method missing error
    pub fn method_missing(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::MethodMissing, message)
    }

    /// Create a url missing error
    pub fn url_missing(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::UrlMissing, message)
    }

    /// Create a signing header missing error
    pub fn signing_header_missing(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::SigningHeaderMissing, message)
    }

    /// Create a signing failed error
    pub fn signing_failed(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::SigningFailed, message)
    }

    /// Create a key invalid error
    pub fn key_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::KeyInvalid, message)
    }

    /// Create a request invalid error
    pub fn request_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::RequestInvalid, message)
    }

    /// Create an unexpected error
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unexpected, message)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::ParamsNotSet => write!(f, "signer params not set"),
            ErrorKind::MethodMissing => write!(f, "request method missing"),
            ErrorKind::UrlMissing => write!(f, "request url missing"),
            ErrorKind::SigningHeaderMissing => write!(f, "signing header missing"),
            ErrorKind::SigningFailed => write!(f, "signing failed"),
            ErrorKind::KeyInvalid => write!(f, "invalid key"),
            ErrorKind::RequestInvalid => write!(f, "invalid request"),
            ErrorKind::Unexpected => write!(f, "unexpected error"),
        }
    }
}

/// Convenience type alias for Results
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::fmt::Error> for Error {
    fn from(err: std::fmt::Error) -> Self {
        Self::unexpected(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::Error> for Error {
    fn from(err: http::Error) -> Self {
        Self::request_invalid(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::header::InvalidHeaderValue> for Error {
    fn from(err: http::header::InvalidHeaderValue) -> Self {
        Self::request_invalid(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::header::InvalidHeaderName> for Error {
    fn from(err: http::header::InvalidHeaderName) -> Self {
        Self::request_invalid(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::header::ToStrError> for Error {
    fn from(err: http::header::ToStrError) -> Self {
        Self::request_invalid(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::uri::InvalidUri> for Error {
    fn from(err: http::uri::InvalidUri) -> Self {
        Self::request_invalid(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<std::string::FromUtf8Error> for Error {
    fn from(err: std::string::FromUtf8Error) -> Self {
        Self::unexpected(err.to_string()).with_source(anyhow::Error::from(err))
    }
}
