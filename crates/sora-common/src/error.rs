//! Common error types used throughout sora.
//!
//! A single enum covers the outcome classes of a request: the resource is
//! missing (or the input can never name one), the caller is not allowed in,
//! or the upstream metadata provider failed.

/// Common error type for sora.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The requested resource was not found.
    ///
    /// Invalid identifiers end up here too: a bad id and a missing show are
    /// the same outcome for the caller.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The caller is not authenticated.
    #[error("Unauthorized")]
    Unauthorized,

    /// Invalid input was provided.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The upstream metadata provider failed (transport error, bad status,
    /// malformed payload).
    #[error("Upstream error [{provider}]: {message}")]
    Upstream {
        /// Name of the provider that failed (e.g. "tmdb").
        provider: String,
        /// Human-readable error description.
        message: String,
    },

    /// An internal error occurred.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a new NotFound error.
    pub fn not_found<S: Into<String>>(msg: S) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create a new InvalidInput error.
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a new Upstream error.
    pub fn upstream<P: Into<String>, M: Into<String>>(provider: P, message: M) -> Self {
        Self::Upstream {
            provider: provider.into(),
            message: message.into(),
        }
    }

    /// Create a new Internal error.
    pub fn internal<S: Into<String>>(msg: S) -> Self {
        Self::Internal(msg.into())
    }

    /// Map this error to an appropriate HTTP status code.
    pub fn http_status(&self) -> u16 {
        match self {
            Error::NotFound(_) => 404,
            Error::Unauthorized => 401,
            Error::InvalidInput(_) => 400,
            Error::Upstream { .. } => 502,
            Error::Internal(_) => 500,
        }
    }

    /// Returns `true` for the "not found" outcome class.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }
}

/// Result type alias using the common Error type.
pub type Result<T> = std::result::Result<T, Error>;
