use super::BackendKind;
use core_config::ConfigError;

/// Boxed underlying cause from a client library
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Unified database error type for all connector operations
///
/// Every backend failure keeps the client library's error as its `source`.
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    /// Authentication, network or handshake failure while connecting
    #[error("{kind} connection failed: {source}")]
    ConnectionFailed {
        kind: BackendKind,
        #[source]
        source: BoxError,
    },

    /// The connection opened but the liveness probe did not succeed
    #[error("{kind} liveness probe failed: {source}")]
    ProbeFailed {
        kind: BackendKind,
        #[source]
        source: BoxError,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl DatabaseError {
    pub fn connection(kind: BackendKind, source: impl Into<BoxError>) -> Self {
        Self::ConnectionFailed {
            kind,
            source: source.into(),
        }
    }

    pub fn probe(kind: BackendKind, source: impl Into<BoxError>) -> Self {
        Self::ProbeFailed {
            kind,
            source: source.into(),
        }
    }

    /// Backend the failure came from, if it came from one
    pub fn kind(&self) -> Option<BackendKind> {
        match self {
            Self::ConnectionFailed { kind, .. } | Self::ProbeFailed { kind, .. } => Some(*kind),
            Self::Config(_) => None,
        }
    }

    /// Whether this is a failure to establish a live connection
    pub fn is_connection_error(&self) -> bool {
        matches!(
            self,
            Self::ConnectionFailed { .. } | Self::ProbeFailed { .. }
        )
    }
}

/// Result type alias for database operations
pub type DatabaseResult<T> = Result<T, DatabaseError>;
