//! # Store Error Types
//!
//! Error types for the selection action and configuration loading.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Store Error Categories                            │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────────────┐ │
//! │  │  Configuration  │  │     Client      │  │     Decoding            │ │
//! │  │                 │  │                 │  │                         │ │
//! │  │  InvalidConfig  │  │  NotFound       │  │  Core(InvalidRecord)    │ │
//! │  │  ConfigLoad     │  │  Rejected       │  │                         │ │
//! │  │   Failed        │  │  Transport      │  │                         │ │
//! │  │                 │  │  Remote         │  │                         │ │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A failing fetch is returned to the caller of `select_cafe` unchanged,
//! wrapped in [`StoreError::Client`]. Nothing is retried or rolled back.

use std::sync::Arc;

use thiserror::Error;

use cafe_core::CoreError;

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

// =============================================================================
// Client Error
// =============================================================================

/// Error produced by a [`CafeClient`](crate::client::CafeClient).
#[derive(Debug, Clone, Error)]
pub enum ClientError {
    /// The remote service has no data for this identifier.
    #[error("{operation}: no cafe with id '{id}'")]
    NotFound { operation: String, id: String },

    /// The remote service answered with an error.
    #[error("Remote call rejected: {0}")]
    Rejected(String),

    /// The call never got an answer.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The client's own error type, kept intact as the source.
    #[error("{operation} failed: {source}")]
    Remote {
        operation: String,
        source: Arc<dyn std::error::Error + Send + Sync>,
    },
}

impl ClientError {
    /// Wraps an RPC library error without flattening it.
    pub fn remote(
        operation: impl Into<String>,
        err: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        ClientError::Remote {
            operation: operation.into(),
            source: Arc::new(err),
        }
    }

    /// The wrapped RPC error of a [`ClientError::Remote`], ready to downcast.
    pub fn remote_source(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        match self {
            ClientError::Remote { source, .. } => Some(&**source),
            _ => None,
        }
    }
}

impl PartialEq for ClientError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (
                ClientError::NotFound { operation: a, id: x },
                ClientError::NotFound { operation: b, id: y },
            ) => a == b && x == y,
            (ClientError::Rejected(a), ClientError::Rejected(b)) => a == b,
            (ClientError::Transport(a), ClientError::Transport(b)) => a == b,
            // Same underlying error instance.
            (
                ClientError::Remote { operation: a, source: x },
                ClientError::Remote { operation: b, source: y },
            ) => a == b && Arc::ptr_eq(x, y),
            _ => false,
        }
    }
}

// =============================================================================
// Store Error
// =============================================================================

/// Error covering every way a store operation can fail.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A remote fetch failed.
    #[error(transparent)]
    Client(#[from] ClientError),

    /// A remote fetch returned a payload of the wrong shape.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Invalid store configuration.
    #[error("Invalid store configuration: {0}")]
    InvalidConfig(String),

    /// Failed to read or parse a config or fixture file.
    #[error("Failed to load config: {0}")]
    ConfigLoadFailed(String),

    /// A fetch task panicked or was aborted before committing.
    #[error("Fetch task failed: {0}")]
    TaskFailed(String),
}

// =============================================================================
// Error Conversions
// =============================================================================

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::ConfigLoadFailed(err.to_string())
    }
}

impl From<toml::de::Error> for StoreError {
    fn from(err: toml::de::Error) -> Self {
        StoreError::ConfigLoadFailed(err.to_string())
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::ConfigLoadFailed(err.to_string())
    }
}

impl From<tokio::task::JoinError> for StoreError {
    fn from(err: tokio::task::JoinError) -> Self {
        StoreError::TaskFailed(err.to_string())
    }
}

// =============================================================================
// Error Categorization
// =============================================================================

impl StoreError {
    /// Returns true if the remote client produced this error.
    pub fn is_client_error(&self) -> bool {
        matches!(self, StoreError::Client(_))
    }

    /// Returns true if this error indicates a configuration problem.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            StoreError::InvalidConfig(_)
                | StoreError::ConfigLoadFailed(_)
                | StoreError::Core(CoreError::Validation(_))
        )
    }

    /// The client error behind this failure, if any.
    pub fn as_client_error(&self) -> Option<&ClientError> {
        match self {
            StoreError::Client(err) => Some(err),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cafe_core::ValidationError;

    #[test]
    fn test_client_error_passes_through_unchanged() {
        let client_err = ClientError::Rejected("discounts service down".into());
        let err: StoreError = client_err.clone().into();

        assert!(err.is_client_error());
        assert_eq!(err.as_client_error(), Some(&client_err));
        assert_eq!(err.to_string(), "Remote call rejected: discounts service down");
    }

    #[test]
    fn test_config_errors() {
        assert!(StoreError::InvalidConfig("bad".into()).is_config_error());

        let err: StoreError = CoreError::from(ValidationError::Required {
            field: "locale".into(),
        })
        .into();
        assert!(err.is_config_error());

        assert!(!StoreError::TaskFailed("panic".into()).is_config_error());
    }

    #[test]
    fn test_remote_error_keeps_its_source() {
        use std::error::Error as _;

        let io = std::io::Error::new(std::io::ErrorKind::ConnectionReset, "peer hung up");
        let client_err = ClientError::remote("getCafeDiscounts", io);
        let err: StoreError = client_err.clone().into();

        assert_eq!(err.as_client_error(), Some(&client_err));
        assert_eq!(err.to_string(), "getCafeDiscounts failed: peer hung up");

        let source = err.source().expect("remote error has a source");
        assert_eq!(source.to_string(), "peer hung up");

        let io = client_err
            .remote_source()
            .and_then(|e| e.downcast_ref::<std::io::Error>())
            .expect("source is the io error");
        assert_eq!(io.kind(), std::io::ErrorKind::ConnectionReset);

        let other = std::io::Error::new(std::io::ErrorKind::Other, "peer hung up");
        assert_ne!(client_err, ClientError::remote("getCafeDiscounts", other));
    }

    #[test]
    fn test_not_found_display() {
        let err = ClientError::NotFound {
            operation: "getFullCafe".into(),
            id: "abc".into(),
        };
        assert_eq!(err.to_string(), "getFullCafe: no cafe with id 'abc'");
    }
}
