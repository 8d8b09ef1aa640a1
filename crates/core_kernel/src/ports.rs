//! Ports and Adapters Infrastructure
//!
//! Domain crates describe their external collaborators as port traits that
//! extend the marker trait here. Adapters implement those traits either
//! in-process or against a remote service.
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │        Comparison / Batch Analysis          │
//! └─────────────────────────────────────────────┘
//!                       │
//!                       ▼
//! ┌─────────────────────────────────────────────┐
//! │     Port Traits (ClaimAnalyzer, ...)        │
//! └─────────────────────────────────────────────┘
//!             ▲                      ▲
//!   ┌─────────┴────────┐   ┌─────────┴─────────┐
//!   │ In-process       │   │ Hosted model      │
//!   │ (heuristic)      │   │ (remote API)      │
//!   └──────────────────┘   └───────────────────┘
//! ```

use std::time::Duration;

use thiserror::Error;

type BoxedSource = Box<dyn std::error::Error + Send + Sync>;

/// Failure reported by a port adapter
///
/// In-process and remote analyzers report through the same type, so
/// batch and comparison runs decide how to react from the variant alone.
#[derive(Debug, Error)]
pub enum PortError {
    /// The collaborator could not be reached
    #[error("Connection error: {message}")]
    Connection {
        message: String,
        #[source]
        source: Option<BoxedSource>,
    },

    /// The collaborator did not answer in time
    #[error("Timeout after {duration_ms}ms: {operation}")]
    Timeout { operation: String, duration_ms: u64 },

    /// Credentials were missing or rejected
    #[error("Unauthorized: {message}")]
    Unauthorized { message: String },

    /// The collaborator asked callers to back off
    #[error("Rate limited: retry after {retry_after_secs}s")]
    RateLimited { retry_after_secs: u64 },

    #[error("Service unavailable: {service}")]
    ServiceUnavailable { service: String },

    /// The answer could not be mapped onto a domain result
    #[error("Transformation error: {message}")]
    Transformation { message: String },

    #[error("Internal error: {message}")]
    Internal {
        message: String,
        #[source]
        source: Option<BoxedSource>,
    },
}

impl PortError {
    pub fn connection(message: impl Into<String>) -> Self {
        PortError::Connection {
            message: message.into(),
            source: None,
        }
    }

    /// Timeout for `operation` after `elapsed`
    pub fn timeout(operation: impl Into<String>, elapsed: Duration) -> Self {
        PortError::Timeout {
            operation: operation.into(),
            duration_ms: u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
        }
    }

    pub fn transformation(message: impl Into<String>) -> Self {
        PortError::Transformation {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        PortError::Internal {
            message: message.into(),
            source: None,
        }
    }

    /// Attaches the underlying cause to a connection or internal error
    pub fn with_source(self, cause: impl std::error::Error + Send + Sync + 'static) -> Self {
        match self {
            PortError::Connection { message, .. } => PortError::Connection {
                message,
                source: Some(Box::new(cause)),
            },
            PortError::Internal { message, .. } => PortError::Internal {
                message,
                source: Some(Box::new(cause)),
            },
            other => other,
        }
    }

    /// True when the same request may succeed if retried later
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            PortError::Connection { .. }
                | PortError::Timeout { .. }
                | PortError::RateLimited { .. }
                | PortError::ServiceUnavailable { .. }
        )
    }

    /// Back-off requested by the collaborator, if any
    pub fn retry_after(&self) -> Option<Duration> {
        match self {
            PortError::RateLimited { retry_after_secs } => Some(Duration::from_secs(*retry_after_secs)),
            _ => None,
        }
    }
}

/// Marker trait for all domain ports
///
/// Port traits extend this marker so adapters can be shared across tasks.
pub trait DomainPort: Send + Sync + 'static {}
