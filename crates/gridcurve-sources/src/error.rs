//! Error types for price sources.

use gridcurve_core::Provider;
use thiserror::Error;

/// A specialized Result type for price source operations.
pub type SourceResult<T> = Result<T, SourceError>;

/// Errors raised while fetching prices.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SourceError {
    /// The provider could not be reached, timed out or answered with a
    /// non-success status.
    #[error("{provider} unavailable: {reason}")]
    Unavailable {
        /// Provider that failed.
        provider: Provider,
        /// Transport or status detail.
        reason: String,
    },

    /// The provider answered but the body is not usable.
    #[error("Malformed response from {provider}: {reason}")]
    MalformedResponse {
        /// Provider that sent the body.
        provider: Provider,
        /// What was wrong with it.
        reason: String,
    },

    /// The query itself is invalid.
    #[error("Invalid query: {reason}")]
    InvalidQuery {
        /// Why the query was rejected.
        reason: String,
    },

    /// The HTTP client could not be set up.
    #[error("HTTP client error: {reason}")]
    Client {
        /// Description of the failure.
        reason: String,
    },
}

impl SourceError {
    /// Creates an unavailable error.
    #[must_use]
    pub fn unavailable(provider: Provider, reason: impl Into<String>) -> Self {
        Self::Unavailable {
            provider,
            reason: reason.into(),
        }
    }

    /// Creates a malformed response error.
    #[must_use]
    pub fn malformed(provider: Provider, reason: impl Into<String>) -> Self {
        Self::MalformedResponse {
            provider,
            reason: reason.into(),
        }
    }

    /// Creates an invalid query error.
    #[must_use]
    pub fn invalid_query(reason: impl Into<String>) -> Self {
        Self::InvalidQuery {
            reason: reason.into(),
        }
    }

    /// Returns the provider involved, if any.
    #[must_use]
    pub fn provider(&self) -> Option<Provider> {
        match self {
            Self::Unavailable { provider, .. } | Self::MalformedResponse { provider, .. } => {
                Some(*provider)
            }
            Self::InvalidQuery { .. } | Self::Client { .. } => None,
        }
    }
}
