//! Error types for the Roster client.

use std::fmt;
use thiserror::Error;

/// Remote operation a failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Read of the full collection
    List,
    /// Creation of one entity
    Create,
    /// Deletion of one entity
    Delete,
}

impl Operation {
    /// Lowercase name used in logs and error messages
    pub fn as_str(self) -> &'static str {
        match self {
            Operation::List => "list",
            Operation::Create => "create",
            Operation::Delete => "delete",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Underlying reason a remote call did not succeed.
#[derive(Error, Debug)]
pub enum RemoteCause {
    /// Connection, DNS, TLS or timeout failure
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Server answered with a non-2xx status
    #[error("Server error ({status}): {body}")]
    Status { status: u16, body: String },

    /// Server answered 2xx but the body was not the expected JSON
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

/// Errors that can occur when talking to the users collection.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Invalid collection URL
    #[error("Invalid collection URL: {0}")]
    InvalidUrl(String),

    /// Id that cannot be addressed as a single path segment
    #[error("Invalid entity id: {0:?}")]
    InvalidId(String),

    /// HTTP client could not be constructed
    #[error("HTTP client setup failed: {0}")]
    Setup(reqwest::Error),

    /// Transport or non-2xx failure for a list/create/delete call
    #[error("Remote unavailable during {operation}: {cause}")]
    RemoteUnavailable {
        operation: Operation,
        #[source]
        cause: RemoteCause,
    },
}

impl ClientError {
    pub(crate) fn remote(operation: Operation, cause: impl Into<RemoteCause>) -> Self {
        Self::RemoteUnavailable {
            operation,
            cause: cause.into(),
        }
    }

    /// Operation that failed, for remote failures
    pub fn operation(&self) -> Option<Operation> {
        match self {
            Self::RemoteUnavailable { operation, .. } => Some(*operation),
            _ => None,
        }
    }

    /// HTTP status returned by the server, if the failure was a non-2xx answer
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::RemoteUnavailable {
                cause: RemoteCause::Status { status, .. },
                ..
            } => Some(*status),
            _ => None,
        }
    }
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;
