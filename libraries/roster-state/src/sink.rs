//! Diagnostic sink for swallowed remote failures

use roster_client::{ClientError, Operation};
use tracing::error;

/// Receives `(operation, error)` pairs for remote failures the controller
/// absorbs instead of propagating.
pub trait DiagnosticSink: Send + Sync {
    fn record(&self, operation: Operation, error: &ClientError);
}

/// Default sink: one `error`-level tracing event per failure.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn record(&self, operation: Operation, error: &ClientError) {
        error!(operation = %operation, error = %error, "Remote operation failed");
    }
}
