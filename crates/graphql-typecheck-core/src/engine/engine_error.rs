use crate::inference::InferenceError;
use crate::reconcile::ReconcileError;
use thiserror::Error;

/// Failures after a query has validated. Any of these is a bug in the
/// engine and is reported as an unhandled exception.
#[derive(Debug, Error)]
pub(crate) enum EngineError {
    #[error("type inference failed: {0}")]
    Inference(#[from] InferenceError),

    #[error("annotation reconciliation failed: {0}")]
    Reconcile(#[from] ReconcileError),
}
