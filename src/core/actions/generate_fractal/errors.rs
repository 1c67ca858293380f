use crate::core::actions::cancellation::Cancelled;
use thiserror::Error;

/// Failure of a cancel-aware generation run.
///
/// Cancellation is expected control flow for callers that restart work, so it is kept
/// apart from algorithm failures.
#[derive(Debug, PartialEq, Eq, Error)]
pub enum GenerateFractalError<E> {
    #[error(transparent)]
    Cancelled(Cancelled),
    #[error("algorithm error: {0}")]
    Algorithm(#[source] E),
}
