use crate::algorithm::Algorithm;

/// Errors reported by [`HashContext`](crate::HashContext) and by
/// [`Algorithm`] parsing.
///
/// A refused operation leaves the context as it was.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HashError {
    /// The context was already finalized or discarded. Call
    /// [`reset`](crate::HashContext::reset) to start a new message.
    #[error("{algorithm} context is already finalized")]
    Finalized {
        algorithm: Algorithm,
    },

    /// The destination of `finalize_into` is not exactly one digest long.
    #[error("{algorithm} digest is {expected} bytes but the destination holds {actual}")]
    OutputLength {
        algorithm: Algorithm,
        expected: usize,
        actual: usize,
    },

    /// The name does not match any supported algorithm.
    #[error("unknown hash algorithm: {0:?}")]
    UnknownAlgorithm(String),
}
