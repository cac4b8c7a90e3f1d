//! Shared error types for the services crate.

use thiserror::Error;

/// Errors emitted by `QuizService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizError {
    #[error("no cards available for a quiz round")]
    Empty,

    #[error("card index {0} is out of range")]
    OutOfRange(usize),

    #[error("scripted sampler ran out of indices")]
    ScriptExhausted,
}
