//! Domain errors. Used by ports, the engine and use cases.
//!
//! Adapters map infrastructure errors into these.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    /// An analyzer could not classify its field. The composer recovers from this
    /// by switching to the fallback report; it never reaches the caller.
    #[error("Classification failed: {0}")]
    Classification(String),

    /// The optional external summarizer failed (transport, status, or body).
    #[error("Summarizer failed: {0}")]
    Summarizer(String),

    #[error("Configuration error: {0}")]
    Config(String),

    /// Interactive intake was cancelled or could not read input.
    #[error("Input error: {0}")]
    Input(String),
}
