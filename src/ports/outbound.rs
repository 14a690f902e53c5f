//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::DomainError;

/// External free-text summarizer (e.g. a hosted summarization model).
///
/// Best-effort: callers treat every `Err` as "no narrative" and keep the
/// rule-based report. Output is raw model text and must be cleaned before display.
#[async_trait::async_trait]
pub trait SummarizerPort: Send + Sync {
    /// Summarize the patient's combined answers.
    async fn summarize(&self, text: &str) -> Result<String, DomainError>;
}
