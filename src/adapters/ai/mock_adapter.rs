//! Mock summarizer for testing without API calls.
//!
//! Returns a canned (deliberately stuttering) summary, or a configured failure.

use crate::domain::DomainError;
use crate::ports::SummarizerPort;
use std::time::Duration;
use tracing::info;

/// Mock summarizer.
///
/// Simulates network latency with a configurable delay.
pub struct MockSummarizer {
    /// Simulated network delay in milliseconds.
    delay_ms: u64,
    /// `None` answers with the canned stutter text.
    response: Option<Result<String, String>>,
}

impl MockSummarizer {
    /// Mock that answers with a stuttering summary of the input length (100ms delay).
    pub fn new() -> Self {
        Self {
            delay_ms: 100,
            response: None,
        }
    }

    /// Mock that always answers `text` verbatim.
    pub fn with_response(text: impl Into<String>) -> Self {
        Self {
            delay_ms: 0,
            response: Some(Ok(text.into())),
        }
    }

    /// Mock that always fails, like an unreachable endpoint.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            delay_ms: 0,
            response: Some(Err(reason.into())),
        }
    }

    pub fn with_delay(mut self, delay_ms: u64) -> Self {
        self.delay_ms = delay_ms;
        self
    }
}

impl Default for MockSummarizer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl SummarizerPort for MockSummarizer {
    async fn summarize(&self, text: &str) -> Result<String, DomainError> {
        info!(text_len = text.len(), "[MOCK] Simulating summarization");

        tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;

        match &self.response {
            None => Ok(format!(
                "[MOCK] patient patient check-in of {} characters reviewed.. no",
                text.chars().count()
            )),
            Some(Ok(response)) => Ok(response.clone()),
            Some(Err(reason)) => Err(DomainError::Summarizer(reason.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_default_response() {
        let mock = MockSummarizer::new().with_delay(1);
        let out = mock.summarize("abc").await.unwrap();
        assert!(out.starts_with("[MOCK]"));
        assert!(out.contains("3 characters"));
    }

    #[tokio::test]
    async fn test_mock_empty_response_is_returned_as_is() {
        let mock = MockSummarizer::with_response("");
        assert_eq!(mock.summarize("abc").await.unwrap(), "");
    }

    #[tokio::test]
    async fn test_mock_failure() {
        let mock = MockSummarizer::failing("timeout");
        let err = mock.summarize("abc").await.unwrap_err();
        assert!(matches!(err, DomainError::Summarizer(ref r) if r == "timeout"));
    }
}
