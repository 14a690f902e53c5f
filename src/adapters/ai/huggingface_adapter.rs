//! Hugging Face Inference API adapter for narrative summaries.
//!
//! Implements `SummarizerPort`. Tries an abstractive summarization model first;
//! when it answers 503 (model still loading) it retries once on a smaller
//! text-to-text model. Every other failure is returned as
//! `DomainError::Summarizer` and the caller falls back to the rule-based report.
//! Output is returned raw; cleanup happens in the assessment service.

use crate::domain::DomainError;
use crate::ports::SummarizerPort;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info, warn};

pub const DEFAULT_PRIMARY_MODEL_URL: &str =
    "https://api-inference.huggingface.co/models/google/pegasus-xsum";
pub const DEFAULT_BACKUP_MODEL_URL: &str = "https://api-inference.huggingface.co/models/t5-small";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Hugging Face summarizer.
pub struct HuggingFaceAdapter {
    client: reqwest::Client,
    api_token: String,
    primary_url: String,
    backup_url: String,
}

impl HuggingFaceAdapter {
    /// Create a new adapter.
    ///
    /// # Arguments
    /// * `api_token` - Hugging Face access token (sent as Bearer)
    /// * `primary_url` - Summarization model endpoint (reads `summary_text`)
    /// * `backup_url` - Text-to-text model used when the primary is loading (reads `generated_text`)
    /// * `timeout` - Per-request timeout
    pub fn new(
        api_token: String,
        primary_url: String,
        backup_url: String,
        timeout: Duration,
    ) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DomainError::Summarizer(format!("HTTP client build failed: {}", e)))?;
        Ok(Self {
            client,
            api_token,
            primary_url,
            backup_url,
        })
    }

    fn primary_request(text: &str) -> InferenceRequest {
        InferenceRequest {
            inputs: text.to_string(),
            parameters: GenerationParameters {
                max_length: 100,
                min_length: 30,
                do_sample: true,
                temperature: 0.7,
                top_p: Some(0.9),
                repetition_penalty: Some(1.2),
            },
        }
    }

    fn backup_request(text: &str) -> InferenceRequest {
        InferenceRequest {
            inputs: format!("summarize: {}", text),
            parameters: GenerationParameters {
                max_length: 100,
                min_length: 20,
                do_sample: true,
                temperature: 0.7,
                top_p: None,
                repetition_penalty: None,
            },
        }
    }

    async fn post(
        &self,
        url: &str,
        request: &InferenceRequest,
    ) -> Result<reqwest::Response, DomainError> {
        self.client
            .post(url)
            .bearer_auth(&self.api_token)
            .json(request)
            .send()
            .await
            .map_err(|e| DomainError::Summarizer(format!("HTTP request failed: {}", e)))
    }

    async fn read_summary(
        response: reqwest::Response,
        field: OutputField,
    ) -> Result<String, DomainError> {
        let body = response
            .text()
            .await
            .map_err(|e| DomainError::Summarizer(format!("Failed to read response: {}", e)))?;
        parse_output(&body, field)
    }
}

/// Which key of the first output object carries the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputField {
    SummaryText,
    GeneratedText,
}

#[derive(Serialize)]
struct InferenceRequest {
    inputs: String,
    parameters: GenerationParameters,
}

#[derive(Serialize)]
struct GenerationParameters {
    max_length: u32,
    min_length: u32,
    do_sample: bool,
    temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    top_p: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    repetition_penalty: Option<f32>,
}

/// One element of the inference API's output array.
#[derive(Deserialize)]
struct InferenceOutput {
    summary_text: Option<String>,
    generated_text: Option<String>,
}

/// Extract the text from a JSON array body like `[{"summary_text": "..."}]`.
fn parse_output(body: &str, field: OutputField) -> Result<String, DomainError> {
    let outputs: Vec<InferenceOutput> = serde_json::from_str(body).map_err(|e| {
        warn!(error = %e, body = %body.chars().take(200).collect::<String>(), "unexpected summarizer body");
        DomainError::Summarizer(format!("Failed to parse response: {}", e))
    })?;
    let first = outputs
        .into_iter()
        .next()
        .ok_or_else(|| DomainError::Summarizer("Empty output array".to_string()))?;
    let text = match field {
        OutputField::SummaryText => first.summary_text,
        OutputField::GeneratedText => first.generated_text,
    }
    .unwrap_or_default();
    if text.trim().is_empty() {
        return Err(DomainError::Summarizer("Model returned no text".to_string()));
    }
    Ok(text)
}

fn status_error(status: StatusCode, body: &str) -> DomainError {
    DomainError::Summarizer(format!(
        "API error {}: {}",
        status,
        body.chars().take(200).collect::<String>()
    ))
}

#[async_trait::async_trait]
impl SummarizerPort for HuggingFaceAdapter {
    async fn summarize(&self, text: &str) -> Result<String, DomainError> {
        info!(text_len = text.len(), url = %self.primary_url, "requesting summary");

        let response = self
            .post(&self.primary_url, &Self::primary_request(text))
            .await?;
        let status = response.status();

        let raw = if status.is_success() {
            Self::read_summary(response, OutputField::SummaryText).await?
        } else if status == StatusCode::SERVICE_UNAVAILABLE {
            info!(url = %self.backup_url, "primary model loading, trying backup model");
            let backup = self
                .post(&self.backup_url, &Self::backup_request(text))
                .await?;
            let backup_status = backup.status();
            if !backup_status.is_success() {
                let body = backup.text().await.unwrap_or_default();
                warn!(status = %backup_status, "backup summarizer returned error");
                return Err(status_error(backup_status, &body));
            }
            Self::read_summary(backup, OutputField::GeneratedText).await?
        } else {
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, "summarizer returned error");
            return Err(status_error(status, &body));
        };

        debug!(raw_len = raw.len(), "summary received");
        Ok(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_summary_text() {
        let body = r#"[{"summary_text": "Patient is stable."}]"#;
        assert_eq!(
            parse_output(body, OutputField::SummaryText).unwrap(),
            "Patient is stable."
        );
    }

    #[test]
    fn test_parse_generated_text() {
        let body = r#"[{"generated_text": "stable recovery"}]"#;
        assert_eq!(
            parse_output(body, OutputField::GeneratedText).unwrap(),
            "stable recovery"
        );
    }

    #[test]
    fn test_parse_wrong_field_is_error() {
        let body = r#"[{"generated_text": "stable recovery"}]"#;
        assert!(parse_output(body, OutputField::SummaryText).is_err());
    }

    #[test]
    fn test_parse_empty_and_malformed() {
        assert!(parse_output("[]", OutputField::SummaryText).is_err());
        assert!(parse_output(r#"{"error": "loading"}"#, OutputField::SummaryText).is_err());
        assert!(parse_output("not json", OutputField::SummaryText).is_err());
        assert!(parse_output(r#"[{"summary_text": "  "}]"#, OutputField::SummaryText).is_err());
    }

    #[test]
    fn test_backup_request_is_prefixed() {
        let req = HuggingFaceAdapter::backup_request("chest feels fine");
        assert_eq!(req.inputs, "summarize: chest feels fine");
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["parameters"]["min_length"], 20);
        assert!(json["parameters"].get("top_p").is_none());
    }

    #[test]
    fn test_primary_request_parameters() {
        let json = serde_json::to_value(HuggingFaceAdapter::primary_request("x")).unwrap();
        assert_eq!(json["inputs"], "x");
        assert_eq!(json["parameters"]["max_length"], 100);
        assert_eq!(json["parameters"]["min_length"], 30);
        assert_eq!(json["parameters"]["do_sample"], true);
    }
}
