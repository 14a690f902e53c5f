//! Application configuration. Summarizer credentials and report options.

use crate::adapters::ai::huggingface_adapter::{
    DEFAULT_BACKUP_MODEL_URL, DEFAULT_PRIMARY_MODEL_URL, DEFAULT_TIMEOUT_SECS,
};
use crate::domain::DomainError;
use crate::domain::report::DEFAULT_EXCERPT_CHARS;
use serde::{Deserialize, Deserializer};
use std::str::FromStr;
use tracing::warn;

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    // ─────────────────────────────────────────────────────────────────────────
    // Summarizer Configuration
    // ─────────────────────────────────────────────────────────────────────────
    /// Hugging Face access token. Read from POST_CARE_HF_API_TOKEN or HUGGINGFACE_API_TOKEN.
    #[serde(default)]
    pub hf_api_token: Option<String>,

    /// Primary summarization model endpoint. Read from POST_CARE_SUMMARY_MODEL_URL.
    #[serde(default)]
    pub summary_model_url: Option<String>,

    /// Backup model used while the primary is loading. Read from POST_CARE_SUMMARY_BACKUP_MODEL_URL.
    #[serde(default)]
    pub summary_backup_model_url: Option<String>,

    /// Per-request timeout in seconds (default 30). Read from POST_CARE_SUMMARY_TIMEOUT_SECS.
    #[serde(default, deserialize_with = "lenient_number")]
    pub summary_timeout_secs: Option<u64>,

    // ─────────────────────────────────────────────────────────────────────────
    // Report Configuration
    // ─────────────────────────────────────────────────────────────────────────
    /// Characters of each answer echoed by the fallback report (default 150).
    /// Read from POST_CARE_FALLBACK_EXCERPT_CHARS.
    #[serde(default, deserialize_with = "lenient_number")]
    pub fallback_excerpt_chars: Option<usize>,
}

impl AppConfig {
    pub fn load() -> Result<Self, DomainError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        c = c.add_source(config::Environment::with_prefix("POST_CARE"));
        if let Ok(path) = std::env::var("POST_CARE_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        Self::from_builder(c)
    }

    fn from_builder(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<Self, DomainError> {
        builder
            .build()
            .and_then(|built| built.try_deserialize())
            .map_err(|e| DomainError::Config(e.to_string()))
    }

    /// Returns the Hugging Face token if configured. Falls back to HUGGINGFACE_API_TOKEN.
    pub fn hf_api_token(&self) -> Option<String> {
        self.hf_api_token
            .clone()
            .or_else(|| std::env::var("HUGGINGFACE_API_TOKEN").ok())
            .filter(|t| !t.trim().is_empty())
    }

    /// Returns the primary model URL. Defaults to pegasus-xsum.
    pub fn summary_model_url_or_default(&self) -> String {
        self.summary_model_url
            .clone()
            .unwrap_or_else(|| DEFAULT_PRIMARY_MODEL_URL.to_string())
    }

    /// Returns the backup model URL. Defaults to t5-small.
    pub fn summary_backup_model_url_or_default(&self) -> String {
        self.summary_backup_model_url
            .clone()
            .unwrap_or_else(|| DEFAULT_BACKUP_MODEL_URL.to_string())
    }

    /// Returns the summarizer timeout in seconds. Defaults to 30.
    pub fn summary_timeout_secs_or_default(&self) -> u64 {
        self.summary_timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS)
    }

    /// Returns the fallback excerpt length. Defaults to 150 characters.
    pub fn fallback_excerpt_chars_or_default(&self) -> usize {
        self.fallback_excerpt_chars.unwrap_or(DEFAULT_EXCERPT_CHARS)
    }

    /// Returns true if the external summarizer is configured (token present).
    pub fn is_summarizer_configured(&self) -> bool {
        self.hf_api_token().is_some()
    }
}

/// Numeric option that tolerates a malformed value: it is logged and treated as
/// unset, so one bad number does not discard the rest of the configuration.
/// Environment values arrive as strings, file values as numbers.
fn lenient_number<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr + Deserialize<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw<T> {
        Number(T),
        Text(String),
    }

    Ok(match Option::<Raw<T>>::deserialize(deserializer)? {
        Some(Raw::Number(n)) => Some(n),
        Some(Raw::Text(text)) => match text.trim().parse() {
            Ok(n) => Some(n),
            Err(_) => {
                warn!(value = %text, "ignoring malformed numeric setting");
                None
            }
        },
        None => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.summary_timeout_secs_or_default(), 30);
        assert_eq!(cfg.fallback_excerpt_chars_or_default(), 150);
        assert!(cfg.summary_model_url_or_default().ends_with("pegasus-xsum"));
        assert!(cfg.summary_backup_model_url_or_default().ends_with("t5-small"));
    }

    #[test]
    fn test_explicit_values_win() {
        let cfg = AppConfig {
            hf_api_token: Some("hf_test".into()),
            summary_model_url: Some("http://localhost:8080/summarize".into()),
            summary_timeout_secs: Some(5),
            fallback_excerpt_chars: Some(40),
            ..Default::default()
        };
        assert!(cfg.is_summarizer_configured());
        assert_eq!(cfg.summary_model_url_or_default(), "http://localhost:8080/summarize");
        assert_eq!(cfg.summary_timeout_secs_or_default(), 5);
        assert_eq!(cfg.fallback_excerpt_chars_or_default(), 40);
    }

    #[test]
    fn test_blank_token_is_not_configured() {
        let cfg = AppConfig {
            hf_api_token: Some("  ".into()),
            ..Default::default()
        };
        assert!(cfg.hf_api_token().is_none());
    }

    #[test]
    fn test_malformed_number_keeps_other_settings() {
        let builder = config::Config::builder()
            .set_override("hf_api_token", "hf_test")
            .unwrap()
            .set_override("summary_timeout_secs", "thirty")
            .unwrap()
            .set_override("fallback_excerpt_chars", "80")
            .unwrap();
        let cfg = AppConfig::from_builder(builder).unwrap();
        assert_eq!(cfg.hf_api_token().as_deref(), Some("hf_test"));
        assert_eq!(cfg.summary_timeout_secs, None);
        assert_eq!(cfg.summary_timeout_secs_or_default(), 30);
        assert_eq!(cfg.fallback_excerpt_chars, Some(80));
    }

    #[test]
    fn test_numeric_values_from_file_sources() {
        let builder = config::Config::builder()
            .set_override("summary_timeout_secs", 12)
            .unwrap();
        let cfg = AppConfig::from_builder(builder).unwrap();
        assert_eq!(cfg.summary_timeout_secs_or_default(), 12);
    }
}
