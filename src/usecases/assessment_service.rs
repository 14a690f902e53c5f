//! Assessment service. Runs the rule engine and, when configured, asks the
//! external summarizer for a narrative.
//!
//! Coordinates between the domain composer (report + risk) and the summarizer
//! port (optional narrative). The narrative is cleaned before it is attached;
//! any summarizer failure is logged and swallowed.

use crate::adapters::ai::clean_summary;
use crate::domain::{Assessment, AssessmentInput, Domain, SummaryComposer};
use crate::ports::SummarizerPort;
use chrono::NaiveDateTime;
use std::sync::Arc;
use tracing::{info, warn};

/// Service for post-care check-in assessment.
///
/// Orchestrates the flow:
/// 1. Classify the four answers and score risk (always succeeds)
/// 2. Optionally request a narrative from the summarizer
/// 3. Clean the narrative, or drop it on any failure
pub struct AssessmentService {
    composer: SummaryComposer,
    summarizer: Option<Arc<dyn SummarizerPort>>,
}

impl AssessmentService {
    /// Create a new assessment service.
    ///
    /// # Arguments
    /// * `composer` - Rule engine wiring (built-in analyzers unless overridden)
    /// * `summarizer` - External summarizer, or `None` to use the rule-based report only
    pub fn new(composer: SummaryComposer, summarizer: Option<Arc<dyn SummarizerPort>>) -> Self {
        Self {
            composer,
            summarizer,
        }
    }

    /// Assess a check-in. Never fails; see [`SummaryComposer::assess`].
    pub async fn assess(&self, input: &AssessmentInput) -> Assessment {
        let assessment = self.composer.assess(input);
        self.finish(input, assessment).await
    }

    /// Same as [`Self::assess`] with a fixed report timestamp.
    pub async fn assess_at(&self, input: &AssessmentInput, at: NaiveDateTime) -> Assessment {
        let assessment = self.composer.assess_at(input, at);
        self.finish(input, assessment).await
    }

    async fn finish(&self, input: &AssessmentInput, mut assessment: Assessment) -> Assessment {
        if let Some(summarizer) = &self.summarizer {
            assessment.narrative = Self::narrative(summarizer.as_ref(), input).await;
        }
        info!(
            risk = %assessment.risk_level,
            fallback = assessment.report.is_fallback(),
            narrative = assessment.narrative.is_some(),
            "assessment complete"
        );
        assessment
    }

    async fn narrative(summarizer: &dyn SummarizerPort, input: &AssessmentInput) -> Option<String> {
        match summarizer.summarize(&summarizer_prompt(input)).await {
            Ok(raw) => {
                let cleaned = clean_summary(&raw);
                if cleaned.is_empty() {
                    warn!("summarizer returned nothing usable, using rule-based report");
                    None
                } else {
                    Some(cleaned)
                }
            }
            Err(e) => {
                warn!(error = %e, "summarizer unavailable, using rule-based report");
                None
            }
        }
    }
}

/// Text sent to the summarizer: one labelled line per answer.
fn summarizer_prompt(input: &AssessmentInput) -> String {
    Domain::ALL
        .iter()
        .map(|&domain| {
            let label = match domain {
                Domain::Cardiac => "Cardiac symptoms",
                Domain::Respiratory => "Breathing and physical condition",
                Domain::Medication => "Medication response",
                Domain::Activity => "Activity and fatigue",
            };
            format!("{}: {}", label, input.field(domain).trim())
        })
        .collect::<Vec<_>>()
        .join("\n")
}
