//! Summary composer. Runs the analyzers and scorers and assembles the report.
//!
//! `assess` never fails: if an analyzer reports an error the composer logs it
//! and returns the template report instead, with the risk level still
//! computed from the raw text.

use super::analyzers::{
    ActivityAnalyzer, Analyzer, CardiacAnalyzer, MedicationAnalyzer, RespiratoryAnalyzer,
};
use super::entities::{
    ActivityStatus, Assessment, AssessmentInput, AssessmentSummary, CardiacStatus, Domain,
    DomainStatus, FallbackSummary, MedicationStatus, OverallStatus, Report, RespiratoryStatus,
    Severity,
};
use super::errors::DomainError;
use super::recommendations::generate_recommendations;
use super::recovery::assess_recovery_stage;
use super::report::DEFAULT_EXCERPT_CHARS;
use super::risk::assess_risk_level;
use chrono::{Local, NaiveDateTime, Timelike};
use std::sync::Arc;
use tracing::{debug, warn};

/// Overall status from the severity markers of the domain statuses.
pub fn determine_overall_status(statuses: &[DomainStatus]) -> OverallStatus {
    let count = |severity: Severity| statuses.iter().filter(|s| s.severity() == severity).count();
    let concerning = count(Severity::Concerning);
    let positive = count(Severity::Positive);

    match (concerning, positive) {
        (c, _) if c >= 2 => OverallStatus::MultipleConcerns,
        (1, _) => OverallStatus::OneConcern,
        (_, p) if p >= 3 => OverallStatus::ExcellentProgress,
        (_, p) if p >= 2 => OverallStatus::GoodProgress,
        _ => OverallStatus::Mixed,
    }
}

/// Wires the four analyzers. Cheap to clone and safe to share across threads.
#[derive(Clone)]
pub struct SummaryComposer {
    cardiac: Arc<dyn Analyzer>,
    respiratory: Arc<dyn Analyzer>,
    medication: Arc<dyn Analyzer>,
    activity: Arc<dyn Analyzer>,
    excerpt_chars: usize,
}

impl Default for SummaryComposer {
    fn default() -> Self {
        Self::new()
    }
}

impl SummaryComposer {
    /// Composer with the built-in keyword analyzers.
    pub fn new() -> Self {
        Self {
            cardiac: Arc::new(CardiacAnalyzer),
            respiratory: Arc::new(RespiratoryAnalyzer),
            medication: Arc::new(MedicationAnalyzer),
            activity: Arc::new(ActivityAnalyzer),
            excerpt_chars: DEFAULT_EXCERPT_CHARS,
        }
    }

    /// Replace the analyzer for the domain it reports via [`Analyzer::domain`].
    pub fn with_analyzer(mut self, analyzer: Arc<dyn Analyzer>) -> Self {
        match analyzer.domain() {
            Domain::Cardiac => self.cardiac = analyzer,
            Domain::Respiratory => self.respiratory = analyzer,
            Domain::Medication => self.medication = analyzer,
            Domain::Activity => self.activity = analyzer,
        }
        self
    }

    /// Characters of each raw answer echoed by the fallback report.
    pub fn with_excerpt_chars(mut self, excerpt_chars: usize) -> Self {
        self.excerpt_chars = excerpt_chars;
        self
    }

    /// Assess with the current local time, truncated to the minute.
    pub fn assess(&self, input: &AssessmentInput) -> Assessment {
        let now = Local::now().naive_local();
        let at = now.with_second(0).and_then(|t| t.with_nanosecond(0)).unwrap_or(now);
        self.assess_at(input, at)
    }

    /// Assess with an explicit timestamp. Same input and time give identical output.
    pub fn assess_at(&self, input: &AssessmentInput, generated_at: NaiveDateTime) -> Assessment {
        let combined = input.combined_text();
        let risk_level = assess_risk_level(&combined);

        let report = match self.summarize(input, &combined, generated_at) {
            Ok(summary) => {
                debug!(
                    overall = ?summary.overall,
                    stage = ?summary.recovery_stage,
                    risk = %risk_level,
                    "assessment composed"
                );
                Report::Detailed(summary)
            }
            Err(e) => {
                warn!(error = %e, risk = %risk_level, "classification failed, using template report");
                Report::Fallback(FallbackSummary {
                    input: input.clone(),
                    excerpt_chars: self.excerpt_chars,
                    generated_at,
                })
            }
        };

        Assessment {
            report,
            risk_level,
            narrative: None,
        }
    }

    fn summarize(
        &self,
        input: &AssessmentInput,
        combined: &str,
        generated_at: NaiveDateTime,
    ) -> Result<AssessmentSummary, DomainError> {
        let cardiac = match self.run(&*self.cardiac, Domain::Cardiac, input)? {
            DomainStatus::Cardiac(s) => s,
            other => return Err(mismatch(Domain::Cardiac, other)),
        };
        let respiratory = match self.run(&*self.respiratory, Domain::Respiratory, input)? {
            DomainStatus::Respiratory(s) => s,
            other => return Err(mismatch(Domain::Respiratory, other)),
        };
        let medication = match self.run(&*self.medication, Domain::Medication, input)? {
            DomainStatus::Medication(s) => s,
            other => return Err(mismatch(Domain::Medication, other)),
        };
        let activity = match self.run(&*self.activity, Domain::Activity, input)? {
            DomainStatus::Activity(s) => s,
            other => return Err(mismatch(Domain::Activity, other)),
        };

        Ok(build_summary(
            cardiac,
            respiratory,
            medication,
            activity,
            combined,
            generated_at,
        ))
    }

    fn run(
        &self,
        analyzer: &dyn Analyzer,
        domain: Domain,
        input: &AssessmentInput,
    ) -> Result<DomainStatus, DomainError> {
        analyzer
            .analyze(input.field(domain))
            .map_err(|e| DomainError::Classification(format!("{} analyzer: {}", domain, e)))
    }
}

fn mismatch(expected: Domain, got: DomainStatus) -> DomainError {
    DomainError::Classification(format!(
        "{} analyzer returned a {} status",
        expected,
        got.domain()
    ))
}

fn build_summary(
    cardiac: CardiacStatus,
    respiratory: RespiratoryStatus,
    medication: MedicationStatus,
    activity: ActivityStatus,
    combined: &str,
    generated_at: NaiveDateTime,
) -> AssessmentSummary {
    let statuses = [
        DomainStatus::Cardiac(cardiac),
        DomainStatus::Respiratory(respiratory),
        DomainStatus::Medication(medication),
        DomainStatus::Activity(activity),
    ];
    AssessmentSummary {
        overall: determine_overall_status(&statuses),
        cardiac,
        respiratory,
        medication,
        activity,
        recovery_stage: assess_recovery_stage(combined),
        recommendations: generate_recommendations(&statuses),
        generated_at,
    }
}

/// Assess with the built-in analyzers and the current time.
pub fn assess(input: &AssessmentInput) -> Assessment {
    SummaryComposer::new().assess(input)
}

/// Assess with the built-in analyzers at a fixed time.
pub fn assess_at(input: &AssessmentInput, generated_at: NaiveDateTime) -> Assessment {
    SummaryComposer::new().assess_at(input, generated_at)
}
