//! Domain entities. Plain value types built fresh for every assessment.
//!
//! No HTTP/UI types here. Labels are fixed strings so reports stay stable
//! across releases.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The four free-text answers of a post-care check-in. Any field may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentInput {
    pub cardiac_symptoms: String,
    pub breathing_physical: String,
    pub medication_response: String,
    pub activity_fatigue: String,
}

impl AssessmentInput {
    pub fn new(
        cardiac_symptoms: impl Into<String>,
        breathing_physical: impl Into<String>,
        medication_response: impl Into<String>,
        activity_fatigue: impl Into<String>,
    ) -> Self {
        Self {
            cardiac_symptoms: cardiac_symptoms.into(),
            breathing_physical: breathing_physical.into(),
            medication_response: medication_response.into(),
            activity_fatigue: activity_fatigue.into(),
        }
    }

    /// The raw field for a domain.
    pub fn field(&self, domain: Domain) -> &str {
        match domain {
            Domain::Cardiac => &self.cardiac_symptoms,
            Domain::Respiratory => &self.breathing_physical,
            Domain::Medication => &self.medication_response,
            Domain::Activity => &self.activity_fatigue,
        }
    }

    /// All four fields joined with single spaces, unmodified. Input of the
    /// risk scorer and the recovery-stage assessor.
    pub fn combined_text(&self) -> String {
        format!(
            "{} {} {} {}",
            self.cardiac_symptoms,
            self.breathing_physical,
            self.medication_response,
            self.activity_fatigue
        )
    }
}

/// The four fixed assessment axes, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    Cardiac,
    Respiratory,
    Medication,
    Activity,
}

impl Domain {
    pub const ALL: [Domain; 4] = [
        Domain::Cardiac,
        Domain::Respiratory,
        Domain::Medication,
        Domain::Activity,
    ];

    /// Section heading used in rendered reports.
    pub fn heading(self) -> &'static str {
        match self {
            Domain::Cardiac => "Cardiac Function",
            Domain::Respiratory => "Respiratory Status",
            Domain::Medication => "Medication Management",
            Domain::Activity => "Physical Activity",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Domain::Cardiac => "cardiac",
            Domain::Respiratory => "respiratory",
            Domain::Medication => "medication",
            Domain::Activity => "activity",
        };
        f.write_str(name)
    }
}

/// Severity marker every domain status collapses to for cross-domain aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Concerning,
    /// Moderate or mild findings that warrant monitoring.
    Moderate,
    Positive,
    Ambiguous,
}

impl Severity {
    pub fn icon(self) -> &'static str {
        match self {
            Severity::Concerning => "⚠️",
            Severity::Moderate => "🔶",
            Severity::Positive => "✅",
            Severity::Ambiguous => "🔍",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardiacStatus {
    Concerning,
    Moderate,
    /// Counts as positive: mild symptoms are the expected recovery trajectory.
    Mild,
    NoSignificantSymptoms,
    MixedPresentation,
}

impl CardiacStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Concerning => "CONCERNING SYMPTOMS - Requires immediate medical attention",
            Self::Moderate => "Moderate symptoms noted - Continue close monitoring",
            Self::Mild => "Mild symptoms - Positive recovery trajectory",
            Self::NoSignificantSymptoms => "No significant cardiac symptoms reported",
            Self::MixedPresentation => "Mixed symptom presentation - Requires clinical evaluation",
        }
    }

    pub fn severity(self) -> Severity {
        match self {
            Self::Concerning => Severity::Concerning,
            Self::Moderate => Severity::Moderate,
            Self::Mild | Self::NoSignificantSymptoms => Severity::Positive,
            Self::MixedPresentation => Severity::Ambiguous,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RespiratoryStatus {
    Concerning,
    Mild,
    /// Concerning words were present but denied ("no shortness of breath").
    NoSignificantSymptoms,
    Normal,
    NeedsEvaluation,
}

impl RespiratoryStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Concerning => "Respiratory concerns noted - Monitor closely",
            Self::Mild => "Mild respiratory symptoms - Within expected recovery range",
            Self::NoSignificantSymptoms => "No significant respiratory symptoms reported",
            Self::Normal => "Normal respiratory function reported",
            Self::NeedsEvaluation => "Respiratory status requires further evaluation",
        }
    }

    pub fn severity(self) -> Severity {
        match self {
            Self::Concerning => Severity::Concerning,
            Self::Mild => Severity::Moderate,
            Self::NoSignificantSymptoms | Self::Normal => Severity::Positive,
            Self::NeedsEvaluation => Severity::Ambiguous,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MedicationStatus {
    AdherenceConcern,
    GoodTolerance,
    SideEffects,
    GoodAdherence,
    NeedsClarification,
}

impl MedicationStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::AdherenceConcern => {
                "MEDICATION ADHERENCE CONCERN - Requires immediate intervention"
            }
            Self::GoodTolerance => "Good medication tolerance - No side effects reported",
            Self::SideEffects => "Side effects reported - May require medication adjustment",
            Self::GoodAdherence => "Good medication adherence - Continue current regimen",
            Self::NeedsClarification => "Medication compliance status needs clarification",
        }
    }

    pub fn severity(self) -> Severity {
        match self {
            Self::AdherenceConcern => Severity::Concerning,
            Self::SideEffects => Severity::Moderate,
            Self::GoodTolerance | Self::GoodAdherence => Severity::Positive,
            Self::NeedsClarification => Severity::Ambiguous,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityStatus {
    SignificantLimitation,
    GradualImprovement,
    GoodTolerance,
    NeedsAssessment,
}

impl ActivityStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::SignificantLimitation => "Significant activity limitations - Consider intervention",
            Self::GradualImprovement => "Gradual improvement in activity tolerance noted",
            Self::GoodTolerance => "Good activity tolerance - Recovery progressing well",
            Self::NeedsAssessment => "Activity level requires further assessment",
        }
    }

    pub fn severity(self) -> Severity {
        match self {
            Self::SignificantLimitation => Severity::Concerning,
            Self::GradualImprovement => Severity::Moderate,
            Self::GoodTolerance => Severity::Positive,
            Self::NeedsAssessment => Severity::Ambiguous,
        }
    }
}

/// Status of a single domain, tagged with the domain it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "domain", content = "status", rename_all = "lowercase")]
pub enum DomainStatus {
    Cardiac(CardiacStatus),
    Respiratory(RespiratoryStatus),
    Medication(MedicationStatus),
    Activity(ActivityStatus),
}

impl DomainStatus {
    pub fn domain(self) -> Domain {
        match self {
            DomainStatus::Cardiac(_) => Domain::Cardiac,
            DomainStatus::Respiratory(_) => Domain::Respiratory,
            DomainStatus::Medication(_) => Domain::Medication,
            DomainStatus::Activity(_) => Domain::Activity,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DomainStatus::Cardiac(s) => s.label(),
            DomainStatus::Respiratory(s) => s.label(),
            DomainStatus::Medication(s) => s.label(),
            DomainStatus::Activity(s) => s.label(),
        }
    }

    pub fn severity(self) -> Severity {
        match self {
            DomainStatus::Cardiac(s) => s.severity(),
            DomainStatus::Respiratory(s) => s.severity(),
            DomainStatus::Medication(s) => s.severity(),
            DomainStatus::Activity(s) => s.severity(),
        }
    }
}

impl fmt::Display for DomainStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.severity().icon(), self.label())
    }
}

/// Patient-facing triage tier. Ordered `Low < Medium < High` for display and filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RiskLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(RiskLevel::Low),
            "medium" => Ok(RiskLevel::Medium),
            "high" => Ok(RiskLevel::High),
            other => Err(format!("unknown risk level: {}", other)),
        }
    }
}

/// Qualitative recovery progress. Independent of [`RiskLevel`]; the two may disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecoveryStage {
    Advanced,
    Intermediate,
    Progressive,
    Early,
}

impl RecoveryStage {
    pub fn label(self) -> &'static str {
        match self {
            Self::Advanced => "Advanced recovery stage - patient demonstrating excellent progress",
            Self::Intermediate => "Intermediate recovery stage - steady progress with good indicators",
            Self::Progressive => "Progressive recovery stage - showing gradual improvement",
            Self::Early => "Early recovery stage - requires intensive monitoring and support",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Advanced => "🟢",
            Self::Intermediate | Self::Progressive => "🟡",
            Self::Early => "🔴",
        }
    }
}

impl fmt::Display for RecoveryStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.icon(), self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverallStatus {
    MultipleConcerns,
    OneConcern,
    ExcellentProgress,
    GoodProgress,
    Mixed,
}

impl OverallStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::MultipleConcerns => {
                "Multiple areas of concern requiring immediate medical attention"
            }
            Self::OneConcern => {
                "One area of concern noted - requires monitoring and possible intervention"
            }
            Self::ExcellentProgress => {
                "Patient showing excellent recovery progress across all major areas"
            }
            Self::GoodProgress => "Patient showing good recovery progress with stable condition",
            Self::Mixed => "Mixed recovery indicators - requires continued close monitoring",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::MultipleConcerns => "⚠️",
            Self::OneConcern | Self::Mixed => "🔶",
            Self::ExcellentProgress | Self::GoodProgress => "✅",
        }
    }
}

impl fmt::Display for OverallStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.icon(), self.label())
    }
}

/// Full structured result of the rule engine.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssessmentSummary {
    pub overall: OverallStatus,
    pub cardiac: CardiacStatus,
    pub respiratory: RespiratoryStatus,
    pub medication: MedicationStatus,
    pub activity: ActivityStatus,
    pub recovery_stage: RecoveryStage,
    pub recommendations: Vec<&'static str>,
    pub generated_at: NaiveDateTime,
}

impl AssessmentSummary {
    /// The four domain statuses in report order.
    pub fn domain_statuses(&self) -> [DomainStatus; 4] {
        [
            DomainStatus::Cardiac(self.cardiac),
            DomainStatus::Respiratory(self.respiratory),
            DomainStatus::Medication(self.medication),
            DomainStatus::Activity(self.activity),
        ]
    }
}

/// Minimal template used when classification fails: echoes the raw answers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FallbackSummary {
    pub input: AssessmentInput,
    pub excerpt_chars: usize,
    pub generated_at: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Report {
    Detailed(AssessmentSummary),
    Fallback(FallbackSummary),
}

impl Report {
    pub fn is_fallback(&self) -> bool {
        matches!(self, Report::Fallback(_))
    }

    pub fn generated_at(&self) -> NaiveDateTime {
        match self {
            Report::Detailed(s) => s.generated_at,
            Report::Fallback(s) => s.generated_at,
        }
    }
}

/// What callers get back: a report plus the independently computed risk level.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assessment {
    pub report: Report,
    pub risk_level: RiskLevel,
    /// Cleaned text from the external summarizer, when one was configured and succeeded.
    pub narrative: Option<String>,
}

impl Assessment {
    /// Text to show the clinician: the narrative if present, else the rendered report.
    pub fn summary_text(&self) -> String {
        match &self.narrative {
            Some(text) => text.clone(),
            None => self.report.to_string(),
        }
    }
}
