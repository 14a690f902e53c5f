//! Core domain layer. No external I/O dependencies.
//!
//! Entities and the triage rules live here. Dependencies flow inward.

pub mod analyzers;
pub mod composer;
pub mod entities;
pub mod errors;
pub mod keywords;
pub mod negation;
pub mod recommendations;
pub mod recovery;
pub mod report;
pub mod risk;

pub use analyzers::{
    ActivityAnalyzer, Analyzer, CardiacAnalyzer, MedicationAnalyzer, RespiratoryAnalyzer,
};
pub use composer::{SummaryComposer, assess, assess_at, determine_overall_status};
pub use entities::{
    ActivityStatus, Assessment, AssessmentInput, AssessmentSummary, CardiacStatus, Domain,
    DomainStatus, FallbackSummary, MedicationStatus, OverallStatus, RecoveryStage, Report,
    RespiratoryStatus, RiskLevel, Severity,
};
pub use errors::DomainError;
pub use recommendations::generate_recommendations;
pub use recovery::assess_recovery_stage;
pub use risk::{RiskBreakdown, assess_risk_level};
