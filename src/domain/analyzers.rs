//! Domain analyzers. Map one free-text answer to a [`DomainStatus`].
//!
//! Each analyzer lowercases its input and walks its keyword sets in a fixed
//! priority order; the first matching set decides. Respiratory and medication
//! discount concerning words when any negation cue is present. Cardiac and
//! activity do not.

use super::entities::{
    ActivityStatus, CardiacStatus, Domain, DomainStatus, MedicationStatus, RespiratoryStatus,
};
use super::errors::DomainError;
use super::keywords::*;
use super::negation::has_negation;

/// Classifies the answer for one domain.
///
/// Implementations must be pure. An `Err` makes the composer switch to the
/// fallback report.
pub trait Analyzer: Send + Sync {
    fn domain(&self) -> Domain;

    fn analyze(&self, text: &str) -> Result<DomainStatus, DomainError>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CardiacAnalyzer;

impl CardiacAnalyzer {
    pub fn classify(text: &str) -> CardiacStatus {
        let text = text.to_lowercase();
        if contains_any(&text, CARDIAC_CONCERNING) {
            CardiacStatus::Concerning
        } else if contains_any(&text, CARDIAC_MODERATE) {
            CardiacStatus::Moderate
        } else if contains_any(&text, CARDIAC_MILD) {
            CardiacStatus::Mild
        } else if contains_any(&text, CARDIAC_POSITIVE) {
            CardiacStatus::NoSignificantSymptoms
        } else {
            CardiacStatus::MixedPresentation
        }
    }
}

impl Analyzer for CardiacAnalyzer {
    fn domain(&self) -> Domain {
        Domain::Cardiac
    }

    fn analyze(&self, text: &str) -> Result<DomainStatus, DomainError> {
        Ok(DomainStatus::Cardiac(Self::classify(text)))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RespiratoryAnalyzer;

impl RespiratoryAnalyzer {
    pub fn classify(text: &str) -> RespiratoryStatus {
        let text = text.to_lowercase();
        let has_negative = has_negation(&text);
        let has_concerning = contains_any(&text, RESPIRATORY_CONCERNING);

        match (has_concerning, has_negative) {
            (true, true) => RespiratoryStatus::NoSignificantSymptoms,
            (true, false) => RespiratoryStatus::Concerning,
            _ if contains_any(&text, RESPIRATORY_MILD) => RespiratoryStatus::Mild,
            _ if contains_any(&text, RESPIRATORY_POSITIVE) => RespiratoryStatus::Normal,
            _ => RespiratoryStatus::NeedsEvaluation,
        }
    }
}

impl Analyzer for RespiratoryAnalyzer {
    fn domain(&self) -> Domain {
        Domain::Respiratory
    }

    fn analyze(&self, text: &str) -> Result<DomainStatus, DomainError> {
        Ok(DomainStatus::Respiratory(Self::classify(text)))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MedicationAnalyzer;

impl MedicationAnalyzer {
    pub fn classify(text: &str) -> MedicationStatus {
        let text = text.to_lowercase();
        let has_negative = has_negation(&text);
        let has_adherence_issue = contains_any(&text, MEDICATION_ADHERENCE_ISSUES);
        let has_side_effect = contains_any(&text, MEDICATION_SIDE_EFFECTS);

        if has_adherence_issue && !has_negative {
            MedicationStatus::AdherenceConcern
        } else if has_side_effect && has_negative {
            MedicationStatus::GoodTolerance
        } else if has_side_effect {
            MedicationStatus::SideEffects
        } else if contains_any(&text, MEDICATION_POSITIVE) {
            MedicationStatus::GoodAdherence
        } else {
            MedicationStatus::NeedsClarification
        }
    }
}

impl Analyzer for MedicationAnalyzer {
    fn domain(&self) -> Domain {
        Domain::Medication
    }

    fn analyze(&self, text: &str) -> Result<DomainStatus, DomainError> {
        Ok(DomainStatus::Medication(Self::classify(text)))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ActivityAnalyzer;

impl ActivityAnalyzer {
    pub fn classify(text: &str) -> ActivityStatus {
        let text = text.to_lowercase();
        if contains_any(&text, ACTIVITY_CONCERNING) {
            ActivityStatus::SignificantLimitation
        } else if contains_any(&text, ACTIVITY_MODERATE) {
            ActivityStatus::GradualImprovement
        } else if contains_any(&text, ACTIVITY_POSITIVE) {
            ActivityStatus::GoodTolerance
        } else {
            ActivityStatus::NeedsAssessment
        }
    }
}

impl Analyzer for ActivityAnalyzer {
    fn domain(&self) -> Domain {
        Domain::Activity
    }

    fn analyze(&self, text: &str) -> Result<DomainStatus, DomainError> {
        Ok(DomainStatus::Activity(Self::classify(text)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Severity;

    #[test]
    fn test_cardiac_priority_order() {
        assert_eq!(
            CardiacAnalyzer::classify("Severe chest pain level 9"),
            CardiacStatus::Concerning
        );
        // "moderate" outranks "improving".
        assert_eq!(
            CardiacAnalyzer::classify("moderate but improving"),
            CardiacStatus::Moderate
        );
        assert_eq!(CardiacAnalyzer::classify("mild ache"), CardiacStatus::Mild);
        assert_eq!(
            CardiacAnalyzer::classify("no pain, feeling great"),
            CardiacStatus::NoSignificantSymptoms
        );
        assert_eq!(
            CardiacAnalyzer::classify("hard to say"),
            CardiacStatus::MixedPresentation
        );
    }

    #[test]
    fn test_cardiac_ignores_negation() {
        // No negation adjustment in this domain.
        assert_eq!(
            CardiacAnalyzer::classify("no severe symptoms"),
            CardiacStatus::Concerning
        );
    }

    #[test]
    fn test_cardiac_mild_counts_as_positive() {
        assert_eq!(CardiacStatus::Mild.severity(), Severity::Positive);
    }

    #[test]
    fn test_respiratory_decision_table() {
        assert_eq!(
            RespiratoryAnalyzer::classify("I have severe difficulty breathing"),
            RespiratoryStatus::Concerning
        );
        assert_eq!(
            RespiratoryAnalyzer::classify("I haven't had any shortness of breath"),
            RespiratoryStatus::NoSignificantSymptoms
        );
        assert_eq!(
            RespiratoryAnalyzer::classify("slight cough"),
            RespiratoryStatus::Mild
        );
        assert_eq!(
            RespiratoryAnalyzer::classify("breathing well"),
            RespiratoryStatus::Normal
        );
        assert_eq!(
            RespiratoryAnalyzer::classify("hmm"),
            RespiratoryStatus::NeedsEvaluation
        );
    }

    #[test]
    fn test_medication_decision_table() {
        assert_eq!(
            MedicationAnalyzer::classify("I stopped my pills"),
            MedicationStatus::AdherenceConcern
        );
        assert_eq!(
            MedicationAnalyzer::classify("I haven't had any side effects"),
            MedicationStatus::GoodTolerance
        );
        assert_eq!(
            MedicationAnalyzer::classify("feeling dizzy after the dose"),
            MedicationStatus::SideEffects
        );
        assert_eq!(
            MedicationAnalyzer::classify("taking as directed"),
            MedicationStatus::GoodAdherence
        );
        assert_eq!(
            MedicationAnalyzer::classify("hmm"),
            MedicationStatus::NeedsClarification
        );
    }

    #[test]
    fn test_medication_negated_adherence_falls_through() {
        // "not taking" contains the cue "not", so the adherence rule never
        // fires for it on its own; with nothing else it reads as adherence.
        assert_eq!(
            MedicationAnalyzer::classify("not taking them"),
            MedicationStatus::GoodAdherence
        );
    }

    #[test]
    fn test_activity_decision_table() {
        assert_eq!(
            ActivityAnalyzer::classify("I'm exhausted all day"),
            ActivityStatus::SignificantLimitation
        );
        assert_eq!(
            ActivityAnalyzer::classify("slowly improving"),
            ActivityStatus::GradualImprovement
        );
        assert_eq!(
            ActivityAnalyzer::classify("Good energy, active"),
            ActivityStatus::GoodTolerance
        );
        assert_eq!(ActivityAnalyzer::classify(""), ActivityStatus::NeedsAssessment);
    }

    #[test]
    fn test_empty_and_whitespace_input_is_ambiguous() {
        for text in ["", "   ", "\n\t"] {
            assert_eq!(
                CardiacAnalyzer.analyze(text).unwrap().severity(),
                Severity::Ambiguous
            );
            assert_eq!(
                RespiratoryAnalyzer.analyze(text).unwrap().severity(),
                Severity::Ambiguous
            );
            assert_eq!(
                MedicationAnalyzer.analyze(text).unwrap().severity(),
                Severity::Ambiguous
            );
            assert_eq!(
                ActivityAnalyzer.analyze(text).unwrap().severity(),
                Severity::Ambiguous
            );
        }
    }

    #[test]
    fn test_analyze_tags_domain() {
        let status = MedicationAnalyzer.analyze("ok").unwrap();
        assert_eq!(status.domain(), Domain::Medication);
        assert_eq!(MedicationAnalyzer.domain(), Domain::Medication);
    }
}
