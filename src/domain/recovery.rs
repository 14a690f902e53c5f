//! Recovery-stage assessor. A separate rule set from the risk scorer, run on
//! the same combined text; the two results are not reconciled.

use super::entities::RecoveryStage;
use super::keywords::{RECOVERY_CONCERNING, RECOVERY_EXCELLENT, RECOVERY_GOOD, count_present};
use super::negation::has_negation;

/// Stage for the combined answers (any case).
pub fn assess_recovery_stage(text: &str) -> RecoveryStage {
    let text = text.to_lowercase();
    let has_negative_symptoms = has_negation(&text);

    let mut excellent = count_present(&text, RECOVERY_EXCELLENT);
    let good = count_present(&text, RECOVERY_GOOD);
    let mut concerning = count_present(&text, RECOVERY_CONCERNING);

    // Denied symptoms read as a positive signal.
    if concerning > 0 && has_negative_symptoms {
        excellent += 1;
        concerning = 0;
    }

    if excellent >= 2 || (good >= 3 && concerning == 0) {
        RecoveryStage::Advanced
    } else if good >= 2 && concerning == 0 {
        RecoveryStage::Intermediate
    } else if concerning >= 2 {
        RecoveryStage::Early
    } else {
        RecoveryStage::Progressive
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_progressive() {
        assert_eq!(assess_recovery_stage(""), RecoveryStage::Progressive);
    }

    #[test]
    fn test_advanced_from_excellent_words() {
        assert_eq!(
            assess_recovery_stage("everything is normal, excellent week"),
            RecoveryStage::Advanced
        );
    }

    #[test]
    fn test_advanced_from_good_words_alone() {
        // No excellent words; three good words and nothing concerning.
        assert_eq!(
            assess_recovery_stage("good, fine and stable"),
            RecoveryStage::Advanced
        );
    }

    #[test]
    fn test_one_concerning_word_blocks_good_advancement() {
        assert_eq!(
            assess_recovery_stage("good fine stable but tired"),
            RecoveryStage::Progressive
        );
    }

    #[test]
    fn test_intermediate_from_good_words() {
        assert_eq!(
            assess_recovery_stage("stable and improving"),
            RecoveryStage::Intermediate
        );
    }

    #[test]
    fn test_early_from_concerning_words() {
        assert_eq!(
            assess_recovery_stage("severe pain, always tired"),
            RecoveryStage::Early
        );
    }

    #[test]
    fn test_denied_symptoms_boost_excellent() {
        // One excellent word plus the negation boost reaches Advanced.
        assert_eq!(
            assess_recovery_stage("never any pain, feeling great"),
            RecoveryStage::Advanced
        );
    }

    #[test]
    fn test_may_disagree_with_risk_level() {
        use crate::domain::entities::RiskLevel;
        use crate::domain::risk::assess_risk_level;

        // Override keyword makes risk high while the stage stays optimistic.
        let text = "no severe issues, excellent and great";
        assert_eq!(assess_risk_level(text), RiskLevel::High);
        assert_eq!(assess_recovery_stage(text), RecoveryStage::Advanced);
    }
}
