//! Risk scorer. Aggregates all four answers into a single [`RiskLevel`].
//!
//! High-risk keywords are counted only when their first occurrence is not
//! negated locally. On top of that, a coarse global correction credits the
//! low-risk side whenever the text both negates something and mentions a
//! high-risk keyword. Both corrections only ever pull toward low risk.

use super::entities::RiskLevel;
use super::keywords::{
    HIGH_RISK, HIGH_RISK_OVERRIDE, LOW_RISK, MEDIUM_RISK, contains_any, count_present,
};
use super::negation::{has_negation, is_negated_at};
use serde::Serialize;
use tracing::debug;

/// Bonus added to the low-risk count by the global negation correction.
const NEGATED_HIGH_RISK_BONUS: usize = 2;

/// Intermediate counts behind a risk decision.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RiskBreakdown {
    pub has_negative: bool,
    pub high_risk_count: usize,
    pub medium_risk_count: usize,
    pub low_risk_count: usize,
    /// A keyword from the override set was present.
    pub forced_high: bool,
}

impl RiskBreakdown {
    /// Score `text` (any case). Usually the four answers joined with spaces.
    pub fn compute(text: &str) -> Self {
        let text = text.to_lowercase();
        let has_negative = has_negation(&text);

        let high_risk_count = HIGH_RISK
            .iter()
            .filter_map(|k| text.find(k))
            .filter(|&pos| !is_negated_at(&text, pos))
            .count();
        let mut low_risk_count = count_present(&text, LOW_RISK);
        let medium_risk_count = count_present(&text, MEDIUM_RISK);

        if has_negative && contains_any(&text, HIGH_RISK) {
            low_risk_count += NEGATED_HIGH_RISK_BONUS;
        }

        Self {
            has_negative,
            high_risk_count,
            medium_risk_count,
            low_risk_count,
            forced_high: contains_any(&text, HIGH_RISK_OVERRIDE),
        }
    }

    pub fn level(&self) -> RiskLevel {
        let (high, medium, low) = (
            self.high_risk_count,
            self.medium_risk_count,
            self.low_risk_count,
        );
        if high >= 2 || self.forced_high {
            RiskLevel::High
        } else if low >= 1 && high == 0 && medium == 0 {
            RiskLevel::Low
        } else if low >= 2 && high == 0 {
            RiskLevel::Low
        } else {
            // Covers "medium keywords only" and every mixed case.
            RiskLevel::Medium
        }
    }
}

/// Risk level for `text`. Deterministic; independent of the domain analyzers.
pub fn assess_risk_level(text: &str) -> RiskLevel {
    let breakdown = RiskBreakdown::compute(text);
    let level = breakdown.level();
    debug!(
        high = breakdown.high_risk_count,
        medium = breakdown.medium_risk_count,
        low = breakdown.low_risk_count,
        negated = breakdown.has_negative,
        forced = breakdown.forced_high,
        risk = %level,
        "risk scored"
    );
    level
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_is_medium() {
        assert_eq!(assess_risk_level(""), RiskLevel::Medium);
        assert_eq!(assess_risk_level("   "), RiskLevel::Medium);
    }

    #[test]
    fn test_override_keywords_force_high() {
        assert_eq!(assess_risk_level("severe chest pain level 9"), RiskLevel::High);
        assert_eq!(assess_risk_level("Pain level 10"), RiskLevel::High);
        // Negation does not soften the override set.
        assert_eq!(assess_risk_level("no emergency, all good"), RiskLevel::High);
    }

    #[test]
    fn test_two_unnegated_high_keywords_are_high() {
        assert_eq!(assess_risk_level("chest pain and swelling"), RiskLevel::High);
    }

    #[test]
    fn test_single_high_keyword_is_medium() {
        assert_eq!(assess_risk_level("some swelling"), RiskLevel::Medium);
        // "swelling" also contains the low-risk word "well".
        assert_eq!(RiskBreakdown::compute("some swelling").low_risk_count, 1);
    }

    #[test]
    fn test_locally_negated_keyword_is_not_counted() {
        let b = RiskBreakdown::compute("no chest pain, no dizziness");
        assert_eq!(b.high_risk_count, 0);
        assert!(b.has_negative);
        assert_eq!(b.low_risk_count, NEGATED_HIGH_RISK_BONUS);
        assert_eq!(b.level(), RiskLevel::Low);
    }

    #[test]
    fn test_global_correction_applies_even_when_not_local() {
        // The negation is far from "dizziness", so it still counts as high,
        // but the global bonus is applied anyway.
        let b = RiskBreakdown::compute("i do not know what to make of this dizziness");
        assert_eq!(b.high_risk_count, 1);
        assert_eq!(b.low_risk_count, NEGATED_HIGH_RISK_BONUS);
        assert_eq!(b.level(), RiskLevel::Medium);
    }

    #[test]
    fn test_low_and_medium_rules() {
        assert_eq!(assess_risk_level("feeling fine"), RiskLevel::Low);
        // One low and one medium keyword: falls through to the default.
        assert_eq!(assess_risk_level("mild but ok"), RiskLevel::Medium);
        // Two low keywords outweigh medium ones.
        assert_eq!(assess_risk_level("mild, but stable and comfortable"), RiskLevel::Low);
        assert_eq!(assess_risk_level("tolerable"), RiskLevel::Medium);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(assess_risk_level("CHEST PAIN AND SWELLING"), RiskLevel::High);
    }
}
