//! Keyword tables for the rule engine.
//!
//! All matching is plain lowercase substring containment, so every entry must
//! be lowercase. The lists are part of the output contract: changing an entry
//! changes classifications.

// ── Negation ────────────────────────────────────────────────

pub static NEGATION_CUES: &[&str] = &[
    "haven't", "have not", "no", "not", "never", "none", "without", "don't", "do not",
];

// ── Cardiac ─────────────────────────────────────────────────

pub static CARDIAC_CONCERNING: &[&str] = &[
    "severe", "emergency", "unbearable", "level 8", "level 9", "level 10",
];

pub static CARDIAC_MODERATE: &[&str] = &[
    "moderate", "level 4", "level 5", "level 6", "occasional",
];

pub static CARDIAC_MILD: &[&str] = &["mild", "level 1", "level 2", "level 3", "improving"];

pub static CARDIAC_POSITIVE: &[&str] = &[
    "no pain", "no symptoms", "feeling good", "normal", "all good", "good", "fine", "great",
    "excellent", "ok", "okay", "well", "better", "no issues", "no problems", "nothing", "none",
];

// ── Respiratory ─────────────────────────────────────────────

pub static RESPIRATORY_CONCERNING: &[&str] = &[
    "severe", "difficulty breathing", "shortness", "can't breathe",
];

pub static RESPIRATORY_MILD: &[&str] = &["some", "mild", "slight", "occasional"];

pub static RESPIRATORY_POSITIVE: &[&str] = &[
    "good", "normal", "no problems", "breathing well", "all good", "fine", "great", "excellent",
    "ok", "okay", "well", "better", "no issues", "nothing", "none",
];

// ── Medication ──────────────────────────────────────────────

pub static MEDICATION_ADHERENCE_ISSUES: &[&str] = &[
    "not taking", "stopped", "forgot", "can't afford",
];

pub static MEDICATION_SIDE_EFFECTS: &[&str] = &[
    "side effects", "problems", "reaction", "dizzy", "nausea",
];

pub static MEDICATION_POSITIVE: &[&str] = &[
    "taking as directed", "compliant", "following", "no problems", "all good", "good", "fine",
    "great", "excellent", "ok", "okay", "well", "better", "no issues", "taking", "yes",
    "everything", "nothing",
];

// ── Activity ────────────────────────────────────────────────

pub static ACTIVITY_CONCERNING: &[&str] = &[
    "can't", "unable", "too tired", "exhausted", "bed rest",
];

pub static ACTIVITY_MODERATE: &[&str] = &["some fatigue", "getting better", "slowly improving"];

pub static ACTIVITY_POSITIVE: &[&str] = &[
    "normal", "good energy", "active", "no problems", "all good", "good", "fine", "great",
    "excellent", "ok", "okay", "well", "better", "no issues", "everything", "nothing",
];

// ── Risk scoring ────────────────────────────────────────────

pub static HIGH_RISK: &[&str] = &[
    "severe", "chest pain", "difficulty breathing", "emergency", "unbearable",
    "pain level 8", "pain level 9", "pain level 10", "worsening", "worse",
    "shortness of breath", "dizziness", "fainting", "swelling", "rapid heartbeat",
    "irregular heartbeat", "nausea", "vomiting", "sweating", "fatigue severe",
];

/// Any of these forces a high risk level regardless of negation.
pub static HIGH_RISK_OVERRIDE: &[&str] = &["severe", "emergency", "pain level 9", "pain level 10"];

pub static LOW_RISK: &[&str] = &[
    "no pain", "feeling better", "improving", "normal", "stable", "good",
    "pain level 1", "pain level 2", "pain level 3", "comfortable", "well",
    "no issues", "no problems", "managing well", "feeling fine", "recovering",
    "all good", "fine", "great", "excellent", "ok", "okay", "everything is fine",
    "everything is good", "nothing wrong", "no symptoms", "feeling good",
    "better", "no concerns", "everything", "nothing", "none", "alright",
    "doing well", "doing good", "all is well", "perfectly fine",
];

pub static MEDIUM_RISK: &[&str] = &[
    "moderate", "occasional", "mild", "pain level 4", "pain level 5",
    "pain level 6", "some discomfort", "manageable", "tolerable",
];

// ── Recovery stage ──────────────────────────────────────────

pub static RECOVERY_EXCELLENT: &[&str] = &[
    "excellent", "great", "perfect", "no issues", "normal", "all good",
];

pub static RECOVERY_GOOD: &[&str] = &["good", "fine", "better", "improving", "stable", "feel good"];

pub static RECOVERY_CONCERNING: &[&str] = &[
    "severe", "pain", "difficulty", "problems", "worse", "tired", "can't",
];

/// True if any keyword occurs in `text` (already lowercased).
pub fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| text.contains(k))
}

/// Number of distinct keywords present in `text`. Membership, not frequency.
pub fn count_present(text: &str, keywords: &[&str]) -> usize {
    keywords.iter().filter(|k| text.contains(*k)).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_are_lowercase() {
        let tables: &[&[&str]] = &[
            NEGATION_CUES,
            CARDIAC_CONCERNING,
            CARDIAC_MODERATE,
            CARDIAC_MILD,
            CARDIAC_POSITIVE,
            RESPIRATORY_CONCERNING,
            RESPIRATORY_MILD,
            RESPIRATORY_POSITIVE,
            MEDICATION_ADHERENCE_ISSUES,
            MEDICATION_SIDE_EFFECTS,
            MEDICATION_POSITIVE,
            ACTIVITY_CONCERNING,
            ACTIVITY_MODERATE,
            ACTIVITY_POSITIVE,
            HIGH_RISK,
            HIGH_RISK_OVERRIDE,
            LOW_RISK,
            MEDIUM_RISK,
            RECOVERY_EXCELLENT,
            RECOVERY_GOOD,
            RECOVERY_CONCERNING,
        ];
        for table in tables {
            for k in *table {
                assert_eq!(*k, k.to_lowercase(), "keyword {:?} must be lowercase", k);
            }
        }
    }

    #[test]
    fn test_count_present_is_membership() {
        assert_eq!(count_present("good good good", &["good", "fine"]), 1);
        assert_eq!(count_present("good and fine", &["good", "fine"]), 2);
    }
}
