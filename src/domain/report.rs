//! Plain-text rendering of reports. The layout is for humans, not a wire format.

use super::entities::{AssessmentSummary, Domain, FallbackSummary, Report};
use super::recommendations::join_recommendations;
use std::fmt;

/// Timestamp format used in rendered reports.
pub const REPORT_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Default number of characters of each raw answer echoed by the fallback report.
pub const DEFAULT_EXCERPT_CHARS: usize = 150;

/// First `max_chars` characters of `text`, with `...` appended when cut.
pub fn excerpt(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

impl fmt::Display for AssessmentSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "PATIENT ASSESSMENT SUMMARY (Rule-Based Clinical Analysis):")?;
        writeln!(f)?;
        writeln!(f, "OVERALL STATUS: {}", self.overall)?;
        writeln!(f)?;
        writeln!(f, "DETAILED ASSESSMENT:")?;
        for status in self.domain_statuses() {
            writeln!(f, "• {}: {}", status.domain().heading(), status)?;
        }
        writeln!(f)?;
        writeln!(f, "RECOVERY ASSESSMENT: {}", self.recovery_stage)?;
        writeln!(f)?;
        writeln!(f, "CLINICAL NOTES:")?;
        writeln!(
            f,
            "• Assessment date: {}",
            self.generated_at.format(REPORT_TIME_FORMAT)
        )?;
        writeln!(
            f,
            "• Analysis method: Keyword recognition with negation handling"
        )?;
        writeln!(
            f,
            "• Recommendations: {}",
            join_recommendations(&self.recommendations)
        )?;
        write!(f, "• Next steps: Continue monitoring per established care plan")
    }
}

impl fmt::Display for FallbackSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "PATIENT ASSESSMENT SUMMARY (Template-Based):")?;
        for domain in Domain::ALL {
            let heading = match domain {
                Domain::Cardiac => "Cardiac Status",
                Domain::Respiratory => "Respiratory Function",
                Domain::Medication => "Medication Management",
                Domain::Activity => "Activity and Recovery",
            };
            writeln!(f)?;
            writeln!(
                f,
                "{}: {}",
                heading,
                excerpt(self.input.field(domain), self.excerpt_chars)
            )?;
        }
        writeln!(f)?;
        writeln!(
            f,
            "Clinical Note: This summary was generated using template-based analysis."
        )?;
        write!(
            f,
            "Assessment completed on {}.",
            self.generated_at.format(REPORT_TIME_FORMAT)
        )
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Report::Detailed(summary) => fmt::Display::fmt(summary, f),
            Report::Fallback(summary) => fmt::Display::fmt(summary, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::AssessmentInput;
    use chrono::NaiveDate;

    #[test]
    fn test_excerpt_short_text_untouched() {
        assert_eq!(excerpt("short", 150), "short");
        assert_eq!(excerpt("", 150), "");
    }

    #[test]
    fn test_excerpt_exact_length_untouched() {
        let text = "a".repeat(150);
        assert_eq!(excerpt(&text, 150), text);
    }

    #[test]
    fn test_excerpt_truncates_on_char_boundary() {
        let text = "é".repeat(151);
        let out = excerpt(&text, 150);
        assert!(out.ends_with("..."));
        assert_eq!(out.chars().count(), 153);
    }

    #[test]
    fn test_fallback_render_echoes_fields() {
        let at = NaiveDate::from_ymd_opt(2026, 10, 18)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap();
        let summary = FallbackSummary {
            input: AssessmentInput::new("x".repeat(200), "ok", "", "tired"),
            excerpt_chars: DEFAULT_EXCERPT_CHARS,
            generated_at: at,
        };
        let text = summary.to_string();
        assert!(text.contains(&format!("Cardiac Status: {}...", "x".repeat(150))));
        assert!(text.contains("Respiratory Function: ok"));
        assert!(text.contains("Activity and Recovery: tired"));
        assert!(text.ends_with("Assessment completed on 2026-10-18 09:30."));
    }
}
