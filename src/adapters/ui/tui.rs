//! Implements InputPort. Inquire-based check-in intake.
//!
//! Prompts for the four answers, runs the assessment behind a spinner, and
//! prints the report with a colored risk badge.

use crate::domain::{Assessment, AssessmentInput, DomainError, RiskLevel};
use crate::ports::InputPort;
use crate::usecases::AssessmentService;
use async_trait::async_trait;
use crossterm::style::Stylize;
use indicatif::{ProgressBar, ProgressStyle};
use inquire::ui::{Color, RenderConfig, Styled};
use inquire::{Confirm, InquireError, Text};
use std::sync::Arc;
use std::time::Duration;

/// Applies the prompt theme globally. Call once before the first prompt.
pub fn apply_theme() {
    let config = RenderConfig::default()
        .with_prompt_prefix(Styled::new("♥").with_fg(Color::LightRed))
        .with_answered_prompt_prefix(Styled::new("✓").with_fg(Color::LightGreen));
    inquire::set_global_render_config(config);
}

/// The four intake questions: prompt text and help message.
const QUESTIONS: [(&str, &str); 4] = [
    (
        "How is your heart feeling? Any chest pain or palpitations?",
        "e.g. \"no pain, feeling great\" or \"pain level 5 when climbing stairs\"",
    ),
    (
        "How is your breathing and general physical condition?",
        "e.g. \"breathing well\" or \"some shortness of breath at night\"",
    ),
    (
        "How are you getting on with your medication?",
        "e.g. \"taking as directed, no side effects\"",
    ),
    (
        "How are your activity and energy levels?",
        "e.g. \"good energy, walking daily\" or \"too tired to get up\"",
    ),
];

fn prompt_error(e: InquireError) -> DomainError {
    DomainError::Input(e.to_string())
}

fn risk_badge(level: RiskLevel) -> String {
    let label = format!(" {} RISK ", level.as_str().to_uppercase());
    match level {
        RiskLevel::High => label.white().on_red().bold().to_string(),
        RiskLevel::Medium => label.black().on_yellow().bold().to_string(),
        RiskLevel::Low => label.black().on_green().bold().to_string(),
    }
}

/// TUI adapter. Inquire prompts.
pub struct TuiInputPort {
    service: Arc<AssessmentService>,
}

impl TuiInputPort {
    pub fn new(service: Arc<AssessmentService>) -> Self {
        Self { service }
    }

    /// Ask the four questions. `None` when the user cancels (Esc / Ctrl-C).
    fn read_input() -> Result<Option<AssessmentInput>, DomainError> {
        let mut answers: [String; 4] = Default::default();
        for (answer, (question, help)) in answers.iter_mut().zip(QUESTIONS) {
            match Text::new(question).with_help_message(help).prompt() {
                Ok(text) => *answer = text,
                Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
                    return Ok(None);
                }
                Err(e) => return Err(prompt_error(e)),
            }
        }
        let [cardiac, breathing, medication, activity] = answers;
        Ok(Some(AssessmentInput::new(
            cardiac, breathing, medication, activity,
        )))
    }

    async fn assess_with_spinner(&self, input: &AssessmentInput) -> Assessment {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::with_template("{spinner:.red} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        spinner.set_message("Assessing check-in...");
        spinner.enable_steady_tick(Duration::from_millis(100));
        let assessment = self.service.assess(input).await;
        spinner.finish_and_clear();
        assessment
    }

    fn print_assessment(assessment: &Assessment) {
        println!();
        println!("{}", risk_badge(assessment.risk_level));
        println!();
        if let Some(narrative) = &assessment.narrative {
            println!("{}", "SUMMARY".bold());
            println!("{}", narrative);
            println!();
        }
        println!("{}", assessment.report);
        println!();
    }
}

#[async_trait]
impl InputPort for TuiInputPort {
    async fn run(&self) -> Result<(), DomainError> {
        loop {
            let Some(input) = Self::read_input()? else {
                return Ok(());
            };
            let assessment = self.assess_with_spinner(&input).await;
            Self::print_assessment(&assessment);

            let again = Confirm::new("Assess another check-in?")
                .with_default(false)
                .prompt()
                .map_err(prompt_error)?;
            if !again {
                return Ok(());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_badge_contains_level() {
        assert!(risk_badge(RiskLevel::High).contains("HIGH RISK"));
        assert!(risk_badge(RiskLevel::Low).contains("LOW RISK"));
    }

    #[test]
    fn test_questions_cover_every_field() {
        assert_eq!(QUESTIONS.len(), 4);
        assert!(QUESTIONS.iter().all(|(q, h)| !q.is_empty() && !h.is_empty()));
    }
}
