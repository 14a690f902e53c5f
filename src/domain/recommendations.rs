//! Recommendation generator. Maps domain statuses to clinical actions.

use super::entities::{Domain, DomainStatus, Severity};

/// Separator used when recommendations are shown on one line.
pub const RECOMMENDATION_SEPARATOR: &str = " • ";

/// Emitted when no domain calls for an action.
pub const DEFAULT_RECOMMENDATIONS: [&str; 2] =
    ["Continue current treatment plan", "Regular follow-up monitoring"];

fn escalation_action(domain: Domain) -> &'static str {
    match domain {
        Domain::Cardiac => "Immediate cardiac evaluation",
        Domain::Respiratory => "Respiratory function assessment",
        Domain::Medication => "Medication review and adjustment",
        Domain::Activity => "Physical therapy evaluation",
    }
}

fn monitoring_action(domain: Domain) -> &'static str {
    match domain {
        Domain::Cardiac => "Enhanced cardiac monitoring",
        Domain::Respiratory => "Monitor breathing patterns",
        Domain::Medication => "Medication compliance support",
        Domain::Activity => "Gradual activity progression",
    }
}

/// Actions for the given statuses, in input order.
pub fn generate_recommendations(statuses: &[DomainStatus]) -> Vec<&'static str> {
    let recommendations: Vec<&'static str> = statuses
        .iter()
        .filter_map(|status| match status.severity() {
            Severity::Concerning => Some(escalation_action(status.domain())),
            Severity::Moderate => Some(monitoring_action(status.domain())),
            Severity::Positive | Severity::Ambiguous => None,
        })
        .collect();

    if recommendations.is_empty() {
        DEFAULT_RECOMMENDATIONS.to_vec()
    } else {
        recommendations
    }
}

pub fn join_recommendations(recommendations: &[&str]) -> String {
    recommendations.join(RECOMMENDATION_SEPARATOR)
}
