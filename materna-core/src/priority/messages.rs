//! Safe next-step messages
//!
//! Predefined, clinically reviewed wording only: no dynamic text, no user
//! data, no diagnostic language.

use super::types::CarePriority;

/// Resolve the fixed next-step guidance for a priority level
///
/// Total over the four levels; the table never changes at runtime.
pub fn next_step_message(priority: CarePriority) -> &'static str {
    match priority {
        CarePriority::Emergency => {
            "Seek immediate medical attention. Call emergency services or go to the nearest emergency room."
        }
        CarePriority::UrgentReview => {
            "Contact your healthcare provider within the next 24 hours to discuss your readings."
        }
        CarePriority::IncreasedMonitoring => {
            "Continue monitoring your blood pressure regularly and discuss with your healthcare provider at your next appointment."
        }
        CarePriority::Routine => {
            "Continue routine prenatal care and monitoring as recommended by your healthcare provider."
        }
    }
}
