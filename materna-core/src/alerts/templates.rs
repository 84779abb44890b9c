//! Fixed alert templates
//!
//! Pre-approved wording only: no dynamic medical text, no predictions, no
//! fear-based language. Raw values travel separately in the event detail and
//! are never spliced into a template.

use serde::Serialize;

use crate::priority::CarePriority;

/// A fixed notification template: subject line, body and a clear next step
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct AlertTemplate {
    pub subject: &'static str,
    pub body: &'static str,
    pub call_to_action: &'static str,
}

/// Template for a care priority escalation at the given level
pub const fn care_priority_template(priority: CarePriority) -> AlertTemplate {
    match priority {
        CarePriority::Emergency => AlertTemplate {
            subject: "Important: Seek Immediate Medical Attention",
            body: "Based on your recent readings, we recommend seeking immediate medical attention. This is a precautionary measure to ensure you and your baby receive appropriate care.",
            call_to_action: "Call emergency services or go to the nearest emergency room now.",
        },
        CarePriority::UrgentReview => AlertTemplate {
            subject: "Action Needed: Contact Your Healthcare Provider",
            body: "Your recent readings suggest you should speak with your healthcare provider within the next 24 hours. They can review your information and provide personalized guidance.",
            call_to_action: "Contact your healthcare provider within 24 hours.",
        },
        CarePriority::IncreasedMonitoring => AlertTemplate {
            subject: "Reminder: Continue Monitoring",
            body: "Your readings indicate that more frequent monitoring would be beneficial. Please continue tracking your blood pressure and discuss your readings with your healthcare provider at your next appointment.",
            call_to_action: "Monitor regularly and discuss at your next appointment.",
        },
        CarePriority::Routine => AlertTemplate {
            subject: "Keep Up the Good Work",
            body: "Your readings look good. Continue with your routine prenatal care and monitoring as recommended by your healthcare provider.",
            call_to_action: "Continue routine care as planned.",
        },
    }
}

/// Severe hypertension alert (>=160/110)
pub const SEVERE_HYPERTENSION: AlertTemplate = AlertTemplate {
    subject: "Critical: High Blood Pressure Reading",
    body: "Your blood pressure reading is significantly elevated. Please seek immediate medical attention.",
    call_to_action: "Seek immediate medical care.",
};

/// Elevated blood pressure notification (>=140/90)
pub const ELEVATED_BP: AlertTemplate = AlertTemplate {
    subject: "Notice: Elevated Blood Pressure",
    body: "Your blood pressure reading is elevated. Please monitor closely and contact your healthcare provider if it remains elevated.",
    call_to_action: "Monitor and contact provider if readings stay elevated.",
};

/// Dangerous symptom combination alert
pub const DANGEROUS_COMBINATION: AlertTemplate = AlertTemplate {
    subject: "Important: Warning Symptoms Reported",
    body: "You have reported symptoms that may require medical attention. Please contact your healthcare provider or seek immediate care if symptoms worsen.",
    call_to_action: "Contact your healthcare provider or seek immediate care.",
};

/// Single warning symptom notification
pub const SINGLE_WARNING_SYMPTOM: AlertTemplate = AlertTemplate {
    subject: "Notice: Warning Symptom Reported",
    body: "You have reported a symptom that should be discussed with your healthcare provider. Please mention this at your next appointment or contact them if you have concerns.",
    call_to_action: "Discuss with your healthcare provider.",
};
