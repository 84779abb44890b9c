//! Alert event types

use serde::Serialize;

use super::templates::{self, AlertTemplate};
use crate::priority::CarePriority;
use crate::records::SymptomType;

/// Kinds of events the assessment engine can raise
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AlertKind {
    /// Care priority escalation (tier carried in the detail)
    CarePriority,
    /// Severe hypertension reading (>=160/110)
    SevereBp,
    /// Elevated reading (>=140/90)
    ElevatedBp,
    /// Dangerous symptom or symptom combination reported
    DangerousSymptoms,
    /// Single warning symptom reported
    WarningSymptom,
}

/// Raw values carried in the non-diagnostic slot of an alert
///
/// Only raw readings, symptom names or the tier itself: no interpretation is
/// ever interpolated into an alert.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AlertDetail {
    /// The raw reading pair that tripped a BP alert
    Reading { systolic: i32, diastolic: i32 },
    /// Wire-format names of the symptoms that tripped a symptom alert
    Symptoms { symptoms: Vec<String> },
    /// The care priority tier being escalated
    Priority { priority: CarePriority },
}

/// One notification event submitted to the dispatcher
///
/// Ephemeral: constructed per orchestration run and owned by the dispatcher
/// once submitted.
#[derive(Debug, Clone, Serialize)]
pub struct AlertEvent {
    /// User the alert concerns
    pub user_id: String,
    /// What kind of alert this is
    pub kind: AlertKind,
    /// The fixed, pre-approved template to deliver
    pub template: AlertTemplate,
    /// Raw values for the template's non-diagnostic slot
    pub detail: AlertDetail,
}

impl AlertEvent {
    /// Create a care priority escalation event
    pub fn care_priority(user_id: &str, priority: CarePriority) -> Self {
        Self {
            user_id: user_id.to_string(),
            kind: AlertKind::CarePriority,
            template: templates::care_priority_template(priority),
            detail: AlertDetail::Priority { priority },
        }
    }

    /// Create a severe hypertension alert
    pub fn severe_bp(user_id: &str, systolic: i32, diastolic: i32) -> Self {
        Self {
            user_id: user_id.to_string(),
            kind: AlertKind::SevereBp,
            template: templates::SEVERE_HYPERTENSION,
            detail: AlertDetail::Reading {
                systolic,
                diastolic,
            },
        }
    }

    /// Create an elevated blood pressure notification
    pub fn elevated_bp(user_id: &str, systolic: i32, diastolic: i32) -> Self {
        Self {
            user_id: user_id.to_string(),
            kind: AlertKind::ElevatedBp,
            template: templates::ELEVATED_BP,
            detail: AlertDetail::Reading {
                systolic,
                diastolic,
            },
        }
    }

    /// Create a dangerous symptom alert
    pub fn dangerous_symptoms(user_id: &str, symptoms: &[SymptomType]) -> Self {
        Self {
            user_id: user_id.to_string(),
            kind: AlertKind::DangerousSymptoms,
            template: templates::DANGEROUS_COMBINATION,
            detail: AlertDetail::Symptoms {
                symptoms: symptoms.iter().map(|s| s.as_str().to_string()).collect(),
            },
        }
    }

    /// Create a single warning symptom notification
    pub fn warning_symptom(user_id: &str, symptom: SymptomType) -> Self {
        Self {
            user_id: user_id.to_string(),
            kind: AlertKind::WarningSymptom,
            template: templates::SINGLE_WARNING_SYMPTOM,
            detail: AlertDetail::Symptoms {
                symptoms: vec![symptom.as_str().to_string()],
            },
        }
    }
}
