//! Care priority types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::records::{BpReading, RiskProfile, SymptomRecord};

/// Reason attached to the conservative fallback assessment
pub const INCOMPLETE_ASSESSMENT_REASON: &str =
    "Unable to complete assessment - please contact your healthcare provider";

/// Care escalation level
///
/// These are care escalation recommendations, not diagnoses and not risk
/// scores. The derived ordering is total: a later variant always dominates an
/// earlier one, so "highest wins" merging is a plain `max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CarePriority {
    /// Normal monitoring, next scheduled appointment
    Routine,
    /// More frequent self-monitoring, contact provider soon
    IncreasedMonitoring,
    /// Contact healthcare provider within 24 hours
    UrgentReview,
    /// Seek immediate medical attention
    Emergency,
}

impl CarePriority {
    /// Wire-format name of the priority level
    pub fn as_str(&self) -> &'static str {
        match self {
            CarePriority::Routine => "ROUTINE",
            CarePriority::IncreasedMonitoring => "INCREASED_MONITORING",
            CarePriority::UrgentReview => "URGENT_REVIEW",
            CarePriority::Emergency => "EMERGENCY",
        }
    }
}

/// Result of one classification pass
///
/// Constructed fresh on every call and never persisted by the core.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assessment {
    /// The escalation level reached
    pub priority: CarePriority,
    /// Contributing factors, in rule-declaration order
    pub reasons: Vec<String>,
    /// When the classification ran
    pub evaluated_at: DateTime<Utc>,
}

impl Assessment {
    /// Create an assessment evaluated now
    pub fn new(priority: CarePriority, reasons: Vec<String>) -> Self {
        Self {
            priority,
            reasons,
            evaluated_at: Utc::now(),
        }
    }

    /// Conservative fallback when assessment data cannot be read
    ///
    /// Failures escalate: the fallback is IncreasedMonitoring, never Routine.
    pub fn incomplete() -> Self {
        Self::new(
            CarePriority::IncreasedMonitoring,
            vec![INCOMPLETE_ASSESSMENT_REASON.to_string()],
        )
    }
}

/// Point-in-time view of one user's data for a single classification pass
///
/// Assembled by the assessment engine from the data reader; the classifier
/// itself never performs I/O.
#[derive(Debug, Clone)]
pub struct HealthSnapshot {
    /// Most recent reading, if the user has recorded any
    pub latest_reading: Option<BpReading>,
    /// Readings within the reading window, newest first
    pub recent_readings: Vec<BpReading>,
    /// Symptoms within the symptom window, newest first
    pub recent_symptoms: Vec<SymptomRecord>,
    /// The user's static risk profile
    pub profile: RiskProfile,
}

/// Priority with its resolved guidance message, as returned to callers of the
/// synchronous query surface
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrioritySummary {
    pub priority: CarePriority,
    /// Fixed, pre-approved next-step guidance for the priority level
    pub message: String,
    pub reasons: Vec<String>,
    pub evaluated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_ordering_is_total() {
        assert!(CarePriority::Routine < CarePriority::IncreasedMonitoring);
        assert!(CarePriority::IncreasedMonitoring < CarePriority::UrgentReview);
        assert!(CarePriority::UrgentReview < CarePriority::Emergency);

        let highest = [
            CarePriority::UrgentReview,
            CarePriority::Routine,
            CarePriority::Emergency,
            CarePriority::IncreasedMonitoring,
        ]
        .into_iter()
        .max();
        assert_eq!(highest, Some(CarePriority::Emergency));
    }

    #[test]
    fn test_priority_serialization_roundtrip() {
        let priorities = [
            CarePriority::Routine,
            CarePriority::IncreasedMonitoring,
            CarePriority::UrgentReview,
            CarePriority::Emergency,
        ];

        for priority in priorities {
            let json = serde_json::to_string(&priority).unwrap();
            assert_eq!(json, format!("\"{}\"", priority.as_str()));
            let parsed: CarePriority = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, priority);
        }
    }

    #[test]
    fn test_incomplete_assessment_escalates() {
        let assessment = Assessment::incomplete();
        assert_eq!(assessment.priority, CarePriority::IncreasedMonitoring);
        assert_eq!(assessment.reasons, vec![INCOMPLETE_ASSESSMENT_REASON]);
    }
}
