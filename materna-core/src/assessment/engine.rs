//! Assessment orchestration
//!
//! Re-runs classification after every new record and fans out alerts. The
//! engine's external contract is best effort: a failure anywhere in the
//! pipeline is logged and swallowed, and a snapshot that cannot be read
//! resolves to the conservative incomplete assessment rather than Routine.

use std::sync::Arc;

use chrono::{Duration, Utc};
use tokio::task::JoinHandle;
use tracing::{debug, error, warn};

use crate::alerts::{AlertDispatcher, AlertEvent};
use crate::config::AssessmentConfig;
use crate::error::AccessError;
use crate::priority::{
    Assessment, CarePriority, HealthSnapshot, PrioritySummary, classify, next_step_message,
};
use crate::records::{HealthDataReader, SymptomType};

/// Severe hypertension alert thresholds (either bound trips)
const SEVERE_SYSTOLIC: i32 = 160;
const SEVERE_DIASTOLIC: i32 = 110;

/// Elevated blood pressure alert thresholds
const ELEVATED_SYSTOLIC: i32 = 140;
const ELEVATED_DIASTOLIC: i32 = 90;

/// Symptoms that alone warrant a dangerous-symptom alert
const DANGEROUS_SYMPTOMS: [SymptomType; 4] = [
    SymptomType::Headache,
    SymptomType::BlurredVision,
    SymptomType::UpperAbdominalPain,
    SymptomType::ShortnessOfBreath,
];

/// Orchestrates classification and alert fan-out for one deployment
///
/// Holds its collaborators behind trait objects so tests can substitute
/// in-memory fakes. Cloning is cheap; clones share the same collaborators.
#[derive(Clone)]
pub struct AssessmentEngine {
    reader: Arc<dyn HealthDataReader>,
    dispatcher: Arc<dyn AlertDispatcher>,
    config: AssessmentConfig,
}

impl AssessmentEngine {
    /// Create an engine over the given reader and dispatcher
    pub fn new(
        reader: Arc<dyn HealthDataReader>,
        dispatcher: Arc<dyn AlertDispatcher>,
        config: AssessmentConfig,
    ) -> Self {
        Self {
            reader,
            dispatcher,
            config,
        }
    }

    /// Assemble a point-in-time snapshot for classification
    async fn snapshot(&self, user_id: &str) -> Result<HealthSnapshot, AccessError> {
        let profile = self.reader.profile(user_id).await?;
        let latest_reading = self.reader.latest_reading(user_id).await?;

        let reading_cutoff = Utc::now() - Duration::hours(self.config.reading_window_hours);
        let recent_readings = self.reader.readings_since(user_id, reading_cutoff).await?;

        let symptom_cutoff = Utc::now() - Duration::hours(self.config.symptom_window_hours);
        let recent_symptoms = self.reader.symptoms_since(user_id, symptom_cutoff).await?;

        Ok(HealthSnapshot {
            latest_reading,
            recent_readings,
            recent_symptoms,
            profile,
        })
    }

    /// Classify the user's current state
    ///
    /// Any failure to read the snapshot escalates to the conservative
    /// incomplete assessment; this method never resolves to Routine on error.
    pub async fn assess(&self, user_id: &str) -> Assessment {
        match self.snapshot(user_id).await {
            Ok(snapshot) => classify(&snapshot),
            Err(e) => {
                error!(user_id, error = %e, "assessment data unavailable, escalating conservatively");
                Assessment::incomplete()
            }
        }
    }

    /// Synchronous query surface: current priority with its guidance message
    ///
    /// Read-only and side-effect free; degraded data yields the conservative
    /// result, so this always answers.
    pub async fn current_priority(&self, user_id: &str) -> PrioritySummary {
        let assessment = self.assess(user_id).await;
        PrioritySummary {
            priority: assessment.priority,
            message: next_step_message(assessment.priority).to_string(),
            reasons: assessment.reasons,
            evaluated_at: assessment.evaluated_at,
        }
    }

    /// Run a full assess-and-notify pass for the user
    ///
    /// Best effort: never returns an error. Individual dispatch failures are
    /// logged and do not suppress the remaining events of the run.
    pub async fn assess_and_notify(&self, user_id: &str) {
        debug!(user_id, "starting health assessment");

        let assessment = self.assess(user_id).await;

        // Fine-grained BP alerts on the latest reading. At most one per run,
        // severe wins over elevated.
        match self.reader.latest_reading(user_id).await {
            Ok(Some(bp)) => {
                if bp.systolic >= SEVERE_SYSTOLIC || bp.diastolic >= SEVERE_DIASTOLIC {
                    self.send(AlertEvent::severe_bp(user_id, bp.systolic, bp.diastolic))
                        .await;
                } else if bp.systolic >= ELEVATED_SYSTOLIC || bp.diastolic >= ELEVATED_DIASTOLIC {
                    self.send(AlertEvent::elevated_bp(user_id, bp.systolic, bp.diastolic))
                        .await;
                }
            }
            Ok(None) => {}
            Err(e) => warn!(user_id, error = %e, "could not read latest reading for alerts"),
        }

        // Symptom alerts use their own, narrower window. At most one per run:
        // the dangerous set first, otherwise a single warning notification.
        let alert_cutoff = Utc::now() - Duration::hours(self.config.alert_symptom_window_hours);
        match self.reader.symptoms_since(user_id, alert_cutoff).await {
            Ok(records) => {
                let mut seen = Vec::new();
                for record in &records {
                    if !seen.contains(&record.symptom) {
                        seen.push(record.symptom);
                    }
                }

                let dangerous: Vec<SymptomType> = seen
                    .iter()
                    .copied()
                    .filter(|s| DANGEROUS_SYMPTOMS.contains(s))
                    .collect();

                if !dangerous.is_empty() {
                    self.send(AlertEvent::dangerous_symptoms(user_id, &dangerous))
                        .await;
                } else if let Some(first) = seen.first() {
                    self.send(AlertEvent::warning_symptom(user_id, *first)).await;
                }
            }
            Err(e) => warn!(user_id, error = %e, "could not read recent symptoms for alerts"),
        }

        // Care priority escalation for anything above Routine.
        if assessment.priority != CarePriority::Routine {
            self.send(AlertEvent::care_priority(user_id, assessment.priority))
                .await;
        }

        debug!(user_id, priority = ?assessment.priority, "health assessment completed");
    }

    /// Fire-and-forget trigger used by write paths after a record commits
    ///
    /// Hands the run to the tokio runtime with its own error boundary; the
    /// caller is free to drop the handle (tests await it).
    pub fn trigger(&self, user_id: &str) -> JoinHandle<()> {
        let engine = self.clone();
        let user_id = user_id.to_string();
        tokio::spawn(async move {
            engine.assess_and_notify(&user_id).await;
        })
    }

    async fn send(&self, event: AlertEvent) {
        let kind = event.kind;
        let user_id = event.user_id.clone();
        if let Err(e) = self.dispatcher.dispatch(event).await {
            warn!(%user_id, ?kind, error = %e, "alert dispatch failed");
        }
    }
}
