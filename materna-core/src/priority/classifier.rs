//! Care priority classification
//!
//! Deterministic, rule-based evaluation over a point-in-time snapshot. No
//! scoring, no probabilities, no diagnosis: the bands below are care
//! escalation recommendations for hypertensive disorders in pregnancy, and
//! uncertainty always escalates.
//!
//! Evaluation is a strict top-down scan of four bands. The first band with
//! any satisfied rule decides the priority; within a band, reasons are
//! appended in rule-declaration order.

use std::collections::HashSet;

use tracing::warn;

use super::types::{Assessment, CarePriority, HealthSnapshot};
use crate::records::{KnownCondition, SymptomType};

/// Severe hypertension thresholds (either bound trips)
const SEVERE_SYSTOLIC: i32 = 160;
const SEVERE_DIASTOLIC: i32 = 110;

/// Elevated thresholds used for repeat-reading confirmation
const ELEVATED_SYSTOLIC: i32 = 140;
const ELEVATED_DIASTOLIC: i32 = 90;

/// Lower bounds of the borderline band
const BORDERLINE_SYSTOLIC: i32 = 130;
const BORDERLINE_DIASTOLIC: i32 = 85;

/// Conditions that mark a pregnancy as high risk for hypertensive disease
const HIGH_RISK_CONDITIONS: [KnownCondition; 3] = [
    KnownCondition::ChronicHypertension,
    KnownCondition::PreeclampsiaHistory,
    KnownCondition::KidneyDisease,
];

pub const REASON_SEVERE_HYPERTENSION: &str =
    "Blood pressure reading indicates severe hypertension";
pub const REASON_HEADACHE_WITH_VISION_CHANGES: &str =
    "Combination of severe headache and vision changes";
pub const REASON_ABDOMINAL_PAIN_WITH_NAUSEA: &str = "Upper abdominal pain with nausea/vomiting";
pub const REASON_BREATHING_DIFFICULTY: &str = "Difficulty breathing reported";
pub const REASON_REPEATED_ELEVATED_READINGS: &str = "Multiple elevated blood pressure readings";
pub const REASON_HIGH_RISK_WITH_ELEVATED_BP: &str =
    "High-risk condition with elevated blood pressure";
pub const REASON_WARNING_SYMPTOMS: &str = "Warning symptoms present";
pub const REASON_REDUCED_URINE: &str = "Reduced urine output reported";
pub const REASON_BORDERLINE_BP: &str = "Blood pressure in borderline range";
pub const REASON_HIGH_RISK_CONDITION: &str = "High-risk pregnancy condition present";
pub const REASON_ADVANCED_MATERNAL_AGE: &str = "Advanced maternal age";
pub const REASON_MULTIPLE_PREGNANCY: &str = "Multiple pregnancy";
pub const REASON_SYMPTOMS_REPORTED: &str = "Symptoms reported";
pub const REASON_NO_CONCERNING_FACTORS: &str = "No concerning factors identified";

/// Classify a user's snapshot into a care priority with contributing reasons
///
/// Pure and total: no I/O, never panics for well-formed input. Absent data is
/// treated as no evidence of elevation, never as evidence of safety.
pub fn classify(snapshot: &HealthSnapshot) -> Assessment {
    let user_id = snapshot.profile.user_id.as_str();
    let latest = snapshot.latest_reading.as_ref();
    let symptoms: HashSet<SymptomType> =
        snapshot.recent_symptoms.iter().map(|s| s.symptom).collect();
    let high_risk = snapshot.profile.has_any_condition(&HIGH_RISK_CONDITIONS);

    // Emergency band. Every satisfied rule contributes its reason, then the
    // band returns without descending - Emergency dominates all lower bands.
    let mut reasons = Vec::new();

    if let Some(bp) = latest
        && (bp.systolic >= SEVERE_SYSTOLIC || bp.diastolic >= SEVERE_DIASTOLIC)
    {
        warn!(
            user_id,
            systolic = bp.systolic,
            diastolic = bp.diastolic,
            "emergency priority: severe hypertension"
        );
        reasons.push(REASON_SEVERE_HYPERTENSION.to_string());
    }

    if symptoms.contains(&SymptomType::Headache) && symptoms.contains(&SymptomType::BlurredVision) {
        warn!(user_id, "emergency priority: headache with vision changes");
        reasons.push(REASON_HEADACHE_WITH_VISION_CHANGES.to_string());
    }

    if symptoms.contains(&SymptomType::UpperAbdominalPain)
        && symptoms.contains(&SymptomType::NauseaVomiting)
    {
        warn!(user_id, "emergency priority: abdominal pain with nausea");
        reasons.push(REASON_ABDOMINAL_PAIN_WITH_NAUSEA.to_string());
    }

    if symptoms.contains(&SymptomType::ShortnessOfBreath) {
        warn!(user_id, "emergency priority: shortness of breath");
        reasons.push(REASON_BREATHING_DIFFICULTY.to_string());
    }

    if !reasons.is_empty() {
        return Assessment::new(CarePriority::Emergency, reasons);
    }

    // Urgent review band. All matching reasons accumulate before returning.
    if snapshot
        .recent_readings
        .iter()
        .filter(|bp| bp.systolic >= ELEVATED_SYSTOLIC || bp.diastolic >= ELEVATED_DIASTOLIC)
        .count()
        >= 2
    {
        reasons.push(REASON_REPEATED_ELEVATED_READINGS.to_string());
    }

    if high_risk
        && let Some(bp) = latest
        && (bp.systolic >= BORDERLINE_SYSTOLIC || bp.diastolic >= BORDERLINE_DIASTOLIC)
    {
        reasons.push(REASON_HIGH_RISK_WITH_ELEVATED_BP.to_string());
    }

    if symptoms.contains(&SymptomType::Headache)
        || symptoms.contains(&SymptomType::BlurredVision)
        || symptoms.contains(&SymptomType::UpperAbdominalPain)
    {
        reasons.push(REASON_WARNING_SYMPTOMS.to_string());
    }

    if symptoms.contains(&SymptomType::ReducedUrine) {
        reasons.push(REASON_REDUCED_URINE.to_string());
    }

    if !reasons.is_empty() {
        return Assessment::new(CarePriority::UrgentReview, reasons);
    }

    // Increased monitoring band.
    if let Some(bp) = latest
        && ((bp.systolic >= BORDERLINE_SYSTOLIC && bp.systolic < ELEVATED_SYSTOLIC)
            || (bp.diastolic >= BORDERLINE_DIASTOLIC && bp.diastolic < ELEVATED_DIASTOLIC))
    {
        reasons.push(REASON_BORDERLINE_BP.to_string());
    }

    if high_risk {
        reasons.push(REASON_HIGH_RISK_CONDITION.to_string());
    }

    if snapshot.profile.age_range == crate::records::AgeRange::Age35Plus {
        reasons.push(REASON_ADVANCED_MATERNAL_AGE.to_string());
    }

    if snapshot.profile.has_condition(KnownCondition::MultiplePregnancy) {
        reasons.push(REASON_MULTIPLE_PREGNANCY.to_string());
    }

    if !snapshot.recent_symptoms.is_empty() {
        reasons.push(REASON_SYMPTOMS_REPORTED.to_string());
    }

    if !reasons.is_empty() {
        return Assessment::new(CarePriority::IncreasedMonitoring, reasons);
    }

    // Routine: nothing above fired.
    Assessment::new(
        CarePriority::Routine,
        vec![REASON_NO_CONCERNING_FACTORS.to_string()],
    )
}
