//! Care priority classification and safe messaging

mod classifier;
mod messages;
mod types;

pub use classifier::classify;
pub use messages::next_step_message;
pub use types::{
    Assessment, CarePriority, HealthSnapshot, INCOMPLETE_ASSESSMENT_REASON, PrioritySummary,
};

// Reason strings are part of the observable contract; tests and callers match
// on them.
pub use classifier::{
    REASON_ABDOMINAL_PAIN_WITH_NAUSEA, REASON_ADVANCED_MATERNAL_AGE, REASON_BORDERLINE_BP,
    REASON_BREATHING_DIFFICULTY, REASON_HEADACHE_WITH_VISION_CHANGES, REASON_HIGH_RISK_CONDITION,
    REASON_HIGH_RISK_WITH_ELEVATED_BP, REASON_MULTIPLE_PREGNANCY, REASON_NO_CONCERNING_FACTORS,
    REASON_REDUCED_URINE, REASON_REPEATED_ELEVATED_READINGS, REASON_SEVERE_HYPERTENSION,
    REASON_SYMPTOMS_REPORTED, REASON_WARNING_SYMPTOMS,
};
