//! Domain record types
//!
//! Readings and symptoms are neutral observations: no interpretation is ever
//! stored alongside them. The risk profile carries only data-minimized,
//! pregnancy-relevant structured fields (age bracket, not date of birth).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Allowed systolic range at ingestion, in mmHg
pub const SYSTOLIC_RANGE: (i32, i32) = (60, 260);

/// Allowed diastolic range at ingestion, in mmHg
pub const DIASTOLIC_RANGE: (i32, i32) = (40, 160);

/// Allowed pregnancy week range at ingestion
pub const PREGNANCY_WEEKS_RANGE: (i32, i32) = (0, 42);

/// A single self-reported blood pressure reading
///
/// Immutable once created; owned by the user it was recorded for.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BpReading {
    /// Unique identifier for this reading
    pub id: String,
    /// Owning user
    pub user_id: String,
    /// Systolic pressure in mmHg
    pub systolic: i32,
    /// Diastolic pressure in mmHg
    pub diastolic: i32,
    /// When the reading was taken
    pub recorded_at: DateTime<Utc>,
}

impl BpReading {
    /// Create a new reading with a generated id
    pub fn new(
        user_id: impl Into<String>,
        systolic: i32,
        diastolic: i32,
        recorded_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            user_id: user_id.into(),
            systolic,
            diastolic,
            recorded_at,
        }
    }
}

/// Enumerated symptom vocabulary
///
/// One symptom per record, no severity, no free text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SymptomType {
    Headache,
    BlurredVision,
    UpperAbdominalPain,
    NauseaVomiting,
    ShortnessOfBreath,
    ReducedUrine,
    Swelling,
}

impl SymptomType {
    /// Wire-format name of the symptom
    pub fn as_str(&self) -> &'static str {
        match self {
            SymptomType::Headache => "HEADACHE",
            SymptomType::BlurredVision => "BLURRED_VISION",
            SymptomType::UpperAbdominalPain => "UPPER_ABDOMINAL_PAIN",
            SymptomType::NauseaVomiting => "NAUSEA_VOMITING",
            SymptomType::ShortnessOfBreath => "SHORTNESS_OF_BREATH",
            SymptomType::ReducedUrine => "REDUCED_URINE",
            SymptomType::Swelling => "SWELLING",
        }
    }
}

/// A single recorded symptom
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymptomRecord {
    /// Unique identifier for this record
    pub id: String,
    /// Owning user
    pub user_id: String,
    /// The reported symptom
    pub symptom: SymptomType,
    /// When the symptom was reported
    pub recorded_at: DateTime<Utc>,
}

impl SymptomRecord {
    /// Create a new symptom record with a generated id
    pub fn new(user_id: impl Into<String>, symptom: SymptomType, recorded_at: DateTime<Utc>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            user_id: user_id.into(),
            symptom,
            recorded_at,
        }
    }
}

/// Maternal age bracket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgeRange {
    #[serde(rename = "UNDER_20")]
    Under20,
    #[serde(rename = "AGE_20_34")]
    Age20To34,
    #[serde(rename = "AGE_35_PLUS")]
    Age35Plus,
}

/// Pre-existing conditions relevant to pregnancy monitoring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum KnownCondition {
    ChronicHypertension,
    PreeclampsiaHistory,
    KidneyDisease,
    Diabetes,
    MultiplePregnancy,
}

/// Static risk profile for a user
///
/// Read-only input to classification; one profile per user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskProfile {
    /// Owning user
    pub user_id: String,
    /// Age bracket
    pub age_range: AgeRange,
    /// Enumerated pre-existing conditions
    pub known_conditions: Vec<KnownCondition>,
    /// Current gestation in weeks (0-42)
    pub pregnancy_weeks: i32,
    /// Whether this is the user's first pregnancy
    pub first_pregnancy: bool,
}

impl RiskProfile {
    /// Whether the profile lists the given condition
    pub fn has_condition(&self, condition: KnownCondition) -> bool {
        self.known_conditions.contains(&condition)
    }

    /// Whether the profile lists any of the given conditions
    pub fn has_any_condition(&self, conditions: &[KnownCondition]) -> bool {
        conditions.iter().any(|c| self.has_condition(*c))
    }
}

/// Payload for recording a new blood pressure reading
///
/// Validated by the store at ingestion; `recorded_at` defaults to now.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewReading {
    pub systolic: i32,
    pub diastolic: i32,
    #[serde(default)]
    pub recorded_at: Option<DateTime<Utc>>,
}

/// Payload for recording a new symptom
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewSymptom {
    pub symptom: SymptomType,
    #[serde(default)]
    pub recorded_at: Option<DateTime<Utc>>,
}

/// Payload for creating or replacing a risk profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProfile {
    pub age_range: AgeRange,
    #[serde(default)]
    pub known_conditions: Vec<KnownCondition>,
    pub pregnancy_weeks: i32,
    pub first_pregnancy: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reading_new_generates_id() {
        let reading = BpReading::new("user-1", 120, 80, Utc::now());
        assert!(!reading.id.is_empty());
        assert_eq!(reading.user_id, "user-1");
        assert_eq!(reading.systolic, 120);
        assert_eq!(reading.diastolic, 80);
    }

    #[test]
    fn test_symptom_record_new() {
        let record = SymptomRecord::new("user-1", SymptomType::Headache, Utc::now());
        assert!(!record.id.is_empty());
        assert_eq!(record.symptom, SymptomType::Headache);
    }

    #[test]
    fn test_symptom_type_serialization() {
        let json = serde_json::to_string(&SymptomType::BlurredVision).unwrap();
        assert_eq!(json, "\"BLURRED_VISION\"");

        let parsed: SymptomType = serde_json::from_str("\"SHORTNESS_OF_BREATH\"").unwrap();
        assert_eq!(parsed, SymptomType::ShortnessOfBreath);
    }

    #[test]
    fn test_symptom_type_as_str_matches_wire_format() {
        let symptoms = [
            SymptomType::Headache,
            SymptomType::BlurredVision,
            SymptomType::UpperAbdominalPain,
            SymptomType::NauseaVomiting,
            SymptomType::ShortnessOfBreath,
            SymptomType::ReducedUrine,
            SymptomType::Swelling,
        ];

        for symptom in symptoms {
            let json = serde_json::to_string(&symptom).unwrap();
            assert_eq!(json, format!("\"{}\"", symptom.as_str()));
        }
    }

    #[test]
    fn test_age_range_serialization() {
        let json = serde_json::to_string(&AgeRange::Age35Plus).unwrap();
        assert_eq!(json, "\"AGE_35_PLUS\"");

        let parsed: AgeRange = serde_json::from_str("\"AGE_20_34\"").unwrap();
        assert_eq!(parsed, AgeRange::Age20To34);
    }

    #[test]
    fn test_known_condition_serialization() {
        let json = serde_json::to_string(&KnownCondition::PreeclampsiaHistory).unwrap();
        assert_eq!(json, "\"PREECLAMPSIA_HISTORY\"");
    }

    #[test]
    fn test_profile_has_condition() {
        let profile = RiskProfile {
            user_id: "user-1".to_string(),
            age_range: AgeRange::Age20To34,
            known_conditions: vec![KnownCondition::ChronicHypertension],
            pregnancy_weeks: 24,
            first_pregnancy: true,
        };

        assert!(profile.has_condition(KnownCondition::ChronicHypertension));
        assert!(!profile.has_condition(KnownCondition::KidneyDisease));
        assert!(profile.has_any_condition(&[
            KnownCondition::KidneyDisease,
            KnownCondition::ChronicHypertension,
        ]));
        assert!(!profile.has_any_condition(&[KnownCondition::Diabetes]));
    }

    #[test]
    fn test_new_reading_deserializes_without_timestamp() {
        let body: NewReading = serde_json::from_str(r#"{"systolic":132,"diastolic":84}"#).unwrap();
        assert_eq!(body.systolic, 132);
        assert!(body.recorded_at.is_none());
    }
}
