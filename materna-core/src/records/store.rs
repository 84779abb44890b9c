//! In-memory health record storage
//!
//! MemoryHealthStore backs the HTTP surface and the test suites. Writes
//! validate the ingestion invariants; reads implement [`HealthDataReader`]
//! for the assessment engine.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use tracing::info;

use super::reader::HealthDataReader;
use super::types::{
    BpReading, DIASTOLIC_RANGE, NewProfile, NewReading, NewSymptom, PREGNANCY_WEEKS_RANGE,
    RiskProfile, SYSTOLIC_RANGE, SymptomRecord,
};
use crate::error::{AccessError, RecordError};

/// Thread-safe in-memory store for readings, symptoms and profiles
///
/// Records are kept newest first per user. The store never mutates a record
/// after creation.
#[derive(Default)]
pub struct MemoryHealthStore {
    readings: RwLock<HashMap<String, Vec<BpReading>>>,
    symptoms: RwLock<HashMap<String, Vec<SymptomRecord>>>,
    profiles: RwLock<HashMap<String, RiskProfile>>,
}

fn check_vital(field: &'static str, value: i32, range: (i32, i32)) -> Result<(), RecordError> {
    let (min, max) = range;
    if value < min || value > max {
        return Err(RecordError::VitalOutOfRange {
            field,
            value,
            min,
            max,
        });
    }
    Ok(())
}

impl MemoryHealthStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and persist a new blood pressure reading
    pub async fn record_reading(
        &self,
        user_id: &str,
        new: NewReading,
    ) -> Result<BpReading, RecordError> {
        check_vital("systolic", new.systolic, SYSTOLIC_RANGE)?;
        check_vital("diastolic", new.diastolic, DIASTOLIC_RANGE)?;

        let recorded_at = new.recorded_at.unwrap_or_else(Utc::now);
        let reading = BpReading::new(user_id, new.systolic, new.diastolic, recorded_at);

        let mut readings = self.readings.write().await;
        let user_readings = readings.entry(user_id.to_string()).or_default();
        user_readings.push(reading.clone());
        user_readings.sort_by(|a, b| b.recorded_at.cmp(&a.recorded_at));

        info!(
            user_id,
            systolic = reading.systolic,
            diastolic = reading.diastolic,
            "blood pressure reading recorded"
        );

        Ok(reading)
    }

    /// Persist a new symptom record
    pub async fn record_symptom(
        &self,
        user_id: &str,
        new: NewSymptom,
    ) -> Result<SymptomRecord, RecordError> {
        let recorded_at = new.recorded_at.unwrap_or_else(Utc::now);
        let record = SymptomRecord::new(user_id, new.symptom, recorded_at);

        let mut symptoms = self.symptoms.write().await;
        let user_symptoms = symptoms.entry(user_id.to_string()).or_default();
        user_symptoms.push(record.clone());
        user_symptoms.sort_by(|a, b| b.recorded_at.cmp(&a.recorded_at));

        info!(user_id, symptom = record.symptom.as_str(), "symptom recorded");

        Ok(record)
    }

    /// Validate and create or replace the user's risk profile
    pub async fn upsert_profile(
        &self,
        user_id: &str,
        new: NewProfile,
    ) -> Result<RiskProfile, RecordError> {
        let (min, max) = PREGNANCY_WEEKS_RANGE;
        if new.pregnancy_weeks < min || new.pregnancy_weeks > max {
            return Err(RecordError::PregnancyWeeksOutOfRange(new.pregnancy_weeks));
        }

        let profile = RiskProfile {
            user_id: user_id.to_string(),
            age_range: new.age_range,
            known_conditions: new.known_conditions,
            pregnancy_weeks: new.pregnancy_weeks,
            first_pregnancy: new.first_pregnancy,
        };

        self.profiles
            .write()
            .await
            .insert(user_id.to_string(), profile.clone());

        info!(user_id, "risk profile updated");

        Ok(profile)
    }

    /// Readings for a user, newest first, up to `limit`
    pub async fn readings_for_user(&self, user_id: &str, limit: usize) -> Vec<BpReading> {
        let readings = self.readings.read().await;
        readings
            .get(user_id)
            .map(|r| r.iter().take(limit).cloned().collect())
            .unwrap_or_default()
    }

    /// Symptoms for a user, newest first, up to `limit`
    pub async fn symptoms_for_user(&self, user_id: &str, limit: usize) -> Vec<SymptomRecord> {
        let symptoms = self.symptoms.read().await;
        symptoms
            .get(user_id)
            .map(|s| s.iter().take(limit).cloned().collect())
            .unwrap_or_default()
    }
}

#[async_trait]
impl HealthDataReader for MemoryHealthStore {
    async fn latest_reading(&self, user_id: &str) -> Result<Option<BpReading>, AccessError> {
        let readings = self.readings.read().await;
        Ok(readings.get(user_id).and_then(|r| r.first().cloned()))
    }

    async fn readings_since(
        &self,
        user_id: &str,
        cutoff: DateTime<Utc>,
    ) -> Result<Vec<BpReading>, AccessError> {
        let readings = self.readings.read().await;
        Ok(readings
            .get(user_id)
            .map(|r| {
                r.iter()
                    .filter(|reading| reading.recorded_at >= cutoff)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn symptoms_since(
        &self,
        user_id: &str,
        cutoff: DateTime<Utc>,
    ) -> Result<Vec<SymptomRecord>, AccessError> {
        let symptoms = self.symptoms.read().await;
        Ok(symptoms
            .get(user_id)
            .map(|s| {
                s.iter()
                    .filter(|record| record.recorded_at >= cutoff)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn profile(&self, user_id: &str) -> Result<RiskProfile, AccessError> {
        let profiles = self.profiles.read().await;
        profiles
            .get(user_id)
            .cloned()
            .ok_or_else(|| AccessError::ProfileNotFound(user_id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::types::{AgeRange, SymptomType};
    use chrono::Duration;

    fn test_profile() -> NewProfile {
        NewProfile {
            age_range: AgeRange::Age20To34,
            known_conditions: vec![],
            pregnancy_weeks: 28,
            first_pregnancy: true,
        }
    }

    #[tokio::test]
    async fn test_record_and_fetch_reading() {
        let store = MemoryHealthStore::new();

        let reading = store
            .record_reading(
                "user-1",
                NewReading {
                    systolic: 120,
                    diastolic: 80,
                    recorded_at: None,
                },
            )
            .await
            .unwrap();

        let latest = store.latest_reading("user-1").await.unwrap().unwrap();
        assert_eq!(latest.id, reading.id);
    }

    #[tokio::test]
    async fn test_latest_reading_is_newest() {
        let store = MemoryHealthStore::new();
        let now = Utc::now();

        store
            .record_reading(
                "user-1",
                NewReading {
                    systolic: 150,
                    diastolic: 95,
                    recorded_at: Some(now - Duration::hours(5)),
                },
            )
            .await
            .unwrap();
        store
            .record_reading(
                "user-1",
                NewReading {
                    systolic: 118,
                    diastolic: 76,
                    recorded_at: Some(now),
                },
            )
            .await
            .unwrap();

        let latest = store.latest_reading("user-1").await.unwrap().unwrap();
        assert_eq!(latest.systolic, 118);
    }

    #[tokio::test]
    async fn test_readings_since_filters_by_cutoff() {
        let store = MemoryHealthStore::new();
        let now = Utc::now();

        store
            .record_reading(
                "user-1",
                NewReading {
                    systolic: 142,
                    diastolic: 88,
                    recorded_at: Some(now - Duration::hours(72)),
                },
            )
            .await
            .unwrap();
        store
            .record_reading(
                "user-1",
                NewReading {
                    systolic: 145,
                    diastolic: 92,
                    recorded_at: Some(now - Duration::hours(2)),
                },
            )
            .await
            .unwrap();

        let recent = store
            .readings_since("user-1", now - Duration::hours(48))
            .await
            .unwrap();
        assert_eq!(recent.len(), 1);
        assert_eq!(recent[0].systolic, 145);
    }

    #[tokio::test]
    async fn test_reading_validation_rejects_out_of_range() {
        let store = MemoryHealthStore::new();

        let result = store
            .record_reading(
                "user-1",
                NewReading {
                    systolic: 300,
                    diastolic: 80,
                    recorded_at: None,
                },
            )
            .await;
        assert!(matches!(
            result,
            Err(RecordError::VitalOutOfRange { field: "systolic", .. })
        ));

        let result = store
            .record_reading(
                "user-1",
                NewReading {
                    systolic: 120,
                    diastolic: 20,
                    recorded_at: None,
                },
            )
            .await;
        assert!(matches!(
            result,
            Err(RecordError::VitalOutOfRange { field: "diastolic", .. })
        ));
    }

    #[tokio::test]
    async fn test_symptoms_since_filters_by_cutoff() {
        let store = MemoryHealthStore::new();
        let now = Utc::now();

        store
            .record_symptom(
                "user-1",
                NewSymptom {
                    symptom: SymptomType::Headache,
                    recorded_at: Some(now - Duration::hours(100)),
                },
            )
            .await
            .unwrap();
        store
            .record_symptom(
                "user-1",
                NewSymptom {
                    symptom: SymptomType::Swelling,
                    recorded_at: Some(now - Duration::hours(1)),
                },
            )
            .await
            .unwrap();

        let recent = store
            .symptoms_since("user-1", now - Duration::hours(72))
            .await
            .unwrap();
        assert_eq!(recent.len(), 1);
        assert_eq!(recent[0].symptom, SymptomType::Swelling);
    }

    #[tokio::test]
    async fn test_profile_not_found() {
        let store = MemoryHealthStore::new();
        let result = store.profile("missing").await;
        assert!(matches!(result, Err(AccessError::ProfileNotFound(_))));
    }

    #[tokio::test]
    async fn test_upsert_profile_replaces_existing() {
        let store = MemoryHealthStore::new();

        store.upsert_profile("user-1", test_profile()).await.unwrap();

        let mut updated = test_profile();
        updated.pregnancy_weeks = 30;
        store.upsert_profile("user-1", updated).await.unwrap();

        let profile = store.profile("user-1").await.unwrap();
        assert_eq!(profile.pregnancy_weeks, 30);
    }

    #[tokio::test]
    async fn test_upsert_profile_rejects_invalid_weeks() {
        let store = MemoryHealthStore::new();

        let mut profile = test_profile();
        profile.pregnancy_weeks = 43;

        let result = store.upsert_profile("user-1", profile).await;
        assert!(matches!(
            result,
            Err(RecordError::PregnancyWeeksOutOfRange(43))
        ));
    }

    #[tokio::test]
    async fn test_users_are_isolated() {
        let store = MemoryHealthStore::new();

        store
            .record_reading(
                "user-1",
                NewReading {
                    systolic: 120,
                    diastolic: 80,
                    recorded_at: None,
                },
            )
            .await
            .unwrap();

        assert!(store.latest_reading("user-2").await.unwrap().is_none());
        assert!(store.readings_for_user("user-2", 50).await.is_empty());
    }

    #[tokio::test]
    async fn test_list_respects_limit() {
        let store = MemoryHealthStore::new();
        let now = Utc::now();

        for i in 0..5 {
            store
                .record_reading(
                    "user-1",
                    NewReading {
                        systolic: 120 + i,
                        diastolic: 80,
                        recorded_at: Some(now - Duration::minutes(i as i64)),
                    },
                )
                .await
                .unwrap();
        }

        let listed = store.readings_for_user("user-1", 3).await;
        assert_eq!(listed.len(), 3);
        // Newest first
        assert_eq!(listed[0].systolic, 120);
    }
}
