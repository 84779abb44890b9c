//! Read-side access trait for health records
//!
//! The classifier and assessment engine consume stored records exclusively
//! through this narrow interface, so storage can be swapped for in-memory
//! fakes in tests.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::types::{BpReading, RiskProfile, SymptomRecord};
use crate::error::AccessError;

/// Read operations over a user's health records
///
/// Implementations must be safe for concurrent invocation across users and
/// across overlapping assessment runs for the same user.
#[async_trait]
pub trait HealthDataReader: Send + Sync {
    /// Most recent reading for the user, if any
    async fn latest_reading(&self, user_id: &str) -> Result<Option<BpReading>, AccessError>;

    /// Readings recorded at or after `cutoff`, newest first
    async fn readings_since(
        &self,
        user_id: &str,
        cutoff: DateTime<Utc>,
    ) -> Result<Vec<BpReading>, AccessError>;

    /// Symptoms recorded at or after `cutoff`, newest first
    async fn symptoms_since(
        &self,
        user_id: &str,
        cutoff: DateTime<Utc>,
    ) -> Result<Vec<SymptomRecord>, AccessError>;

    /// Risk profile for the user
    ///
    /// Returns [`AccessError::ProfileNotFound`] when no profile exists; the
    /// assessment layer treats that as incomplete data, never as safety.
    async fn profile(&self, user_id: &str) -> Result<RiskProfile, AccessError>;
}
