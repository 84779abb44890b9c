//! Error types for materna-core

use thiserror::Error;

/// Top-level error type for materna-core
#[derive(Error, Debug)]
pub enum MaternaError {
    #[error("Access error: {0}")]
    Access(#[from] AccessError),

    #[error("Dispatch error: {0}")]
    Dispatch(#[from] DispatchError),

    #[error("Record error: {0}")]
    Record(#[from] RecordError),
}

/// Errors from the health data access layer
#[derive(Error, Debug)]
pub enum AccessError {
    #[error("Risk profile not found for user: {0}")]
    ProfileNotFound(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

/// Errors from alert dispatch
#[derive(Error, Debug)]
pub enum DispatchError {
    #[error("Failed to send alert: {0}")]
    SendFailed(String),
}

/// Errors raised when ingesting new records
#[derive(Error, Debug)]
pub enum RecordError {
    #[error("{field} must be between {min} and {max} mmHg, got {value}")]
    VitalOutOfRange {
        field: &'static str,
        value: i32,
        min: i32,
        max: i32,
    },

    #[error("Pregnancy weeks must be between 0 and 42, got {0}")]
    PregnancyWeeksOutOfRange(i32),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn access_error_profile_not_found_displays_correctly() {
        let error = AccessError::ProfileNotFound("user-42".to_string());
        assert!(error.to_string().contains("Risk profile not found"));
        assert!(error.to_string().contains("user-42"));
    }

    #[test]
    fn access_error_storage_displays_correctly() {
        let error = AccessError::Storage("connection refused".to_string());
        assert!(error.to_string().contains("connection refused"));
    }

    #[test]
    fn dispatch_error_send_failed_displays_correctly() {
        let error = DispatchError::SendFailed("sink unavailable".to_string());
        assert!(error.to_string().contains("Failed to send alert"));
    }

    #[test]
    fn record_error_vital_out_of_range_displays_correctly() {
        let error = RecordError::VitalOutOfRange {
            field: "systolic",
            value: 300,
            min: 60,
            max: 260,
        };
        let message = error.to_string();
        assert!(message.contains("systolic"));
        assert!(message.contains("300"));
        assert!(message.contains("260"));
    }

    #[test]
    fn record_error_pregnancy_weeks_displays_correctly() {
        let error = RecordError::PregnancyWeeksOutOfRange(50);
        assert!(error.to_string().contains("50"));
    }

    #[test]
    fn materna_error_converts_from_access_error() {
        let access_error = AccessError::ProfileNotFound("user-1".to_string());
        let error: MaternaError = access_error.into();
        assert!(matches!(error, MaternaError::Access(_)));
    }

    #[test]
    fn materna_error_converts_from_dispatch_error() {
        let dispatch_error = DispatchError::SendFailed("boom".to_string());
        let error: MaternaError = dispatch_error.into();
        assert!(matches!(error, MaternaError::Dispatch(_)));
    }

    #[test]
    fn materna_error_converts_from_record_error() {
        let record_error = RecordError::PregnancyWeeksOutOfRange(43);
        let error: MaternaError = record_error.into();
        assert!(matches!(error, MaternaError::Record(_)));
    }
}
