//! materna-core: Core library for the materna maternal-health backend
//!
//! This crate provides the decision logic of materna:
//!
//! - **Health records** - [`BpReading`], [`SymptomRecord`] and [`RiskProfile`],
//!   the [`HealthDataReader`] access trait and the in-memory
//!   [`MemoryHealthStore`]
//! - **Priority classification** - [`classify`] maps a [`HealthSnapshot`] to a
//!   [`CarePriority`] with its contributing reasons
//! - **Safe messaging** - [`next_step_message`] resolves a priority to a fixed,
//!   pre-approved guidance string
//! - **Assessment orchestration** - [`AssessmentEngine`] re-assesses a user
//!   after every new record and fans [`AlertEvent`]s out through an
//!   [`AlertDispatcher`]
//!
//! Classification is deterministic and rule-based: no scoring, no diagnosis,
//! and every failure mode escalates rather than falling back to Routine.
//!
//! # Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use materna_core::{
//!     AssessmentConfig, AssessmentEngine, LogDispatcher, MemoryHealthStore, NewReading,
//! };
//!
//! async fn example() -> Result<(), materna_core::MaternaError> {
//!     let store = Arc::new(MemoryHealthStore::new());
//!     let engine = AssessmentEngine::new(
//!         store.clone(),
//!         Arc::new(LogDispatcher::new()),
//!         AssessmentConfig::default(),
//!     );
//!
//!     // Commit a reading, then hand the assessment to the runtime.
//!     store
//!         .record_reading(
//!             "user-1",
//!             NewReading {
//!                 systolic: 132,
//!                 diastolic: 84,
//!                 recorded_at: None,
//!             },
//!         )
//!         .await?;
//!     let _ = engine.trigger("user-1");
//!
//!     // Or answer the synchronous query surface.
//!     let summary = engine.current_priority("user-1").await;
//!     println!("{}: {}", summary.priority.as_str(), summary.message);
//!     Ok(())
//! }
//! ```

pub mod alerts;
pub mod assessment;
pub mod config;
pub mod error;
pub mod priority;
pub mod records;

// Re-export key types for convenience
pub use alerts::{
    AlertDetail, AlertDispatcher, AlertEvent, AlertKind, AlertTemplate, LogDispatcher,
    MemoryDispatcher,
};
pub use assessment::AssessmentEngine;
pub use config::AssessmentConfig;
pub use error::{AccessError, DispatchError, MaternaError, RecordError};
pub use priority::{
    Assessment, CarePriority, HealthSnapshot, INCOMPLETE_ASSESSMENT_REASON, PrioritySummary,
    classify, next_step_message,
};
pub use records::{
    AgeRange, BpReading, HealthDataReader, KnownCondition, MemoryHealthStore, NewProfile,
    NewReading, NewSymptom, RiskProfile, SymptomRecord, SymptomType,
};
