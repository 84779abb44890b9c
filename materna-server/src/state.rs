//! Shared application state for the materna server

use std::sync::Arc;

use chrono::{DateTime, Utc};
use materna_core::{AssessmentConfig, AssessmentEngine, LogDispatcher, MemoryHealthStore};

/// Shared application state accessible by all handlers
#[derive(Clone)]
pub struct AppState {
    /// Record storage, also serving as the engine's data reader
    pub store: Arc<MemoryHealthStore>,
    /// Assessment engine for classification and alert fan-out
    pub engine: AssessmentEngine,
    /// When the server started
    pub started_at: DateTime<Utc>,
}

impl AppState {
    /// Create an AppState with default components
    pub fn new() -> Self {
        let store = Arc::new(MemoryHealthStore::new());
        let engine = AssessmentEngine::new(
            store.clone(),
            Arc::new(LogDispatcher::new()),
            AssessmentConfig::default(),
        );

        Self {
            store,
            engine,
            started_at: Utc::now(),
        }
    }

    /// Create AppState with custom components (for testing)
    pub fn with_components(store: Arc<MemoryHealthStore>, engine: AssessmentEngine) -> Self {
        Self {
            store,
            engine,
            started_at: Utc::now(),
        }
    }

    /// Returns how long the server has been running
    pub fn uptime_seconds(&self) -> i64 {
        (Utc::now() - self.started_at).num_seconds()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
