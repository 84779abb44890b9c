//! Alert dispatch abstraction
//!
//! The engine hands finished [`AlertEvent`]s to an [`AlertDispatcher`]; what
//! happens next (persistence, email, SMS) is the dispatcher's concern. A
//! dispatcher failure must never fail the assessment that raised the event.

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{info, warn};

use super::types::{AlertEvent, AlertKind};
use crate::error::DispatchError;

/// Sink for alert events raised by the assessment engine
///
/// Implementations own their delivery, timeout and retry policy, and must be
/// safe for concurrent invocation across users and overlapping runs.
#[async_trait]
pub trait AlertDispatcher: Send + Sync {
    /// Deliver one alert event
    ///
    /// Errors are reported to the caller, which treats them as non-fatal.
    async fn dispatch(&self, event: AlertEvent) -> Result<(), DispatchError>;
}

/// Dispatcher that writes alerts to the structured log
///
/// Stands in for a real delivery integration; the log stream doubles as the
/// audit trail.
#[derive(Default)]
pub struct LogDispatcher;

impl LogDispatcher {
    /// Create a new LogDispatcher
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl AlertDispatcher for LogDispatcher {
    async fn dispatch(&self, event: AlertEvent) -> Result<(), DispatchError> {
        let detail = serde_json::to_string(&event.detail)
            .map_err(|e| DispatchError::SendFailed(format!("serialization error: {}", e)))?;

        match event.kind {
            AlertKind::SevereBp | AlertKind::DangerousSymptoms => {
                warn!(
                    user_id = %event.user_id,
                    kind = ?event.kind,
                    subject = event.template.subject,
                    %detail,
                    "alert dispatched"
                );
            }
            _ => {
                info!(
                    user_id = %event.user_id,
                    kind = ?event.kind,
                    subject = event.template.subject,
                    %detail,
                    "notification dispatched"
                );
            }
        }

        Ok(())
    }
}

/// Dispatcher that records every event in memory
///
/// Test fake: lets suites assert on exactly which events an assessment run
/// raised.
#[derive(Default)]
pub struct MemoryDispatcher {
    events: RwLock<Vec<AlertEvent>>,
}

impl MemoryDispatcher {
    /// Create an empty MemoryDispatcher
    pub fn new() -> Self {
        Self::default()
    }

    /// All events dispatched so far, in dispatch order
    pub async fn events(&self) -> Vec<AlertEvent> {
        self.events.read().await.clone()
    }

    /// Number of events dispatched so far
    pub async fn count(&self) -> usize {
        self.events.read().await.len()
    }

    /// Drop all recorded events
    pub async fn clear(&self) {
        self.events.write().await.clear();
    }
}

#[async_trait]
impl AlertDispatcher for MemoryDispatcher {
    async fn dispatch(&self, event: AlertEvent) -> Result<(), DispatchError> {
        self.events.write().await.push(event);
        Ok(())
    }
}
