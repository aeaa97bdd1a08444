//! Audit sink implementations.
//!
//! Records every scheduling decision the engine takes so a run can be
//! replayed or inspected after the fact.

use std::collections::VecDeque;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::job::{CoreId, JobId, Ticks};

/// Kind of scheduling decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditAction {
    /// Job entered the queue.
    Arrive,
    /// Job was placed on a core.
    Dispatch,
    /// Job lost its core to a newcomer.
    Preempt,
    /// Job completed and left the queue.
    Finish,
    /// Job's quantum ran out and it went to the rear.
    Rotate,
}

impl fmt::Display for AuditAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Arrive => "arrive",
            Self::Dispatch => "dispatch",
            Self::Preempt => "preempt",
            Self::Finish => "finish",
            Self::Rotate => "rotate",
        };
        f.write_str(name)
    }
}

/// Audit event structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEvent {
    /// Event identifier.
    pub event_id: String,
    /// Related job.
    pub job_id: JobId,
    /// Core involved, if any.
    pub core: Option<CoreId>,
    /// Action taken.
    pub action: AuditAction,
    /// Simulated time of the decision.
    pub time: Ticks,
}

/// Audit sink abstraction.
pub trait AuditSink {
    /// Record an audit event.
    fn record(&mut self, event: AuditEvent);

    /// Snapshot of retained events, oldest first.
    fn events(&self) -> Vec<AuditEvent>;
}

/// In-memory audit sink for testing and dev.
pub struct InMemoryAuditSink {
    events: VecDeque<AuditEvent>,
    max_events: usize,
}

impl InMemoryAuditSink {
    /// Create a new in-memory sink with a bounded buffer.
    pub fn new(max_events: usize) -> Self {
        Self {
            events: VecDeque::with_capacity(max_events.min(1024)),
            max_events,
        }
    }
}

impl AuditSink for InMemoryAuditSink {
    fn record(&mut self, event: AuditEvent) {
        if self.max_events == 0 {
            return;
        }
        if self.events.len() >= self.max_events {
            self.events.pop_front();
        }
        self.events.push_back(event);
    }

    fn events(&self) -> Vec<AuditEvent> {
        self.events.iter().cloned().collect()
    }
}

/// Helper to build an audit event with a fresh identifier.
pub fn build_audit_event(
    job_id: JobId,
    core: Option<CoreId>,
    action: AuditAction,
    time: Ticks,
) -> AuditEvent {
    AuditEvent {
        event_id: uuid::Uuid::new_v4().to_string(),
        job_id,
        core,
        action,
        time,
    }
}
