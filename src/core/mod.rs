//! Core scheduling abstractions: jobs, policies, the engine and its metrics.

pub mod audit;
pub mod error;
pub mod job;
pub mod metrics;
pub mod policy;
pub mod scheduler;

pub use audit::{build_audit_event, AuditAction, AuditEvent, AuditSink, InMemoryAuditSink};
pub use error::{AppResult, SchedulerError};
pub use job::{CoreId, Job, JobHandle, JobId, JobState, Ticks};
pub use metrics::{Averages, Metrics};
pub use policy::Policy;
pub use scheduler::{QueueEntry, QueueSnapshot, Scheduler};
