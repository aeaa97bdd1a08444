//! Error types for scheduler operations.

use thiserror::Error;

use crate::core::job::{CoreId, JobId};
use crate::core::policy::Policy;

/// Errors produced by scheduler components.
///
/// Every variant signals a broken contract between the driver and the
/// engine; drivers are expected to abort the run on any of them.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchedulerError {
    /// The engine needs at least one core.
    #[error("invalid core count: {0}")]
    InvalidCoreCount(usize),
    /// Policy name did not match any known scheme.
    #[error("unknown policy: {0}")]
    UnknownPolicy(String),
    /// No live job carries this identifier.
    #[error("unknown job: {0}")]
    UnknownJob(JobId),
    /// A live job already carries this identifier.
    #[error("duplicate job: {0}")]
    DuplicateJob(JobId),
    /// Core index outside the core table.
    #[error("core {core} out of range (cores: {cores})")]
    CoreOutOfRange {
        /// Requested core.
        core: CoreId,
        /// Size of the core table.
        cores: usize,
    },
    /// A finishing job was never dispatched.
    #[error("job {0} finished without timing data")]
    MissingTiming(JobId),
    /// Quantum expiration only applies to round robin.
    #[error("quantum expiration under non-round-robin policy {0}")]
    NotRoundRobin(Policy),
    /// Configuration failed validation.
    #[error("config error: {0}")]
    Config(String),
}

/// Application-facing result using anyhow for higher-level contexts.
pub type AppResult<T> = Result<T, anyhow::Error>;
