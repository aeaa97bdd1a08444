//! Job records tracked by the engine.

use serde::{Deserialize, Serialize};

/// Driver-assigned job identifier.
pub type JobId = u32;
/// Zero-based core index.
pub type CoreId = usize;
/// Simulated time units.
pub type Ticks = u64;

/// Engine-assigned identity of a job.
///
/// Two jobs with identical fields still carry distinct handles, so removal
/// by handle never conflates them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JobHandle(pub u64);

/// Whether a live job currently holds a core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobState {
    /// Queued without a core.
    Waiting,
    /// Holding a core.
    Running,
}

/// A job that has arrived and not yet finished.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    /// Identity used for removal.
    pub handle: JobHandle,
    /// Driver identifier.
    pub id: JobId,
    /// Time the job arrived.
    pub arrival_time: Ticks,
    /// Total service the job needs.
    pub running_time: Ticks,
    /// Service still owed; decays only under PSJF.
    pub remaining_time: Ticks,
    /// Lower value ranks higher.
    pub priority: i32,
    /// Core currently running the job.
    pub core: Option<CoreId>,
    /// First dispatch time.
    pub start_time: Option<Ticks>,
    /// Last time `remaining_time` was brought up to date.
    pub last_updated_time: Option<Ticks>,
}

impl Job {
    /// Build a freshly arrived, waiting job.
    pub const fn new(
        handle: JobHandle,
        id: JobId,
        arrival_time: Ticks,
        running_time: Ticks,
        priority: i32,
    ) -> Self {
        Self {
            handle,
            id,
            arrival_time,
            running_time,
            remaining_time: running_time,
            priority,
            core: None,
            start_time: None,
            last_updated_time: None,
        }
    }

    /// Derived lifecycle state.
    pub const fn state(&self) -> JobState {
        if self.core.is_some() {
            JobState::Running
        } else {
            JobState::Waiting
        }
    }

    /// Place the job on `core` at `time`, stamping the first start.
    pub fn dispatch(&mut self, core: CoreId, time: Ticks) {
        self.core = Some(core);
        if self.start_time.is_none() {
            self.start_time = Some(time);
        }
        self.last_updated_time = Some(time);
    }

    /// Take the job off its core at `time`.
    ///
    /// A job displaced in the same instant it was first dispatched never ran,
    /// so its start time is cleared.
    pub fn preempt(&mut self, time: Ticks) {
        self.core = None;
        if self.start_time == Some(time) {
            self.start_time = None;
        }
    }

    /// Charge the service consumed since the last update.
    pub fn decay(&mut self, time: Ticks) {
        if let Some(last) = self.last_updated_time {
            let elapsed = time.saturating_sub(last);
            self.remaining_time = self.remaining_time.saturating_sub(elapsed);
        }
        self.last_updated_time = Some(time);
    }
}
