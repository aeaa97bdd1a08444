//! The scheduling engine: ordered job queue plus per-core assignment table.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::audit::{build_audit_event, AuditAction, AuditSink};
use crate::core::job::{CoreId, Job, JobHandle, JobId, JobState, Ticks};
use crate::core::metrics::{Averages, Metrics};
use crate::core::policy::Policy;
use crate::core::SchedulerError;
use crate::infra::queue::OrderedQueue;

/// One queued job as seen from outside the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueEntry {
    /// Driver identifier.
    pub id: JobId,
    /// Core running the job, if any.
    pub core: Option<CoreId>,
}

/// The queue in dispatch order.
///
/// Renders as `id(core)` pairs separated by spaces, with `-1` for jobs
/// without a core: `2(-1) 4(0) 1(-1)`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueSnapshot(pub Vec<QueueEntry>);

impl fmt::Display for QueueSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, entry) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            match entry.core {
                Some(core) => write!(f, "{}({core})", entry.id)?,
                None => write!(f, "{}(-1)", entry.id)?,
            }
        }
        Ok(())
    }
}

/// Discrete-event scheduler for a fixed number of cores.
///
/// The driver reports arrivals, completions and (under round robin) quantum
/// expirations; each call returns the resulting dispatch decision. Every job
/// that has arrived and not finished stays in the queue, running or not, so
/// that queue order covers both.
pub struct Scheduler {
    policy: Policy,
    queue: OrderedQueue<Job, Policy>,
    cores: Vec<Option<JobHandle>>,
    metrics: Metrics,
    next_handle: u64,
    audit: Option<Box<dyn AuditSink>>,
}

impl Scheduler {
    /// Start up an engine with `cores` idle cores under `policy`.
    pub fn new(cores: usize, policy: Policy) -> Result<Self, SchedulerError> {
        if cores == 0 {
            tracing::warn!("rejected start-up with zero cores");
            return Err(SchedulerError::InvalidCoreCount(cores));
        }
        tracing::info!("scheduler started: {} cores, policy {}", cores, policy);
        Ok(Self {
            policy,
            queue: OrderedQueue::new(policy),
            cores: vec![None; cores],
            metrics: Metrics::default(),
            next_handle: 0,
            audit: None,
        })
    }

    /// Attach an audit sink.
    #[must_use]
    pub fn with_audit(mut self, audit: Box<dyn AuditSink>) -> Self {
        self.audit = Some(audit);
        self
    }

    /// The attached audit sink, if any.
    pub fn audit(&self) -> Option<&dyn AuditSink> {
        self.audit.as_deref()
    }

    /// Bound policy.
    pub const fn policy(&self) -> Policy {
        self.policy
    }

    /// Number of cores.
    pub fn cores(&self) -> usize {
        self.cores.len()
    }

    /// Jobs that have arrived and not finished.
    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    /// Driver id of the job running on `core`.
    pub fn running_on(&self, core: CoreId) -> Option<JobId> {
        let handle = (*self.cores.get(core)?)?;
        self.job(handle).map(|job| job.id)
    }

    /// Live job with driver id `id`.
    pub fn find_job(&self, id: JobId) -> Option<&Job> {
        self.queue.iter().find(|job| job.id == id)
    }

    /// Accumulated statistics.
    pub const fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Number of jobs whose completion has been processed.
    pub const fn finished_jobs(&self) -> u64 {
        self.metrics.finished_jobs
    }

    /// A job arrived at `time`.
    ///
    /// Returns the core the job should start on (possibly preempting the
    /// job running there), or `None` when no scheduling change is needed.
    pub fn new_job(
        &mut self,
        id: JobId,
        time: Ticks,
        running_time: Ticks,
        priority: i32,
    ) -> Result<Option<CoreId>, SchedulerError> {
        if self.find_job(id).is_some() {
            tracing::warn!("job {} arrived twice", id);
            return Err(SchedulerError::DuplicateJob(id));
        }

        let handle = JobHandle(self.next_handle);
        self.next_handle += 1;

        if self.policy == Policy::Psjf {
            // Bring running jobs' remaining time up to date before ranking.
            for job in self.queue.iter_mut().filter(|job| job.core.is_some()) {
                job.decay(time);
            }
            self.queue.resort();
        }

        let index = self
            .queue
            .insert(Job::new(handle, id, time, running_time, priority));
        self.record(id, None, AuditAction::Arrive, time);

        let decision = if index < self.cores.len() {
            match self.idle_core() {
                Some(core) => {
                    self.assign(handle, core, time);
                    Some(core)
                }
                None if self.policy.preempts_on_arrival() => self.try_preempt(handle, time),
                None => None,
            }
        } else {
            None
        };

        if decision.is_none() {
            tracing::debug!("job {} queued at position {}", id, index);
        }
        self.trace_queue();
        Ok(decision)
    }

    /// The job `id` running on `core` completed at `time`.
    ///
    /// Returns the id of the job to run next on `core`, or `None` when the
    /// core stays idle.
    pub fn job_finished(
        &mut self,
        core: CoreId,
        id: JobId,
        time: Ticks,
    ) -> Result<Option<JobId>, SchedulerError> {
        self.check_core(core)?;
        let Some(job) = self.find_job(id) else {
            tracing::warn!("finish reported for unknown job {}", id);
            return Err(SchedulerError::UnknownJob(id));
        };
        let Some(start) = job.start_time else {
            tracing::warn!("job {} finished without ever starting", id);
            return Err(SchedulerError::MissingTiming(id));
        };
        let handle = job.handle;
        let (arrival, running) = (job.arrival_time, job.running_time);

        self.cores[core] = None;
        for slot in &mut self.cores {
            if *slot == Some(handle) {
                *slot = None;
            }
        }
        let removed = self.queue.remove_matching(|job| job.handle == handle);
        debug_assert_eq!(removed, 1, "job {id} not tracked exactly once");

        self.metrics.record(arrival, running, start, time);
        self.record(id, Some(core), AuditAction::Finish, time);
        tracing::info!("job {} finished on core {} at {}", id, core, time);

        let next = self.dispatch_next(core, time);
        self.trace_queue();
        Ok(next)
    }

    /// The round-robin quantum on `core` expired at `time`.
    ///
    /// The running job goes to the rear of the queue and the first waiting
    /// job (possibly the same one) takes the core. Returns its id, or `None`
    /// when nothing is runnable.
    pub fn quantum_expired(
        &mut self,
        core: CoreId,
        time: Ticks,
    ) -> Result<Option<JobId>, SchedulerError> {
        if self.policy != Policy::Rr {
            tracing::warn!("quantum expired under {}", self.policy);
            return Err(SchedulerError::NotRoundRobin(self.policy));
        }
        self.check_core(core)?;

        if let Some(handle) = self.cores[core].take() {
            if let Some(index) = self.queue.position(|job| job.handle == handle) {
                if let Some(mut job) = self.queue.remove_at(index) {
                    job.core = None;
                    let id = job.id;
                    self.queue.insert(job);
                    self.record(id, Some(core), AuditAction::Rotate, time);
                }
            }
        }

        let next = self.dispatch_next(core, time);
        self.trace_queue();
        Ok(next)
    }

    /// Mean waiting time over finished jobs.
    pub fn average_waiting_time(&self) -> f64 {
        self.metrics.averages().waiting
    }

    /// Mean turnaround time over finished jobs.
    pub fn average_turnaround_time(&self) -> f64 {
        self.metrics.averages().turnaround
    }

    /// Mean response time over finished jobs.
    pub fn average_response_time(&self) -> f64 {
        self.metrics.averages().response
    }

    /// All three means at once.
    pub fn averages(&self) -> Averages {
        self.metrics.averages()
    }

    /// The queue in dispatch order.
    pub fn show_queue(&self) -> QueueSnapshot {
        QueueSnapshot(
            self.queue
                .iter()
                .map(|job| QueueEntry {
                    id: job.id,
                    core: job.core,
                })
                .collect(),
        )
    }

    /// Tear the engine down, dropping every job still tracked. Returns how
    /// many jobs were discarded.
    pub fn clean_up(mut self) -> usize {
        let discarded = self.queue.len();
        self.queue.clear();
        self.cores.clear();
        tracing::info!(
            "scheduler shut down: {} finished, {} discarded",
            self.metrics.finished_jobs,
            discarded
        );
        discarded
    }

    fn check_core(&self, core: CoreId) -> Result<(), SchedulerError> {
        if core < self.cores.len() {
            Ok(())
        } else {
            tracing::warn!("core {} out of range", core);
            Err(SchedulerError::CoreOutOfRange {
                core,
                cores: self.cores.len(),
            })
        }
    }

    fn idle_core(&self) -> Option<CoreId> {
        self.cores.iter().position(Option::is_none)
    }

    fn job(&self, handle: JobHandle) -> Option<&Job> {
        self.queue.iter().find(|job| job.handle == handle)
    }

    fn job_mut(&mut self, handle: JobHandle) -> Option<&mut Job> {
        self.queue.iter_mut().find(|job| job.handle == handle)
    }

    fn assign(&mut self, handle: JobHandle, core: CoreId, time: Ticks) {
        let Some(job) = self.job_mut(handle) else {
            return;
        };
        job.dispatch(core, time);
        let id = job.id;
        self.cores[core] = Some(handle);
        self.record(id, Some(core), AuditAction::Dispatch, time);
        tracing::info!("job {} dispatched on core {} at {}", id, core, time);
    }

    /// Hand `core` to the first waiting job in queue order.
    fn dispatch_next(&mut self, core: CoreId, time: Ticks) -> Option<JobId> {
        let index = self.queue.position(|job| job.core.is_none())?;
        let (handle, id) = self.queue.at(index).map(|job| (job.handle, job.id))?;
        self.assign(handle, core, time);
        Some(id)
    }

    /// Pick the running job a newcomer would displace.
    ///
    /// PSJF: the largest remaining time, first core on ties. PPRI: the
    /// largest priority value, later start time on ties.
    fn select_victim(&self) -> Option<(CoreId, JobHandle)> {
        let mut victim: Option<(CoreId, &Job)> = None;
        for (core, slot) in self.cores.iter().enumerate() {
            let Some(job) = slot.as_ref().and_then(|handle| self.job(*handle)) else {
                continue;
            };
            let replace = match victim {
                None => true,
                Some((_, best)) => match self.policy {
                    Policy::Psjf => job.remaining_time > best.remaining_time,
                    _ => {
                        job.priority > best.priority
                            || (job.priority == best.priority && job.start_time > best.start_time)
                    }
                },
            };
            if replace {
                victim = Some((core, job));
            }
        }
        victim.map(|(core, job)| (core, job.handle))
    }

    fn try_preempt(&mut self, newcomer: JobHandle, time: Ticks) -> Option<CoreId> {
        let (core, victim) = self.select_victim()?;
        let incoming = self.job(newcomer)?;
        let running = self.job(victim)?;
        let displaces = match self.policy {
            Policy::Psjf => running.remaining_time > incoming.remaining_time,
            _ => running.priority > incoming.priority,
        };
        if !displaces {
            return None;
        }

        let victim_id = running.id;
        if let Some(job) = self.job_mut(victim) {
            job.preempt(time);
        }
        self.cores[core] = None;
        self.record(victim_id, Some(core), AuditAction::Preempt, time);
        tracing::info!("job {} preempted on core {} at {}", victim_id, core, time);

        self.assign(newcomer, core, time);
        Some(core)
    }

    fn record(&mut self, id: JobId, core: Option<CoreId>, action: AuditAction, time: Ticks) {
        if let Some(sink) = self.audit.as_mut() {
            sink.record(build_audit_event(id, core, action, time));
        }
    }

    fn trace_queue(&self) {
        self.check_invariants();
        if tracing::enabled!(tracing::Level::DEBUG) {
            tracing::debug!("queue: {}", self.show_queue());
        }
    }

    fn check_invariants(&self) {
        debug_assert!(self.queue.is_sorted(), "queue out of order");
        for (core, slot) in self.cores.iter().enumerate() {
            if let Some(handle) = *slot {
                let job = self.job(handle);
                debug_assert!(job.is_some(), "core {core} holds a job missing from the queue");
                debug_assert_eq!(
                    job.and_then(|job| job.core),
                    Some(core),
                    "core {core} and its job disagree"
                );
            }
        }
        let running = self
            .queue
            .iter()
            .filter(|job| job.state() == JobState::Running)
            .count();
        debug_assert_eq!(
            running,
            self.cores.iter().flatten().count(),
            "running jobs and busy cores disagree"
        );
        if !self.policy.is_preemptive() {
            debug_assert!(
                self.queue
                    .iter()
                    .all(|job| job.state() == JobState::Running || job.start_time.is_none()),
                "a started job went back to waiting under {}",
                self.policy
            );
        }
    }
}

impl fmt::Debug for Scheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scheduler")
            .field("policy", &self.policy)
            .field("cores", &self.cores)
            .field("queue", &self.queue)
            .field("metrics", &self.metrics)
            .finish_non_exhaustive()
    }
}
