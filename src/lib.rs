//! # Corewise
//!
//! A discrete-event scheduling engine for simulated multi-core CPUs.
//!
//! An external driver owns simulated time and reports three kinds of events:
//! a job arrived, a job finished, and (under round robin) a core's quantum
//! expired. For each event the [`core::Scheduler`] decides which job runs on
//! which core and hands the decision back. Waiting, response and turnaround
//! times are accumulated as jobs finish.
//!
//! ## Policies
//!
//! | Policy | Queue order | Preemptive |
//! |--------|-------------|------------|
//! | `fcfs` | arrival | no |
//! | `sjf`  | running time, then arrival | no |
//! | `psjf` | remaining time, then arrival | on arrival |
//! | `pri`  | priority (lower first), then arrival | no |
//! | `ppri` | priority, then arrival | on arrival |
//! | `rr`   | arrival, rotated on quantum expiry | by timer |
//!
//! ## Example
//!
//! ```rust
//! use corewise::core::{Policy, Scheduler};
//!
//! let mut engine = Scheduler::new(1, Policy::Fcfs)?;
//! assert_eq!(engine.new_job(1, 0, 5, 0)?, Some(0));
//! assert_eq!(engine.new_job(2, 2, 3, 0)?, None);
//! assert_eq!(engine.job_finished(0, 1, 5)?, Some(2));
//! assert_eq!(engine.job_finished(0, 2, 8)?, None);
//! assert!((engine.average_turnaround_time() - 5.5).abs() < f64::EPSILON);
//! engine.clean_up();
//! # Ok::<(), corewise::core::SchedulerError>(())
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Core scheduling abstractions: jobs, policies, the engine and metrics.
pub mod core;
/// Configuration models for engine runs.
pub mod config;
/// Builders to construct engines from configuration.
pub mod builders;
/// Infrastructure: the ordered job queue.
pub mod infra;
/// Shared utilities.
pub mod util;
