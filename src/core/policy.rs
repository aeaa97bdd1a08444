//! Scheduling policies and their queue orderings.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::job::Job;
use crate::core::SchedulerError;
use crate::infra::queue::Comparator;

/// The six supported scheduling schemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Policy {
    /// First come, first served.
    Fcfs,
    /// Shortest job first, non-preemptive.
    Sjf,
    /// Shortest remaining time first.
    Psjf,
    /// Priority, non-preemptive.
    Pri,
    /// Priority, preemptive.
    Ppri,
    /// Round robin.
    Rr,
}

impl Policy {
    /// Every policy, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Fcfs,
        Self::Sjf,
        Self::Psjf,
        Self::Pri,
        Self::Ppri,
        Self::Rr,
    ];

    /// True when a newcomer may displace a running job.
    pub const fn preempts_on_arrival(self) -> bool {
        matches!(self, Self::Psjf | Self::Ppri)
    }

    /// True when running jobs can return to waiting before they finish.
    pub const fn is_preemptive(self) -> bool {
        matches!(self, Self::Psjf | Self::Ppri | Self::Rr)
    }

    /// Lowercase policy name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fcfs => "fcfs",
            Self::Sjf => "sjf",
            Self::Psjf => "psjf",
            Self::Pri => "pri",
            Self::Ppri => "ppri",
            Self::Rr => "rr",
        }
    }
}

impl Comparator<Job> for Policy {
    fn compare(&self, a: &Job, b: &Job) -> Ordering {
        match self {
            // Arrival order: every existing job ranks ahead of the newcomer.
            Self::Fcfs | Self::Rr => Ordering::Less,
            Self::Sjf => a
                .running_time
                .cmp(&b.running_time)
                .then(a.arrival_time.cmp(&b.arrival_time)),
            Self::Psjf => a
                .remaining_time
                .cmp(&b.remaining_time)
                .then(a.arrival_time.cmp(&b.arrival_time)),
            Self::Pri | Self::Ppri => a
                .priority
                .cmp(&b.priority)
                .then(a.arrival_time.cmp(&b.arrival_time)),
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Policy {
    type Err = SchedulerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SchedulerError::UnknownPolicy(s.to_string()))
    }
}
