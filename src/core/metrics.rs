//! Timing statistics folded in as jobs finish.

use serde::{Deserialize, Serialize};

use crate::core::job::Ticks;

/// Running sums over finished jobs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metrics {
    /// Sum of `finish - arrival - running_time`.
    pub total_waiting: Ticks,
    /// Sum of `start - arrival`.
    pub total_response: Ticks,
    /// Sum of `finish - arrival`.
    pub total_turnaround: Ticks,
    /// Jobs folded in so far.
    pub finished_jobs: u64,
}

/// Arithmetic means over finished jobs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Averages {
    /// Mean waiting time.
    pub waiting: f64,
    /// Mean turnaround time.
    pub turnaround: f64,
    /// Mean response time.
    pub response: f64,
}

impl Metrics {
    /// Fold one finished job in.
    pub fn record(&mut self, arrival: Ticks, running: Ticks, start: Ticks, finish: Ticks) {
        let turnaround = finish.saturating_sub(arrival);
        self.total_waiting += turnaround.saturating_sub(running);
        self.total_response += start.saturating_sub(arrival);
        self.total_turnaround += turnaround;
        self.finished_jobs += 1;
    }

    /// Means; all zero when nothing has finished.
    #[allow(clippy::cast_precision_loss)]
    pub fn averages(&self) -> Averages {
        if self.finished_jobs == 0 {
            return Averages::default();
        }
        let n = self.finished_jobs as f64;
        Averages {
            waiting: self.total_waiting as f64 / n,
            turnaround: self.total_turnaround as f64 / n,
            response: self.total_response as f64 / n,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_averages_are_zero() {
        assert_eq!(Metrics::default().averages(), Averages::default());
    }

    #[test]
    fn test_record_and_average() {
        let mut m = Metrics::default();
        m.record(0, 5, 0, 5);
        m.record(2, 3, 5, 8);
        assert_eq!(m.finished_jobs, 2);
        assert_eq!(m.total_waiting, 3);
        assert_eq!(m.total_response, 3);
        assert_eq!(m.total_turnaround, 11);
        let avg = m.averages();
        assert!((avg.waiting - 1.5).abs() < f64::EPSILON);
        assert!((avg.turnaround - 5.5).abs() < f64::EPSILON);
        assert!((avg.response - 1.5).abs() < f64::EPSILON);
    }
}
