//! Side-by-side comparison of two algorithms over one workload.
//!
//! Each side is an independent [`Scheduler`] with its own algorithm
//! instance; the right side runs on fresh clones of the workload, so no
//! process state is shared.

use serde::{Deserialize, Serialize};

use super::{Scheduler, SimulationMetrics, TickReport};
use crate::algorithms::{AlgorithmKey, SchedulerConfig};
use crate::models::{Process, ProcessId};
use crate::validation::SimulationError;

/// Right-minus-left metric differences.
///
/// Negative values mean the right algorithm did better on that metric.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricsComparison {
    /// Left-side metrics.
    pub left: SimulationMetrics,
    /// Right-side metrics.
    pub right: SimulationMetrics,
    /// Difference in average waiting time.
    pub waiting_time_delta: f64,
    /// Difference in average turnaround time.
    pub turnaround_time_delta: f64,
    /// Difference in average response time.
    pub response_time_delta: f64,
    /// Difference in context switches.
    pub context_switch_delta: i64,
}

impl MetricsComparison {
    /// Compares two metric snapshots.
    pub fn between(left: SimulationMetrics, right: SimulationMetrics) -> Self {
        Self {
            waiting_time_delta: right.avg_waiting_time - left.avg_waiting_time,
            turnaround_time_delta: right.avg_turnaround_time - left.avg_turnaround_time,
            response_time_delta: right.avg_response_time - left.avg_response_time,
            context_switch_delta: right.context_switches as i64 - left.context_switches as i64,
            left,
            right,
        }
    }
}

/// Two schedulers stepped in lockstep over the same workload.
///
/// # Example
///
/// ```
/// use cpu_sched_sim::algorithms::{AlgorithmKey, SchedulerConfig};
/// use cpu_sched_sim::models::{Process, ProcessId};
/// use cpu_sched_sim::scheduler::ComparisonRun;
///
/// let workload = vec![
///     Process::new(ProcessId(0), 0, 8),
///     Process::new(ProcessId(1), 1, 4),
/// ];
/// let mut run = ComparisonRun::new(
///     workload,
///     AlgorithmKey::Fcfs,
///     AlgorithmKey::SjfPreemptive,
///     SchedulerConfig::default(),
/// )
/// .unwrap();
///
/// while !run.is_complete() {
///     run.tick();
/// }
/// assert!(run.compare().waiting_time_delta < 0.0);
/// ```
#[derive(Debug)]
pub struct ComparisonRun {
    left: Scheduler,
    right: Scheduler,
}

impl ComparisonRun {
    /// Builds both sides from one workload.
    pub fn new(
        processes: Vec<Process>,
        left_key: AlgorithmKey,
        right_key: AlgorithmKey,
        config: SchedulerConfig,
    ) -> Result<Self, SimulationError> {
        let cloned: Vec<Process> = processes.iter().map(Process::fresh_clone).collect();

        let mut left = Scheduler::new().with_algorithm(left_key);
        left.set_config(config)?;
        left.configure(processes)?;

        let mut right = Scheduler::new().with_algorithm(right_key);
        right.set_config(config)?;
        right.configure(cloned)?;

        Ok(Self { left, right })
    }

    /// Left-side scheduler.
    pub fn left(&self) -> &Scheduler {
        &self.left
    }

    /// Right-side scheduler.
    pub fn right(&self) -> &Scheduler {
        &self.right
    }

    /// Starts both sides.
    pub fn start(&mut self) {
        self.left.start();
        self.right.start();
    }

    /// Pauses both sides.
    pub fn pause(&mut self) {
        self.left.pause();
        self.right.pause();
    }

    /// Resumes both sides.
    pub fn resume(&mut self) {
        self.left.resume();
        self.right.resume();
    }

    /// Resets both sides.
    pub fn reset(&mut self) {
        self.left.reset();
        self.right.reset();
    }

    /// Steps each side that has not completed yet.
    pub fn tick(&mut self) -> (Option<TickReport>, Option<TickReport>) {
        let left = (!self.left.is_complete()).then(|| self.left.tick());
        let right = (!self.right.is_complete()).then(|| self.right.tick());
        (left, right)
    }

    /// Advances each side that is running.
    pub fn advance(&mut self) -> (Option<TickReport>, Option<TickReport>) {
        (self.left.advance(), self.right.advance())
    }

    /// Adds a process to both sides (the right side gets a fresh clone).
    pub fn add_process(&mut self, process: Process) -> Result<(), SimulationError> {
        let cloned = process.fresh_clone();
        self.left.add_process(process)?;
        if let Err(e) = self.right.add_process(cloned.clone()) {
            self.left.remove_process(cloned.id);
            return Err(e);
        }
        Ok(())
    }

    /// Removes a process from both sides.
    pub fn remove_process(&mut self, id: ProcessId) -> bool {
        let left = self.left.remove_process(id);
        let right = self.right.remove_process(id);
        left || right
    }

    /// Whether both sides have completed.
    pub fn is_complete(&self) -> bool {
        self.left.is_complete() && self.right.is_complete()
    }

    /// Current metric differences.
    pub fn compare(&self) -> MetricsComparison {
        MetricsComparison::between(self.left.metrics(), self.right.metrics())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProcessState;

    fn workload() -> Vec<Process> {
        vec![
            Process::new(ProcessId(0), 0, 8),
            Process::new(ProcessId(1), 1, 4),
            Process::new(ProcessId(2), 2, 2),
        ]
    }

    fn run(left: AlgorithmKey, right: AlgorithmKey) -> ComparisonRun {
        ComparisonRun::new(workload(), left, right, SchedulerConfig::default()).unwrap()
    }

    #[test]
    fn test_sides_are_independent() {
        let mut cmp = run(AlgorithmKey::Fcfs, AlgorithmKey::SjfPreemptive);
        cmp.tick();
        cmp.tick();

        // FCFS keeps P0; SRTF switched to P1 at t=1
        assert_eq!(cmp.left().current_process().map(|p| p.id), Some(ProcessId(0)));
        assert_eq!(cmp.right().current_process().map(|p| p.id), Some(ProcessId(1)));
        assert_eq!(cmp.left().process(ProcessId(0)).unwrap().remaining_time(), 6);
        assert_eq!(cmp.right().process(ProcessId(0)).unwrap().remaining_time(), 7);
        assert_eq!(
            cmp.right().process(ProcessId(0)).unwrap().state(),
            ProcessState::Ready
        );
    }

    #[test]
    fn test_runs_to_completion_and_compares() {
        let mut cmp = run(AlgorithmKey::Fcfs, AlgorithmKey::SjfPreemptive);
        let mut ticks = 0;
        while !cmp.is_complete() {
            cmp.tick();
            ticks += 1;
            assert!(ticks < 100);
        }
        assert_eq!(cmp.tick(), (None, None));

        // FCFS: P0 0..8, P1 8..12, P2 12..14 → waits 0, 7, 10
        // SRTF: P0 0..1, P1 1..2, P2 2..4, P1 4..7, P0 7..14 → waits 6, 2, 0
        let c = cmp.compare();
        assert!((c.left.avg_waiting_time - 17.0 / 3.0).abs() < 1e-10);
        assert!((c.right.avg_waiting_time - 8.0 / 3.0).abs() < 1e-10);
        assert!((c.waiting_time_delta + 3.0).abs() < 1e-10);
        assert_eq!(c.left.context_switches, 2);
        assert_eq!(c.right.context_switches, 4);
        assert_eq!(c.context_switch_delta, 2);
    }

    #[test]
    fn test_same_algorithm_same_result() {
        let mut cmp = run(AlgorithmKey::RoundRobin, AlgorithmKey::RoundRobin);
        while !cmp.is_complete() {
            cmp.tick();
        }
        assert_eq!(cmp.left().history(), cmp.right().history());
        let c = cmp.compare();
        assert_eq!(c.waiting_time_delta, 0.0);
        assert_eq!(c.context_switch_delta, 0);
    }

    #[test]
    fn test_add_and_remove_on_both_sides() {
        let mut cmp = run(AlgorithmKey::Fcfs, AlgorithmKey::Sjf);
        cmp.add_process(Process::new(ProcessId(7), 3, 1)).unwrap();
        assert_eq!(cmp.left().processes().len(), 4);
        assert_eq!(cmp.right().processes().len(), 4);

        assert!(cmp.add_process(Process::new(ProcessId(7), 0, 1)).is_err());
        assert_eq!(cmp.right().processes().len(), 4);

        assert!(cmp.remove_process(ProcessId(1)));
        assert!(!cmp.remove_process(ProcessId(1)));
        assert_eq!(cmp.left().processes().len(), 3);
        assert_eq!(cmp.right().processes().len(), 3);
    }

    #[test]
    fn test_lifecycle_and_reset() {
        let mut cmp = run(AlgorithmKey::Priority, AlgorithmKey::RoundRobin);
        assert_eq!(cmp.advance(), (None, None));

        cmp.start();
        let (l, r) = cmp.advance();
        assert!(l.is_some() && r.is_some());
        cmp.pause();
        assert_eq!(cmp.advance(), (None, None));
        cmp.resume();
        assert!(cmp.advance().0.is_some());

        cmp.reset();
        assert_eq!(cmp.left().current_time(), 0);
        assert_eq!(cmp.right().current_time(), 0);
        assert!(cmp.right().history().is_empty());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let result = ComparisonRun::new(
            workload(),
            AlgorithmKey::Fcfs,
            AlgorithmKey::RoundRobin,
            SchedulerConfig::default().with_quantum(0),
        );
        assert!(result.is_err());
    }
}
