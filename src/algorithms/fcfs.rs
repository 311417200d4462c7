//! First Come First Serve.

use super::{eligible, Algorithm, AlgorithmKey, SchedulerConfig};
use crate::models::{Process, ProcessId};

/// First Come First Serve.
///
/// Runs processes in arrival order to completion. The ready queue is
/// already arrival-sorted, so the first eligible entry is chosen.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fcfs;

impl Algorithm for Fcfs {
    fn key(&self) -> AlgorithmKey {
        AlgorithmKey::Fcfs
    }

    fn name(&self) -> &'static str {
        "First Come First Serve"
    }

    fn short_name(&self) -> &'static str {
        "FCFS"
    }

    fn is_preemptive(&self) -> bool {
        false
    }

    fn select_next(
        &self,
        ready: &[&Process],
        current_time: i64,
        _config: &SchedulerConfig,
    ) -> Option<ProcessId> {
        eligible(ready, current_time).next().map(|p| p.id)
    }

    fn should_preempt(
        &self,
        _running: &Process,
        _ready: &[&Process],
        _current_time: i64,
        _config: &SchedulerConfig,
    ) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selects_queue_head() {
        let a = Process::new(ProcessId(0), 0, 9);
        let b = Process::new(ProcessId(1), 1, 1);
        let ready = vec![&a, &b];
        let config = SchedulerConfig::default();

        assert_eq!(Fcfs.select_next(&ready, 1, &config), Some(ProcessId(0)));
    }

    #[test]
    fn test_skips_unarrived() {
        let a = Process::new(ProcessId(0), 4, 2);
        let ready = vec![&a];
        let config = SchedulerConfig::default();

        assert_eq!(Fcfs.select_next(&ready, 3, &config), None);
        assert_eq!(Fcfs.select_next(&[], 3, &config), None);
    }

    #[test]
    fn test_never_preempts() {
        let running = Process::new(ProcessId(0), 0, 10);
        let short = Process::new(ProcessId(1), 0, 1);
        let ready = vec![&short];
        assert!(!Fcfs.should_preempt(&running, &ready, 0, &SchedulerConfig::default()));
    }
}
