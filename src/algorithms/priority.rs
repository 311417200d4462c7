//! Preemptive priority scheduling.

use super::{eligible, highest_priority, Algorithm, AlgorithmKey, SchedulerConfig};
use crate::models::{Process, ProcessId};

/// Priority scheduling.
///
/// Picks the eligible process with the best priority. Whether a larger or
/// smaller value is better follows [`SchedulerConfig::high_priority_first`].
/// A running process yields when another eligible process strictly
/// outranks it; equal priorities never preempt.
#[derive(Debug, Clone, Copy, Default)]
pub struct Priority;

impl Algorithm for Priority {
    fn key(&self) -> AlgorithmKey {
        AlgorithmKey::Priority
    }

    fn name(&self) -> &'static str {
        "Priority Scheduling"
    }

    fn short_name(&self) -> &'static str {
        "Priority"
    }

    fn is_preemptive(&self) -> bool {
        true
    }

    fn select_next(
        &self,
        ready: &[&Process],
        current_time: i64,
        config: &SchedulerConfig,
    ) -> Option<ProcessId> {
        highest_priority(eligible(ready, current_time), config).map(|p| p.id)
    }

    fn should_preempt(
        &self,
        running: &Process,
        ready: &[&Process],
        current_time: i64,
        config: &SchedulerConfig,
    ) -> bool {
        highest_priority(
            eligible(ready, current_time).filter(|p| p.id != running.id),
            config,
        )
        .is_some_and(|p| config.outranks(p.priority, running.priority))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make(id: u32, priority: i32) -> Process {
        Process::new(ProcessId(id), 0, 5).with_priority(priority)
    }

    #[test]
    fn test_high_priority_first() {
        let (a, b, c) = (make(0, 3), make(1, 9), make(2, 1));
        let ready = vec![&a, &b, &c];
        let config = SchedulerConfig::default();
        assert_eq!(Priority.select_next(&ready, 0, &config), Some(ProcessId(1)));
    }

    #[test]
    fn test_low_priority_first() {
        let (a, b, c) = (make(0, 3), make(1, 9), make(2, 1));
        let ready = vec![&a, &b, &c];
        let config = SchedulerConfig::default().with_high_priority_first(false);
        assert_eq!(Priority.select_next(&ready, 0, &config), Some(ProcessId(2)));
    }

    #[test]
    fn test_tie_goes_to_first() {
        let (a, b) = (make(5, 4), make(2, 4));
        let ready = vec![&a, &b];
        assert_eq!(
            Priority.select_next(&ready, 0, &SchedulerConfig::default()),
            Some(ProcessId(5))
        );
    }

    #[test]
    fn test_preempt_only_when_strictly_outranked() {
        let running = make(0, 5);
        let config = SchedulerConfig::default();

        let equal = make(1, 5);
        assert!(!Priority.should_preempt(&running, &[&equal], 0, &config));

        let better = make(2, 6);
        assert!(Priority.should_preempt(&running, &[&equal, &better], 0, &config));

        let inverted = config.with_high_priority_first(false);
        assert!(!Priority.should_preempt(&running, &[&better], 0, &inverted));
        let lower = make(3, 1);
        assert!(Priority.should_preempt(&running, &[&lower], 0, &inverted));
    }
}
