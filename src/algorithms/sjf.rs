//! Shortest Job First, non-preemptive and preemptive (SRTF).
//!
//! Both variants pick the eligible process with the least remaining time.
//! Ties go to the process encountered first in queue order, which is
//! arrival order.

use super::{eligible, shortest, Algorithm, AlgorithmKey, SchedulerConfig};
use crate::models::{Process, ProcessId};

/// Shortest Job First (non-preemptive).
#[derive(Debug, Clone, Copy, Default)]
pub struct Sjf;

impl Algorithm for Sjf {
    fn key(&self) -> AlgorithmKey {
        AlgorithmKey::Sjf
    }

    fn name(&self) -> &'static str {
        "Shortest Job First"
    }

    fn short_name(&self) -> &'static str {
        "SJF"
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
        shortest(eligible(ready, current_time)).map(|p| p.id)
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

/// Shortest Remaining Time First.
///
/// Re-evaluated every tick: the running process yields as soon as another
/// eligible process has strictly less remaining time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SjfPreemptive;

impl Algorithm for SjfPreemptive {
    fn key(&self) -> AlgorithmKey {
        AlgorithmKey::SjfPreemptive
    }

    fn name(&self) -> &'static str {
        "Shortest Job First (Preemptive)"
    }

    fn short_name(&self) -> &'static str {
        "SJF-P"
    }

    fn is_preemptive(&self) -> bool {
        true
    }

    fn select_next(
        &self,
        ready: &[&Process],
        current_time: i64,
        _config: &SchedulerConfig,
    ) -> Option<ProcessId> {
        shortest(eligible(ready, current_time)).map(|p| p.id)
    }

    fn should_preempt(
        &self,
        running: &Process,
        ready: &[&Process],
        current_time: i64,
        _config: &SchedulerConfig,
    ) -> bool {
        shortest(eligible(ready, current_time).filter(|p| p.id != running.id))
            .is_some_and(|p| p.remaining_time() < running.remaining_time())
    }
}
