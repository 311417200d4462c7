//! Round Robin time slicing.
//!
//! # Policy
//!
//! 1. If the previously dispatched process is still eligible and has not
//!    used up its quantum, it continues.
//! 2. Otherwise rotate to the eligible process that follows it in queue
//!    order, wrapping to the head.
//! 3. With no previous process (or it has left the queue), take the head.
//!
//! Continuation is checked before rotation, so a process can resume
//! mid-slice at a tick that is not a multiple of the quantum.

use std::collections::HashMap;

use super::{eligible, Algorithm, AlgorithmKey, SchedulerConfig};
use crate::models::{Process, ProcessId};

/// Round Robin with per-process quantum accounting.
///
/// Each scheduler owns its own instance, so two simulations never share
/// slice counters.
#[derive(Debug, Clone, Default)]
pub struct RoundRobin {
    /// Units used since each process's last dispatch.
    slice_used: HashMap<ProcessId, i64>,
    /// Most recently dispatched or executed process.
    last: Option<ProcessId>,
}

impl RoundRobin {
    /// Creates a Round Robin instance with empty slice state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Units `id` has used in its current slice.
    pub fn slice_used(&self, id: ProcessId) -> i64 {
        self.slice_used.get(&id).copied().unwrap_or(0)
    }

    /// Process most recently given the CPU.
    pub fn last_dispatched(&self) -> Option<ProcessId> {
        self.last
    }
}

impl Algorithm for RoundRobin {
    fn key(&self) -> AlgorithmKey {
        AlgorithmKey::RoundRobin
    }

    fn name(&self) -> &'static str {
        "Round Robin"
    }

    fn short_name(&self) -> &'static str {
        "RR"
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
        let available: Vec<&Process> = eligible(ready, current_time).collect();
        let head = available.first()?;

        if let Some(last) = self.last {
            if let Some(idx) = available.iter().position(|p| p.id == last) {
                if self.slice_used(last) < config.quantum && available[idx].remaining_time() > 0 {
                    return Some(last);
                }
                if available.len() > 1 {
                    return Some(available[(idx + 1) % available.len()].id);
                }
            }
        }

        Some(head.id)
    }

    fn should_preempt(
        &self,
        running: &Process,
        _ready: &[&Process],
        _current_time: i64,
        config: &SchedulerConfig,
    ) -> bool {
        self.slice_used(running.id) >= config.quantum
    }

    fn on_tick(&mut self, process: &Process, _config: &SchedulerConfig) {
        *self.slice_used.entry(process.id).or_insert(0) += 1;
        self.last = Some(process.id);
    }

    fn on_context_switch(&mut self, process: &Process, _config: &SchedulerConfig) {
        self.slice_used.insert(process.id, 0);
        self.last = Some(process.id);
    }

    fn reset(&mut self) {
        self.slice_used.clear();
        self.last = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make(id: u32) -> Process {
        Process::new(ProcessId(id), 0, 5)
    }

    #[test]
    fn test_first_pick_is_head() {
        let (a, b) = (make(0), make(1));
        let rr = RoundRobin::new();
        assert_eq!(
            rr.select_next(&[&a, &b], 0, &SchedulerConfig::default()),
            Some(ProcessId(0))
        );
        assert_eq!(rr.select_next(&[], 0, &SchedulerConfig::default()), None);
    }

    #[test]
    fn test_quantum_accounting_and_preemption() {
        let a = make(0);
        let config = SchedulerConfig::default().with_quantum(2);
        let mut rr = RoundRobin::new();

        rr.on_context_switch(&a, &config);
        assert!(!rr.should_preempt(&a, &[], 0, &config));
        rr.on_tick(&a, &config);
        assert!(!rr.should_preempt(&a, &[], 1, &config));
        rr.on_tick(&a, &config);
        assert_eq!(rr.slice_used(ProcessId(0)), 2);
        assert!(rr.should_preempt(&a, &[], 2, &config));

        rr.on_context_switch(&a, &config);
        assert_eq!(rr.slice_used(ProcessId(0)), 0);
    }

    #[test]
    fn test_continues_unexhausted_process() {
        let (a, b) = (make(0), make(1));
        let config = SchedulerConfig::default().with_quantum(3);
        let mut rr = RoundRobin::new();
        rr.on_context_switch(&b, &config);
        rr.on_tick(&b, &config);

        // b used 1 of 3, still ready → continue ahead of queue head a
        assert_eq!(rr.select_next(&[&a, &b], 1, &config), Some(ProcessId(1)));
    }

    #[test]
    fn test_rotates_after_exhaustion_with_wrap() {
        let (a, b, c) = (make(0), make(1), make(2));
        let config = SchedulerConfig::default().with_quantum(1);
        let mut rr = RoundRobin::new();

        rr.on_context_switch(&b, &config);
        rr.on_tick(&b, &config);
        assert_eq!(rr.select_next(&[&a, &b, &c], 1, &config), Some(ProcessId(2)));

        rr.on_context_switch(&c, &config);
        rr.on_tick(&c, &config);
        assert_eq!(rr.select_next(&[&a, &b, &c], 2, &config), Some(ProcessId(0)));
    }

    #[test]
    fn test_exhausted_single_process_is_reselected() {
        let a = make(0);
        let config = SchedulerConfig::default().with_quantum(1);
        let mut rr = RoundRobin::new();
        rr.on_context_switch(&a, &config);
        rr.on_tick(&a, &config);
        assert_eq!(rr.select_next(&[&a], 1, &config), Some(ProcessId(0)));
    }

    #[test]
    fn test_reset_clears_state() {
        let a = make(0);
        let config = SchedulerConfig::default();
        let mut rr = RoundRobin::new();
        rr.on_context_switch(&a, &config);
        rr.on_tick(&a, &config);

        rr.reset();
        assert_eq!(rr.slice_used(ProcessId(0)), 0);
        assert_eq!(rr.last_dispatched(), None);
    }
}
