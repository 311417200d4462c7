//! Process model.
//!
//! A process is one simulated CPU-bound workload unit: static parameters
//! (arrival, burst, priority) plus the runtime state the scheduler mutates
//! as the simulation advances.
//!
//! # Time Representation
//! All times are integer ticks relative to the simulation epoch (t=0).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Display palette, indexed by `id % len`.
pub const PALETTE: [&str; 8] = [
    "#00f0ff", // cyan
    "#a855f7", // purple
    "#22c55e", // green
    "#f97316", // orange
    "#ec4899", // pink
    "#3b82f6", // blue
    "#eab308", // yellow
    "#ef4444", // red
];

/// Opaque process identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProcessId(pub u32);

impl fmt::Display for ProcessId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Hands out monotonic process ids for one batch of processes.
///
/// Owned by whoever builds the batch, so separate workloads (and
/// separate tests) never share a counter.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    next: u32,
}

impl IdGenerator {
    /// Creates a generator starting at id 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the next id.
    pub fn next_id(&mut self) -> ProcessId {
        let id = ProcessId(self.next);
        self.next += 1;
        id
    }

    /// Restarts numbering at 0.
    pub fn reset(&mut self) {
        self.next = 0;
    }
}

/// Lifecycle state of a process.
///
/// `Waiting → Ready → Running ⇄ Ready → Completed`. `Completed` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProcessState {
    /// Not yet arrived.
    Waiting,
    /// Arrived and waiting for the CPU.
    Ready,
    /// Occupying the CPU.
    Running,
    /// All burst time consumed.
    Completed,
}

/// A simulated process.
///
/// Static parameters are public fields. Runtime state is read through
/// accessors and mutated only by the scheduler, [`reset`](Self::reset)
/// and [`fresh_clone`](Self::fresh_clone).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Process {
    /// Unique identifier.
    pub id: ProcessId,
    /// Human-readable name (defaults to `P{id}`).
    pub name: String,
    /// Display color (defaults to a palette entry derived from the id).
    pub color: String,
    /// Tick at which the process becomes ready.
    pub arrival_time: i64,
    /// Total CPU ticks required.
    pub burst_time: i64,
    /// Scheduling priority. Direction is chosen by `SchedulerConfig`.
    pub priority: i32,

    remaining_time: i64,
    state: ProcessState,
    start_time: Option<i64>,
    completion_time: Option<i64>,
    response_time: Option<i64>,
}

impl Process {
    /// Creates a process with default name, color and priority 0.
    pub fn new(id: ProcessId, arrival_time: i64, burst_time: i64) -> Self {
        Self {
            id,
            name: format!("P{id}"),
            color: PALETTE[id.0 as usize % PALETTE.len()].to_string(),
            arrival_time,
            burst_time,
            priority: 0,
            remaining_time: burst_time,
            state: ProcessState::Waiting,
            start_time: None,
            completion_time: None,
            response_time: None,
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the display color.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Sets the scheduling priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// CPU ticks still needed.
    #[inline]
    pub fn remaining_time(&self) -> i64 {
        self.remaining_time
    }

    /// Current lifecycle state.
    #[inline]
    pub fn state(&self) -> ProcessState {
        self.state
    }

    /// Tick of first dispatch.
    pub fn start_time(&self) -> Option<i64> {
        self.start_time
    }

    /// Tick at which the last unit of work finished.
    pub fn completion_time(&self) -> Option<i64> {
        self.completion_time
    }

    /// First dispatch minus arrival.
    pub fn response_time(&self) -> Option<i64> {
        self.response_time
    }

    /// Completion minus arrival. `None` until completed.
    pub fn turnaround_time(&self) -> Option<i64> {
        self.completion_time.map(|c| c - self.arrival_time)
    }

    /// Turnaround minus burst. `None` until completed.
    pub fn waiting_time(&self) -> Option<i64> {
        self.turnaround_time().map(|t| t - self.burst_time)
    }

    /// Whether the process has finished.
    #[inline]
    pub fn is_completed(&self) -> bool {
        self.state == ProcessState::Completed
    }

    /// Whether the process may be picked at `time`.
    #[inline]
    pub fn has_arrived(&self, time: i64) -> bool {
        self.arrival_time <= time
    }

    /// Restores all runtime state, keeping identity and static parameters.
    pub fn reset(&mut self) {
        self.remaining_time = self.burst_time;
        self.state = ProcessState::Waiting;
        self.start_time = None;
        self.completion_time = None;
        self.response_time = None;
    }

    /// Independent copy with the same identity and static parameters
    /// but initial runtime state.
    pub fn fresh_clone(&self) -> Self {
        Self::new(self.id, self.arrival_time, self.burst_time)
            .with_name(self.name.clone())
            .with_color(self.color.clone())
            .with_priority(self.priority)
    }

    pub(crate) fn admit(&mut self) {
        if self.state == ProcessState::Waiting {
            self.state = ProcessState::Ready;
        }
    }

    pub(crate) fn make_ready(&mut self) {
        if self.state == ProcessState::Running {
            self.state = ProcessState::Ready;
        }
    }

    /// Marks the process running. Returns `true` on its first dispatch.
    pub(crate) fn dispatch(&mut self, time: i64) -> bool {
        self.state = ProcessState::Running;
        if self.response_time.is_none() {
            self.start_time = Some(time);
            self.response_time = Some(time - self.arrival_time);
            true
        } else {
            false
        }
    }

    /// Consumes one unit of work. Returns `true` if the process completed.
    pub(crate) fn execute_unit(&mut self, time: i64) -> bool {
        if self.remaining_time > 0 {
            self.remaining_time -= 1;
        }
        if self.remaining_time == 0 {
            self.state = ProcessState::Completed;
            self.completion_time = Some(time + 1);
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_builder() {
        let p = Process::new(ProcessId(3), 2, 5)
            .with_name("Editor")
            .with_priority(7)
            .with_color("#123456");

        assert_eq!(p.id, ProcessId(3));
        assert_eq!(p.name, "Editor");
        assert_eq!(p.color, "#123456");
        assert_eq!(p.arrival_time, 2);
        assert_eq!(p.burst_time, 5);
        assert_eq!(p.priority, 7);
        assert_eq!(p.remaining_time(), 5);
        assert_eq!(p.state(), ProcessState::Waiting);
    }

    #[test]
    fn test_default_name_and_color() {
        let p = Process::new(ProcessId(9), 0, 1);
        assert_eq!(p.name, "P9");
        assert_eq!(p.color, PALETTE[1]);
    }

    #[test]
    fn test_id_generator() {
        let mut ids = IdGenerator::new();
        assert_eq!(ids.next_id(), ProcessId(0));
        assert_eq!(ids.next_id(), ProcessId(1));
        ids.reset();
        assert_eq!(ids.next_id(), ProcessId(0));
    }

    #[test]
    fn test_lifecycle_and_derived_times() {
        let mut p = Process::new(ProcessId(0), 1, 2);
        assert!(p.turnaround_time().is_none());
        assert!(p.waiting_time().is_none());

        p.admit();
        assert_eq!(p.state(), ProcessState::Ready);
        assert!(p.dispatch(3));
        assert_eq!(p.response_time(), Some(2));
        assert!(!p.execute_unit(3));
        p.make_ready();
        assert_eq!(p.state(), ProcessState::Ready);

        // Second dispatch keeps the original response time
        assert!(!p.dispatch(5));
        assert_eq!(p.response_time(), Some(2));
        assert_eq!(p.start_time(), Some(3));
        assert!(p.execute_unit(5));

        assert!(p.is_completed());
        assert_eq!(p.completion_time(), Some(6));
        assert_eq!(p.turnaround_time(), Some(5));
        assert_eq!(p.waiting_time(), Some(3));
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut p = Process::new(ProcessId(0), 0, 3).with_priority(4);
        p.admit();
        p.dispatch(0);
        p.execute_unit(0);

        p.reset();
        let once = p.clone();
        p.reset();
        assert_eq!(p, once);
        assert_eq!(p.remaining_time(), 3);
        assert_eq!(p.state(), ProcessState::Waiting);
        assert_eq!(p.priority, 4);
    }

    #[test]
    fn test_fresh_clone_is_independent() {
        let mut original = Process::new(ProcessId(1), 0, 4).with_priority(2);
        original.admit();
        original.dispatch(0);
        original.execute_unit(0);

        let mut copy = original.fresh_clone();
        assert_eq!(copy.id, original.id);
        assert_eq!(copy.color, original.color);
        assert_eq!(copy.remaining_time(), 4);
        assert_eq!(copy.state(), ProcessState::Waiting);

        copy.reset();
        copy.admit();
        assert_eq!(original.remaining_time(), 3);
        assert_eq!(original.state(), ProcessState::Running);
    }
}
