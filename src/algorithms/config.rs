//! Configuration consumed by scheduling algorithms.

use serde::{Deserialize, Serialize};

/// Default Round Robin time slice.
pub const DEFAULT_QUANTUM: i64 = 3;

/// Tunables passed to every algorithm call.
///
/// Deserializes with defaults for missing fields:
/// ```
/// use cpu_sched_sim::algorithms::SchedulerConfig;
///
/// let config: SchedulerConfig = serde_json::from_str(r#"{"quantum": 2}"#).unwrap();
/// assert_eq!(config.quantum, 2);
/// assert!(config.high_priority_first);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    /// Round Robin slice length in ticks (must be ≥ 1).
    pub quantum: i64,
    /// `true`: larger priority value wins. `false`: smaller wins.
    pub high_priority_first: bool,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            quantum: DEFAULT_QUANTUM,
            high_priority_first: true,
        }
    }
}

impl SchedulerConfig {
    /// Sets the Round Robin quantum.
    pub fn with_quantum(mut self, quantum: i64) -> Self {
        self.quantum = quantum;
        self
    }

    /// Sets the priority direction.
    pub fn with_high_priority_first(mut self, high_priority_first: bool) -> Self {
        self.high_priority_first = high_priority_first;
        self
    }

    /// Whether priority `a` strictly outranks priority `b`.
    #[inline]
    pub fn outranks(&self, a: i32, b: i32) -> bool {
        if self.high_priority_first {
            a > b
        } else {
            a < b
        }
    }
}
