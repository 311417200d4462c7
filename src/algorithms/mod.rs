//! CPU scheduling algorithms and their registry.
//!
//! Each algorithm decides which ready process gets the CPU next and
//! whether the running process must yield. Algorithms are selected
//! through [`AlgorithmKey`], whose string forms are stable identifiers
//! a driver can pass around.
//!
//! # Usage
//!
//! ```
//! use cpu_sched_sim::algorithms::{AlgorithmKey, SchedulerConfig};
//! use cpu_sched_sim::models::{Process, ProcessId};
//!
//! let algorithm = AlgorithmKey::Sjf.build();
//! let a = Process::new(ProcessId(0), 0, 5);
//! let b = Process::new(ProcessId(1), 0, 2);
//! let ready = vec![&a, &b];
//!
//! let next = algorithm.select_next(&ready, 0, &SchedulerConfig::default());
//! assert_eq!(next, Some(ProcessId(1)));
//! ```
//!
//! # Variants
//!
//! | Key | Selection | Preemption |
//! |-----|-----------|------------|
//! | `fcfs` | Queue head | Never |
//! | `sjf` | Least remaining time | Never |
//! | `sjf-preemptive` | Least remaining time | Strictly shorter job ready |
//! | `priority` | Best priority | Strictly better priority ready |
//! | `rr` | Continue, else rotate | Quantum exhausted |

mod config;
mod fcfs;
mod priority;
mod round_robin;
mod sjf;

pub use config::{SchedulerConfig, DEFAULT_QUANTUM};
pub use fcfs::Fcfs;
pub use priority::Priority;
pub use round_robin::RoundRobin;
pub use sjf::{Sjf, SjfPreemptive};

use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug};
use std::str::FromStr;

use crate::models::{Process, ProcessId};

/// A CPU scheduling policy.
///
/// `ready` is the scheduler's ready queue in its current order. Algorithms
/// only consider processes whose arrival time is ≤ `current_time`.
///
/// The hooks default to no-ops; stateful policies override them.
pub trait Algorithm: Send + Debug {
    /// Stable registry key.
    fn key(&self) -> AlgorithmKey;

    /// Full name (e.g., "First Come First Serve").
    fn name(&self) -> &'static str;

    /// Abbreviation (e.g., "FCFS").
    fn short_name(&self) -> &'static str;

    /// Whether the policy ever preempts a running process.
    fn is_preemptive(&self) -> bool;

    /// Picks the next process to run, or `None` to leave the CPU idle.
    fn select_next(
        &self,
        ready: &[&Process],
        current_time: i64,
        config: &SchedulerConfig,
    ) -> Option<ProcessId>;

    /// Whether `running` must yield before this tick executes.
    fn should_preempt(
        &self,
        running: &Process,
        ready: &[&Process],
        current_time: i64,
        config: &SchedulerConfig,
    ) -> bool;

    /// Called once per executed unit of `process`.
    fn on_tick(&mut self, _process: &Process, _config: &SchedulerConfig) {}

    /// Called when `process` is dispatched onto the CPU.
    fn on_context_switch(&mut self, _process: &Process, _config: &SchedulerConfig) {}

    /// Clears internal state.
    fn reset(&mut self) {}
}

/// Stable identifiers for the built-in algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AlgorithmKey {
    #[serde(rename = "fcfs")]
    Fcfs,
    #[serde(rename = "sjf")]
    Sjf,
    #[serde(rename = "sjf-preemptive")]
    SjfPreemptive,
    #[serde(rename = "priority")]
    Priority,
    #[serde(rename = "rr")]
    RoundRobin,
}

impl AlgorithmKey {
    /// All keys in registry order.
    pub const ALL: [AlgorithmKey; 5] = [
        AlgorithmKey::Fcfs,
        AlgorithmKey::Sjf,
        AlgorithmKey::SjfPreemptive,
        AlgorithmKey::Priority,
        AlgorithmKey::RoundRobin,
    ];

    /// The identifier string.
    pub fn as_str(self) -> &'static str {
        match self {
            AlgorithmKey::Fcfs => "fcfs",
            AlgorithmKey::Sjf => "sjf",
            AlgorithmKey::SjfPreemptive => "sjf-preemptive",
            AlgorithmKey::Priority => "priority",
            AlgorithmKey::RoundRobin => "rr",
        }
    }

    /// Creates a fresh, independently owned algorithm instance.
    pub fn build(self) -> Box<dyn Algorithm> {
        match self {
            AlgorithmKey::Fcfs => Box::new(Fcfs),
            AlgorithmKey::Sjf => Box::new(Sjf),
            AlgorithmKey::SjfPreemptive => Box::new(SjfPreemptive),
            AlgorithmKey::Priority => Box::new(Priority),
            AlgorithmKey::RoundRobin => Box::new(RoundRobin::new()),
        }
    }
}

impl fmt::Display for AlgorithmKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for an identifier that names no algorithm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAlgorithm(pub String);

impl fmt::Display for UnknownAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown algorithm key: {}", self.0)
    }
}

impl std::error::Error for UnknownAlgorithm {}

impl FromStr for AlgorithmKey {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AlgorithmKey::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| UnknownAlgorithm(s.to_string()))
    }
}

/// Processes in `ready` that have arrived by `current_time`, in queue order.
pub(crate) fn eligible<'a>(
    ready: &'a [&'a Process],
    current_time: i64,
) -> impl Iterator<Item = &'a Process> + 'a {
    ready
        .iter()
        .copied()
        .filter(move |p| p.has_arrived(current_time))
}

/// Least remaining time; the first encountered wins ties.
pub(crate) fn shortest<'a>(candidates: impl Iterator<Item = &'a Process>) -> Option<&'a Process> {
    candidates.fold(None, |best: Option<&'a Process>, p| match best {
        Some(b) if p.remaining_time() >= b.remaining_time() => Some(b),
        _ => Some(p),
    })
}

/// Best priority under `config`; the first encountered wins ties.
pub(crate) fn highest_priority<'a>(
    candidates: impl Iterator<Item = &'a Process>,
    config: &SchedulerConfig,
) -> Option<&'a Process> {
    candidates.fold(None, |best: Option<&'a Process>, p| match best {
        Some(b) if !config.outranks(p.priority, b.priority) => Some(b),
        _ => Some(p),
    })
}
