//! Observable outcomes of a scheduler tick.

use serde::{Deserialize, Serialize};

use super::SimulationMetrics;
use crate::models::ProcessId;

/// Something that happened during a tick, in order of occurrence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SchedulerEvent {
    /// A process reached its arrival time and joined the ready queue.
    Arrived { process_id: ProcessId, time: i64 },
    /// The running process was sent back to the ready queue.
    Preempted { process_id: ProcessId, time: i64 },
    /// A process was put on the CPU.
    Dispatched {
        process_id: ProcessId,
        time: i64,
        /// Not the first dispatch of the run.
        context_switch: bool,
    },
    /// A process consumed its last unit of work.
    Completed { process_id: ProcessId, time: i64 },
    /// Every process has completed; the run stopped.
    SimulationCompleted { time: i64 },
}

/// Result of one tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickReport {
    /// Clock value at which the tick executed.
    pub time: i64,
    /// Process holding the CPU after the tick, if any.
    pub running: Option<ProcessId>,
    /// Events in order of occurrence.
    pub events: Vec<SchedulerEvent>,
    /// Metrics after the tick.
    pub metrics: SimulationMetrics,
}

impl TickReport {
    /// Ids dispatched during this tick.
    pub fn dispatched(&self) -> impl Iterator<Item = ProcessId> + '_ {
        self.events.iter().filter_map(|e| match e {
            SchedulerEvent::Dispatched { process_id, .. } => Some(*process_id),
            _ => None,
        })
    }

    /// Ids completed during this tick.
    pub fn completed(&self) -> impl Iterator<Item = ProcessId> + '_ {
        self.events.iter().filter_map(|e| match e {
            SchedulerEvent::Completed { process_id, .. } => Some(*process_id),
            _ => None,
        })
    }

    /// Whether this tick finished the simulation.
    pub fn finished_simulation(&self) -> bool {
        self.events
            .iter()
            .any(|e| matches!(e, SchedulerEvent::SimulationCompleted { .. }))
    }
}
