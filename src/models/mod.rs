//! Simulation domain models.
//!
//! Provides the data types shared by the algorithms and the tick engine:
//! processes, their identifiers, Gantt history entries, and randomized
//! workload factories.
//!
//! # Lifecycle
//!
//! | State | Meaning |
//! |-------|---------|
//! | `Waiting` | Arrival time not yet reached |
//! | `Ready` | In the ready queue |
//! | `Running` | Occupying the CPU |
//! | `Completed` | Burst fully consumed (terminal) |

mod gantt;
mod process;
mod workload;

pub use gantt::GanttEntry;
pub use process::{IdGenerator, Process, ProcessId, ProcessState, PALETTE};
pub use workload::WorkloadGenerator;
