//! Discrete-time CPU scheduling simulator.
//!
//! Simulates a single CPU running synthetic processes (arrival, burst,
//! priority) one tick at a time under a pluggable scheduling policy, and
//! records a Gantt history plus aggregate performance metrics. Built as
//! the engine behind teaching and visualization front-ends; rendering,
//! animation and wall-clock pacing belong to the caller.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Process`, `ProcessState`, `ProcessId`,
//!   `GanttEntry`, `WorkloadGenerator`
//! - **`algorithms`**: The `Algorithm` trait, the `AlgorithmKey` registry
//!   and the FCFS, SJF, SRTF, Priority and Round Robin policies
//! - **`scheduler`**: The tick engine, its events, run metrics and the
//!   two-algorithm `ComparisonRun`
//! - **`validation`**: Workload and configuration checks
//!
//! # Example
//!
//! ```
//! use cpu_sched_sim::algorithms::{AlgorithmKey, SchedulerConfig};
//! use cpu_sched_sim::models::{Process, ProcessId};
//! use cpu_sched_sim::scheduler::Scheduler;
//!
//! let mut scheduler = Scheduler::new().with_algorithm(AlgorithmKey::RoundRobin);
//! scheduler.set_config(SchedulerConfig::default().with_quantum(2)).unwrap();
//! scheduler
//!     .configure(vec![
//!         Process::new(ProcessId(0), 0, 5),
//!         Process::new(ProcessId(1), 0, 5),
//!     ])
//!     .unwrap();
//!
//! scheduler.start();
//! while let Some(report) = scheduler.advance() {
//!     if report.finished_simulation() {
//!         break;
//!     }
//! }
//! assert_eq!(scheduler.completed_processes().len(), 2);
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Arpaci-Dusseau (2018), "Operating Systems: Three Easy Pieces", Ch. 7-9

pub mod algorithms;
pub mod models;
pub mod scheduler;
pub mod validation;
