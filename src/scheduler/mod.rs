//! Tick-driven scheduling engine and run metrics.
//!
//! Provides the discrete-time simulation loop, its observable events,
//! the metrics aggregator, and a two-algorithm comparison harness.
//!
//! # Driving
//!
//! The engine never sleeps or reads a clock. A driver decides when the
//! next tick happens: a UI timer calls [`Scheduler::advance`], a test
//! calls [`Scheduler::tick`] or [`Scheduler::run_to_completion`].
//!
//! # Metrics
//!
//! `SimulationMetrics` reports average waiting, turnaround and response
//! times, CPU utilization, throughput and context switches.

mod comparison;
mod engine;
mod events;
mod metrics;

pub use comparison::{ComparisonRun, MetricsComparison};
pub use engine::{RunState, Scheduler};
pub use events::{SchedulerEvent, TickReport};
pub use metrics::SimulationMetrics;
