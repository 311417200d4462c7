//! Simulation performance metrics.
//!
//! Recomputed from the completed set and the clock after every tick.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Avg Waiting | Mean of (turnaround - burst) over completed processes |
//! | Avg Turnaround | Mean of (completion - arrival) |
//! | Avg Response | Mean of (first dispatch - arrival) |
//! | CPU Utilization | busy ticks / elapsed ticks × 100 |
//! | Throughput | completed / elapsed ticks |
//!
//! Every ratio is 0 when its denominator is 0.

use serde::{Deserialize, Serialize};

use crate::models::Process;

/// Aggregate metrics for one simulation run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulationMetrics {
    /// Mean waiting time over completed processes (ticks).
    pub avg_waiting_time: f64,
    /// Mean turnaround time over completed processes (ticks).
    pub avg_turnaround_time: f64,
    /// Mean response time over completed processes (ticks).
    pub avg_response_time: f64,
    /// Busy share of elapsed time, in percent (0.0..=100.0).
    pub cpu_utilization: f64,
    /// Completions per elapsed tick.
    pub throughput: f64,
    /// Dispatches after the first.
    pub context_switches: usize,
    /// Processes finished so far.
    pub completed_count: usize,
    /// Processes in the workload.
    pub total_count: usize,
}

impl SimulationMetrics {
    /// Computes metrics from the completed set and run counters.
    ///
    /// # Arguments
    /// * `completed` - Completed processes, in completion order.
    /// * `total_count` - Size of the configured workload.
    /// * `cpu_busy_time` - Ticks in which a process executed.
    /// * `current_time` - Elapsed ticks.
    /// * `context_switches` - Dispatches after the first.
    pub fn calculate(
        completed: &[&Process],
        total_count: usize,
        cpu_busy_time: i64,
        current_time: i64,
        context_switches: usize,
    ) -> Self {
        let avg_waiting_time = mean(completed.iter().filter_map(|p| p.waiting_time()));
        let avg_turnaround_time = mean(completed.iter().filter_map(|p| p.turnaround_time()));
        let avg_response_time = mean(completed.iter().filter_map(|p| p.response_time()));

        let (cpu_utilization, throughput) = if current_time > 0 {
            (
                cpu_busy_time as f64 / current_time as f64 * 100.0,
                completed.len() as f64 / current_time as f64,
            )
        } else {
            (0.0, 0.0)
        };

        Self {
            avg_waiting_time,
            avg_turnaround_time,
            avg_response_time,
            cpu_utilization,
            throughput,
            context_switches,
            completed_count: completed.len(),
            total_count,
        }
    }

    /// Whether every process in the workload has finished.
    pub fn is_complete(&self) -> bool {
        self.completed_count == self.total_count
    }
}

fn mean(values: impl Iterator<Item = i64>) -> f64 {
    let (sum, count) = values.fold((0i64, 0usize), |(s, c), v| (s + v, c + 1));
    if count == 0 {
        0.0
    } else {
        sum as f64 / count as f64
    }
}
