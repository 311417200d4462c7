//! Randomized workload factories.
//!
//! Produces synthetic process batches for demonstrations and stress runs.
//! Each generator owns its own [`IdGenerator`], so ids restart at 0 per
//! generator and never leak between batches.

use rand::Rng;

use super::{IdGenerator, Process};

/// Builds random process batches from an owned RNG.
///
/// # Example
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::SmallRng;
/// use cpu_sched_sim::models::WorkloadGenerator;
///
/// let mut generator = WorkloadGenerator::new(SmallRng::seed_from_u64(7));
/// let batch = generator.sample(5);
/// assert_eq!(batch.len(), 5);
/// ```
#[derive(Debug, Clone)]
pub struct WorkloadGenerator<R: Rng> {
    ids: IdGenerator,
    rng: R,
}

impl<R: Rng> WorkloadGenerator<R> {
    /// Creates a generator with a fresh id counter.
    pub fn new(rng: R) -> Self {
        Self {
            ids: IdGenerator::new(),
            rng,
        }
    }

    /// Small demonstration batch, sorted by arrival.
    ///
    /// Arrival in `[0, 5)`, burst in `[2, 10)`, priority in `[1, 10]`.
    pub fn sample(&mut self, count: usize) -> Vec<Process> {
        self.batch(count, 5, 2..10)
    }

    /// Large batch of short jobs, sorted by arrival.
    ///
    /// Arrival in `[0, 20)`, burst in `[1, 6)`, priority in `[1, 10]`.
    pub fn stress(&mut self, count: usize) -> Vec<Process> {
        self.batch(count, 20, 1..6)
    }

    /// One process arriving within three ticks of `min_arrival`.
    pub fn random_process(&mut self, min_arrival: i64) -> Process {
        let arrival = min_arrival + self.rng.random_range(0..3);
        let burst = self.rng.random_range(2..10);
        let priority = self.rng.random_range(1..=10);
        Process::new(self.ids.next_id(), arrival, burst).with_priority(priority)
    }

    /// Restarts id numbering at 0 for subsequent [`random_process`] calls.
    ///
    /// [`random_process`]: Self::random_process
    pub fn reset_ids(&mut self) {
        self.ids.reset();
    }

    fn batch(
        &mut self,
        count: usize,
        arrival_span: i64,
        burst: std::ops::Range<i64>,
    ) -> Vec<Process> {
        self.ids.reset();
        let mut processes: Vec<Process> = (0..count)
            .map(|_| {
                let arrival = self.rng.random_range(0..arrival_span);
                let burst_time = self.rng.random_range(burst.clone());
                let priority = self.rng.random_range(1..=10);
                Process::new(self.ids.next_id(), arrival, burst_time).with_priority(priority)
            })
            .collect();

        processes.sort_by_key(|p| p.arrival_time);
        processes
    }
}
