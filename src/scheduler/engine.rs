//! Discrete-time CPU scheduling engine.
//!
//! # Tick
//!
//! 1. Admit processes whose arrival time equals the clock.
//! 2. Sort the ready queue by arrival time (stable).
//! 3. Ask the algorithm whether the running process must yield.
//! 4. If the CPU is idle, ask the algorithm for the next process;
//!    otherwise extend the open Gantt entry.
//! 5. Execute one unit of the running process; record completion.
//! 6. Advance the clock and stop once every process has completed.
//!
//! A tick is atomic: pausing only stops further ticks. The engine never
//! looks at wall-clock time, so the same workload, algorithm and sequence
//! of calls always yield the same history and metrics.

use log::{debug, info, trace, warn};
use serde::{Deserialize, Serialize};

use super::{SchedulerEvent, SimulationMetrics, TickReport};
use crate::algorithms::{Algorithm, AlgorithmKey, SchedulerConfig};
use crate::models::{GanttEntry, Process, ProcessId, ProcessState};
use crate::validation::{validate_addition, validate_config, validate_processes, SimulationError};

/// Lifecycle of a simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunState {
    /// Not started, or fully reset.
    Idle,
    /// Advancing on every [`Scheduler::advance`] call.
    Running,
    /// Frozen; only explicit [`Scheduler::tick`] calls advance it.
    Paused,
    /// Every process has completed.
    Completed,
}

/// Single-CPU scheduling simulation.
///
/// Owns the workload, the ready queue, the running slot, the completed
/// list, the Gantt history and its own algorithm instance. Queues hold
/// process ids; the processes themselves live in one vector.
///
/// # Example
///
/// ```
/// use cpu_sched_sim::algorithms::AlgorithmKey;
/// use cpu_sched_sim::models::{Process, ProcessId};
/// use cpu_sched_sim::scheduler::Scheduler;
///
/// let mut scheduler = Scheduler::new().with_algorithm(AlgorithmKey::Fcfs);
/// scheduler
///     .configure(vec![
///         Process::new(ProcessId(0), 0, 3),
///         Process::new(ProcessId(1), 1, 2),
///     ])
///     .unwrap();
///
/// scheduler.run_to_completion(100);
/// assert_eq!(scheduler.current_time(), 5);
/// assert!((scheduler.metrics().avg_waiting_time - 1.0).abs() < 1e-10);
/// ```
#[derive(Debug)]
pub struct Scheduler {
    algorithm: Box<dyn Algorithm>,
    config: SchedulerConfig,
    processes: Vec<Process>,
    ready_queue: Vec<ProcessId>,
    current: Option<ProcessId>,
    completed: Vec<ProcessId>,
    history: Vec<GanttEntry>,
    current_time: i64,
    context_switches: usize,
    cpu_busy_time: i64,
    state: RunState,
}

impl Scheduler {
    /// Creates an idle scheduler with no processes, FCFS and default config.
    pub fn new() -> Self {
        Self {
            algorithm: AlgorithmKey::Fcfs.build(),
            config: SchedulerConfig::default(),
            processes: Vec::new(),
            ready_queue: Vec::new(),
            current: None,
            completed: Vec::new(),
            history: Vec::new(),
            current_time: 0,
            context_switches: 0,
            cpu_busy_time: 0,
            state: RunState::Idle,
        }
    }

    /// Sets the algorithm.
    pub fn with_algorithm(mut self, key: AlgorithmKey) -> Self {
        self.set_algorithm(key);
        self
    }

    // ======================== Commands ========================

    /// Replaces the workload and resets the run.
    ///
    /// The batch is validated first; on error nothing changes.
    pub fn configure(&mut self, processes: Vec<Process>) -> Result<(), SimulationError> {
        if let Err(errors) = validate_processes(&processes) {
            warn!("rejected workload: {} issue(s)", errors.len());
            return Err(errors.into());
        }
        self.processes = processes;
        self.reset();
        Ok(())
    }

    /// Selects an algorithm by its string key.
    ///
    /// Unknown keys are ignored and the current algorithm stays active.
    /// Returns whether the key was recognized.
    pub fn select_algorithm(&mut self, key: &str) -> bool {
        match key.parse::<AlgorithmKey>() {
            Ok(k) => {
                self.set_algorithm(k);
                true
            }
            Err(e) => {
                warn!("{e}; keeping {}", self.algorithm.key());
                false
            }
        }
    }

    /// Installs a fresh instance of the given algorithm.
    pub fn set_algorithm(&mut self, key: AlgorithmKey) {
        self.algorithm = key.build();
        debug!("algorithm set to {key}");
    }

    /// Replaces the algorithm configuration after validating it.
    pub fn set_config(&mut self, config: SchedulerConfig) -> Result<(), SimulationError> {
        if let Err(errors) = validate_config(&config) {
            warn!("rejected config {config:?}");
            return Err(errors.into());
        }
        self.config = config;
        Ok(())
    }

    /// Starts or continues automatic advancing.
    ///
    /// No-op while already running or once completed.
    pub fn start(&mut self) {
        match self.state {
            RunState::Idle | RunState::Paused => {
                info!(
                    "run started at t={} with {} ({} processes)",
                    self.current_time,
                    self.algorithm.short_name(),
                    self.processes.len()
                );
                self.state = RunState::Running;
            }
            RunState::Running | RunState::Completed => {}
        }
    }

    /// Freezes the clock and queues.
    pub fn pause(&mut self) {
        if self.state == RunState::Running {
            info!("run paused at t={}", self.current_time);
            self.state = RunState::Paused;
        }
    }

    /// Continues a paused run.
    pub fn resume(&mut self) {
        if self.state == RunState::Paused {
            info!("run resumed at t={}", self.current_time);
            self.state = RunState::Running;
        }
    }

    /// Returns to `Idle`: every process reset, queues, history and
    /// counters cleared, algorithm state cleared.
    pub fn reset(&mut self) {
        for p in &mut self.processes {
            p.reset();
        }
        self.ready_queue.clear();
        self.current = None;
        self.completed.clear();
        self.history.clear();
        self.current_time = 0;
        self.context_switches = 0;
        self.cpu_busy_time = 0;
        self.algorithm.reset();
        self.state = RunState::Idle;
        info!("run reset");
    }

    /// Adds a process to the workload.
    ///
    /// Its runtime state is cleared. A process whose arrival time has
    /// already been reached joins the ready queue immediately.
    pub fn add_process(&mut self, mut process: Process) -> Result<(), SimulationError> {
        if let Err(errors) = validate_addition(&self.processes, &process) {
            warn!("rejected process {}", process.id);
            return Err(errors.into());
        }
        process.reset();
        let id = process.id;
        let arrived = process.arrival_time <= self.current_time;
        if arrived {
            process.admit();
        }
        self.processes.push(process);
        if arrived {
            self.ready_queue.push(id);
            self.sort_ready_queue();
        }
        if self.state == RunState::Completed {
            self.state = RunState::Paused;
        }
        debug!("process {id} added at t={}", self.current_time);
        Ok(())
    }

    /// Drops a process from the workload and every queue it occupies.
    ///
    /// If it was running, the CPU goes idle without a preemption mark.
    /// Returns `false` for an unknown id.
    pub fn remove_process(&mut self, id: ProcessId) -> bool {
        let Some(idx) = self.index_of(id) else {
            return false;
        };
        self.processes.remove(idx);
        self.ready_queue.retain(|&r| r != id);
        self.completed.retain(|&c| c != id);
        if self.current == Some(id) {
            self.current = None;
        }
        debug!("process {id} removed at t={}", self.current_time);
        true
    }

    /// Advances one tick if the run is `Running`.
    ///
    /// This is what a paced driver loop calls.
    pub fn advance(&mut self) -> Option<TickReport> {
        if self.state == RunState::Running {
            Some(self.tick())
        } else {
            None
        }
    }

    /// Ticks until completion or until `max_ticks` ticks have executed.
    ///
    /// Returns the number of ticks executed.
    pub fn run_to_completion(&mut self, max_ticks: usize) -> usize {
        let mut executed = 0;
        while self.state != RunState::Completed && executed < max_ticks {
            self.tick();
            executed += 1;
        }
        executed
    }

    /// Executes exactly one tick regardless of pacing.
    ///
    /// Stepping an `Idle` run moves it to `Paused`. Once `Completed`,
    /// returns an empty report and changes nothing.
    pub fn tick(&mut self) -> TickReport {
        if self.state == RunState::Completed {
            return self.report(self.current_time, Vec::new());
        }
        if self.state == RunState::Idle {
            self.state = RunState::Paused;
        }

        let now = self.current_time;
        let mut events = Vec::new();

        self.admit_arrivals(now, &mut events);
        self.sort_ready_queue();
        self.check_preemption(now, &mut events);

        match self.current {
            None => {
                let selected = {
                    let ready = self.ready_refs();
                    self.algorithm.select_next(&ready, now, &self.config)
                };
                if let Some(id) = selected {
                    self.dispatch(id, now, &mut events);
                }
            }
            Some(id) => self.extend_history(id, now),
        }

        self.execute(now, &mut events);

        self.current_time += 1;

        if self.completed.len() == self.processes.len() {
            self.state = RunState::Completed;
            events.push(SchedulerEvent::SimulationCompleted {
                time: self.current_time,
            });
            info!(
                "simulation completed at t={} ({} context switches)",
                self.current_time, self.context_switches
            );
        }

        self.report(now, events)
    }

    // ======================== Observers ========================

    /// Current run state.
    pub fn state(&self) -> RunState {
        self.state
    }

    /// Next tick to execute (equals elapsed ticks).
    pub fn current_time(&self) -> i64 {
        self.current_time
    }

    /// Active algorithm.
    pub fn algorithm(&self) -> &dyn Algorithm {
        self.algorithm.as_ref()
    }

    /// Key of the active algorithm.
    pub fn algorithm_key(&self) -> AlgorithmKey {
        self.algorithm.key()
    }

    /// Active configuration.
    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// The whole workload.
    pub fn processes(&self) -> &[Process] {
        &self.processes
    }

    /// Looks up a process by id.
    pub fn process(&self, id: ProcessId) -> Option<&Process> {
        find(&self.processes, id)
    }

    /// Process on the CPU, if any.
    pub fn current_process(&self) -> Option<&Process> {
        self.current.and_then(|id| self.process(id))
    }

    /// Ready queue in its current order.
    pub fn ready_queue(&self) -> Vec<&Process> {
        self.ready_refs()
    }

    /// Completed processes in completion order.
    pub fn completed_processes(&self) -> Vec<&Process> {
        self.completed
            .iter()
            .filter_map(|&id| self.process(id))
            .collect()
    }

    /// Processes that have not arrived yet.
    pub fn waiting_processes(&self) -> Vec<&Process> {
        self.processes
            .iter()
            .filter(|p| p.state() == ProcessState::Waiting)
            .collect()
    }

    /// Gantt history in time order.
    pub fn history(&self) -> &[GanttEntry] {
        &self.history
    }

    /// Dispatches after the first.
    pub fn context_switches(&self) -> usize {
        self.context_switches
    }

    /// Ticks in which a process executed.
    pub fn cpu_busy_time(&self) -> i64 {
        self.cpu_busy_time
    }

    /// Metrics over the completed set and elapsed time.
    pub fn metrics(&self) -> SimulationMetrics {
        SimulationMetrics::calculate(
            &self.completed_processes(),
            self.processes.len(),
            self.cpu_busy_time,
            self.current_time,
            self.context_switches,
        )
    }

    /// Whether every process has completed.
    pub fn is_complete(&self) -> bool {
        self.state == RunState::Completed
    }

    // ======================== Tick steps ========================

    fn admit_arrivals(&mut self, now: i64, events: &mut Vec<SchedulerEvent>) {
        for p in &mut self.processes {
            if p.arrival_time == now && p.state() == ProcessState::Waiting {
                p.admit();
                self.ready_queue.push(p.id);
                trace!("t={now}: {} arrived", p.name);
                events.push(SchedulerEvent::Arrived {
                    process_id: p.id,
                    time: now,
                });
            }
        }
    }

    fn check_preemption(&mut self, now: i64, events: &mut Vec<SchedulerEvent>) {
        let Some(running_id) = self.current else {
            return;
        };
        let preempt = match self.process(running_id) {
            Some(running) => {
                let ready = self.ready_refs();
                self.algorithm
                    .should_preempt(running, &ready, now, &self.config)
            }
            None => false,
        };
        if !preempt {
            return;
        }

        if let Some(idx) = self.index_of(running_id) {
            self.processes[idx].make_ready();
        }
        self.ready_queue.push(running_id);
        if let Some(last) = self.history.last_mut() {
            last.preempted = true;
        }
        self.current = None;
        debug!("t={now}: {running_id} preempted by {}", self.algorithm.short_name());
        events.push(SchedulerEvent::Preempted {
            process_id: running_id,
            time: now,
        });
    }

    fn dispatch(&mut self, id: ProcessId, now: i64, events: &mut Vec<SchedulerEvent>) {
        let Some(pos) = self.ready_queue.iter().position(|&r| r == id) else {
            warn!("t={now}: algorithm picked {id}, which is not ready");
            return;
        };
        let Some(idx) = self.index_of(id) else {
            return;
        };
        self.ready_queue.remove(pos);

        let context_switch = !self.history.is_empty();
        if context_switch {
            self.context_switches += 1;
        }

        let process = &mut self.processes[idx];
        if process.dispatch(now) {
            debug!(
                "t={now}: {} first dispatch, response time {}",
                process.name,
                now - process.arrival_time
            );
        }
        self.algorithm.on_context_switch(process, &self.config);
        self.history
            .push(GanttEntry::new(id, process.name.clone(), now, context_switch));
        self.current = Some(id);

        debug!("t={now}: dispatched {}", process.name);
        events.push(SchedulerEvent::Dispatched {
            process_id: id,
            time: now,
            context_switch,
        });
    }

    fn extend_history(&mut self, id: ProcessId, now: i64) {
        let continues = self.history.last().is_some_and(|e| e.process_id == id);
        if continues {
            if let Some(last) = self.history.last_mut() {
                last.extend_to(now);
            }
            return;
        }

        let name = self
            .process(id)
            .map(|p| p.name.clone())
            .unwrap_or_default();
        self.history.push(GanttEntry::new(id, name, now, true));
        self.context_switches += 1;
    }

    fn execute(&mut self, now: i64, events: &mut Vec<SchedulerEvent>) {
        let Some(id) = self.current else {
            return;
        };
        let Some(idx) = self.index_of(id) else {
            self.current = None;
            return;
        };

        let process = &mut self.processes[idx];
        let done = process.execute_unit(now);
        self.cpu_busy_time += 1;
        self.algorithm.on_tick(process, &self.config);

        if done {
            debug!("t={now}: {} completed at {}", process.name, now + 1);
            self.completed.push(id);
            self.current = None;
            events.push(SchedulerEvent::Completed {
                process_id: id,
                time: now + 1,
            });
        }
    }

    // ======================== Helpers ========================

    fn index_of(&self, id: ProcessId) -> Option<usize> {
        self.processes.iter().position(|p| p.id == id)
    }

    fn ready_refs(&self) -> Vec<&Process> {
        self.ready_queue
            .iter()
            .filter_map(|&id| find(&self.processes, id))
            .collect()
    }

    fn sort_ready_queue(&mut self) {
        let processes = &self.processes;
        self.ready_queue.sort_by_key(|&id| {
            find(processes, id)
                .map(|p| p.arrival_time)
                .unwrap_or(i64::MAX)
        });
    }

    fn report(&self, time: i64, events: Vec<SchedulerEvent>) -> TickReport {
        TickReport {
            time,
            running: self.current,
            events,
            metrics: self.metrics(),
        }
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}

fn find(processes: &[Process], id: ProcessId) -> Option<&Process> {
    processes.iter().find(|p| p.id == id)
}
