//! Execution history (Gantt chart) model.
//!
//! Each entry is a contiguous interval during which one process occupied
//! the CPU. Entries are appended by the scheduler in time order.

use serde::{Deserialize, Serialize};

use super::ProcessId;

/// One contiguous CPU occupancy interval `[start_time, end_time)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GanttEntry {
    /// Process that occupied the CPU.
    pub process_id: ProcessId,
    /// Process name (denormalized for display convenience).
    pub process_name: String,
    /// First tick of the interval.
    pub start_time: i64,
    /// Tick after the last executed unit.
    pub end_time: i64,
    /// The interval ended because the process was preempted.
    pub preempted: bool,
    /// The interval began with a context switch.
    pub context_switch: bool,
}

impl GanttEntry {
    /// Opens a one-tick entry starting at `start_time`.
    pub fn new(
        process_id: ProcessId,
        process_name: impl Into<String>,
        start_time: i64,
        context_switch: bool,
    ) -> Self {
        Self {
            process_id,
            process_name: process_name.into(),
            start_time,
            end_time: start_time + 1,
            preempted: false,
            context_switch,
        }
    }

    /// Interval length in ticks.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end_time - self.start_time
    }

    /// Stretches the entry to cover the tick starting at `time`.
    pub(crate) fn extend_to(&mut self, time: i64) {
        self.end_time = time + 1;
    }

    /// Whether `time` falls inside this interval.
    pub fn covers(&self, time: i64) -> bool {
        self.start_time <= time && time < self.end_time
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_entry_is_one_tick() {
        let e = GanttEntry::new(ProcessId(2), "P2", 4, true);
        assert_eq!(e.start_time, 4);
        assert_eq!(e.end_time, 5);
        assert_eq!(e.duration(), 1);
        assert!(e.context_switch);
        assert!(!e.preempted);
    }

    #[test]
    fn test_extend_and_covers() {
        let mut e = GanttEntry::new(ProcessId(0), "P0", 0, false);
        e.extend_to(1);
        e.extend_to(2);
        assert_eq!(e.end_time, 3);
        assert!(e.covers(0));
        assert!(e.covers(2));
        assert!(!e.covers(3));
    }
}
