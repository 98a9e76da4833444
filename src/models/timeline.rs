//! Execution timeline (Gantt data).
//!
//! Ordered log of CPU execution intervals, listed in the order execution
//! occurred. Idle gaps are not stored; they can be derived on demand.

use serde::{Deserialize, Serialize};

/// A contiguous stretch of CPU time given to one process: `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interval {
    /// Process that ran.
    pub process_id: usize,
    /// Start time (inclusive).
    pub start: i64,
    /// End time (exclusive).
    pub end: i64,
}

impl Interval {
    /// Creates a new interval.
    pub fn new(process_id: usize, start: i64, end: i64) -> Self {
        Self {
            process_id,
            start,
            end,
        }
    }

    /// Length of the interval.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }

    /// Display label of the process, `P1` for id 0.
    pub fn label(&self) -> String {
        format!("P{}", self.process_id + 1)
    }
}

/// The CPU's execution history for one simulation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timeline {
    intervals: Vec<Interval>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an execution interval. Intervals must be non-empty.
    pub fn push(&mut self, process_id: usize, start: i64, end: i64) {
        debug_assert!(end > start, "empty interval [{start}, {end})");
        log::trace!("P{} runs [{start}, {end})", process_id + 1);
        self.intervals.push(Interval::new(process_id, start, end));
    }

    /// Intervals in execution order.
    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    /// Iterates over intervals in execution order.
    pub fn iter(&self) -> std::slice::Iter<'_, Interval> {
        self.intervals.iter()
    }

    /// Number of intervals.
    #[inline]
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    /// Whether no interval was recorded.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Latest end time, or 0 for an empty timeline.
    pub fn makespan(&self) -> i64 {
        self.intervals.iter().map(|i| i.end).max().unwrap_or(0)
    }

    /// Total time the CPU was busy.
    pub fn busy_time(&self) -> i64 {
        self.intervals.iter().map(Interval::duration).sum()
    }

    /// Total CPU time given to one process.
    pub fn busy_time_for(&self, process_id: usize) -> i64 {
        self.intervals_for(process_id)
            .map(Interval::duration)
            .sum()
    }

    /// Intervals belonging to one process, in execution order.
    pub fn intervals_for(&self, process_id: usize) -> impl Iterator<Item = &Interval> {
        self.intervals
            .iter()
            .filter(move |i| i.process_id == process_id)
    }

    /// Idle gaps between time 0 and the makespan, as `[start, end)` pairs.
    pub fn idle_gaps(&self) -> Vec<(i64, i64)> {
        let mut sorted: Vec<&Interval> = self.intervals.iter().collect();
        sorted.sort_by_key(|i| i.start);

        let mut gaps = Vec::new();
        let mut cursor = 0;
        for interval in sorted {
            if interval.start > cursor {
                gaps.push((cursor, interval.start));
            }
            cursor = cursor.max(interval.end);
        }
        gaps
    }

    /// Number of switches between different processes in consecutive intervals.
    pub fn context_switches(&self) -> usize {
        self.intervals
            .windows(2)
            .filter(|w| w[0].process_id != w[1].process_id)
            .count()
    }

    /// Whether no two intervals overlap in time.
    pub fn is_non_overlapping(&self) -> bool {
        let mut sorted: Vec<&Interval> = self.intervals.iter().collect();
        sorted.sort_by_key(|i| i.start);
        sorted.windows(2).all(|w| w[0].end <= w[1].start)
    }
}

impl<'a> IntoIterator for &'a Timeline {
    type Item = &'a Interval;
    type IntoIter = std::slice::Iter<'a, Interval>;

    fn into_iter(self) -> Self::IntoIter {
        self.intervals.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Timeline {
        let mut t = Timeline::new();
        t.push(0, 0, 2);
        t.push(1, 2, 4);
        t.push(0, 6, 7);
        t.push(0, 7, 9);
        t
    }

    #[test]
    fn test_interval_basics() {
        let i = Interval::new(2, 3, 8);
        assert_eq!(i.duration(), 5);
        assert_eq!(i.label(), "P3");
    }

    #[test]
    fn test_empty_timeline() {
        let t = Timeline::new();
        assert!(t.is_empty());
        assert_eq!(t.makespan(), 0);
        assert_eq!(t.busy_time(), 0);
        assert!(t.idle_gaps().is_empty());
        assert_eq!(t.context_switches(), 0);
        assert!(t.is_non_overlapping());
    }

    #[test]
    fn test_busy_and_makespan() {
        let t = sample();
        assert_eq!(t.len(), 4);
        assert_eq!(t.makespan(), 9);
        assert_eq!(t.busy_time(), 7);
        assert_eq!(t.busy_time_for(0), 5);
        assert_eq!(t.busy_time_for(1), 2);
        assert_eq!(t.intervals_for(0).count(), 3);
    }

    #[test]
    fn test_idle_gaps() {
        let mut t = Timeline::new();
        t.push(0, 3, 5);
        t.push(1, 5, 6);
        t.push(2, 10, 11);
        assert_eq!(t.idle_gaps(), vec![(0, 3), (6, 10)]);
    }

    #[test]
    fn test_context_switches() {
        // P1 → P2 → P1 → P1: two switches
        assert_eq!(sample().context_switches(), 2);
    }

    #[test]
    fn test_overlap_detection() {
        assert!(sample().is_non_overlapping());

        let mut t = Timeline::new();
        t.push(0, 0, 5);
        t.push(1, 4, 6);
        assert!(!t.is_non_overlapping());
    }

    #[test]
    fn test_serializes_as_array() {
        let mut t = Timeline::new();
        t.push(0, 0, 2);
        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(json, r#"[{"process_id":0,"start":0,"end":2}]"#);
    }
}
