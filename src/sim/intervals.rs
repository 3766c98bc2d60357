//! Interval sweeps: merge overlapping and greedy scheduling

use crate::trace::{Field, Recorder, Simulation, StateFields};

fn fmt_intervals(intervals: &[(i64, i64)]) -> String {
    let body: Vec<String> = intervals
        .iter()
        .map(|(a, b)| format!("[{},{}]", a, b))
        .collect();
    format!("[{}]", body.join(", "))
}

/// Event tag for the merge sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeEvent {
    /// Intervals sorted by (start, end) ascending.
    Sort,
    /// Current interval overlaps (or touches) the last merged one: extend.
    Extend,
    /// Gap before the current interval: start a new merged group.
    NewGroup,
    /// Sweep complete.
    Done,
    /// Empty list.
    Degenerate,
}

/// Snapshot for one merge step.
#[derive(Debug, Clone, PartialEq)]
pub struct MergeState {
    pub event: MergeEvent,
    pub current: (i64, i64),
    pub merged: Vec<(i64, i64)>,
}

impl StateFields for MergeState {
    fn fields(&self) -> Vec<Field> {
        vec![
            Field::new("current", format!("[{},{}]", self.current.0, self.current.1)),
            Field::new("merged", fmt_intervals(&self.merged)),
        ]
    }
}

/// Merge overlapping intervals.
///
/// Sorts by (start, end) ascending and sweeps. The gap test is strict
/// (`last_end < next_start`), so touching intervals (`end == next_start`)
/// merge. The output is disjoint, ordered, and a fixed point under re-merging.
pub fn simulate_interval_merge(
    intervals: &[(i64, i64)],
) -> Simulation<MergeState, Vec<(i64, i64)>> {
    let mut rec = Recorder::new();

    if intervals.is_empty() {
        rec.push(
            "no intervals to merge",
            MergeState {
                event: MergeEvent::Degenerate,
                current: (0, 0),
                merged: Vec::new(),
            },
        );
        return rec.finish(Vec::new());
    }

    let mut sorted = intervals.to_vec();
    sorted.sort_unstable();
    rec.push(
        "sort intervals by (start, end)",
        MergeState {
            event: MergeEvent::Sort,
            current: sorted[0],
            merged: Vec::new(),
        },
    );

    let mut merged: Vec<(i64, i64)> = vec![sorted[0]];
    for &(start, end) in &sorted[1..] {
        let last = merged.last_mut().unwrap();
        if last.1 < start {
            merged.push((start, end));
            rec.push(
                format!("gap before [{},{}]: start new group", start, end),
                MergeState {
                    event: MergeEvent::NewGroup,
                    current: (start, end),
                    merged: merged.clone(),
                },
            );
        } else {
            last.1 = last.1.max(end);
            rec.push(
                format!("[{},{}] overlaps: extend group", start, end),
                MergeState {
                    event: MergeEvent::Extend,
                    current: (start, end),
                    merged: merged.clone(),
                },
            );
        }
    }

    rec.push(
        format!("sweep complete: {} merged interval(s)", merged.len()),
        MergeState {
            event: MergeEvent::Done,
            current: *merged.last().unwrap(),
            merged: merged.clone(),
        },
    );
    rec.finish(merged)
}

/// Event tag for the greedy scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleEvent {
    /// Intervals sorted by (end, start) ascending.
    Sort,
    /// Interval starts at or after the last accepted end: accept.
    Accept,
    /// Interval overlaps the last accepted one: reject.
    Reject,
    /// Sweep complete.
    Done,
    /// Empty list.
    Degenerate,
}

/// Snapshot for one scheduling step.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleState {
    pub event: ScheduleEvent,
    pub current: (i64, i64),
    pub last_end: i64,
    pub accepted: Vec<(i64, i64)>,
}

impl StateFields for ScheduleState {
    fn fields(&self) -> Vec<Field> {
        vec![
            Field::new("current", format!("[{},{}]", self.current.0, self.current.1)),
            Field::new("last_end", self.last_end.to_string()),
            Field::new("accepted", fmt_intervals(&self.accepted)),
        ]
    }
}

/// Earliest-finish-time interval scheduling.
///
/// Sorts by (end, start) ascending; accepts an interval exactly when its
/// start is at or after the last accepted end (so back-to-back intervals are
/// compatible). The accepted set is maximum by the classic exchange argument.
pub fn simulate_interval_schedule(
    intervals: &[(i64, i64)],
) -> Simulation<ScheduleState, Vec<(i64, i64)>> {
    let mut rec = Recorder::new();

    if intervals.is_empty() {
        rec.push(
            "no intervals to schedule",
            ScheduleState {
                event: ScheduleEvent::Degenerate,
                current: (0, 0),
                last_end: 0,
                accepted: Vec::new(),
            },
        );
        return rec.finish(Vec::new());
    }

    let mut sorted = intervals.to_vec();
    sorted.sort_unstable_by_key(|&(start, end)| (end, start));
    rec.push(
        "sort intervals by (end, start)",
        ScheduleState {
            event: ScheduleEvent::Sort,
            current: sorted[0],
            last_end: i64::MIN,
            accepted: Vec::new(),
        },
    );

    let mut accepted: Vec<(i64, i64)> = Vec::new();
    let mut last_end = i64::MIN;
    for &(start, end) in &sorted {
        if start >= last_end {
            accepted.push((start, end));
            last_end = end;
            rec.push(
                format!("[{},{}] starts after {}: accept", start, end, accepted_prev(&accepted)),
                ScheduleState {
                    event: ScheduleEvent::Accept,
                    current: (start, end),
                    last_end,
                    accepted: accepted.clone(),
                },
            );
        } else {
            rec.push(
                format!("[{},{}] overlaps the last accepted: reject", start, end),
                ScheduleState {
                    event: ScheduleEvent::Reject,
                    current: (start, end),
                    last_end,
                    accepted: accepted.clone(),
                },
            );
        }
    }

    rec.push(
        format!("sweep complete: {} interval(s) accepted", accepted.len()),
        ScheduleState {
            event: ScheduleEvent::Done,
            current: *accepted.last().unwrap_or(&(0, 0)),
            last_end,
            accepted: accepted.clone(),
        },
    );
    rec.finish(accepted)
}

fn accepted_prev(accepted: &[(i64, i64)]) -> String {
    if accepted.len() >= 2 {
        accepted[accepted.len() - 2].1.to_string()
    } else {
        "the start".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_overlapping_chain() {
        let sim = simulate_interval_merge(&[(1, 3), (2, 6), (8, 10), (15, 18)]);
        assert_eq!(sim.result, vec![(1, 6), (8, 10), (15, 18)]);
    }

    #[test]
    fn merge_touching_intervals() {
        let sim = simulate_interval_merge(&[(1, 4), (4, 5)]);
        assert_eq!(sim.result, vec![(1, 5)]);
    }

    #[test]
    fn merge_is_idempotent() {
        let first = simulate_interval_merge(&[(1, 3), (2, 6), (5, 9), (11, 12)]);
        let second = simulate_interval_merge(&first.result);
        assert_eq!(second.result, first.result);
    }

    #[test]
    fn merge_contained_interval_does_not_shrink() {
        let sim = simulate_interval_merge(&[(1, 10), (2, 3)]);
        assert_eq!(sim.result, vec![(1, 10)]);
    }

    #[test]
    fn merge_empty_short_circuits() {
        let sim = simulate_interval_merge(&[]);
        assert!(sim.result.is_empty());
        assert_eq!(sim.steps.len(), 1);
    }

    #[test]
    fn schedule_takes_earliest_finishers() {
        let sim = simulate_interval_schedule(&[(1, 4), (3, 5), (0, 6), (5, 7), (8, 9)]);
        assert_eq!(sim.result, vec![(1, 4), (5, 7), (8, 9)]);
    }

    #[test]
    fn schedule_accepts_back_to_back() {
        let sim = simulate_interval_schedule(&[(1, 3), (3, 5)]);
        assert_eq!(sim.result.len(), 2);
    }

    #[test]
    fn schedule_all_overlapping_takes_one() {
        let sim = simulate_interval_schedule(&[(1, 10), (2, 9), (3, 8)]);
        assert_eq!(sim.result, vec![(3, 8)]);
    }
}
