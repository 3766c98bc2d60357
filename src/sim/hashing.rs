//! Hash set / hash map scans: first duplicate and frequency count

use crate::trace::{fmt_list, Field, Recorder, Simulation, StateFields};
use rustc_hash::FxHashSet;

/// Event tag for the first-duplicate scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashDupEvent {
    /// Value was not in the seen set and was inserted.
    Insert,
    /// Value was already in the seen set: first duplicate found.
    Found,
    /// Scan finished without finding a repeat.
    NoDuplicate,
    /// Empty input, nothing to scan.
    Degenerate,
}

/// Snapshot for one first-duplicate step.
#[derive(Debug, Clone, PartialEq)]
pub struct HashDupState {
    pub event: HashDupEvent,
    pub index: usize,
    pub value: i64,
    /// Seen set rendered in first-insertion order.
    pub seen: Vec<i64>,
}

impl StateFields for HashDupState {
    fn fields(&self) -> Vec<Field> {
        vec![
            Field::new("index", self.index.to_string()),
            Field::new("value", self.value.to_string()),
            Field::new("seen", fmt_list(&self.seen)),
        ]
    }
}

/// Scan for the first duplicated value, left to right.
///
/// "First" is defined by scan order: the first element whose value is already
/// in the seen set. Returns `None` when every element is distinct.
pub fn simulate_hash_duplicate(nums: &[i64]) -> Simulation<HashDupState, Option<i64>> {
    let mut rec = Recorder::new();

    if nums.is_empty() {
        rec.push(
            "empty input: nothing to scan",
            HashDupState {
                event: HashDupEvent::Degenerate,
                index: 0,
                value: 0,
                seen: Vec::new(),
            },
        );
        return rec.finish(None);
    }

    let mut seen = FxHashSet::default();
    // Kept alongside the set so snapshots render in insertion order.
    let mut seen_order: Vec<i64> = Vec::new();

    for (index, &value) in nums.iter().enumerate() {
        if seen.contains(&value) {
            rec.push(
                format!("{} at index {} already seen: first duplicate", value, index),
                HashDupState {
                    event: HashDupEvent::Found,
                    index,
                    value,
                    seen: seen_order.clone(),
                },
            );
            return rec.finish(Some(value));
        }
        seen.insert(value);
        seen_order.push(value);
        rec.push(
            format!("insert {} into seen set", value),
            HashDupState {
                event: HashDupEvent::Insert,
                index,
                value,
                seen: seen_order.clone(),
            },
        );
    }

    let last = nums.len() - 1;
    rec.push(
        "scan complete: no duplicate",
        HashDupState {
            event: HashDupEvent::NoDuplicate,
            index: last,
            value: nums[last],
            seen: seen_order,
        },
    );
    rec.finish(None)
}

/// Event tag for the frequency count scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashFreqEvent {
    /// Counter for the current value incremented (possibly from zero).
    Count,
    /// Full pass finished.
    Done,
    /// Empty input.
    Degenerate,
}

/// Snapshot for one frequency-count step.
#[derive(Debug, Clone, PartialEq)]
pub struct HashFreqState {
    pub event: HashFreqEvent,
    pub index: usize,
    pub value: i64,
    /// Full running count map, sorted by value for deterministic rendering.
    pub counts: Vec<(i64, usize)>,
}

impl StateFields for HashFreqState {
    fn fields(&self) -> Vec<Field> {
        let counts: Vec<String> = self
            .counts
            .iter()
            .map(|(v, c)| format!("{}:{}", v, c))
            .collect();
        vec![
            Field::new("index", self.index.to_string()),
            Field::new("value", self.value.to_string()),
            Field::new("counts", format!("{{{}}}", counts.join(", "))),
        ]
    }
}

/// Count occurrences of every value. Never stops early; each step carries the
/// full running map. The result is the final map sorted by value.
pub fn simulate_hash_frequency(nums: &[i64]) -> Simulation<HashFreqState, Vec<(i64, usize)>> {
    let mut rec = Recorder::new();

    if nums.is_empty() {
        rec.push(
            "empty input: nothing to count",
            HashFreqState {
                event: HashFreqEvent::Degenerate,
                index: 0,
                value: 0,
                counts: Vec::new(),
            },
        );
        return rec.finish(Vec::new());
    }

    let mut counts = rustc_hash::FxHashMap::default();
    for (index, &value) in nums.iter().enumerate() {
        let entry = counts.entry(value).or_insert(0usize);
        *entry += 1;
        rec.push(
            format!("count[{}] -> {}", value, entry),
            HashFreqState {
                event: HashFreqEvent::Count,
                index,
                value,
                counts: sorted_counts(&counts),
            },
        );
    }

    let result = sorted_counts(&counts);
    let last = nums.len() - 1;
    rec.push(
        format!("pass complete: {} distinct value(s)", result.len()),
        HashFreqState {
            event: HashFreqEvent::Done,
            index: last,
            value: nums[last],
            counts: result.clone(),
        },
    );
    rec.finish(result)
}

fn sorted_counts(counts: &rustc_hash::FxHashMap<i64, usize>) -> Vec<(i64, usize)> {
    let mut out: Vec<(i64, usize)> = counts.iter().map(|(&v, &c)| (v, c)).collect();
    out.sort_unstable();
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_duplicate_is_scan_order() {
        let sim = simulate_hash_duplicate(&[2, 7, 11, 7, 3, 11]);
        assert_eq!(sim.result, Some(7));
        // Found at index 3, after three inserts.
        let found = sim.steps.last().unwrap();
        assert_eq!(found.state.event, HashDupEvent::Found);
        assert_eq!(found.state.index, 3);
    }

    #[test]
    fn no_duplicate_scans_everything() {
        let sim = simulate_hash_duplicate(&[1, 2, 3]);
        assert_eq!(sim.result, None);
        assert_eq!(sim.steps.len(), 4); // 3 inserts + summary
    }

    #[test]
    fn duplicate_empty_input_single_step() {
        let sim = simulate_hash_duplicate(&[]);
        assert_eq!(sim.result, None);
        assert_eq!(sim.steps.len(), 1);
        assert_eq!(sim.steps[0].state.event, HashDupEvent::Degenerate);
    }

    #[test]
    fn frequency_counts_full_pass() {
        let sim = simulate_hash_frequency(&[5, 5, 2, 5]);
        assert_eq!(sim.result, vec![(2, 1), (5, 3)]);
        assert_eq!(sim.steps.len(), 5); // one per element + summary
    }

    #[test]
    fn frequency_steps_carry_running_map() {
        let sim = simulate_hash_frequency(&[5, 5, 2]);
        assert_eq!(sim.steps[0].state.counts, vec![(5, 1)]);
        assert_eq!(sim.steps[1].state.counts, vec![(5, 2)]);
        assert_eq!(sim.steps[2].state.counts, vec![(2, 1), (5, 2)]);
    }
}
