//! Two pointers: pair sum in a sorted array

use crate::trace::{Field, Recorder, Simulation, StateFields};

/// Event tag for the pair-sum walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairSumEvent {
    /// Sum matched the target exactly.
    Found,
    /// Sum too small: left pointer moved right.
    MoveLeft,
    /// Sum too large: right pointer moved left.
    MoveRight,
    /// Pointers crossed without a match.
    Exhausted,
    /// Fewer than two elements.
    Degenerate,
}

/// Snapshot for one pair-sum step.
#[derive(Debug, Clone, PartialEq)]
pub struct PairSumState {
    pub event: PairSumEvent,
    pub left: usize,
    pub right: usize,
    pub sum: i64,
    pub target: i64,
}

impl StateFields for PairSumState {
    fn fields(&self) -> Vec<Field> {
        vec![
            Field::new("left", self.left.to_string()),
            Field::new("right", self.right.to_string()),
            Field::new("sum", self.sum.to_string()),
            Field::new("target", self.target.to_string()),
        ]
    }
}

/// Search a **sorted** array for a pair summing to `target`.
///
/// Sortedness is the caller's responsibility; the walk silently produces
/// wrong answers on unsorted data (a deliberate lesson in itself). Returns
/// immediately on the first match.
pub fn simulate_pair_sum(nums: &[i64], target: i64) -> Simulation<PairSumState, bool> {
    let mut rec = Recorder::new();

    if nums.len() < 2 {
        rec.push(
            "need at least two elements for a pair",
            PairSumState {
                event: PairSumEvent::Degenerate,
                left: 0,
                right: 0,
                sum: 0,
                target,
            },
        );
        return rec.finish(false);
    }

    let mut left = 0usize;
    let mut right = nums.len() - 1;

    while left < right {
        let sum = nums[left] + nums[right];
        if sum == target {
            rec.push(
                format!("{} + {} == {}: pair found", nums[left], nums[right], target),
                PairSumState {
                    event: PairSumEvent::Found,
                    left,
                    right,
                    sum,
                    target,
                },
            );
            return rec.finish(true);
        }
        if sum < target {
            rec.push(
                format!("{} + {} < {}: advance left", nums[left], nums[right], target),
                PairSumState {
                    event: PairSumEvent::MoveLeft,
                    left,
                    right,
                    sum,
                    target,
                },
            );
            left += 1;
        } else {
            rec.push(
                format!("{} + {} > {}: retreat right", nums[left], nums[right], target),
                PairSumState {
                    event: PairSumEvent::MoveRight,
                    left,
                    right,
                    sum,
                    target,
                },
            );
            right -= 1;
        }
    }

    rec.push(
        "pointers crossed: no pair sums to target",
        PairSumState {
            event: PairSumEvent::Exhausted,
            left,
            right,
            sum: 0,
            target,
        },
    );
    rec.finish(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_pair_in_sorted_input() {
        let sim = simulate_pair_sum(&[1, 3, 5, 8, 11], 13);
        assert!(sim.result);
        assert_eq!(sim.steps.last().unwrap().state.event, PairSumEvent::Found);
    }

    #[test]
    fn crossing_without_match_is_false() {
        let sim = simulate_pair_sum(&[1, 2, 4], 100);
        assert!(!sim.result);
        assert_eq!(
            sim.steps.last().unwrap().state.event,
            PairSumEvent::Exhausted
        );
    }

    #[test]
    fn single_element_short_circuits() {
        let sim = simulate_pair_sum(&[5], 10);
        assert!(!sim.result);
        assert_eq!(sim.steps.len(), 1);
    }

    #[test]
    fn stops_on_first_match() {
        // 2 + 9 == 11 found before any interior pair is inspected.
        let sim = simulate_pair_sum(&[2, 4, 7, 9], 11);
        assert!(sim.result);
        assert_eq!(sim.steps.len(), 1);
        assert_eq!(sim.steps[0].state.left, 0);
        assert_eq!(sim.steps[0].state.right, 3);
    }
}
