//! Binary search: lower bound over a half-open interval

use crate::trace::{Field, Recorder, Simulation, StateFields};

/// Event tag for the lower-bound search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LowerBoundEvent {
    /// Probed value was below the target: lo moved past mid.
    MoveLo,
    /// Probed value was >= the target: hi moved to mid.
    MoveHi,
    /// Interval collapsed: lo is the insertion point.
    Settled,
    /// Empty array.
    Degenerate,
}

/// Snapshot for one lower-bound step.
#[derive(Debug, Clone, PartialEq)]
pub struct LowerBoundState {
    pub event: LowerBoundEvent,
    pub lo: usize,
    pub hi: usize,
    pub mid: usize,
    pub probed: i64,
    pub target: i64,
}

impl StateFields for LowerBoundState {
    fn fields(&self) -> Vec<Field> {
        vec![
            Field::new("lo", self.lo.to_string()),
            Field::new("hi", self.hi.to_string()),
            Field::new("mid", self.mid.to_string()),
            Field::new("probed", self.probed.to_string()),
            Field::new("target", self.target.to_string()),
        ]
    }
}

/// Lower bound: the smallest index whose value is >= `target`, or `len` when
/// no such index exists. Works whether or not the target is present.
///
/// Maintains a half-open interval `[lo, hi)` with the invariant that every
/// index below `lo` holds a value below the target and every index at or
/// above `hi` holds a value at or above it.
pub fn simulate_binary_search(nums: &[i64], target: i64) -> Simulation<LowerBoundState, usize> {
    let mut rec = Recorder::new();

    if nums.is_empty() {
        rec.push(
            "empty array: insertion point 0",
            LowerBoundState {
                event: LowerBoundEvent::Degenerate,
                lo: 0,
                hi: 0,
                mid: 0,
                probed: 0,
                target,
            },
        );
        return rec.finish(0);
    }

    let mut lo = 0usize;
    let mut hi = nums.len();

    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        let probed = nums[mid];
        if probed < target {
            rec.push(
                format!("nums[{}] = {} < {}: search right half", mid, probed, target),
                LowerBoundState {
                    event: LowerBoundEvent::MoveLo,
                    lo,
                    hi,
                    mid,
                    probed,
                    target,
                },
            );
            lo = mid + 1;
        } else {
            rec.push(
                format!("nums[{}] = {} >= {}: search left half", mid, probed, target),
                LowerBoundState {
                    event: LowerBoundEvent::MoveHi,
                    lo,
                    hi,
                    mid,
                    probed,
                    target,
                },
            );
            hi = mid;
        }
    }

    rec.push(
        format!("interval collapsed: insertion point {}", lo),
        LowerBoundState {
            event: LowerBoundEvent::Settled,
            lo,
            hi,
            mid: lo,
            probed: nums.get(lo).copied().unwrap_or(0),
            target,
        },
    );
    rec.finish(lo)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lower_bound_with_duplicates() {
        let sim = simulate_binary_search(&[1, 2, 2, 2, 4, 5], 2);
        assert_eq!(sim.result, 1);
    }

    #[test]
    fn lower_bound_absent_target() {
        let sim = simulate_binary_search(&[1, 3, 5, 7, 9, 11], 8);
        assert_eq!(sim.result, 4); // first value >= 8 is 9 at index 4
    }

    #[test]
    fn lower_bound_past_the_end() {
        let sim = simulate_binary_search(&[1, 2, 3], 10);
        assert_eq!(sim.result, 3);
    }

    #[test]
    fn lower_bound_before_the_start() {
        let sim = simulate_binary_search(&[5, 6, 7], -1);
        assert_eq!(sim.result, 0);
    }

    #[test]
    fn empty_array_single_step() {
        let sim = simulate_binary_search(&[], 4);
        assert_eq!(sim.result, 0);
        assert_eq!(sim.steps.len(), 1);
    }

    #[test]
    fn lower_bound_law_holds_everywhere() {
        let nums = [1, 3, 3, 6, 9, 9, 12];
        for target in -2..15 {
            let expect = nums.iter().position(|&v| v >= target).unwrap_or(nums.len());
            assert_eq!(simulate_binary_search(&nums, target).result, expect);
        }
    }
}
