//! Backtracking subset-sum with a hard step cap

use crate::trace::{fmt_list, Field, Recorder, Simulation, StateFields};

/// Hard limit on recorded steps for the backtracking search.
///
/// Subset-sum is exponential in the worst case; without a cap an adversarial
/// input hangs the lesson. When the cap is hit the search reports "stopped
/// early" and returns no solution — a pragmatic guard, not a correctness
/// guarantee. See `simulate_subset_sum_capped` to override it.
pub const BACKTRACK_STEP_CAP: usize = 700;

/// Event tag for the include/exclude search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubsetEvent {
    /// Element included in the running subset.
    Include,
    /// Element excluded; trying the other branch.
    Exclude,
    /// Running sum equals the target: solution found.
    Found,
    /// Sum overshot or elements ran out: branch abandoned.
    Prune,
    /// Step cap hit: search stopped early.
    CapReached,
    /// Search space exhausted without a solution.
    Exhausted,
}

/// Snapshot for one subset-sum step.
#[derive(Debug, Clone, PartialEq)]
pub struct SubsetState {
    pub event: SubsetEvent,
    pub index: usize,
    pub sum: i64,
    pub target: i64,
    /// Elements currently chosen, in original order.
    pub chosen: Vec<i64>,
}

impl StateFields for SubsetState {
    fn fields(&self) -> Vec<Field> {
        vec![
            Field::new("index", self.index.to_string()),
            Field::new("sum", self.sum.to_string()),
            Field::new("target", self.target.to_string()),
            Field::new("chosen", fmt_list(&self.chosen)),
        ]
    }
}

/// Search for a subset summing exactly to `target`, stopping at the first
/// solution, with the default step cap of [`BACKTRACK_STEP_CAP`].
pub fn simulate_subset_sum(nums: &[i64], target: i64) -> Simulation<SubsetState, Option<Vec<i64>>> {
    simulate_subset_sum_capped(nums, target, BACKTRACK_STEP_CAP)
}

/// Subset-sum search with an explicit step cap.
///
/// DFS over include/exclude branches per element, in original order. Branches
/// are pruned when the running sum overshoots the target (sound only for
/// nonnegative elements) or the elements run out. The empty subset solves
/// `target == 0` immediately.
pub fn simulate_subset_sum_capped(
    nums: &[i64],
    target: i64,
    cap: usize,
) -> Simulation<SubsetState, Option<Vec<i64>>> {
    let mut rec = Recorder::new();
    let mut chosen: Vec<i64> = Vec::new();

    // sum == target is checked before recursing further, so target 0 is
    // answered by the empty subset without touching any element.
    let mut capped = false;
    let found = search(nums, target, 0, 0, cap, &mut chosen, &mut capped, &mut rec);

    if found {
        return rec.finish(Some(chosen));
    }
    if capped {
        rec.push(
            format!("step cap {} reached: search stopped early", cap),
            SubsetState {
                event: SubsetEvent::CapReached,
                index: 0,
                sum: 0,
                target,
                chosen: Vec::new(),
            },
        );
        return rec.finish(None);
    }
    rec.push(
        "search space exhausted: no subset matches",
        SubsetState {
            event: SubsetEvent::Exhausted,
            index: nums.len(),
            sum: 0,
            target,
            chosen: Vec::new(),
        },
    );
    rec.finish(None)
}

#[allow(clippy::too_many_arguments)]
fn search(
    nums: &[i64],
    target: i64,
    index: usize,
    sum: i64,
    cap: usize,
    chosen: &mut Vec<i64>,
    capped: &mut bool,
    rec: &mut Recorder<SubsetState>,
) -> bool {
    // A search that finishes exactly on its last allowed step is exhausted,
    // not capped; the flag is set only where a step is actually refused.
    if rec.len() >= cap {
        *capped = true;
        return false;
    }

    if sum == target {
        rec.push(
            format!("sum {} equals target: solution {}", sum, fmt_list(chosen)),
            SubsetState {
                event: SubsetEvent::Found,
                index,
                sum,
                target,
                chosen: chosen.clone(),
            },
        );
        return true;
    }

    if sum > target || index >= nums.len() {
        rec.push(
            if sum > target {
                format!("sum {} overshoots {}: prune", sum, target)
            } else {
                "elements exhausted: prune".to_string()
            },
            SubsetState {
                event: SubsetEvent::Prune,
                index,
                sum,
                target,
                chosen: chosen.clone(),
            },
        );
        return false;
    }

    // Include branch first, in original element order.
    chosen.push(nums[index]);
    rec.push(
        format!("include nums[{}] = {}", index, nums[index]),
        SubsetState {
            event: SubsetEvent::Include,
            index,
            sum: sum + nums[index],
            target,
            chosen: chosen.clone(),
        },
    );
    if search(nums, target, index + 1, sum + nums[index], cap, chosen, capped, rec) {
        return true;
    }
    chosen.pop();

    if rec.len() >= cap {
        *capped = true;
        return false;
    }
    rec.push(
        format!("exclude nums[{}] = {}", index, nums[index]),
        SubsetState {
            event: SubsetEvent::Exclude,
            index,
            sum,
            target,
            chosen: chosen.clone(),
        },
    );
    search(nums, target, index + 1, sum, cap, chosen, capped, rec)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_first_solution_in_branch_order() {
        let sim = simulate_subset_sum(&[3, 34, 4, 12, 5, 2], 9);
        let subset = sim.result.expect("a subset exists");
        assert_eq!(subset.iter().sum::<i64>(), 9);
        // Include-first order makes [3, 4, 2] the first solution found.
        assert_eq!(subset, vec![3, 4, 2]);
    }

    #[test]
    fn target_zero_is_the_empty_subset() {
        let sim = simulate_subset_sum(&[1, 2, 3], 0);
        assert_eq!(sim.result, Some(Vec::new()));
        assert_eq!(sim.steps.len(), 1);
        assert_eq!(sim.steps[0].state.event, SubsetEvent::Found);
    }

    #[test]
    fn unreachable_target_exhausts() {
        let sim = simulate_subset_sum(&[2, 4], 11);
        assert_eq!(sim.result, None);
        assert_eq!(sim.steps.last().unwrap().state.event, SubsetEvent::Exhausted);
    }

    #[test]
    fn overshoot_branches_are_pruned() {
        let sim = simulate_subset_sum(&[10, 1], 1);
        assert_eq!(sim.result, Some(vec![1]));
        assert!(sim.steps.iter().any(|s| s.state.event == SubsetEvent::Prune));
    }

    #[test]
    fn step_cap_stops_the_search() {
        // 24 elements that can never sum to an odd target: the full tree is
        // ~2^25 nodes, far past any reasonable cap.
        let nums = vec![2i64; 24];
        let sim = simulate_subset_sum_capped(&nums, 1, 50);
        assert_eq!(sim.result, None);
        assert_eq!(
            sim.steps.last().unwrap().state.event,
            SubsetEvent::CapReached
        );
        assert!(sim.steps.len() <= 51);
    }

    #[test]
    fn exhaustion_on_the_last_allowed_step_is_not_a_cap_hit() {
        // The full tree for [2, 4] vs 11 records exactly 10 steps, so a cap
        // of 10 is reached but never refuses anything.
        let sim = simulate_subset_sum_capped(&[2, 4], 11, 10);
        assert_eq!(sim.result, None);
        assert_eq!(sim.steps.len(), 11);
        assert_eq!(sim.steps.last().unwrap().state.event, SubsetEvent::Exhausted);
    }

    #[test]
    fn default_cap_bounds_the_trace() {
        let nums = vec![1i64; 30];
        let sim = simulate_subset_sum(&nums, -5); // negative target prunes at the root
        assert!(sim.steps.len() <= BACKTRACK_STEP_CAP + 1);
    }
}
