//! Per-step natural-language annotation
//!
//! Every pattern state type implements [`Explain`]: given the current step's
//! payload and optionally the previous one, produce a `{what, why}` pair for
//! the explanation pane. A deeper variant expands the why with the reasoning
//! behind the move.
//!
//! Explanations match on each payload's typed event tag, so adding a pattern
//! without an [`Explain`] impl is a compile error rather than a silently
//! unexplained step. `prev` is `None` at the first step and implementations
//! must tolerate that.

use crate::sim::backtrack::{SubsetEvent, SubsetState};
use crate::sim::binary_search::{LowerBoundEvent, LowerBoundState};
use crate::sim::brackets::{BracketEvent, BracketState};
use crate::sim::dsu::{UnionEvent, UnionState};
use crate::sim::fib::{FibEvent, FibState};
use crate::sim::graph::{DfsEvent, DfsState, DijkstraEvent, DijkstraState, TopoEvent, TopoState};
use crate::sim::grid::{GridBfsEvent, GridBfsState};
use crate::sim::hashing::{HashDupEvent, HashDupState, HashFreqEvent, HashFreqState};
use crate::sim::heap_topk::{TopKEvent, TopKState};
use crate::sim::intervals::{MergeEvent, MergeState, ScheduleEvent, ScheduleState};
use crate::sim::prefix_sum::{PrefixSumEvent, PrefixSumState};
use crate::sim::trie::{TrieEvent, TrieState};
use crate::sim::two_pointers::{PairSumEvent, PairSumState};
use crate::sim::window::{DequeEvent, DequeState, WindowSumEvent, WindowSumState};

/// A two-part annotation: what the step did and why the algorithm did it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Explanation {
    pub what: String,
    pub why: String,
}

impl Explanation {
    fn new(what: impl Into<String>, why: impl Into<String>) -> Self {
        Explanation {
            what: what.into(),
            why: why.into(),
        }
    }
}

/// Derive `{what, why}` text from a step payload and its predecessor.
pub trait Explain {
    fn explain(&self, prev: Option<&Self>) -> Explanation;

    /// Expanded variant for the deep-explanation toggle. Defaults to the
    /// plain explanation; most patterns override the why with the underlying
    /// invariant argument.
    fn explain_deep(&self, prev: Option<&Self>) -> Explanation {
        self.explain(prev)
    }
}

impl Explain for HashDupState {
    fn explain(&self, _prev: Option<&Self>) -> Explanation {
        match self.event {
            HashDupEvent::Insert => Explanation::new(
                format!("Inserted {} into the seen set", self.value),
                "The value has not appeared before, so remember it and move on",
            ),
            HashDupEvent::Found => Explanation::new(
                format!("Found {} again at index {}", self.value, self.index),
                "Set membership is O(1), so the first repeat is caught the moment it appears",
            ),
            HashDupEvent::NoDuplicate => Explanation::new(
                "Finished the scan without a repeat",
                "Every element entered the set exactly once, so all values are distinct",
            ),
            HashDupEvent::Degenerate => Explanation::new(
                "Nothing to scan",
                "An empty array cannot contain a duplicate",
            ),
        }
    }

    fn explain_deep(&self, prev: Option<&Self>) -> Explanation {
        let mut e = self.explain(prev);
        if self.event == HashDupEvent::Insert {
            e.why = format!(
                "The seen set now holds {} value(s); a later repeat of any of them ends the scan immediately",
                self.seen.len()
            );
        }
        e
    }
}

impl Explain for HashFreqState {
    fn explain(&self, prev: Option<&Self>) -> Explanation {
        match self.event {
            HashFreqEvent::Count => {
                let first_time = prev
                    .map(|p| p.counts.iter().all(|&(v, _)| v != self.value))
                    .unwrap_or(true);
                Explanation::new(
                    format!("Incremented the counter for {}", self.value),
                    if first_time {
                        "First occurrence: the map gains a new entry at count 1"
                    } else {
                        "The value already has an entry, so only its count changes"
                    },
                )
            }
            HashFreqEvent::Done => Explanation::new(
                format!("Counted {} distinct value(s)", self.counts.len()),
                "Frequency counting never stops early; trailing occurrences matter",
            ),
            HashFreqEvent::Degenerate => {
                Explanation::new("Nothing to count", "An empty array has an empty frequency map")
            }
        }
    }
}

impl Explain for PairSumState {
    fn explain(&self, _prev: Option<&Self>) -> Explanation {
        match self.event {
            PairSumEvent::Found => Explanation::new(
                format!("Pair at ({}, {}) sums to the target", self.left, self.right),
                "The walk stops at the first exact match",
            ),
            PairSumEvent::MoveLeft => Explanation::new(
                format!("Sum {} too small: left pointer moves right", self.sum),
                "In sorted order, only a larger left value can raise the sum",
            ),
            PairSumEvent::MoveRight => Explanation::new(
                format!("Sum {} too large: right pointer moves left", self.sum),
                "In sorted order, only a smaller right value can lower the sum",
            ),
            PairSumEvent::Exhausted => Explanation::new(
                "Pointers crossed without a match",
                "Every pair was ruled out by one of the inward moves",
            ),
            PairSumEvent::Degenerate => {
                Explanation::new("Not enough elements", "A pair needs two distinct positions")
            }
        }
    }

    fn explain_deep(&self, prev: Option<&Self>) -> Explanation {
        let mut e = self.explain(prev);
        if matches!(self.event, PairSumEvent::MoveLeft | PairSumEvent::MoveRight) {
            e.why.push_str(
                "; each move discards a whole row of candidate pairs, which is what makes the walk linear",
            );
        }
        e
    }
}

impl Explain for WindowSumState {
    fn explain(&self, _prev: Option<&Self>) -> Explanation {
        match self.event {
            WindowSumEvent::Expand => Explanation::new(
                format!("Window grew to [{}, {}]", self.left, self.right),
                "The right edge always advances one element per outer step",
            ),
            WindowSumEvent::Shrink => Explanation::new(
                format!("Left edge moved to {}", self.left),
                format!("The window sum exceeded the limit {}, so give back from the left", self.limit),
            ),
            WindowSumEvent::Update => Explanation::new(
                format!("New best window length: {}", self.best),
                "The current window fits the limit and beats every earlier one",
            ),
            WindowSumEvent::Done => Explanation::new(
                format!("Best window length is {}", self.best),
                "Both edges only ever move forward, so the scan is linear",
            ),
            WindowSumEvent::Degenerate => {
                Explanation::new("No window exists", "An empty array has no contiguous windows")
            }
        }
    }
}

impl Explain for DequeState {
    fn explain(&self, _prev: Option<&Self>) -> Explanation {
        match self.event {
            DequeEvent::EvictFront => Explanation::new(
                "Front index fell out of the window",
                "Indices older than the window can never be its maximum again",
            ),
            DequeEvent::PopTail => Explanation::new(
                "Popped a tail index with a smaller-or-equal value",
                "A newer, larger-or-equal value dominates it for every future window",
            ),
            DequeEvent::Push => Explanation::new(
                format!("Pushed index {}", self.index),
                "The deque stays ordered by decreasing value, front to back",
            ),
            DequeEvent::Emit => Explanation::new(
                "Front of the deque is this window's maximum",
                "Everything smaller or older was already evicted or popped",
            ),
            DequeEvent::Degenerate => {
                Explanation::new("No windows", "The input is empty or the window size is not positive")
            }
        }
    }

    fn explain_deep(&self, prev: Option<&Self>) -> Explanation {
        let mut e = self.explain(prev);
        if self.event == DequeEvent::PopTail {
            e.why.push_str("; ties are popped too, so stale equal values never linger");
        }
        e
    }
}

impl Explain for BracketState {
    fn explain(&self, _prev: Option<&Self>) -> Explanation {
        match self.event {
            BracketEvent::Push => Explanation::new(
                format!("Pushed '{}'", self.ch),
                "Openers wait on the stack until their closer arrives",
            ),
            BracketEvent::Match => Explanation::new(
                format!("'{}' closed the innermost opener", self.ch),
                "A closer must pair with the most recent unclosed opener",
            ),
            BracketEvent::Mismatch => Explanation::new(
                format!("'{}' does not close the innermost opener", self.ch),
                "Nesting is strict: the wrong closer (or an empty stack) fails immediately",
            ),
            BracketEvent::Skip => Explanation::new(
                format!("Ignored '{}'", self.ch),
                "Only bracket characters affect validity",
            ),
            BracketEvent::Valid => Explanation::new(
                "Input ended with an empty stack",
                "Every opener found its closer in the right order",
            ),
            BracketEvent::Leftover => Explanation::new(
                format!("{} opener(s) never closed", self.stack.len()),
                "A balanced string must drain the stack completely",
            ),
            BracketEvent::Degenerate => {
                Explanation::new("Empty input", "No brackets means nothing can be unbalanced")
            }
        }
    }
}

impl Explain for GridBfsState {
    fn explain(&self, _prev: Option<&Self>) -> Explanation {
        match self.event {
            GridBfsEvent::Seed => Explanation::new(
                "Start cell seeded the frontier",
                "BFS begins with the start at distance 0",
            ),
            GridBfsEvent::Dequeue => Explanation::new(
                format!(
                    "Processing ({},{}) at distance {}",
                    self.cell.0, self.cell.1, self.dist
                ),
                "FIFO order processes the frontier in nondecreasing distance",
            ),
            GridBfsEvent::Enqueue => Explanation::new(
                format!("Discovered ({},{})", self.cell.0, self.cell.1),
                "Open, unvisited neighbors join the frontier one ring further out",
            ),
            GridBfsEvent::Done => Explanation::new(
                format!("{} cell(s) reachable", self.visited),
                "An empty frontier means every reachable cell was discovered",
            ),
            GridBfsEvent::Degenerate => Explanation::new(
                "Traversal cannot start",
                "The grid is empty, the start is out of range, or the start is blocked",
            ),
        }
    }

    fn explain_deep(&self, prev: Option<&Self>) -> Explanation {
        let mut e = self.explain(prev);
        if self.event == GridBfsEvent::Enqueue {
            e.why.push_str(
                "; marking cells visited at enqueue time (not dequeue) is what prevents duplicate frontier entries",
            );
        }
        e
    }
}

impl Explain for DfsState {
    fn explain(&self, _prev: Option<&Self>) -> Explanation {
        match self.event {
            DfsEvent::Visit => Explanation::new(
                format!("Visited node {}", self.node),
                "DFS dives into the smallest unvisited neighbor first",
            ),
            DfsEvent::Backtrack => Explanation::new(
                format!("Backtracked from node {}", self.node),
                "Every neighbor is visited, so the recursion returns one level",
            ),
            DfsEvent::Done => Explanation::new(
                format!("Traversal visited {} node(s)", self.order.len()),
                "The recursion unwound completely back to the start",
            ),
            DfsEvent::Degenerate => Explanation::new(
                "Traversal cannot start",
                "The graph is empty or the start node does not exist",
            ),
        }
    }

    fn explain_deep(&self, prev: Option<&Self>) -> Explanation {
        let mut e = self.explain(prev);
        if self.event == DfsEvent::Visit {
            e.why = format!(
                "The recursion path {:?} is a simple path from the start; marking on entry keeps cycles from looping",
                self.path
            );
        }
        e
    }
}

impl Explain for TopoState {
    fn explain(&self, _prev: Option<&Self>) -> Explanation {
        match self.event {
            TopoEvent::Seed => Explanation::new(
                format!("Node {} starts with no prerequisites", self.node),
                "Zero-indegree nodes can be ordered immediately",
            ),
            TopoEvent::Emit => Explanation::new(
                format!("Node {} entered the order", self.node),
                "All of its prerequisites were already emitted",
            ),
            TopoEvent::Relax => Explanation::new(
                format!("One prerequisite of node {} satisfied", self.node),
                "When its indegree reaches zero it joins the queue",
            ),
            TopoEvent::Complete => Explanation::new(
                "Every node was ordered",
                "A full order exists exactly when the graph has no cycle",
            ),
            TopoEvent::CycleDetected => Explanation::new(
                format!("Only {} node(s) could be ordered", self.order.len()),
                "Nodes on a cycle never reach indegree zero, so the queue drained early",
            ),
            TopoEvent::Degenerate => {
                Explanation::new("No nodes", "An empty graph has the empty order")
            }
        }
    }
}

impl Explain for DijkstraState {
    fn explain(&self, _prev: Option<&Self>) -> Explanation {
        match self.event {
            DijkstraEvent::FilterEdge => Explanation::new(
                format!("Dropped an edge with negative weight {}", self.dist),
                "Dijkstra's settled-is-final invariant breaks under negative weights",
            ),
            DijkstraEvent::Seed => Explanation::new(
                format!("Start node {} enters the heap at distance 0", self.node),
                "The start is trivially reachable from itself",
            ),
            DijkstraEvent::Settle => Explanation::new(
                format!("Settled node {} at distance {}", self.node, self.dist),
                "The heap minimum cannot be improved by any unprocessed path",
            ),
            DijkstraEvent::Stale => Explanation::new(
                format!("Skipped a stale entry for node {}", self.node),
                "A shorter distance was recorded after this entry was pushed",
            ),
            DijkstraEvent::Relax => Explanation::new(
                format!("Improved node {} to distance {}", self.node, self.dist),
                "Strictly shorter paths replace the recorded distance and re-enter the heap",
            ),
            DijkstraEvent::Done => Explanation::new(
                "Heap drained",
                "Nodes never reached keep no distance: they are unreachable",
            ),
            DijkstraEvent::Degenerate => Explanation::new(
                "Search cannot start",
                "The graph is empty or the start node does not exist",
            ),
        }
    }

    fn explain_deep(&self, prev: Option<&Self>) -> Explanation {
        let mut e = self.explain(prev);
        if self.event == DijkstraEvent::Stale {
            e.why.push_str(
                "; lazy deletion leaves outdated entries in the heap and discards them at pop time instead of searching for them eagerly",
            );
        }
        e
    }
}

impl Explain for LowerBoundState {
    fn explain(&self, _prev: Option<&Self>) -> Explanation {
        match self.event {
            LowerBoundEvent::MoveLo => Explanation::new(
                format!("Probed {} below the target: discard the left half", self.probed),
                "Everything at or before mid is too small to be the lower bound",
            ),
            LowerBoundEvent::MoveHi => Explanation::new(
                format!("Probed {} at or above the target: keep mid in range", self.probed),
                "Mid itself could be the lower bound, so hi moves to it (not past it)",
            ),
            LowerBoundEvent::Settled => Explanation::new(
                format!("Insertion point is {}", self.lo),
                "The half-open interval collapsed; lo is the first index with value >= target",
            ),
            LowerBoundEvent::Degenerate => {
                Explanation::new("Empty array", "The insertion point of anything is 0")
            }
        }
    }

    fn explain_deep(&self, prev: Option<&Self>) -> Explanation {
        let mut e = self.explain(prev);
        e.why.push_str(
            "; invariant: every index below lo is < target, every index at or past hi is >= target",
        );
        e
    }
}

impl Explain for FibState {
    fn explain(&self, _prev: Option<&Self>) -> Explanation {
        match self.event {
            FibEvent::Call => Explanation::new(
                format!("Entered fib({}) at depth {}", self.n, self.depth),
                "Top-down DP explores subproblems as the recursion needs them",
            ),
            FibEvent::BaseCase => Explanation::new(
                format!("fib({}) answered directly", self.n),
                "fib(0) = 0 and fib(1) = 1 anchor the recursion",
            ),
            FibEvent::MemoHit => Explanation::new(
                format!("fib({}) = {} from the memo", self.n, self.value),
                "The subproblem was solved earlier; no recomputation",
            ),
            FibEvent::Store => Explanation::new(
                format!("Stored fib({}) = {}", self.n, self.value),
                "Each subproblem is computed once and cached forever",
            ),
            FibEvent::Degenerate => Explanation::new(
                "Out-of-range input",
                "fib is undefined below 0 and overflows an i64 past 92; -1 is the sentinel",
            ),
        }
    }

    fn explain_deep(&self, prev: Option<&Self>) -> Explanation {
        let mut e = self.explain(prev);
        if self.event == FibEvent::MemoHit {
            e.why = format!(
                "Without the memo this call would re-expand a whole subtree; with it the total work is linear in n (memo holds {} entries)",
                self.memo.len()
            );
        }
        e
    }
}

impl Explain for PrefixSumState {
    fn explain(&self, _prev: Option<&Self>) -> Explanation {
        match self.event {
            PrefixSumEvent::ApplyUpdate => Explanation::new(
                "Applied one range update as two point updates",
                "A +delta at l and a -delta past r encode the whole range in O(1)",
            ),
            PrefixSumEvent::Rebuild => Explanation::new(
                "Rebuilt the adjusted array by running sum",
                "Summing the difference array left to right realizes every update at once",
            ),
            PrefixSumEvent::BuildPrefix => Explanation::new(
                "Built the prefix-sum array",
                "prefix[i] holds the sum of everything up to i, enabling O(1) range sums",
            ),
            PrefixSumEvent::Answer => Explanation::new(
                format!("Range sum is {}", self.answer),
                "prefix[r] minus prefix[l-1] cancels everything before the range",
            ),
            PrefixSumEvent::Degenerate => {
                Explanation::new("Zero-length array", "There is nothing to update or query")
            }
        }
    }
}

impl Explain for MergeState {
    fn explain(&self, _prev: Option<&Self>) -> Explanation {
        match self.event {
            MergeEvent::Sort => Explanation::new(
                "Sorted intervals by start",
                "After sorting, any overlap must involve the most recent group",
            ),
            MergeEvent::Extend => Explanation::new(
                format!("[{},{}] merged into the current group", self.current.0, self.current.1),
                "It starts at or before the group's end; touching counts as overlap",
            ),
            MergeEvent::NewGroup => Explanation::new(
                format!("[{},{}] starts a new group", self.current.0, self.current.1),
                "A strict gap separates it from everything merged so far",
            ),
            MergeEvent::Done => Explanation::new(
                format!("{} disjoint interval(s) remain", self.merged.len()),
                "The merged list is a fixed point: merging it again changes nothing",
            ),
            MergeEvent::Degenerate => {
                Explanation::new("No intervals", "An empty list is already merged")
            }
        }
    }
}

impl Explain for ScheduleState {
    fn explain(&self, _prev: Option<&Self>) -> Explanation {
        match self.event {
            ScheduleEvent::Sort => Explanation::new(
                "Sorted intervals by finish time",
                "Finishing earliest leaves the most room for later intervals",
            ),
            ScheduleEvent::Accept => Explanation::new(
                format!("Accepted [{},{}]", self.current.0, self.current.1),
                "It starts at or after the last accepted finish, so nothing conflicts",
            ),
            ScheduleEvent::Reject => Explanation::new(
                format!("Rejected [{},{}]", self.current.0, self.current.1),
                "It overlaps the last accepted interval, which finishes no later",
            ),
            ScheduleEvent::Done => Explanation::new(
                format!("Accepted {} interval(s)", self.accepted.len()),
                "The exchange argument makes this greedy choice optimal",
            ),
            ScheduleEvent::Degenerate => {
                Explanation::new("No intervals", "An empty schedule is trivially maximal")
            }
        }
    }
}

impl Explain for TopKState {
    fn explain(&self, _prev: Option<&Self>) -> Explanation {
        match self.event {
            TopKEvent::Push => Explanation::new(
                format!("Pushed {} into the min-heap", self.value),
                "Every element gets a chance to enter the top k",
            ),
            TopKEvent::Evict => Explanation::new(
                format!("Evicted the minimum {}", self.value),
                "The heap outgrew k; the smallest retained element can never be top-k",
            ),
            TopKEvent::Done => Explanation::new(
                "Retained heap sorted descending",
                "After the pass, the heap holds exactly the k largest elements",
            ),
            TopKEvent::Degenerate => {
                Explanation::new("Nothing to select", "k must be positive and the input non-empty")
            }
        }
    }

    fn explain_deep(&self, prev: Option<&Self>) -> Explanation {
        let mut e = self.explain(prev);
        if self.event == TopKEvent::Evict {
            e.why.push_str(
                "; keeping the heap at size k is what bounds the cost at n log k instead of n log n",
            );
        }
        e
    }
}

impl Explain for UnionState {
    fn explain(&self, _prev: Option<&Self>) -> Explanation {
        match self.event {
            UnionEvent::Find => Explanation::new(
                format!("Found the roots of {} and {}", self.a, self.b),
                "Path halving re-points nodes at their grandparents along the way",
            ),
            UnionEvent::Union => Explanation::new(
                format!("Linked the groups of {} and {}", self.a, self.b),
                "The shallower root hangs under the deeper one, keeping trees flat",
            ),
            UnionEvent::AlreadyConnected => Explanation::new(
                format!("{} and {} were already connected", self.a, self.b),
                "Same root means same component; the union is a recorded no-op",
            ),
            UnionEvent::Done => Explanation::new(
                format!("{} component(s) remain", self.components),
                "Each effective union reduced the component count by one",
            ),
            UnionEvent::Degenerate => {
                Explanation::new("No nodes", "Zero nodes form zero components")
            }
        }
    }
}

impl Explain for SubsetState {
    fn explain(&self, _prev: Option<&Self>) -> Explanation {
        match self.event {
            SubsetEvent::Include => Explanation::new(
                format!("Included element at index {}", self.index),
                "Try taking the element before trying to skip it",
            ),
            SubsetEvent::Exclude => Explanation::new(
                format!("Excluded element at index {}", self.index),
                "The include branch failed, so explore the subset without it",
            ),
            SubsetEvent::Found => Explanation::new(
                format!("Subset sums exactly to {}", self.target),
                "The search stops at the first solution it reaches",
            ),
            SubsetEvent::Prune => Explanation::new(
                "Abandoned this branch",
                "The sum overshot the target or no elements remain",
            ),
            SubsetEvent::CapReached => Explanation::new(
                "Search stopped early",
                "The step cap bounds exponential blowup; this is a guard, not an answer",
            ),
            SubsetEvent::Exhausted => Explanation::new(
                "Search space exhausted",
                "Every include/exclude combination was pruned or tried",
            ),
        }
    }

    fn explain_deep(&self, prev: Option<&Self>) -> Explanation {
        let mut e = self.explain(prev);
        if self.event == SubsetEvent::Prune && self.sum > self.target {
            e.why.push_str(
                "; overshoot pruning is sound only because every element is taken as nonnegative",
            );
        }
        e
    }
}

impl Explain for TrieState {
    fn explain(&self, _prev: Option<&Self>) -> Explanation {
        match self.event {
            TrieEvent::CreateNode => Explanation::new(
                format!("Created a node for '{}'", self.ch),
                "No inserted word has taken this path before",
            ),
            TrieEvent::FollowEdge => Explanation::new(
                format!("Reused the existing '{}' edge", self.ch),
                "Words sharing a prefix share the same nodes",
            ),
            TrieEvent::MarkWord => Explanation::new(
                format!("Marked \"{}\" as a complete word", self.path),
                "The end-of-word flag distinguishes whole words from mere prefixes",
            ),
            TrieEvent::WalkMatch => Explanation::new(
                format!("Prefix character '{}' found", self.ch),
                "The walk descends one node per matched character",
            ),
            TrieEvent::WalkMiss => Explanation::new(
                format!("No edge for '{}'", self.ch),
                "A missing character means no inserted word starts with this prefix",
            ),
            TrieEvent::WalkDone => Explanation::new(
                "Entire prefix consumed",
                "Some inserted word starts with it; this is prefix existence, not word membership",
            ),
            TrieEvent::Degenerate => {
                Explanation::new("Empty trie", "With no words inserted, only the empty prefix exists")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::binary_search::simulate_binary_search;
    use crate::sim::hashing::simulate_hash_duplicate;
    use crate::sim::window::simulate_window_sum;

    #[test]
    fn every_step_explains_without_a_predecessor() {
        let sim = simulate_hash_duplicate(&[1, 2, 1]);
        for step in &sim.steps {
            let e = step.state.explain(None);
            assert!(!e.what.is_empty());
            assert!(!e.why.is_empty());
        }
    }

    #[test]
    fn deep_variant_is_at_least_as_long() {
        let sim = simulate_binary_search(&[1, 3, 5, 7], 4);
        for (i, step) in sim.steps.iter().enumerate() {
            let prev = i.checked_sub(1).map(|p| &sim.steps[p].state);
            let plain = step.state.explain(prev);
            let deep = step.state.explain_deep(prev);
            assert!(deep.why.len() >= plain.why.len());
        }
    }

    #[test]
    fn frequency_first_occurrence_uses_previous_step() {
        use crate::sim::hashing::simulate_hash_frequency;
        let sim = simulate_hash_frequency(&[4, 4]);
        let first = sim.steps[0].state.explain(None);
        let second = sim.steps[1].state.explain(Some(&sim.steps[0].state));
        assert_ne!(first.why, second.why);
    }

    #[test]
    fn window_phases_have_distinct_explanations() {
        let sim = simulate_window_sum(&[2, 3, 4], 5);
        let whats: Vec<String> = sim
            .steps
            .iter()
            .map(|s| s.state.explain(None).what)
            .collect();
        assert!(whats.iter().any(|w| w.contains("grew")));
        assert!(whats.iter().any(|w| w.contains("Left edge")));
    }
}
