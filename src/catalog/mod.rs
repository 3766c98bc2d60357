//! Static pattern catalog
//!
//! Read-only reference metadata for every supported pattern: display name,
//! complexity strings, the invariant the algorithm maintains, common pitfalls,
//! and edge cases worth quizzing on. Consumed by the info pane and the deep
//! explanation mode; never mutated by simulation.

use std::fmt;

/// Identifies one of the 19 supported algorithm patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternKey {
    HashDuplicate,
    HashFrequency,
    TwoPointers,
    SlidingWindow,
    BracketStack,
    GridBfs,
    GraphDfs,
    BinarySearch,
    FibMemo,
    PrefixSum,
    IntervalMerge,
    HeapTopK,
    MonotonicDeque,
    TopoSort,
    UnionFind,
    SubsetSum,
    TriePrefix,
    IntervalSchedule,
    Dijkstra,
}

impl PatternKey {
    /// Every pattern, in catalog order.
    pub fn all() -> &'static [PatternKey] {
        use PatternKey::*;
        &[
            HashDuplicate,
            HashFrequency,
            TwoPointers,
            SlidingWindow,
            BracketStack,
            GridBfs,
            GraphDfs,
            BinarySearch,
            FibMemo,
            PrefixSum,
            IntervalMerge,
            HeapTopK,
            MonotonicDeque,
            TopoSort,
            UnionFind,
            SubsetSum,
            TriePrefix,
            IntervalSchedule,
            Dijkstra,
        ]
    }

    /// Stable command-line identifier for this pattern.
    pub fn as_str(self) -> &'static str {
        match self {
            PatternKey::HashDuplicate => "hash-duplicate",
            PatternKey::HashFrequency => "hash-frequency",
            PatternKey::TwoPointers => "two-pointers",
            PatternKey::SlidingWindow => "sliding-window",
            PatternKey::BracketStack => "bracket-stack",
            PatternKey::GridBfs => "grid-bfs",
            PatternKey::GraphDfs => "graph-dfs",
            PatternKey::BinarySearch => "binary-search",
            PatternKey::FibMemo => "fib-memo",
            PatternKey::PrefixSum => "prefix-sum",
            PatternKey::IntervalMerge => "interval-merge",
            PatternKey::HeapTopK => "heap-top-k",
            PatternKey::MonotonicDeque => "monotonic-deque",
            PatternKey::TopoSort => "topo-sort",
            PatternKey::UnionFind => "union-find",
            PatternKey::SubsetSum => "subset-sum",
            PatternKey::TriePrefix => "trie-prefix",
            PatternKey::IntervalSchedule => "interval-schedule",
            PatternKey::Dijkstra => "dijkstra",
        }
    }

    /// Parse a command-line identifier. Case-insensitive.
    pub fn parse(text: &str) -> Option<PatternKey> {
        let needle = text.trim().to_ascii_lowercase();
        PatternKey::all()
            .iter()
            .copied()
            .find(|key| key.as_str() == needle)
    }
}

impl fmt::Display for PatternKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static reference metadata for one pattern.
#[derive(Debug, Clone, Copy)]
pub struct PatternInfo {
    pub key: PatternKey,
    pub name: &'static str,
    pub summary: &'static str,
    pub time_complexity: &'static str,
    pub space_complexity: &'static str,
    pub invariant: &'static str,
    pub pitfalls: &'static [&'static str],
    pub edge_cases: &'static [&'static str],
}

/// Look up the catalog entry for a pattern.
pub fn pattern_info(key: PatternKey) -> &'static PatternInfo {
    // CATALOG is in PatternKey::all() order.
    &CATALOG[PatternKey::all().iter().position(|k| *k == key).unwrap_or(0)]
}

static CATALOG: [PatternInfo; 19] = [
    PatternInfo {
        key: PatternKey::HashDuplicate,
        name: "Hash Set: First Duplicate",
        summary: "Scan left to right, remembering seen values in a hash set",
        time_complexity: "O(n)",
        space_complexity: "O(n)",
        invariant: "The seen set contains exactly the values scanned so far",
        pitfalls: &[
            "Sorting first changes which duplicate is 'first'",
            "A nested-loop scan is O(n^2) for no benefit",
        ],
        edge_cases: &["Empty input", "All elements distinct", "Duplicate at index 1"],
    },
    PatternInfo {
        key: PatternKey::HashFrequency,
        name: "Hash Map: Frequency Count",
        summary: "One pass, incrementing a per-value counter in a hash map",
        time_complexity: "O(n)",
        space_complexity: "O(n)",
        invariant: "Each counter equals the occurrences of its value scanned so far",
        pitfalls: &["Stopping early misses trailing occurrences"],
        edge_cases: &["Empty input", "Single distinct value repeated"],
    },
    PatternInfo {
        key: PatternKey::TwoPointers,
        name: "Two Pointers: Pair Sum",
        summary: "Pointers at both ends of a sorted array walk inward",
        time_complexity: "O(n)",
        space_complexity: "O(1)",
        invariant: "Any pair outside [left, right] has already been ruled out",
        pitfalls: &[
            "Requires sorted input; unsorted data silently gives wrong answers",
            "Moving the wrong pointer skips valid pairs",
        ],
        edge_cases: &["Fewer than two elements", "Target smaller than any pair"],
    },
    PatternInfo {
        key: PatternKey::SlidingWindow,
        name: "Sliding Window: Longest Sum-Bounded Window",
        summary: "Grow the right edge, shrink the left while the sum overflows",
        time_complexity: "O(n)",
        space_complexity: "O(1)",
        invariant: "The window sum never exceeds the limit after shrinking",
        pitfalls: &[
            "Negative numbers break the shrink argument",
            "Updating the best length before shrinking records invalid windows",
        ],
        edge_cases: &["Empty input", "Every element alone exceeds the limit"],
    },
    PatternInfo {
        key: PatternKey::BracketStack,
        name: "Stack: Bracket Validation",
        summary: "Push openers; each closer must match the top of the stack",
        time_complexity: "O(n)",
        space_complexity: "O(n)",
        invariant: "The stack holds exactly the currently-unclosed openers, innermost on top",
        pitfalls: &[
            "Forgetting the leftover-stack check accepts '(('",
            "Popping from an empty stack on a stray closer",
        ],
        edge_cases: &["Empty string", "Closer first", "Interleaved '([)]'"],
    },
    PatternInfo {
        key: PatternKey::GridBfs,
        name: "BFS: Grid Flood Fill",
        summary: "FIFO frontier expands one ring of cells at a time",
        time_complexity: "O(rows * cols)",
        space_complexity: "O(rows * cols)",
        invariant: "Cells are dequeued in nondecreasing distance from the start",
        pitfalls: &[
            "Marking visited on dequeue instead of enqueue duplicates work",
            "Array-shift dequeues turn BFS quadratic",
        ],
        edge_cases: &["Blocked start cell", "Zero rows or columns", "Fully blocked grid"],
    },
    PatternInfo {
        key: PatternKey::GraphDfs,
        name: "DFS: Graph Traversal",
        summary: "Recurse into unvisited neighbors, backtracking when exhausted",
        time_complexity: "O(V + E)",
        space_complexity: "O(V)",
        invariant: "The recursion stack is a simple path from the start to the current node",
        pitfalls: &[
            "Marking visited after recursion loops forever on cycles",
            "Unsorted adjacency makes the visit order nondeterministic",
        ],
        edge_cases: &["Start node out of range", "Disconnected components", "Self-loop"],
    },
    PatternInfo {
        key: PatternKey::BinarySearch,
        name: "Binary Search: Lower Bound",
        summary: "Halve a half-open interval until it pinpoints the insertion index",
        time_complexity: "O(log n)",
        space_complexity: "O(1)",
        invariant: "Every index < lo holds a value < target; every index >= hi holds a value >= target",
        pitfalls: &[
            "lo + hi overflow in languages with fixed-width indices",
            "Closed-interval variants off-by-one on the equal case",
        ],
        edge_cases: &["Empty array", "Target beyond either end", "All elements equal to target"],
    },
    PatternInfo {
        key: PatternKey::FibMemo,
        name: "DP: Memoized Fibonacci",
        summary: "Top-down recursion with a memo table keyed by n",
        time_complexity: "O(n)",
        space_complexity: "O(n)",
        invariant: "A memo entry, once stored, equals fib of its key forever",
        pitfalls: &[
            "Without the memo the recursion tree is exponential",
            "Checking the memo after recursing defeats the purpose",
        ],
        edge_cases: &["n = 0 and n = 1 base cases", "Negative n"],
    },
    PatternInfo {
        key: PatternKey::PrefixSum,
        name: "Prefix Sum + Difference Array",
        summary: "Range updates as paired point updates, then running sums",
        time_complexity: "O(n + u)",
        space_complexity: "O(n)",
        invariant: "Running-summing the difference array reproduces all applied updates",
        pitfalls: &[
            "Forgetting the diff[r+1] decrement leaks the delta past r",
            "Off-by-one between inclusive query bounds and prefix indices",
        ],
        edge_cases: &["Zero-length array", "Update spanning the whole array", "Query of one index"],
    },
    PatternInfo {
        key: PatternKey::IntervalMerge,
        name: "Intervals: Merge Overlapping",
        summary: "Sort by start, sweep, extending or starting merged groups",
        time_complexity: "O(n log n)",
        space_complexity: "O(n)",
        invariant: "Merged output is disjoint and ordered; touching intervals join",
        pitfalls: &[
            "Skipping the sort breaks the sweep",
            "Strict vs. non-strict overlap decides whether touching intervals merge",
        ],
        edge_cases: &["Empty list", "Identical intervals", "Chain that merges into one"],
    },
    PatternInfo {
        key: PatternKey::HeapTopK,
        name: "Heap: Top K Elements",
        summary: "A size-k min-heap keeps the k largest seen so far",
        time_complexity: "O(n log k)",
        space_complexity: "O(k)",
        invariant: "After each push/evict, the heap holds the k largest elements so far",
        pitfalls: &[
            "Using a max-heap of all n elements wastes memory",
            "Forgetting to evict lets the heap grow past k",
        ],
        edge_cases: &["k <= 0", "k >= n", "Duplicate values at the boundary"],
    },
    PatternInfo {
        key: PatternKey::MonotonicDeque,
        name: "Monotonic Deque: Sliding Window Maximum",
        summary: "A deque of indices kept in decreasing value order",
        time_complexity: "O(n)",
        space_complexity: "O(k)",
        invariant: "Deque values decrease front to back; the front is the window max",
        pitfalls: &[
            "Storing values instead of indices loses expiry information",
            "Keeping ties (< instead of <=) leaves stale equal values",
        ],
        edge_cases: &["k = 1", "k equal to the array length", "Strictly increasing input"],
    },
    PatternInfo {
        key: PatternKey::TopoSort,
        name: "Topological Sort: Kahn's Algorithm",
        summary: "Repeatedly emit nodes whose indegree has dropped to zero",
        time_complexity: "O(V + E)",
        space_complexity: "O(V)",
        invariant: "Every emitted node has all its prerequisites already emitted",
        pitfalls: &[
            "Forgetting the length check silently truncates cyclic graphs",
            "A DFS-based variant needs three-color state to catch cycles",
        ],
        edge_cases: &["Zero nodes", "Cycle consuming part of the graph", "No edges at all"],
    },
    PatternInfo {
        key: PatternKey::UnionFind,
        name: "Union-Find: Disjoint Sets",
        summary: "Parent pointers with path halving and union by rank",
        time_complexity: "O(alpha(n)) per op",
        space_complexity: "O(n)",
        invariant: "Two nodes share a root exactly when some union chain connects them",
        pitfalls: &[
            "Skipping compression degrades finds to O(n)",
            "Union by rank must compare roots, not the original nodes",
        ],
        edge_cases: &["Union of a node with itself", "Redundant union of connected nodes"],
    },
    PatternInfo {
        key: PatternKey::SubsetSum,
        name: "Backtracking: Subset Sum",
        summary: "Include/exclude each element, pruning overshoots",
        time_complexity: "O(2^n) worst case",
        space_complexity: "O(n)",
        invariant: "The running sum always equals the sum of currently chosen elements",
        pitfalls: &[
            "Pruning on sum > target is only sound for nonnegative elements",
            "Without a step cap, adversarial input hangs the lesson",
        ],
        edge_cases: &["Empty set with target 0", "Target unreachable", "Step cap reached"],
    },
    PatternInfo {
        key: PatternKey::TriePrefix,
        name: "Trie: Prefix Search",
        summary: "Words share character paths; a prefix walk checks existence",
        time_complexity: "O(total chars)",
        space_complexity: "O(total chars)",
        invariant: "Every root-to-node path spells a prefix of some inserted word",
        pitfalls: &[
            "Confusing prefix existence with whole-word membership",
            "Forgetting end-of-word flags makes word lookup impossible",
        ],
        edge_cases: &["Empty prefix", "Prefix longer than every word", "No words inserted"],
    },
    PatternInfo {
        key: PatternKey::IntervalSchedule,
        name: "Greedy: Interval Scheduling",
        summary: "Sort by finish time; always take the earliest-ending compatible interval",
        time_complexity: "O(n log n)",
        space_complexity: "O(n)",
        invariant: "The accepted set is the maximum-size compatible set over the processed prefix",
        pitfalls: &[
            "Sorting by start or by length breaks the exchange argument",
            "Using > instead of >= rejects back-to-back intervals",
        ],
        edge_cases: &["Empty list", "All intervals overlap", "Back-to-back intervals"],
    },
    PatternInfo {
        key: PatternKey::Dijkstra,
        name: "Dijkstra: Shortest Paths",
        summary: "A min-heap settles nodes in increasing distance order",
        time_complexity: "O((V + E) log V)",
        space_complexity: "O(V + E)",
        invariant: "A node's distance is final the first time it leaves the heap",
        pitfalls: &[
            "Negative edges violate the settled-is-final invariant",
            "Skipping the stale-entry check reprocesses nodes",
        ],
        edge_cases: &["Unreachable nodes", "Start out of range", "Parallel edges"],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_covers_every_pattern_in_order() {
        assert_eq!(CATALOG.len(), PatternKey::all().len());
        for (entry, key) in CATALOG.iter().zip(PatternKey::all()) {
            assert_eq!(entry.key, *key);
        }
    }

    #[test]
    fn parse_round_trips_every_key() {
        for key in PatternKey::all() {
            assert_eq!(PatternKey::parse(key.as_str()), Some(*key));
        }
        assert_eq!(PatternKey::parse("DIJKSTRA"), Some(PatternKey::Dijkstra));
        assert_eq!(PatternKey::parse("nope"), None);
    }

    #[test]
    fn info_lookup_matches_key() {
        for key in PatternKey::all() {
            assert_eq!(pattern_info(*key).key, *key);
        }
    }
}
