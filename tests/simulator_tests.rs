// Integration tests for the pattern simulators

use algotty::sim::{
    backtrack, binary_search, brackets, dsu, fib, graph, grid, hashing, heap_topk, intervals,
    prefix_sum, trie, two_pointers, window,
};
use rustc_hash::FxHashSet;

#[test]
fn test_first_duplicate_scan_order() {
    let sim = hashing::simulate_hash_duplicate(&[2, 7, 11, 7, 3, 11]);
    // 7 repeats before 11 does, so it wins regardless of value order.
    assert_eq!(sim.result, Some(7));
}

#[test]
fn test_frequency_counts_whole_input() {
    let sim = hashing::simulate_hash_frequency(&[5, 5, 2, 5, 9, 2]);
    let counts = sim.result;
    assert!(counts.contains(&(5, 3)));
    assert!(counts.contains(&(2, 2)));
    assert!(counts.contains(&(9, 1)));
}

#[test]
fn test_pair_sum_on_sorted_input() {
    assert!(two_pointers::simulate_pair_sum(&[1, 3, 4, 6, 8, 11], 10).result);
    assert!(!two_pointers::simulate_pair_sum(&[1, 3, 4, 6, 8, 11], 2).result);
    assert!(!two_pointers::simulate_pair_sum(&[5], 10).result);
}

#[test]
fn test_window_sum_against_brute_force() {
    let nums = [2, 1, 3, 2, 1, 1, 1];
    let limit = 5;
    let sim = window::simulate_window_sum(&nums, limit);

    let mut best = 0;
    for i in 0..nums.len() {
        let mut sum = 0;
        for j in i..nums.len() {
            sum += nums[j];
            if sum <= limit {
                best = best.max(j - i + 1);
            }
        }
    }
    assert_eq!(sim.result, best);
}

#[test]
fn test_window_max_classic_case() {
    let sim = window::simulate_window_max(&[1, 3, -1, -3, 5, 3, 6, 7], 3);
    assert_eq!(sim.result, vec![3, 3, 5, 5, 6, 7]);
}

#[test]
fn test_bracket_matching() {
    assert!(brackets::simulate_brackets("({[]}[])").result);
    assert!(brackets::simulate_brackets("").result);
    assert!(!brackets::simulate_brackets("([)]").result);
    assert!(!brackets::simulate_brackets("(((").result);
    assert!(!brackets::simulate_brackets(")").result);
}

#[test]
fn test_grid_bfs_counts_reachable_component() {
    // 3x4 grid with a wall splitting off the rightmost column.
    let mut blocked = FxHashSet::default();
    blocked.insert((0, 2));
    blocked.insert((1, 2));
    blocked.insert((2, 2));
    let sim = grid::simulate_grid_bfs(3, 4, &blocked, (0, 0));
    // Left 3x2 block is reachable, the wall and the column behind it are not.
    assert_eq!(sim.result, 6);
}

#[test]
fn test_grid_bfs_blocked_start() {
    let mut blocked = FxHashSet::default();
    blocked.insert((0, 0));
    let sim = grid::simulate_grid_bfs(2, 2, &blocked, (0, 0));
    assert_eq!(sim.result, 0);
}

#[test]
fn test_dfs_visits_each_reachable_node_once() {
    let edges = [(0, 1), (0, 2), (1, 3), (2, 3), (4, 5)];
    let sim = graph::simulate_graph_dfs(6, &edges, 0);
    let order = sim.result;
    assert_eq!(order.len(), 4);
    let distinct: FxHashSet<usize> = order.iter().copied().collect();
    assert_eq!(distinct.len(), 4);
    assert!(!order.contains(&4));
    assert_eq!(order[0], 0);
}

#[test]
fn test_binary_search_lower_bound_law() {
    let nums = [1, 2, 2, 2, 4, 5];
    for target in 0..7 {
        let idx = binary_search::simulate_binary_search(&nums, target).result;
        assert!(nums[..idx].iter().all(|&v| v < target));
        assert!(nums[idx..].iter().all(|&v| v >= target));
    }
    assert_eq!(binary_search::simulate_binary_search(&nums, 2).result, 1);
    assert_eq!(binary_search::simulate_binary_search(&nums, 6).result, 6);
}

#[test]
fn test_fib_memo_values() {
    assert_eq!(fib::simulate_fib_memo(0).result, 0);
    assert_eq!(fib::simulate_fib_memo(1).result, 1);
    assert_eq!(fib::simulate_fib_memo(10).result, 55);
    assert_eq!(fib::simulate_fib_memo(-3).result, -1);
}

#[test]
fn test_fib_memo_linear_call_count() {
    // Memoization keeps the trace linear in n, not exponential.
    let sim = fib::simulate_fib_memo(20);
    assert!(sim.steps.len() < 200);
}

#[test]
fn test_prefix_sum_range_query() {
    let updates = [(1, 3, 2), (2, 5, -1)];
    let sim = prefix_sum::simulate_prefix_sum(6, &updates, (2, 4));
    // diffs: idx1..3 get +2, idx2..5 get -1 => values [0,2,1,1,-1,-1]
    assert_eq!(sim.result, 1);
}

#[test]
fn test_prefix_sum_clamps_and_normalizes() {
    let updates = [(0, 99, 1)];
    let sim = prefix_sum::simulate_prefix_sum(4, &updates, (3, 1));
    // update clamps to the whole array, query normalizes to (1, 3)
    assert_eq!(sim.result, 3);
}

#[test]
fn test_interval_merge_is_idempotent() {
    let intervals = [(8, 10), (1, 3), (2, 6), (15, 18), (6, 7)];
    let merged = intervals::simulate_interval_merge(&intervals).result;
    assert_eq!(merged, vec![(1, 7), (8, 10), (15, 18)]);
    let again = intervals::simulate_interval_merge(&merged).result;
    assert_eq!(again, merged);
}

#[test]
fn test_interval_merge_touching_endpoints() {
    let merged = intervals::simulate_interval_merge(&[(1, 4), (4, 5)]).result;
    assert_eq!(merged, vec![(1, 5)]);
}

#[test]
fn test_interval_schedule_accepts_back_to_back() {
    let accepted = intervals::simulate_interval_schedule(&[(1, 2), (2, 3), (3, 4), (1, 3)]).result;
    assert_eq!(accepted, vec![(1, 2), (2, 3), (3, 4)]);
}

#[test]
fn test_heap_top_k_descending() {
    let sim = heap_topk::simulate_heap_top_k(&[5, 1, 9, 3, 7, 2, 8], 3);
    assert_eq!(sim.result, vec![9, 8, 7]);
}

#[test]
fn test_heap_top_k_larger_than_input() {
    let sim = heap_topk::simulate_heap_top_k(&[4, 2], 10);
    assert_eq!(sim.result, vec![4, 2]);
}

#[test]
fn test_topo_sort_respects_edges() {
    let edges = [(0, 1), (0, 2), (1, 3), (2, 3)];
    let out = graph::simulate_topo_sort(4, &edges).result;
    assert!(!out.has_cycle);
    assert_eq!(out.order.len(), 4);
    let pos = |n: usize| out.order.iter().position(|&x| x == n).unwrap();
    for &(u, v) in &edges {
        assert!(pos(u) < pos(v));
    }
}

#[test]
fn test_topo_sort_reports_cycle() {
    let out = graph::simulate_topo_sort(4, &[(0, 1), (1, 2), (2, 0), (2, 3)]).result;
    assert!(out.has_cycle);
    assert!(out.order.len() < 4);
}

#[test]
fn test_union_find_component_count() {
    let sim = dsu::simulate_union_find(6, &[(0, 1), (1, 2), (3, 4)]);
    assert_eq!(sim.result, 3);
}

#[test]
fn test_union_find_redundant_union_is_noop() {
    let sim = dsu::simulate_union_find(3, &[(0, 1), (1, 0), (0, 1)]);
    assert_eq!(sim.result, 2);
}

#[test]
fn test_subset_sum_first_solution_in_dfs_order() {
    let sim = backtrack::simulate_subset_sum(&[3, 34, 4, 12, 5, 2], 9);
    // include-first exploration finds 3+4+2 before 4+5.
    assert_eq!(sim.result, Some(vec![3, 4, 2]));
}

#[test]
fn test_subset_sum_no_solution() {
    let sim = backtrack::simulate_subset_sum(&[2, 4, 6], 5);
    assert_eq!(sim.result, None);
}

#[test]
fn test_subset_sum_cap_bounds_trace() {
    let nums = vec![2; 24];
    let sim = backtrack::simulate_subset_sum_capped(&nums, 1, 50);
    assert_eq!(sim.result, None);
    assert!(sim.steps.len() <= 60);
}

#[test]
fn test_trie_prefix_lookup() {
    let words: Vec<String> = ["apple", "app", "apt"].iter().map(|s| s.to_string()).collect();
    assert!(trie::simulate_trie_prefix(&words, "ap").result);
    assert!(trie::simulate_trie_prefix(&words, "apple").result);
    assert!(!trie::simulate_trie_prefix(&words, "apex").result);
    assert!(trie::simulate_trie_prefix(&words, "").result);
}

#[test]
fn test_trie_empty_word_list() {
    assert!(trie::simulate_trie_prefix(&[], "").result);
    assert!(!trie::simulate_trie_prefix(&[], "a").result);
}

#[test]
fn test_dijkstra_shortest_paths() {
    let edges = [(0, 1, 4), (0, 2, 1), (2, 1, 2), (1, 3, 1), (3, 4, 3)];
    let dist = graph::simulate_dijkstra(5, &edges, 0).result;
    assert_eq!(dist, vec![Some(0), Some(3), Some(1), Some(4), Some(7)]);
}

#[test]
fn test_dijkstra_unreachable_nodes() {
    let edges = [(0, 1, 2), (1, 2, 2), (3, 5, 1)];
    let dist = graph::simulate_dijkstra(7, &edges, 0).result;
    assert_eq!(dist[4], None);
    assert_eq!(dist[6], None);
    assert_eq!(dist[2], Some(4));
}

#[test]
fn test_dijkstra_drops_negative_edges() {
    let edges = [(0, 1, 5), (0, 1, -2)];
    let dist = graph::simulate_dijkstra(2, &edges, 0).result;
    // the negative edge is filtered, not applied
    assert_eq!(dist[1], Some(5));
}
