//! Render-ready playback traces
//!
//! [`PlaybackTrace::build`] erases a typed [`Simulation`] into a flat list of
//! [`PlaybackStep`]s: action label, rendered fields, changed-field names, and
//! both plain and deep explanations, all precomputed. The TUI then scrubs the
//! list at arbitrary positions with no knowledge of any pattern's payload
//! type.
//!
//! This module is also the runtime dispatch point: [`demo_trace`] runs each
//! pattern on a fixed pedagogical input, and [`trace_with_args`] parses raw
//! command-line strings leniently (anything missing or malformed falls back
//! to the demo value — a bad argument should degrade the lesson, not abort
//! it).

use crate::catalog::PatternKey;
use crate::explain::Explain;
use crate::parse;
use crate::trace::{changed_fields, fmt_list, Field, Simulation, StateFields};
use crate::sim;

/// One fully-rendered step.
#[derive(Debug, Clone)]
pub struct PlaybackStep {
    pub seq: usize,
    pub action: String,
    pub fields: Vec<Field>,
    /// Names of fields that differ from the previous step.
    pub changed: Vec<&'static str>,
    pub what: String,
    pub why: String,
    pub deep_what: String,
    pub deep_why: String,
}

/// A type-erased trace ready for the TUI.
#[derive(Debug, Clone)]
pub struct PlaybackTrace {
    pub pattern: PatternKey,
    pub steps: Vec<PlaybackStep>,
    /// Final result rendered as display text.
    pub result: String,
}

impl PlaybackTrace {
    /// Flatten a typed simulation into render-ready steps.
    pub fn build<S, R>(
        pattern: PatternKey,
        sim: Simulation<S, R>,
        render_result: impl FnOnce(&R) -> String,
    ) -> Self
    where
        S: StateFields + Explain,
    {
        let result = render_result(&sim.result);
        let mut steps = Vec::with_capacity(sim.steps.len());
        let mut prev_fields: Option<Vec<Field>> = None;

        for (i, step) in sim.steps.iter().enumerate() {
            let fields = step.state.fields();
            let changed = match &prev_fields {
                Some(prev) => changed_fields(prev, &fields),
                None => fields.iter().map(|f| f.name).collect(),
            };
            let prev_state = i.checked_sub(1).map(|p| &sim.steps[p].state);
            let plain = step.state.explain(prev_state);
            let deep = step.state.explain_deep(prev_state);
            steps.push(PlaybackStep {
                seq: step.seq,
                action: step.action.clone(),
                fields: fields.clone(),
                changed,
                what: plain.what,
                why: plain.why,
                deep_what: deep.what,
                deep_why: deep.why,
            });
            prev_fields = Some(fields);
        }

        PlaybackTrace {
            pattern,
            steps,
            result,
        }
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

/// Run a pattern on its built-in demo input.
pub fn demo_trace(key: PatternKey) -> PlaybackTrace {
    trace_with_args(key, &[])
}

/// Run a pattern on raw argument strings.
///
/// Argument meaning is pattern-specific (see [`usage`]); missing or
/// unparseable arguments fall back to the demo values.
pub fn trace_with_args(key: PatternKey, args: &[String]) -> PlaybackTrace {
    let arg = |i: usize, default: &str| -> String {
        args.get(i)
            .filter(|a| !a.trim().is_empty())
            .cloned()
            .unwrap_or_else(|| default.to_string())
    };
    let int_arg = |i: usize, default: i64| -> i64 {
        args.get(i)
            .and_then(|a| a.trim().parse::<i64>().ok())
            .unwrap_or(default)
    };

    match key {
        PatternKey::HashDuplicate => {
            let nums = parse::parse_int_list(&arg(0, "2,7,11,7,3,11"));
            PlaybackTrace::build(key, sim::hashing::simulate_hash_duplicate(&nums), |r| {
                match r {
                    Some(v) => format!("first duplicate: {}", v),
                    None => "no duplicate".to_string(),
                }
            })
        }
        PatternKey::HashFrequency => {
            let nums = parse::parse_int_list(&arg(0, "5,5,2,5,9,2"));
            PlaybackTrace::build(key, sim::hashing::simulate_hash_frequency(&nums), |r| {
                let body: Vec<String> = r.iter().map(|(v, c)| format!("{}:{}", v, c)).collect();
                format!("{{{}}}", body.join(", "))
            })
        }
        PatternKey::TwoPointers => {
            let nums = parse::parse_int_list(&arg(0, "1,3,5,8,11,14"));
            let target = int_arg(1, 16);
            PlaybackTrace::build(key, sim::two_pointers::simulate_pair_sum(&nums, target), |r| {
                if *r { "pair found".to_string() } else { "no pair".to_string() }
            })
        }
        PatternKey::SlidingWindow => {
            let nums = parse::parse_int_list(&arg(0, "2,1,3,2,1,1,1"));
            let limit = int_arg(1, 5);
            PlaybackTrace::build(key, sim::window::simulate_window_sum(&nums, limit), |r| {
                format!("best window length: {}", r)
            })
        }
        PatternKey::BracketStack => {
            let text = arg(0, "({[]}[])");
            PlaybackTrace::build(key, sim::brackets::simulate_brackets(&text), |r| {
                if *r { "balanced".to_string() } else { "not balanced".to_string() }
            })
        }
        PatternKey::GridBfs => {
            let rows = int_arg(0, 4).max(0) as usize;
            let cols = int_arg(1, 5).max(0) as usize;
            let blocked = parse::parse_cells(&arg(2, "1-1,1-2,2-3"));
            PlaybackTrace::build(
                key,
                sim::grid::simulate_grid_bfs(rows, cols, &blocked, (0, 0)),
                |r| format!("{} reachable cell(s)", r),
            )
        }
        PatternKey::GraphDfs => {
            let node_count = int_arg(0, 6).max(0) as usize;
            let edges = parse::parse_edges(&arg(1, "0-1,0-2,1-3,2-4,3-5"));
            let start = int_arg(2, 0).max(0) as usize;
            PlaybackTrace::build(
                key,
                sim::graph::simulate_graph_dfs(node_count, &edges, start),
                |r| format!("visit order: {:?}", r),
            )
        }
        PatternKey::BinarySearch => {
            let nums = parse::parse_int_list(&arg(0, "1,3,5,7,9,11"));
            let target = int_arg(1, 8);
            PlaybackTrace::build(
                key,
                sim::binary_search::simulate_binary_search(&nums, target),
                |r| format!("insertion point: {}", r),
            )
        }
        PatternKey::FibMemo => {
            let n = int_arg(0, 8);
            PlaybackTrace::build(key, sim::fib::simulate_fib_memo(n), |r| {
                format!("fib = {}", r)
            })
        }
        PatternKey::PrefixSum => {
            let n = int_arg(0, 6).max(0) as usize;
            let updates = parse::parse_range_updates(&arg(1, "0-2-5,1-3-2,4-5-7"));
            let ql = int_arg(2, 1).max(0) as usize;
            let qr = int_arg(3, 4).max(0) as usize;
            PlaybackTrace::build(
                key,
                sim::prefix_sum::simulate_prefix_sum(n, &updates, (ql, qr)),
                |r| format!("range sum: {}", r),
            )
        }
        PatternKey::IntervalMerge => {
            let intervals = parse::parse_intervals(&arg(0, "1-3,2-6,8-10,15-18,6-8"));
            PlaybackTrace::build(
                key,
                sim::intervals::simulate_interval_merge(&intervals),
                |r| format!("{:?}", r),
            )
        }
        PatternKey::HeapTopK => {
            let nums = parse::parse_int_list(&arg(0, "3,1,5,12,2,11,9"));
            let k = int_arg(1, 3);
            PlaybackTrace::build(key, sim::heap_topk::simulate_heap_top_k(&nums, k), |r| {
                format!("top k: {}", fmt_list(r))
            })
        }
        PatternKey::MonotonicDeque => {
            let nums = parse::parse_int_list(&arg(0, "1,3,-1,-3,5,3,6,7"));
            let k = int_arg(1, 3);
            PlaybackTrace::build(key, sim::window::simulate_window_max(&nums, k), |r| {
                format!("window maxima: {}", fmt_list(r))
            })
        }
        PatternKey::TopoSort => {
            let node_count = int_arg(0, 6).max(0) as usize;
            let edges = parse::parse_edges(&arg(1, "0-1,0-2,1-3,2-3,3-4,4-5"));
            PlaybackTrace::build(key, sim::graph::simulate_topo_sort(node_count, &edges), |r| {
                if r.has_cycle {
                    format!("cycle detected; partial order {:?}", r.order)
                } else {
                    format!("order: {:?}", r.order)
                }
            })
        }
        PatternKey::UnionFind => {
            let node_count = int_arg(0, 7).max(0) as usize;
            let unions = parse::parse_edges(&arg(1, "0-1,1-2,3-4,5-6,0-2"));
            PlaybackTrace::build(
                key,
                sim::dsu::simulate_union_find(node_count, &unions),
                |r| format!("{} component(s)", r),
            )
        }
        PatternKey::SubsetSum => {
            let nums = parse::parse_int_list(&arg(0, "3,34,4,12,5,2"));
            let target = int_arg(1, 9);
            PlaybackTrace::build(key, sim::backtrack::simulate_subset_sum(&nums, target), |r| {
                match r {
                    Some(subset) => format!("subset: {}", fmt_list(subset)),
                    None => "no subset found".to_string(),
                }
            })
        }
        PatternKey::TriePrefix => {
            let words = parse::parse_words(&arg(0, "apple,app,ape,bat"));
            let prefix = arg(1, "ap");
            PlaybackTrace::build(
                key,
                sim::trie::simulate_trie_prefix(&words, &prefix),
                |r| {
                    if *r { "prefix exists".to_string() } else { "prefix absent".to_string() }
                },
            )
        }
        PatternKey::IntervalSchedule => {
            let intervals = parse::parse_intervals(&arg(0, "1-4,3-5,0-6,5-7,8-9,5-9"));
            PlaybackTrace::build(
                key,
                sim::intervals::simulate_interval_schedule(&intervals),
                |r| format!("accepted {} interval(s): {:?}", r.len(), r),
            )
        }
        PatternKey::Dijkstra => {
            let node_count = int_arg(0, 6).max(0) as usize;
            let edges = parse::parse_weighted_edges(&arg(1, "0-1-4,0-2-1,2-1-2,1-3-1,3-4-3"));
            let start = int_arg(2, 0).max(0) as usize;
            PlaybackTrace::build(
                key,
                sim::graph::simulate_dijkstra(node_count, &edges, start),
                |r| {
                    let dists: Vec<String> = r
                        .iter()
                        .map(|d| match d {
                            Some(v) => v.to_string(),
                            None => "unreachable".to_string(),
                        })
                        .collect();
                    format!("distances: [{}]", dists.join(", "))
                },
            )
        }
    }
}

/// Pattern-specific positional argument help, shown by the CLI.
pub fn usage(key: PatternKey) -> &'static str {
    match key {
        PatternKey::HashDuplicate => "<nums>              e.g. 2,7,11,7,3,11",
        PatternKey::HashFrequency => "<nums>              e.g. 5,5,2,5,9,2",
        PatternKey::TwoPointers => "<sorted-nums> <target>",
        PatternKey::SlidingWindow => "<nums> <limit>",
        PatternKey::BracketStack => "<text>              e.g. '({[]}[])'",
        PatternKey::GridBfs => "<rows> <cols> <blocked>   blocked e.g. 1-1,1-2",
        PatternKey::GraphDfs => "<nodes> <edges> <start>   edges e.g. 0-1,1-2",
        PatternKey::BinarySearch => "<sorted-nums> <target>",
        PatternKey::FibMemo => "<n>",
        PatternKey::PrefixSum => "<n> <updates> <l> <r>     updates e.g. 0-2-5,1-3-2",
        PatternKey::IntervalMerge => "<intervals>         e.g. 1-3,2-6,8-10",
        PatternKey::HeapTopK => "<nums> <k>",
        PatternKey::MonotonicDeque => "<nums> <k>",
        PatternKey::TopoSort => "<nodes> <edges>           edges are directed u-v",
        PatternKey::UnionFind => "<nodes> <unions>          unions e.g. 0-1,1-2",
        PatternKey::SubsetSum => "<nums> <target>",
        PatternKey::TriePrefix => "<words> <prefix>          words e.g. apple,app,ape",
        PatternKey::IntervalSchedule => "<intervals>         e.g. 1-4,3-5,0-6",
        PatternKey::Dijkstra => "<nodes> <edges> <start>   edges e.g. 0-1-4,0-2-1",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_pattern_has_a_working_demo() {
        for key in PatternKey::all() {
            let trace = demo_trace(*key);
            assert!(!trace.is_empty(), "{} produced an empty trace", key);
            assert!(!trace.result.is_empty());
            for (i, step) in trace.steps.iter().enumerate() {
                assert_eq!(step.seq, i);
            }
        }
    }

    #[test]
    fn malformed_args_fall_back_to_demo_values() {
        let bad = vec!["not numbers at all".to_string(), "x".to_string()];
        let trace = trace_with_args(PatternKey::BinarySearch, &bad);
        // parse_int_list drops everything, the simulator answers for [].
        assert!(!trace.is_empty());
    }

    #[test]
    fn first_step_marks_all_fields_changed() {
        let trace = demo_trace(PatternKey::SlidingWindow);
        assert_eq!(trace.steps[0].changed.len(), trace.steps[0].fields.len());
    }

    #[test]
    fn changed_fields_shrink_after_first_step() {
        let trace = demo_trace(PatternKey::BinarySearch);
        assert!(trace.steps.len() > 1);
        let step = &trace.steps[1];
        assert!(step.changed.len() <= step.fields.len());
    }

    #[test]
    fn demo_traces_are_deterministic() {
        for key in PatternKey::all() {
            let a = demo_trace(*key);
            let b = demo_trace(*key);
            assert_eq!(a.result, b.result);
            assert_eq!(a.len(), b.len());
            for (sa, sb) in a.steps.iter().zip(&b.steps) {
                assert_eq!(sa.action, sb.action);
                assert_eq!(sa.fields, sb.fields);
            }
        }
    }
}
