//! Illustrative local benchmark harness
//!
//! Times the non-tracing [`fast`] variants across a fixed list of increasing
//! input sizes, taking the median of a handful of repeats per size. Paired
//! with a hand-estimated space-growth bucket per pattern family — estimated,
//! not measured.
//!
//! This is deliberately a teaching aid, not rigorous benchmarking: no warm-up
//! phase, no statistical confidence beyond median-of-N. Inputs are produced
//! by a deterministic mixing formula so every run times the same workload.

pub mod fast;

use crate::catalog::PatternKey;
use rustc_hash::FxHashSet;
use std::time::{Duration, Instant};

/// Default input sizes for a run.
pub const DEFAULT_SIZES: [usize; 4] = [100, 500, 2_000, 10_000];

/// Default repeats per size; the median is reported.
pub const DEFAULT_REPEATS: usize = 5;

/// Hand-estimated space-growth family for a pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpaceBucket {
    /// O(1) auxiliary space.
    Constant,
    /// O(n) in the input length.
    Linear,
    /// O(V) or O(V + E) in the graph size.
    Vertices,
    /// O(states explored), potentially exponential.
    States,
}

impl SpaceBucket {
    pub fn label(self) -> &'static str {
        match self {
            SpaceBucket::Constant => "O(1)",
            SpaceBucket::Linear => "O(n)",
            SpaceBucket::Vertices => "O(V)",
            SpaceBucket::States => "O(states)",
        }
    }
}

/// The space bucket a pattern's fast variant falls into.
pub fn space_bucket(key: PatternKey) -> SpaceBucket {
    match key {
        PatternKey::TwoPointers | PatternKey::SlidingWindow | PatternKey::BinarySearch => {
            SpaceBucket::Constant
        }
        PatternKey::HashDuplicate
        | PatternKey::HashFrequency
        | PatternKey::BracketStack
        | PatternKey::FibMemo
        | PatternKey::PrefixSum
        | PatternKey::IntervalMerge
        | PatternKey::HeapTopK
        | PatternKey::MonotonicDeque
        | PatternKey::TriePrefix
        | PatternKey::IntervalSchedule => SpaceBucket::Linear,
        PatternKey::GridBfs
        | PatternKey::GraphDfs
        | PatternKey::TopoSort
        | PatternKey::UnionFind
        | PatternKey::Dijkstra => SpaceBucket::Vertices,
        PatternKey::SubsetSum => SpaceBucket::States,
    }
}

/// One (size, median duration) sample.
#[derive(Debug, Clone, Copy)]
pub struct BenchSample {
    pub size: usize,
    pub median: Duration,
}

/// Full report for one pattern.
#[derive(Debug, Clone)]
pub struct BenchReport {
    pub pattern: PatternKey,
    pub samples: Vec<BenchSample>,
    pub space: SpaceBucket,
}

/// Time one pattern's fast variant over the given sizes.
pub fn run_benchmark(key: PatternKey, sizes: &[usize], repeats: usize) -> BenchReport {
    let repeats = repeats.max(1);
    let mut samples = Vec::with_capacity(sizes.len());
    for &size in sizes {
        let mut durations: Vec<Duration> = (0..repeats)
            .map(|_| {
                let start = Instant::now();
                run_fast_once(key, size);
                start.elapsed()
            })
            .collect();
        durations.sort_unstable();
        samples.push(BenchSample {
            size,
            median: durations[durations.len() / 2],
        });
    }
    BenchReport {
        pattern: key,
        samples,
        space: space_bucket(key),
    }
}

/// Benchmark every pattern at the default sizes and repeats.
pub fn run_all() -> Vec<BenchReport> {
    PatternKey::all()
        .iter()
        .map(|&key| run_benchmark(key, &DEFAULT_SIZES, DEFAULT_REPEATS))
        .collect()
}

/// Deterministic value mixer (SplitMix-style) for workload generation.
fn mix(i: u64) -> u64 {
    let mut x = i.wrapping_mul(0x9e37_79b9_7f4a_7c15).wrapping_add(0x2545_f491_4f6c_dd1d);
    x ^= x >> 30;
    x.wrapping_mul(0xbf58_476d_1ce4_e5b9)
}

fn gen_nums(size: usize) -> Vec<i64> {
    (0..size).map(|i| (mix(i as u64) % 10_000) as i64).collect()
}

fn gen_sorted(size: usize) -> Vec<i64> {
    let mut nums = gen_nums(size);
    nums.sort_unstable();
    nums
}

/// Ring edges plus deterministic chords: connected, ~2n edges.
fn gen_edges(size: usize) -> Vec<(usize, usize)> {
    let n = size.max(2);
    let mut edges: Vec<(usize, usize)> = (0..n).map(|i| (i, (i + 1) % n)).collect();
    edges.extend((0..n / 2).map(|i| (i, (mix(i as u64) as usize) % n)));
    edges
}

/// Run one pattern's fast variant on a deterministic workload of `size`.
pub fn run_fast_once(key: PatternKey, size: usize) {
    match key {
        PatternKey::HashDuplicate => {
            let nums = gen_nums(size);
            let _ = fast::hash_duplicate(&nums);
        }
        PatternKey::HashFrequency => {
            let nums = gen_nums(size);
            let _ = fast::hash_frequency(&nums);
        }
        PatternKey::TwoPointers => {
            let nums = gen_sorted(size);
            let _ = fast::pair_sum(&nums, 1); // unlikely target: full walk
        }
        PatternKey::SlidingWindow => {
            let nums = gen_nums(size);
            let _ = fast::window_sum(&nums, 25_000);
        }
        PatternKey::BracketStack => {
            let mut text = "(".repeat(size / 2);
            text.push_str(&")".repeat(size / 2));
            let _ = fast::brackets(&text);
        }
        PatternKey::GridBfs => {
            // Square grid with area ~size.
            let side = (size as f64).sqrt() as usize + 1;
            let blocked: FxHashSet<(usize, usize)> =
                (0..side / 4).map(|i| (i, side / 2)).collect();
            let _ = fast::grid_bfs(side, side, &blocked);
        }
        PatternKey::GraphDfs => {
            let edges = gen_edges(size);
            let _ = fast::graph_dfs(size.max(2), &edges, 0);
        }
        PatternKey::BinarySearch => {
            let nums = gen_sorted(size);
            let _ = fast::binary_search(&nums, 5_000);
        }
        PatternKey::FibMemo => {
            // Recursion depth, not array length; i64 overflows past fib(92).
            let _ = fast::fib_memo((size as i64).min(90));
        }
        PatternKey::PrefixSum => {
            let updates: Vec<(usize, usize, i64)> = (0..size)
                .map(|i| {
                    let l = (mix(i as u64) as usize) % size;
                    (l, (l + 10).min(size - 1), 3)
                })
                .collect();
            let _ = fast::prefix_sum(size, &updates, (0, size - 1));
        }
        PatternKey::IntervalMerge => {
            let intervals: Vec<(i64, i64)> = (0..size)
                .map(|i| {
                    let s = (mix(i as u64) % 100_000) as i64;
                    (s, s + 50)
                })
                .collect();
            let _ = fast::interval_merge(&intervals);
        }
        PatternKey::HeapTopK => {
            let nums = gen_nums(size);
            let _ = fast::heap_top_k(&nums, 10);
        }
        PatternKey::MonotonicDeque => {
            let nums = gen_nums(size);
            let _ = fast::window_max(&nums, 16.min(size.max(1)));
        }
        PatternKey::TopoSort => {
            // Forward-only chords keep the graph acyclic.
            let edges: Vec<(usize, usize)> = (0..size.saturating_sub(1))
                .map(|i| (i, i + 1))
                .chain((0..size / 2).filter_map(|i| {
                    let j = i + 1 + (mix(i as u64) as usize) % 10;
                    (j < size).then_some((i, j))
                }))
                .collect();
            let _ = fast::topo_sort(size, &edges);
        }
        PatternKey::UnionFind => {
            let unions: Vec<(usize, usize)> = (0..size)
                .map(|i| (i % size.max(1), (mix(i as u64) as usize) % size.max(1)))
                .collect();
            let _ = fast::union_find(size.max(1), &unions);
        }
        PatternKey::SubsetSum => {
            // Zeros never match or overshoot target 1, so the search explores
            // the full tree and the node cap (size) is the binding bound.
            let nums = vec![0i64; 24];
            let _ = fast::subset_sum(&nums, 1, size);
        }
        PatternKey::TriePrefix => {
            let words: Vec<String> = (0..size)
                .map(|i| format!("w{:08x}", mix(i as u64) as u32))
                .collect();
            let _ = fast::trie_prefix(&words, "w0");
        }
        PatternKey::IntervalSchedule => {
            let intervals: Vec<(i64, i64)> = (0..size)
                .map(|i| {
                    let s = (mix(i as u64) % 100_000) as i64;
                    (s, s + 30)
                })
                .collect();
            let _ = fast::interval_schedule(&intervals);
        }
        PatternKey::Dijkstra => {
            let edges: Vec<(usize, usize, i64)> = gen_edges(size)
                .into_iter()
                .enumerate()
                .map(|(i, (u, v))| (u, v, (mix(i as u64) % 100) as i64))
                .collect();
            let _ = fast::dijkstra(size.max(2), &edges, 0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_pattern_has_a_space_bucket() {
        for key in PatternKey::all() {
            let _ = space_bucket(*key);
        }
    }

    #[test]
    fn benchmark_produces_one_sample_per_size() {
        let report = run_benchmark(PatternKey::BinarySearch, &[10, 50], 3);
        assert_eq!(report.samples.len(), 2);
        assert_eq!(report.samples[0].size, 10);
        assert_eq!(report.samples[1].size, 50);
    }

    #[test]
    fn workload_generation_is_deterministic() {
        assert_eq!(gen_nums(32), gen_nums(32));
        assert_eq!(gen_edges(32), gen_edges(32));
    }

    #[test]
    fn every_pattern_runs_at_a_small_size() {
        for key in PatternKey::all() {
            run_fast_once(*key, 16);
        }
    }
}
