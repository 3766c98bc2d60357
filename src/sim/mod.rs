//! The pattern simulation engine
//!
//! One pure function per algorithm pattern. Each simulator maps typed inputs
//! to a [`Simulation`](crate::trace::Simulation): an ordered, replayable trace
//! of state snapshots plus a final result.
//!
//! # Shared contract
//!
//! - **Deterministic**: identical inputs produce identical traces, every call.
//!   No randomness, no clocks, no I/O.
//! - **Total**: degenerate inputs (empty array, zero nodes, out-of-range
//!   start, k <= 0) short-circuit with a single explanatory step and a
//!   sentinel result rather than panicking or returning an error.
//! - **Self-contained**: every internal structure (adjacency lists, heaps,
//!   visited sets, memo tables) is allocated at call start and dropped at
//!   return; nothing is shared across invocations.
//! - **Replayable**: each step snapshots enough state for a UI to render a
//!   visual diff against the previous step without re-running the algorithm.
//!
//! Step payloads are closed per-pattern types carrying an event tag plus
//! snapshot fields; the [`explain`](crate::explain) layer matches on the tag.

pub mod backtrack;
pub mod binary_search;
pub mod brackets;
pub mod dsu;
pub mod fib;
pub mod graph;
pub mod grid;
pub mod hashing;
pub mod heap_topk;
pub mod intervals;
pub mod prefix_sum;
pub mod trie;
pub mod two_pointers;
pub mod window;
