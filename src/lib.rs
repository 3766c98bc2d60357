//! # Introduction
//!
//! Algotty runs classic algorithm patterns over small inputs, recording a
//! snapshot of the full working state after every micro-step.  The step
//! history is then navigated forward and backward through a terminal UI
//! built with [ratatui](https://docs.rs/ratatui).
//!
//! ## Simulation pipeline
//!
//! ```text
//! Input text → Parse → Simulate → Steps → Explain → Playback → TUI
//! ```
//!
//! 1. [`parse`] — lenient text-to-input parsers; malformed tokens are
//!    dropped, never fatal.
//! 2. [`sim`] — one simulator per pattern, each pushing
//!    [`trace::Step`]s through a [`trace::Recorder`].
//! 3. [`trace`] — the step-trace model: numbered steps, typed state
//!    snapshots, and field diffing between consecutive steps.
//! 4. [`explain`] — per-step "what happened / why" text, with an optional
//!    deeper register keyed off each state's event tag.
//! 5. [`catalog`] — static metadata for every pattern: complexity,
//!    invariant, pitfalls, edge cases.
//! 6. [`playback`] — flattens a typed simulation into render-ready steps
//!    with precomputed diffs and explanations.
//! 7. [`bench`] — untraced fast variants of each algorithm plus a small
//!    median-of-repeats measurement harness.
//! 8. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! ## Supported patterns
//!
//! Hashing (first duplicate, frequency count), two pointers, sliding
//! window (sum and monotonic-deque max), bracket matching, grid BFS,
//! graph DFS, topological sort, Dijkstra, binary search, memoized
//! Fibonacci, prefix sums with range updates, interval merging and
//! scheduling, heap top-k, union-find, subset-sum backtracking, and
//! trie prefix lookup.

pub mod bench;
pub mod catalog;
pub mod explain;
pub mod parse;
pub mod playback;
pub mod sim;
pub mod trace;
pub mod ui;
