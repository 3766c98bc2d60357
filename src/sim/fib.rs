//! Top-down memoized Fibonacci

use crate::trace::{Field, Recorder, Simulation, StateFields};
use rustc_hash::FxHashMap;

/// Event tag for the memoized recursion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FibEvent {
    /// Entered fib(n).
    Call,
    /// n <= 1: answered directly.
    BaseCase,
    /// Answer found in the memo table.
    MemoHit,
    /// Computed answer stored into the memo table.
    Store,
    /// Negative or overflowing input.
    Degenerate,
}

/// Largest `n` whose Fibonacci number fits in an `i64`; fib(93) overflows.
pub const MAX_FIB_N: i64 = 92;

/// Snapshot for one memoized-Fibonacci step.
#[derive(Debug, Clone, PartialEq)]
pub struct FibState {
    pub event: FibEvent,
    pub n: i64,
    pub value: i64,
    /// Memo table rendered sorted by key.
    pub memo: Vec<(i64, i64)>,
    /// Current recursion depth.
    pub depth: usize,
}

impl StateFields for FibState {
    fn fields(&self) -> Vec<Field> {
        let memo: Vec<String> = self
            .memo
            .iter()
            .map(|(k, v)| format!("{}:{}", k, v))
            .collect();
        vec![
            Field::new("n", self.n.to_string()),
            Field::new("value", self.value.to_string()),
            Field::new("memo", format!("{{{}}}", memo.join(", "))),
            Field::new("depth", self.depth.to_string()),
        ]
    }
}

/// Memoized fib(n) via top-down recursion.
///
/// Records call, base-case, memo-hit, and store events so the playback shows
/// exactly which subproblems were recomputed (none) versus looked up.
/// Negative `n`, or `n` past [`MAX_FIB_N`], is an input error answered with
/// the sentinel `-1`, one step, no panic.
pub fn simulate_fib_memo(n: i64) -> Simulation<FibState, i64> {
    let mut rec = Recorder::new();

    if !(0..=MAX_FIB_N).contains(&n) {
        rec.push(
            if n < 0 {
                format!("fib({}) is undefined for negative n", n)
            } else {
                format!("fib({}) does not fit in an i64", n)
            },
            FibState {
                event: FibEvent::Degenerate,
                n,
                value: -1,
                memo: Vec::new(),
                depth: 0,
            },
        );
        return rec.finish(-1);
    }

    let mut memo: FxHashMap<i64, i64> = FxHashMap::default();

    fn fib(
        n: i64,
        depth: usize,
        memo: &mut FxHashMap<i64, i64>,
        rec: &mut Recorder<FibState>,
    ) -> i64 {
        rec.push(
            format!("call fib({})", n),
            FibState {
                event: FibEvent::Call,
                n,
                value: 0,
                memo: sorted_memo(memo),
                depth,
            },
        );

        if n <= 1 {
            rec.push(
                format!("fib({}) = {}: base case", n, n),
                FibState {
                    event: FibEvent::BaseCase,
                    n,
                    value: n,
                    memo: sorted_memo(memo),
                    depth,
                },
            );
            return n;
        }

        if let Some(&cached) = memo.get(&n) {
            rec.push(
                format!("fib({}) = {}: memo hit", n, cached),
                FibState {
                    event: FibEvent::MemoHit,
                    n,
                    value: cached,
                    memo: sorted_memo(memo),
                    depth,
                },
            );
            return cached;
        }

        let value = fib(n - 1, depth + 1, memo, rec) + fib(n - 2, depth + 1, memo, rec);
        memo.insert(n, value);
        rec.push(
            format!("store fib({}) = {}", n, value),
            FibState {
                event: FibEvent::Store,
                n,
                value,
                memo: sorted_memo(memo),
                depth,
            },
        );
        value
    }

    let result = fib(n, 0, &mut memo, &mut rec);
    rec.finish(result)
}

fn sorted_memo(memo: &FxHashMap<i64, i64>) -> Vec<(i64, i64)> {
    let mut out: Vec<(i64, i64)> = memo.iter().map(|(&k, &v)| (k, v)).collect();
    out.sort_unstable();
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_values() {
        assert_eq!(simulate_fib_memo(0).result, 0);
        assert_eq!(simulate_fib_memo(1).result, 1);
        assert_eq!(simulate_fib_memo(10).result, 55);
    }

    #[test]
    fn negative_n_is_a_sentinel_not_a_panic() {
        let sim = simulate_fib_memo(-3);
        assert_eq!(sim.result, -1);
        assert_eq!(sim.steps.len(), 1);
        assert_eq!(sim.steps[0].state.event, FibEvent::Degenerate);
    }

    #[test]
    fn overflowing_n_is_a_sentinel_not_a_panic() {
        let sim = simulate_fib_memo(MAX_FIB_N + 1);
        assert_eq!(sim.result, -1);
        assert_eq!(sim.steps.len(), 1);
        assert_eq!(sim.steps[0].state.event, FibEvent::Degenerate);
    }

    #[test]
    fn largest_representable_n_still_computes() {
        assert_eq!(simulate_fib_memo(MAX_FIB_N).result, 7_540_113_804_746_346_429);
    }

    #[test]
    fn memo_keeps_the_call_count_linear() {
        let sim = simulate_fib_memo(12);
        let calls = sim
            .steps
            .iter()
            .filter(|s| s.state.event == FibEvent::Call)
            .count();
        // Each n in 2..=12 is computed once; its sibling call is a memo hit.
        assert!(calls <= 2 * 12);
        assert!(sim
            .steps
            .iter()
            .any(|s| s.state.event == FibEvent::MemoHit));
    }

    #[test]
    fn stores_happen_bottom_up() {
        let sim = simulate_fib_memo(5);
        let stores: Vec<i64> = sim
            .steps
            .iter()
            .filter(|s| s.state.event == FibEvent::Store)
            .map(|s| s.state.n)
            .collect();
        assert_eq!(stores, vec![2, 3, 4, 5]);
    }
}
