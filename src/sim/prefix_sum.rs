//! Difference-array range updates answered through a prefix-sum array

use crate::trace::{fmt_list, Field, Recorder, Simulation, StateFields};

/// Event tag for the difference-array pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefixSumEvent {
    /// One range update applied as two point updates on the diff array.
    ApplyUpdate,
    /// Adjusted array rebuilt from the diff array by running sum.
    Rebuild,
    /// Prefix-sum array built over the adjusted array.
    BuildPrefix,
    /// Range-sum query answered from the prefix array.
    Answer,
    /// Zero-length array.
    Degenerate,
}

/// Snapshot for one difference-array step.
#[derive(Debug, Clone, PartialEq)]
pub struct PrefixSumState {
    pub event: PrefixSumEvent,
    /// Difference array (length n + 1).
    pub diff: Vec<i64>,
    /// Adjusted array after the rebuild phase (empty before it).
    pub values: Vec<i64>,
    /// Prefix-sum array (empty before the build phase).
    pub prefix: Vec<i64>,
    /// Query bounds, clamped and order-normalized.
    pub query: (usize, usize),
    pub answer: i64,
}

impl StateFields for PrefixSumState {
    fn fields(&self) -> Vec<Field> {
        vec![
            Field::new("diff", fmt_list(&self.diff)),
            Field::new("values", fmt_list(&self.values)),
            Field::new("prefix", fmt_list(&self.prefix)),
            Field::new("query", format!("[{}, {}]", self.query.0, self.query.1)),
            Field::new("answer", self.answer.to_string()),
        ]
    }
}

/// Apply range updates to a zero-initialized array of length `n` via a
/// difference array, then answer one inclusive range-sum query.
///
/// Each update `(l, r, delta)` becomes `diff[l] += delta; diff[r+1] -= delta`
/// with both indices clamped into `[0, n]`. The adjusted array is rebuilt by
/// running sum, a prefix array is built over it, and the query is answered as
/// `prefix[r] - prefix[l-1]`. Query bounds are clamped and order-normalized.
pub fn simulate_prefix_sum(
    n: usize,
    updates: &[(usize, usize, i64)],
    query: (usize, usize),
) -> Simulation<PrefixSumState, i64> {
    let mut rec = Recorder::new();

    if n == 0 {
        rec.push(
            "zero-length array: nothing to update or query",
            PrefixSumState {
                event: PrefixSumEvent::Degenerate,
                diff: Vec::new(),
                values: Vec::new(),
                prefix: Vec::new(),
                query: (0, 0),
                answer: 0,
            },
        );
        return rec.finish(0);
    }

    let mut diff = vec![0i64; n + 1];
    for &(l, r, delta) in updates {
        let (lo, hi) = (l.min(r), l.max(r));
        let lo = lo.min(n);
        let hi_plus = (hi + 1).min(n);
        diff[lo] += delta;
        diff[hi_plus] -= delta;
        rec.push(
            format!("apply [{}..={}] += {}", lo, hi.min(n.saturating_sub(1)), delta),
            PrefixSumState {
                event: PrefixSumEvent::ApplyUpdate,
                diff: diff.clone(),
                values: Vec::new(),
                prefix: Vec::new(),
                query: (0, 0),
                answer: 0,
            },
        );
    }

    let mut values = vec![0i64; n];
    let mut running = 0i64;
    for i in 0..n {
        running += diff[i];
        values[i] = running;
    }
    rec.push(
        "rebuild adjusted array by running sum",
        PrefixSumState {
            event: PrefixSumEvent::Rebuild,
            diff: diff.clone(),
            values: values.clone(),
            prefix: Vec::new(),
            query: (0, 0),
            answer: 0,
        },
    );

    let mut prefix = vec![0i64; n];
    let mut acc = 0i64;
    for i in 0..n {
        acc += values[i];
        prefix[i] = acc;
    }
    rec.push(
        "build prefix-sum array",
        PrefixSumState {
            event: PrefixSumEvent::BuildPrefix,
            diff: diff.clone(),
            values: values.clone(),
            prefix: prefix.clone(),
            query: (0, 0),
            answer: 0,
        },
    );

    let (ql, qr) = (query.0.min(query.1), query.0.max(query.1));
    let (ql, qr) = (ql.min(n - 1), qr.min(n - 1));
    let answer = prefix[qr] - if ql > 0 { prefix[ql - 1] } else { 0 };
    rec.push(
        format!("sum of [{}..={}] = {}", ql, qr, answer),
        PrefixSumState {
            event: PrefixSumEvent::Answer,
            diff,
            values,
            prefix,
            query: (ql, qr),
            answer,
        },
    );
    rec.finish(answer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn updates_then_query() {
        // [0..=2] += 5, [1..=3] += 2 over n = 5 gives [5, 7, 7, 2, 0].
        let sim = simulate_prefix_sum(5, &[(0, 2, 5), (1, 3, 2)], (1, 3));
        assert_eq!(sim.result, 7 + 7 + 2);
    }

    #[test]
    fn update_spanning_whole_array() {
        let sim = simulate_prefix_sum(4, &[(0, 3, 1)], (0, 3));
        assert_eq!(sim.result, 4);
    }

    #[test]
    fn out_of_range_update_indices_are_clamped() {
        let sim = simulate_prefix_sum(3, &[(0, 99, 2)], (0, 2));
        assert_eq!(sim.result, 6);
    }

    #[test]
    fn query_is_order_normalized_and_clamped() {
        let sim = simulate_prefix_sum(4, &[(0, 3, 3)], (9, 1));
        // Normalizes to [1..=3].
        assert_eq!(sim.result, 9);
    }

    #[test]
    fn zero_length_array_short_circuits() {
        let sim = simulate_prefix_sum(0, &[(0, 1, 5)], (0, 0));
        assert_eq!(sim.result, 0);
        assert_eq!(sim.steps.len(), 1);
    }

    #[test]
    fn negative_deltas_cancel() {
        let sim = simulate_prefix_sum(3, &[(0, 2, 4), (0, 2, -4)], (0, 2));
        assert_eq!(sim.result, 0);
    }
}
