//! Top-k selection with a bounded binary min-heap

use crate::trace::{fmt_list, Field, Recorder, Simulation, StateFields};

/// Event tag for top-k maintenance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopKEvent {
    /// Element sifted up into the heap.
    Push,
    /// Heap outgrew k: minimum popped (sift down from the root).
    Evict,
    /// All elements processed; retained heap sorted descending.
    Done,
    /// k <= 0 or empty input.
    Degenerate,
}

/// Snapshot for one top-k step.
#[derive(Debug, Clone, PartialEq)]
pub struct TopKState {
    pub event: TopKEvent,
    pub value: i64,
    /// Heap array in storage order (index 0 is the minimum).
    pub heap: Vec<i64>,
}

impl StateFields for TopKState {
    fn fields(&self) -> Vec<Field> {
        vec![
            Field::new("value", self.value.to_string()),
            Field::new("heap", fmt_list(&self.heap)),
        ]
    }
}

/// The k largest elements, largest first.
///
/// Every element is pushed into an array-backed 0-indexed min-heap
/// (parent at `(i-1)/2`); whenever the heap exceeds `k` its minimum is
/// evicted, so after the pass the heap holds the k largest. `k <= 0` is an
/// explicit degenerate input.
pub fn simulate_heap_top_k(nums: &[i64], k: i64) -> Simulation<TopKState, Vec<i64>> {
    let mut rec = Recorder::new();

    if k <= 0 || nums.is_empty() {
        rec.push(
            if k <= 0 {
                "k must be positive"
            } else {
                "empty input: nothing to select"
            },
            TopKState {
                event: TopKEvent::Degenerate,
                value: 0,
                heap: Vec::new(),
            },
        );
        return rec.finish(Vec::new());
    }

    let k = k as usize;
    let mut heap: Vec<i64> = Vec::new();

    for &value in nums {
        push_min(&mut heap, value);
        rec.push(
            format!("push {} into the heap", value),
            TopKState {
                event: TopKEvent::Push,
                value,
                heap: heap.clone(),
            },
        );

        if heap.len() > k {
            let evicted = pop_min(&mut heap);
            rec.push(
                format!("heap size {} > k: evict minimum {}", heap.len() + 1, evicted),
                TopKState {
                    event: TopKEvent::Evict,
                    value: evicted,
                    heap: heap.clone(),
                },
            );
        }
    }

    let mut result = heap.clone();
    result.sort_unstable_by(|a, b| b.cmp(a));
    rec.push(
        format!("retained heap sorted descending: {}", fmt_list(&result)),
        TopKState {
            event: TopKEvent::Done,
            value: result[0],
            heap,
        },
    );
    rec.finish(result)
}

fn push_min(heap: &mut Vec<i64>, value: i64) {
    heap.push(value);
    let mut i = heap.len() - 1;
    while i > 0 {
        let parent = (i - 1) / 2;
        if heap[i] < heap[parent] {
            heap.swap(i, parent);
            i = parent;
        } else {
            break;
        }
    }
}

fn pop_min(heap: &mut Vec<i64>) -> i64 {
    let last = heap.len() - 1;
    heap.swap(0, last);
    let top = heap.pop().unwrap();
    let mut i = 0;
    loop {
        let (l, r) = (2 * i + 1, 2 * i + 2);
        let mut smallest = i;
        if l < heap.len() && heap[l] < heap[smallest] {
            smallest = l;
        }
        if r < heap.len() && heap[r] < heap[smallest] {
            smallest = r;
        }
        if smallest == i {
            break;
        }
        heap.swap(i, smallest);
        i = smallest;
    }
    top
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selects_the_k_largest_descending() {
        let sim = simulate_heap_top_k(&[3, 1, 5, 12, 2, 11], 3);
        assert_eq!(sim.result, vec![12, 11, 5]);
    }

    #[test]
    fn size_bound_holds() {
        for k in 1..=6 {
            let nums = [4, 8, 15, 16];
            let sim = simulate_heap_top_k(&nums, k);
            assert_eq!(sim.result.len(), (k as usize).min(nums.len()));
        }
    }

    #[test]
    fn k_nonpositive_is_degenerate() {
        let sim = simulate_heap_top_k(&[1, 2, 3], 0);
        assert!(sim.result.is_empty());
        assert_eq!(sim.steps.len(), 1);
        assert_eq!(sim.steps[0].state.event, TopKEvent::Degenerate);
    }

    #[test]
    fn duplicates_at_the_boundary() {
        let sim = simulate_heap_top_k(&[5, 5, 5, 1], 2);
        assert_eq!(sim.result, vec![5, 5]);
    }

    #[test]
    fn evictions_happen_once_heap_is_full() {
        let sim = simulate_heap_top_k(&[9, 8, 7, 6], 2);
        let evictions = sim
            .steps
            .iter()
            .filter(|s| s.state.event == TopKEvent::Evict)
            .count();
        assert_eq!(evictions, 2);
    }
}
