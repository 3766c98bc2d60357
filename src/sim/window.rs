//! Sliding windows: longest sum-bounded window and monotonic-deque maximum

use crate::trace::{fmt_indices, Field, Recorder, Simulation, StateFields};
use std::collections::VecDeque;

/// Event tag for the sum-bounded window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowSumEvent {
    /// Right edge grew by one element.
    Expand,
    /// Left edge advanced because the sum exceeded the limit.
    Shrink,
    /// A new best window length was recorded.
    Update,
    /// Scan finished.
    Done,
    /// Empty input.
    Degenerate,
}

/// Snapshot for one sum-bounded window step.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowSumState {
    pub event: WindowSumEvent,
    pub left: usize,
    pub right: usize,
    pub sum: i64,
    pub limit: i64,
    pub best: usize,
}

impl StateFields for WindowSumState {
    fn fields(&self) -> Vec<Field> {
        vec![
            Field::new("left", self.left.to_string()),
            Field::new("right", self.right.to_string()),
            Field::new("sum", self.sum.to_string()),
            Field::new("limit", self.limit.to_string()),
            Field::new("best", self.best.to_string()),
        ]
    }
}

/// Longest contiguous window whose sum stays within `limit`.
///
/// Classic grow/shrink walk: the right edge expands one element per outer
/// iteration, then the left edge shrinks while the sum overflows. The best
/// length updates only while `left <= right`, so each of the three phases
/// (expand, shrink, update) is a separate recorded step. Assumes nonnegative
/// elements for the shrink argument to be sound.
pub fn simulate_window_sum(nums: &[i64], limit: i64) -> Simulation<WindowSumState, usize> {
    let mut rec = Recorder::new();

    if nums.is_empty() {
        rec.push(
            "empty input: no window exists",
            WindowSumState {
                event: WindowSumEvent::Degenerate,
                left: 0,
                right: 0,
                sum: 0,
                limit,
                best: 0,
            },
        );
        return rec.finish(0);
    }

    let mut left = 0usize;
    let mut sum = 0i64;
    let mut best = 0usize;

    for right in 0..nums.len() {
        sum += nums[right];
        rec.push(
            format!("expand right to {}: window sum {}", right, sum),
            WindowSumState {
                event: WindowSumEvent::Expand,
                left,
                right,
                sum,
                limit,
                best,
            },
        );

        while sum > limit && left <= right {
            sum -= nums[left];
            left += 1;
            rec.push(
                format!("sum {} exceeds {}: shrink left to {}", sum + nums[left - 1], limit, left),
                WindowSumState {
                    event: WindowSumEvent::Shrink,
                    left,
                    right,
                    sum,
                    limit,
                    best,
                },
            );
        }

        if left <= right && right - left + 1 > best {
            best = right - left + 1;
            rec.push(
                format!("new best window length {}", best),
                WindowSumState {
                    event: WindowSumEvent::Update,
                    left,
                    right,
                    sum,
                    limit,
                    best,
                },
            );
        }
    }

    rec.push(
        format!("scan complete: best window length {}", best),
        WindowSumState {
            event: WindowSumEvent::Done,
            left,
            right: nums.len() - 1,
            sum,
            limit,
            best,
        },
    );
    rec.finish(best)
}

/// Event tag for the monotonic-deque window maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DequeEvent {
    /// Front index fell out of the window and was evicted.
    EvictFront,
    /// Tail indices with values <= current were popped.
    PopTail,
    /// Current index pushed onto the back.
    Push,
    /// Window is full: front of the deque is the window maximum.
    Emit,
    /// Empty input or k <= 0.
    Degenerate,
}

/// Snapshot for one deque step.
#[derive(Debug, Clone, PartialEq)]
pub struct DequeState {
    pub event: DequeEvent,
    pub index: usize,
    /// Deque contents, front first. Indices, not values.
    pub deque: Vec<usize>,
    /// Window maxima emitted so far.
    pub maxima: Vec<i64>,
}

impl StateFields for DequeState {
    fn fields(&self) -> Vec<Field> {
        vec![
            Field::new("index", self.index.to_string()),
            Field::new("deque", fmt_indices(&self.deque)),
            Field::new("maxima", crate::trace::fmt_list(&self.maxima)),
        ]
    }
}

/// Sliding window maximum via a monotonic deque of indices.
///
/// The deque stores indices whose values decrease front to back. Fronts
/// outside `[i-k+1, i]` are evicted; tails with values `<=` the incoming
/// value are popped (ties are popped, keeping the deque weakly decreasing).
/// Once `i >= k-1` the front index holds the window maximum.
pub fn simulate_window_max(nums: &[i64], k: i64) -> Simulation<DequeState, Vec<i64>> {
    let mut rec = Recorder::new();

    if nums.is_empty() || k <= 0 {
        rec.push(
            if k <= 0 {
                "window size must be positive"
            } else {
                "empty input: no windows"
            },
            DequeState {
                event: DequeEvent::Degenerate,
                index: 0,
                deque: Vec::new(),
                maxima: Vec::new(),
            },
        );
        return rec.finish(Vec::new());
    }

    let k = k as usize;
    let mut deque: VecDeque<usize> = VecDeque::new();
    let mut maxima: Vec<i64> = Vec::new();

    for i in 0..nums.len() {
        while deque.front().is_some_and(|&front| front + k <= i) {
            let evicted = deque.pop_front().unwrap();
            rec.push(
                format!("index {} left the window: evict front", evicted),
                DequeState {
                    event: DequeEvent::EvictFront,
                    index: i,
                    deque: deque.iter().copied().collect(),
                    maxima: maxima.clone(),
                },
            );
        }

        while deque.back().is_some_and(|&back| nums[back] <= nums[i]) {
            let popped = deque.pop_back().unwrap();
            rec.push(
                format!("value {} at tail <= {}: pop", nums[popped], nums[i]),
                DequeState {
                    event: DequeEvent::PopTail,
                    index: i,
                    deque: deque.iter().copied().collect(),
                    maxima: maxima.clone(),
                },
            );
        }

        deque.push_back(i);
        rec.push(
            format!("push index {} (value {})", i, nums[i]),
            DequeState {
                event: DequeEvent::Push,
                index: i,
                deque: deque.iter().copied().collect(),
                maxima: maxima.clone(),
            },
        );

        if i + 1 >= k {
            let front = *deque.front().unwrap();
            maxima.push(nums[front]);
            rec.push(
                format!("window [{}..={}] max is {}", i + 1 - k, i, nums[front]),
                DequeState {
                    event: DequeEvent::Emit,
                    index: i,
                    deque: deque.iter().copied().collect(),
                    maxima: maxima.clone(),
                },
            );
        }
    }

    rec.finish(maxima)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_sum_concrete_case() {
        // Reference answer computed by brute force below.
        let nums = [2, 1, 3, 2, 1, 1, 1];
        let sim = simulate_window_sum(&nums, 5);
        assert_eq!(sim.result, brute_force_best(&nums, 5));
        assert!(sim.result >= 3);
    }

    #[test]
    fn window_sum_empty_input() {
        let sim = simulate_window_sum(&[], 5);
        assert_eq!(sim.result, 0);
        assert_eq!(sim.steps.len(), 1);
    }

    #[test]
    fn window_sum_every_element_too_big() {
        let sim = simulate_window_sum(&[9, 8, 7], 5);
        assert_eq!(sim.result, 0);
        // Expands and shrinks happen, but never an update step.
        assert!(sim
            .steps
            .iter()
            .all(|s| s.state.event != WindowSumEvent::Update));
    }

    #[test]
    fn window_sum_phases_are_distinct_steps() {
        let sim = simulate_window_sum(&[2, 3, 4], 5);
        let has = |e: WindowSumEvent| sim.steps.iter().any(|s| s.state.event == e);
        assert!(has(WindowSumEvent::Expand));
        assert!(has(WindowSumEvent::Shrink));
        assert!(has(WindowSumEvent::Update));
    }

    #[test]
    fn window_max_classic() {
        let sim = simulate_window_max(&[1, 3, -1, -3, 5, 3, 6, 7], 3);
        assert_eq!(sim.result, vec![3, 3, 5, 5, 6, 7]);
    }

    #[test]
    fn window_max_pops_ties() {
        let sim = simulate_window_max(&[2, 2, 2], 2);
        assert_eq!(sim.result, vec![2, 2]);
        assert!(sim.steps.iter().any(|s| s.state.event == DequeEvent::PopTail));
    }

    #[test]
    fn window_max_k_zero_is_degenerate() {
        let sim = simulate_window_max(&[1, 2, 3], 0);
        assert!(sim.result.is_empty());
        assert_eq!(sim.steps.len(), 1);
    }

    fn brute_force_best(nums: &[i64], limit: i64) -> usize {
        let mut best = 0;
        for i in 0..nums.len() {
            for j in i..nums.len() {
                let sum: i64 = nums[i..=j].iter().sum();
                if sum <= limit {
                    best = best.max(j - i + 1);
                }
            }
        }
        best
    }
}
