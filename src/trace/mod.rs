//! Step trace model shared by every simulator
//!
//! This module provides the common trace contract:
//! - [`Step`]: one recorded snapshot of algorithm state, tagged with a sequence number
//! - [`Simulation`]: the full ordered trace plus the final result
//! - [`Recorder`]: append-only step builder that numbers steps as they are pushed
//! - [`StateFields`] / [`changed_fields`]: display-oriented field rendering and diffing
//!
//! # Heterogeneity
//!
//! The only field every step shares is its sequence number. The `state` payload
//! is a closed per-pattern type (see the [`crate::sim`] submodules), so playback
//! and explanation code match on typed event tags rather than free-text labels.
//! Consumers are pattern-aware by construction.
//!
//! # Determinism
//!
//! Simulators record no clocks, no randomness, and no I/O. Two calls with the
//! same inputs produce byte-for-byte identical traces.

use std::fmt;

/// One recorded snapshot of algorithm state.
///
/// `seq` always equals the step's index in its trace; [`Recorder::push`]
/// assigns it, so the invariant holds by construction. `action` is a short
/// human-readable label shown in the timeline pane; the typed `state` payload
/// carries everything needed to render a visual diff against the previous step
/// without re-running the algorithm.
#[derive(Debug, Clone, PartialEq)]
pub struct Step<S> {
    pub seq: usize,
    pub action: String,
    pub state: S,
}

/// A completed simulation: the ordered step trace and the final result.
///
/// Invariant: `steps` fully determines how `result` was reached — no hidden
/// state influences the answer. `steps` is never empty; degenerate inputs
/// still record a single explanatory step.
#[derive(Debug, Clone, PartialEq)]
pub struct Simulation<S, R> {
    pub steps: Vec<Step<S>>,
    pub result: R,
}

/// Append-only step builder used inside every simulator.
#[derive(Debug)]
pub struct Recorder<S> {
    steps: Vec<Step<S>>,
}

impl<S> Recorder<S> {
    pub fn new() -> Self {
        Recorder { steps: Vec::new() }
    }

    /// Append a step; the sequence number is the current trace length.
    pub fn push(&mut self, action: impl Into<String>, state: S) {
        let seq = self.steps.len();
        self.steps.push(Step {
            seq,
            action: action.into(),
            state,
        });
    }

    /// Number of steps recorded so far (used by the backtracking step cap).
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Consume the recorder and pair the trace with its result.
    pub fn finish<R>(self, result: R) -> Simulation<S, R> {
        Simulation {
            steps: self.steps,
            result,
        }
    }
}

impl<S> Default for Recorder<S> {
    fn default() -> Self {
        Self::new()
    }
}

/// A named, rendered state field for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: &'static str,
    pub value: String,
}

impl Field {
    pub fn new(name: &'static str, value: impl Into<String>) -> Self {
        Field {
            name,
            value: value.into(),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.name, self.value)
    }
}

/// Render a state payload as named fields for the state pane.
///
/// Implementations decide their own field set and ordering; the sequence
/// number is not a field (it is carried by [`Step`] itself).
pub trait StateFields {
    fn fields(&self) -> Vec<Field>;
}

/// Names of fields that differ between two rendered states.
///
/// Display-only: drives the changed-field highlight in the state pane.
/// A field counts as changed when it is present in `current` with a value
/// different from `prev`'s, or absent from `prev` entirely.
pub fn changed_fields(prev: &[Field], current: &[Field]) -> Vec<&'static str> {
    current
        .iter()
        .filter(|cur| {
            prev.iter()
                .find(|p| p.name == cur.name)
                .is_none_or(|p| p.value != cur.value)
        })
        .map(|f| f.name)
        .collect()
}

/// Format a slice of integers as `[a, b, c]` for field values.
pub fn fmt_list(values: &[i64]) -> String {
    let body: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    format!("[{}]", body.join(", "))
}

/// Format a slice of indices as `[a, b, c]` for field values.
pub fn fmt_indices(values: &[usize]) -> String {
    let body: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    format!("[{}]", body.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recorder_numbers_steps_contiguously() {
        let mut rec: Recorder<u8> = Recorder::new();
        rec.push("first", 0);
        rec.push("second", 1);
        rec.push("third", 2);
        let sim = rec.finish(());
        for (i, step) in sim.steps.iter().enumerate() {
            assert_eq!(step.seq, i);
        }
    }

    #[test]
    fn changed_fields_ignores_unchanged() {
        let prev = vec![Field::new("left", "0"), Field::new("right", "5")];
        let cur = vec![Field::new("left", "1"), Field::new("right", "5")];
        assert_eq!(changed_fields(&prev, &cur), vec!["left"]);
    }

    #[test]
    fn changed_fields_counts_new_fields() {
        let prev = vec![Field::new("left", "0")];
        let cur = vec![Field::new("left", "0"), Field::new("best", "3")];
        assert_eq!(changed_fields(&prev, &cur), vec!["best"]);
    }

    #[test]
    fn fmt_list_renders_brackets() {
        assert_eq!(fmt_list(&[1, -2, 3]), "[1, -2, 3]");
        assert_eq!(fmt_list(&[]), "[]");
    }
}
