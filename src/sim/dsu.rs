//! Union-Find with path halving and union by rank

use crate::trace::{fmt_indices, Field, Recorder, Simulation, StateFields};

/// Event tag for union-find.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnionEvent {
    /// A find walked (and halved) the path to a root.
    Find,
    /// Two distinct roots were linked; component count dropped.
    Union,
    /// Both nodes already shared a root: recorded no-op.
    AlreadyConnected,
    /// All unions processed.
    Done,
    /// Zero nodes.
    Degenerate,
}

/// Snapshot for one union-find step.
#[derive(Debug, Clone, PartialEq)]
pub struct UnionState {
    pub event: UnionEvent,
    pub a: usize,
    pub b: usize,
    pub parent: Vec<usize>,
    pub rank: Vec<usize>,
    pub components: usize,
}

impl StateFields for UnionState {
    fn fields(&self) -> Vec<Field> {
        vec![
            Field::new("a", self.a.to_string()),
            Field::new("b", self.b.to_string()),
            Field::new("parent", fmt_indices(&self.parent)),
            Field::new("rank", fmt_indices(&self.rank)),
            Field::new("components", self.components.to_string()),
        ]
    }
}

/// Find with path halving: every node on the walk is re-pointed at its
/// grandparent, flattening the tree for later finds.
fn find(parent: &mut [usize], mut x: usize) -> usize {
    while parent[x] != x {
        parent[x] = parent[parent[x]];
        x = parent[x];
    }
    x
}

/// Process a sequence of union operations over `node_count` singletons.
///
/// Redundant unions (same root) are recorded as no-ops, never errors. Unions
/// naming out-of-range nodes are skipped. The result is the final number of
/// connected components.
pub fn simulate_union_find(
    node_count: usize,
    unions: &[(usize, usize)],
) -> Simulation<UnionState, usize> {
    let mut rec = Recorder::new();

    if node_count == 0 {
        rec.push(
            "no nodes: nothing to union",
            UnionState {
                event: UnionEvent::Degenerate,
                a: 0,
                b: 0,
                parent: Vec::new(),
                rank: Vec::new(),
                components: 0,
            },
        );
        return rec.finish(0);
    }

    let mut parent: Vec<usize> = (0..node_count).collect();
    let mut rank = vec![0usize; node_count];
    let mut components = node_count;

    for &(a, b) in unions {
        if a >= node_count || b >= node_count {
            continue;
        }

        let root_a = find(&mut parent, a);
        let root_b = find(&mut parent, b);
        rec.push(
            format!("find({}) = {}, find({}) = {}", a, root_a, b, root_b),
            UnionState {
                event: UnionEvent::Find,
                a,
                b,
                parent: parent.clone(),
                rank: rank.clone(),
                components,
            },
        );

        if root_a == root_b {
            rec.push(
                format!("{} and {} already connected: no-op", a, b),
                UnionState {
                    event: UnionEvent::AlreadyConnected,
                    a,
                    b,
                    parent: parent.clone(),
                    rank: rank.clone(),
                    components,
                },
            );
            continue;
        }

        // Union by rank: the shallower root hangs under the deeper one.
        let (child, root) = if rank[root_a] < rank[root_b] {
            (root_a, root_b)
        } else {
            (root_b, root_a)
        };
        parent[child] = root;
        if rank[root_a] == rank[root_b] {
            rank[root] += 1;
        }
        components -= 1;
        rec.push(
            format!("link root {} under root {}", child, root),
            UnionState {
                event: UnionEvent::Union,
                a,
                b,
                parent: parent.clone(),
                rank: rank.clone(),
                components,
            },
        );
    }

    rec.push(
        format!("{} component(s) remain", components),
        UnionState {
            event: UnionEvent::Done,
            a: 0,
            b: 0,
            parent,
            rank,
            components,
        },
    );
    rec.finish(components)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unions_reduce_component_count() {
        let sim = simulate_union_find(5, &[(0, 1), (2, 3)]);
        assert_eq!(sim.result, 3);
    }

    #[test]
    fn union_makes_roots_agree() {
        let sim = simulate_union_find(4, &[(0, 1), (1, 2)]);
        let last = sim.steps.last().unwrap();
        let mut parent = last.state.parent.clone();
        assert_eq!(find(&mut parent, 0), find(&mut parent, 2));
    }

    #[test]
    fn redundant_union_is_a_recorded_noop() {
        let sim = simulate_union_find(3, &[(0, 1), (1, 0)]);
        assert_eq!(sim.result, 2);
        let noop = sim
            .steps
            .iter()
            .find(|s| s.state.event == UnionEvent::AlreadyConnected)
            .expect("no-op step recorded");
        // Parent and rank unchanged from the preceding find step.
        let prev = &sim.steps[noop.seq - 1];
        assert_eq!(noop.state.parent, prev.state.parent);
        assert_eq!(noop.state.rank, prev.state.rank);
    }

    #[test]
    fn self_union_is_already_connected() {
        let sim = simulate_union_find(2, &[(1, 1)]);
        assert_eq!(sim.result, 2);
    }

    #[test]
    fn zero_nodes_short_circuits() {
        let sim = simulate_union_find(0, &[(0, 1)]);
        assert_eq!(sim.result, 0);
        assert_eq!(sim.steps.len(), 1);
    }

    #[test]
    fn path_halving_flattens_chains() {
        // Build a chain then find the deep end: its parent should shortcut.
        let sim = simulate_union_find(4, &[(0, 1), (1, 2), (2, 3), (0, 3)]);
        assert_eq!(sim.result, 1);
        let parent = &sim.steps.last().unwrap().state.parent;
        let mut p = parent.clone();
        let root = find(&mut p, 0);
        assert!(parent.iter().all(|&x| {
            let mut q = parent.clone();
            find(&mut q, x) == root
        }));
    }
}
