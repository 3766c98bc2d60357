//! Graph simulators: recursive DFS, Kahn's topological sort, and Dijkstra

use crate::trace::{fmt_indices, Field, Recorder, Simulation, StateFields};

/// Build a sorted adjacency list from an undirected edge list, dropping edges
/// that reference out-of-range nodes. Sorted neighbors keep traversal order
/// deterministic.
fn undirected_adjacency(node_count: usize, edges: &[(usize, usize)]) -> Vec<Vec<usize>> {
    let mut adj = vec![Vec::new(); node_count];
    for &(u, v) in edges {
        if u < node_count && v < node_count {
            adj[u].push(v);
            adj[v].push(u);
        }
    }
    for neighbors in &mut adj {
        neighbors.sort_unstable();
        neighbors.dedup();
    }
    adj
}

/// Event tag for the recursive DFS.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DfsEvent {
    /// Node visited (marked on entry).
    Visit,
    /// Node's neighbors exhausted; recursion returned.
    Backtrack,
    /// Traversal complete.
    Done,
    /// Zero nodes or start out of range.
    Degenerate,
}

/// Snapshot for one DFS step.
#[derive(Debug, Clone, PartialEq)]
pub struct DfsState {
    pub event: DfsEvent,
    pub node: usize,
    /// Current recursion path from the start, root first.
    pub path: Vec<usize>,
    /// Visit order so far.
    pub order: Vec<usize>,
}

impl StateFields for DfsState {
    fn fields(&self) -> Vec<Field> {
        vec![
            Field::new("node", self.node.to_string()),
            Field::new("path", fmt_indices(&self.path)),
            Field::new("order", fmt_indices(&self.order)),
        ]
    }
}

/// Recursive depth-first traversal of an undirected graph.
///
/// Neighbors are explored in ascending id order; nodes are marked visited on
/// entry; an explicit backtrack step is recorded when a node's exploration
/// completes. Result is the visit order.
pub fn simulate_graph_dfs(
    node_count: usize,
    edges: &[(usize, usize)],
    start: usize,
) -> Simulation<DfsState, Vec<usize>> {
    let mut rec = Recorder::new();

    if node_count == 0 || start >= node_count {
        rec.push(
            if node_count == 0 {
                "graph has no nodes"
            } else {
                "start node out of range"
            },
            DfsState {
                event: DfsEvent::Degenerate,
                node: start,
                path: Vec::new(),
                order: Vec::new(),
            },
        );
        return rec.finish(Vec::new());
    }

    let adj = undirected_adjacency(node_count, edges);
    let mut visited = vec![false; node_count];
    let mut path: Vec<usize> = Vec::new();
    let mut order: Vec<usize> = Vec::new();

    fn walk(
        node: usize,
        adj: &[Vec<usize>],
        visited: &mut [bool],
        path: &mut Vec<usize>,
        order: &mut Vec<usize>,
        rec: &mut Recorder<DfsState>,
    ) {
        visited[node] = true;
        path.push(node);
        order.push(node);
        rec.push(
            format!("visit node {}", node),
            DfsState {
                event: DfsEvent::Visit,
                node,
                path: path.clone(),
                order: order.clone(),
            },
        );

        for &next in &adj[node] {
            if !visited[next] {
                walk(next, adj, visited, path, order, rec);
            }
        }

        path.pop();
        rec.push(
            format!("node {} exhausted: backtrack", node),
            DfsState {
                event: DfsEvent::Backtrack,
                node,
                path: path.clone(),
                order: order.clone(),
            },
        );
    }

    walk(start, &adj, &mut visited, &mut path, &mut order, &mut rec);

    rec.push(
        format!("traversal complete: visited {} node(s)", order.len()),
        DfsState {
            event: DfsEvent::Done,
            node: start,
            path: Vec::new(),
            order: order.clone(),
        },
    );
    rec.finish(order)
}

/// Event tag for Kahn's algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopoEvent {
    /// Zero-indegree node seeded into the queue.
    Seed,
    /// Node dequeued and appended to the order.
    Emit,
    /// Neighbor's indegree decremented (and enqueued if it reached zero).
    Relax,
    /// All nodes ordered.
    Complete,
    /// Queue drained with nodes unordered: cycle.
    CycleDetected,
    /// Zero nodes.
    Degenerate,
}

/// Snapshot for one topological-sort step.
#[derive(Debug, Clone, PartialEq)]
pub struct TopoState {
    pub event: TopoEvent,
    pub node: usize,
    pub indegree: Vec<usize>,
    pub queue: Vec<usize>,
    pub order: Vec<usize>,
}

impl StateFields for TopoState {
    fn fields(&self) -> Vec<Field> {
        vec![
            Field::new("node", self.node.to_string()),
            Field::new("indegree", fmt_indices(&self.indegree)),
            Field::new("queue", fmt_indices(&self.queue)),
            Field::new("order", fmt_indices(&self.order)),
        ]
    }
}

/// Result of a topological sort: the emitted order plus a cycle flag.
/// `order.len() == node_count` exactly when `has_cycle` is false.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopoResult {
    pub order: Vec<usize>,
    pub has_cycle: bool,
}

/// Kahn's algorithm over a directed edge list.
///
/// Indegrees are computed up front; zero-indegree nodes seed the queue in
/// ascending id order; processing is FIFO via an index cursor. A cycle is
/// reported through the result, never an error.
pub fn simulate_topo_sort(
    node_count: usize,
    edges: &[(usize, usize)],
) -> Simulation<TopoState, TopoResult> {
    let mut rec = Recorder::new();

    if node_count == 0 {
        rec.push(
            "graph has no nodes",
            TopoState {
                event: TopoEvent::Degenerate,
                node: 0,
                indegree: Vec::new(),
                queue: Vec::new(),
                order: Vec::new(),
            },
        );
        return rec.finish(TopoResult {
            order: Vec::new(),
            has_cycle: false,
        });
    }

    let mut adj = vec![Vec::new(); node_count];
    let mut indegree = vec![0usize; node_count];
    for &(u, v) in edges {
        if u < node_count && v < node_count {
            adj[u].push(v);
            indegree[v] += 1;
        }
    }
    for neighbors in &mut adj {
        neighbors.sort_unstable();
    }

    let mut queue: Vec<usize> = Vec::new();
    let mut cursor = 0usize;
    for node in 0..node_count {
        if indegree[node] == 0 {
            queue.push(node);
            rec.push(
                format!("node {} has indegree 0: seed queue", node),
                TopoState {
                    event: TopoEvent::Seed,
                    node,
                    indegree: indegree.clone(),
                    queue: queue.clone(),
                    order: Vec::new(),
                },
            );
        }
    }

    let mut order: Vec<usize> = Vec::new();
    while cursor < queue.len() {
        let node = queue[cursor];
        cursor += 1;
        order.push(node);
        rec.push(
            format!("emit node {} into the order", node),
            TopoState {
                event: TopoEvent::Emit,
                node,
                indegree: indegree.clone(),
                queue: queue[cursor..].to_vec(),
                order: order.clone(),
            },
        );

        for &next in &adj[node] {
            indegree[next] -= 1;
            if indegree[next] == 0 {
                queue.push(next);
            }
            rec.push(
                format!("decrement indegree of {} to {}", next, indegree[next]),
                TopoState {
                    event: TopoEvent::Relax,
                    node: next,
                    indegree: indegree.clone(),
                    queue: queue[cursor..].to_vec(),
                    order: order.clone(),
                },
            );
        }
    }

    let has_cycle = order.len() < node_count;
    rec.push(
        if has_cycle {
            format!(
                "only {} of {} node(s) ordered: cycle detected",
                order.len(),
                node_count
            )
        } else {
            "all nodes ordered: no cycle".to_string()
        },
        TopoState {
            event: if has_cycle {
                TopoEvent::CycleDetected
            } else {
                TopoEvent::Complete
            },
            node: 0,
            indegree,
            queue: Vec::new(),
            order: order.clone(),
        },
    );
    rec.finish(TopoResult { order, has_cycle })
}

/// Event tag for Dijkstra.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DijkstraEvent {
    /// Negative-weight edge dropped while building the adjacency list.
    FilterEdge,
    /// Start node pushed with distance 0.
    Seed,
    /// Heap minimum popped and settled.
    Settle,
    /// Popped entry was stale (a shorter distance is already known).
    Stale,
    /// Neighbor's distance strictly improved; pushed onto the heap.
    Relax,
    /// Heap drained.
    Done,
    /// Zero nodes or start out of range.
    Degenerate,
}

/// Snapshot for one Dijkstra step.
#[derive(Debug, Clone, PartialEq)]
pub struct DijkstraState {
    pub event: DijkstraEvent,
    pub node: usize,
    /// Distance the event concerns.
    pub dist: i64,
    /// Current best distance per node; None = not yet reached.
    pub dists: Vec<Option<i64>>,
    /// Heap contents as (dist, node) pairs, array order.
    pub heap: Vec<(i64, usize)>,
}

impl StateFields for DijkstraState {
    fn fields(&self) -> Vec<Field> {
        let dists: Vec<String> = self
            .dists
            .iter()
            .map(|d| match d {
                Some(v) => v.to_string(),
                None => "-".to_string(),
            })
            .collect();
        let heap: Vec<String> = self
            .heap
            .iter()
            .map(|(d, n)| format!("({},{})", d, n))
            .collect();
        vec![
            Field::new("node", self.node.to_string()),
            Field::new("dist", self.dist.to_string()),
            Field::new("dists", format!("[{}]", dists.join(", "))),
            Field::new("heap", format!("[{}]", heap.join(", "))),
        ]
    }
}

/// Dijkstra's shortest paths with a hand-rolled binary min-heap and lazy
/// deletion.
///
/// Negative-weight edges are silently filtered while building the adjacency
/// list (each drop is still recorded as a step). Entries popped with a stale
/// distance are skipped. Distances relax only on strict improvement. The
/// result holds `None` for unreachable nodes.
pub fn simulate_dijkstra(
    node_count: usize,
    edges: &[(usize, usize, i64)],
    start: usize,
) -> Simulation<DijkstraState, Vec<Option<i64>>> {
    let mut rec = Recorder::new();

    if node_count == 0 || start >= node_count {
        rec.push(
            if node_count == 0 {
                "graph has no nodes"
            } else {
                "start node out of range"
            },
            DijkstraState {
                event: DijkstraEvent::Degenerate,
                node: start,
                dist: 0,
                dists: vec![None; node_count],
                heap: Vec::new(),
            },
        );
        return rec.finish(vec![None; node_count]);
    }

    let mut adj: Vec<Vec<(usize, i64)>> = vec![Vec::new(); node_count];
    let mut dists: Vec<Option<i64>> = vec![None; node_count];
    for &(u, v, w) in edges {
        if u >= node_count || v >= node_count {
            continue;
        }
        if w < 0 {
            rec.push(
                format!("edge {}-{} has negative weight {}: filtered", u, v, w),
                DijkstraState {
                    event: DijkstraEvent::FilterEdge,
                    node: u,
                    dist: w,
                    dists: dists.clone(),
                    heap: Vec::new(),
                },
            );
            continue;
        }
        adj[u].push((v, w));
        adj[v].push((u, w));
    }
    for neighbors in &mut adj {
        neighbors.sort_unstable();
    }

    let mut heap = MinHeap::new();
    dists[start] = Some(0);
    heap.push((0, start));
    rec.push(
        format!("seed heap with ({}, 0)", start),
        DijkstraState {
            event: DijkstraEvent::Seed,
            node: start,
            dist: 0,
            dists: dists.clone(),
            heap: heap.items().to_vec(),
        },
    );

    while let Some((dist, node)) = heap.pop() {
        // Lazy deletion: skip entries superseded by a shorter known distance.
        if dists[node].is_some_and(|best| dist > best) {
            rec.push(
                format!("pop ({}, {}) is stale: skip", dist, node),
                DijkstraState {
                    event: DijkstraEvent::Stale,
                    node,
                    dist,
                    dists: dists.clone(),
                    heap: heap.items().to_vec(),
                },
            );
            continue;
        }

        rec.push(
            format!("settle node {} at distance {}", node, dist),
            DijkstraState {
                event: DijkstraEvent::Settle,
                node,
                dist,
                dists: dists.clone(),
                heap: heap.items().to_vec(),
            },
        );

        for &(next, weight) in &adj[node] {
            let candidate = dist + weight;
            if dists[next].is_none_or(|best| candidate < best) {
                dists[next] = Some(candidate);
                heap.push((candidate, next));
                rec.push(
                    format!("relax node {} to distance {}", next, candidate),
                    DijkstraState {
                        event: DijkstraEvent::Relax,
                        node: next,
                        dist: candidate,
                        dists: dists.clone(),
                        heap: heap.items().to_vec(),
                    },
                );
            }
        }
    }

    let reached = dists.iter().filter(|d| d.is_some()).count();
    rec.push(
        format!("heap empty: {} node(s) reached", reached),
        DijkstraState {
            event: DijkstraEvent::Done,
            node: start,
            dist: 0,
            dists: dists.clone(),
            heap: Vec::new(),
        },
    );
    rec.finish(dists)
}

/// Array-backed 0-indexed binary min-heap of `(dist, node)` pairs,
/// parent at `(i - 1) / 2`.
struct MinHeap {
    items: Vec<(i64, usize)>,
}

impl MinHeap {
    fn new() -> Self {
        MinHeap { items: Vec::new() }
    }

    fn items(&self) -> &[(i64, usize)] {
        &self.items
    }

    fn push(&mut self, item: (i64, usize)) {
        self.items.push(item);
        let mut i = self.items.len() - 1;
        while i > 0 {
            let parent = (i - 1) / 2;
            if self.items[i] < self.items[parent] {
                self.items.swap(i, parent);
                i = parent;
            } else {
                break;
            }
        }
    }

    fn pop(&mut self) -> Option<(i64, usize)> {
        if self.items.is_empty() {
            return None;
        }
        let last = self.items.len() - 1;
        self.items.swap(0, last);
        let top = self.items.pop();
        let mut i = 0;
        loop {
            let (l, r) = (2 * i + 1, 2 * i + 2);
            let mut smallest = i;
            if l < self.items.len() && self.items[l] < self.items[smallest] {
                smallest = l;
            }
            if r < self.items.len() && self.items[r] < self.items[smallest] {
                smallest = r;
            }
            if smallest == i {
                break;
            }
            self.items.swap(i, smallest);
            i = smallest;
        }
        top
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dfs_visits_in_ascending_neighbor_order() {
        let sim = simulate_graph_dfs(4, &[(0, 2), (0, 1), (1, 3)], 0);
        assert_eq!(sim.result, vec![0, 1, 3, 2]);
    }

    #[test]
    fn dfs_records_backtrack_steps() {
        let sim = simulate_graph_dfs(3, &[(0, 1), (1, 2)], 0);
        let backtracks: Vec<usize> = sim
            .steps
            .iter()
            .filter(|s| s.state.event == DfsEvent::Backtrack)
            .map(|s| s.state.node)
            .collect();
        assert_eq!(backtracks, vec![2, 1, 0]);
    }

    #[test]
    fn dfs_invalid_start_short_circuits() {
        let sim = simulate_graph_dfs(3, &[(0, 1)], 9);
        assert!(sim.result.is_empty());
        assert_eq!(sim.steps.len(), 1);
    }

    #[test]
    fn topo_orders_a_dag_completely() {
        let sim = simulate_topo_sort(4, &[(0, 1), (0, 2), (1, 3), (2, 3)]);
        assert!(!sim.result.has_cycle);
        assert_eq!(sim.result.order.len(), 4);
        assert_eq!(sim.result.order[0], 0);
        assert_eq!(sim.result.order[3], 3);
    }

    #[test]
    fn topo_reports_cycles_via_result() {
        let sim = simulate_topo_sort(4, &[(0, 1), (1, 2), (2, 0), (2, 3)]);
        assert!(sim.result.has_cycle);
        assert!(sim.result.order.len() < 4);
        assert_eq!(
            sim.steps.last().unwrap().state.event,
            TopoEvent::CycleDetected
        );
    }

    #[test]
    fn topo_completeness_law() {
        let dag = simulate_topo_sort(3, &[(0, 1), (1, 2)]);
        assert_eq!(dag.result.order.len() == 3, !dag.result.has_cycle);
        let cyclic = simulate_topo_sort(2, &[(0, 1), (1, 0)]);
        assert_eq!(cyclic.result.order.len() == 2, !cyclic.result.has_cycle);
    }

    #[test]
    fn dijkstra_shortest_paths() {
        let edges = [(0, 1, 4), (0, 2, 1), (2, 1, 2), (1, 3, 1)];
        let sim = simulate_dijkstra(4, &edges, 0);
        assert_eq!(sim.result, vec![Some(0), Some(3), Some(1), Some(4)]);
    }

    #[test]
    fn dijkstra_unreachable_nodes_are_none() {
        let edges = [
            (0, 1, 2),
            (1, 2, 2),
            (2, 3, 2),
            (4, 5, 1),
        ];
        let sim = simulate_dijkstra(7, &edges, 0);
        assert_eq!(sim.result[4], None);
        assert_eq!(sim.result[6], None);
        assert_eq!(sim.result[3], Some(6));
    }

    #[test]
    fn dijkstra_filters_negative_edges() {
        let sim = simulate_dijkstra(3, &[(0, 1, 5), (1, 2, -3)], 0);
        assert!(sim
            .steps
            .iter()
            .any(|s| s.state.event == DijkstraEvent::FilterEdge));
        assert_eq!(sim.result[2], None); // the negative edge never existed
    }

    #[test]
    fn dijkstra_skips_stale_heap_entries() {
        // Node 1 is relaxed twice (via 0 directly and via 2); the longer
        // entry is still in the heap when popped and must be skipped.
        let edges = [(0, 1, 10), (0, 2, 1), (2, 1, 1)];
        let sim = simulate_dijkstra(3, &edges, 0);
        assert!(sim.steps.iter().any(|s| s.state.event == DijkstraEvent::Stale));
        assert_eq!(sim.result[1], Some(2));
    }
}
