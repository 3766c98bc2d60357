//! Breadth-first search over a grid with blocked cells

use crate::trace::{Field, Recorder, Simulation, StateFields};
use rustc_hash::FxHashSet;

/// Event tag for the grid BFS.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridBfsEvent {
    /// Start cell enqueued.
    Seed,
    /// A cell was dequeued for processing.
    Dequeue,
    /// An unvisited open neighbor was enqueued.
    Enqueue,
    /// Frontier drained; traversal complete.
    Done,
    /// Zero-size grid, blocked start, or start out of range.
    Degenerate,
}

/// Snapshot for one BFS step.
#[derive(Debug, Clone, PartialEq)]
pub struct GridBfsState {
    pub event: GridBfsEvent,
    /// Cell the event concerns.
    pub cell: (usize, usize),
    /// BFS distance of that cell from the start.
    pub dist: usize,
    /// Cells currently enqueued but not yet processed, front first.
    pub frontier: Vec<(usize, usize)>,
    /// Number of cells visited (enqueued) so far.
    pub visited: usize,
}

impl StateFields for GridBfsState {
    fn fields(&self) -> Vec<Field> {
        let frontier: Vec<String> = self
            .frontier
            .iter()
            .map(|(r, c)| format!("({},{})", r, c))
            .collect();
        vec![
            Field::new("cell", format!("({},{})", self.cell.0, self.cell.1)),
            Field::new("dist", self.dist.to_string()),
            Field::new("frontier", format!("[{}]", frontier.join(", "))),
            Field::new("visited", self.visited.to_string()),
        ]
    }
}

/// Neighbor offsets in fixed order: down, up, right, left.
const NEIGHBOR_ORDER: [(i64, i64); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Flood-fill BFS from `start` over a `rows` x `cols` grid, avoiding
/// `blocked` cells. Returns the number of reachable cells (including the
/// start); the trace carries per-cell distances for richer consumers.
///
/// The queue is a `Vec` with an index cursor, keeping dequeues O(1) amortized.
/// Cells are marked visited when enqueued, not when dequeued, so nothing is
/// enqueued twice.
pub fn simulate_grid_bfs(
    rows: usize,
    cols: usize,
    blocked: &FxHashSet<(usize, usize)>,
    start: (usize, usize),
) -> Simulation<GridBfsState, usize> {
    let mut rec = Recorder::new();

    let degenerate = if rows == 0 || cols == 0 {
        Some("grid has zero rows or columns")
    } else if start.0 >= rows || start.1 >= cols {
        Some("start cell out of range")
    } else if blocked.contains(&start) {
        Some("start cell is blocked")
    } else {
        None
    };
    if let Some(reason) = degenerate {
        rec.push(
            reason,
            GridBfsState {
                event: GridBfsEvent::Degenerate,
                cell: start,
                dist: 0,
                frontier: Vec::new(),
                visited: 0,
            },
        );
        return rec.finish(0);
    }

    // Index-cursor queue: pushes append, the cursor advances on dequeue.
    let mut queue: Vec<((usize, usize), usize)> = vec![(start, 0)];
    let mut cursor = 0usize;
    let mut visited: FxHashSet<(usize, usize)> = FxHashSet::default();
    visited.insert(start);

    rec.push(
        format!("seed frontier with start ({},{})", start.0, start.1),
        GridBfsState {
            event: GridBfsEvent::Seed,
            cell: start,
            dist: 0,
            frontier: vec![start],
            visited: 1,
        },
    );

    while cursor < queue.len() {
        let (cell, dist) = queue[cursor];
        cursor += 1;
        rec.push(
            format!("dequeue ({},{}) at distance {}", cell.0, cell.1, dist),
            GridBfsState {
                event: GridBfsEvent::Dequeue,
                cell,
                dist,
                frontier: queue[cursor..].iter().map(|&(c, _)| c).collect(),
                visited: visited.len(),
            },
        );

        for (dr, dc) in NEIGHBOR_ORDER {
            let nr = cell.0 as i64 + dr;
            let nc = cell.1 as i64 + dc;
            if nr < 0 || nc < 0 || nr >= rows as i64 || nc >= cols as i64 {
                continue;
            }
            let neighbor = (nr as usize, nc as usize);
            if blocked.contains(&neighbor) || visited.contains(&neighbor) {
                continue;
            }
            visited.insert(neighbor);
            queue.push((neighbor, dist + 1));
            rec.push(
                format!("enqueue ({},{}) at distance {}", neighbor.0, neighbor.1, dist + 1),
                GridBfsState {
                    event: GridBfsEvent::Enqueue,
                    cell: neighbor,
                    dist: dist + 1,
                    frontier: queue[cursor..].iter().map(|&(c, _)| c).collect(),
                    visited: visited.len(),
                },
            );
        }
    }

    let reachable = visited.len();
    rec.push(
        format!("frontier empty: {} cell(s) reachable", reachable),
        GridBfsState {
            event: GridBfsEvent::Done,
            cell: start,
            dist: 0,
            frontier: Vec::new(),
            visited: reachable,
        },
    );
    rec.finish(reachable)
}
