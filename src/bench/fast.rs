//! Non-tracing fast variants of every pattern
//!
//! Same algorithmic shape as the traced simulators, minus all step recording.
//! Step-count parity is irrelevant (the harness discards state entirely), but
//! asymptotic behavior must match the traced versions so the timings drawn
//! from these are honest about the pattern being taught.

use rustc_hash::{FxHashMap, FxHashSet};

pub fn hash_duplicate(nums: &[i64]) -> Option<i64> {
    let mut seen = FxHashSet::default();
    for &v in nums {
        if !seen.insert(v) {
            return Some(v);
        }
    }
    None
}

pub fn hash_frequency(nums: &[i64]) -> FxHashMap<i64, usize> {
    let mut counts = FxHashMap::default();
    for &v in nums {
        *counts.entry(v).or_insert(0) += 1;
    }
    counts
}

pub fn pair_sum(nums: &[i64], target: i64) -> bool {
    let (mut left, mut right) = (0usize, nums.len().saturating_sub(1));
    while left < right {
        let sum = nums[left] + nums[right];
        if sum == target {
            return true;
        } else if sum < target {
            left += 1;
        } else {
            right -= 1;
        }
    }
    false
}

pub fn window_sum(nums: &[i64], limit: i64) -> usize {
    let (mut left, mut sum, mut best) = (0usize, 0i64, 0usize);
    for right in 0..nums.len() {
        sum += nums[right];
        while sum > limit && left <= right {
            sum -= nums[left];
            left += 1;
        }
        if left <= right {
            best = best.max(right - left + 1);
        }
    }
    best
}

pub fn brackets(text: &str) -> bool {
    let mut stack = Vec::new();
    for ch in text.chars() {
        match ch {
            '(' | '[' | '{' => stack.push(ch),
            ')' | ']' | '}' => {
                let opener = match ch {
                    ')' => '(',
                    ']' => '[',
                    _ => '{',
                };
                if stack.pop() != Some(opener) {
                    return false;
                }
            }
            _ => {}
        }
    }
    stack.is_empty()
}

pub fn grid_bfs(rows: usize, cols: usize, blocked: &FxHashSet<(usize, usize)>) -> usize {
    if rows == 0 || cols == 0 || blocked.contains(&(0, 0)) {
        return 0;
    }
    let mut queue = vec![(0usize, 0usize)];
    let mut cursor = 0usize;
    let mut visited: FxHashSet<(usize, usize)> = FxHashSet::default();
    visited.insert((0, 0));
    while cursor < queue.len() {
        let (r, c) = queue[cursor];
        cursor += 1;
        for (dr, dc) in [(1i64, 0i64), (-1, 0), (0, 1), (0, -1)] {
            let (nr, nc) = (r as i64 + dr, c as i64 + dc);
            if nr < 0 || nc < 0 || nr >= rows as i64 || nc >= cols as i64 {
                continue;
            }
            let cell = (nr as usize, nc as usize);
            if !blocked.contains(&cell) && visited.insert(cell) {
                queue.push(cell);
            }
        }
    }
    visited.len()
}

pub fn graph_dfs(node_count: usize, edges: &[(usize, usize)], start: usize) -> Vec<usize> {
    if node_count == 0 || start >= node_count {
        return Vec::new();
    }
    let mut adj = vec![Vec::new(); node_count];
    for &(u, v) in edges {
        if u < node_count && v < node_count {
            adj[u].push(v);
            adj[v].push(u);
        }
    }
    for n in &mut adj {
        n.sort_unstable();
        n.dedup();
    }
    let mut visited = vec![false; node_count];
    let mut order = Vec::new();
    let mut stack = vec![start];
    visited[start] = true;
    // Iterative with explicit stack; the traced version recurses, but the
    // visit set explored is identical.
    while let Some(node) = stack.pop() {
        order.push(node);
        for &next in adj[node].iter().rev() {
            if !visited[next] {
                visited[next] = true;
                stack.push(next);
            }
        }
    }
    order
}

pub fn binary_search(nums: &[i64], target: i64) -> usize {
    let (mut lo, mut hi) = (0usize, nums.len());
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if nums[mid] < target {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }
    lo
}

pub fn fib_memo(n: i64) -> i64 {
    fn go(n: i64, memo: &mut FxHashMap<i64, i64>) -> i64 {
        if n <= 1 {
            return n.max(0);
        }
        if let Some(&v) = memo.get(&n) {
            return v;
        }
        let v = go(n - 1, memo) + go(n - 2, memo);
        memo.insert(n, v);
        v
    }
    if n < 0 {
        return -1;
    }
    go(n, &mut FxHashMap::default())
}

pub fn prefix_sum(n: usize, updates: &[(usize, usize, i64)], query: (usize, usize)) -> i64 {
    if n == 0 {
        return 0;
    }
    let mut diff = vec![0i64; n + 1];
    for &(l, r, d) in updates {
        diff[l.min(n)] += d;
        diff[(r + 1).min(n)] -= d;
    }
    let mut prefix = vec![0i64; n];
    let mut running = 0i64;
    let mut acc = 0i64;
    for i in 0..n {
        running += diff[i];
        acc += running;
        prefix[i] = acc;
    }
    let (ql, qr) = (query.0.min(query.1).min(n - 1), query.0.max(query.1).min(n - 1));
    prefix[qr] - if ql > 0 { prefix[ql - 1] } else { 0 }
}

pub fn interval_merge(intervals: &[(i64, i64)]) -> Vec<(i64, i64)> {
    if intervals.is_empty() {
        return Vec::new();
    }
    let mut sorted = intervals.to_vec();
    sorted.sort_unstable();
    let mut merged = vec![sorted[0]];
    for &(s, e) in &sorted[1..] {
        let last = merged.last_mut().unwrap();
        if last.1 < s {
            merged.push((s, e));
        } else {
            last.1 = last.1.max(e);
        }
    }
    merged
}

pub fn heap_top_k(nums: &[i64], k: usize) -> Vec<i64> {
    if k == 0 {
        return Vec::new();
    }
    // std's BinaryHeap is a max-heap; Reverse turns it into the min-heap the
    // traced version hand-rolls.
    use std::cmp::Reverse;
    let mut heap = std::collections::BinaryHeap::new();
    for &v in nums {
        heap.push(Reverse(v));
        if heap.len() > k {
            heap.pop();
        }
    }
    let mut out: Vec<i64> = heap.into_iter().map(|Reverse(v)| v).collect();
    out.sort_unstable_by(|a, b| b.cmp(a));
    out
}

pub fn window_max(nums: &[i64], k: usize) -> Vec<i64> {
    if nums.is_empty() || k == 0 {
        return Vec::new();
    }
    let mut deque: std::collections::VecDeque<usize> = std::collections::VecDeque::new();
    let mut out = Vec::new();
    for i in 0..nums.len() {
        while deque.front().is_some_and(|&f| f + k <= i) {
            deque.pop_front();
        }
        while deque.back().is_some_and(|&b| nums[b] <= nums[i]) {
            deque.pop_back();
        }
        deque.push_back(i);
        if i + 1 >= k {
            out.push(nums[*deque.front().unwrap()]);
        }
    }
    out
}

pub fn topo_sort(node_count: usize, edges: &[(usize, usize)]) -> (Vec<usize>, bool) {
    let mut adj = vec![Vec::new(); node_count];
    let mut indegree = vec![0usize; node_count];
    for &(u, v) in edges {
        if u < node_count && v < node_count {
            adj[u].push(v);
            indegree[v] += 1;
        }
    }
    let mut queue: Vec<usize> = (0..node_count).filter(|&n| indegree[n] == 0).collect();
    let mut cursor = 0;
    let mut order = Vec::new();
    while cursor < queue.len() {
        let node = queue[cursor];
        cursor += 1;
        order.push(node);
        for &next in &adj[node] {
            indegree[next] -= 1;
            if indegree[next] == 0 {
                queue.push(next);
            }
        }
    }
    let cycle = order.len() < node_count;
    (order, cycle)
}

pub fn union_find(node_count: usize, unions: &[(usize, usize)]) -> usize {
    if node_count == 0 {
        return 0;
    }
    let mut parent: Vec<usize> = (0..node_count).collect();
    let mut rank = vec![0u32; node_count];
    let mut components = node_count;
    fn find(parent: &mut [usize], mut x: usize) -> usize {
        while parent[x] != x {
            parent[x] = parent[parent[x]];
            x = parent[x];
        }
        x
    }
    for &(a, b) in unions {
        if a >= node_count || b >= node_count {
            continue;
        }
        let (ra, rb) = (find(&mut parent, a), find(&mut parent, b));
        if ra == rb {
            continue;
        }
        let (child, root) = if rank[ra] < rank[rb] { (ra, rb) } else { (rb, ra) };
        parent[child] = root;
        if rank[ra] == rank[rb] {
            rank[root] += 1;
        }
        components -= 1;
    }
    components
}

pub fn subset_sum(nums: &[i64], target: i64, node_cap: usize) -> Option<Vec<i64>> {
    fn go(
        nums: &[i64],
        target: i64,
        index: usize,
        sum: i64,
        nodes: &mut usize,
        cap: usize,
        chosen: &mut Vec<i64>,
    ) -> bool {
        if *nodes >= cap {
            return false;
        }
        *nodes += 1;
        if sum == target {
            return true;
        }
        if sum > target || index >= nums.len() {
            return false;
        }
        chosen.push(nums[index]);
        if go(nums, target, index + 1, sum + nums[index], nodes, cap, chosen) {
            return true;
        }
        chosen.pop();
        go(nums, target, index + 1, sum, nodes, cap, chosen)
    }
    let mut chosen = Vec::new();
    let mut nodes = 0;
    if go(nums, target, 0, 0, &mut nodes, node_cap, &mut chosen) {
        Some(chosen)
    } else {
        None
    }
}

pub fn trie_prefix(words: &[String], prefix: &str) -> bool {
    #[derive(Default)]
    struct Node {
        children: FxHashMap<char, Node>,
        is_word: bool,
    }
    let mut root = Node::default();
    for word in words {
        let mut node = &mut root;
        for ch in word.chars() {
            node = node.children.entry(ch).or_default();
        }
        node.is_word = true;
    }
    let mut node = &root;
    for ch in prefix.chars() {
        match node.children.get(&ch) {
            Some(child) => node = child,
            None => return false,
        }
    }
    true
}

pub fn interval_schedule(intervals: &[(i64, i64)]) -> usize {
    let mut sorted = intervals.to_vec();
    sorted.sort_unstable_by_key(|&(s, e)| (e, s));
    let mut last_end = i64::MIN;
    let mut accepted = 0;
    for &(s, e) in &sorted {
        if s >= last_end {
            accepted += 1;
            last_end = e;
        }
    }
    accepted
}

pub fn dijkstra(node_count: usize, edges: &[(usize, usize, i64)], start: usize) -> Vec<Option<i64>> {
    use std::cmp::Reverse;
    if node_count == 0 || start >= node_count {
        return vec![None; node_count];
    }
    let mut adj: Vec<Vec<(usize, i64)>> = vec![Vec::new(); node_count];
    for &(u, v, w) in edges {
        if w >= 0 && u < node_count && v < node_count {
            adj[u].push((v, w));
            adj[v].push((u, w));
        }
    }
    let mut dists: Vec<Option<i64>> = vec![None; node_count];
    let mut heap = std::collections::BinaryHeap::new();
    dists[start] = Some(0);
    heap.push(Reverse((0i64, start)));
    while let Some(Reverse((dist, node))) = heap.pop() {
        if dists[node].is_some_and(|best| dist > best) {
            continue;
        }
        for &(next, w) in &adj[node] {
            let candidate = dist + w;
            if dists[next].is_none_or(|best| candidate < best) {
                dists[next] = Some(candidate);
                heap.push(Reverse((candidate, next)));
            }
        }
    }
    dists
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim;

    // Fast variants must agree with the traced simulators on shared inputs.

    #[test]
    fn fast_matches_traced_hash_duplicate() {
        let nums = [2, 7, 11, 7, 3, 11];
        assert_eq!(
            hash_duplicate(&nums),
            sim::hashing::simulate_hash_duplicate(&nums).result
        );
    }

    #[test]
    fn fast_matches_traced_window_sum() {
        let nums = [2, 1, 3, 2, 1, 1, 1];
        assert_eq!(
            window_sum(&nums, 5),
            sim::window::simulate_window_sum(&nums, 5).result
        );
    }

    #[test]
    fn fast_matches_traced_binary_search() {
        let nums = [1, 2, 2, 2, 4, 5];
        for t in 0..7 {
            assert_eq!(
                binary_search(&nums, t),
                sim::binary_search::simulate_binary_search(&nums, t).result
            );
        }
    }

    #[test]
    fn fast_matches_traced_dijkstra() {
        let edges = [(0, 1, 4), (0, 2, 1), (2, 1, 2), (1, 3, 1)];
        assert_eq!(
            dijkstra(4, &edges, 0),
            sim::graph::simulate_dijkstra(4, &edges, 0).result
        );
    }

    #[test]
    fn fast_matches_traced_topo() {
        let edges = [(0, 1), (1, 2), (2, 0), (2, 3)];
        let (order, cycle) = topo_sort(4, &edges);
        let traced = sim::graph::simulate_topo_sort(4, &edges).result;
        assert_eq!(order, traced.order);
        assert_eq!(cycle, traced.has_cycle);
    }

    #[test]
    fn fast_matches_traced_top_k() {
        let nums = [3, 1, 5, 12, 2, 11];
        assert_eq!(
            heap_top_k(&nums, 3),
            sim::heap_topk::simulate_heap_top_k(&nums, 3).result
        );
    }

    #[test]
    fn fast_matches_traced_union_find() {
        let unions = [(0, 1), (1, 2), (3, 4), (1, 0)];
        assert_eq!(
            union_find(6, &unions),
            sim::dsu::simulate_union_find(6, &unions).result
        );
    }

    #[test]
    fn fast_matches_traced_interval_merge() {
        let intervals = [(1, 3), (2, 6), (8, 10), (15, 18)];
        assert_eq!(
            interval_merge(&intervals),
            sim::intervals::simulate_interval_merge(&intervals).result
        );
    }
}
