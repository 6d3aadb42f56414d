use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashMap};

use crate::error::{Result, TagpathError};
use crate::graph::types::{Distance, EdgeWeight, PathHop, PathResult};
use crate::graph::GraphProvider;

/// Wrapper for BinaryHeap to use as min-heap (ordered by accumulated cost)
#[derive(Debug, Clone, Copy)]
pub struct HeapEntry {
    pub node_id: u32,
    pub accumulated_cost: f64,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.accumulated_cost
            .total_cmp(&other.accumulated_cost)
            .then_with(|| self.node_id.cmp(&other.node_id))
    }
}

/// Settled search state: best known costs and the edge each vertex was reached by
struct DijkstraState {
    costs: HashMap<u32, f64>,
    predecessors: HashMap<u32, (u32, EdgeWeight)>,
    heap: BinaryHeap<Reverse<HeapEntry>>,
}

impl DijkstraState {
    fn new(source: u32) -> Self {
        let mut state = Self {
            costs: HashMap::from([(source, 0.0)]),
            predecessors: HashMap::new(),
            heap: BinaryHeap::new(),
        };
        state.heap.push(Reverse(HeapEntry {
            node_id: source,
            accumulated_cost: 0.0,
        }));
        state
    }

    fn relax(&mut self, from: u32, to: u32, weight: EdgeWeight, cost: f64) {
        let improves = self.costs.get(&to).is_none_or(|&known| cost < known);
        if improves {
            self.costs.insert(to, cost);
            self.predecessors.insert(to, (from, weight));
            self.heap.push(Reverse(HeapEntry {
                node_id: to,
                accumulated_cost: cost,
            }));
        }
    }
}

/// Run Dijkstra from `source` until `target` is settled.
///
/// Returns the settled state, with `target` present in `costs` only if reachable.
fn search(provider: &dyn GraphProvider, source: u32, target: u32) -> DijkstraState {
    let mut state = DijkstraState::new(source);

    while let Some(Reverse(HeapEntry {
        node_id: current,
        accumulated_cost,
    })) = state.heap.pop()
    {
        // Stale entry superseded by a cheaper one
        if state
            .costs
            .get(&current)
            .is_some_and(|&best| accumulated_cost > best)
        {
            continue;
        }
        if current == target {
            break;
        }

        for (neighbor, weight) in provider.adjacent_edges(current) {
            state.relax(current, neighbor, weight, accumulated_cost + weight.value());
        }
    }

    state
}

fn check_vertices(provider: &dyn GraphProvider, a: u32, b: u32) -> Result<()> {
    for id in [a, b] {
        if !provider.contains(id) {
            return Err(TagpathError::UnknownVertex { id });
        }
    }
    Ok(())
}

/// Search orientation. Both directions run the identical search so float
/// sums come out bit-for-bit equal and the metric stays symmetric.
fn oriented(a: u32, b: u32) -> (u32, u32) {
    (a.min(b), a.max(b))
}

/// Weighted shortest-path distance between two vertices.
///
/// Either id missing from the graph is an [`TagpathError::UnknownVertex`];
/// vertices in different components give [`Distance::NoPath`].
#[tracing::instrument(skip(provider))]
pub fn distance(provider: &dyn GraphProvider, a: u32, b: u32) -> Result<Distance> {
    check_vertices(provider, a, b)?;
    if a == b {
        return Ok(Distance::Reachable(0.0));
    }

    let (source, target) = oriented(a, b);
    let state = search(provider, source, target);
    let result = match state.costs.get(&target) {
        Some(&cost) => Distance::Reachable(cost),
        None => Distance::NoPath,
    };

    tracing::debug!(from = a, to = b, distance = result.value(), "distance");
    Ok(result)
}

/// One minimum-weight path from `a` to `b`, with the hops it takes
#[tracing::instrument(skip(provider))]
pub fn shortest_path(provider: &dyn GraphProvider, a: u32, b: u32) -> Result<PathResult> {
    check_vertices(provider, a, b)?;
    if a == b {
        return Ok(PathResult {
            from: a,
            to: b,
            found: true,
            distance: Some(0.0),
            vertices: vec![a],
            hops: Vec::new(),
        });
    }

    let (source, target) = oriented(a, b);
    let state = search(provider, source, target);
    let Some(&cost) = state.costs.get(&target) else {
        return Ok(PathResult {
            from: a,
            to: b,
            found: false,
            distance: None,
            vertices: Vec::new(),
            hops: Vec::new(),
        });
    };

    let mut hops = reconstruct_path(source, target, &state.predecessors);
    if source != a {
        hops.reverse();
        for hop in &mut hops {
            std::mem::swap(&mut hop.from, &mut hop.to);
        }
    }

    let mut vertices = vec![a];
    vertices.extend(hops.iter().map(|hop| hop.to));

    Ok(PathResult {
        from: a,
        to: b,
        found: true,
        distance: Some(cost),
        vertices,
        hops,
    })
}

/// Walk predecessors back from `to`, returning hops in `from -> to` order
fn reconstruct_path(
    from: u32,
    to: u32,
    predecessors: &HashMap<u32, (u32, EdgeWeight)>,
) -> Vec<PathHop> {
    let mut hops = Vec::new();
    let mut current = to;

    while current != from {
        let Some(&(pred, weight)) = predecessors.get(&current) else {
            break;
        };
        hops.push(PathHop {
            from: pred,
            to: current,
            shared_tags: weight.shared_tags(),
            weight: weight.value(),
        });
        current = pred;
    }

    hops.reverse();
    hops
}

#[cfg(test)]
mod tests;
