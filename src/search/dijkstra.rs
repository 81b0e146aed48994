use std::cmp::Ordering;
use std::collections::BinaryHeap;

use tracing::debug;

use crate::search::{Query, Solution, unpack_path};
use crate::{ArcId, Cost, NodeId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct HeapElement {
    /// Current cheapest cost from origin to this node.
    cost: Cost,
    node: NodeId,
}

// The priority queue depends on the implementation of the Ord trait.
// By default std::BinaryHeap is a max heap.
// Explicitly implement the trait so the queue becomes a min heap.
impl Ord for HeapElement {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .cmp(&self.cost)
            // breaking ties in a deterministic way
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for HeapElement {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Computes the cheapest route of the query with a label-setting search.
///
/// A node is settled as soon as it is extracted from the frontier with
/// its minimal tentative cost, which requires all arc costs produced by
/// the inspector to be non-negative.
pub fn solve<'g>(query: &Query<'g>) -> Solution<'g> {
    let graph = query.graph();
    let inspector = query.inspector();
    let (origin, destination) = (query.origin(), query.destination());

    debug!("Computing cheapest route {origin:?} -> {destination:?}");

    // (current) cheapest known cost from origin to each node
    let mut costs = vec![Cost::INFINITY; graph.node_count()];
    costs[origin.0 as usize] = Cost::ZERO;

    // arc reaching each node on the current best known route from origin
    let mut reached_by: Vec<Option<ArcId>> = vec![None; graph.node_count()];

    // priority queue of discovered nodes that may need to be visited
    let mut frontier = BinaryHeap::from([HeapElement {
        cost: Cost::ZERO,
        node: origin,
    }]);

    while let Some(element) = frontier.pop() {
        if element.node == destination {
            return Solution::Feasible {
                path: unpack_path(graph, destination, &reached_by),
                cost: element.cost,
            };
        }

        // check if we already know a cheaper way to get to this node from the origin
        if element.cost > costs[element.node.0 as usize] {
            continue;
        }

        for (arc_id, arc) in graph.outgoing(element.node) {
            if !inspector.is_allowed(arc) {
                continue;
            }

            let arc_cost = inspector.cost(arc);
            debug_assert!(arc_cost >= Cost::ZERO, "negative arc cost {arc_cost:?}");

            let neighbor = HeapElement {
                cost: element.cost + arc_cost,
                node: arc.destination(),
            };

            // check if we can follow the current arc to reach the neighbor in a cheaper way
            if neighbor.cost < costs[neighbor.node.0 as usize] {
                // Relax: we have now found a better way that we are going to explore
                costs[neighbor.node.0 as usize] = neighbor.cost;
                reached_by[neighbor.node.0 as usize] = Some(arc_id);
                frontier.push(neighbor);
            }
        }
    }

    debug!("No admissible route {origin:?} -> {destination:?}");
    Solution::Infeasible
}
