use std::cmp::Ordering;
use std::collections::BinaryHeap;

use tracing::debug;

use crate::search::{Query, Solution, unpack_path};
use crate::{ArcId, Cost, CostMode, NodeId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct HeapElement {
    /// Cost from origin to this node plus the estimate to the destination.
    estimate: Cost,
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
            .estimate
            .cmp(&self.estimate)
            // breaking ties in a deterministic way
            .then_with(|| other.node.cmp(&self.node))
            .then_with(|| other.cost.cmp(&self.cost))
    }
}

impl PartialOrd for HeapElement {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Computes the cheapest route of the query with a label-setting search
/// guided toward the destination by a great-circle estimate.
///
/// The estimate never exceeds the remaining cost: no route is shorter
/// than the straight line, and time estimates assume the global speed cap
/// of the inspector (they degrade to zero when it has none, falling back
/// to an undirected search). The outcome therefore always matches
/// [`dijkstra::solve`](crate::search::dijkstra::solve), usually after
/// visiting fewer nodes.
pub fn solve<'g>(query: &Query<'g>) -> Solution<'g> {
    let graph = query.graph();
    let inspector = query.inspector();
    let (origin, destination) = (query.origin(), query.destination());

    debug!("Computing cheapest route {origin:?} -> {destination:?}, goal directed");

    let target = graph[destination].point();
    let (mode, cap) = (inspector.mode(), inspector.maximum_speed());
    let estimate_to_goal = move |node: NodeId| {
        let distance = graph[node].point().distance_to(&target);
        match mode {
            CostMode::Distance => Cost::new(distance.meters()),
            CostMode::Time => match cap {
                Some(cap) => Cost::new(distance.meters() * 3.6 / cap.kmh()),
                None => Cost::ZERO,
            },
        }
    };

    // (current) cheapest known cost from origin to each node
    let mut costs = vec![Cost::INFINITY; graph.node_count()];
    costs[origin.0 as usize] = Cost::ZERO;

    // arc reaching each node on the current best known route from origin
    let mut reached_by: Vec<Option<ArcId>> = vec![None; graph.node_count()];

    // priority queue of discovered nodes, keyed by estimated total cost
    let mut frontier = BinaryHeap::from([HeapElement {
        estimate: estimate_to_goal(origin),
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

            let cost = element.cost + arc_cost;
            let node = arc.destination();

            // check if we can follow the current arc to reach the neighbor in a cheaper way
            if cost < costs[node.0 as usize] {
                // Relax: we have now found a better way that we are going to explore
                costs[node.0 as usize] = cost;
                reached_by[node.0 as usize] = Some(arc_id);
                frontier.push(HeapElement {
                    estimate: cost + estimate_to_goal(node),
                    cost,
                    node,
                });
            }
        }
    }

    debug!("No admissible route {origin:?} -> {destination:?}");
    Solution::Infeasible
}
