use tracing::debug;

use crate::search::{Query, Solution, unpack_path};
use crate::{ArcId, Cost};

/// Computes the cheapest route of the query by iterated arc relaxation.
///
/// Every admissible arc is relaxed until a full pass improves no label,
/// or until the number of passes reaches the number of nodes. Slower
/// than the label-setting search but independent of it, and unlike it
/// would stay correct with negative arc costs, which makes it a good
/// cross-check.
pub fn solve<'g>(query: &Query<'g>) -> Solution<'g> {
    let graph = query.graph();
    let inspector = query.inspector();
    let (origin, destination) = (query.origin(), query.destination());

    debug!("Relaxing arcs for cheapest route {origin:?} -> {destination:?}");

    // (current) cheapest known cost from origin to each node
    let mut costs = vec![Cost::INFINITY; graph.node_count()];
    costs[origin.0 as usize] = Cost::ZERO;

    // arc reaching each node on the current best known route from origin
    let mut reached_by: Vec<Option<ArcId>> = vec![None; graph.node_count()];

    // a cheapest route traverses at most all the nodes once
    for _ in 1..graph.node_count() {
        let mut improved = false;

        for (arc_id, arc) in graph.arcs() {
            if !inspector.is_allowed(arc) {
                continue;
            }

            let reached = costs[arc.origin().0 as usize];
            if !reached.is_finite() {
                continue;
            }

            let cost = reached + inspector.cost(arc);
            let node = arc.destination().0 as usize;
            if cost < costs[node] {
                costs[node] = cost;
                reached_by[node] = Some(arc_id);
                improved = true;
            }
        }

        // quiescent pass: every label is final
        if !improved {
            break;
        }
    }

    let cost = costs[destination.0 as usize];
    if cost.is_finite() {
        Solution::Feasible {
            path: unpack_path(graph, destination, &reached_by),
            cost,
        }
    } else {
        debug!("No admissible route {origin:?} -> {destination:?}");
        Solution::Infeasible
    }
}
