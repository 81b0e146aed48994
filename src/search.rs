use std::fmt;

use crate::{ArcId, ArcInspector, Cost, Graph, NodeId, Path, UnknownNodeError};

/// Immutable request for the cheapest route between two nodes of a graph,
/// under the cost and admissibility policy of an arc inspector.
///
/// The origin may equal the destination: staying put is a feasible route
/// of cost zero. A query borrows the graph without locking it, any number
/// of queries can run concurrently on the same graph.
#[derive(Clone, Copy)]
pub struct Query<'g> {
    graph: &'g Graph,
    origin: NodeId,
    destination: NodeId,
    inspector: &'g dyn ArcInspector,
}

impl fmt::Debug for Query<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Query")
            .field("graph", &self.graph.id())
            .field("origin", &self.origin)
            .field("destination", &self.destination)
            .field("mode", &self.inspector.mode())
            .finish()
    }
}

impl<'g> Query<'g> {
    /// Creates a query after checking that both endpoints belong to the
    /// graph, so that running a search can no longer fail.
    pub fn new(
        graph: &'g Graph,
        origin: NodeId,
        destination: NodeId,
        inspector: &'g dyn ArcInspector,
    ) -> Result<Self, UnknownNodeError> {
        if graph.node(origin).is_none() {
            return Err(UnknownNodeError(origin));
        }
        if graph.node(destination).is_none() {
            return Err(UnknownNodeError(destination));
        }
        Ok(Self {
            graph,
            origin,
            destination,
            inspector,
        })
    }

    pub const fn graph(&self) -> &'g Graph {
        self.graph
    }

    pub const fn origin(&self) -> NodeId {
        self.origin
    }

    pub const fn destination(&self) -> NodeId {
        self.destination
    }

    pub const fn inspector(&self) -> &'g dyn ArcInspector {
        self.inspector
    }
}

/// Outcome of a search.
///
/// An unreachable destination is a legitimate outcome, not an error, and
/// is reported as [`Solution::Infeasible`].
#[derive(Debug, Clone, PartialEq)]
pub enum Solution<'g> {
    /// An optimal route together with its total cost.
    Feasible { path: Path<'g>, cost: Cost },
    /// No admissible route connects the origin to the destination.
    Infeasible,
}

impl<'g> Solution<'g> {
    pub const fn is_feasible(&self) -> bool {
        matches!(self, Self::Feasible { .. })
    }

    pub const fn cost(&self) -> Option<Cost> {
        match self {
            Self::Feasible { cost, .. } => Some(*cost),
            Self::Infeasible => None,
        }
    }

    pub const fn path(&self) -> Option<&Path<'g>> {
        match self {
            Self::Feasible { path, .. } => Some(path),
            Self::Infeasible => None,
        }
    }

    pub fn into_path(self) -> Option<Path<'g>> {
        match self {
            Self::Feasible { path, .. } => Some(path),
            Self::Infeasible => None,
        }
    }
}

/// Unpacks the route that reached the destination by walking the arcs
/// stored per node back to the origin, which is the one node reached by
/// no arc. Reaching the destination without moving yields a single-node
/// path.
pub(crate) fn unpack_path<'g>(
    graph: &'g Graph,
    destination: NodeId,
    reached_by: &[Option<ArcId>],
) -> Path<'g> {
    let mut arcs = vec![];
    let mut next = destination;

    while let Some(arc) = reached_by[next.0 as usize] {
        next = graph[arc].origin();
        arcs.push(arc);
    }
    arcs.reverse();

    if arcs.is_empty() {
        Path::from_node(graph, destination)
    } else {
        Path::from_arcs(graph, arcs)
    }
}

pub mod astar;
pub mod bellman_ford;
pub mod dijkstra;
