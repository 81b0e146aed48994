use std::fmt;

use tracing::debug;

use crate::graph::Arc;
use crate::{ArcId, Cost, CostMode, Graph, InvalidRouteError, Length, NodeId, Speed, TravelTime};

/// Ordered sequence of arcs traversed through a graph.
///
/// A path of zero arcs is either fully empty (it has no origin) or a
/// single-node path (an origin without any movement); the two states are
/// distinct, with size 0 and 1 respectively. A path is immutable once
/// constructed, concatenation yields a new path.
#[derive(Clone, PartialEq)]
pub struct Path<'g> {
    graph: &'g Graph,
    origin: Option<NodeId>,
    arcs: Vec<ArcId>,
}

impl fmt::Debug for Path<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Path")
            .field("graph", &self.graph.id())
            .field("origin", &self.origin)
            .field("arcs", &self.arcs)
            .finish()
    }
}

impl<'g> Path<'g> {
    /// Creates an empty path, without origin nor arcs.
    pub const fn empty(graph: &'g Graph) -> Self {
        Self {
            graph,
            origin: None,
            arcs: Vec::new(),
        }
    }

    /// Creates a path containing a single node and no arc.
    /// The node must belong to the graph.
    pub fn from_node(graph: &'g Graph, node: NodeId) -> Self {
        debug_assert!(graph.node(node).is_some());
        Self {
            graph,
            origin: Some(node),
            arcs: Vec::new(),
        }
    }

    /// Creates a path from the given sequence of arcs, which must belong to
    /// the graph. The sequence is not required to be chained: validity can
    /// be queried afterwards with [`Path::is_valid`].
    pub fn from_arcs(graph: &'g Graph, arcs: Vec<ArcId>) -> Self {
        debug_assert!(arcs.iter().all(|&arc| graph.arc(arc).is_some()));
        Self {
            graph,
            origin: arcs.first().map(|&arc| graph[arc].origin()),
            arcs,
        }
    }

    /// Creates a path visiting the given nodes in order, connecting every
    /// consecutive pair with the cheapest arc between them for the given
    /// cost mode. When several parallel arcs are equally cheap the first
    /// one encountered wins, so the choice is deterministic.
    ///
    /// Fails if the sequence is empty or if some consecutive pair of nodes
    /// has no connecting arc. A single node yields a single-node path.
    pub fn from_nodes(
        graph: &'g Graph,
        nodes: &[NodeId],
        mode: CostMode,
    ) -> Result<Self, InvalidRouteError> {
        if nodes.is_empty() {
            return Err(InvalidRouteError::NoNodes);
        }

        let mut arcs = Vec::with_capacity(nodes.len().saturating_sub(1));
        for window in nodes.windows(2) {
            let [origin, destination] = [window[0], window[1]];
            let Some(arc) = cheapest_connecting_arc(graph, origin, destination, mode) else {
                debug!("No arc connects {origin:?} to {destination:?}");
                return Err(InvalidRouteError::NotConnected {
                    origin,
                    destination,
                });
            };
            arcs.push(arc);
        }

        Ok(Self {
            graph,
            origin: nodes.first().copied(),
            arcs,
        })
    }

    /// Concatenates the given paths into a single new path.
    ///
    /// Fails unless all paths come from the same graph, every path is
    /// chained on its own and each one starts at the node where the
    /// previous non-empty path ends. The resulting path is then valid as
    /// well. Empty paths are skipped, single-node paths only constrain
    /// the chaining.
    pub fn concatenate(paths: &[Path<'g>]) -> Result<Path<'g>, InvalidRouteError> {
        let Some(first) = paths.first() else {
            return Err(InvalidRouteError::EmptyConcatenation);
        };
        let graph = first.graph;

        let mut arcs = Vec::with_capacity(paths.iter().map(|path| path.arcs.len()).sum());
        let mut origin = None;
        let mut end = None;

        for (index, path) in paths.iter().enumerate() {
            if path.graph.id() != graph.id() {
                return Err(InvalidRouteError::GraphMismatch {
                    expected: graph.id().to_string(),
                    found: path.graph.id().to_string(),
                });
            }
            if !path.is_valid() {
                return Err(InvalidRouteError::NotChained { index });
            }
            if let Some(start) = path.origin {
                if end.is_some_and(|end| end != start) {
                    return Err(InvalidRouteError::NotChained { index });
                }
                end = Some(path.destination().unwrap_or(start));
                origin = origin.or(Some(start));
            }
            arcs.extend_from_slice(&path.arcs);
        }

        Ok(Self {
            graph,
            origin,
            arcs,
        })
    }

    pub const fn graph(&self) -> &'g Graph {
        self.graph
    }

    /// Origin of the path, absent for an empty path.
    pub const fn origin(&self) -> Option<NodeId> {
        self.origin
    }

    /// Destination of the path, defined only for paths with at least one arc.
    pub fn destination(&self) -> Option<NodeId> {
        self.arcs.last().map(|&arc| self.graph[arc].destination())
    }

    /// True for the fully empty path, false even for a single-node path.
    pub const fn is_empty(&self) -> bool {
        self.origin.is_none()
    }

    /// Number of nodes visited by the path: 0 when empty, 1 for a single
    /// node, otherwise the number of arcs plus one.
    pub fn size(&self) -> usize {
        match (self.origin, self.arcs.len()) {
            (None, _) => 0,
            (Some(_), 0) => 1,
            (Some(_), arcs) => arcs + 1,
        }
    }

    /// Identifiers of the traversed arcs, in traversal order.
    pub fn arc_ids(&self) -> &[ArcId] {
        &self.arcs
    }

    /// Gets an iterator over the traversed arcs, in traversal order.
    pub fn arcs(&self) -> impl Iterator<Item = &'g Arc> {
        let graph = self.graph;
        self.arcs.iter().map(move |&arc| &graph[arc])
    }

    /// Checks that the arcs form a single chained route: starting from the
    /// origin, every arc must leave the node where the previous one ends.
    /// Every adjacent pair is checked. Empty and single-node paths are valid.
    pub fn is_valid(&self) -> bool {
        let Some(origin) = self.origin else {
            return self.arcs.is_empty();
        };

        let mut current = origin;
        for arc in self.arcs() {
            if arc.origin() != current {
                return false;
            }
            current = arc.destination();
        }
        true
    }

    /// Total length of the path in meters.
    pub fn length(&self) -> Length {
        self.arcs().map(Arc::length).sum()
    }

    /// Time needed to travel the whole path at the given constant speed,
    /// ignoring the speed limits of the roads.
    pub fn travel_time(&self, speed: Speed) -> TravelTime {
        self.arcs().map(|arc| arc.travel_time(speed)).sum()
    }

    /// Fastest legal travel time of the path, driving each arc at the
    /// speed limit of its road.
    pub fn minimum_travel_time(&self) -> TravelTime {
        self.arcs().map(Arc::minimum_travel_time).sum()
    }
}

/// Finds the cheapest arc connecting origin to destination for the given
/// cost mode, considering all parallel arcs. Strict comparison keeps the
/// first of several equally cheap arcs.
fn cheapest_connecting_arc(
    graph: &Graph,
    origin: NodeId,
    destination: NodeId,
    mode: CostMode,
) -> Option<ArcId> {
    let mut cheapest: Option<(ArcId, Cost)> = None;

    for (id, arc) in graph.outgoing(origin) {
        if arc.destination() != destination {
            continue;
        }
        let cost = match mode {
            CostMode::Distance => Cost::new(arc.length().meters()),
            CostMode::Time => Cost::new(arc.minimum_travel_time().seconds()),
        };
        if cheapest.is_none_or(|(_, min)| cost < min) {
            cheapest = Some((id, cost));
        }
    }

    cheapest.map(|(arc, _)| arc)
}
