use std::ops::Index;

use crate::{Length, Point, RoadInfo, Speed, TravelTime};

/// Uniquely identifies a node that belongs to a graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub u32);

/// Uniquely identifies a directed arc that belongs to a graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ArcId(pub u32);

/// Node of a road network graph.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    point: Point,
    outgoing: Vec<ArcId>,
}

impl Node {
    pub const fn point(&self) -> Point {
        self.point
    }

    /// Arcs leaving this node, in insertion order.
    pub fn outgoing(&self) -> &[ArcId] {
        &self.outgoing
    }
}

/// Directed arc of a road network graph.
/// A two-way road is represented by a pair of arcs, one per direction.
#[derive(Debug, Clone, PartialEq)]
pub struct Arc {
    origin: NodeId,
    destination: NodeId,
    length: Length,
    road: RoadInfo,
}

impl Arc {
    pub const fn origin(&self) -> NodeId {
        self.origin
    }

    pub const fn destination(&self) -> NodeId {
        self.destination
    }

    pub const fn length(&self) -> Length {
        self.length
    }

    pub const fn road(&self) -> RoadInfo {
        self.road
    }

    /// Time needed to traverse the arc at the given speed.
    /// Speeds of zero or less yield an unbounded travel time.
    pub fn travel_time(&self, speed: Speed) -> TravelTime {
        TravelTime::from_seconds(self.length.meters() * 3.6 / speed.kmh())
    }

    /// Time needed to traverse the arc at the speed limit of the road.
    pub fn minimum_travel_time(&self) -> TravelTime {
        self.travel_time(self.road.maximum_speed)
    }
}

/// Directed multigraph of a road network, stored as dense node and arc
/// arenas so that identifiers index directly into them.
///
/// Parallel arcs between the same pair of nodes are allowed and kept in
/// insertion order, which makes the choice among equally cheap parallel
/// arcs deterministic. A graph is immutable once built and can be shared
/// across threads, every search keeps its own private state.
#[derive(Debug, Clone, PartialEq)]
pub struct Graph {
    id: String,
    nodes: Vec<Node>,
    arcs: Vec<Arc>,
}

impl Graph {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            nodes: Vec::new(),
            arcs: Vec::new(),
        }
    }

    /// Identifier of the map this graph was built from.
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn arc_count(&self) -> usize {
        self.arcs.len()
    }

    /// Adds a node and returns its identifier.
    pub fn add_node(&mut self, point: Point) -> NodeId {
        debug_assert!(self.nodes.len() < u32::MAX as usize);
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node {
            point,
            outgoing: Vec::new(),
        });
        id
    }

    /// Adds a single directed arc and returns its identifier.
    ///
    /// # Panics
    ///
    /// Panics if either endpoint does not belong to the graph.
    pub fn add_arc(
        &mut self,
        origin: NodeId,
        destination: NodeId,
        length: Length,
        road: RoadInfo,
    ) -> ArcId {
        debug_assert!(self.arcs.len() < u32::MAX as usize);
        assert!((origin.0 as usize) < self.nodes.len());
        assert!((destination.0 as usize) < self.nodes.len());
        let id = ArcId(self.arcs.len() as u32);
        self.arcs.push(Arc {
            origin,
            destination,
            length,
            road,
        });
        self.nodes[origin.0 as usize].outgoing.push(id);
        id
    }

    /// Adds the arcs representing a road section: the forward arc, plus the
    /// backward arc unless the road is one-way. Returns the forward arc
    /// identifier and the backward one when it exists.
    pub fn add_road(
        &mut self,
        origin: NodeId,
        destination: NodeId,
        length: Length,
        road: RoadInfo,
    ) -> (ArcId, Option<ArcId>) {
        let forward = self.add_arc(origin, destination, length, road);
        let backward = (!road.one_way).then(|| self.add_arc(destination, origin, length, road));
        (forward, backward)
    }

    /// Gets the node, or None if it does not belong to the graph.
    pub fn node(&self, node: NodeId) -> Option<&Node> {
        self.nodes.get(node.0 as usize)
    }

    /// Gets the arc, or None if it does not belong to the graph.
    pub fn arc(&self, arc: ArcId) -> Option<&Arc> {
        self.arcs.get(arc.0 as usize)
    }

    /// Gets an iterator over all the nodes of the graph.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(id, node)| (NodeId(id as u32), node))
    }

    /// Gets an iterator over all the arcs of the graph.
    pub fn arcs(&self) -> impl Iterator<Item = (ArcId, &Arc)> {
        self.arcs
            .iter()
            .enumerate()
            .map(|(id, arc)| (ArcId(id as u32), arc))
    }

    /// Gets an iterator over all the arcs leaving the given node, in
    /// insertion order. Empty if the node does not belong to the graph.
    pub fn outgoing(&self, node: NodeId) -> impl Iterator<Item = (ArcId, &Arc)> {
        self.node(node)
            .map(|node| node.outgoing.as_slice())
            .unwrap_or_default()
            .iter()
            .map(move |&arc| (arc, &self[arc]))
    }
}

impl Index<NodeId> for Graph {
    type Output = Node;

    fn index(&self, node: NodeId) -> &Node {
        &self.nodes[node.0 as usize]
    }
}

impl Index<ArcId> for Graph {
    type Output = Arc;

    fn index(&self, arc: ArcId) -> &Arc {
        &self.arcs[arc.0 as usize]
    }
}
