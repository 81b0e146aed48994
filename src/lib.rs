#![doc = include_str!("../README.md")]

mod error;
mod graph;
mod inspector;
mod model;
mod path;
mod search;

pub use error::{InvalidRouteError, UnknownNodeError};
pub use graph::{Arc, ArcId, Graph, Node, NodeId};
pub use inspector::{ArcInspector, Profile};
pub use model::{
    AccessMode, AccessRestriction, AccessRestrictions, Cost, CostMode, Length, Point, RoadCategory,
    RoadInfo, Speed, TravelTime,
};
pub use path::Path;
pub use search::{Query, Solution, astar, bellman_ford, dijkstra};
