use thiserror::Error;

use crate::NodeId;

/// Error raised when a route cannot be assembled into a valid path.
///
/// Note that a feasible query with no admissible route is not an error:
/// the search algorithms report it as an infeasible solution.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum InvalidRouteError {
    #[error("Route does not contain any node")]
    NoNodes,
    #[error("No arc connects node {origin:?} to node {destination:?}")]
    NotConnected { origin: NodeId, destination: NodeId },
    #[error("Cannot concatenate an empty sequence of paths")]
    EmptyConcatenation,
    #[error("Paths from different graphs cannot be concatenated: expected {expected:?}, found {found:?}")]
    GraphMismatch { expected: String, found: String },
    #[error("Path {index} breaks the arc chain of the concatenation")]
    NotChained { index: usize },
}

/// Error raised when a query names a node the graph does not contain.
#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
#[error("Node {0:?} does not belong to the graph")]
pub struct UnknownNodeError(pub NodeId);
