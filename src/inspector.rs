use crate::graph::Arc;
use crate::{AccessMode, Cost, CostMode, Speed};

/// Cost and admissibility policy of a search, evaluated per arc.
///
/// An inspector decides which arcs are legal to traverse and what each
/// traversal costs. Implementations must be side-effect free: the same
/// inspector can be evaluated concurrently by several searches.
///
/// Costs of allowed arcs must be non-negative. The label-setting search
/// relies on this, its behavior is undefined for negative costs.
pub trait ArcInspector: Sync {
    /// True if the arc can be traversed under this policy.
    fn is_allowed(&self, arc: &Arc) -> bool;

    /// Cost of traversing the arc, for an arc the policy allows.
    fn cost(&self, arc: &Arc) -> Cost;

    /// The physical quantity the costs stand for.
    fn mode(&self) -> CostMode;

    /// Global speed cap applied to time costs, None when uncapped.
    fn maximum_speed(&self) -> Option<Speed> {
        None
    }
}

/// Speed assumed for pedestrians, regardless of the road limits.
const WALKING_SPEED: Speed = Speed::from_kmh(5.0);

/// Stock routing profiles covering the usual vehicle and cost choices.
///
/// Distance profiles weigh arcs by their length in meters, time profiles
/// by their travel time in seconds, driving at the speed limit of each
/// road (capped at walking pace for pedestrians).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
pub enum Profile {
    /// Any road, distance costs.
    ShortestAllRoads,
    /// Roads open to motorcars, distance costs.
    ShortestCarsOnly,
    /// Any road, travel time costs.
    FastestAllRoads,
    /// Roads open to motorcars, travel time costs.
    FastestCarsOnly,
    /// Roads open to pedestrians, travel time costs at walking pace.
    FastestPedestrian,
}

impl ArcInspector for Profile {
    fn is_allowed(&self, arc: &Arc) -> bool {
        match self {
            Self::ShortestAllRoads | Self::FastestAllRoads => true,
            Self::ShortestCarsOnly | Self::FastestCarsOnly => {
                arc.road().access.allows(AccessMode::Motorcar)
            }
            Self::FastestPedestrian => arc.road().access.allows(AccessMode::Foot),
        }
    }

    fn cost(&self, arc: &Arc) -> Cost {
        match self.mode() {
            CostMode::Distance => Cost::new(arc.length().meters()),
            CostMode::Time => {
                let speed = match self.maximum_speed() {
                    Some(cap) => cap.min(arc.road().maximum_speed),
                    None => arc.road().maximum_speed,
                };
                Cost::new(arc.travel_time(speed).seconds())
            }
        }
    }

    fn mode(&self) -> CostMode {
        match self {
            Self::ShortestAllRoads | Self::ShortestCarsOnly => CostMode::Distance,
            Self::FastestAllRoads | Self::FastestCarsOnly | Self::FastestPedestrian => {
                CostMode::Time
            }
        }
    }

    fn maximum_speed(&self) -> Option<Speed> {
        match self {
            Self::FastestPedestrian => Some(WALKING_SPEED),
            _ => None,
        }
    }
}
