#![allow(dead_code)]

use std::sync::LazyLock;

use routier::{
    AccessMode, AccessRestriction, AccessRestrictions, ArcId, Graph, Length, NodeId, Point,
    RoadCategory, RoadInfo, Speed,
};

pub static NETWORK: LazyLock<Network> = LazyLock::new(Network::build);

// Riverside district, west of the bridge.
pub const MARKET: NodeId = NodeId(0);
pub const HARBOR: NodeId = NodeId(1);
pub const CHAPEL: NodeId = NodeId(2);
pub const THEATER: NodeId = NodeId(3);
pub const BOATHOUSE: NodeId = NodeId(4);

// Hillside district, east of the bridge.
pub const STATION: NodeId = NodeId(5);
pub const MUSEUM: NodeId = NodeId(6);
pub const STADIUM: NodeId = NodeId(7);
pub const FOUNDRY: NodeId = NodeId(8);

// Island without any connection to the mainland.
pub const LIGHTHOUSE: NodeId = NodeId(9);
pub const JETTY: NodeId = NodeId(10);

/// Two road districts joined by a single bridge, with every kind of
/// disambiguation the search has to deal with: parallel arcs of different
/// length and speed, roads closed to cars or to pedestrians, a one-way
/// ring and a disconnected island.
///
/// Every arc is at least as long as the straight line between its
/// endpoints, so goal-directed estimates stay admissible.
pub struct Network {
    pub graph: Graph,
    /// MARKET -> HARBOR, longer but fast (70 km/h).
    pub avenue: ArcId,
    pub avenue_back: ArcId,
    /// MARKET -> HARBOR, parallel to the avenue, short but slow (30 km/h).
    pub service_lane: ArcId,
    pub service_lane_back: ArcId,
    /// MARKET -> CHAPEL.
    pub market_chapel: ArcId,
    /// HARBOR -> THEATER.
    pub harbor_theater: ArcId,
    /// CHAPEL -> THEATER by road.
    pub high_street: ArcId,
    /// CHAPEL -> THEATER on foot, shorter than the high street but closed
    /// to motorized traffic.
    pub passage: ArcId,
    pub passage_back: ArcId,
    /// MARKET -> BOATHOUSE, closed to motorized traffic.
    pub towpath_lower: ArcId,
    /// BOATHOUSE -> HARBOR, closed to motorized traffic.
    pub towpath_upper: ArcId,
    /// HARBOR -> STATION, the only way between the districts.
    pub bridge: ArcId,
    pub bridge_back: ArcId,
    /// STATION -> MUSEUM.
    pub station_museum: ArcId,
    /// MUSEUM -> STADIUM, one-way: the way back runs around the ring.
    pub ring_one_way: ArcId,
    /// STADIUM -> FOUNDRY.
    pub stadium_foundry: ArcId,
    /// FOUNDRY -> STATION.
    pub foundry_station: ArcId,
}

impl Network {
    fn build() -> Self {
        let mut graph = Graph::new("bridgetown");

        let market = graph.add_node(Point::new(1.4400, 43.6000));
        let harbor = graph.add_node(Point::new(1.4430, 43.6000));
        let chapel = graph.add_node(Point::new(1.4400, 43.6020));
        let theater = graph.add_node(Point::new(1.4430, 43.6020));
        let boathouse = graph.add_node(Point::new(1.4420, 43.5990));
        let station = graph.add_node(Point::new(1.4460, 43.6000));
        let museum = graph.add_node(Point::new(1.4460, 43.6020));
        let stadium = graph.add_node(Point::new(1.4490, 43.6020));
        let foundry = graph.add_node(Point::new(1.4490, 43.6000));
        let lighthouse = graph.add_node(Point::new(1.4400, 43.5950));
        let jetty = graph.add_node(Point::new(1.4420, 43.5950));

        let primary = RoadInfo::new(RoadCategory::Primary, Speed::from_kmh(70.0));
        let residential = RoadInfo::new(RoadCategory::Residential, Speed::from_kmh(50.0));
        let secondary = RoadInfo::new(RoadCategory::Secondary, Speed::from_kmh(50.0));
        let service = RoadInfo::new(RoadCategory::Service, Speed::from_kmh(30.0));
        let footway = RoadInfo::new(RoadCategory::Pedestrian, Speed::from_kmh(30.0)).with_access(
            AccessRestrictions::default()
                .with(AccessMode::Motorcar, AccessRestriction::Forbidden)
                .with(AccessMode::Motorcycle, AccessRestriction::Forbidden)
                .with(AccessMode::HeavyGoods, AccessRestriction::Forbidden),
        );
        let one_way_residential = RoadInfo {
            one_way: true,
            ..residential
        };

        let (avenue, avenue_back) =
            graph.add_road(market, harbor, Length::from_meters(300.0), primary);
        let (service_lane, service_lane_back) =
            graph.add_road(market, harbor, Length::from_meters(260.0), service);
        let (market_chapel, _) =
            graph.add_road(market, chapel, Length::from_meters(240.0), residential);
        let (harbor_theater, _) =
            graph.add_road(harbor, theater, Length::from_meters(240.0), residential);
        let (high_street, _) =
            graph.add_road(chapel, theater, Length::from_meters(300.0), residential);
        let (passage, passage_back) =
            graph.add_road(chapel, theater, Length::from_meters(250.0), footway);
        let (towpath_lower, _) =
            graph.add_road(market, boathouse, Length::from_meters(210.0), footway);
        let (towpath_upper, _) =
            graph.add_road(boathouse, harbor, Length::from_meters(150.0), footway);
        let (bridge, bridge_back) =
            graph.add_road(harbor, station, Length::from_meters(260.0), secondary);
        let (station_museum, _) =
            graph.add_road(station, museum, Length::from_meters(240.0), residential);
        let (ring_one_way, none) =
            graph.add_road(museum, stadium, Length::from_meters(260.0), one_way_residential);
        assert!(none.is_none());
        let (stadium_foundry, _) =
            graph.add_road(stadium, foundry, Length::from_meters(240.0), residential);
        let (foundry_station, _) =
            graph.add_road(foundry, station, Length::from_meters(280.0), residential);
        graph.add_road(lighthouse, jetty, Length::from_meters(180.0), residential);

        assert_eq!(
            [market, harbor, chapel, theater, boathouse, station],
            [MARKET, HARBOR, CHAPEL, THEATER, BOATHOUSE, STATION]
        );
        assert_eq!(
            [museum, stadium, foundry, lighthouse, jetty],
            [MUSEUM, STADIUM, FOUNDRY, LIGHTHOUSE, JETTY]
        );

        Self {
            graph,
            avenue,
            avenue_back: avenue_back.unwrap(),
            service_lane,
            service_lane_back: service_lane_back.unwrap(),
            market_chapel,
            harbor_theater,
            high_street,
            passage,
            passage_back: passage_back.unwrap(),
            towpath_lower,
            towpath_upper,
            bridge,
            bridge_back: bridge_back.unwrap(),
            station_museum,
            ring_one_way,
            stadium_foundry,
            foundry_station,
        }
    }
}
