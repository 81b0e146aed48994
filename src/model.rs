use std::iter::Sum;
use std::ops::Add;

use approx::abs_diff_eq;
use ordered_float::OrderedFloat;
use strum::EnumCount;

/// Length in meters.
/// Backed by a totally ordered float so lengths can be compared, summed and
/// used as heap keys without losing sub-meter precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Length(OrderedFloat<f64>);

impl Length {
    pub const ZERO: Self = Self::from_meters(0.0);

    pub const fn from_meters(meters: f64) -> Self {
        Self(OrderedFloat(meters))
    }

    pub const fn meters(&self) -> f64 {
        self.0.0
    }
}

impl Add for Length {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sum for Length {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

/// Speed in kilometers per hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Speed(OrderedFloat<f64>);

impl Speed {
    pub const fn from_kmh(kmh: f64) -> Self {
        Self(OrderedFloat(kmh))
    }

    pub const fn kmh(&self) -> f64 {
        self.0.0
    }
}

/// Travel time in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct TravelTime(OrderedFloat<f64>);

impl TravelTime {
    pub const ZERO: Self = Self::from_seconds(0.0);

    pub const fn from_seconds(seconds: f64) -> Self {
        Self(OrderedFloat(seconds))
    }

    pub const fn seconds(&self) -> f64 {
        self.0.0
    }
}

impl Add for TravelTime {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sum for TravelTime {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

/// Scalar cost of traversing an arc, as evaluated by an arc inspector.
/// Depending on the inspector mode it counts meters or seconds; the search
/// algorithms only rely on costs being totally ordered and additive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Cost(OrderedFloat<f64>);

impl Cost {
    pub const ZERO: Self = Self::new(0.0);
    pub const INFINITY: Self = Self::new(f64::INFINITY);

    pub const fn new(value: f64) -> Self {
        Self(OrderedFloat(value))
    }

    pub const fn value(&self) -> f64 {
        self.0.0
    }

    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }
}

impl Add for Cost {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

/// The physical quantity an arc cost stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CostMode {
    /// Costs are lengths in meters ("shortest" routing).
    Distance,
    /// Costs are travel times in seconds ("fastest" routing).
    Time,
}

/// WGS84 coordinate pair of longitude (lon) and latitude (lat) values,
/// in degrees with decamicrodegree resolution (five decimals).
#[derive(Debug, Clone, Copy, Default)]
pub struct Point {
    pub lon: f32,
    pub lat: f32,
}

impl Point {
    pub const fn new(lon: f32, lat: f32) -> Self {
        Self { lon, lat }
    }

    /// Great-circle distance to the target point, using the spherical law of
    /// cosines on a sphere of equatorial radius.
    pub fn distance_to(&self, target: &Point) -> Length {
        const EARTH_RADIUS: f64 = 6_378_137.0;

        let (sin_lat, cos_lat) = f64::from(self.lat).to_radians().sin_cos();
        let (target_sin_lat, target_cos_lat) = f64::from(target.lat).to_radians().sin_cos();
        let cos_lon = f64::from(target.lon - self.lon).to_radians().cos();

        // clamping guards acos against rounding outside [-1, 1]
        let angle = sin_lat * target_sin_lat + cos_lat * target_cos_lat * cos_lon;
        Length::from_meters(EARTH_RADIUS * angle.clamp(-1.0, 1.0).acos())
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        const EPSILON: f32 = 1e-5;
        abs_diff_eq!(self.lon, other.lon, epsilon = EPSILON)
            && abs_diff_eq!(self.lat, other.lat, epsilon = EPSILON)
    }
}

/// Road classification of an arc, based on the importance of the road,
/// from highest (motorway) to lowest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum RoadCategory {
    Motorway = 0,
    Trunk = 1,
    Primary = 2,
    Secondary = 3,
    Tertiary = 4,
    Residential = 5,
    LivingStreet = 6,
    /// Access road to a building, parking lot or similar facility.
    Service = 7,
    Roundabout = 8,
    /// Road or area mainly reserved to pedestrians.
    Pedestrian = 9,
    Cycleway = 10,
    /// Unpaved road for agricultural or forestry traffic.
    Track = 11,
    /// The category is known to exist but fits none of the above.
    Unclassified = 12,
}

impl Default for RoadCategory {
    fn default() -> Self {
        Self::Unclassified
    }
}

/// Kind of traffic an access restriction applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumCount, strum::EnumIter)]
#[repr(u8)]
pub enum AccessMode {
    Foot = 0,
    Bicycle = 1,
    Motorcycle = 2,
    Motorcar = 3,
    HeavyGoods = 4,
    PublicTransport = 5,
}

/// Restriction applied to a single access mode on a road.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum AccessRestriction {
    Allowed = 0,
    Forbidden = 1,
    Private = 2,
    /// Only to reach a destination along the road.
    Destination = 3,
    /// Only for deliveries.
    Delivery = 4,
    /// No restriction information available.
    Unknown = 5,
}

impl Default for AccessRestriction {
    fn default() -> Self {
        Self::Unknown
    }
}

/// Per-mode access restrictions of a road.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessRestrictions([AccessRestriction; AccessMode::COUNT]);

impl Default for AccessRestrictions {
    fn default() -> Self {
        Self([AccessRestriction::Unknown; AccessMode::COUNT])
    }
}

impl AccessRestrictions {
    /// Restrictions applying the same restriction to every mode.
    pub const fn all(restriction: AccessRestriction) -> Self {
        Self([restriction; AccessMode::COUNT])
    }

    /// Returns a copy with the restriction of a single mode replaced.
    #[must_use]
    pub fn with(mut self, mode: AccessMode, restriction: AccessRestriction) -> Self {
        self.0[mode as usize] = restriction;
        self
    }

    pub const fn restriction_for(&self, mode: AccessMode) -> AccessRestriction {
        self.0[mode as usize]
    }

    /// Returns true unless the mode is explicitly forbidden or the road is
    /// private. Destination, delivery and unknown roads stay traversable.
    pub const fn allows(&self, mode: AccessMode) -> bool {
        !matches!(
            self.restriction_for(mode),
            AccessRestriction::Forbidden | AccessRestriction::Private
        )
    }
}

/// Road attributes of an arc that are relevant to routing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoadInfo {
    pub category: RoadCategory,
    /// True if the road can only be traveled in the arc direction.
    pub one_way: bool,
    /// Speed limit of the road; travel times at this speed are the fastest
    /// legally possible on the arc.
    pub maximum_speed: Speed,
    pub access: AccessRestrictions,
}

impl RoadInfo {
    pub fn new(category: RoadCategory, maximum_speed: Speed) -> Self {
        Self {
            category,
            one_way: false,
            maximum_speed,
            access: AccessRestrictions::default(),
        }
    }

    /// Returns a copy with the given access restrictions.
    #[must_use]
    pub fn with_access(mut self, access: AccessRestrictions) -> Self {
        self.access = access;
        self
    }
}
