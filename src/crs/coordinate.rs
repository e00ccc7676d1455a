//! Coordinate value type
//!
//! A coordinate is an immutable pair of axis values tagged with its
//! projection identity. The numeric values only mean anything together
//! with that tag: longitude/latitude in decimal degrees for WGS84,
//! easting/northing in meters for the grid systems.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::RwLock;
use lazy_static::lazy_static;

use crate::crs::errors::CrsResult;
use crate::crs::projection::CrsProjection;
use crate::crs::registry;
use crate::crs::transform::CrsTransformer;

/// Replacement formatting function for Coordinate::to_string
pub type CoordinateFormatter = fn(&Coordinate) -> String;

lazy_static! {
    // Process-wide formatter override, None means default formatting.
    // Swapping it is atomic per call, but callers that need strict
    // ordering against concurrent formatting must synchronize externally.
    static ref FORMATTER: RwLock<Option<CoordinateFormatter>> = RwLock::new(None);
}

/// A coordinate bound to one of the supported projections
#[derive(Debug, Clone, Copy)]
pub struct Coordinate {
    projection: CrsProjection,
    // Longitude for WGS84, easting for grid systems
    x: f64,
    // Latitude for WGS84, northing for grid systems
    y: f64,
}

impl Coordinate {
    /// Create a coordinate bound to a projection
    ///
    /// # Arguments
    /// * `projection` - The projection the axis values are expressed in
    /// * `x` - Longitude in degrees (WGS84) or easting in meters
    /// * `y` - Latitude in degrees (WGS84) or northing in meters
    pub fn new(projection: CrsProjection, x: f64, y: f64) -> Coordinate {
        Coordinate { projection, x, y }
    }

    /// Create a coordinate from an EPSG code
    ///
    /// # Arguments
    /// * `epsg` - EPSG code of the projection, e.g. 4326 or 3006
    /// * `x` - Longitude in degrees (WGS84) or easting in meters
    /// * `y` - Latitude in degrees (WGS84) or northing in meters
    ///
    /// # Returns
    /// The coordinate, or UnknownProjection for an unsupported code
    pub fn from_epsg(epsg: u32, x: f64, y: f64) -> CrsResult<Coordinate> {
        let projection = registry::by_epsg(epsg)?;
        Ok(Coordinate::new(projection, x, y))
    }

    /// The projection the axis values are expressed in
    pub fn projection(&self) -> CrsProjection {
        self.projection
    }

    /// X axis value: longitude in degrees for WGS84, easting in meters otherwise
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y axis value: latitude in degrees for WGS84, northing in meters otherwise
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Longitude alias for the x axis value
    pub fn longitude(&self) -> f64 {
        self.x
    }

    /// Latitude alias for the y axis value
    pub fn latitude(&self) -> f64 {
        self.y
    }

    /// Transform this coordinate to another projection
    ///
    /// Produces a new coordinate; the source is never modified.
    pub fn transform(&self, target: CrsProjection) -> CrsResult<Coordinate> {
        CrsTransformer.transform(self, target)
    }

    /// Install a process-wide replacement for the default formatting
    ///
    /// Affects all subsequent to_string calls on every coordinate until
    /// reset_formatter is called.
    pub fn set_formatter(formatter: CoordinateFormatter) {
        *FORMATTER.write().unwrap() = Some(formatter);
    }

    /// Restore the default formatting
    pub fn reset_formatter() {
        *FORMATTER.write().unwrap() = None;
    }
}

/// Default formatting implementation
///
/// Two examples of the string produced:
/// "Coordinate [ X: 153369.673 , Y: 6579457.649 , CRS: SWEREF_99_18_00 ]"
/// "Coordinate [ Longitude: 18.059196 , Latitude: 59.330231 , CRS: WGS84 ]"
fn default_format(coordinate: &Coordinate) -> String {
    let is_wgs84 = coordinate.projection.is_wgs84();
    let x_label = if is_wgs84 { "Longitude" } else { "X" };
    let y_label = if is_wgs84 { "Latitude" } else { "Y" };
    format!(
        "Coordinate [ {}: {} , {}: {} , CRS: {} ]",
        x_label, coordinate.x, y_label, coordinate.y, coordinate.projection.name()
    )
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let formatted = match *FORMATTER.read().unwrap() {
            Some(formatter) => formatter(self),
            None => default_format(self),
        };
        write!(f, "{}", formatted)
    }
}

// Equality is exact and structural: the projection tag and the bit
// patterns of both axis values must match. No epsilon tolerance.
impl PartialEq for Coordinate {
    fn eq(&self, other: &Self) -> bool {
        self.projection == other.projection
            && self.x.to_bits() == other.x.to_bits()
            && self.y.to_bits() == other.y.to_bits()
    }
}

impl Eq for Coordinate {}

impl Hash for Coordinate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.projection.hash(state);
        self.x.to_bits().hash(state);
        self.y.to_bits().hash(state);
    }
}
