//! Tests for the coordinate value type

extern crate std;

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::crs::errors::CrsError;
use crate::crs::{Coordinate, CrsProjection};

const STOCKHOLM_LON: f64 = 18.059196;
const STOCKHOLM_LAT: f64 = 59.330231;

fn hash_of(coordinate: &Coordinate) -> u64 {
    let mut hasher = DefaultHasher::new();
    coordinate.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn test_create_coordinate_by_epsg_number() {
    let coordinate = Coordinate::from_epsg(3006, 20.0, 60.0).unwrap();
    std::assert_eq!(coordinate.projection(), CrsProjection::Sweref99Tm);
    std::assert_eq!(coordinate.x(), 20.0);
    std::assert_eq!(coordinate.y(), 60.0);
}

#[test]
fn test_create_coordinate_by_projection() {
    let coordinate = Coordinate::new(CrsProjection::Sweref99Tm, 22.5, 62.5);
    std::assert_eq!(coordinate.projection().epsg_number(), 3006);
    std::assert_eq!(coordinate.x(), 22.5);
    std::assert_eq!(coordinate.y(), 62.5);
    std::assert_eq!(coordinate.longitude(), 22.5);
    std::assert_eq!(coordinate.latitude(), 62.5);
}

#[test]
fn test_create_coordinate_with_unknown_epsg_fails() {
    let result = Coordinate::from_epsg(999999, 0.0, 0.0);
    std::assert!(matches!(result, Err(CrsError::UnknownProjection(999999))));
}

#[test]
fn test_equality() {
    let coordinate_1 = Coordinate::new(CrsProjection::Wgs84, STOCKHOLM_LON, STOCKHOLM_LAT);
    let coordinate_2 = Coordinate::new(CrsProjection::Wgs84, STOCKHOLM_LON, STOCKHOLM_LAT);
    std::assert_eq!(coordinate_1, coordinate_2);
    std::assert_eq!(hash_of(&coordinate_1), hash_of(&coordinate_2));

    // Adding 1e-15 to values of this magnitude rounds back to the very
    // same doubles, so the coordinates stay equal. This is representation
    // behavior, not an equality tolerance.
    let delta = 0.000000000000001;
    let coordinate_3 = Coordinate::new(
        CrsProjection::Wgs84,
        STOCKHOLM_LON + delta,
        STOCKHOLM_LAT + delta,
    );
    std::assert_eq!(coordinate_1, coordinate_3);
    std::assert_eq!(hash_of(&coordinate_1), hash_of(&coordinate_3));

    // One decimal further the doubles differ, and equality is exact
    // structural comparison with no epsilon, so they are unequal.
    let delta = delta * 10.0;
    let coordinate_4 = Coordinate::new(
        CrsProjection::Wgs84,
        STOCKHOLM_LON + delta,
        STOCKHOLM_LAT + delta,
    );
    std::assert_ne!(coordinate_1, coordinate_4);
    std::assert_ne!(hash_of(&coordinate_1), hash_of(&coordinate_4));
}

#[test]
fn test_equality_requires_matching_projection() {
    let wgs84 = Coordinate::new(CrsProjection::Wgs84, 20.0, 60.0);
    let sweref = Coordinate::new(CrsProjection::Sweref99Tm, 20.0, 60.0);
    std::assert_ne!(wgs84, sweref);
}

#[test]
fn test_to_string() {
    let coordinate = Coordinate::new(CrsProjection::Sweref991800, 153369.673, 6579457.649);
    std::assert_eq!(
        coordinate.to_string(),
        "Coordinate [ X: 153369.673 , Y: 6579457.649 , CRS: SWEREF_99_18_00 ]"
    );

    let coordinate_2 = Coordinate::new(CrsProjection::Wgs84, 18.059196, 59.330231);
    std::assert_eq!(
        coordinate_2.to_string(),
        "Coordinate [ Longitude: 18.059196 , Latitude: 59.330231 , CRS: WGS84 ]"
    );

    // Now testing the same coordinate as above but with a custom
    // formatting implementation. The hook is process-wide, so the
    // override and the reset stay within this single test.
    Coordinate::set_formatter(my_custom_format);
    std::assert_eq!(coordinate_2.to_string(), "59.330231 , 18.059196");

    Coordinate::reset_formatter();
    std::assert_eq!(
        coordinate_2.to_string(),
        "Coordinate [ Longitude: 18.059196 , Latitude: 59.330231 , CRS: WGS84 ]"
    );
}

fn my_custom_format(coordinate: &Coordinate) -> String {
    format!("{} , {}", coordinate.latitude(), coordinate.longitude())
}
