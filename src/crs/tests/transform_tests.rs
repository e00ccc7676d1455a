//! Tests for the transformation routing and projection math

extern crate std;

use crate::crs::{registry, Coordinate, CrsProjection, CrsTransformer};

// Stockholm Central Station
const STOCKHOLM_LON: f64 = 18.059196;
const STOCKHOLM_LAT: f64 = 59.330231;

fn stockholm_wgs84() -> Coordinate {
    Coordinate::new(CrsProjection::Wgs84, STOCKHOLM_LON, STOCKHOLM_LAT)
}

/// Grid coordinates of Stockholm Central Station in every projected system
fn stockholm_grid_references() -> Vec<(CrsProjection, f64, f64)> {
    vec![
        (CrsProjection::Sweref99Tm, 674032.357, 6580821.991),
        (CrsProjection::Sweref991200, 494604.690, 6595151.116),
        (CrsProjection::Sweref991330, 409396.217, 6588340.147),
        (CrsProjection::Sweref991500, 324101.998, 6583455.373),
        (CrsProjection::Sweref991630, 238750.424, 6580494.921),
        (CrsProjection::Sweref991800, 153369.673, 6579457.649),
        (CrsProjection::Sweref991415, 366758.045, 6585657.120),
        (CrsProjection::Sweref991545, 281431.616, 6581734.696),
        (CrsProjection::Sweref991715, 196061.940, 6579735.930),
        (CrsProjection::Sweref991845, 110677.129, 6579660.051),
        (CrsProjection::Sweref992015, 25305.238, 6581507.028),
        (CrsProjection::Sweref992145, -60025.629, 6585277.577),
        (CrsProjection::Sweref992315, -145287.219, 6590973.148),
        (CrsProjection::Rt9075GonV, 1884004.100, 6598325.639),
        (CrsProjection::Rt9050GonV, 1756244.287, 6587493.237),
        (CrsProjection::Rt9025GonV, 1628293.886, 6580994.180),
        (CrsProjection::Rt9000GonV, 1500248.374, 6578822.840),
        (CrsProjection::Rt9025GonO, 1372202.721, 6580977.349),
        (CrsProjection::Rt9050GonO, 1244251.702, 6587459.595),
    ]
}

#[test]
fn test_identity_transform_returns_the_exact_value() {
    let geodetic = stockholm_wgs84();
    let unchanged = geodetic.transform(CrsProjection::Wgs84).unwrap();
    std::assert_eq!(unchanged, geodetic);

    let projected = Coordinate::new(CrsProjection::Sweref99Tm, 674032.357, 6580821.991);
    let unchanged = projected.transform(CrsProjection::Sweref99Tm).unwrap();
    std::assert_eq!(unchanged, projected);
}

#[test]
fn test_forward_projection_reference_values() {
    for (projection, expected_x, expected_y) in stockholm_grid_references() {
        let result = stockholm_wgs84().transform(projection).unwrap();
        std::assert!(
            (result.x() - expected_x).abs() < 0.001,
            "{}: x was {}, expected {}", projection.name(), result.x(), expected_x
        );
        std::assert!(
            (result.y() - expected_y).abs() < 0.001,
            "{}: y was {}, expected {}", projection.name(), result.y(), expected_y
        );
    }
}

#[test]
fn test_inverse_projection_reference_value() {
    // Documented example coordinate in SWEREF 99 18 00
    let coordinate = Coordinate::new(CrsProjection::Sweref991800, 153369.673, 6579457.649);
    let result = coordinate.transform(CrsProjection::Wgs84).unwrap();

    std::assert!((result.longitude() - STOCKHOLM_LON).abs() < 1.0e-6);
    std::assert!((result.latitude() - STOCKHOLM_LAT).abs() < 1.0e-6);
}

#[test]
fn test_geodetic_round_trip_through_every_projected_system() {
    for projection in registry::all() {
        if projection.is_wgs84() {
            continue;
        }

        let grid = stockholm_wgs84().transform(projection).unwrap();
        let back = grid.transform(CrsProjection::Wgs84).unwrap();

        std::assert!(
            (back.longitude() - STOCKHOLM_LON).abs() < 1.0e-9,
            "{}: longitude round trip error {}", projection.name(),
            (back.longitude() - STOCKHOLM_LON).abs()
        );
        std::assert!(
            (back.latitude() - STOCKHOLM_LAT).abs() < 1.0e-9,
            "{}: latitude round trip error {}", projection.name(),
            (back.latitude() - STOCKHOLM_LAT).abs()
        );
    }
}

#[test]
fn test_projected_round_trip_through_wgs84() {
    for projection in registry::all() {
        if projection.is_wgs84() {
            continue;
        }

        let grid = stockholm_wgs84().transform(projection).unwrap();
        let back = grid
            .transform(CrsProjection::Wgs84).unwrap()
            .transform(projection).unwrap();

        std::assert!(
            (back.x() - grid.x()).abs() < 1.0e-4,
            "{}: x round trip error {}", projection.name(), (back.x() - grid.x()).abs()
        );
        std::assert!(
            (back.y() - grid.y()).abs() < 1.0e-4,
            "{}: y round trip error {}", projection.name(), (back.y() - grid.y()).abs()
        );
    }
}

#[test]
fn test_projected_to_projected_equals_manual_pivot() {
    let sweref = Coordinate::new(CrsProjection::Sweref99Tm, 674032.357, 6580821.991);

    let direct = sweref.transform(CrsProjection::Rt9025GonV).unwrap();
    let manual = sweref
        .transform(CrsProjection::Wgs84).unwrap()
        .transform(CrsProjection::Rt9025GonV).unwrap();

    // The routed conversion is exactly the two-step composition,
    // down to the last bit
    std::assert_eq!(direct, manual);
    std::assert_eq!(direct.projection(), CrsProjection::Rt9025GonV);
    std::assert!((direct.x() - 1628293.886).abs() < 0.01);
    std::assert!((direct.y() - 6580994.180).abs() < 0.01);
}

#[test]
fn test_transformer_between_all_projection_pairs() {
    let transformer = CrsTransformer;
    let source = stockholm_wgs84();

    for from in registry::all() {
        let in_from = transformer.transform(&source, from).unwrap();
        for to in registry::all() {
            let result = transformer.transform(&in_from, to).unwrap();
            std::assert_eq!(result.projection(), to);
        }
    }
}

#[test]
fn test_numeric_garbage_propagates_instead_of_failing() {
    let coordinate = Coordinate::new(CrsProjection::Wgs84, f64::NAN, f64::NAN);
    let result = coordinate.transform(CrsProjection::Sweref99Tm).unwrap();
    std::assert!(result.x().is_nan());
    std::assert!(result.y().is_nan());
}
