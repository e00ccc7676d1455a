//! Coordinate input parsing utilities
//!
//! Utilities for parsing the coordinate and projection references accepted
//! at the CLI boundary. The core library itself only deals in numeric axis
//! values and projection identities; everything string-shaped lives here.

use log::debug;

use crate::crs::errors::{CrsError, CrsResult};
use crate::crs::registry;
use crate::crs::CrsProjection;

/// Parse a coordinate pair from an "x,y" string
///
/// # Arguments
/// * `coord_str` - Coordinate string in format "x,y", or "lon,lat" for WGS84
///
/// # Returns
/// A tuple (x, y) of the parsed axis values or an error
pub fn parse_coordinate(coord_str: &str) -> CrsResult<(f64, f64)> {
    let parts: Vec<&str> = coord_str.split(',').collect();
    if parts.len() != 2 {
        return Err(CrsError::InvalidArgument(
            "Coordinate must be in format 'x,y' or 'lon,lat' for WGS84".to_string()));
    }

    let x = parts[0].trim().parse::<f64>()
        .map_err(|_| CrsError::InvalidArgument("Invalid x/longitude coordinate".to_string()))?;
    let y = parts[1].trim().parse::<f64>()
        .map_err(|_| CrsError::InvalidArgument("Invalid y/latitude coordinate".to_string()))?;

    debug!("Parsed coordinates: x/lon={}, y/lat={}", x, y);

    Ok((x, y))
}

/// Parse a projection reference from a string (e.g. "EPSG:3006" or "3006")
///
/// # Arguments
/// * `crs_str` - Projection reference, a bare EPSG code or prefixed with "EPSG:"
///
/// # Returns
/// The projection identity, or UnknownProjection / InvalidArgument on bad input
pub fn parse_projection(crs_str: &str) -> CrsResult<CrsProjection> {
    let crs_str = crs_str.trim().to_uppercase();

    if crs_str.starts_with("EPSG:") {
        let epsg_str = crs_str.strip_prefix("EPSG:").unwrap();
        match epsg_str.parse::<u32>() {
            Ok(epsg) => registry::by_epsg(epsg),
            Err(_) => Err(CrsError::InvalidArgument(format!("Invalid EPSG code: {}", epsg_str))),
        }
    } else if let Ok(epsg) = crs_str.parse::<u32>() {
        registry::by_epsg(epsg)
    } else {
        Err(CrsError::InvalidArgument(format!("Unsupported CRS format: {}", crs_str)))
    }
}
