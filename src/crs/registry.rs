//! Projection registry
//!
//! This module loads the projection parameter table and provides
//! lookups by EPSG code. The table in crs_projections.toml is the single
//! source of truth for ellipsoid and grid constants; the math engine
//! receives its parameters exclusively from here.

use std::collections::HashMap;
use lazy_static::lazy_static;

use crate::crs::errors::{CrsError, CrsResult};
use crate::crs::projection::CrsProjection;
use crate::gauss::GridParams;

lazy_static! {
    // Parse the TOML table at startup
    static ref REGISTRY: ProjectionRegistry = {
        let content = include_str!("../../crs_projections.toml");
        ProjectionRegistry::from_str(content).unwrap_or_else(|e| {
                eprintln!("Warning: Failed to parse CRS projection definitions: {}", e);
                ProjectionRegistry::default()
            })
    };
}

/// Container for the projection parameter table
#[derive(Debug, Default)]
pub struct ProjectionRegistry {
    // Projections in declaration order (WGS84 first, then EPSG 3006..=3024)
    order: Vec<CrsProjection>,
    // Maps EPSG codes to projection identities
    epsg_index: HashMap<u32, CrsProjection>,
    // Maps projected systems to their grid constants
    grid_params: HashMap<CrsProjection, GridParams>,
}

impl ProjectionRegistry {
    /// Parse the projection table from a TOML string
    ///
    /// Every entry is cross-checked against the CrsProjection enum: the
    /// name must resolve, the EPSG code and geodetic flag must agree, and
    /// non-geodetic entries must carry a complete set of grid constants.
    pub fn from_str(content: &str) -> CrsResult<Self> {
        let toml_value: toml::Value = match content.parse() {
            Ok(value) => value,
            Err(e) => return Err(CrsError::InvalidDefinition(format!("Failed to parse TOML: {}", e))),
        };

        let entries = toml_value.get("projection")
            .and_then(|v| v.as_array())
            .ok_or_else(|| CrsError::InvalidDefinition("Missing [[projection]] entries".to_string()))?;

        let mut registry = ProjectionRegistry::default();

        for entry in entries {
            let name = entry.get("name")
                .and_then(|v| v.as_str())
                .ok_or_else(|| CrsError::InvalidDefinition("Projection entry without a name".to_string()))?;

            let projection = CrsProjection::from_name(name)
                .ok_or_else(|| CrsError::InvalidDefinition(format!("Unknown projection name: {}", name)))?;

            let epsg = entry.get("epsg")
                .and_then(|v| v.as_integer())
                .ok_or_else(|| CrsError::InvalidDefinition(format!("{}: missing epsg code", name)))? as u32;
            if epsg != projection.epsg_number() {
                return Err(CrsError::InvalidDefinition(format!(
                    "{}: epsg code {} does not match expected {}",
                    name, epsg, projection.epsg_number())));
            }

            let geodetic = entry.get("geodetic")
                .and_then(|v| v.as_bool())
                .ok_or_else(|| CrsError::InvalidDefinition(format!("{}: missing geodetic flag", name)))?;
            if geodetic != projection.is_wgs84() {
                return Err(CrsError::InvalidDefinition(format!(
                    "{}: geodetic flag does not match the projection kind", name)));
            }

            if !geodetic {
                let params = Self::read_grid_params(entry, name)?;
                registry.grid_params.insert(projection, params);
            }

            registry.order.push(projection);
            registry.epsg_index.insert(epsg, projection);
        }

        Ok(registry)
    }

    /// Read the grid constants of one non-geodetic entry
    fn read_grid_params(entry: &toml::Value, name: &str) -> CrsResult<GridParams> {
        let field = |key: &str| -> CrsResult<f64> {
            entry.get(key)
                .and_then(|v| v.as_float().or_else(|| v.as_integer().map(|i| i as f64)))
                .ok_or_else(|| CrsError::InvalidDefinition(format!("{}: missing field '{}'", name, key)))
        };

        let inv_flattening = field("inv_flattening")?;

        Ok(GridParams {
            axis: field("axis")?,
            flattening: 1.0 / inv_flattening,
            central_meridian: field("central_meridian")?,
            scale: field("scale")?,
            false_northing: field("false_northing")?,
            false_easting: field("false_easting")?,
        })
    }
}

/// Look up a projection by EPSG code
///
/// # Arguments
/// * `epsg` - EPSG code, e.g. 4326 or 3006
///
/// # Returns
/// The projection identity, or UnknownProjection for codes outside
/// the supported set
pub fn by_epsg(epsg: u32) -> CrsResult<CrsProjection> {
    REGISTRY.epsg_index.get(&epsg)
        .copied()
        .ok_or(CrsError::UnknownProjection(epsg))
}

/// Get all supported projections in stable declaration order
pub fn all() -> Vec<CrsProjection> {
    REGISTRY.order.clone()
}

/// Get the grid constants for a projected system
///
/// The geodetic system has no grid constants; requesting them is a
/// programming error surfaced as InvalidArgument.
pub fn grid_params(projection: CrsProjection) -> CrsResult<&'static GridParams> {
    if projection.is_wgs84() {
        return Err(CrsError::InvalidArgument(format!(
            "{} is geodetic and has no grid parameters", projection.name())));
    }

    REGISTRY.grid_params.get(&projection)
        .ok_or_else(|| CrsError::InvalidDefinition(format!(
            "No grid parameters registered for {}", projection.name())))
}
