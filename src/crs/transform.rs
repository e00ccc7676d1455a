//! Coordinate transformation routing
//!
//! The router decides and executes the conversion path between any two
//! supported projections. Every projected-to-projected conversion is
//! decomposed into two single steps through geodetic WGS84; only the six
//! single-step direction pairs are ever computed directly.

use log::debug;

use crate::crs::coordinate::Coordinate;
use crate::crs::errors::CrsResult;
use crate::crs::projection::CrsProjection;
use crate::crs::registry;
use crate::gauss;

/// Transformer for converting coordinates between the supported systems
pub struct CrsTransformer;

impl CrsTransformer {
    /// Transform a coordinate to a target projection
    ///
    /// # Arguments
    /// * `source` - The coordinate to convert
    /// * `target` - The projection to convert it to
    ///
    /// # Returns
    /// A new coordinate bound to the target projection
    pub fn transform(&self, source: &Coordinate, target: CrsProjection) -> CrsResult<Coordinate> {
        // Identity short-circuit: a no-op transform must not introduce
        // floating-point noise, so the value is returned as-is.
        if source.projection() == target {
            return Ok(*source);
        }

        match (source.projection().is_wgs84(), target.is_wgs84()) {
            // Geodetic to grid: single forward step with the target's constants
            (true, false) => {
                let params = registry::grid_params(target)?;
                let (x, y) = gauss::geodetic_to_grid(source.x(), source.y(), params);
                debug!("Transformed {} ({}, {}) to {} ({}, {})",
                       source.projection().name(), source.x(), source.y(),
                       target.name(), x, y);
                Ok(Coordinate::new(target, x, y))
            },
            // Grid to geodetic: single inverse step with the source's constants
            (false, true) => {
                let params = registry::grid_params(source.projection())?;
                let (longitude, latitude) = gauss::grid_to_geodetic(source.x(), source.y(), params);
                debug!("Transformed {} ({}, {}) to {} ({}, {})",
                       source.projection().name(), source.x(), source.y(),
                       target.name(), longitude, latitude);
                Ok(Coordinate::new(target, longitude, latitude))
            },
            // Two distinct grid systems: pivot through WGS84 as two single
            // steps. The intermediate coordinate is not exposed to callers.
            (false, false) => {
                let wgs84 = self.transform(source, CrsProjection::Wgs84)?;
                self.transform(&wgs84, target)
            },
            // Only one geodetic system exists, so geodetic-to-geodetic is
            // always the identity case handled above
            (true, true) => Ok(*source),
        }
    }
}
