use log::info;

use crate::crs::errors::CrsResult;
use crate::crs::{registry, Coordinate, CrsProjection};
use crate::utils::logger::Logger;

/// Main interface to the SwerefKit library
pub struct SwerefKit {
    logger: Logger,
}

impl SwerefKit {
    /// Create a new SwerefKit instance
    ///
    /// # Arguments
    /// * `log_file` - Optional path to log file, defaults to "swerefkit.log"
    ///
    /// # Returns
    /// A SwerefKit instance or an error if initialization fails
    pub fn new(log_file: Option<&str>) -> CrsResult<Self> {
        let log_path = log_file.unwrap_or("swerefkit.log");
        let logger = Logger::new(log_path)?;
        Ok(SwerefKit { logger })
    }

    /// Transform a coordinate between two supported projections
    ///
    /// # Arguments
    /// * `from_epsg` - EPSG code of the source projection
    /// * `to_epsg` - EPSG code of the target projection
    /// * `x` - Longitude in degrees (WGS84) or easting in meters
    /// * `y` - Latitude in degrees (WGS84) or northing in meters
    ///
    /// # Returns
    /// The coordinate expressed in the target projection, or an error
    /// if either EPSG code is outside the supported set
    pub fn transform(&self, from_epsg: u32, to_epsg: u32, x: f64, y: f64) -> CrsResult<Coordinate> {
        let target = registry::by_epsg(to_epsg)?;
        let source = Coordinate::from_epsg(from_epsg, x, y)?;

        let result = source.transform(target)?;
        info!("Transformed {} to {}", source, result);
        self.logger.log(&format!("{} -> {}", source, result))?;

        Ok(result)
    }

    /// List the supported projections in stable order
    ///
    /// # Returns
    /// Tuples of (EPSG code, projection name)
    pub fn list_projections(&self) -> Vec<(u32, &'static str)> {
        registry::all().iter()
            .map(|p| (p.epsg_number(), p.name()))
            .collect()
    }

    /// Describe a single projection
    ///
    /// # Arguments
    /// * `epsg` - EPSG code of the projection
    ///
    /// # Returns
    /// A human-readable description string or an error for unsupported codes
    pub fn projection_info(&self, epsg: u32) -> CrsResult<String> {
        let projection = registry::by_epsg(epsg)?;

        let mut result = projection.description();
        if projection.is_wgs84() {
            result.push_str("\n  Kind: geodetic (longitude/latitude in decimal degrees)");
        } else {
            let params = registry::grid_params(projection)?;
            result.push_str("\n  Kind: projected (easting/northing in meters)");
            result.push_str(&format!("\n  Central meridian: {}", params.central_meridian));
            result.push_str(&format!("\n  Scale factor: {}", params.scale));
        }

        Ok(result)
    }

    /// Look up a projection identity by EPSG code
    pub fn projection_by_epsg(&self, epsg: u32) -> CrsResult<CrsProjection> {
        registry::by_epsg(epsg)
    }
}
