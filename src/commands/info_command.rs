//! Projection info command
//!
//! This module implements the command for displaying the registry
//! metadata of a single projection.

use clap::ArgMatches;
use log::info;

use crate::commands::command_traits::Command;
use crate::crs::errors::{CrsError, CrsResult};
use crate::crs::registry;
use crate::utils::coordinate_utils;
use crate::utils::logger::Logger;

/// Command for displaying details about one projection
pub struct InfoCommand<'a> {
    /// Projection reference string, e.g. "3006" or "EPSG:3006"
    crs: String,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> InfoCommand<'a> {
    /// Create a new info command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> CrsResult<Self> {
        let crs = args.get_one::<String>("info")
            .ok_or_else(|| CrsError::InvalidArgument("Missing projection reference".to_string()))?
            .clone();

        Ok(InfoCommand { crs, logger })
    }
}

impl<'a> Command for InfoCommand<'a> {
    fn execute(&self) -> CrsResult<()> {
        let projection = coordinate_utils::parse_projection(&self.crs)?;

        info!("{}", projection.description());
        if projection.is_wgs84() {
            info!("  Kind: geodetic (longitude/latitude in decimal degrees)");
        } else {
            info!("  Kind: projected (easting/northing in meters)");

            let params = registry::grid_params(projection)?;
            info!("  Semi-major axis: {} m", params.axis);
            info!("  Flattening: {}", params.flattening);
            info!("  Central meridian: {}", params.central_meridian);
            info!("  Scale factor: {}", params.scale);
            info!("  False northing: {} m", params.false_northing);
            info!("  False easting: {} m", params.false_easting);
        }

        self.logger.log(&format!("Displayed info for {}", projection.description()))?;

        Ok(())
    }
}
