//! Projection listing command
//!
//! This module implements the command for listing the supported
//! coordinate reference systems.

use clap::ArgMatches;
use log::info;

use crate::commands::command_traits::Command;
use crate::crs::errors::CrsResult;
use crate::crs::registry;
use crate::utils::logger::Logger;

/// Command for listing the supported projections
pub struct ListCommand<'a> {
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> ListCommand<'a> {
    /// Create a new list command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    pub fn new(_args: &ArgMatches, logger: &'a Logger) -> CrsResult<Self> {
        Ok(ListCommand { logger })
    }

    /// Classify a projection into its family name for display
    fn family(projection: &crate::crs::CrsProjection) -> &'static str {
        if projection.is_wgs84() {
            "geodetic"
        } else if projection.is_sweref99() {
            "SWEREF99"
        } else {
            "RT90"
        }
    }
}

impl<'a> Command for ListCommand<'a> {
    fn execute(&self) -> CrsResult<()> {
        let projections = registry::all();

        info!("Supported projections ({}):", projections.len());
        for projection in &projections {
            info!("  EPSG:{} {} ({})",
                  projection.epsg_number(), projection.name(), Self::family(projection));
        }

        let rows: Vec<(u32, &str, &str)> = projections.iter()
            .map(|p| (p.epsg_number(), p.name(), Self::family(p)))
            .collect();
        self.logger.print_projection_table(&rows)?;

        Ok(())
    }
}
