//! Coordinate transformation command
//!
//! This module implements the command for transforming a coordinate
//! from one supported projection to another.

use clap::ArgMatches;
use log::{debug, info};

use crate::commands::command_traits::Command;
use crate::crs::errors::{CrsError, CrsResult};
use crate::crs::{Coordinate, CrsProjection};
use crate::utils::coordinate_utils;
use crate::utils::logger::Logger;

/// Command for transforming a coordinate between projections
pub struct TransformCommand<'a> {
    /// Coordinate string in "x,y" format
    coordinate: String,
    /// Source projection
    from: CrsProjection,
    /// Target projection
    to: CrsProjection,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> TransformCommand<'a> {
    /// Create a new transform command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    ///
    /// # Returns
    /// A new TransformCommand instance or an error
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> CrsResult<Self> {
        let coordinate = args.get_one::<String>("coordinate")
            .ok_or_else(|| CrsError::InvalidArgument("Missing coordinate".to_string()))?
            .clone();

        let from = args.get_one::<String>("from")
            .ok_or_else(|| CrsError::InvalidArgument("Missing source projection (--from)".to_string()))?;
        let to = args.get_one::<String>("to")
            .ok_or_else(|| CrsError::InvalidArgument("Missing target projection (--to)".to_string()))?;

        Ok(TransformCommand {
            coordinate,
            from: coordinate_utils::parse_projection(from)?,
            to: coordinate_utils::parse_projection(to)?,
            logger,
        })
    }
}

impl<'a> Command for TransformCommand<'a> {
    fn execute(&self) -> CrsResult<()> {
        debug!("Transforming '{}' from {} to {}",
               self.coordinate, self.from.description(), self.to.description());

        let (x, y) = coordinate_utils::parse_coordinate(&self.coordinate)?;
        let source = Coordinate::new(self.from, x, y);
        let result = source.transform(self.to)?;

        info!("{}", result);
        self.logger.log(&format!("{} -> {}", source, result))?;

        Ok(())
    }
}
