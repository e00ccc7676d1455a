//! CLI command implementations
//!
//! This module contains implementations of various commands
//! supported by the CLI application using the Command pattern.

pub mod command_traits;
pub mod transform_command;
pub mod list_command;
pub mod info_command;

pub use command_traits::{Command, CommandFactory};
pub use transform_command::TransformCommand;
pub use list_command::ListCommand;
pub use info_command::InfoCommand;

use clap::ArgMatches;
use crate::utils::logger::Logger;
use crate::crs::errors::CrsResult;

/// Factory for creating command instances based on CLI arguments
///
/// This factory examines the command-line arguments and creates
/// the appropriate command instance for execution.
pub struct SwerefkitCommandFactory;

impl SwerefkitCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        SwerefkitCommandFactory
    }
}

impl<'a> CommandFactory<'a> for SwerefkitCommandFactory {
    fn create_command(&self, args: &ArgMatches, logger: &'a Logger) -> CrsResult<Box<dyn Command + 'a>> {
        // Determine which command to run based on args
        if args.get_flag("list") {
            Ok(Box::new(ListCommand::new(args, logger)?))
        } else if args.contains_id("info") {
            Ok(Box::new(InfoCommand::new(args, logger)?))
        } else {
            // Default to the transform command
            Ok(Box::new(TransformCommand::new(args, logger)?))
        }
    }
}
