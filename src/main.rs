use clap::{Arg, Command as ClapCommand, ArgAction};
use std::process;
use log::error;

// Import from your library
use swerefkit::utils::logger::Logger;
use swerefkit::commands::{CommandFactory, SwerefkitCommandFactory};

fn main() {
    let matches = ClapCommand::new("SwerefKit")
        .version("1.0")
        .author("Maurice Schilpp")
        .about("Transform coordinates between Swedish coordinate reference systems")
        .arg(
            Arg::new("coordinate")
                .help("Coordinate to transform in 'x,y' format ('lon,lat' for WGS84)")
                .index(1),
        )
        .arg(
            Arg::new("from")
                .short('f')
                .long("from")
                .help("Source projection EPSG code (e.g. 4326 or EPSG:4326)")
                .value_name("CODE")
                .required(false),
        )
        .arg(
            Arg::new("to")
                .short('t')
                .long("to")
                .help("Target projection EPSG code (e.g. 3006 or EPSG:3006)")
                .value_name("CODE")
                .required(false),
        )
        .arg(
            Arg::new("list")
                .short('l')
                .long("list")
                .help("List the supported projections")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("info")
                .short('i')
                .long("info")
                .help("Show registry details for a projection")
                .value_name("CODE")
                .required(false),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let log_file = "swerefkit.log";
    let logger = match Logger::new(log_file) {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Error initializing logger: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = Logger::init_global_logger("swerefkit-global.log") {
        eprintln!("Error setting up global logger: {}", e);
        process::exit(1);
    }

    let factory = SwerefkitCommandFactory::new();

    let command_result = factory.create_command(&matches, &logger);
    match command_result {
        Ok(command) => {
            if let Err(e) = command.execute() {
                error!("Command execution error: {}", e);
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        Err(e) => {
            error!("Failed to create command: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
}
