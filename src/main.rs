/* 3rd party libraries */
use clap::{Arg, Command};
use crossbeam_channel as cbc;
use log::error;
use log::info;
use std::thread::Builder;

/* Custom libraries */
use io::ConsoleInput;
use io::StatusDisplay;
use shared::Input;
use shared::Notification;
use shared::Prompt;
use simulation::Simulation;

/* Modules */
mod config;
mod dispatcher;
mod elevator;
mod io;
mod shared;
mod simulation;

/* Main */
fn main() {
    env_logger::init();

    // Parse command line arguments
    let matches = Command::new("elevator-sim")
        .about("Single-elevator dispatch simulation")
        .arg(
            Arg::new("config")
                .long("config")
                .takes_value(true)
                .default_value("config.toml")
                .help("Path to the configuration file"),
        )
        .arg(
            Arg::new("floors")
                .long("floors")
                .takes_value(true)
                .help("Override the number of floors from the configuration"),
        )
        .get_matches();

    // Load the configuration
    let config_path = matches.value_of("config").unwrap();
    let mut config = unwrap_or_exit!(config::load_config(config_path));

    if let Some(floors) = matches.value_of("floors") {
        let n_floors: u8 = unwrap_or_exit!(floors.parse());
        if n_floors < 1 {
            error!("Invalid floor count {}, must be at least 1", n_floors);
            std::process::exit(1);
        }
        config.simulation.n_floors = n_floors;
    }

    info!(
        "Starting simulation with {} floors, {} steps per cycle",
        config.simulation.n_floors, config.simulation.steps_per_cycle
    );

    // Initialize channels
    let (input_tx, input_rx) = cbc::unbounded::<Input>();
    let (prompt_tx, prompt_rx) = cbc::unbounded::<Prompt>();
    let (notification_tx, notification_rx) = cbc::unbounded::<Notification>();

    // Start the request source
    let console_input = ConsoleInput::new(prompt_rx, input_tx);
    let console_input_thread = Builder::new().name("console_input".into());
    console_input_thread
        .spawn(move || console_input.run())
        .unwrap();

    // Start the status display
    let status_display = StatusDisplay::new(notification_rx);
    let status_display_thread = Builder::new().name("status_display".into());
    status_display_thread
        .spawn(move || status_display.run())
        .unwrap();

    // Run the simulation on the main thread until the user quits
    let simulation = Simulation::new(&config, input_rx, prompt_tx, notification_tx);
    simulation.run();

    println!("Exiting simulation. Goodbye!");
}
