use clap::Parser;
use env_logger::Env;
use log::{error, info};
use rolodex::configuration::config::{Args, Config, DEFAULT_LOG_LEVEL};
use rolodex::console::Console;
use rolodex::controller::controller_handler::Controller;
use std::io;

fn main() {
    let args = Args::parse();
    let config = Config::from_args(&args);

    // RUST_LOG overrides the configured level
    let default_level = match &config {
        Ok(c) => c.log_level.clone(),
        Err(_) => DEFAULT_LOG_LEVEL.to_string(),
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level))
        .format_target(false)
        .init();

    let config = config.unwrap_or_else(|e| {
        error!("Unable to load configuration: {}", e);
        std::process::exit(1);
    });
    info!("Configuration loaded, store file is {}", config.store_path.display());

    let stdin = io::stdin();
    let console = Console::new(stdin.lock(), io::stdout());
    let mut controller = Controller::new(config, console).unwrap_or_else(|e| {
        error!("Unable to create a controller instance: {}, exiting...", e);
        std::process::exit(1);
    });

    if let Err(e) = controller.run() {
        error!("Error occured in the record manager: {}, exiting...", e);
        std::process::exit(1);
    }
}
