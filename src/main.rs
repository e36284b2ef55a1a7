//! Dominions 5 server launcher - Entry Point
//!
//! Loads a game settings document and prints the argument string for the
//! Dominions 5 server script.

use log::{error, info};
use std::env;
use std::path::PathBuf;
use std::process;

use dom5_server::Game;
use dom5_server::error::handlers::{EXIT_USAGE, error_exit_code, handle_error};
use dom5_server::utils::setup_logging;

const DEFAULT_GAME_FILE: &str = "game.yaml";

fn main() {
    setup_logging();

    let args: Vec<String> = env::args().skip(1).collect();
    let path = match args.as_slice() {
        [] => PathBuf::from(DEFAULT_GAME_FILE),
        [path] => PathBuf::from(path),
        _ => {
            error!("Too many arguments");
            eprintln!("Usage: dom5-server [{}]", DEFAULT_GAME_FILE);
            process::exit(EXIT_USAGE);
        }
    };

    info!("Preparing server arguments from {}", path.display());

    match Game::load(&path) {
        Ok(game) => println!("{}", game.to_server_args()),
        Err(e) => {
            handle_error(&e);
            process::exit(error_exit_code(&e));
        }
    }
}
