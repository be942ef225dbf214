//! Crouch & Jump entry point
//!
//! Sets up logging and settings, starts the input thread, and hands control
//! to the session handler until the player quits.

use std::fs::File;
use std::process::ExitCode;

use crouch_jump::input::spawn_input_forwarder;
use crouch_jump::platform::{TerminalInput, TerminalSurface};
use crouch_jump::{Result, SessionHandler, Settings};

/// Log file override; the terminal is busy drawing the game
const LOG_FILE_VAR: &str = "CROUCH_JUMP_LOG";

fn init_logging() {
    let mut builder = env_logger::Builder::from_default_env();
    if let Some(path) = std::env::var_os(LOG_FILE_VAR) {
        match File::create(&path) {
            Ok(file) => {
                builder.target(env_logger::Target::Pipe(Box::new(file)));
            }
            Err(e) => eprintln!("Cannot open log file {}: {e}", path.to_string_lossy()),
        }
    }
    builder.init();
}

fn run() -> Result<()> {
    let settings = Settings::load()?;
    let input = spawn_input_forwarder(TerminalInput::new())?;

    let mut handler = SessionHandler::new();
    handler.run(&settings, &input, TerminalSurface::open)
}

fn main() -> ExitCode {
    init_logging();
    log::info!("Crouch & Jump starting...");

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
