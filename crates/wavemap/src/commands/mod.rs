//! Command dispatch: bridges CLI args -> engine calls -> output formatting.

pub mod bands;
pub mod config_cmd;
pub mod materials;
pub mod probe;
pub mod render;

use crate::cli::{Command, GlobalOpts};
use crate::config::Config;
use crate::error::CliError;

/// Dispatch a command that runs against the loaded configuration.
pub fn dispatch(cmd: &Command, global: &GlobalOpts, cfg: &Config) -> Result<(), CliError> {
    match cmd {
        Command::Render(args) => render::handle(args, global, cfg),
        Command::Probe(args) => probe::handle(args, global, cfg),
        Command::Materials => materials::handle(global, cfg),
        Command::Bands => bands::handle(global, cfg),
        // Config and Completions are handled before the config is loaded
        Command::Config(args) => config_cmd::handle(args, global),
        Command::Completions(_) => Ok(()),
    }
}
