//! Config subcommand handlers.

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts, OutputFormat};
use crate::config::{self, Config};
use crate::error::CliError;
use crate::output;

pub fn handle(args: &ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        ConfigCommand::Show => {
            let cfg = config::load(global)?;
            let text = config::to_toml(&cfg)?;
            let out = output::render_single(
                config::output_format(global, &cfg),
                &cfg,
                |_| text.trim_end().to_string(),
                |_| text.trim_end().to_string(),
            )?;
            output::print_output(&out, global.quiet);
        }

        ConfigCommand::Path => {
            let path = config::active_path(global);
            output::print_output(&path.display().to_string(), global.quiet);
        }

        ConfigCommand::Init { force } => {
            let path = config::active_path(global);
            if path.exists() && !force {
                return Err(CliError::ConfigExists { path });
            }
            config::save_config(&Config::default(), &path)?;
            let msg = match global.output {
                Some(OutputFormat::Plain) => path.display().to_string(),
                _ => format!("Wrote default configuration to {}", path.display()),
            };
            output::print_output(&msg, global.quiet);
        }
    }
    Ok(())
}
