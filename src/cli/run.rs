//! Command dispatch for the modscan CLI.

use std::{fs, path::Path};

use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{CommandResult, CommandSummary, InitSummary, scan::scan},
};
use crate::config::{CONFIG_FILE_NAME, default_config_json};

pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Scan(cmd)) => scan(cmd),
        Some(Command::Init) => {
            init()?;
            Ok(CommandResult {
                summary: CommandSummary::Init(InitSummary { created: true }),
                warning_count: 0,
                exit_on_warnings: false,
            })
        }
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}

fn init() -> Result<()> {
    let config_path = Path::new(CONFIG_FILE_NAME);
    if config_path.exists() {
        anyhow::bail!("{} already exists", CONFIG_FILE_NAME);
    }

    fs::write(config_path, default_config_json()?)?;
    Ok(())
}
