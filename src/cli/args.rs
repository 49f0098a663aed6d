//! CLI argument definitions using clap.
//!
//! This module defines the command-line interface structure for all modscan
//! commands. It uses clap's derive API for declarative argument parsing.
//!
//! ## Commands
//!
//! - `scan`: Scan symbol graphs and extract module metadata
//! - `init`: Initialize modscan configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Scan(cmd)) => cmd.args.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Symbol graph root directory (overrides config file)
    #[arg(long)]
    pub graphs_root: Option<PathBuf>,

    /// Module annotation name to scan for (overrides config file)
    #[arg(long)]
    pub module_annotation: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Parser)]
pub struct ScanArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Print extracted module metadata as JSON for the emitter stage
    #[arg(long)]
    pub json: bool,

    /// Exit with failure when annotated members were skipped
    #[arg(long)]
    pub deny_warnings: bool,
}

#[derive(Debug, Args)]
pub struct ScanCommand {
    /// Graph files to scan (default: discover under the graphs root)
    pub files: Vec<PathBuf>,
    #[command(flatten)]
    pub args: ScanArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Scan symbol graphs and extract dependency-injection module metadata
    Scan(ScanCommand),
    /// Initialize a new .modscanrc.json configuration file
    Init,
}
