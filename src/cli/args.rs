//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `report`: File every FIXME in the tracked files as an issue
//! - `scan`: List the FIXMEs without filing anything
//! - `cache`: Inspect or reset the record of filed issues
//! - `init`: Initialize fixit configuration file

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
            Some(Command::Report(cmd)) => cmd.common.verbose,
            Some(Command::Scan(cmd)) => cmd.common.verbose,
            Some(Command::Cache(CacheCommand::List(common)))
            | Some(Command::Cache(CacheCommand::Clear(common))) => common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Any directory inside the git working tree
    #[arg(long, default_value = ".")]
    pub path: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct ReportArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// GitHub username (requires --password)
    #[arg(short, long, env = "FIXIT_USERNAME")]
    pub username: Option<String>,

    /// GitHub password or personal access token (requires --username)
    #[arg(short, long, env = "FIXIT_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,
}

#[derive(Debug, Args)]
pub struct ScanArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum CacheCommand {
    /// List the issues already filed
    List(CommonArgs),
    /// Forget every filed issue so the next report files them again
    Clear(CommonArgs),
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// File FIXME comments from tracked files as GitHub issues
    Report(ReportArgs),
    /// List FIXME comments without filing them
    Scan(ScanArgs),
    /// Inspect or clear the cache of filed issues
    #[command(subcommand)]
    Cache(CacheCommand),
    /// Initialize a new .fixitrc.json configuration file
    Init,
}
